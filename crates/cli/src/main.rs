fn main() {
    if let Err(e) = cppstrings_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
