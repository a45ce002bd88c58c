pub mod dump;
pub mod generate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cppstrings",
    version,
    about = "Generate Java string constants from C++ source",
    long_about = "Scans a C++ source file for `const char kName[] = \"value\";` declarations \
                  and renders them into a Java class template, so the two codebases share one \
                  definition of each constant."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a Java class from a C++ source file and a class template
    #[command(
        long_about = "Parses the source file's string constants and the template's package and \
                            class declarations, then writes the rendered class to \
                            <OUT_DIR>/<package path>/<Class>.java."
    )]
    Generate {
        /// Path to the C++ source file to scan
        #[arg(value_name = "SOURCE_FILE")]
        source: PathBuf,
        /// Path to the Java class template
        #[arg(long, value_name = "TEMPLATE_FILE")]
        template: PathBuf,
        /// Root directory for the generated package-qualified .java file
        #[arg(long, value_name = "OUT_DIR")]
        out_dir: PathBuf,
    },
    /// Print the string constants found in a C++ source file as JSON
    Dump {
        /// Path to the C++ source file to scan
        #[arg(value_name = "SOURCE_FILE")]
        source: PathBuf,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    cppstrings_core::logging::init_logging();

    match cli.command {
        Commands::Generate {
            source,
            template,
            out_dir,
        } => generate::run(&source, &template, &out_dir),
        Commands::Dump { source } => dump::run(&source),
    }
}
