use cppstrings_core::parser;
use std::fs;
use std::path::Path;

pub fn run(source: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let source_text = fs::read_to_string(source)?;
    let constants = parser::parse_source(&source_text);

    println!("{}", serde_json::to_string_pretty(&constants)?);
    Ok(())
}
