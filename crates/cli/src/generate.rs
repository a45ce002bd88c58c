use chrono::Datelike;
use cppstrings_core::parser;
use cppstrings_core::render::{self, RenderContext};
use cppstrings_core::template;
use std::fs;
use std::path::Path;

/// Name stamped into the generated file's `{SCRIPT_NAME}` header.
const SCRIPT_NAME: &str = "cppstrings";

pub fn run(
    source: &Path,
    template_path: &Path,
    out_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let source_text = fs::read_to_string(source)?;
    let template_text = fs::read_to_string(template_path)?;

    let constants = parser::parse_source(&source_text);
    if constants.is_empty() {
        tracing::warn!("No string constants found in {}", source.display());
    }

    let class = template::parse_template_source(&template_text)?;

    let ctx = RenderContext {
        script_name: SCRIPT_NAME.to_string(),
        source_path: source.display().to_string(),
        template_path: template_path.display().to_string(),
        year: chrono::Utc::now().year(),
    };
    let generated = render::expand_template(&template_text, &ctx, &constants)?;

    let out_path = out_dir.join(render::java_file_path(&class));
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, generated)?;

    tracing::info!(
        "Generated {} ({} constants)",
        out_path.display(),
        constants.len()
    );
    Ok(())
}
