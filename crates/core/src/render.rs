use crate::error::{CppStringsError, Result};
use crate::model::{StringConstant, TemplateClass};
use std::path::PathBuf;

/// Values substituted into the template's header placeholders. The caller
/// supplies the year and tool name so this module never touches the clock.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub script_name: String,
    pub source_path: String,
    pub template_path: String,
    pub year: i32,
}

const INDENT: &str = "    ";

/// Format the extracted constants as the body of the generated class: each
/// record becomes its comment lines followed by a `public static final
/// String` field, blocks separated by a blank line.
pub fn format_native_strings(constants: &[StringConstant]) -> String {
    let mut blocks = Vec::with_capacity(constants.len());
    for constant in constants {
        let mut block = String::new();
        for comment in constant.comments.lines() {
            block.push_str(INDENT);
            block.push_str(comment);
            block.push('\n');
        }
        block.push_str(&format!(
            "{}public static final String {} = {};",
            INDENT, constant.name, constant.value
        ));
        blocks.push(block);
    }
    blocks.join("\n\n")
}

/// Substitute the template's placeholders and produce the generated file.
///
/// Recognized placeholders are `{YEAR}`, `{SCRIPT_NAME}`, `{SOURCE_PATH}`,
/// `{TEMPLATE_PATH}` and `{NATIVE_STRINGS}`; `{{` and `}}` escape literal
/// braces. Anything else between braces is a template authoring error.
pub fn expand_template(
    template: &str,
    ctx: &RenderContext,
    constants: &[StringConstant],
) -> Result<String> {
    let native_strings = format_native_strings(constants);

    let mut out = String::with_capacity(template.len() + native_strings.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut token = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(t) => token.push(t),
                        None => {
                            return Err(CppStringsError::Template(format!(
                                "unterminated placeholder `{{{}`",
                                token
                            )));
                        }
                    }
                }
                match token.as_str() {
                    "YEAR" => out.push_str(&ctx.year.to_string()),
                    "SCRIPT_NAME" => out.push_str(&ctx.script_name),
                    "SOURCE_PATH" => out.push_str(&ctx.source_path),
                    "TEMPLATE_PATH" => out.push_str(&ctx.template_path),
                    "NATIVE_STRINGS" => out.push_str(&native_strings),
                    _ => {
                        return Err(CppStringsError::Template(format!(
                            "unknown placeholder `{{{}}}`",
                            token
                        )));
                    }
                }
            }
            '}' => {
                return Err(CppStringsError::Template(
                    "stray `}` outside a placeholder".to_string(),
                ));
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}

/// Package-qualified path of the generated file, relative to the output root.
///
/// `my.java.package` + `MyClass` => `my/java/package/MyClass.java`.
pub fn java_file_path(class: &TemplateClass) -> PathBuf {
    let mut path: PathBuf = class.package.split('.').collect();
    path.push(format!("{}.java", class.class_name));
    path
}
