use crate::error::{CppStringsError, Result};
use crate::model::TemplateClass;
use once_cell::sync::Lazy;
use regex::Regex;

static PACKAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*package\s+([A-Za-z_][A-Za-z0-9_.]*)\s*;")
        .expect("Failed to compile package pattern - this is a fatal error")
});

static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bclass\s+(\w+)")
        .expect("Failed to compile class pattern - this is a fatal error")
});

/// Extract the package and class identity from a Java class template.
///
/// The first line matching `package <dotted.identifier>;` wins, and the first
/// identifier following the `class` keyword wins, whatever modifiers precede
/// it. Both lines are required: the generated file's path and name are
/// derived from them, so a template missing either is a configuration error.
pub fn parse_template<'a, I>(lines: I) -> Result<TemplateClass>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut package = None;
    let mut class_name = None;

    for line in lines {
        if package.is_none() {
            if let Some(cap) = PACKAGE_RE.captures(line) {
                package = Some(cap[1].to_string());
            }
        }
        if class_name.is_none() {
            if let Some(cap) = CLASS_RE.captures(line) {
                class_name = Some(cap[1].to_string());
            }
        }
        if package.is_some() && class_name.is_some() {
            break;
        }
    }

    let package = package
        .ok_or_else(|| CppStringsError::Template("no `package ...;` line found".to_string()))?;
    let class_name = class_name
        .ok_or_else(|| CppStringsError::Template("no class declaration found".to_string()))?;

    Ok(TemplateClass {
        package,
        class_name,
    })
}

/// Parse a whole template file.
pub fn parse_template_source(source: &str) -> Result<TemplateClass> {
    parse_template(source.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = r#"
// Copyright {YEAR} The Authors. All rights reserved.

// This file is autogenerated by
//     {SCRIPT_NAME}
// From
//     {SOURCE_PATH}, and
//     {TEMPLATE_PATH}

package my.java.package;

public any sort of class MyClass {{

{NATIVE_STRINGS}

}}
"#;

    #[test]
    fn test_template_parsing() {
        let class = parse_template_source(TEMPLATE).unwrap();
        assert_eq!(class.package, "my.java.package");
        assert_eq!(class.class_name, "MyClass");
    }

    #[test]
    fn test_modifiers_before_class_are_ignored() {
        let class =
            parse_template_source("package a.b;\npublic final class Generated {{\n").unwrap();
        assert_eq!(class.class_name, "Generated");
    }

    #[test]
    fn test_missing_package_is_an_error() {
        let err = parse_template_source("public class MyClass {{\n").unwrap_err();
        assert!(err.to_string().contains("package"));
    }

    #[test]
    fn test_missing_class_is_an_error() {
        let err = parse_template_source("package my.java.package;\n").unwrap_err();
        assert!(err.to_string().contains("class"));
    }
}
