use serde::{Deserialize, Serialize};

/// A single string constant lifted from a C++ source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringConstant {
    /// Constant name in Java convention: the declared identifier with the
    /// `k` prefix stripped and converted to UPPER_SNAKE_CASE.
    pub name: String,
    /// The string literal exactly as written in the source, quotes included.
    pub value: String,
    /// Newline-joined run of `//` comment lines directly above the
    /// declaration. Empty when the declaration had no attached comments.
    pub comments: String,
}

/// Identity of the generated Java class, extracted from a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateClass {
    pub package: String,
    pub class_name: String,
}
