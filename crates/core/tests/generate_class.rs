use cppstrings_core::model::StringConstant;
use cppstrings_core::parser;
use cppstrings_core::render::{self, RenderContext};
use cppstrings_core::template;

const SOURCE: &str = r#"
// Copyright 2026 The Authors. All rights reserved.

namespace switches {

// Real comment.
const char kASwitch[] = "a-value";

// Spans
// two lines.
const char kAnotherSwitch[] = "another-value";

}  // namespace switches
"#;

const TEMPLATE: &str = r#"// Copyright {YEAR} The Authors. All rights reserved.

// This file is autogenerated by
//     {SCRIPT_NAME}
// From
//     {SOURCE_PATH}, and
//     {TEMPLATE_PATH}

package my.java.package;

public final class MyClass {{

{NATIVE_STRINGS}

}}
"#;

#[test]
fn single_record_with_comment() {
    let lines = ["// Real comment.", "const char kASwitch[] = \"a-value\";"];
    let strings = parser::StringFileParser::new().parse(lines);
    assert_eq!(
        strings,
        vec![StringConstant {
            name: "A_SWITCH".to_string(),
            value: "\"a-value\"".to_string(),
            comments: "// Real comment.".to_string(),
        }]
    );
}

#[test]
fn source_and_template_to_generated_class() {
    let strings = parser::parse_source(SOURCE);
    assert_eq!(strings.len(), 2);

    let class = template::parse_template_source(TEMPLATE).unwrap();
    assert_eq!(class.package, "my.java.package");
    assert_eq!(class.class_name, "MyClass");

    let ctx = RenderContext {
        script_name: "cppstrings".to_string(),
        source_path: "switches.cc".to_string(),
        template_path: "MyClass.java.tmpl".to_string(),
        year: 2026,
    };
    let generated = render::expand_template(TEMPLATE, &ctx, &strings).unwrap();

    assert!(generated.starts_with("// Copyright 2026 The Authors."));
    assert!(generated.contains("//     cppstrings\n"));
    assert!(generated.contains("//     switches.cc, and\n"));
    assert!(generated.contains("public final class MyClass {\n"));
    assert!(generated.contains("    // Real comment.\n    public static final String A_SWITCH = \"a-value\";"));
    assert!(generated.contains(
        "    // Spans\n    // two lines.\n    public static final String ANOTHER_SWITCH = \"another-value\";"
    ));
    assert!(generated.trim_end().ends_with('}'));
    assert!(!generated.contains("{NATIVE_STRINGS}"));
    assert!(!generated.contains("{YEAR}"));

    let path = render::java_file_path(&class);
    assert_eq!(path, std::path::PathBuf::from("my/java/package/MyClass.java"));
}
