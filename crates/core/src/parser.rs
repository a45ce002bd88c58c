use crate::model::StringConstant;
use crate::naming::constant_case;
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a `const char kName[] = "value";` declaration line. The value
/// group is absent when the assignment wraps to the next line.
static STRING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*const\s+char\s+k(\w+)\[\]\s*=\s*(?:(".*")\s*;)?\s*$"#)
        .expect("Failed to compile string declaration pattern - this is a fatal error")
});

/// Matches the literal line of a wrapped declaration.
static VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^\s*(".*")\s*;\s*$"#)
        .expect("Failed to compile value pattern - this is a fatal error")
});

/// Matches a single `//` comment line.
static COMMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(//.*)$").expect("Failed to compile comment pattern - this is a fatal error")
});

enum ScanState {
    /// Looking for comment runs and declarations.
    Scanning,
    /// Saw `const char kName[] =` with no literal; it must be on the next line.
    AwaitingValue { name: String, comments: String },
}

/// Line-oriented scanner that lifts `const char k...[] = "...";` declarations
/// out of a C++ source file, in declaration order.
///
/// The scanner is tolerant: lines that do not match the declaration grammar
/// are skipped, and a declaration whose literal is separated from the
/// assignment by a blank line is dropped. Nothing it reads can fail the parse.
pub struct StringFileParser {
    state: ScanState,
    comments: Vec<String>,
    strings: Vec<StringConstant>,
}

impl StringFileParser {
    pub fn new() -> Self {
        Self {
            state: ScanState::Scanning,
            comments: Vec::new(),
            strings: Vec::new(),
        }
    }

    /// Parse an ordered sequence of source lines.
    pub fn parse<'a, I>(mut self, lines: I) -> Vec<StringConstant>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines {
            self.scan_line(line);
        }
        self.strings
    }

    fn scan_line(&mut self, line: &str) {
        match std::mem::replace(&mut self.state, ScanState::Scanning) {
            ScanState::AwaitingValue { name, comments } => {
                if let Some(cap) = VALUE_RE.captures(line) {
                    self.strings.push(StringConstant {
                        name,
                        value: cap[1].to_string(),
                        comments,
                    });
                    return;
                }
                // Invalid line break: the declaration is dropped and the
                // current line is examined as a fresh scan line.
                tracing::debug!("Dropping declaration {}: no literal on the next line", name);
                self.comments.clear();
                self.scan_fresh(line);
            }
            ScanState::Scanning => self.scan_fresh(line),
        }
    }

    fn scan_fresh(&mut self, line: &str) {
        if line.trim().is_empty() {
            self.comments.clear();
            return;
        }

        if let Some(cap) = COMMENT_RE.captures(line) {
            self.comments.push(cap[1].to_string());
            return;
        }

        if let Some(cap) = STRING_RE.captures(line) {
            let name = constant_case(&cap[1]);
            let comments = self.comments.join("\n");
            self.comments.clear();
            match cap.get(2) {
                Some(value) => self.strings.push(StringConstant {
                    name,
                    value: value.as_str().to_string(),
                    comments,
                }),
                None => self.state = ScanState::AwaitingValue { name, comments },
            }
            return;
        }

        // Unrelated code. A comment run above it documents that code, not a
        // later declaration.
        self.comments.clear();
    }
}

impl Default for StringFileParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a whole source file.
pub fn parse_source(source: &str) -> Vec<StringConstant> {
    StringFileParser::new().parse(source.lines())
}
