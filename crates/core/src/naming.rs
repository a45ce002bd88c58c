/// Convert a camel-case identifier to an upper-snake-case Java constant name.
///
/// Every uppercase letter after the first character starts a new word. The
/// scan is explicit and ASCII-only so the output never depends on locale.
///
/// # Examples
/// ```ignore
/// constant_case("ASwitch") => "A_SWITCH"
/// constant_case("AStringWithSpace") => "A_STRING_WITH_SPACE"
/// ```
pub fn constant_case(identifier: &str) -> String {
    let mut name = String::with_capacity(identifier.len() * 2);
    for (i, c) in identifier.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            name.push('_');
        }
        name.push(c.to_ascii_uppercase());
    }
    name
}
