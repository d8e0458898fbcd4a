/// Escape a string for verbatim inclusion in a regex source.
pub fn escape_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '.' | '+' | '*' | '?' | '=' | '^' | '!' | ':' | '$' | '{' | '}' | '(' | ')' | '['
            | ']' | '|' | '/' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Escape the group-meaningful characters of a parameter subpattern so it
/// can be embedded as a single capturing group.
pub fn escape_group(group: &str) -> String {
    let mut out = String::with_capacity(group.len());
    for ch in group.chars() {
        match ch {
            '=' | '!' | ':' | '$' | '/' | '(' | ')' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
