use std::sync::LazyLock;

use regex::Regex;

use super::escape::escape_group;
use super::token::{PathKey, PathToken};

// Seven capture slots: escaped char, prefix, name, named capture body,
// anonymous capture body, suffix, bare wildcard.
//
// "/:test(\d+)?" => ["/", "test", "\d+", -, "?", -]
// "/route(\d+)"  => [-, -, -, "\d+", -, -]
// "/*"           => ["/", -, -, -, -, "*"]
static PATH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(\\.)|([/.])?(?:(?::([0-9A-Za-z_]+)(?:\(((?:\\.|[^()])+)\))?|\(((?:\\.|[^()])+)\))([+*?])?|(\*))",
    )
    .expect("master path pattern should compile")
});

/// Scan a path pattern into its token sequence. Total on any input;
/// characters the master pattern does not claim become literal text.
#[tracing::instrument(level = "trace", fields(path = %path))]
pub fn parse_path(path: &str) -> Vec<PathToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut anonymous_index = 0usize;
    let mut scanned = 0usize;

    for captures in PATH_PATTERN.captures_iter(path) {
        let matched = captures.get(0).expect("whole-match group is always present");
        literal.push_str(&path[scanned..matched.start()]);
        scanned = matched.end();

        // An escape sequence contributes its second character verbatim.
        if let Some(escaped) = captures.get(1) {
            literal.push_str(&escaped.as_str()[1..]);
            continue;
        }

        if !literal.is_empty() {
            tokens.push(PathToken::Literal(std::mem::take(&mut literal)));
        }

        let prefix = captures.get(2).map_or("", |group| group.as_str());
        let name = captures.get(3).map(|group| group.as_str());
        let capture = captures.get(4).map(|group| group.as_str());
        let group = captures.get(5).map(|group| group.as_str());
        let suffix = captures.get(6).map(|group| group.as_str());
        let wildcard = captures.get(7).is_some();

        let repeat = matches!(suffix, Some("+") | Some("*"));
        let optional = matches!(suffix, Some("?") | Some("*"));
        let delimiter = if prefix.is_empty() { "/" } else { prefix };

        let pattern = match capture.or(group) {
            Some(body) => body.to_owned(),
            None if wildcard => ".*".to_owned(),
            None => format!("[^{delimiter}]+?"),
        };

        // Anonymous groups are numbered by their own counter, not by the
        // overall parameter position.
        let name = match name {
            Some(name) => name.to_owned(),
            None => {
                let assigned = anonymous_index.to_string();
                anonymous_index += 1;
                assigned
            }
        };

        tokens.push(PathToken::Key(PathKey {
            name,
            prefix: prefix.to_owned(),
            delimiter: delimiter.to_owned(),
            optional,
            repeat,
            pattern: escape_group(&pattern),
        }));
    }

    if scanned < path.len() {
        literal.push_str(&path[scanned..]);
    }
    if !literal.is_empty() {
        tokens.push(PathToken::Literal(literal));
    }

    tokens
}
