use fancy_regex::{Regex, RegexBuilder};

use super::error::{PatternError, PatternResult};
use super::escape::escape_string;
use super::lexer::parse_path;
use super::options::{PathOptions, RegexFlags, path_flags};
use super::token::{PathKey, PathToken};

/// An emitted regex: the raw source plus its flag payload. The source
/// targets the ECMAScript dialect (lookaheads, lazy quantifiers,
/// non-capturing groups).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexSource {
    pub source: String,
    pub flags: RegexFlags,
}

impl RegexSource {
    pub fn new(source: String, flags: RegexFlags) -> Self {
        Self { source, flags }
    }

    /// Compile into a live regex handle, translating the flag payload at
    /// the backend boundary.
    pub fn to_regex(&self) -> PatternResult<Regex> {
        RegexBuilder::new(&self.source)
            .case_insensitive(self.flags.contains(RegexFlags::ICASE))
            .build()
            .map_err(|error| PatternError::RouteRegexInvalid {
                route_source: self.source.clone(),
                error: error.to_string(),
            })
    }
}

/// Convert a token sequence into a regex source.
#[tracing::instrument(level = "trace", skip(tokens), fields(tokens = tokens.len() as u64, options = ?options))]
pub fn tokens_to_regex(tokens: &[PathToken], options: PathOptions) -> RegexSource {
    let strict = options.contains(PathOptions::STRICT);
    let end = options.contains(PathOptions::END);
    let ends_with_slash = matches!(tokens.last(), Some(PathToken::Literal(text)) if text.ends_with('/'));

    let mut route = String::new();

    for token in tokens {
        match token {
            PathToken::Literal(text) => route.push_str(&escape_string(text)),
            PathToken::Key(key) => {
                let prefix = escape_string(&key.prefix);
                let mut capture = key.pattern.clone();

                if key.repeat {
                    capture = format!("{capture}(?:{prefix}{capture})*");
                }

                if key.optional {
                    if !prefix.is_empty() {
                        capture = format!("(?:{prefix}({capture}))?");
                    } else {
                        capture = format!("({capture})?");
                    }
                } else {
                    capture = format!("{prefix}({capture})");
                }

                route.push_str(&capture);
            }
        }
    }

    // In lax mode a trailing slash in the pattern is folded into an
    // optional end-of-input slash, so "/test/" still matches "/test" but
    // "/test/" never matches inside "/test//route" in non-ending mode.
    if !strict {
        if ends_with_slash {
            route.truncate(route.len() - 2);
        }
        route.push_str("(?:\\/(?=$))?");
    }

    if end {
        route.push('$');
    } else if !(strict && ends_with_slash) {
        // Non-ending mode stops capture at a segment boundary without
        // consuming the separator.
        route.push_str("(?=\\/|$)");
    }

    RegexSource::new(format!("^{route}"), path_flags(options))
}

/// Parse a pattern and emit its regex. When `keys` is supplied it receives
/// the parameter tokens in declaration order.
pub fn path_to_regex(
    path: &str,
    keys: Option<&mut Vec<PathKey>>,
    options: PathOptions,
) -> RegexSource {
    let tokens = parse_path(path);
    let source = tokens_to_regex(&tokens, options);

    if let Some(keys) = keys {
        keys.extend(tokens.into_iter().filter_map(PathToken::into_key));
    }

    source
}

/// Union several patterns into one alternation. Every branch keeps its own
/// `^` anchor, so callers must match with semantics that honor per-branch
/// anchoring (full match, or a search that allows `^` at the start only).
/// Keys accumulate flat across branches in order.
pub fn paths_to_regex<S: AsRef<str>>(
    paths: &[S],
    mut keys: Option<&mut Vec<PathKey>>,
    options: PathOptions,
) -> RegexSource {
    let mut pattern = String::from("(?:");

    for (index, path) in paths.iter().enumerate() {
        if index > 0 {
            pattern.push('|');
        }
        pattern.push_str(&path_to_regex(path.as_ref(), keys.as_deref_mut(), options).source);
    }

    pattern.push(')');

    RegexSource::new(pattern, path_flags(options))
}
