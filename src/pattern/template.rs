use fancy_regex::Regex;
use hashbrown::HashMap;

use super::error::{PatternError, PatternResult, RenderError, RenderResult};
use super::lexer::parse_path;
use super::token::{PathKey, PathToken};

/// Parameter data fed to [`PathTemplate::render`]: each name maps to the
/// list of values it takes, one entry unless the parameter repeats.
pub type SegmentMap = HashMap<String, Vec<String>>;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode a parameter value. The unreserved set is ECMAScript's
/// (`A-Z a-z 0-9 - _ . ! ~ * ' ( )`) but space becomes `+` rather than
/// `%20`. That is application-form encoding, not strict URI-component
/// encoding; it matches the observable output this engine reproduces.
pub fn encode_uri_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for &byte in value.as_bytes() {
        match byte {
            b'0'..=b'9'
            | b'a'..=b'z'
            | b'A'..=b'Z'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(HEX_UPPER[(byte >> 4) as usize] as char);
                out.push(HEX_UPPER[(byte & 0x0f) as usize] as char);
            }
        }
    }
    out
}

#[derive(Debug, Clone)]
enum TemplateToken {
    Literal(String),
    Key { key: PathKey, matcher: Regex },
}

/// The inverse of the regex emitter: renders a concrete path from a data
/// map, validating every encoded value against its parameter's anchored
/// pattern. Immutable after construction; cloning duplicates the compiled
/// matchers.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    tokens: Vec<TemplateToken>,
}

impl PathTemplate {
    /// Compile each parameter's `^pattern$` matcher up front. A key whose
    /// pattern does not form a valid regex is reported here, not at render
    /// time.
    pub fn new(tokens: Vec<PathToken>) -> PatternResult<Self> {
        let mut compiled = Vec::with_capacity(tokens.len());

        for token in tokens {
            match token {
                PathToken::Literal(text) => compiled.push(TemplateToken::Literal(text)),
                PathToken::Key(key) => {
                    let matcher = Regex::new(&format!("^{}$", key.pattern)).map_err(|error| {
                        PatternError::ParameterPatternInvalid {
                            name: key.name.clone(),
                            pattern: key.pattern.clone(),
                            error: error.to_string(),
                        }
                    })?;
                    compiled.push(TemplateToken::Key { key, matcher });
                }
            }
        }

        Ok(Self { tokens: compiled })
    }

    /// Render a path. Literals pass through verbatim; each parameter value
    /// is percent-encoded, validated, and joined with the key's prefix
    /// (first occurrence) or delimiter (repeats). Fails without returning a
    /// partial path.
    pub fn render(&self, data: &SegmentMap) -> RenderResult<String> {
        let mut path = String::new();

        for token in &self.tokens {
            let (key, matcher) = match token {
                TemplateToken::Literal(text) => {
                    path.push_str(text);
                    continue;
                }
                TemplateToken::Key { key, matcher } => (key, matcher),
            };

            let Some(values) = data.get(&key.name) else {
                if key.optional {
                    continue;
                }
                return Err(RenderError::MissingParameter {
                    name: key.name.clone(),
                });
            };

            if !key.repeat && values.len() > 1 {
                return Err(RenderError::UnexpectedRepeat {
                    name: key.name.clone(),
                    values: values.clone(),
                });
            }

            if values.is_empty() {
                if key.optional {
                    continue;
                }
                return Err(RenderError::EmptyParameter {
                    name: key.name.clone(),
                });
            }

            for (index, value) in values.iter().enumerate() {
                let segment = encode_uri_component(value);

                if !matcher.is_match(&segment).unwrap_or(false) {
                    return Err(RenderError::PatternMismatch {
                        name: key.name.clone(),
                        pattern: key.pattern.clone(),
                        value: segment,
                    });
                }

                path.push_str(if index == 0 { &key.prefix } else { &key.delimiter });
                path.push_str(&segment);
            }
        }

        Ok(path)
    }
}

/// Compile a pattern string into a render template.
pub fn compile_path(path: &str) -> PatternResult<PathTemplate> {
    PathTemplate::new(parse_path(path))
}
