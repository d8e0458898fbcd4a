use serde::{Deserialize, Serialize};

/// One unit of a parsed path pattern: verbatim literal text, or a
/// parameter placeholder with its structural context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathToken {
    Literal(String),
    Key(PathKey),
}

impl PathToken {
    pub fn as_key(&self) -> Option<&PathKey> {
        match self {
            PathToken::Key(key) => Some(key),
            PathToken::Literal(_) => None,
        }
    }

    pub fn into_key(self) -> Option<PathKey> {
        match self {
            PathToken::Key(key) => Some(key),
            PathToken::Literal(_) => None,
        }
    }
}

/// A named or auto-numbered parameter. `pattern` is the group-escaped
/// regex a single value must match; `prefix` is the delimiter character
/// consumed out of the literal stream ahead of the parameter, and
/// `delimiter` separates repeated occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathKey {
    pub name: String,
    pub prefix: String,
    pub delimiter: String,
    pub optional: bool,
    pub repeat: bool,
    pub pattern: String,
}
