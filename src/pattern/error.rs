use thiserror::Error;

pub type PatternResult<T> = Result<T, PatternError>;
pub type RenderResult<T> = Result<T, RenderError>;

/// Regex-construction failures. Parsing and emission are total; a
/// pathological pattern only surfaces once its source reaches the regex
/// compiler.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("parameter \"{name}\" pattern \"{pattern}\" is not a valid regex: {error}")]
    ParameterPatternInvalid {
        name: String,
        pattern: String,
        error: String,
    },
    #[error("route source \"{route_source}\" is not a valid regex: {error}")]
    RouteRegexInvalid { route_source: String, error: String },
}

/// Validation failures raised while rendering a path from a data map.
/// No partial path is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("expected \"{name}\" to be defined")]
    MissingParameter { name: String },
    #[error("expected \"{name}\" to not be empty")]
    EmptyParameter { name: String },
    #[error("expected \"{name}\" to not repeat, but received {values:?}")]
    UnexpectedRepeat { name: String, values: Vec<String> },
    #[error("expected all \"{name}\" to match \"{pattern}\", but received \"{value}\"")]
    PatternMismatch {
        name: String,
        pattern: String,
        value: String,
    },
}
