mod emitter;
mod error;
mod escape;
mod lexer;
mod options;
mod template;
mod token;

pub use emitter::{RegexSource, path_to_regex, paths_to_regex, tokens_to_regex};
pub use error::{PatternError, PatternResult, RenderError, RenderResult};
pub use escape::{escape_group, escape_string};
pub use lexer::parse_path;
pub use options::{PathOptions, RegexFlags, path_flags};
pub use template::{PathTemplate, SegmentMap, compile_path, encode_uri_component};
pub use token::{PathKey, PathToken};
