pub mod pattern;
pub mod router;

pub use pattern::{
    PathKey, PathOptions, PathTemplate, PathToken, PatternError, PatternResult, RegexFlags,
    RegexSource, RenderError, RenderResult, SegmentMap, compile_path, parse_path, path_to_regex,
    paths_to_regex, tokens_to_regex,
};
pub use router::{RequestInfo, RouteContext, Router};
