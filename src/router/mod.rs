mod context;
mod service;

pub use context::{RequestInfo, RouteContext};
pub use service::Router;
