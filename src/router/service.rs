use fancy_regex::Regex;

use crate::pattern::{PathOptions, PatternResult, path_to_regex};

use super::context::{RequestInfo, RouteContext};

type Handler<Req, Res> = Box<dyn Fn(&mut RouteContext<'_, Req, Res>) + Send + Sync>;

/// One entry of the router's ordered table.
pub(super) struct Matcher<Req, Res> {
    method: String,
    regex: Regex,
    handler: Handler<Req, Res>,
}

impl<Req, Res> Matcher<Req, Res> {
    pub(super) fn accepts_method(&self, method: &str) -> bool {
        self.method == method || self.method.is_empty() || self.method == "*"
    }

    pub(super) fn regex(&self) -> &Regex {
        &self.regex
    }

    pub(super) fn invoke(&self, ctx: &mut RouteContext<'_, Req, Res>) {
        (self.handler)(ctx)
    }
}

/// Ordered chain-of-responsibility dispatcher. Matchers are appended
/// during construction and the table is read-only during dispatch, so a
/// shared router may serve concurrent requests once building is done.
pub struct Router<Req, Res> {
    matchers: Vec<Matcher<Req, Res>>,
}

impl<Req: RequestInfo, Res> Router<Req, Res> {
    pub fn new() -> Self {
        Self {
            matchers: Vec::new(),
        }
    }

    /// Append a matcher. The pattern is compiled at default options; a
    /// method of `""` or `"*"` accepts every request method.
    pub fn add<H>(&mut self, method: &str, path: &str, handler: H) -> PatternResult<()>
    where
        H: Fn(&mut RouteContext<'_, Req, Res>) + Send + Sync + 'static,
    {
        let regex = path_to_regex(path, None, PathOptions::default()).to_regex()?;

        self.matchers.push(Matcher {
            method: method.to_owned(),
            regex,
            handler: Box::new(handler),
        });

        Ok(())
    }

    /// Walk the matcher table for one request. When no entry matches, the
    /// walk simply returns; there is no default handler.
    pub fn handle_request(&self, request: &Req, response: &mut Res) {
        tracing::event!(
            tracing::Level::TRACE,
            operation = "dispatch",
            method = %request.method(),
            path = %request.uri_path(),
        );

        let mut ctx = RouteContext::new(request, response, &self.matchers);
        ctx.next();
    }
}

impl<Req: RequestInfo, Res> Default for Router<Req, Res> {
    fn default() -> Self {
        Self::new()
    }
}
