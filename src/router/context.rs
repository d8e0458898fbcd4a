use smallvec::SmallVec;

use super::service::Matcher;

/// The two accessors the router demands of a request type. The response
/// is an opaque carry-through and needs no interface at all.
pub trait RequestInfo {
    fn method(&self) -> &str;
    fn uri_path(&self) -> &str;
}

type CaptureList = SmallVec<[Option<String>; 4]>;

/// Per-request walker over the router's matcher table. Handlers receive it
/// mutably and may delegate to the next matching entry with [`next`];
/// declining to call it ends the chain. The context is stack-scoped and
/// does not outlive the dispatch call.
///
/// [`next`]: RouteContext::next
pub struct RouteContext<'a, Req, Res> {
    request: &'a Req,
    response: &'a mut Res,
    method: String,
    uri_path: String,
    matchers: &'a [Matcher<Req, Res>],
    cursor: usize,
    captures: CaptureList,
}

impl<'a, Req: RequestInfo, Res> RouteContext<'a, Req, Res> {
    pub(super) fn new(
        request: &'a Req,
        response: &'a mut Res,
        matchers: &'a [Matcher<Req, Res>],
    ) -> Self {
        Self {
            method: request.method().to_owned(),
            uri_path: request.uri_path().to_owned(),
            request,
            response,
            matchers,
            cursor: 0,
            captures: SmallVec::new(),
        }
    }

    pub fn request(&self) -> &Req {
        self.request
    }

    pub fn response(&self) -> &Res {
        self.response
    }

    pub fn response_mut(&mut self) -> &mut Res {
        self.response
    }

    /// Advance the cursor to the next matcher whose method accepts this
    /// request and whose regex matches the URI path, then invoke its
    /// handler. Returns without effect when no further matcher matches.
    pub fn next(&mut self) {
        let matchers = self.matchers;

        while self.cursor < matchers.len() {
            let matcher = &matchers[self.cursor];
            self.cursor += 1;

            if !matcher.accepts_method(&self.method) {
                continue;
            }

            if let Ok(Some(found)) = matcher.regex().captures(&self.uri_path) {
                self.captures = (0..found.len())
                    .map(|index| found.get(index).map(|group| group.as_str().to_owned()))
                    .collect();
                matcher.invoke(self);
                return;
            }
        }
    }

    /// The `index`-th group of the most recent successful match; group 0 is
    /// the whole match. Total: unmatched or out-of-range groups yield "".
    pub fn capture(&self, index: usize) -> &str {
        self.captures
            .get(index)
            .and_then(|group| group.as_deref())
            .unwrap_or("")
    }
}
