//! Canned-reply transport for exercising the login workflow in tests.

use std::cell::RefCell;

use super::error::LoginError;
use super::transport::AuthTransport;
use super::types::HttpReply;

pub(crate) struct StubTransport {
    reply: Result<HttpReply, LoginError>,
    /// `(url, body)` for every request sent.
    pub(crate) calls: RefCell<Vec<(String, String)>>,
}

impl StubTransport {
    pub(crate) fn replying(status: u16, status_text: &str, body: &str) -> Self {
        Self::with_result(Ok(HttpReply { status, status_text: status_text.to_owned(), body: body.to_owned() }))
    }

    pub(crate) fn failing(err: LoginError) -> Self {
        Self::with_result(Err(err))
    }

    fn with_result(reply: Result<HttpReply, LoginError>) -> Self {
        Self { reply, calls: RefCell::new(Vec::new()) }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait::async_trait(?Send)]
impl AuthTransport for StubTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, LoginError> {
        self.calls.borrow_mut().push((url.to_owned(), body));
        self.reply.clone()
    }
}
