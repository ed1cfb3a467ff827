//! Request plugins.
//!
//! Plugins run in registration order on every outgoing request, after the
//! payload has been encoded. They see the resolved operation spec and may
//! add query parameters or headers before the request is sent.

use reqwest::RequestBuilder;

use crate::spec::OperationSpec;

/// Hook applied to each outgoing request.
pub trait RequestPlugin: Send + Sync {
    /// Stable name, used in logging.
    fn name(&self) -> &'static str;

    /// Transforms the request before it is sent.
    fn apply(&self, op: &OperationSpec, req: RequestBuilder) -> RequestBuilder;
}

/// Injects the workspace token as a `token` query parameter on every call.
pub struct QueryToken {
    token: String,
}

impl QueryToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl RequestPlugin for QueryToken {
    fn name(&self) -> &'static str {
        "query_token"
    }

    fn apply(&self, _op: &OperationSpec, req: RequestBuilder) -> RequestBuilder {
        req.query(&[("token", self.token.as_str())])
    }
}
