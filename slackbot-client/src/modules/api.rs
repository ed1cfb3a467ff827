//! `api.*` operations.

use std::sync::Arc;

use slackbot_model::{DynamicModel, IntoRequest, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::namespace::Namespace;

model! {
    /// Request for [`Api::test`]. The schema is open: any extra parameter
    /// is accepted and echoed back by the server.
    pub struct ApiTestRequest : open {
        error: Str as String,
    }
}

model! {
    /// Response for [`Api::test`].
    pub struct ApiTestResponse {
        ok: Bool as bool,
        error: Str as String,
        args: Model as DynamicModel,
    }
}

pub struct Api {
    ns: Namespace,
}

impl Api {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "api"),
        }
    }

    /// Checks API connectivity. The server echoes every argument back in
    /// `args`; passing `error` makes it respond with that error instead.
    pub async fn test(
        &self,
        request: impl IntoRequest<ApiTestRequest>,
    ) -> ClientResult<ApiTestResponse> {
        self.ns.call("test", request).await
    }
}
