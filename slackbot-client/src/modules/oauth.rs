//! `oauth.*` operations.

use std::sync::Arc;

use slackbot_model::{IntoRequest, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::namespace::Namespace;

model! {
    /// Request for [`OAuth::access`].
    pub struct OauthAccessRequest {
        client_id: Str as String,
        client_secret: Str as String,
        code: Str as String,
        redirect_uri: Str as String,
    }
}

model! {
    /// Response for [`OAuth::access`].
    pub struct OauthAccessResponse {
        ok: Bool as bool,
        access_token: Str as String,
        scope: Str as String,
    }
}

pub struct OAuth {
    ns: Namespace,
}

impl OAuth {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "oauth"),
        }
    }

    /// Exchanges an authorization code for an access token.
    pub async fn access(
        &self,
        request: impl IntoRequest<OauthAccessRequest>,
    ) -> ClientResult<OauthAccessResponse> {
        self.ns.call("access", request).await
    }
}
