//! `auth.*` operations.

use std::sync::Arc;

use slackbot_model::{IntoRequest, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::namespace::Namespace;

model! {
    /// Request for [`Auth::revoke`].
    pub struct AuthRevokeRequest {
        test: Bool as bool,
    }
}

model! {
    /// Response for [`Auth::revoke`].
    pub struct AuthRevokeResponse {
        ok: Bool as bool,
        revoked: Bool as bool,
    }
}

model! {
    /// Request for [`Auth::test`].
    pub struct AuthTestRequest {}
}

model! {
    /// Response for [`Auth::test`].
    pub struct AuthTestResponse {
        ok: Bool as bool,
        url: Str as String,
        team: Str as String,
        user: Str as String,
        team_id: Str as String,
        user_id: Str as String,
    }
}

pub struct Auth {
    ns: Namespace,
}

impl Auth {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "auth"),
        }
    }

    /// Revokes the active token. Pass `test: true` to dry-run.
    pub async fn revoke(
        &self,
        request: impl IntoRequest<AuthRevokeRequest>,
    ) -> ClientResult<AuthRevokeResponse> {
        self.ns.call("revoke", request).await
    }

    /// Checks authentication and reports who the token belongs to.
    pub async fn test(
        &self,
        request: impl IntoRequest<AuthTestRequest>,
    ) -> ClientResult<AuthTestResponse> {
        self.ns.call("test", request).await
    }
}
