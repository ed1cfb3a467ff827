//! `emoji.*` operations.

use std::collections::BTreeMap;
use std::sync::Arc;

use slackbot_model::{IntoRequest, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::namespace::Namespace;

model! {
    /// Request for [`Emoji::list`].
    pub struct EmojiListRequest {}
}

model! {
    /// Response for [`Emoji::list`].
    pub struct EmojiListResponse {
        ok: Bool as bool,
        /// Map of emoji name to image URL. Aliases use the `alias:`
        /// pseudo-protocol, with the target emoji name after the colon.
        emoji: Map as BTreeMap<String, String>,
    }
}

pub struct Emoji {
    ns: Namespace,
}

impl Emoji {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "emoji"),
        }
    }

    /// Lists the custom emoji of the team.
    pub async fn list(
        &self,
        request: impl IntoRequest<EmojiListRequest>,
    ) -> ClientResult<EmojiListResponse> {
        self.ns.call("list", request).await
    }
}
