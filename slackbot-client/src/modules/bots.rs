//! `bots.*` operations.

use std::sync::Arc;

use slackbot_model::{IntoRequest, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::models::Icons;
use crate::namespace::Namespace;

model! {
    /// A bot user of the team.
    pub struct BotInfo {
        @read_only id: Str as String,
        app_id: Str as String,
        deleted: Bool as bool,
        name: Str as String,
        icons: Model as Icons,
    }
}

model! {
    /// Request for [`Bots::info`].
    pub struct BotsInfoRequest {
        bot: Str as String,
    }
}

model! {
    /// Response for [`Bots::info`].
    pub struct BotsInfoResponse {
        ok: Bool as bool,
        bot: Model as BotInfo,
    }
}

pub struct Bots {
    ns: Namespace,
}

impl Bots {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "bots"),
        }
    }

    /// Resolves the bot user behind a `bot_id` seen on messages.
    pub async fn info(
        &self,
        request: impl IntoRequest<BotsInfoRequest>,
    ) -> ClientResult<BotsInfoResponse> {
        self.ns.call("info", request).await
    }
}
