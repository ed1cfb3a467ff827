//! Client root.
//!
//! [`Bot`] owns the shared core (transport plus plugin chain) behind an
//! [`Arc`] and exposes one public field per API namespace. The namespaces
//! hold weak handles only, so dropping the `Bot` invalidates every
//! outstanding namespace clone instead of keeping the transport alive.

use std::sync::Arc;

use tracing::debug;

use crate::config::BotConfig;
use crate::error::ClientResult;
use crate::modules::{
    Api, Auth, Bots, Channels, Chat, Dnd, Emoji, Files, Groups, Ims, Mpims, OAuth, Pins,
    Reactions, Reminders, Rtm,
};
use crate::plugin::{QueryToken, RequestPlugin};
use crate::transport::Transport;

/// Shared state behind the namespaces.
pub struct ClientCore {
    pub(crate) transport: Transport,
}

/// Typed client for the messaging API.
pub struct Bot {
    core: Arc<ClientCore>,
    pub api: Api,
    pub auth: Auth,
    pub bots: Bots,
    pub channels: Channels,
    pub chat: Chat,
    pub dnd: Dnd,
    pub emoji: Emoji,
    pub files: Files,
    pub groups: Groups,
    pub im: Ims,
    pub mpim: Mpims,
    pub oauth: OAuth,
    pub pins: Pins,
    pub reactions: Reactions,
    pub reminders: Reminders,
    pub rtm: Rtm,
}

impl Bot {
    /// Builds a client with the default configuration and the given token.
    pub fn new(token: impl Into<String>) -> ClientResult<Self> {
        Self::with_config(BotConfig::new(token))
    }

    pub fn with_config(config: BotConfig) -> ClientResult<Self> {
        debug!(base_url = %config.base_url, client = %config.client_name, "building client");
        let plugins: Vec<Box<dyn RequestPlugin>> =
            vec![Box::new(QueryToken::new(config.token))];
        let transport = Transport::new(&config.client_name, config.base_url, plugins)?;
        let core = Arc::new(ClientCore { transport });

        Ok(Self {
            api: Api::new(&core),
            auth: Auth::new(&core),
            bots: Bots::new(&core),
            channels: Channels::new(&core),
            chat: Chat::new(&core),
            dnd: Dnd::new(&core),
            emoji: Emoji::new(&core),
            files: Files::new(&core),
            groups: Groups::new(&core),
            im: Ims::new(&core),
            mpim: Mpims::new(&core),
            oauth: OAuth::new(&core),
            pins: Pins::new(&core),
            reactions: Reactions::new(&core),
            reminders: Reminders::new(&core),
            rtm: Rtm::new(&core),
            core,
        })
    }

    /// Number of live handles to the shared core, counting this one.
    #[must_use]
    pub fn core_handles(&self) -> usize {
        Arc::strong_count(&self.core)
    }
}
