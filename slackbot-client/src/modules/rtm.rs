//! `rtm.*` operations.
//!
//! Only the session setup calls are bound here; they return the websocket
//! URL and the initial team state. Driving the websocket itself is out of
//! scope for this client.

use std::sync::Arc;

use slackbot_model::{DynamicModel, IntoRequest, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::models::{Channel, Group, Im, Mpim, SelfInfo, TeamInfo, User};
use crate::namespace::Namespace;

model! {
    /// Request for [`Rtm::connect`].
    pub struct RtmConnectRequest {}
}

model! {
    /// Response for [`Rtm::connect`].
    pub struct RtmConnectResponse {
        ok: Bool as bool,
        /// Websocket URL to connect to.
        url: Str as String,
        team: Model as TeamInfo,
        self_info("self"): Model as SelfInfo,
    }
}

model! {
    /// Request for [`Rtm::start`].
    pub struct RtmStartRequest {
        /// Return only the latest message timestamp per channel.
        simple_latest: Bool as bool,
        /// Skip unread counts.
        no_unreads: Bool as bool,
        /// Return multiparty channels as such instead of emulating them
        /// as groups.
        mpim_aware: Bool as bool,
        /// Exclude latest timestamps entirely. Implies `no_unreads`.
        no_latest: Bool as bool = false,
    }
}

model! {
    /// Response for [`Rtm::start`]: the websocket URL plus a snapshot of
    /// the whole team state.
    pub struct RtmStartResponse {
        ok: Bool as bool,
        url: Str as String,
        team: Model as TeamInfo,
        self_info("self"): Model as SelfInfo,
        users: List as Vec<User>,
        channels: List as Vec<Channel>,
        groups: List as Vec<Group>,
        mpims: List as Vec<Mpim>,
        ims: List as Vec<Im>,
        /// Integration descriptors, shape left to the server.
        bots: List as Vec<DynamicModel>,
    }
}

pub struct Rtm {
    ns: Namespace,
}

impl Rtm {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "rtm"),
        }
    }

    /// Reserves a websocket URL with minimal session state.
    pub async fn connect(
        &self,
        request: impl IntoRequest<RtmConnectRequest>,
    ) -> ClientResult<RtmConnectResponse> {
        self.ns.call("connect", request).await
    }

    /// Reserves a websocket URL and returns the full team snapshot.
    pub async fn start(
        &self,
        request: impl IntoRequest<RtmStartRequest>,
    ) -> ClientResult<RtmStartResponse> {
        self.ns.call("start", request).await
    }
}
