//! `im.*` operations.
//!
//! History, mark and replies share their wire shape with the `channels`
//! namespace; those models are aliased rather than redeclared.

use std::sync::Arc;

use slackbot_model::{IntoRequest, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::models::Im;
use crate::namespace::Namespace;

use super::channels::{
    ChannelsHistoryRequest, ChannelsHistoryResponse, ChannelsMarkRequest, ChannelsMarkResponse,
    ChannelsRepliesRequest, ChannelsRepliesResponse,
};

pub type ImHistoryRequest = ChannelsHistoryRequest;
pub type ImHistoryResponse = ChannelsHistoryResponse;
pub type ImMarkRequest = ChannelsMarkRequest;
pub type ImMarkResponse = ChannelsMarkResponse;
pub type ImRepliesRequest = ChannelsRepliesRequest;
pub type ImRepliesResponse = ChannelsRepliesResponse;

model! {
    /// Request for [`Ims::close`].
    pub struct ImCloseRequest {
        channel: Str as String,
    }
}

model! {
    /// Response for [`Ims::close`].
    pub struct ImCloseResponse {
        ok: Bool as bool,
        no_op: Bool as bool = false,
        already_closed: Bool as bool = false,
    }
}

model! {
    /// Request for [`Ims::list`].
    pub struct ImListRequest {}
}

model! {
    /// Response for [`Ims::list`].
    pub struct ImListResponse {
        ok: Bool as bool,
        ims: List as Vec<Im>,
    }
}

model! {
    /// Request for [`Ims::open`].
    pub struct ImOpenRequest {
        /// User to open a direct message channel with.
        user: Str as String,
        /// Return the full channel definition instead of just its ID.
        return_im: Bool as bool = false,
    }
}

model! {
    /// Response for [`Ims::open`].
    pub struct ImOpenResponse {
        ok: Bool as bool,
        no_op: Bool as bool = false,
        already_open: Bool as bool = false,
        channel: Model as Im,
    }
}

pub struct Ims {
    ns: Namespace,
}

impl Ims {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "im"),
        }
    }

    /// Closes a direct message channel.
    pub async fn close(
        &self,
        request: impl IntoRequest<ImCloseRequest>,
    ) -> ClientResult<ImCloseResponse> {
        self.ns.call("close", request).await
    }

    /// Fetches a page of message history.
    pub async fn history(
        &self,
        request: impl IntoRequest<ImHistoryRequest>,
    ) -> ClientResult<ImHistoryResponse> {
        self.ns.call("history", request).await
    }

    /// Lists the caller's direct message channels.
    pub async fn list(
        &self,
        request: impl IntoRequest<ImListRequest>,
    ) -> ClientResult<ImListResponse> {
        self.ns.call("list", request).await
    }

    /// Moves the read cursor.
    pub async fn mark(
        &self,
        request: impl IntoRequest<ImMarkRequest>,
    ) -> ClientResult<ImMarkResponse> {
        self.ns.call("mark", request).await
    }

    /// Opens a direct message channel with a user.
    pub async fn open(
        &self,
        request: impl IntoRequest<ImOpenRequest>,
    ) -> ClientResult<ImOpenResponse> {
        self.ns.call("open", request).await
    }

    /// Fetches a thread of messages.
    pub async fn replies(
        &self,
        request: impl IntoRequest<ImRepliesRequest>,
    ) -> ClientResult<ImRepliesResponse> {
        self.ns.call("replies", request).await
    }
}
