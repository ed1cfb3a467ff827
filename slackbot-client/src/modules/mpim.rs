//! `mpim.*` operations.

use std::sync::Arc;

use slackbot_model::{IntoRequest, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::models::Mpim;
use crate::namespace::Namespace;

use super::channels::{
    ChannelsHistoryRequest, ChannelsHistoryResponse, ChannelsMarkRequest, ChannelsMarkResponse,
    ChannelsRepliesRequest, ChannelsRepliesResponse,
};

pub type MpimHistoryRequest = ChannelsHistoryRequest;
pub type MpimHistoryResponse = ChannelsHistoryResponse;
pub type MpimMarkRequest = ChannelsMarkRequest;
pub type MpimMarkResponse = ChannelsMarkResponse;
pub type MpimRepliesRequest = ChannelsRepliesRequest;
pub type MpimRepliesResponse = ChannelsRepliesResponse;

model! {
    /// Request for [`Mpims::close`].
    pub struct MpimCloseRequest {
        channel: Str as String,
    }
}

model! {
    /// Response for [`Mpims::close`].
    pub struct MpimCloseResponse {
        ok: Bool as bool,
        no_op: Bool as bool = false,
        already_closed: Bool as bool = false,
    }
}

model! {
    /// Request for [`Mpims::list`].
    pub struct MpimListRequest {}
}

model! {
    /// Response for [`Mpims::list`].
    pub struct MpimListResponse {
        ok: Bool as bool,
        groups: List as Vec<Mpim>,
    }
}

model! {
    /// Request for [`Mpims::open`].
    pub struct MpimOpenRequest {
        /// Users to include, in order. A single ID is accepted and wrapped
        /// into a list.
        @auto_list users: List as Vec<String>,
    }
}

model! {
    /// Response for [`Mpims::open`].
    pub struct MpimOpenResponse {
        ok: Bool as bool,
        group: Model as Mpim,
    }
}

pub struct Mpims {
    ns: Namespace,
}

impl Mpims {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "mpim"),
        }
    }

    /// Closes a multiparty direct message channel.
    pub async fn close(
        &self,
        request: impl IntoRequest<MpimCloseRequest>,
    ) -> ClientResult<MpimCloseResponse> {
        self.ns.call("close", request).await
    }

    /// Fetches a page of message history.
    pub async fn history(
        &self,
        request: impl IntoRequest<MpimHistoryRequest>,
    ) -> ClientResult<MpimHistoryResponse> {
        self.ns.call("history", request).await
    }

    /// Lists the caller's multiparty direct message channels.
    pub async fn list(
        &self,
        request: impl IntoRequest<MpimListRequest>,
    ) -> ClientResult<MpimListResponse> {
        self.ns.call("list", request).await
    }

    /// Moves the read cursor.
    pub async fn mark(
        &self,
        request: impl IntoRequest<MpimMarkRequest>,
    ) -> ClientResult<MpimMarkResponse> {
        self.ns.call("mark", request).await
    }

    /// Opens a multiparty direct message channel with a set of users.
    pub async fn open(
        &self,
        request: impl IntoRequest<MpimOpenRequest>,
    ) -> ClientResult<MpimOpenResponse> {
        self.ns.call("open", request).await
    }

    /// Fetches a thread of messages.
    pub async fn replies(
        &self,
        request: impl IntoRequest<MpimRepliesRequest>,
    ) -> ClientResult<MpimRepliesResponse> {
        self.ns.call("replies", request).await
    }
}
