//! `groups.*` operations.
//!
//! Private channels share most of their wire shape with public channels;
//! the shared operations come from [`ConversationOps`] and the shared
//! request models are aliased from the `channels` namespace. Only the
//! responses that carry a [`Group`] instead of a `Channel` differ.

use std::sync::Arc;

use slackbot_model::{IntoRequest, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::models::Group;
use crate::namespace::Namespace;

use super::channels::{
    ChannelsCreateRequest, ChannelsInfoRequest, ChannelsInviteRequest, ChannelsRenameRequest,
};
use super::conversations::ConversationOps;

pub type GroupsCreateRequest = ChannelsCreateRequest;
pub type GroupsInfoRequest = ChannelsInfoRequest;
pub type GroupsInviteRequest = ChannelsInviteRequest;
pub type GroupsRenameRequest = ChannelsRenameRequest;

model! {
    /// Response for [`Groups::create`].
    pub struct GroupsCreateResponse {
        ok: Bool as bool,
        group: Model as Group,
    }
}

model! {
    /// Request for [`Groups::create_child`].
    pub struct GroupsCreateChildRequest {
        channel: Str as String,
    }
}

model! {
    /// Response for [`Groups::create_child`].
    pub struct GroupsCreateChildResponse {
        ok: Bool as bool,
        group: Model as Group,
    }
}

model! {
    /// Response for [`Groups::info`].
    pub struct GroupsInfoResponse {
        ok: Bool as bool,
        group: Model as Group,
    }
}

model! {
    /// Response for [`Groups::invite`].
    pub struct GroupsInviteResponse {
        ok: Bool as bool,
        group: Model as Group,
    }
}

model! {
    /// Request for [`Groups::list`].
    pub struct GroupsListRequest {
        exclude_archived: Bool as bool = false,
    }
}

model! {
    /// Response for [`Groups::list`].
    pub struct GroupsListResponse {
        ok: Bool as bool,
        groups: List as Vec<Group>,
    }
}

model! {
    /// Request for [`Groups::open`].
    pub struct GroupsOpenRequest {
        channel: Str as String,
    }
}

model! {
    /// Response for [`Groups::open`].
    pub struct GroupsOpenResponse {
        ok: Bool as bool,
        /// True when nothing had to be done.
        no_op: Bool as bool = false,
        already_open: Bool as bool = false,
    }
}

model! {
    /// Request for [`Groups::close`].
    pub struct GroupsCloseRequest {
        channel: Str as String,
    }
}

model! {
    /// Response for [`Groups::close`].
    pub struct GroupsCloseResponse {
        ok: Bool as bool,
        no_op: Bool as bool = false,
        already_closed: Bool as bool = false,
    }
}

model! {
    /// Response for [`Groups::rename`].
    pub struct GroupsRenameResponse {
        ok: Bool as bool,
        channel: Model as Group,
    }
}

pub struct Groups {
    ns: Namespace,
}

impl Groups {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "groups"),
        }
    }

    /// Creates a private channel.
    pub async fn create(
        &self,
        request: impl IntoRequest<GroupsCreateRequest>,
    ) -> ClientResult<GroupsCreateResponse> {
        self.ns.call("create", request).await
    }

    /// Clones a private channel and archives the original.
    pub async fn create_child(
        &self,
        request: impl IntoRequest<GroupsCreateChildRequest>,
    ) -> ClientResult<GroupsCreateChildResponse> {
        self.ns.call("createChild", request).await
    }

    /// Fetches information about a private channel.
    pub async fn info(
        &self,
        request: impl IntoRequest<GroupsInfoRequest>,
    ) -> ClientResult<GroupsInfoResponse> {
        self.ns.call("info", request).await
    }

    /// Invites a user to a private channel.
    pub async fn invite(
        &self,
        request: impl IntoRequest<GroupsInviteRequest>,
    ) -> ClientResult<GroupsInviteResponse> {
        self.ns.call("invite", request).await
    }

    /// Lists the private channels the caller is in.
    pub async fn list(
        &self,
        request: impl IntoRequest<GroupsListRequest>,
    ) -> ClientResult<GroupsListResponse> {
        self.ns.call("list", request).await
    }

    /// Opens a private channel.
    pub async fn open(
        &self,
        request: impl IntoRequest<GroupsOpenRequest>,
    ) -> ClientResult<GroupsOpenResponse> {
        self.ns.call("open", request).await
    }

    /// Closes a private channel.
    pub async fn close(
        &self,
        request: impl IntoRequest<GroupsCloseRequest>,
    ) -> ClientResult<GroupsCloseResponse> {
        self.ns.call("close", request).await
    }

    /// Renames a private channel.
    pub async fn rename(
        &self,
        request: impl IntoRequest<GroupsRenameRequest>,
    ) -> ClientResult<GroupsRenameResponse> {
        self.ns.call("rename", request).await
    }
}

impl ConversationOps for Groups {
    fn namespace(&self) -> &Namespace {
        &self.ns
    }
}
