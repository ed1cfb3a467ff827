//! `channels.*` operations.

use std::sync::Arc;

use slackbot_model::{IntoRequest, Timestamp, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::models::{Channel, Message, ThreadInfo};
use crate::namespace::Namespace;

use super::conversations::ConversationOps;

model! {
    /// Request for [`ConversationOps::archive`].
    pub struct ChannelsArchiveRequest {
        channel: Str as String,
    }
}

model! {
    /// Request for [`Channels::create`].
    pub struct ChannelsCreateRequest {
        name: Str as String,
        validate: Bool as bool,
    }
}

model! {
    /// Response for [`Channels::create`].
    pub struct ChannelsCreateResponse {
        ok: Bool as bool,
        channel: Model as Channel,
    }
}

model! {
    /// Request for [`ConversationOps::history`].
    pub struct ChannelsHistoryRequest {
        channel: Str as String,
        /// End of the time range of messages to include.
        latest: Timestamp as Timestamp,
        /// Start of the time range of messages to include.
        oldest: Timestamp as Timestamp = Timestamp::EPOCH,
        /// Include messages with exactly the `latest` or `oldest` timestamp.
        inclusive: Bool as bool = false,
        /// Number of messages to return, between 1 and 1000.
        count: Int as i64 = 100,
        /// Include `unread_count_display` in the output.
        unreads: Bool as bool = false,
    }
}

model! {
    /// Response for [`ConversationOps::history`].
    pub struct ChannelsHistoryResponse {
        ok: Bool as bool,
        latest: Timestamp as Timestamp,
        messages: List as Vec<Message>,
        /// True when more messages than the page size exist in the range.
        has_more: Bool as bool,
    }
}

model! {
    /// Request for [`Channels::info`].
    pub struct ChannelsInfoRequest {
        channel: Str as String,
    }
}

model! {
    /// Response for [`Channels::info`].
    pub struct ChannelsInfoResponse {
        ok: Bool as bool,
        channel: Model as Channel,
    }
}

model! {
    /// Request for [`Channels::invite`].
    pub struct ChannelsInviteRequest {
        channel: Str as String,
        user: Str as String,
    }
}

model! {
    /// Response for [`Channels::invite`].
    pub struct ChannelsInviteResponse {
        ok: Bool as bool,
        channel: Model as Channel,
    }
}

model! {
    /// Request for [`Channels::join`].
    pub struct ChannelsJoinRequest {
        name: Str as String,
        /// Return an error on an invalid channel name instead of rewriting
        /// it to fit.
        validate: Bool as bool,
    }
}

model! {
    /// Response for [`Channels::join`].
    pub struct ChannelsJoinResponse {
        ok: Bool as bool,
        already_in_channel: Bool as bool = false,
        channel: Model as Channel,
    }
}

model! {
    /// Request for [`ConversationOps::kick`].
    pub struct ChannelsKickRequest {
        channel: Str as String,
        user: Str as String,
    }
}

model! {
    /// Request for [`ConversationOps::leave`].
    pub struct ChannelsLeaveRequest {
        channel: Str as String,
    }
}

model! {
    /// Response for [`ConversationOps::leave`].
    pub struct ChannelsLeaveResponse {
        ok: Bool as bool,
        not_in_channel: Bool as bool = false,
    }
}

model! {
    /// Request for [`Channels::list`].
    pub struct ChannelsListRequest {
        exclude_archived: Bool as bool = false,
        exclude_members: Bool as bool = false,
    }
}

model! {
    /// Response for [`Channels::list`].
    pub struct ChannelsListResponse {
        ok: Bool as bool,
        channels: List as Vec<Channel>,
    }
}

model! {
    /// Request for [`ConversationOps::mark`].
    pub struct ChannelsMarkRequest {
        channel: Str as String,
        /// Timestamp of the most recently seen message.
        ts: Timestamp as Timestamp,
    }
}

model! {
    /// Response for [`ConversationOps::mark`].
    pub struct ChannelsMarkResponse {
        ok: Bool as bool,
        channels: List as Vec<Channel>,
    }
}

model! {
    /// Request for [`Channels::rename`].
    pub struct ChannelsRenameRequest {
        channel: Str as String,
        name: Str as String,
        validate: Bool as bool = false,
    }
}

model! {
    /// Response for [`Channels::rename`].
    pub struct ChannelsRenameResponse {
        ok: Bool as bool,
        channel: Model as Channel,
    }
}

model! {
    /// Request for [`ConversationOps::replies`].
    pub struct ChannelsRepliesRequest {
        channel: Str as String,
        /// Timestamp of the thread's parent message.
        thread_ts: Timestamp as Timestamp,
    }
}

model! {
    /// Response for [`ConversationOps::replies`].
    pub struct ChannelsRepliesResponse {
        ok: Bool as bool,
        messages: List as Vec<Message>,
        thread_info: Model as ThreadInfo,
    }
}

model! {
    /// Request for [`ConversationOps::set_purpose`].
    pub struct ChannelsSetPurposeRequest {
        channel: Str as String,
        purpose: Str as String,
    }
}

model! {
    /// Response for [`ConversationOps::set_purpose`].
    pub struct ChannelsSetPurposeResponse {
        ok: Bool as bool,
        purpose: Str as String,
    }
}

model! {
    /// Request for [`ConversationOps::set_topic`].
    pub struct ChannelsSetTopicRequest {
        channel: Str as String,
        topic: Str as String,
    }
}

model! {
    /// Response for [`ConversationOps::set_topic`].
    pub struct ChannelsSetTopicResponse {
        ok: Bool as bool,
        topic: Str as String,
    }
}

model! {
    /// Request for [`ConversationOps::unarchive`].
    pub struct ChannelsUnarchiveRequest {
        channel: Str as String,
    }
}

pub struct Channels {
    ns: Namespace,
}

impl Channels {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "channels"),
        }
    }

    /// Creates a public channel.
    pub async fn create(
        &self,
        request: impl IntoRequest<ChannelsCreateRequest>,
    ) -> ClientResult<ChannelsCreateResponse> {
        self.ns.call("create", request).await
    }

    /// Fetches information about a channel.
    pub async fn info(
        &self,
        request: impl IntoRequest<ChannelsInfoRequest>,
    ) -> ClientResult<ChannelsInfoResponse> {
        self.ns.call("info", request).await
    }

    /// Invites a user to a channel.
    pub async fn invite(
        &self,
        request: impl IntoRequest<ChannelsInviteRequest>,
    ) -> ClientResult<ChannelsInviteResponse> {
        self.ns.call("invite", request).await
    }

    /// Joins a channel by name, creating it when it does not exist.
    pub async fn join(
        &self,
        request: impl IntoRequest<ChannelsJoinRequest>,
    ) -> ClientResult<ChannelsJoinResponse> {
        self.ns.call("join", request).await
    }

    /// Lists the channels of the team.
    pub async fn list(
        &self,
        request: impl IntoRequest<ChannelsListRequest>,
    ) -> ClientResult<ChannelsListResponse> {
        self.ns.call("list", request).await
    }

    /// Renames a channel.
    pub async fn rename(
        &self,
        request: impl IntoRequest<ChannelsRenameRequest>,
    ) -> ClientResult<ChannelsRenameResponse> {
        self.ns.call("rename", request).await
    }
}

impl ConversationOps for Channels {
    fn namespace(&self) -> &Namespace {
        &self.ns
    }
}
