//! Operations shared by every conversation-style namespace.

use slackbot_model::IntoRequest;

use crate::error::ClientResult;
use crate::namespace::Namespace;

use super::channels::{
    ChannelsArchiveRequest, ChannelsHistoryRequest, ChannelsHistoryResponse, ChannelsKickRequest,
    ChannelsLeaveRequest, ChannelsLeaveResponse, ChannelsMarkRequest, ChannelsMarkResponse,
    ChannelsRepliesRequest, ChannelsRepliesResponse, ChannelsSetPurposeRequest,
    ChannelsSetPurposeResponse, ChannelsSetTopicRequest, ChannelsSetTopicResponse,
    ChannelsUnarchiveRequest,
};

/// Operations with identical wire shape across public channels and private
/// groups. Implementors only name their namespace; every method dispatches
/// under that prefix with the shared request and response models.
#[allow(async_fn_in_trait)]
pub trait ConversationOps {
    fn namespace(&self) -> &Namespace;

    /// Archives a conversation.
    async fn archive(
        &self,
        request: impl IntoRequest<ChannelsArchiveRequest>,
    ) -> ClientResult<bool> {
        self.namespace().call_ack("archive", request).await
    }

    /// Fetches a page of message history.
    async fn history(
        &self,
        request: impl IntoRequest<ChannelsHistoryRequest>,
    ) -> ClientResult<ChannelsHistoryResponse> {
        self.namespace().call("history", request).await
    }

    /// Removes a user from a conversation.
    async fn kick(&self, request: impl IntoRequest<ChannelsKickRequest>) -> ClientResult<bool> {
        self.namespace().call_ack("kick", request).await
    }

    /// Leaves a conversation.
    async fn leave(
        &self,
        request: impl IntoRequest<ChannelsLeaveRequest>,
    ) -> ClientResult<ChannelsLeaveResponse> {
        self.namespace().call("leave", request).await
    }

    /// Moves the read cursor.
    async fn mark(
        &self,
        request: impl IntoRequest<ChannelsMarkRequest>,
    ) -> ClientResult<ChannelsMarkResponse> {
        self.namespace().call("mark", request).await
    }

    /// Fetches a thread of messages.
    async fn replies(
        &self,
        request: impl IntoRequest<ChannelsRepliesRequest>,
    ) -> ClientResult<ChannelsRepliesResponse> {
        self.namespace().call("replies", request).await
    }

    /// Sets the conversation purpose.
    async fn set_purpose(
        &self,
        request: impl IntoRequest<ChannelsSetPurposeRequest>,
    ) -> ClientResult<ChannelsSetPurposeResponse> {
        self.namespace().call("setPurpose", request).await
    }

    /// Sets the conversation topic.
    async fn set_topic(
        &self,
        request: impl IntoRequest<ChannelsSetTopicRequest>,
    ) -> ClientResult<ChannelsSetTopicResponse> {
        self.namespace().call("setTopic", request).await
    }

    /// Unarchives a conversation.
    async fn unarchive(
        &self,
        request: impl IntoRequest<ChannelsUnarchiveRequest>,
    ) -> ClientResult<bool> {
        self.namespace().call_ack("unarchive", request).await
    }
}
