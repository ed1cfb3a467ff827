//! `chat.*` operations.

use std::collections::BTreeMap;
use std::sync::Arc;

use slackbot_model::{IntoRequest, Timestamp, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::models::{Attachment, Message, TextParse};
use crate::namespace::Namespace;

model! {
    /// Request for [`Chat::delete`].
    pub struct ChatDeleteRequest {
        /// Timestamp of the message to delete.
        ts: Timestamp as Timestamp,
        channel: Str as String,
        /// Delete as the authed user rather than as the workspace app.
        as_user: Bool as bool = false,
    }
}

model! {
    /// Response for [`Chat::delete`].
    pub struct ChatDeleteResponse {
        ok: Bool as bool,
        ts: Timestamp as Timestamp,
        channel: Str as String,
    }
}

model! {
    /// Request for [`Chat::me_message`].
    pub struct ChatMeMessageRequest {
        channel: Str as String,
        text: Str as String,
    }
}

model! {
    /// Response for [`Chat::me_message`].
    pub struct ChatMeMessageResponse {
        ok: Bool as bool,
        ts: Timestamp as Timestamp,
        channel: Str as String,
    }
}

model! {
    /// Request for [`Chat::post_message`].
    pub struct ChatPostMessageRequest {
        channel: Str as String,
        text: Str as String,
        parse: Enum as TextParse = TextParse::None,
        /// Find and link channel names and usernames.
        link_names: Bool as bool = false,
        attachments: List as Vec<Attachment>,
        unfurl_links: Bool as bool = false,
        unfurl_media: Bool as bool = true,
        /// Custom author name, honored only with `as_user: false`.
        username: Str as String,
        as_user: Bool as bool = false,
        icon_url: Str as String,
        /// Overrides `icon_url` when both are set.
        icon_emoji: Str as String,
        /// Parent message timestamp; makes this message a thread reply.
        thread_ts: Timestamp as Timestamp,
        /// Also show the thread reply in the channel.
        reply_broadcast: Bool as bool = false,
    }
}

model! {
    /// Response for [`Chat::post_message`].
    pub struct ChatPostMessageResponse {
        ok: Bool as bool,
        ts: Timestamp as Timestamp,
        channel: Str as String,
        message: Model as Message,
    }
}

model! {
    /// Request for [`Chat::unfurl`].
    pub struct ChatUnfurlRequest {
        channel: Str as String,
        ts: Timestamp as Timestamp,
        /// Map of message URL to the attachment to unfurl it into.
        unfurls: Map as BTreeMap<String, Attachment>,
        user_auth_required: Bool as bool = false,
    }
}

model! {
    /// Request for [`Chat::update`].
    pub struct ChatUpdateRequest {
        /// Timestamp of the message to update.
        ts: Timestamp as Timestamp,
        channel: Str as String,
        text: Str as String,
        attachments: List as Vec<Attachment>,
        parse: Enum as TextParse,
        link_names: Bool as bool,
        as_user: Bool as bool = false,
    }
}

model! {
    /// Response for [`Chat::update`].
    pub struct ChatUpdateResponse {
        ok: Bool as bool,
        channel: Str as String,
        ts: Timestamp as Timestamp,
        text: Str as String,
    }
}

pub struct Chat {
    ns: Namespace,
}

impl Chat {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "chat"),
        }
    }

    /// Deletes a message.
    pub async fn delete(
        &self,
        request: impl IntoRequest<ChatDeleteRequest>,
    ) -> ClientResult<ChatDeleteResponse> {
        self.ns.call("delete", request).await
    }

    /// Sends a `/me` action message.
    pub async fn me_message(
        &self,
        request: impl IntoRequest<ChatMeMessageRequest>,
    ) -> ClientResult<ChatMeMessageResponse> {
        self.ns.call("meMessage", request).await
    }

    /// Posts a message to a channel, group or direct message channel.
    pub async fn post_message(
        &self,
        request: impl IntoRequest<ChatPostMessageRequest>,
    ) -> ClientResult<ChatPostMessageResponse> {
        self.ns.call("postMessage", request).await
    }

    /// Attaches custom unfurls to a previously posted message.
    pub async fn unfurl(&self, request: impl IntoRequest<ChatUnfurlRequest>) -> ClientResult<bool> {
        self.ns.call_ack("unfurl", request).await
    }

    /// Updates an existing message.
    pub async fn update(
        &self,
        request: impl IntoRequest<ChatUpdateRequest>,
    ) -> ClientResult<ChatUpdateResponse> {
        self.ns.call("update", request).await
    }
}
