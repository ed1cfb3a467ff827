//! `reactions.*` operations.

use std::sync::Arc;

use slackbot_model::{IntoRequest, Timestamp, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::models::{File, FileComment, Message, Paging};
use crate::namespace::Namespace;

model! {
    /// Request for [`Reactions::add`]. Set exactly one of `file`,
    /// `file_comment` or `channel` plus `timestamp` to select the item.
    pub struct ReactionsAddRequest {
        /// Emoji name, without colons.
        name: Str as String,
        channel: Str as String,
        file: Str as String,
        file_comment: Str as String,
        timestamp: Timestamp as Timestamp,
    }
}

model! {
    /// Request for [`Reactions::get`].
    pub struct ReactionsGetRequest {
        channel: Str as String,
        file: Str as String,
        file_comment: Str as String,
        timestamp: Timestamp as Timestamp,
        /// Always return the complete reaction list.
        full: Bool as bool = false,
    }
}

model! {
    /// Response for [`Reactions::get`]. One of `message`, `file` and
    /// `file_comment` is set, matching the requested item.
    pub struct ReactionsGetResponse {
        ok: Bool as bool,
        channel: Str as String,
        message: Model as Message,
        file: Model as File,
        file_comment: Model as FileComment,
    }
}

model! {
    /// Request for [`Reactions::list`].
    pub struct ReactionsListRequest {
        /// Show reactions made by this user, defaulting to the caller.
        user: Str as String,
        full: Bool as bool = false,
        count: Int as i64,
        page: Int as i64,
    }
}

model! {
    /// Response for [`Reactions::list`].
    pub struct ReactionsListResponse {
        ok: Bool as bool,
        items: List as Vec<Message>,
        paging: Model as Paging,
    }
}

model! {
    /// Request for [`Reactions::remove`]. Item selection works as in
    /// [`ReactionsAddRequest`].
    pub struct ReactionsRemoveRequest {
        name: Str as String,
        channel: Str as String,
        file: Str as String,
        file_comment: Str as String,
        timestamp: Timestamp as Timestamp,
    }
}

pub struct Reactions {
    ns: Namespace,
}

impl Reactions {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "reactions"),
        }
    }

    /// Adds an emoji reaction to an item.
    pub async fn add(
        &self,
        request: impl IntoRequest<ReactionsAddRequest>,
    ) -> ClientResult<bool> {
        self.ns.call_ack("add", request).await
    }

    /// Fetches the reactions on a single item.
    pub async fn get(
        &self,
        request: impl IntoRequest<ReactionsGetRequest>,
    ) -> ClientResult<ReactionsGetResponse> {
        self.ns.call("get", request).await
    }

    /// Lists items a user has reacted to.
    pub async fn list(
        &self,
        request: impl IntoRequest<ReactionsListRequest>,
    ) -> ClientResult<ReactionsListResponse> {
        self.ns.call("list", request).await
    }

    /// Removes an emoji reaction from an item.
    pub async fn remove(
        &self,
        request: impl IntoRequest<ReactionsRemoveRequest>,
    ) -> ClientResult<bool> {
        self.ns.call_ack("remove", request).await
    }
}
