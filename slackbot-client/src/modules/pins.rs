//! `pins.*` operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use slackbot_model::{IntoRequest, Timestamp, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::models::{File, FileComment, Message};
use crate::namespace::Namespace;

/// The kind of item a pin points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinType {
    Message,
    File,
    FileComment,
}

model! {
    /// One pinned item. Exactly one of `message`, `file` and `comment` is
    /// set, matching `kind`.
    pub struct Pin {
        @read_only kind("type"): Enum as PinType,
        channel: Str as String,
        message: Model as Message,
        file: Model as File,
        comment: Model as FileComment,
        created: Timestamp as Timestamp,
        created_by: Str as String,
    }
}

model! {
    /// Request for [`Pins::add`]. Set exactly one of `file`,
    /// `file_comment` or `timestamp` to select the item.
    pub struct PinsAddRequest {
        channel: Str as String,
        file: Str as String,
        file_comment: Str as String,
        /// Timestamp of the message to pin.
        timestamp: Timestamp as Timestamp,
    }
}

model! {
    /// Request for [`Pins::list`].
    pub struct PinsListRequest {
        channel: Str as String,
    }
}

model! {
    /// Response for [`Pins::list`].
    pub struct PinsListResponse {
        ok: Bool as bool,
        items: List as Vec<Pin>,
    }
}

model! {
    /// Request for [`Pins::remove`]. Item selection works as in
    /// [`PinsAddRequest`].
    pub struct PinsRemoveRequest {
        channel: Str as String,
        file: Str as String,
        file_comment: Str as String,
        timestamp: Timestamp as Timestamp,
    }
}

pub struct Pins {
    ns: Namespace,
}

impl Pins {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "pins"),
        }
    }

    /// Pins an item to a channel.
    pub async fn add(&self, request: impl IntoRequest<PinsAddRequest>) -> ClientResult<bool> {
        self.ns.call_ack("add", request).await
    }

    /// Lists the items pinned to a channel.
    pub async fn list(
        &self,
        request: impl IntoRequest<PinsListRequest>,
    ) -> ClientResult<PinsListResponse> {
        self.ns.call("list", request).await
    }

    /// Unpins an item from a channel.
    pub async fn remove(
        &self,
        request: impl IntoRequest<PinsRemoveRequest>,
    ) -> ClientResult<bool> {
        self.ns.call_ack("remove", request).await
    }
}
