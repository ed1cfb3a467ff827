//! `reminders.*` operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use slackbot_model::{IntoRequest, Timestamp, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::namespace::Namespace;

model! {
    /// A scheduled reminder.
    pub struct Reminder {
        @read_only id: Str as String,
        /// User who created the reminder.
        creator: Str as String,
        /// User to notify.
        user: Str as String,
        text: Str as String,
        recurring: Bool as bool,
        time: Timestamp as Timestamp,
        complete_ts: Timestamp as Timestamp,
    }
}

/// When a reminder fires: an absolute timestamp or a natural language
/// phrase like "in 15 minutes" or "every Thursday".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReminderTime {
    At(Timestamp),
    Phrase(String),
}

model! {
    /// Request for [`Reminders::add`].
    pub struct RemindersAddRequest {
        text: Str as String,
        time: Multi as ReminderTime,
        /// Recipient, defaulting to the creator.
        user: Str as String,
    }
}

model! {
    /// Request for [`Reminders::complete`].
    pub struct RemindersCompleteRequest {
        reminder: Str as String,
    }
}

model! {
    /// Request for [`Reminders::delete`].
    pub struct RemindersDeleteRequest {
        reminder: Str as String,
    }
}

model! {
    /// Request for [`Reminders::info`].
    pub struct RemindersInfoRequest {
        reminder: Str as String,
    }
}

model! {
    /// Response for [`Reminders::info`].
    pub struct RemindersInfoResponse {
        ok: Bool as bool,
        reminder: Model as Reminder,
    }
}

model! {
    /// Request for [`Reminders::list`].
    pub struct RemindersListRequest {}
}

model! {
    /// Response for [`Reminders::list`].
    pub struct RemindersListResponse {
        ok: Bool as bool,
        reminders: List as Vec<Reminder>,
    }
}

pub struct Reminders {
    ns: Namespace,
}

impl Reminders {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "reminders"),
        }
    }

    /// Creates a reminder.
    pub async fn add(
        &self,
        request: impl IntoRequest<RemindersAddRequest>,
    ) -> ClientResult<bool> {
        self.ns.call_ack("add", request).await
    }

    /// Marks a reminder as complete.
    pub async fn complete(
        &self,
        request: impl IntoRequest<RemindersCompleteRequest>,
    ) -> ClientResult<bool> {
        self.ns.call_ack("complete", request).await
    }

    /// Deletes a reminder.
    pub async fn delete(
        &self,
        request: impl IntoRequest<RemindersDeleteRequest>,
    ) -> ClientResult<bool> {
        self.ns.call_ack("delete", request).await
    }

    /// Fetches one reminder.
    pub async fn info(
        &self,
        request: impl IntoRequest<RemindersInfoRequest>,
    ) -> ClientResult<RemindersInfoResponse> {
        self.ns.call("info", request).await
    }

    /// Lists the caller's reminders.
    pub async fn list(
        &self,
        request: impl IntoRequest<RemindersListRequest>,
    ) -> ClientResult<RemindersListResponse> {
        self.ns.call("list", request).await
    }
}
