//! `dnd.*` operations.

use std::collections::BTreeMap;
use std::sync::Arc;

use slackbot_model::{IntoRequest, Timestamp, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::namespace::Namespace;

model! {
    /// Do Not Disturb window of a single user.
    pub struct DndInfo {
        dnd_enabled: Bool as bool,
        next_dnd_start_ts: Timestamp as Timestamp,
        next_dnd_end_ts: Timestamp as Timestamp,
    }
}

model! {
    /// Request for [`Dnd::end_dnd`].
    pub struct DndEndDndRequest {}
}

model! {
    /// Request for [`Dnd::end_snooze`].
    pub struct DndEndSnoozeRequest {}
}

model! {
    /// Response for [`Dnd::end_snooze`].
    pub struct DndEndSnoozeResponse {
        ok: Bool as bool,
        dnd_enabled: Bool as bool,
        next_dnd_start_ts: Timestamp as Timestamp,
        next_dnd_end_ts: Timestamp as Timestamp,
        snooze_enabled: Bool as bool,
    }
}

model! {
    /// Request for [`Dnd::info`].
    pub struct DndInfoRequest {
        /// User to fetch status for, defaulting to the caller.
        user: Str as String,
    }
}

model! {
    /// Response for [`Dnd::info`].
    pub struct DndInfoResponse {
        ok: Bool as bool,
        dnd_enabled: Bool as bool,
        next_dnd_start_ts: Timestamp as Timestamp,
        next_dnd_end_ts: Timestamp as Timestamp,
        snooze_enabled: Bool as bool,
        snooze_endtime: Timestamp as Timestamp,
        /// Minutes of snooze remaining.
        snooze_remaining: Int as i64,
    }
}

model! {
    /// Request for [`Dnd::set_snooze`].
    pub struct DndSetSnoozeRequest {
        num_minutes: Int as i64,
    }
}

model! {
    /// Response for [`Dnd::set_snooze`].
    pub struct DndSetSnoozeResponse {
        ok: Bool as bool,
        snooze_enabled: Bool as bool,
        snooze_endtime: Timestamp as Timestamp,
        snooze_remaining: Int as i64,
    }
}

model! {
    /// Request for [`Dnd::team_info`].
    pub struct DndTeamInfoRequest {
        /// Users to fetch status for. A single ID is accepted and wrapped
        /// into a list.
        @auto_list users: List as Vec<String>,
    }
}

model! {
    /// Response for [`Dnd::team_info`].
    pub struct DndTeamInfoResponse {
        ok: Bool as bool,
        users: Map as BTreeMap<String, DndInfo>,
    }
}

pub struct Dnd {
    ns: Namespace,
}

impl Dnd {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "dnd"),
        }
    }

    /// Ends the caller's Do Not Disturb session.
    pub async fn end_dnd(
        &self,
        request: impl IntoRequest<DndEndDndRequest>,
    ) -> ClientResult<bool> {
        self.ns.call_ack("endDnd", request).await
    }

    /// Ends the current snooze without touching the scheduled window.
    pub async fn end_snooze(
        &self,
        request: impl IntoRequest<DndEndSnoozeRequest>,
    ) -> ClientResult<DndEndSnoozeResponse> {
        self.ns.call("endSnooze", request).await
    }

    /// Fetches Do Not Disturb status for one user.
    pub async fn info(
        &self,
        request: impl IntoRequest<DndInfoRequest>,
    ) -> ClientResult<DndInfoResponse> {
        self.ns.call("info", request).await
    }

    /// Snoozes notifications for a number of minutes.
    pub async fn set_snooze(
        &self,
        request: impl IntoRequest<DndSetSnoozeRequest>,
    ) -> ClientResult<DndSetSnoozeResponse> {
        self.ns.call("setSnooze", request).await
    }

    /// Fetches Do Not Disturb status for several users at once.
    pub async fn team_info(
        &self,
        request: impl IntoRequest<DndTeamInfoRequest>,
    ) -> ClientResult<DndTeamInfoResponse> {
        self.ns.call("teamInfo", request).await
    }
}
