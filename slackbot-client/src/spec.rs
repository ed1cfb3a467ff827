//! Static operation spec table.
//!
//! One entry per remote operation, mapping the dotted wire name to its
//! HTTP method and path. Built once at compile time instead of being
//! discovered reflectively per call; the transport refuses names that are
//! not in the table.

/// HTTP method of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Wire description of a single remote operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationSpec {
    /// Dotted operation name, e.g. `chat.postMessage`.
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the configured base URL.
    pub path: &'static str,
}

const fn get(name: &'static str, path: &'static str) -> OperationSpec {
    OperationSpec {
        name,
        method: HttpMethod::Get,
        path,
    }
}

const fn post(name: &'static str, path: &'static str) -> OperationSpec {
    OperationSpec {
        name,
        method: HttpMethod::Post,
        path,
    }
}

/// Every operation the binding knows, sorted by name for binary search.
pub static OPERATIONS: &[OperationSpec] = &[
    get("api.test", "/api.test"),
    post("auth.revoke", "/auth.revoke"),
    get("auth.test", "/auth.test"),
    get("bots.info", "/bots.info"),
    post("channels.archive", "/channels.archive"),
    post("channels.create", "/channels.create"),
    get("channels.history", "/channels.history"),
    get("channels.info", "/channels.info"),
    post("channels.invite", "/channels.invite"),
    post("channels.join", "/channels.join"),
    post("channels.kick", "/channels.kick"),
    post("channels.leave", "/channels.leave"),
    get("channels.list", "/channels.list"),
    post("channels.mark", "/channels.mark"),
    post("channels.rename", "/channels.rename"),
    get("channels.replies", "/channels.replies"),
    post("channels.setPurpose", "/channels.setPurpose"),
    post("channels.setTopic", "/channels.setTopic"),
    post("channels.unarchive", "/channels.unarchive"),
    post("chat.delete", "/chat.delete"),
    post("chat.meMessage", "/chat.meMessage"),
    post("chat.postMessage", "/chat.postMessage"),
    post("chat.unfurl", "/chat.unfurl"),
    post("chat.update", "/chat.update"),
    post("dnd.endDnd", "/dnd.endDnd"),
    post("dnd.endSnooze", "/dnd.endSnooze"),
    get("dnd.info", "/dnd.info"),
    post("dnd.setSnooze", "/dnd.setSnooze"),
    get("dnd.teamInfo", "/dnd.teamInfo"),
    get("emoji.list", "/emoji.list"),
    post("files.comments.add", "/files.comments.add"),
    post("files.comments.delete", "/files.comments.delete"),
    post("files.comments.edit", "/files.comments.edit"),
    post("files.delete", "/files.delete"),
    get("files.info", "/files.info"),
    get("files.list", "/files.list"),
    post("files.revokePublicURL", "/files.revokePublicURL"),
    post("files.sharedPublicURL", "/files.sharedPublicURL"),
    post("files.upload", "/files.upload"),
    post("groups.archive", "/groups.archive"),
    post("groups.close", "/groups.close"),
    post("groups.create", "/groups.create"),
    post("groups.createChild", "/groups.createChild"),
    get("groups.history", "/groups.history"),
    get("groups.info", "/groups.info"),
    post("groups.invite", "/groups.invite"),
    post("groups.kick", "/groups.kick"),
    post("groups.leave", "/groups.leave"),
    get("groups.list", "/groups.list"),
    post("groups.mark", "/groups.mark"),
    post("groups.open", "/groups.open"),
    post("groups.rename", "/groups.rename"),
    get("groups.replies", "/groups.replies"),
    post("groups.setPurpose", "/groups.setPurpose"),
    post("groups.setTopic", "/groups.setTopic"),
    post("groups.unarchive", "/groups.unarchive"),
    post("im.close", "/im.close"),
    get("im.history", "/im.history"),
    get("im.list", "/im.list"),
    post("im.mark", "/im.mark"),
    post("im.open", "/im.open"),
    get("im.replies", "/im.replies"),
    post("mpim.close", "/mpim.close"),
    get("mpim.history", "/mpim.history"),
    get("mpim.list", "/mpim.list"),
    post("mpim.mark", "/mpim.mark"),
    post("mpim.open", "/mpim.open"),
    get("mpim.replies", "/mpim.replies"),
    post("oauth.access", "/oauth.access"),
    post("pins.add", "/pins.add"),
    get("pins.list", "/pins.list"),
    post("pins.remove", "/pins.remove"),
    post("reactions.add", "/reactions.add"),
    get("reactions.get", "/reactions.get"),
    get("reactions.list", "/reactions.list"),
    post("reactions.remove", "/reactions.remove"),
    post("reminders.add", "/reminders.add"),
    post("reminders.complete", "/reminders.complete"),
    post("reminders.delete", "/reminders.delete"),
    get("reminders.info", "/reminders.info"),
    get("reminders.list", "/reminders.list"),
    get("rtm.connect", "/rtm.connect"),
    get("rtm.start", "/rtm.start"),
];

/// Looks up an operation by its dotted wire name.
#[must_use]
pub fn operation(name: &str) -> Option<&'static OperationSpec> {
    OPERATIONS
        .binary_search_by(|op| op.name.cmp(name))
        .ok()
        .map(|idx| &OPERATIONS[idx])
}
