//! Team and authenticated-user descriptors returned by session setup.

use slackbot_model::{DynamicModel, Timestamp, model};

use super::common::Icons;

model! {
    /// The authenticated user's team.
    pub struct TeamInfo {
        @read_only id: Str as String,
        name: Str as String,
        email_domain: Str as String,
        domain: Str as String,
        icon: Model as Icons,
        msg_edit_window_mins: Int as i64,
        over_storage_limit: Bool as bool,
        prefs: Model as DynamicModel,
        plan: Str as String,
        enterprise_id: Str as String,
        enterprise_name: Str as String,
    }
}

model! {
    /// The authenticated user, as reported at session setup.
    pub struct SelfInfo {
        @read_only id: Str as String,
        name: Str as String,
        prefs: Model as DynamicModel,
        created: Timestamp as Timestamp,
        manual_presence: Bool as bool,
    }
}
