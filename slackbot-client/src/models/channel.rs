//! Conversation containers: public channels, private groups, direct and
//! multiparty direct message channels.

use slackbot_model::{Timestamp, model};

use super::common::Topic;
use super::message::Message;

model! {
    /// A public team channel.
    pub struct Channel {
        @read_only id: Str as String,
        name: Str as String,
        is_channel: Bool as bool,
        created: Timestamp as Timestamp,
        creator: Str as String,
        is_archived: Bool as bool,
        is_general: Bool as bool,
        is_org_shared: Bool as bool,
        enterprise_id: Str as String,
        members: List as Vec<String>,
        topic: Model as Topic,
        purpose: Model as Topic,
        is_member: Bool as bool,
        last_read: Timestamp as Timestamp,
        latest: Model as Box<Message>,
        unread_count: Int as i64,
        unread_count_display: Int as i64,
    }
}

model! {
    /// A private channel.
    pub struct Group {
        @read_only id: Str as String,
        name: Str as String,
        is_group: Bool as bool,
        is_mpim: Bool as bool,
        created: Timestamp as Timestamp,
        creator: Str as String,
        is_archived: Bool as bool,
        is_org_shared: Bool as bool,
        enterprise_id: Str as String,
        parent_group: Str as String,
        members: List as Vec<String>,
        topic: Model as Topic,
        purpose: Model as Topic,
        is_member: Bool as bool,
        last_read: Timestamp as Timestamp,
        latest: Model as Box<Message>,
        unread_count: Int as i64,
        unread_count_display: Int as i64,
    }
}

model! {
    /// A direct message channel with one other user.
    pub struct Im {
        @read_only id: Str as String,
        is_im: Bool as bool,
        user: Str as String,
        created: Timestamp as Timestamp,
        is_user_deleted: Bool as bool,
        is_open: Bool as bool,
        last_read: Timestamp as Timestamp,
        latest: Model as Box<Message>,
        unread_count: Int as i64,
        unread_count_display: Int as i64,
    }
}

model! {
    /// A multiparty direct message channel.
    pub struct Mpim {
        @read_only id: Str as String,
        name: Str as String,
        is_mpim: Bool as bool,
        is_group: Bool as bool,
        created: Timestamp as Timestamp,
        creator: Str as String,
        members: List as Vec<String>,
        last_read: Timestamp as Timestamp,
        latest: Model as Box<Message>,
        unread_count: Int as i64,
        unread_count_display: Int as i64,
    }
}
