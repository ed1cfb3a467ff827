//! Small objects embedded throughout response payloads.

use slackbot_model::{Timestamp, model};

model! {
    /// Icon URL set, keyed by pixel size.
    pub struct Icons {
        image_36: Str as String,
        image_48: Str as String,
        image_72: Str as String,
    }
}

model! {
    /// Channel topic or purpose, with authorship.
    pub struct Topic {
        value: Str as String,
        creator: Str as String,
        last_set: Timestamp as Timestamp,
    }
}

model! {
    /// Edit marker on a message.
    pub struct Edited {
        user: Str as String,
        ts: Timestamp as Timestamp,
    }
}

model! {
    /// One reply in a thread summary.
    pub struct ReplyInfo {
        user: Str as String,
        ts: Timestamp as Timestamp,
    }
}

model! {
    /// Page cursor for count/page style listings.
    pub struct Paging {
        count: Int as i64,
        total: Int as i64,
        page: Int as i64,
        pages: Int as i64,
    }
}

model! {
    pub struct ThreadInfo {
        complete: Bool as bool,
        count: Int as i64,
    }
}

model! {
    /// Emoji reaction tally on a message, file or comment.
    pub struct Reaction {
        name: Str as String,
        count: Int as i64,
        users: List as Vec<String>,
    }
}
