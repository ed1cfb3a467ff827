//! Messages, attachments and interactive actions.

use serde::{Deserialize, Serialize};
use slackbot_model::{Timestamp, model};

use super::common::{Edited, Icons, Reaction, ReplyInfo};
use super::file::{File, FileComment};

/// Subtype tag distinguishing system-generated messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSubtype {
    BotMessage,
    ChannelArchive,
    ChannelJoin,
    ChannelLeave,
    ChannelName,
    ChannelPurpose,
    ChannelTopic,
    ChannelUnarchive,
    FileComment,
    FileMention,
    FileShare,
    GroupArchive,
    GroupJoin,
    GroupLeave,
    GroupName,
    GroupPurpose,
    GroupTopic,
    GroupUnarchive,
    MeMessage,
    MessageChanged,
    MessageDeleted,
    MessageReplied,
    PinnedItem,
    ReplyBroadcast,
    UnpinnedItem,
}

/// The kind of item a message, pin or reaction refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Message,
    File,
    FileComment,
}

/// Server-side text processing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextParse {
    Full,
    None,
}

model! {
    /// One short key/value block inside an attachment.
    pub struct AttachmentField {
        title: Str as String,
        value: Str as String,
        short: Bool as bool,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStyle {
    Default,
    Primary,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Button,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionDataSource {
    Static,
    Users,
    Channels,
    Conversations,
    External,
}

model! {
    /// Confirmation dialog shown before an action fires.
    pub struct ActionConfirm {
        title: Str as String,
        text: Str as String,
        ok_text: Str as String = String::from("Okay"),
        dismiss_text: Str as String = String::from("Cancel"),
    }
}

model! {
    pub struct ActionOption {
        text: Str as String,
        value: Str as String,
        description: Str as String,
    }
}

model! {
    pub struct ActionOptionsGroup {
        text: Str as String,
        options: List as Vec<ActionOption>,
    }
}

model! {
    /// Interactive button or menu attached to a message.
    pub struct Action {
        name: Str as String,
        text: Str as String,
        style: Enum as ActionStyle,
        kind("type"): Enum as ActionType,
        value: Str as String,
        confirm: Model as ActionConfirm,
        options: List as Vec<ActionOption>,
        options_groups: List as Vec<ActionOptionsGroup>,
        data_source: Enum as ActionDataSource,
        selected_options: List as Vec<ActionOption>,
        min_query_length: Int as i64 = 1,
    }
}

model! {
    /// Rich message attachment.
    pub struct Attachment {
        @read_only id: Str as String,
        fallback: Str as String,
        color: Str as String,
        pretext: Str as String,
        author_name: Str as String,
        author_link: Str as String,
        author_icon: Str as String,
        title: Str as String,
        title_link: Str as String,
        text: Str as String,
        fields: List as Vec<AttachmentField>,
        image_url: Str as String,
        thumb_url: Str as String,
        footer: Str as String,
        footer_icon: Str as String,
        ts: Timestamp as Timestamp,
        callback_id: Str as String,
        attachment_type: Str as String,
        actions: List as Vec<Action>,
    }
}

/// Referenced item carried inline on a message.
///
/// Decoded by trying each variant in declaration order; the first shape
/// that accepts the payload wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageItem {
    Message(Box<Message>),
    File(File),
    Comment(FileComment),
}

model! {
    /// A channel message, including the system-generated subtypes.
    pub struct Message {
        @read_only kind("type"): Enum as ItemType,
        subtype: Enum as MessageSubtype,
        channel: Str as String,
        user: Str as String,
        text: Str as String,
        ts: Timestamp as Timestamp,
        deleted_ts: Timestamp as Timestamp,
        thread_ts: Timestamp as Timestamp,
        event_ts: Timestamp as Timestamp,
        hidden: Bool as bool = false,
        bot_id: Str as String,
        username: Str as String,
        icons: Model as Icons,
        members: List as Vec<String>,
        inviter: Str as String,
        old_name: Str as String,
        name: Str as String,
        purpose: Str as String,
        topic: Str as String,
        file: Model as File,
        comment: Model as FileComment,
        upload: Bool as bool,
        message: Model as Box<Message>,
        edited: Model as Edited,
        source_team: Str as String,
        parent_user_id: Str as String,
        reply_count: Int as i64,
        replies: List as Vec<ReplyInfo>,
        subscribed: Bool as bool,
        last_read: Timestamp as Timestamp,
        unread_count: Int as i64,
        attachments: List as Vec<Attachment>,
        item_type: Enum as ItemType,
        item: Multi as MessageItem,
        is_starred: Bool as bool,
        pinned_to: List as Vec<String>,
        reactions: List as Vec<Reaction>,
    }
}
