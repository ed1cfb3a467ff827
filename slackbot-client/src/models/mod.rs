//! Shared wire objects returned across namespaces.
//!
//! Request and response models live next to the namespace that uses them,
//! under [`crate::modules`]. Everything here appears in more than one
//! response shape.

mod channel;
mod common;
mod file;
mod message;
mod team;
mod user;

pub use channel::{Channel, Group, Im, Mpim};
pub use common::{Edited, Icons, Paging, Reaction, ReplyInfo, ThreadInfo, Topic};
pub use file::{File, FileComment, FileMode, FileType, FilesTypeFilter};
pub use message::{
    Action, ActionConfirm, ActionDataSource, ActionOption, ActionOptionsGroup, ActionStyle,
    ActionType, Attachment, AttachmentField, ItemType, Message, MessageItem, MessageSubtype,
    TextParse,
};
pub use team::{SelfInfo, TeamInfo};
pub use user::{EnterpriseUser, TwoFactorType, User, UserProfile};
