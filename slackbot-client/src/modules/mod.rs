//! API namespaces.
//!
//! One module per dotted prefix. Each defines the request and response
//! models for its operations alongside the methods that dispatch them, and
//! holds a [`Namespace`](crate::namespace::Namespace) with a weak handle
//! back to the client core.

mod api;
mod auth;
mod bots;
mod channels;
mod chat;
mod conversations;
mod dnd;
mod emoji;
mod files;
mod groups;
mod im;
mod mpim;
mod oauth;
mod pins;
mod reactions;
mod reminders;
mod rtm;

pub use api::{Api, ApiTestRequest, ApiTestResponse};
pub use auth::{Auth, AuthRevokeRequest, AuthRevokeResponse, AuthTestRequest, AuthTestResponse};
pub use bots::{BotInfo, Bots, BotsInfoRequest, BotsInfoResponse};
pub use channels::{
    Channels, ChannelsArchiveRequest, ChannelsCreateRequest, ChannelsCreateResponse,
    ChannelsHistoryRequest, ChannelsHistoryResponse, ChannelsInfoRequest, ChannelsInfoResponse,
    ChannelsInviteRequest, ChannelsInviteResponse, ChannelsJoinRequest, ChannelsJoinResponse,
    ChannelsKickRequest, ChannelsLeaveRequest, ChannelsLeaveResponse, ChannelsListRequest,
    ChannelsListResponse, ChannelsMarkRequest, ChannelsMarkResponse, ChannelsRenameRequest,
    ChannelsRenameResponse, ChannelsRepliesRequest, ChannelsRepliesResponse,
    ChannelsSetPurposeRequest, ChannelsSetPurposeResponse, ChannelsSetTopicRequest,
    ChannelsSetTopicResponse, ChannelsUnarchiveRequest,
};
pub use chat::{
    Chat, ChatDeleteRequest, ChatDeleteResponse, ChatMeMessageRequest, ChatMeMessageResponse,
    ChatPostMessageRequest, ChatPostMessageResponse, ChatUnfurlRequest, ChatUpdateRequest,
    ChatUpdateResponse,
};
pub use conversations::ConversationOps;
pub use dnd::{
    Dnd, DndEndDndRequest, DndEndSnoozeRequest, DndEndSnoozeResponse, DndInfo, DndInfoRequest,
    DndInfoResponse, DndSetSnoozeRequest, DndSetSnoozeResponse, DndTeamInfoRequest,
    DndTeamInfoResponse,
};
pub use emoji::{Emoji, EmojiListRequest, EmojiListResponse};
pub use files::{
    Files, FilesComments, FilesCommentsAddRequest, FilesCommentsAddResponse,
    FilesCommentsDeleteRequest, FilesCommentsEditRequest, FilesCommentsEditResponse,
    FilesDeleteRequest, FilesInfoRequest, FilesInfoResponse, FilesListRequest, FilesListResponse,
    FilesRevokePublicUrlRequest, FilesRevokePublicUrlResponse, FilesSharedPublicUrlRequest,
    FilesSharedPublicUrlResponse, FilesUploadRequest, FilesUploadResponse,
};
pub use groups::{
    Groups, GroupsCloseRequest, GroupsCloseResponse, GroupsCreateChildRequest,
    GroupsCreateChildResponse, GroupsCreateRequest, GroupsCreateResponse, GroupsInfoRequest,
    GroupsInfoResponse, GroupsInviteRequest, GroupsInviteResponse, GroupsListRequest,
    GroupsListResponse, GroupsOpenRequest, GroupsOpenResponse, GroupsRenameRequest,
    GroupsRenameResponse,
};
pub use im::{
    ImCloseRequest, ImCloseResponse, ImHistoryRequest, ImHistoryResponse, ImListRequest,
    ImListResponse, ImMarkRequest, ImMarkResponse, ImOpenRequest, ImOpenResponse,
    ImRepliesRequest, ImRepliesResponse, Ims,
};
pub use mpim::{
    MpimCloseRequest, MpimCloseResponse, MpimHistoryRequest, MpimHistoryResponse, MpimListRequest,
    MpimListResponse, MpimMarkRequest, MpimMarkResponse, MpimOpenRequest, MpimOpenResponse,
    MpimRepliesRequest, MpimRepliesResponse, Mpims,
};
pub use oauth::{OAuth, OauthAccessRequest, OauthAccessResponse};
pub use pins::{Pin, PinType, Pins, PinsAddRequest, PinsListRequest, PinsListResponse,
    PinsRemoveRequest};
pub use reactions::{
    Reactions, ReactionsAddRequest, ReactionsGetRequest, ReactionsGetResponse,
    ReactionsListRequest, ReactionsListResponse, ReactionsRemoveRequest,
};
pub use reminders::{
    Reminder, ReminderTime, Reminders, RemindersAddRequest, RemindersCompleteRequest,
    RemindersDeleteRequest, RemindersInfoRequest, RemindersInfoResponse, RemindersListRequest,
    RemindersListResponse,
};
pub use rtm::{Rtm, RtmConnectRequest, RtmConnectResponse, RtmStartRequest, RtmStartResponse};
