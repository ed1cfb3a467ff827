//! `files.*` and `files.comments.*` operations.

use std::sync::Arc;

use slackbot_model::{IntoRequest, Timestamp, model};

use crate::client::ClientCore;
use crate::error::ClientResult;
use crate::models::{File, FileComment, FileType, FilesTypeFilter, Paging};
use crate::namespace::Namespace;

model! {
    /// Request for [`Files::delete`].
    pub struct FilesDeleteRequest {
        file: Str as String,
    }
}

model! {
    /// Request for [`Files::info`].
    pub struct FilesInfoRequest {
        file: Str as String,
        /// Comments per page.
        count: Int as i64,
        page: Int as i64,
    }
}

model! {
    /// Response for [`Files::info`].
    pub struct FilesInfoResponse {
        ok: Bool as bool,
        file: Model as File,
        comments: List as Vec<FileComment>,
        paging: Model as Paging,
    }
}

model! {
    /// Request for [`Files::list`].
    pub struct FilesListRequest {
        /// Only files created by this user.
        user: Str as String,
        /// Only files appearing in this channel.
        channel: Str as String,
        /// Only files created at or after this timestamp.
        ts_from: Timestamp as Timestamp,
        /// Only files created at or before this timestamp.
        ts_to: Timestamp as Timestamp,
        /// Category filters. A single value is accepted and wrapped into
        /// a list.
        @auto_list types: List as Vec<FilesTypeFilter> = vec![FilesTypeFilter::All],
        count: Int as i64,
        page: Int as i64,
    }
}

model! {
    /// Response for [`Files::list`].
    pub struct FilesListResponse {
        ok: Bool as bool,
        files: List as Vec<File>,
        paging: Model as Paging,
    }
}

model! {
    /// Request for [`Files::revoke_public_url`].
    pub struct FilesRevokePublicUrlRequest {
        file: Str as String,
    }
}

model! {
    /// Response for [`Files::revoke_public_url`].
    pub struct FilesRevokePublicUrlResponse {
        ok: Bool as bool,
        file: Model as File,
    }
}

model! {
    /// Request for [`Files::shared_public_url`].
    pub struct FilesSharedPublicUrlRequest {
        file: Str as String,
    }
}

model! {
    /// Response for [`Files::shared_public_url`].
    pub struct FilesSharedPublicUrlResponse {
        ok: Bool as bool,
        file: Model as File,
    }
}

model! {
    /// Request for [`Files::upload`].
    pub struct FilesUploadRequest {
        /// Binary content reference. Either this or `content` must be set.
        file: Str as String,
        /// Inline text content. Either this or `file` must be set.
        content: Str as String,
        filetype: Enum as FileType,
        filename: Str as String,
        title: Str as String,
        initial_comment: Str as String,
        /// Channels to share the file into. A single ID is accepted and
        /// wrapped into a list.
        @auto_list channels: List as Vec<String>,
    }
}

model! {
    /// Response for [`Files::upload`].
    pub struct FilesUploadResponse {
        ok: Bool as bool,
        file: Model as File,
    }
}

model! {
    /// Request for [`FilesComments::add`].
    pub struct FilesCommentsAddRequest {
        file: Str as String,
        comment: Str as String,
    }
}

model! {
    /// Response for [`FilesComments::add`].
    pub struct FilesCommentsAddResponse {
        ok: Bool as bool,
        comment: Model as FileComment,
    }
}

model! {
    /// Request for [`FilesComments::delete`].
    pub struct FilesCommentsDeleteRequest {
        file: Str as String,
        id: Str as String,
    }
}

model! {
    /// Request for [`FilesComments::edit`].
    pub struct FilesCommentsEditRequest {
        file: Str as String,
        id: Str as String,
        comment: Str as String,
    }
}

model! {
    /// Response for [`FilesComments::edit`].
    pub struct FilesCommentsEditResponse {
        ok: Bool as bool,
        comment: Model as FileComment,
    }
}

/// `files.comments.*` operations, reached through [`Files::comments`].
pub struct FilesComments {
    ns: Namespace,
}

impl FilesComments {
    fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "files.comments"),
        }
    }

    /// Adds a comment to a file.
    pub async fn add(
        &self,
        request: impl IntoRequest<FilesCommentsAddRequest>,
    ) -> ClientResult<FilesCommentsAddResponse> {
        self.ns.call("add", request).await
    }

    /// Deletes a comment from a file.
    pub async fn delete(
        &self,
        request: impl IntoRequest<FilesCommentsDeleteRequest>,
    ) -> ClientResult<bool> {
        self.ns.call_ack("delete", request).await
    }

    /// Edits an existing comment on a file.
    pub async fn edit(
        &self,
        request: impl IntoRequest<FilesCommentsEditRequest>,
    ) -> ClientResult<FilesCommentsEditResponse> {
        self.ns.call("edit", request).await
    }
}

pub struct Files {
    ns: Namespace,
    pub comments: FilesComments,
}

impl Files {
    pub(crate) fn new(core: &Arc<ClientCore>) -> Self {
        Self {
            ns: Namespace::new(core, "files"),
            comments: FilesComments::new(core),
        }
    }

    /// Deletes a file.
    pub async fn delete(
        &self,
        request: impl IntoRequest<FilesDeleteRequest>,
    ) -> ClientResult<bool> {
        self.ns.call_ack("delete", request).await
    }

    /// Fetches a file with a page of its comments.
    pub async fn info(
        &self,
        request: impl IntoRequest<FilesInfoRequest>,
    ) -> ClientResult<FilesInfoResponse> {
        self.ns.call("info", request).await
    }

    /// Lists files, filtered by user, channel, time range or type.
    pub async fn list(
        &self,
        request: impl IntoRequest<FilesListRequest>,
    ) -> ClientResult<FilesListResponse> {
        self.ns.call("list", request).await
    }

    /// Revokes a file's public sharing URL.
    pub async fn revoke_public_url(
        &self,
        request: impl IntoRequest<FilesRevokePublicUrlRequest>,
    ) -> ClientResult<FilesRevokePublicUrlResponse> {
        self.ns.call("revokePublicURL", request).await
    }

    /// Enables public sharing for a file.
    pub async fn shared_public_url(
        &self,
        request: impl IntoRequest<FilesSharedPublicUrlRequest>,
    ) -> ClientResult<FilesSharedPublicUrlResponse> {
        self.ns.call("sharedPublicURL", request).await
    }

    /// Uploads a file and optionally shares it into channels.
    pub async fn upload(
        &self,
        request: impl IntoRequest<FilesUploadRequest>,
    ) -> ClientResult<FilesUploadResponse> {
        self.ns.call("upload", request).await
    }
}
