//! Files and file comments.

use serde::{Deserialize, Serialize};
use slackbot_model::{Timestamp, model};

use super::common::Reaction;

/// Content type identifier assigned to an uploaded file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Auto,
    Text,
    Applescript,
    Boxnote,
    C,
    Csharp,
    Cpp,
    Css,
    Csv,
    Clojure,
    Coffeescript,
    Cfm,
    D,
    Dart,
    Diff,
    Dockerfile,
    Erlang,
    Fsharp,
    Fortran,
    Go,
    Groovy,
    Html,
    Handlebars,
    Haskell,
    Haxe,
    Java,
    Javascript,
    Kotlin,
    Latex,
    Lisp,
    Lua,
    Markdown,
    Matlab,
    Mumps,
    Ocaml,
    Objc,
    Php,
    Pascal,
    Perl,
    Pig,
    Post,
    Powershell,
    Puppet,
    Python,
    R,
    Ruby,
    Rust,
    Sql,
    Sass,
    Scala,
    Scheme,
    Shell,
    Smalltalk,
    Swift,
    Tsv,
    Vb,
    Vbscript,
    Velocity,
    Verilog,
    Xml,
    Yaml,
}

/// How the file content is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    Hosted,
    External,
    Snippet,
    Post,
}

/// Category filter for file listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilesTypeFilter {
    All,
    Spaces,
    Snippets,
    Images,
    Gdocs,
    Zips,
    Pdfs,
}

model! {
    /// A comment attached to a file.
    pub struct FileComment {
        @read_only id: Str as String,
        created: Timestamp as Timestamp,
        timestamp: Timestamp as Timestamp,
        user: Str as String,
        comment: Str as String,
        channel: Str as String,
        reactions: List as Vec<Reaction>,
    }
}

model! {
    /// An uploaded or externally referenced file.
    pub struct File {
        @read_only id: Str as String,
        created: Timestamp as Timestamp,
        timestamp: Timestamp as Timestamp,
        name: Str as String,
        title: Str as String,
        mimetype: Str as String,
        filetype: Enum as FileType,
        pretty_type: Str as String,
        user: Str as String,
        mode: Enum as FileMode,
        editable: Bool as bool,
        is_external: Bool as bool,
        external_type: Str as String,
        username: Str as String,
        size: Int as i64,
        url_private: Str as String,
        url_private_download: Str as String,
        thumb_64: Str as String,
        thumb_80: Str as String,
        thumb_360: Str as String,
        thumb_360_gif: Str as String,
        thumb_360_w: Int as i64,
        thumb_360_h: Int as i64,
        thumb_480: Str as String,
        thumb_480_w: Int as i64,
        thumb_480_h: Int as i64,
        thumb_160: Str as String,
        permalink: Str as String,
        permalink_public: Str as String,
        edit_link: Str as String,
        preview: Str as String,
        preview_highlight: Str as String,
        lines: Int as i64,
        lines_more: Int as i64,
        is_public: Bool as bool,
        public_url_shared: Bool as bool,
        display_as_bot: Bool as bool,
        channels: List as Vec<String>,
        groups: List as Vec<String>,
        ims: List as Vec<String>,
        initial_comment: Model as FileComment,
        num_stars: Int as i64,
        is_starred: Bool as bool,
        pinned_to: List as Vec<String>,
        reactions: List as Vec<Reaction>,
        comments_count: Int as i64,
    }
}
