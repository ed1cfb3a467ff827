//! Static field descriptors.

/// The semantic type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain string (identifiers, names, URLs).
    Str,
    /// Boolean flag.
    Bool,
    /// Integer (counts, sizes, page numbers).
    Int,
    /// Slack `ts` timestamp.
    Timestamp,
    /// Nested model.
    Model,
    /// Array of values.
    List,
    /// String-keyed map of values.
    Map,
    /// Fixed set of named string constants.
    Enum,
    /// Tagged union over a fixed candidate list, resolved by first match.
    Multi,
}

/// A typed, named slot on a [`Schema`](crate::Schema).
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name of the field.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Settable only through deserialization of server payloads, not by
    /// caller-supplied construction.
    pub read_only: bool,
    /// For list fields: a scalar supplied by the caller is wrapped into a
    /// one-element array.
    pub auto_list: bool,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            read_only: false,
            auto_list: false,
        }
    }

    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    #[must_use]
    pub const fn auto_list(mut self) -> Self {
        self.auto_list = true;
        self
    }
}
