//! Schema tables and the raw-payload conversion trait.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ModelError, ModelResult};
use crate::field::FieldSpec;

/// An ordered, named set of typed fields describing a request or response
/// shape.
///
/// Schemas are flat: a model composed from several sources enumerates the
/// full union of their fields at definition time. The resolved field set
/// is the same for every instance of the model.
#[derive(Debug)]
pub struct Schema {
    /// Model name, used in error messages.
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
    /// Open schemas additionally retain unrecognized incoming keys.
    pub open: bool,
}

impl Schema {
    /// Looks up a field by wire name.
    ///
    /// Searches from the end so that, when a field list was produced by
    /// concatenating several sources, the most-derived declaration wins.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().rev().find(|f| f.name == name)
    }

    /// Whether the schema declares a field with this wire name.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// A typed model backed by a static [`Schema`].
///
/// Declared with the [`model!`](crate::model) macro, which generates the
/// serde struct and the schema table from a single field list. Every field
/// is optional; unset fields are skipped on serialization and defaults are
/// substituted only by the generated accessors, never during
/// deserialization.
pub trait Model: Sized + Default + Serialize + DeserializeOwned {
    const SCHEMA: &'static Schema;

    /// Constructs an instance from a raw response payload.
    ///
    /// Unknown keys are ignored for closed schemas and retained in the
    /// pass-through store for open ones. Type mismatches, unrecognized
    /// enum strings and unmatched multi-type values all surface as
    /// [`ModelError::Decode`] naming the schema.
    fn from_raw(raw: Value) -> ModelResult<Self> {
        serde_json::from_value(raw).map_err(|source| ModelError::Decode {
            schema: Self::SCHEMA.name,
            source,
        })
    }

    /// Produces the raw mapping for this instance: one entry per
    /// explicitly-assigned field, nested models recursing, enums reduced
    /// to their wire strings and timestamps to the Slack `ts` form.
    fn to_raw(&self) -> ModelResult<Value> {
        serde_json::to_value(self).map_err(|source| ModelError::Encode {
            schema: Self::SCHEMA.name,
            source,
        })
    }
}
