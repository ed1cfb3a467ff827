//! Open-schema support: pass-through storage for unrecognized keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field::FieldSpec;
use crate::schema::{Model, Schema};

/// Pass-through store flattened into open models.
///
/// Holds every incoming key that no declared field matched, untyped,
/// retrievable by name. Deserializing a payload with extra keys into an
/// open model never fails merely because those keys exist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extra(Map<String, Value>);

impl Extra {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves a pass-through value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Extra {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A fully open model: no declared fields, every key untyped.
///
/// Used for server-defined grab-bags such as team/user `prefs` and the
/// echoed argument map of `api.test`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DynamicModel(Map<String, Value>);

static DYNAMIC_SCHEMA: Schema = Schema {
    name: "DynamicModel",
    fields: &[] as &[FieldSpec],
    open: true,
};

impl Model for DynamicModel {
    const SCHEMA: &'static Schema = &DYNAMIC_SCHEMA;
}

impl DynamicModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for DynamicModel {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
