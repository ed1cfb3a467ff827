//! Parameter object builder: loose keyword-style arguments collected into
//! a typed request model.

use serde_json::{Map, Value};

use crate::error::{ModelError, ModelResult};
use crate::schema::Model;

/// An ordered set of keyword-style parameters for an operation call.
///
/// Stands in for the discrete keyword arguments of the binding: instead of
/// constructing a request model by hand, callers collect named values and
/// let [`Args::build`] materialize the typed request. Names are validated
/// against the target schema before any transport call is made.
///
/// ```
/// use slackbot_model::args;
///
/// let args = args! { channel: "C1234567890", count: 5 };
/// assert_eq!(args.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Args(Map<String, Value>);

impl Args {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named parameter. Later values override earlier ones with the
    /// same name.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Materializes a typed request from the collected parameters.
    ///
    /// - a name the schema does not declare fails with
    ///   [`ModelError::UnknownParameter`] (open schemas pass it through);
    /// - a read-only field name fails with
    ///   [`ModelError::ReadOnlyParameter`];
    /// - a scalar supplied for an `auto_list` field is wrapped into a
    ///   one-element array;
    /// - remaining type mismatches surface as [`ModelError::Decode`].
    pub fn build<R: Model>(self) -> ModelResult<R> {
        let schema = R::SCHEMA;
        let mut raw = Map::with_capacity(self.0.len());

        for (name, value) in self.0 {
            match schema.field(&name) {
                None if schema.open => {
                    raw.insert(name, value);
                }
                None => {
                    return Err(ModelError::UnknownParameter {
                        schema: schema.name,
                        name,
                    });
                }
                Some(field) if field.read_only => {
                    return Err(ModelError::ReadOnlyParameter {
                        schema: schema.name,
                        name,
                    });
                }
                Some(field) => {
                    let value = if field.auto_list && !value.is_array() {
                        Value::Array(vec![value])
                    } else {
                        value
                    };
                    raw.insert(name, value);
                }
            }
        }

        R::from_raw(Value::Object(raw))
    }
}

/// Call-adapter seam of the request pipeline: anything an operation method
/// accepts in place of a pre-built request model.
///
/// Implemented by every request model (forwarded unchanged) and by
/// [`Args`] (built and validated against the model's schema).
pub trait IntoRequest<R: Model> {
    fn into_request(self) -> ModelResult<R>;
}

impl<R: Model> IntoRequest<R> for R {
    fn into_request(self) -> ModelResult<R> {
        Ok(self)
    }
}

impl<R: Model> IntoRequest<R> for Args {
    fn into_request(self) -> ModelResult<R> {
        self.build()
    }
}
