//! Marshalling core for the Slack Web API binding.
//!
//! This crate defines the mechanism that the endpoint declarations in
//! `slackbot-client` ride on:
//! - [`Schema`] and [`FieldSpec`]: static per-model field tables
//! - [`Model`]: raw-payload conversion for every request/response type
//! - [`Args`]: loose keyword-style parameters collected into a typed request
//! - [`Timestamp`]: the Slack `ts` value (epoch seconds plus microseconds)
//! - [`Extra`] / [`DynamicModel`]: pass-through storage for open schemas
//!
//! Nothing here performs HTTP; the transport lives in `slackbot-client`.

mod args;
mod dynamic;
mod error;
mod field;
mod schema;
mod timestamp;

#[macro_use]
mod macros;

pub use args::{Args, IntoRequest};
pub use dynamic::{DynamicModel, Extra};
pub use error::{ModelError, ModelResult};
pub use field::{FieldKind, FieldSpec};
pub use schema::{Model, Schema};
pub use timestamp::Timestamp;
