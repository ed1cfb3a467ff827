//! Typed asynchronous client for the Slack Web API.
//!
//! The entry point is [`Bot`]: it owns the HTTP transport and exposes one
//! field per API namespace (`bot.chat`, `bot.channels`, ...). Every call
//! goes through two stages. Stage one builds and validates the typed
//! request model, either directly or from keyword-style
//! [`Args`](slackbot_model::Args); nothing is sent if validation fails.
//! Stage two resolves the operation against a static spec table, encodes
//! the payload into query parameters and decodes the JSON response into
//! the typed response model.
//!
//! ```no_run
//! use slackbot_client::Bot;
//! use slackbot_model::args;
//!
//! # async fn run() -> Result<(), slackbot_client::ClientError> {
//! let bot = Bot::new("xoxb-...")?;
//! let posted = bot
//!     .chat
//!     .post_message(args! { channel: "C024BE91L", text: "hello" })
//!     .await?;
//! println!("posted at {}", posted.ts.unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod modules;
pub mod namespace;
pub mod plugin;
pub mod spec;
pub mod transport;

pub use client::{Bot, ClientCore};
pub use config::{BotConfig, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use models::*;
pub use modules::*;
pub use namespace::Namespace;
pub use plugin::{QueryToken, RequestPlugin};
pub use spec::{HttpMethod, OperationSpec, OPERATIONS, operation};
pub use transport::Transport;
