//! Namespace dispatch.
//!
//! Every API module holds a [`Namespace`]: the dotted prefix it owns plus a
//! weak handle back to the shared client core. Dispatch is the second stage
//! of a call; argument validation against the request schema happens first,
//! in [`IntoRequest`], before any handle is touched.

use std::sync::{Arc, Weak};

use serde_json::Value;

use slackbot_model::{IntoRequest, Model};

use crate::client::ClientCore;
use crate::error::{ClientError, ClientResult};

#[derive(Clone)]
pub struct Namespace {
    core: Weak<ClientCore>,
    prefix: &'static str,
}

impl Namespace {
    pub(crate) fn new(core: &Arc<ClientCore>, prefix: &'static str) -> Self {
        Self {
            core: Arc::downgrade(core),
            prefix,
        }
    }

    /// The dotted prefix this namespace dispatches under.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    fn core(&self) -> ClientResult<Arc<ClientCore>> {
        self.core.upgrade().ok_or(ClientError::ClientGone)
    }

    /// Calls `{prefix}.{method}` and decodes the body into `T`.
    pub async fn call<R, T>(
        &self,
        method: &str,
        request: impl IntoRequest<R>,
    ) -> ClientResult<T>
    where
        R: Model,
        T: Model,
    {
        let raw = self.call_raw(method, request).await?;
        Ok(T::from_raw(raw)?)
    }

    /// Calls `{prefix}.{method}` and reports only the `ok` flag.
    ///
    /// Transport failures still surface as errors; `Ok(false)` means the
    /// server answered successfully with an `ok: false` body.
    pub async fn call_ack<R>(
        &self,
        method: &str,
        request: impl IntoRequest<R>,
    ) -> ClientResult<bool>
    where
        R: Model,
    {
        let raw = self.call_raw(method, request).await?;
        Ok(raw.get("ok").and_then(Value::as_bool).unwrap_or(false))
    }

    /// Calls `{prefix}.{method}` and returns the body undecoded.
    ///
    /// Stage one still runs in full: the arguments are validated against
    /// `R`'s schema before the request goes out.
    pub async fn call_raw<R>(
        &self,
        method: &str,
        request: impl IntoRequest<R>,
    ) -> ClientResult<Value>
    where
        R: Model,
    {
        let req = request.into_request()?;
        let payload = req.to_raw()?;
        let core = self.core()?;
        let name = format!("{}.{}", self.prefix, method);
        core.transport.call(&name, &payload).await
    }
}
