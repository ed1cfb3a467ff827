//! HTTP transport.
//!
//! Owns the [`reqwest::Client`] and the plugin chain. Takes an operation
//! name plus an already-encoded JSON payload, resolves the name against the
//! static spec table, flattens the payload into query parameters and sends
//! the request. Responses come back as raw JSON for the caller to decode.

use reqwest::RequestBuilder;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{ClientError, ClientResult};
use crate::plugin::RequestPlugin;
use crate::spec::{self, HttpMethod};

pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    plugins: Vec<Box<dyn RequestPlugin>>,
}

impl Transport {
    pub fn new(
        user_agent: &str,
        base_url: impl Into<String>,
        plugins: Vec<Box<dyn RequestPlugin>>,
    ) -> ClientResult<Self> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            plugins,
        })
    }

    /// Calls a remote operation with the given JSON payload.
    ///
    /// The payload must serialize to a JSON object; each entry becomes one
    /// query parameter. Returns the decoded response body. Transport-level
    /// failures (unknown operation, non-2xx status) are errors; an `ok: false`
    /// body is not, it flows back to the caller as data.
    pub async fn call(&self, name: &str, payload: &Value) -> ClientResult<Value> {
        let op = spec::operation(name)
            .ok_or_else(|| ClientError::UnknownOperation(name.to_string()))?;

        let params = encode_params(name, payload)?;
        let url = format!("{}{}", self.base_url, op.path);

        let mut req = match op.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
        };
        req = req.query(&params);
        req = self.apply_plugins(op, req);

        debug!(operation = name, params = params.len(), "calling remote operation");

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let error = extract_error(&body, status);
            debug!(operation = name, status = status.as_u16(), "remote operation failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                error,
            });
        }

        let body: Value = resp.json().await?;
        Ok(body)
    }

    fn apply_plugins(
        &self,
        op: &'static spec::OperationSpec,
        mut req: RequestBuilder,
    ) -> RequestBuilder {
        for plugin in &self.plugins {
            trace!(plugin = plugin.name(), operation = op.name, "applying request plugin");
            req = plugin.apply(op, req);
        }
        req
    }
}

/// Flattens a JSON object into query parameters.
///
/// Strings pass through unquoted, scalars use their display form, arrays of
/// strings are comma-joined, and anything structured is embedded as a JSON
/// literal.
fn encode_params(name: &str, payload: &Value) -> ClientResult<Vec<(String, String)>> {
    let map = match payload {
        Value::Object(map) => map,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ClientError::Config(format!(
                "payload for {name} must be an object, got {other}"
            )));
        }
    };

    let mut params = Vec::with_capacity(map.len());
    for (key, value) in map {
        if value.is_null() {
            continue;
        }
        params.push((key.clone(), encode_value(value)));
    }
    Ok(params)
}

fn encode_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

fn extract_error(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(err)) = map.get("error") {
            return err.clone();
        }
    }
    if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        body.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn string_values_are_not_quoted() {
        assert_eq!(encode_value(&json!("general")), "general");
    }

    #[test]
    fn scalars_use_display_form() {
        assert_eq!(encode_value(&json!(true)), "true");
        assert_eq!(encode_value(&json!(42)), "42");
    }

    #[test]
    fn string_arrays_are_comma_joined() {
        assert_eq!(encode_value(&json!(["U1", "U2", "U3"])), "U1,U2,U3");
    }

    #[test]
    fn structured_values_are_json_encoded() {
        assert_eq!(encode_value(&json!({"a": 1})), r#"{"a":1}"#);
        assert_eq!(encode_value(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn null_entries_are_skipped() {
        let params = encode_params("api.test", &json!({"a": "x", "b": null})).unwrap();
        assert_eq!(params, vec![("a".to_string(), "x".to_string())]);
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert!(encode_params("api.test", &json!([1])).is_err());
    }
}
