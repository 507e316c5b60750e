//! Usage reporting for `docmap`.
//!
//! Tools and host engines batch [`UsageRecord`]s and hand them to a
//! [`MessageTransport`]. Delivery is fire-and-forget: a transport never
//! surfaces errors to its caller. Without a valid send credential it drops
//! batches quietly, and serialization failures are logged and dropped. This
//! is the project-wide convention at integration boundaries where best-effort
//! delivery is acceptable.
//!
//! The HTTP delivery path lives with the deployment, behind the
//! [`MessageTransport`] seam; this crate ships the serializer and a logging
//! transport.

use chrono::{DateTime, Utc};
use log::{debug, error, warn};
use serde::Serialize;
use serde_json::Value;

/// Default collector endpoint, overridable through [`UsageConfig`].
pub const DEFAULT_ENDPOINT: &str = "https://usage.docmap.dev/messages";

/// One recorded mapping operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
    /// Operation name (e.g., `"schema"`, `"geometry"`).
    pub operation: String,
    /// Collection the operation ran against, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<String>,
    /// Mapping strategy involved, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    /// When the operation ran.
    pub timestamp: DateTime<Utc>,
}

impl UsageRecord {
    /// Records `operation` at the current instant.
    #[must_use]
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            collection: None,
            strategy: None,
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }
}

/// Transport configuration: where batches go and the credential to send them
/// with.
#[derive(Debug, Clone)]
pub struct UsageConfig {
    api_key: Option<String>,
    endpoint: String,
}

impl UsageConfig {
    /// Creates a configuration with an explicit credential.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: endpoint.into(),
        }
    }

    /// Reads `DOCMAP_USAGE_KEY` and `DOCMAP_USAGE_URL` from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var("DOCMAP_USAGE_KEY").ok().filter(|k| !k.is_empty());
        let endpoint =
            std::env::var("DOCMAP_USAGE_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        Self { api_key, endpoint }
    }

    /// Whether a send credential is configured. Transports drop batches
    /// without one.
    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// The configured credential, if any.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The collector endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, None)
    }
}

/// Serializes a batch into the collector payload.
///
/// # Errors
///
/// Returns the underlying `serde_json` error when a record fails to
/// serialize; transports log and drop it.
pub fn serialize_batch(api_key: &str, records: &[UsageRecord]) -> serde_json::Result<Value> {
    let mut payload = serde_json::Map::new();
    payload.insert("apiKey".to_string(), Value::String(api_key.to_string()));
    payload.insert("messages".to_string(), serde_json::to_value(records)?);
    Ok(Value::Object(payload))
}

/// Fire-and-forget delivery of usage batches.
///
/// Implementations never surface errors to the caller; they log and drop.
pub trait MessageTransport: Send + Sync {
    /// Deliver a batch of usage records, best effort.
    fn send(&self, records: &[UsageRecord]);
}

/// A [`MessageTransport`] that serializes batches and writes them to the log
/// instead of the wire.
///
/// Stands in wherever no HTTP delivery is deployed; also the reference for
/// the credential-gating behaviour every transport must share.
#[derive(Debug)]
pub struct LogTransport {
    config: UsageConfig,
}

impl LogTransport {
    /// Creates the transport, warning once when no credential is configured.
    #[must_use]
    pub fn new(config: UsageConfig) -> Self {
        if !config.has_credential() {
            warn!("Missing usage credential. Will NOT send usage records.");
        }
        Self { config }
    }

    /// The transport's configuration.
    #[must_use]
    pub fn config(&self) -> &UsageConfig {
        &self.config
    }
}

impl MessageTransport for LogTransport {
    fn send(&self, records: &[UsageRecord]) {
        let Some(api_key) = self.config.api_key() else {
            debug!("Missing usage credential. NOT sending {} record(s).", records.len());
            return;
        };

        match serialize_batch(api_key, records) {
            Ok(payload) => {
                debug!("usage payload for {}: {payload}", self.config.endpoint());
            },
            Err(err) => {
                error!("Error serializing usage records: {err}");
            },
        }
    }
}
