use async_trait::async_trait;
use serde_json::Value;

/// Moves payloads to and from the appliance's `config/` API.
///
/// Mutating calls return `Value::Bool(true)` on success and anything else on
/// failure; error replies are returned, never raised, and network failures
/// are not distinguished from application rejections.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, path: &str, payload: Value) -> Value;

    async fn put(&self, path: &str, payload: Value) -> Value;

    /// `path` already carries any query string.
    async fn get(&self, path: &str) -> Value;
}

/// Extracts the `type_name`-keyed records from a raw GET response.
pub trait ResponseUnwrapper: Send + Sync {
    fn parse_return(&self, raw: Value, type_name: &str) -> Value;
}

/// Persists the running configuration on the appliance.
#[async_trait]
pub trait ConfigPersistence: Send + Sync {
    async fn save_config(&self) -> Value;
}
