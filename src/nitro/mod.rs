//! NITRO module for the nitro-config library
//!
//! This module implements the schema-driven configuration object client.
//!
//! ## Layout:
//! - `schema` / `catalog` - declarative object type rows and the built-in table
//! - `payload` - truthy field filtering, payload and filter construction
//! - `objects` - the generic `ConfigObjectClient` engine
//! - `client` / `common` - the reqwest-backed transport and response helpers
//!
//! ## Testing strategy:
//! - Each module contains its own unit tests within a `#[cfg(test)] mod tests` block
//! - Engine tests use the recording stubs in `test_utils.rs`
//! - HTTP behavior is covered by the wiremock tests in the `tests/` directory

pub mod catalog;
pub mod client;
pub mod common;
pub mod error;
pub mod objects;
pub mod payload;
pub mod result;
pub mod schema;
#[cfg(test)]
pub mod test_utils;

pub use client::NitroClient;
pub use common::EnvelopeUnwrapper;
pub use error::{NitroError, SchemaError};
pub use objects::ConfigObjectClient;
pub use payload::Fields;
pub use result::{MutationRequest, MutationResult, SaveOutcome};
pub use schema::{FieldSpec, ObjectSchema, Operation, SchemaRegistry};

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Connection settings for one appliance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NitroConfig {
    /// Appliance address, optionally with a port, e.g. "10.0.0.5".
    pub host: String,
    pub username: String,
    pub password: String,
    /// Use HTTPS for the API.
    pub use_ssl: bool,
    /// Verify the appliance certificate. Appliances usually ship self-signed ones.
    pub verify_ssl: bool,
    pub timeout_secs: u64,
}

impl NitroConfig {
    /// Settings for `host` with the defaults for everything else.
    ///
    /// # Arguments
    ///
    /// * `host` - Appliance address, optionally with a port (`10.0.0.5:8080`)
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
            ..Self::default()
        }
    }

    /// Sets the user and password sent as `X-NITRO-USER`/`X-NITRO-PASS`.
    pub fn with_credentials(mut self, username: &str, password: &str) -> Self {
        self.username = username.to_string();
        self.password = password.to_string();
        self
    }

    /// # Arguments
    ///
    /// * `use_ssl` - Talk HTTPS instead of plain HTTP
    /// * `verify_ssl` - Reject appliance certificates that do not validate
    pub fn with_ssl(mut self, use_ssl: bool, verify_ssl: bool) -> Self {
        self.use_ssl = use_ssl;
        self.verify_ssl = verify_ssl;
        self
    }

    /// Per-request timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Loads settings from a JSON file; missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, NitroError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Applies `NITRO_HOST`, `NITRO_USER` and `NITRO_PASS` when set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(host) = std::env::var("NITRO_HOST") {
            self.host = host;
        }
        if let Ok(user) = std::env::var("NITRO_USER") {
            self.username = user;
        }
        if let Ok(pass) = std::env::var("NITRO_PASS") {
            self.password = pass;
        }
        self
    }

    pub fn base_url(&self) -> String {
        let protocol = if self.use_ssl { "https" } else { "http" };
        format!("{}://{}/nitro/v1/", protocol, self.host)
    }
}

impl Default for NitroConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: "nsroot".to_string(),
            password: String::new(),
            use_ssl: true,
            verify_ssl: false,
            timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_config_from_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"host": "ns.example.com", "password": "secret"}}"#).unwrap();

        let config = NitroConfig::from_file(file.path()).unwrap();
        assert_eq!(config.host, "ns.example.com");
        assert_eq!(config.password, "secret");
        assert_eq!(config.username, "nsroot");
        assert!(config.use_ssl);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_from_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            NitroConfig::from_file(file.path()),
            Err(NitroError::Json(_))
        ));
        assert!(matches!(
            NitroConfig::from_file("/nonexistent/nitro.json"),
            Err(NitroError::Io(_))
        ));
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var("NITRO_HOST", "192.0.2.10");
        std::env::set_var("NITRO_USER", "admin");
        std::env::remove_var("NITRO_PASS");

        let config = NitroConfig::new("ignored")
            .with_credentials("nsroot", "keep")
            .with_env_overrides();
        assert_eq!(config.host, "192.0.2.10");
        assert_eq!(config.username, "admin");
        assert_eq!(config.password, "keep");

        std::env::remove_var("NITRO_HOST");
        std::env::remove_var("NITRO_USER");
    }
}
