//! HTTP client for the NITRO configuration API.
//!
//! Implements the [`Transport`] and [`ConfigPersistence`] contracts on top of
//! reqwest. Failures are flattened into values: a mutating call yields `true`
//! or whatever the appliance (or the network layer) reported.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
    Client, Method,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::interface::{ConfigPersistence, Transport};
use crate::nitro::common::{execution_reply, query_reply};
use crate::nitro::{NitroConfig, NitroError};

/// Client for interacting with the NITRO HTTP API.
pub struct NitroClient {
    /// Base URL ending in `/nitro/v1/`
    pub base_url: String,
    username: String,
    password: String,
    client: Client,
    /// Custom headers to add to requests
    custom_headers: HeaderMap,
}

impl NitroClient {
    pub fn new(config: &NitroConfig) -> Result<Self, NitroError> {
        if config.host.is_empty() {
            return Err(NitroError::Config("host not specified".to_string()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_ssl)
            .build()
            .map_err(|e| NitroError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url(),
            username: config.username.clone(),
            password: config.password.clone(),
            client,
            custom_headers: HeaderMap::new(),
        })
    }

    /// Adds a custom header to every request. Invalid names or values are ignored.
    pub fn add_header(&mut self, name: &str, value: &str) -> &mut Self {
        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::from_str(name), HeaderValue::from_str(value))
        {
            self.custom_headers.insert(header_name, header_value);
        }
        self
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        let mut request = self
            .client
            .request(method, &url)
            .header("X-NITRO-USER", &self.username)
            .header("X-NITRO-PASS", &self.password)
            .header(CONTENT_TYPE, "application/json");

        for (name, value) in self.custom_headers.iter() {
            request = request.header(name, value);
        }

        if let Some(json_body) = body {
            request = request.json(&json_body);
        }

        request.send().await
    }

    async fn execute(&self, method: Method, path: &str, payload: Value) -> Value {
        match self.send(method, path, Some(payload)).await {
            Ok(resp) => execution_reply(resp).await,
            Err(e) => Value::String(format!("Request failed: {}", e)),
        }
    }
}

#[async_trait]
impl Transport for NitroClient {
    async fn post(&self, path: &str, payload: Value) -> Value {
        self.execute(Method::POST, path, payload).await
    }

    async fn put(&self, path: &str, payload: Value) -> Value {
        self.execute(Method::PUT, path, payload).await
    }

    async fn get(&self, path: &str) -> Value {
        match self.send(Method::GET, path, None).await {
            Ok(resp) => query_reply(resp).await,
            Err(e) => Value::String(format!("Request failed: {}", e)),
        }
    }
}

#[async_trait]
impl ConfigPersistence for NitroClient {
    async fn save_config(&self) -> Value {
        info!("Saving running configuration");
        self.post("config/nsconfig?action=save", json!({ "nsconfig": {} }))
            .await
    }
}
