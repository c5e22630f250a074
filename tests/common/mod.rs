//! Shared fixtures for the integration tests: logging setup and recording
//! stand-ins for the transport and persistence collaborators.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

use async_trait::async_trait;
use nitro_config::nitro::{EnvelopeUnwrapper, Fields};
use nitro_config::{ConfigObjectClient, ConfigPersistence, Transport};
use serde_json::Value;

static INIT: Once = Once::new();

/// Sets up logging for tests
pub fn setup_logging() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .is_test(true)
            .try_init();
    });
}

pub struct RecordingTransport {
    pub reply: Value,
    pub get_reply: Value,
    pub paths: Mutex<Vec<(String, String)>>,
    pub payloads: Mutex<Vec<Value>>,
}

impl RecordingTransport {
    pub fn new(reply: Value, get_reply: Value) -> Arc<Self> {
        Arc::new(Self {
            reply,
            get_reply,
            paths: Mutex::new(Vec::new()),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn paths(&self) -> Vec<(String, String)> {
        self.paths.lock().unwrap().clone()
    }

    pub fn payloads(&self) -> Vec<Value> {
        self.payloads.lock().unwrap().clone()
    }

    fn record(&self, method: &str, path: &str, payload: Option<Value>) {
        self.paths
            .lock()
            .unwrap()
            .push((method.to_string(), path.to_string()));
        if let Some(payload) = payload {
            self.payloads.lock().unwrap().push(payload);
        }
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, path: &str, payload: Value) -> Value {
        self.record("POST", path, Some(payload));
        self.reply.clone()
    }

    async fn put(&self, path: &str, payload: Value) -> Value {
        self.record("PUT", path, Some(payload));
        self.reply.clone()
    }

    async fn get(&self, path: &str) -> Value {
        self.record("GET", path, None);
        self.get_reply.clone()
    }
}

pub struct CountingPersistence {
    pub reply: Value,
    pub calls: AtomicUsize,
}

impl CountingPersistence {
    pub fn new(reply: Value) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigPersistence for CountingPersistence {
    async fn save_config(&self) -> Value {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

pub fn client(
    transport: &Arc<RecordingTransport>,
    persistence: &Arc<CountingPersistence>,
) -> ConfigObjectClient {
    ConfigObjectClient::new(
        transport.clone(),
        Arc::new(EnvelopeUnwrapper),
        persistence.clone(),
    )
}

pub fn fields(value: Value) -> Fields {
    value.as_object().cloned().unwrap_or_default()
}
