//! Recording stand-ins for the transport and persistence collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::interface::{ConfigPersistence, Transport};
use crate::nitro::payload::Fields;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub payload: Option<Value>,
}

/// Replies with a fixed value to every mutation and another to every GET.
pub struct StubTransport {
    mutation_reply: Value,
    get_reply: Value,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTransport {
    pub fn accepting() -> Self {
        Self::replying(Value::Bool(true))
    }

    pub fn replying(mutation_reply: Value) -> Self {
        Self {
            mutation_reply,
            get_reply: json!({"errorcode": 0, "message": "Done"}),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_get(mut self, get_reply: Value) -> Self {
        self.get_reply = get_reply;
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str, path: &str, payload: Option<Value>) {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            payload,
        });
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post(&self, path: &str, payload: Value) -> Value {
        self.record("POST", path, Some(payload));
        self.mutation_reply.clone()
    }

    async fn put(&self, path: &str, payload: Value) -> Value {
        self.record("PUT", path, Some(payload));
        self.mutation_reply.clone()
    }

    async fn get(&self, path: &str) -> Value {
        self.record("GET", path, None);
        self.get_reply.clone()
    }
}

pub struct StubPersistence {
    reply: Value,
    calls: AtomicUsize,
}

impl StubPersistence {
    pub fn returning(reply: Value) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigPersistence for StubPersistence {
    async fn save_config(&self) -> Value {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

/// Builds a field map from a JSON object literal.
pub fn fields(value: Value) -> Fields {
    value.as_object().cloned().unwrap_or_default()
}
