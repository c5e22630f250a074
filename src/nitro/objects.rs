//! Generic add/get/update/unset engine for NITRO configuration objects.
//!
//! Every call is one request followed, for successful mutations that asked
//! for it, by one save request. Nothing is cached between calls.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::interface::{ConfigPersistence, ResponseUnwrapper, Transport};
use crate::nitro::common::EnvelopeUnwrapper;
use crate::nitro::error::SchemaError;
use crate::nitro::payload::{
    build_filter, build_payload, build_unset_payload, is_truthy, wire_pairs, Fields,
};
use crate::nitro::result::{MutationRequest, MutationResult, SaveOutcome};
use crate::nitro::schema::{ObjectSchema, Operation};
use crate::nitro::NitroClient;

#[derive(Clone)]
pub struct ConfigObjectClient {
    transport: Arc<dyn Transport>,
    unwrapper: Arc<dyn ResponseUnwrapper>,
    persistence: Arc<dyn ConfigPersistence>,
}

impl ConfigObjectClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        unwrapper: Arc<dyn ResponseUnwrapper>,
        persistence: Arc<dyn ConfigPersistence>,
    ) -> Self {
        Self {
            transport,
            unwrapper,
            persistence,
        }
    }

    /// Wires one HTTP client in as both transport and persistence.
    pub fn from_nitro(client: NitroClient) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), Arc::new(EnvelopeUnwrapper), client)
    }

    /// Adds a new object to the running configuration (POST).
    pub async fn create(
        &self,
        schema: &ObjectSchema,
        fields: &Fields,
        save: bool,
    ) -> Result<MutationResult, SchemaError> {
        schema.check_operation(Operation::Add, save)?;
        schema.check_fields(fields.keys().map(String::as_str))?;

        let payload = build_payload(schema, fields);
        let path = format!("config/{}", schema.type_name);
        debug!("Adding {} via POST {}", schema.type_name, path);
        let execution = self.transport.post(&path, payload).await;
        self.finish(schema, execution, save).await
    }

    /// Modifies an existing object in place (PUT).
    pub async fn update(
        &self,
        schema: &ObjectSchema,
        fields: &Fields,
        save: bool,
    ) -> Result<MutationResult, SchemaError> {
        schema.check_operation(Operation::Update, save)?;
        schema.check_fields(fields.keys().map(String::as_str))?;

        let payload = build_payload(schema, fields);
        let path = format!("config/{}", schema.type_name);
        debug!("Updating {} via PUT {}", schema.type_name, path);
        let execution = self.transport.put(&path, payload).await;
        self.finish(schema, execution, save).await
    }

    /// Resets the named fields to their appliance defaults.
    ///
    /// Only the keys of `fields_to_clear` matter; each must carry a truthy
    /// sentinel (usually `true`) to be included.
    pub async fn unset(
        &self,
        schema: &ObjectSchema,
        fields_to_clear: &Fields,
        save: bool,
    ) -> Result<MutationResult, SchemaError> {
        schema.check_operation(Operation::Unset, save)?;
        schema.check_fields(fields_to_clear.keys().map(String::as_str))?;

        let payload = build_unset_payload(schema, fields_to_clear);
        let path = format!("config/{}?action=unset", schema.type_name);
        debug!("Unsetting {} fields via POST {}", schema.type_name, path);
        let execution = self.transport.post(&path, payload).await;
        self.finish(schema, execution, save).await
    }

    /// Fetches the objects matching every supplied filter exactly.
    pub async fn query(&self, schema: &ObjectSchema, filters: &Fields) -> Result<Value, SchemaError> {
        schema.check_operation(Operation::Get, false)?;
        schema.check_fields(filters.keys().map(String::as_str))?;

        let pairs = wire_pairs(schema, filters);
        let path = format!("config/{}{}", schema.type_name, build_filter(&pairs));
        debug!("Querying {} via GET {}", schema.type_name, path);
        let raw = self.transport.get(&path).await;
        Ok(self.unwrapper.parse_return(raw, schema.type_name))
    }

    /// Enables the object identified by the schema's action key.
    ///
    /// A falsy `key` sends nothing and yields a failed result carrying
    /// `"<key> value not specified."`.
    ///
    /// # Arguments
    ///
    /// * `schema` - Object type; must declare an action key
    /// * `key` - Value of the action key field, e.g. the server name
    /// * `save` - Save the running configuration if the call succeeds
    pub async fn enable(
        &self,
        schema: &ObjectSchema,
        key: &Value,
        save: bool,
    ) -> Result<MutationResult, SchemaError> {
        self.toggle(schema, Operation::Enable, key, save).await
    }

    /// Disables the object identified by the schema's action key.
    ///
    /// # Arguments
    ///
    /// * `schema` - Object type; must declare an action key
    /// * `key` - Value of the action key field
    /// * `save` - Save the running configuration if the call succeeds
    pub async fn disable(
        &self,
        schema: &ObjectSchema,
        key: &Value,
        save: bool,
    ) -> Result<MutationResult, SchemaError> {
        self.toggle(schema, Operation::Disable, key, save).await
    }

    async fn toggle(
        &self,
        schema: &ObjectSchema,
        operation: Operation,
        key: &Value,
        save: bool,
    ) -> Result<MutationResult, SchemaError> {
        schema.check_operation(operation, save)?;
        let key_name = schema
            .action_key
            .ok_or_else(|| SchemaError::MissingActionKey(schema.type_name.to_string()))?;
        let wire = schema.wire_name(key_name).ok_or_else(|| SchemaError::UnknownField {
            type_name: schema.type_name.to_string(),
            field: key_name.to_string(),
        })?;

        if !is_truthy(key) {
            return Ok(MutationResult::failure(Value::String(format!(
                "{} value not specified.",
                key_name
            ))));
        }

        let mut body = Map::new();
        body.insert(wire.to_string(), key.clone());
        let mut payload = Map::new();
        payload.insert(schema.type_name.to_string(), Value::Object(body));

        let path = format!("config/{}?action={}", schema.type_name, operation);
        debug!("Sending {} for {} via POST {}", operation, schema.type_name, path);
        let execution = self.transport.post(&path, Value::Object(payload)).await;
        self.finish(schema, execution, save).await
    }

    /// Runs a request value through the matching operation.
    ///
    /// `Get` requests are rejected here; use [`ConfigObjectClient::query`].
    /// Enable/disable read their key from the schema's action key field.
    pub async fn execute(&self, request: &MutationRequest<'_>) -> Result<MutationResult, SchemaError> {
        let schema = request.object_schema;
        match request.operation {
            Operation::Add => self.create(schema, &request.fields, request.save).await,
            Operation::Update => self.update(schema, &request.fields, request.save).await,
            Operation::Unset => self.unset(schema, &request.fields, request.save).await,
            Operation::Enable | Operation::Disable => {
                let key_name = schema
                    .action_key
                    .ok_or_else(|| SchemaError::MissingActionKey(schema.type_name.to_string()))?;
                schema.check_fields(request.fields.keys().map(String::as_str))?;
                let key = request.fields.get(key_name).cloned().unwrap_or(Value::Null);
                self.toggle(schema, request.operation, &key, request.save).await
            }
            Operation::Get => Err(SchemaError::UnsupportedOperation {
                type_name: schema.type_name.to_string(),
                operation: Operation::Get,
            }),
        }
    }

    /// Saves the running configuration unconditionally.
    pub async fn save_config(&self) -> Value {
        self.persistence.save_config().await
    }

    async fn finish(
        &self,
        schema: &ObjectSchema,
        execution: Value,
        save: bool,
    ) -> Result<MutationResult, SchemaError> {
        if execution != Value::Bool(true) {
            warn!("{} request rejected: {}", schema.type_name, execution);
            return Ok(MutationResult::failure(execution));
        }

        if !save {
            return Ok(MutationResult::success(SaveOutcome::NotSaved));
        }

        info!("Saving running configuration after {} change", schema.type_name);
        let saved = self.persistence.save_config().await;
        Ok(MutationResult::success(SaveOutcome::Saved(saved)))
    }
}
