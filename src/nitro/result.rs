//! Request and result values for configuration object calls.

use serde_json::{json, Map, Value};

use crate::nitro::payload::Fields;
use crate::nitro::schema::{ObjectSchema, Operation};

/// One CRUD call expressed as data.
#[derive(Debug, Clone)]
pub struct MutationRequest<'s> {
    pub object_schema: &'s ObjectSchema,
    pub operation: Operation,
    pub fields: Fields,
    pub save: bool,
}

impl<'s> MutationRequest<'s> {
    pub fn new(object_schema: &'s ObjectSchema, operation: Operation, fields: Fields) -> Self {
        Self {
            object_schema,
            operation,
            fields,
            save: false,
        }
    }

    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }
}

/// What happened to the optional save step.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Save was not requested. Rendered as the string `"False"`.
    NotSaved,
    /// Whatever the persistence collaborator returned.
    Saved(Value),
}

impl SaveOutcome {
    pub fn to_value(&self) -> Value {
        match self {
            SaveOutcome::NotSaved => Value::String("False".to_string()),
            SaveOutcome::Saved(value) => value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    pub succeeded: bool,
    /// The transport's reply, verbatim, when it was anything but `true`.
    pub error: Option<Value>,
    /// `None` when the mutation failed and the save step was skipped.
    pub save_result: Option<SaveOutcome>,
}

impl MutationResult {
    pub fn success(save_result: SaveOutcome) -> Self {
        Self {
            succeeded: true,
            error: None,
            save_result: Some(save_result),
        }
    }

    pub fn failure(error: Value) -> Self {
        Self {
            succeeded: false,
            error: Some(error),
            save_result: None,
        }
    }

    /// The historical dictionary shape, with string-typed booleans:
    /// `{"result": "True", "save": "False"}` or
    /// `{"result": "False", "error": ...}`.
    pub fn to_legacy(&self) -> Value {
        let mut out = Map::new();
        let flag = if self.succeeded { "True" } else { "False" };
        out.insert("result".to_string(), json!(flag));
        if let Some(error) = &self.error {
            out.insert("error".to_string(), error.clone());
        }
        if let Some(save) = &self.save_result {
            out.insert("save".to_string(), save.to_value());
        }
        Value::Object(out)
    }
}
