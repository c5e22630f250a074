//! Payload and filter construction.
//!
//! The only policy here is field presence: a caller-supplied value reaches the
//! wire iff it is truthy. `0`, `false`, `""`, `null` and empty collections are
//! dropped silently, which means a field can never be explicitly cleared
//! through add/update (use unset for that).

use serde_json::{Map, Value};

use crate::nitro::schema::ObjectSchema;

/// Caller-supplied fields, keyed by logical name.
pub type Fields = Map<String, Value>;

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Truthy `(wire_name, value)` pairs in schema declaration order.
///
/// Field names must already have been validated against the schema.
pub fn wire_pairs<'a>(schema: &ObjectSchema, fields: &'a Fields) -> Vec<(&'static str, &'a Value)> {
    schema
        .fields
        .iter()
        .filter_map(|spec| {
            fields
                .get(spec.name)
                .filter(|value| is_truthy(value))
                .map(|value| (spec.wire, value))
        })
        .collect()
}

/// `{type_name: {wire: value, ..}}` for add and update.
pub fn build_payload(schema: &ObjectSchema, fields: &Fields) -> Value {
    let body: Map<String, Value> = wire_pairs(schema, fields)
        .into_iter()
        .map(|(wire, value)| (wire.to_string(), value.clone()))
        .collect();
    wrap(schema, body)
}

/// `{type_name: {wire: true, ..}}` for unset; only the names matter.
pub fn build_unset_payload(schema: &ObjectSchema, fields: &Fields) -> Value {
    let body: Map<String, Value> = wire_pairs(schema, fields)
        .into_iter()
        .map(|(wire, _)| (wire.to_string(), Value::Bool(true)))
        .collect();
    wrap(schema, body)
}

fn wrap(schema: &ObjectSchema, body: Map<String, Value>) -> Value {
    let mut payload = Map::new();
    payload.insert(schema.type_name.to_string(), Value::Object(body));
    Value::Object(payload)
}

/// Serializes filter pairs into a NITRO query suffix: `?filter=a:1,b:2`.
///
/// Values are percent-encoded so separators inside them cannot split the
/// expression. An empty filter list yields an empty string so the bare
/// collection path is requested.
pub fn build_filter(pairs: &[(&str, &Value)]) -> String {
    if pairs.is_empty() {
        return String::new();
    }
    let terms: Vec<String> = pairs
        .iter()
        .map(|(wire, value)| format!("{}:{}", wire, urlencoding::encode(&render(value))))
        .collect();
    format!("?filter={}", terms.join(","))
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
