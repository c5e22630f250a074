//! Declarative description of NITRO configuration object types.
//!
//! Every object type the client can touch is one `ObjectSchema` row: the
//! type name (used both as the `config/{type}` path segment and as the
//! payload wrapper key), an ordered field table mapping logical parameter
//! names to wire names, and the set of operations the appliance accepts for
//! that type.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::nitro::error::SchemaError;

/// One CRUD-style call against a configuration object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Update,
    Unset,
    Get,
    Enable,
    Disable,
}

impl Operation {
    /// Operations offered by a plain configuration object.
    pub const CRUD: [Operation; 4] = [
        Operation::Add,
        Operation::Update,
        Operation::Unset,
        Operation::Get,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Update => "update",
            Operation::Unset => "unset",
            Operation::Get => "get",
            Operation::Enable => "enable",
            Operation::Disable => "disable",
        }
    }

    /// Whether the operation changes the running configuration.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Operation::Get)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A logical parameter name and the name it travels under on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub wire: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSchema {
    pub type_name: &'static str,
    /// Declaration order is significant: query filters are emitted in it.
    pub fields: Vec<FieldSpec>,
    pub supports_save: bool,
    pub operations: Vec<Operation>,
    /// Logical field that identifies the object for enable/disable.
    pub action_key: Option<&'static str>,
}

impl ObjectSchema {
    /// Starts a schema for `type_name` with no fields, the CRUD operations
    /// and save support.
    pub fn builder(type_name: &'static str) -> ObjectSchemaBuilder {
        ObjectSchemaBuilder {
            schema: ObjectSchema {
                type_name,
                fields: Vec::new(),
                supports_save: true,
                operations: Operation::CRUD.to_vec(),
                action_key: None,
            },
        }
    }

    pub fn wire_name(&self, name: &str) -> Option<&'static str> {
        self.fields.iter().find(|f| f.name == name).map(|f| f.wire)
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.operations.contains(&operation)
    }

    /// Rejects any caller-supplied field name the table does not declare.
    pub(crate) fn check_fields<'a, I>(&self, names: I) -> Result<(), SchemaError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for name in names {
            if self.wire_name(name).is_none() {
                return Err(SchemaError::UnknownField {
                    type_name: self.type_name.to_string(),
                    field: name.to_string(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn check_operation(&self, operation: Operation, save: bool) -> Result<(), SchemaError> {
        if !self.supports(operation) {
            return Err(SchemaError::UnsupportedOperation {
                type_name: self.type_name.to_string(),
                operation,
            });
        }
        if save && !self.supports_save {
            return Err(SchemaError::SaveNotSupported(self.type_name.to_string()));
        }
        Ok(())
    }
}

/// Builder used by the catalog to declare schema rows.
pub struct ObjectSchemaBuilder {
    schema: ObjectSchema,
}

impl ObjectSchemaBuilder {
    /// Adds fields whose logical and wire names are identical.
    pub fn fields(mut self, names: &[&'static str]) -> Self {
        self.schema
            .fields
            .extend(names.iter().map(|&name| FieldSpec { name, wire: name }));
        self
    }

    /// Adds a field whose logical name differs from its wire name.
    pub fn renamed(mut self, name: &'static str, wire: &'static str) -> Self {
        self.schema.fields.push(FieldSpec { name, wire });
        self
    }

    pub fn ops(mut self, operations: &[Operation]) -> Self {
        self.schema.operations = operations.to_vec();
        self
    }

    /// Enables `enable`/`disable` keyed on the given logical field.
    pub fn action_key(mut self, name: &'static str) -> Self {
        self.schema.action_key = Some(name);
        for op in [Operation::Enable, Operation::Disable] {
            if !self.schema.operations.contains(&op) {
                self.schema.operations.push(op);
            }
        }
        self
    }

    pub fn no_save(mut self) -> Self {
        self.schema.supports_save = false;
        self
    }

    pub fn build(self) -> ObjectSchema {
        self.schema
    }
}

/// Immutable lookup table of object schemas keyed by type name.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, ObjectSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `schema`, replacing any earlier entry with the same type name.
    pub fn with(mut self, schema: ObjectSchema) -> Self {
        self.schemas.insert(schema.type_name, schema);
        self
    }

    /// Looks up a schema by its NITRO type name.
    ///
    /// # Arguments
    ///
    /// * `type_name` - Resource name as it appears in the URL, e.g. `sslpolicy`
    ///
    /// Unregistered names yield [`SchemaError::UnknownSchema`].
    pub fn get(&self, type_name: &str) -> Result<&ObjectSchema, SchemaError> {
        self.schemas
            .get(type_name)
            .ok_or_else(|| SchemaError::UnknownSchema(type_name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectSchema> {
        self.schemas.values()
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action_schema() -> ObjectSchema {
        ObjectSchema::builder("responderaction")
            .fields(&["name"])
            .renamed("ns_type", "type")
            .fields(&["target"])
            .build()
    }

    #[test]
    fn test_builder_keeps_declaration_order() {
        let schema = action_schema();
        let names: Vec<_> = schema.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["name", "ns_type", "target"]);
        assert_eq!(schema.wire_name("ns_type"), Some("type"));
        assert_eq!(schema.wire_name("type"), None);
        assert!(schema.supports_save);
        assert_eq!(schema.operations, Operation::CRUD.to_vec());
    }

    #[test]
    fn test_check_fields_rejects_unknown() {
        let schema = action_schema();
        assert!(schema.check_fields(["name", "target"]).is_ok());
        let err = schema.check_fields(["name", "bogus"]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::UnknownField {
                type_name: "responderaction".to_string(),
                field: "bogus".to_string(),
            }
        );
    }

    #[test]
    fn test_check_operation() {
        let schema = ObjectSchema::builder("responderglobal_binding")
            .ops(&[Operation::Get])
            .no_save()
            .build();
        assert!(schema.check_operation(Operation::Get, false).is_ok());
        assert!(matches!(
            schema.check_operation(Operation::Add, false),
            Err(SchemaError::UnsupportedOperation { .. })
        ));

        let schema = ObjectSchema::builder("server")
            .fields(&["name"])
            .action_key("name")
            .no_save()
            .build();
        assert!(schema.supports(Operation::Enable));
        assert!(schema.supports(Operation::Disable));
        assert_eq!(
            schema.check_operation(Operation::Enable, true),
            Err(SchemaError::SaveNotSupported("server".to_string()))
        );
    }

    #[test]
    fn test_registry_lookup() {
        let registry = SchemaRegistry::new().with(action_schema());
        assert_eq!(registry.len(), 1);
        assert!(registry.get("responderaction").is_ok());
        assert_eq!(
            registry.get("nope").unwrap_err(),
            SchemaError::UnknownSchema("nope".to_string())
        );
    }
}
