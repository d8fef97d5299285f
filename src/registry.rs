// 📚 Schema Catalog - every record type by name
//
// The catalog is what the CLI describes and exports, and its hash is the
// drift check against the published interface definition.

use crate::attributes::{FieldSpec, Schema};
use crate::error::{ModelError, Result};
use crate::schema::SchemaValidator;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::debug;

// ============================================================================
// ENTRIES
// ============================================================================

/// A registered record type.
#[derive(Debug, Clone, Copy)]
pub struct SchemaEntry {
    pub name: &'static str,
    fields: fn() -> Vec<FieldSpec>,
}

impl SchemaEntry {
    pub fn fields(&self) -> Vec<FieldSpec> {
        (self.fields)()
    }
}

/// One catalog row: a single field of a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub schema: &'static str,
    pub field: &'static str,
    pub wire_name: &'static str,
    pub kind: String,
    pub required: bool,
    pub rules: String,
}

// ============================================================================
// SCHEMA REGISTRY
// ============================================================================

/// SchemaRegistry - catalog of all XS2A record types
pub struct SchemaRegistry {
    schemas: BTreeMap<&'static str, SchemaEntry>,
    validator: SchemaValidator,
}

impl SchemaRegistry {
    /// Registry holding the whole model
    pub fn new() -> Self {
        let mut registry = SchemaRegistry::empty();
        crate::model::register_all(&mut registry);
        registry
    }

    pub fn empty() -> Self {
        SchemaRegistry {
            schemas: BTreeMap::new(),
            validator: SchemaValidator::new(),
        }
    }

    /// Builder: validate through the given validator
    pub fn with_validator(mut self, validator: SchemaValidator) -> Self {
        self.validator = validator;
        self
    }

    pub fn register<T: Schema>(&mut self) {
        self.schemas.insert(
            T::NAME,
            SchemaEntry {
                name: T::NAME,
                fields: T::fields,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&SchemaEntry> {
        self.schemas.get(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        self.schemas.keys().copied().collect()
    }

    pub fn count(&self) -> usize {
        self.schemas.len()
    }

    /// Validate a raw JSON value against the named record type
    pub fn validate_value(&self, name: &str, value: &Value) -> Result<()> {
        let entry = self
            .get(name)
            .ok_or_else(|| ModelError::UnknownSchema(name.to_string()))?;

        self.validator
            .validate_value(entry.name, &entry.fields(), value)
            .map_err(|errors| ModelError::Invalid {
                type_name: entry.name.to_string(),
                errors,
            })
    }

    /// Every field of every record, ordered by record name then declaration order
    pub fn catalog(&self) -> Vec<FieldInfo> {
        self.schemas
            .values()
            .flat_map(|entry| {
                entry.fields().into_iter().map(move |spec| FieldInfo {
                    schema: entry.name,
                    field: spec.name,
                    wire_name: spec.wire_name,
                    kind: spec.kind.label(),
                    required: spec.is_required(),
                    rules: spec.describe_rules(),
                })
            })
            .collect()
    }

    /// Export the catalog as CSV with a header row
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for row in self.catalog() {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// SHA-256 of the catalog as JSON, lowercase hex
    pub fn fingerprint(&self) -> Result<String> {
        let catalog = serde_json::to_string(&self.catalog())?;

        let mut hasher = Sha256::new();
        hasher.update(catalog.as_bytes());
        let hash = format!("{:x}", hasher.finalize());

        debug!(schemas = self.count(), %hash, "catalog fingerprint computed");
        Ok(hash)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
