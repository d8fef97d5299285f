// XS2A Model - Core Library
// PSD2 access-to-account data model: typed records, validation, wire format

#[macro_use]
mod macros;             // record! / wire_enum! / list! / link_map!

pub mod patterns;       // Format constraints (IBAN, BIC, currency, ...)
pub mod attributes;     // Semantic Layer - field metadata
pub mod schema;         // Shape Layer - schema validation
pub mod error;          // Library error type
pub mod model;          // XS2A records, enums, lists and link maps
pub mod registry;       // Schema catalog
pub mod codec;          // JSON boundary
pub mod config;         // Settings
pub mod logging;        // tracing setup

// Re-export commonly used types
pub use attributes::{FieldKind, FieldSpec, FieldType, Rule, Schema};
pub use codec::{decode, decode_unchecked, default_codec, encode, encode_pretty, validate_json, Codec};
pub use error::{ModelError, Result};
pub use registry::{FieldInfo, SchemaEntry, SchemaRegistry};
pub use schema::{
    SchemaValidator, Validate, ValidationError, ValidationResult, ValidatorOptions, ViolationKind,
};
pub use model::messages::{format_error_payload, FormatErrorPayload, ServiceType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
