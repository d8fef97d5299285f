// 📐 Shape Layer - Schema Validation
// Walks a JSON value against the declarative field metadata of a record

use crate::attributes::{FieldKind, FieldSpec, Rule, Schema};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

/// What went wrong with a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViolationKind {
    Missing,
    TooLong { max: usize },
    TooShort { min: usize },
    PatternMismatch { pattern: &'static str },
    WrongType { expected: String },
    UnknownEnumValue { value: String },
    TooManyItems { max: usize },
    DuplicateItem { index: usize },
}

impl ViolationKind {
    /// Message text in the wording the XS2A interface uses for format errors.
    pub fn message(&self, field: &str) -> String {
        match self {
            ViolationKind::Missing => format!("Value '{}' should not be null", field),
            ViolationKind::TooLong { max } => {
                format!("Value '{}' should not be more than {} symbols", field, max)
            }
            ViolationKind::TooShort { min } => {
                format!("Value '{}' should not be less than {} symbols", field, min)
            }
            ViolationKind::PatternMismatch { .. } => format!("Value '{}' has wrong format", field),
            ViolationKind::WrongType { .. } | ViolationKind::UnknownEnumValue { .. } => {
                format!("Invalid '{}' format", field)
            }
            ViolationKind::TooManyItems { max } => {
                format!("Value '{}' should not contain more than {} items", field, max)
            }
            ViolationKind::DuplicateItem { .. } => {
                format!("Value '{}' should not contain duplicate items", field)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Record type the pass started from (e.g. "PaymentInitiationJson")
    pub context: String,
    /// JSON path of the offending value (e.g. "creditorAccount.iban", "payments[0].instructedAmount")
    pub path: String,
    /// Wire name of the offending field
    pub field: String,
    pub kind: ViolationKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        context: impl Into<String>,
        path: impl Into<String>,
        field: impl Into<String>,
        kind: ViolationKind,
    ) -> Self {
        let field = field.into();
        let message = kind.message(&field);
        ValidationError {
            context: context.into(),
            path: path.into(),
            field,
            kind,
            message,
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.context, self.path, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// SCHEMA VALIDATOR
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Report unknown enum strings instead of treating them as absent.
    pub strict_enums: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    options: ValidatorOptions,
}

impl SchemaValidator {
    pub fn new() -> Self {
        SchemaValidator::default()
    }

    pub fn with_options(options: ValidatorOptions) -> Self {
        SchemaValidator { options }
    }

    pub fn options(&self) -> ValidatorOptions {
        self.options
    }

    /// Validate a record instance against its own field metadata
    pub fn validate<T: Schema + Serialize>(&self, value: &T) -> ValidationResult {
        match serde_json::to_value(value) {
            Ok(json) => self.validate_value(T::NAME, &T::fields(), &json),
            Err(e) => Err(vec![ValidationError::new(
                T::NAME,
                "",
                T::NAME,
                ViolationKind::WrongType {
                    expected: e.to_string(),
                },
            )]),
        }
    }

    /// Validate a raw JSON value against a field list
    pub fn validate_value(&self, type_name: &str, fields: &[FieldSpec], value: &Value) -> ValidationResult {
        let mut walk = Walk {
            strict_enums: self.options.strict_enums,
            context: type_name,
            errors: Vec::new(),
        };
        walk.record("", type_name, fields, value);

        if walk.errors.is_empty() {
            Ok(())
        } else {
            Err(walk.errors)
        }
    }
}

struct Walk<'a> {
    strict_enums: bool,
    context: &'a str,
    errors: Vec<ValidationError>,
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

impl Walk<'_> {
    fn push(&mut self, path: &str, field: &str, kind: ViolationKind) {
        self.errors
            .push(ValidationError::new(self.context, path, field, kind));
    }

    fn wrong_type(&mut self, path: &str, field: &str, expected: impl Into<String>) {
        self.push(
            path,
            field,
            ViolationKind::WrongType {
                expected: expected.into(),
            },
        );
    }

    fn record(&mut self, path: &str, field: &str, fields: &[FieldSpec], value: &Value) {
        let Some(object) = value.as_object() else {
            self.wrong_type(path, field, "object");
            return;
        };

        for spec in fields {
            let child_path = join(path, spec.wire_name);
            match object.get(spec.wire_name) {
                None | Some(Value::Null) => {
                    if spec.is_required() {
                        self.push(&child_path, spec.wire_name, ViolationKind::Missing);
                    }
                }
                Some(child) => self.value(
                    &child_path,
                    spec.wire_name,
                    &spec.kind,
                    &spec.rules,
                    spec.is_required(),
                    child,
                ),
            }
        }
    }

    fn value(
        &mut self,
        path: &str,
        field: &str,
        kind: &FieldKind,
        rules: &[Rule],
        required: bool,
        value: &Value,
    ) {
        match kind {
            FieldKind::Text => match value.as_str() {
                Some(text) => self.text(path, field, rules, text),
                None => self.wrong_type(path, field, "string"),
            },
            FieldKind::Boolean => {
                if !value.is_boolean() {
                    self.wrong_type(path, field, "boolean");
                }
            }
            FieldKind::Integer => {
                if value.as_i64().and_then(|n| i32::try_from(n).ok()).is_none() {
                    self.wrong_type(path, field, "integer");
                }
            }
            FieldKind::Date => {
                let parsed = value
                    .as_str()
                    .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok());
                if parsed != Some(true) {
                    self.wrong_type(path, field, "date");
                }
            }
            FieldKind::DateTime => {
                let parsed = value
                    .as_str()
                    .map(|s| DateTime::parse_from_rfc3339(s).is_ok());
                if parsed != Some(true) {
                    self.wrong_type(path, field, "date-time");
                }
            }
            FieldKind::Enum { name, values } => match value.as_str() {
                Some(s) if values.contains(&s) => {}
                Some(s) => {
                    if self.strict_enums {
                        self.push(
                            path,
                            field,
                            ViolationKind::UnknownEnumValue {
                                value: s.to_string(),
                            },
                        );
                    } else if required {
                        // Decodes as absent, so a required field is missing.
                        self.push(path, field, ViolationKind::Missing);
                    } else {
                        debug!(enum_name = name, value = s, path, "unknown enum value ignored");
                    }
                }
                None => self.wrong_type(path, field, format!("enum {}", name)),
            },
            FieldKind::Record { fields, .. } => self.record(path, field, &fields(), value),
            FieldKind::List { item, item_rules } => {
                let Some(items) = value.as_array() else {
                    self.wrong_type(path, field, "array");
                    return;
                };
                for rule in rules {
                    match rule {
                        Rule::MaxItems(max) if items.len() > *max => {
                            self.push(path, field, ViolationKind::TooManyItems { max: *max });
                        }
                        Rule::UniqueItems => {
                            for (index, entry) in items.iter().enumerate() {
                                if items[..index].contains(entry) {
                                    let entry_path = format!("{}[{}]", path, index);
                                    self.push(&entry_path, field, ViolationKind::DuplicateItem { index });
                                }
                            }
                        }
                        _ => {}
                    }
                }
                for (index, entry) in items.iter().enumerate() {
                    let entry_path = format!("{}[{}]", path, index);
                    if entry.is_null() {
                        self.wrong_type(&entry_path, field, item.label());
                    } else {
                        self.value(&entry_path, field, item, item_rules, false, entry);
                    }
                }
            }
            FieldKind::Links { value: link_kind, .. } => {
                let Some(entries) = value.as_object() else {
                    self.wrong_type(path, field, "object");
                    return;
                };
                for (key, entry) in entries {
                    let entry_path = join(path, key);
                    if entry.is_null() {
                        self.wrong_type(&entry_path, key, link_kind.label());
                    } else {
                        self.value(&entry_path, key, link_kind, &[], false, entry);
                    }
                }
            }
        }
    }

    fn text(&mut self, path: &str, field: &str, rules: &[Rule], text: &str) {
        let length = text.chars().count();
        for rule in rules {
            match rule {
                Rule::MaxLength(max) if length > *max => {
                    self.push(path, field, ViolationKind::TooLong { max: *max });
                }
                Rule::MinLength(min) if length < *min => {
                    self.push(path, field, ViolationKind::TooShort { min: *min });
                }
                Rule::Pattern(pattern) if !pattern.is_match(text) => {
                    self.push(
                        path,
                        field,
                        ViolationKind::PatternMismatch {
                            pattern: pattern.name(),
                        },
                    );
                }
                _ => {}
            }
        }
    }
}

// ============================================================================
// VALIDATE TRAIT
// ============================================================================

/// Validation with default options, available on every record.
pub trait Validate {
    fn validate(&self) -> ValidationResult;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<T: Schema + Serialize> Validate for T {
    fn validate(&self) -> ValidationResult {
        SchemaValidator::new().validate(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
