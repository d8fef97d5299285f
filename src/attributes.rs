// 🏛️ Semantic Layer - Field Metadata
// Every model field carries its wire name, its shape and its constraints.

use crate::patterns::Pattern;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Deserializer};

// ============================================================================
// RULES
// ============================================================================

/// Declarative constraint attached to a field. Rules are never enforced at
/// construction time; the schema validator checks them on demand.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Field must be present and non-null.
    Required,
    /// Maximum length in characters.
    MaxLength(usize),
    /// Minimum length in characters.
    MinLength(usize),
    /// Full-match regular expression.
    Pattern(&'static Pattern),
    /// Maximum number of list items.
    MaxItems(usize),
    /// List items must not repeat.
    UniqueItems,
}

impl Rule {
    /// Short label used by the catalog export (e.g. `maxLength=35`).
    pub fn describe(&self) -> String {
        match self {
            Rule::Required => "required".to_string(),
            Rule::MaxLength(n) => format!("maxLength={}", n),
            Rule::MinLength(n) => format!("minLength={}", n),
            Rule::Pattern(p) => format!("pattern={}", p.name()),
            Rule::MaxItems(n) => format!("maxItems={}", n),
            Rule::UniqueItems => "uniqueItems".to_string(),
        }
    }
}

/// Rule list builder, used for list item constraints.
#[derive(Debug, Clone, Default)]
pub struct Rules(Vec<Rule>);

impl Rules {
    pub fn new() -> Self {
        Rules(Vec::new())
    }

    pub fn required(mut self) -> Self {
        self.0.push(Rule::Required);
        self
    }

    pub fn max(mut self, n: usize) -> Self {
        self.0.push(Rule::MaxLength(n));
        self
    }

    pub fn min(mut self, n: usize) -> Self {
        self.0.push(Rule::MinLength(n));
        self
    }

    pub fn pattern(mut self, pattern: &'static Pattern) -> Self {
        self.0.push(Rule::Pattern(pattern));
        self
    }

    pub fn max_items(mut self, n: usize) -> Self {
        self.0.push(Rule::MaxItems(n));
        self
    }

    pub fn into_vec(self) -> Vec<Rule> {
        self.0
    }
}

// ============================================================================
// FIELD KINDS
// ============================================================================

/// Shape of a field value as it appears in JSON.
#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Boolean,
    Integer,
    /// ISO-8601 calendar date (`YYYY-MM-DD`).
    Date,
    /// ISO-8601 date-time with offset.
    DateTime,
    Enum {
        name: &'static str,
        values: &'static [&'static str],
    },
    /// Nested record. `fields` is resolved lazily so recursive schemas stay finite.
    Record {
        name: &'static str,
        fields: fn() -> Vec<FieldSpec>,
    },
    List {
        item: Box<FieldKind>,
        item_rules: Vec<Rule>,
    },
    Links {
        name: &'static str,
        value: Box<FieldKind>,
    },
}

impl FieldKind {
    /// Human-readable type label (`string`, `Amount`, `[Balance]`, ...).
    pub fn label(&self) -> String {
        match self {
            FieldKind::Text => "string".to_string(),
            FieldKind::Boolean => "boolean".to_string(),
            FieldKind::Integer => "integer".to_string(),
            FieldKind::Date => "date".to_string(),
            FieldKind::DateTime => "date-time".to_string(),
            FieldKind::Enum { name, .. } => format!("enum {}", name),
            FieldKind::Record { name, .. } => name.to_string(),
            FieldKind::List { item, .. } => format!("[{}]", item.label()),
            FieldKind::Links { name, value } => format!("{}<{}>", name, value.label()),
        }
    }
}

// ============================================================================
// FIELD SPEC
// ============================================================================

/// FieldSpec - metadata of one record field
///
/// Built by the model macros; the builder methods mirror the rule names
/// written next to each field declaration.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Rust field name (e.g. "creditor_account")
    pub name: &'static str,

    /// JSON member name (e.g. "creditorAccount")
    pub wire_name: &'static str,

    pub kind: FieldKind,

    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(name: &'static str, wire_name: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            name,
            wire_name,
            kind,
            rules: Vec::new(),
        }
    }

    /// Builder: mark as required
    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    /// Builder: maximum length
    pub fn max(mut self, n: usize) -> Self {
        self.rules.push(Rule::MaxLength(n));
        self
    }

    /// Builder: minimum length
    pub fn min(mut self, n: usize) -> Self {
        self.rules.push(Rule::MinLength(n));
        self
    }

    /// Builder: full-match pattern
    pub fn pattern(mut self, pattern: &'static Pattern) -> Self {
        self.rules.push(Rule::Pattern(pattern));
        self
    }

    /// Builder: maximum list size
    pub fn max_items(mut self, n: usize) -> Self {
        self.rules.push(Rule::MaxItems(n));
        self
    }

    pub fn unique(mut self) -> Self {
        self.rules.push(Rule::UniqueItems);
        self
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required))
    }

    /// Rules rendered as `required; maxLength=35`.
    pub fn describe_rules(&self) -> String {
        self.rules
            .iter()
            .map(Rule::describe)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

// ============================================================================
// SCHEMA + FIELD TYPE TRAITS
// ============================================================================

/// Implemented by every record: its name and ordered field metadata.
pub trait Schema {
    const NAME: &'static str;

    fn fields() -> Vec<FieldSpec>;
}

/// Implemented by every type that can sit in a record field.
pub trait FieldType: Sized {
    fn kind() -> FieldKind;

    /// Value as shown by the diagnostic dump.
    fn render(&self) -> String;

    /// Decodes the field value. Enumerations override this to turn unknown
    /// wire strings into `None`.
    fn deserialize_field<'de, D>(deserializer: D) -> Result<Option<Self>, D::Error>
    where
        D: Deserializer<'de>,
        Self: Deserialize<'de>,
    {
        Option::<Self>::deserialize(deserializer)
    }
}

/// serde `deserialize_with` hook used for every record field.
pub fn deserialize_field<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FieldType + Deserialize<'de>,
{
    T::deserialize_field(deserializer)
}

/// Absent values print as `null`; nested dumps are indented one level.
pub fn render_field<T: FieldType>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.render().replace('\n', "\n    "),
        None => "null".to_string(),
    }
}

/// `[a, b, c]`
pub fn render_items<T: FieldType>(items: &[T]) -> String {
    let rendered: Vec<String> = items.iter().map(FieldType::render).collect();
    format!("[{}]", rendered.join(", "))
}

impl FieldType for String {
    fn kind() -> FieldKind {
        FieldKind::Text
    }

    fn render(&self) -> String {
        self.clone()
    }
}

impl FieldType for bool {
    fn kind() -> FieldKind {
        FieldKind::Boolean
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl FieldType for i32 {
    fn kind() -> FieldKind {
        FieldKind::Integer
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl FieldType for NaiveDate {
    fn kind() -> FieldKind {
        FieldKind::Date
    }

    fn render(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl FieldType for DateTime<FixedOffset> {
    fn kind() -> FieldKind {
        FieldKind::DateTime
    }

    fn render(&self) -> String {
        self.to_rfc3339()
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::List {
            item: Box::new(T::kind()),
            item_rules: Vec::new(),
        }
    }

    fn render(&self) -> String {
        render_items(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::CURRENCY;

    #[test]
    fn test_field_spec_builder() {
        let spec = FieldSpec::new("currency", "currency", FieldKind::Text)
            .required()
            .pattern(&CURRENCY);

        assert!(spec.is_required());
        assert_eq!(spec.rules.len(), 2);
        assert_eq!(spec.describe_rules(), "required; pattern=CURRENCY");
    }

    #[test]
    fn test_optional_field_is_not_required() {
        let spec = FieldSpec::new("name", "name", FieldKind::Text).max(70);
        assert!(!spec.is_required());
        assert_eq!(spec.describe_rules(), "maxLength=70");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(<Vec<String>>::kind().label(), "[string]");
        assert_eq!(NaiveDate::kind().label(), "date");
        assert_eq!(<DateTime<FixedOffset>>::kind().label(), "date-time");
    }

    #[test]
    fn test_render_field_absent_is_null() {
        let absent: Option<String> = None;
        assert_eq!(render_field(&absent), "null");
        assert_eq!(render_field(&Some("x".to_string())), "x");
    }

    #[test]
    fn test_render_items() {
        let items = vec!["a".to_string(), "b".to_string()];
        assert_eq!(render_items(&items), "[a, b]");
    }
}
