// 🔁 Wire Boundary - JSON encode/decode around the schema validator
//
// Encoding validates the record first. Decoding validates the raw payload,
// then deserializes it leniently (unknown enum strings become absent).

use crate::attributes::Schema;
use crate::error::{ModelError, Result};
use crate::registry::SchemaRegistry;
use crate::schema::{SchemaValidator, ValidationError, ValidatorOptions};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// Encoder/decoder bound to one validator configuration.
pub struct Codec {
    validator: SchemaValidator,
    registry: SchemaRegistry,
}

impl Codec {
    pub fn new(options: ValidatorOptions) -> Self {
        let validator = SchemaValidator::with_options(options);
        Codec {
            registry: SchemaRegistry::new().with_validator(validator.clone()),
            validator,
        }
    }

    pub fn options(&self) -> ValidatorOptions {
        self.validator.options()
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Validate, then serialize compactly.
    pub fn encode<T: Schema + Serialize>(&self, value: &T) -> Result<String> {
        self.check(value)?;
        let text = serde_json::to_string(value)?;
        debug!(type_name = T::NAME, bytes = text.len(), "encoded");
        Ok(text)
    }

    pub fn encode_pretty<T: Schema + Serialize>(&self, value: &T) -> Result<String> {
        self.check(value)?;
        let text = serde_json::to_string_pretty(value)?;
        debug!(type_name = T::NAME, bytes = text.len(), "encoded");
        Ok(text)
    }

    /// Parse, validate the raw payload, then deserialize.
    pub fn decode<T: Schema + DeserializeOwned>(&self, input: &str) -> Result<T> {
        let raw: Value = serde_json::from_str(input)?;
        self.validator
            .validate_value(T::NAME, &T::fields(), &raw)
            .map_err(|errors| invalid(T::NAME, errors))?;

        let value = serde_json::from_value(raw)?;
        debug!(type_name = T::NAME, "decoded");
        Ok(value)
    }

    /// Deserialize only, no constraint checks.
    pub fn decode_unchecked<T: DeserializeOwned>(&self, input: &str) -> Result<T> {
        Ok(serde_json::from_str(input)?)
    }

    /// Validate a raw payload against a record type looked up by name.
    pub fn validate_json(&self, type_name: &str, input: &str) -> Result<()> {
        let raw: Value = serde_json::from_str(input)?;
        match self.registry.validate_value(type_name, &raw) {
            Err(ModelError::Invalid { type_name, errors }) => Err(invalid(&type_name, errors)),
            other => other,
        }
    }

    // The intermediate Value is a sorted map; output is written from the record itself.
    fn check<T: Schema + Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_value(value)?;
        self.validator
            .validate_value(T::NAME, &T::fields(), &json)
            .map_err(|errors| invalid(T::NAME, errors))
    }
}

impl Default for Codec {
    fn default() -> Self {
        Codec::new(ValidatorOptions::default())
    }
}

fn invalid(type_name: &str, errors: Vec<ValidationError>) -> ModelError {
    warn!(
        type_name,
        violations = errors.len(),
        first = %errors.first().map(|e| e.to_string()).unwrap_or_default(),
        "validation failed"
    );
    ModelError::Invalid {
        type_name: type_name.to_string(),
        errors,
    }
}

// ============================================================================
// DEFAULT-OPTION SHORTCUTS
// ============================================================================

static DEFAULT_CODEC: Lazy<Codec> = Lazy::new(Codec::default);

/// Shared codec with default options, built on first use.
pub fn default_codec() -> &'static Codec {
    &DEFAULT_CODEC
}

pub fn encode<T: Schema + Serialize>(value: &T) -> Result<String> {
    DEFAULT_CODEC.encode(value)
}

pub fn encode_pretty<T: Schema + Serialize>(value: &T) -> Result<String> {
    DEFAULT_CODEC.encode_pretty(value)
}

pub fn decode<T: Schema + DeserializeOwned>(input: &str) -> Result<T> {
    DEFAULT_CODEC.decode(input)
}

pub fn decode_unchecked<T: DeserializeOwned>(input: &str) -> Result<T> {
    DEFAULT_CODEC.decode_unchecked(input)
}

pub fn validate_json(type_name: &str, input: &str) -> Result<()> {
    DEFAULT_CODEC.validate_json(type_name, input)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::common::{AccountReference, Amount};
    use crate::model::consents::ConsentStatusResponse200;
    use crate::model::enums::TransactionStatus;
    use crate::model::payments::{PaymentInitiationJson, PaymentInitiationStatusResponse200Json};
    use crate::schema::ViolationKind;

    fn payment() -> PaymentInitiationJson {
        PaymentInitiationJson::new()
            .with_debtor_account(AccountReference::new().with_iban("DE40100100103307118608"))
            .with_instructed_amount(Amount::of("EUR", "123.50"))
            .with_creditor_account(AccountReference::new().with_iban("DE02100100109307118603"))
            .with_creditor_name("Merchant123")
    }

    #[test]
    fn test_encode_valid_payment() {
        let text = encode(&payment()).unwrap();
        assert!(text.starts_with(r#"{"debtorAccount":{"iban":"DE40100100103307118608"}"#));
        assert!(!text.contains("null"));
    }

    #[test]
    fn test_encode_keeps_declared_field_order() {
        assert_eq!(
            encode(&Amount::of("EUR", "1.00")).unwrap(),
            r#"{"currency":"EUR","amount":"1.00"}"#
        );

        let text = encode(&payment()).unwrap();
        let positions: Vec<usize> = ["debtorAccount", "instructedAmount", "creditorAccount", "creditorName"]
            .iter()
            .map(|key| text.find(key).expect("key present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_default_codec_is_shared() {
        assert!(std::ptr::eq(default_codec(), default_codec()));
        assert_eq!(default_codec().options(), ValidatorOptions::default());
        assert_eq!(default_codec().registry().count(), SchemaRegistry::new().count());
    }

    #[test]
    fn test_encode_rejects_invalid_record() {
        let err = encode(&Amount::of("EUR", "1,00")).unwrap_err();
        match err {
            ModelError::Invalid { type_name, errors } => {
                assert_eq!(type_name, "Amount");
                assert_eq!(errors[0].path, "amount");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_encode_pretty_is_multiline() {
        let text = encode_pretty(&Amount::of("EUR", "1.00")).unwrap();
        assert_eq!(text, "{\n  \"currency\": \"EUR\",\n  \"amount\": \"1.00\"\n}");
    }

    #[test]
    fn test_decode_round_trip() {
        let text = encode(&payment()).unwrap();
        let back: PaymentInitiationJson = decode(&text).unwrap();
        assert_eq!(back, payment());
    }

    #[test]
    fn test_decode_reports_paths() {
        let err = decode::<PaymentInitiationJson>(
            r#"{"instructedAmount":{"currency":"EUR","amount":"1"},"creditorName":"x"}"#,
        )
        .unwrap_err();
        let paths: Vec<&str> = err.violations().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["debtorAccount", "creditorAccount"]);
    }

    #[test]
    fn test_decode_malformed_json() {
        assert!(matches!(decode::<Amount>("{"), Err(ModelError::Json(_))));
    }

    #[test]
    fn test_unknown_enum_is_lenient_by_default() {
        let status: PaymentInitiationStatusResponse200Json =
            decode_unchecked(r#"{"transactionStatus":"NEWCODE"}"#).unwrap();
        assert_eq!(status.transaction_status, None);

        let status: PaymentInitiationStatusResponse200Json =
            decode(r#"{"transactionStatus":"ACSC"}"#).unwrap();
        assert_eq!(status.transaction_status, Some(TransactionStatus::Acsc));
    }

    #[test]
    fn test_strict_enums() {
        let codec = Codec::new(ValidatorOptions { strict_enums: true });
        let err = codec
            .decode::<ConsentStatusResponse200>(r#"{"consentStatus":"paused"}"#)
            .unwrap_err();
        assert_eq!(
            err.violations()[0].kind,
            ViolationKind::UnknownEnumValue {
                value: "paused".to_string()
            }
        );
    }

    #[test]
    fn test_validate_json_by_name() {
        assert!(validate_json("Amount", r#"{"currency":"EUR","amount":"5"}"#).is_ok());

        let err = validate_json("Amount", r#"{"currency":"EURO","amount":"5"}"#).unwrap_err();
        assert_eq!(err.violations()[0].message, "Value 'currency' has wrong format");

        assert!(matches!(
            validate_json("Nope", "{}"),
            Err(ModelError::UnknownSchema(_))
        ));
    }
}
