// Validation pass: required fields, lengths, patterns, nested paths, enums

use serde_json::json;
use xs2a_model::model::common::{AccountReference, Address, Amount};
use xs2a_model::model::consents::{AccountAccess, Consents};
use xs2a_model::model::enums::AllPsd2;
use xs2a_model::model::messages::{Error400NGPIS, MessageCode400PIS};
use xs2a_model::model::payments::{BulkPaymentInitiationJson, PaymentInitiationJson, PeriodicPaymentInitiationJson};
use xs2a_model::{
    decode, format_error_payload, validate_json, Codec, FormatErrorPayload, ModelError, ServiceType,
    Validate, ValidatorOptions, ViolationKind,
};

fn valid_payment() -> serde_json::Value {
    json!({
        "endToEndIdentification": "WBG-123456789",
        "debtorAccount": {"iban": "DE40100100103307118608"},
        "instructedAmount": {"currency": "EUR", "amount": "123.50"},
        "creditorAccount": {"iban": "DE02100100109307118603"},
        "creditorAgent": "AAAADEBBXXX",
        "creditorName": "Merchant123",
        "creditorAddress": {"streetName": "Herrnstraße", "buildingNumber": "123-34", "townName": "Nürnberg", "postCode": "90431", "country": "DE"},
        "remittanceInformationUnstructured": "Ref Number Merchant"
    })
}

#[test]
fn test_valid_payment_passes() {
    let payment: PaymentInitiationJson = decode(&valid_payment().to_string()).unwrap();
    assert!(payment.is_valid());
    assert_eq!(payment.creditor_agent.as_deref(), Some("AAAADEBBXXX"));
}

#[test]
fn test_violations_collected_in_field_order() {
    let mut body = valid_payment();
    body["endToEndIdentification"] = json!("x".repeat(36));
    body["instructedAmount"]["currency"] = json!("euro");
    body["creditorAgent"] = json!("bad bic");
    body["creditorAddress"]["country"] = json!("Deutschland");
    body.as_object_mut().unwrap().remove("creditorName");

    let err = decode::<PaymentInitiationJson>(&body.to_string()).unwrap_err();
    let found: Vec<(&str, &str)> = err
        .violations()
        .iter()
        .map(|e| (e.path.as_str(), e.message.as_str()))
        .collect();

    assert_eq!(
        found,
        vec![
            ("endToEndIdentification", "Value 'endToEndIdentification' should not be more than 35 symbols"),
            ("instructedAmount.currency", "Value 'currency' has wrong format"),
            ("creditorAgent", "Value 'creditorAgent' has wrong format"),
            ("creditorName", "Value 'creditorName' should not be null"),
            ("creditorAddress.country", "Value 'country' has wrong format"),
        ]
    );
}

#[test]
fn test_patterns_are_full_match() {
    let in_the_middle = Amount::of("xEURx", "1");
    let errors = in_the_middle.validate().unwrap_err();
    assert_eq!(errors[0].kind, ViolationKind::PatternMismatch { pattern: "CURRENCY" });

    assert!(AccountReference::new().with_iban("DE89370400440532013000").is_valid());
    assert!(!AccountReference::new().with_iban(" DE89370400440532013000").is_valid());
}

#[test]
fn test_bulk_item_paths() {
    let body = json!({
        "debtorAccount": {"iban": "DE40100100103307118608"},
        "payments": [
            {"instructedAmount": {"currency": "EUR", "amount": "1"}, "creditorAccount": {"iban": "DE02100100109307118603"}, "creditorName": "A"},
            {"instructedAmount": {"currency": "EUR", "amount": "1"}, "creditorAccount": {"iban": "DE02100100109307118603"}}
        ]
    });

    let err = validate_json("BulkPaymentInitiationJson", &body.to_string()).unwrap_err();
    assert_eq!(err.violations().len(), 1);
    assert_eq!(err.violations()[0].path, "payments[1].creditorName");

    let bulk: BulkPaymentInitiationJson = serde_json::from_value(body).unwrap();
    assert!(!bulk.is_valid());
}

#[test]
fn test_months_of_execution_limits() {
    let mut body = json!({
        "debtorAccount": {"iban": "DE40100100103307118608"},
        "instructedAmount": {"currency": "EUR", "amount": "10"},
        "creditorAccount": {"iban": "DE02100100109307118603"},
        "creditorName": "Landlord",
        "startDate": "2024-01-01",
        "frequency": "MonthlyVariable",
        "monthsOfExecution": ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"]
    });

    let err = decode::<PeriodicPaymentInitiationJson>(&body.to_string()).unwrap_err();
    assert_eq!(err.violations()[0].kind, ViolationKind::TooManyItems { max: 11 });

    body["monthsOfExecution"] = json!(["3", "0"]);
    let err = decode::<PeriodicPaymentInitiationJson>(&body.to_string()).unwrap_err();
    assert_eq!(err.violations()[0].path, "monthsOfExecution[1]");
}

#[test]
fn test_wrong_json_types() {
    let body = json!({
        "access": {"allPsd2": "allAccounts"},
        "recurringIndicator": "yes",
        "validUntil": "2030-02-30",
        "frequencyPerDay": 4.5,
        "combinedServiceIndicator": false
    });

    let err = decode::<Consents>(&body.to_string()).unwrap_err();
    let fields: Vec<&str> = err.violations().iter().map(|e| e.field.as_str()).collect();
    assert_eq!(fields, vec!["recurringIndicator", "validUntil", "frequencyPerDay"]);
    assert!(err
        .violations()
        .iter()
        .all(|e| matches!(e.kind, ViolationKind::WrongType { .. })));
}

#[test]
fn test_enum_leniency_follows_options() {
    let body = json!({"allPsd2": "everything"}).to_string();

    let lenient: AccountAccess = Codec::default().decode(&body).unwrap();
    assert_eq!(lenient.all_psd2, None);

    let strict = Codec::new(ValidatorOptions { strict_enums: true });
    let err = strict.decode::<AccountAccess>(&body).unwrap_err();
    assert_eq!(err.violations()[0].message, "Invalid 'allPsd2' format");

    let known: AccountAccess = strict.decode(r#"{"allPsd2":"allAccounts"}"#).unwrap();
    assert_eq!(known.all_psd2, Some(AllPsd2::AllAccounts));
}

#[test]
fn test_invalid_error_message() {
    let err = validate_json("Address", r#"{"townName": "Berlin"}"#).unwrap_err();
    assert!(matches!(err, ModelError::Invalid { .. }));
    assert_eq!(err.to_string(), "Address failed validation with 1 violation(s)");
    assert!(Address::new().with_country("DE").is_valid());
}

#[test]
fn test_violations_as_tpp_messages() {
    let err = validate_json("PaymentInitiationJson", r#"{"creditorName": "A"}"#).unwrap_err();

    let payload = Error400NGPIS::from_violations(err.violations());
    let messages = payload.tpp_messages.as_ref().expect("messages");
    assert_eq!(messages.len(), 3);
    assert!(messages.iter().all(|m| m.code == Some(MessageCode400PIS::FormatError)));
    assert_eq!(messages[2].path.as_deref(), Some("creditorAccount"));

    let json = format_error_payload(ServiceType::Pis, err.violations()).unwrap();
    assert_eq!(json["tppMessages"][0]["text"], "Value 'debtorAccount' should not be null");
    assert_eq!(json["tppMessages"][0]["category"], "ERROR");
}
