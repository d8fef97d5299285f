// Schema catalog: lookup, export, fingerprint

use serde_json::json;
use xs2a_model::model::enums::TransactionStatus;
use xs2a_model::{FieldKind, ModelError, Schema, SchemaRegistry};

#[test]
fn test_every_family_is_registered() {
    let registry = SchemaRegistry::new();
    for status in ["400", "401", "403", "404", "405", "406", "409", "429"] {
        for service in ["AIS", "PIS", "PIIS", "SBS"] {
            assert!(registry.get(&format!("Error{}NG{}", status, service)).is_some());
            assert!(registry.get(&format!("TppMessage{}{}", status, service)).is_some());
        }
    }
}

#[test]
fn test_entry_matches_schema_impl() {
    use xs2a_model::model::payments::PaymentInitiationJson;

    let registry = SchemaRegistry::new();
    let entry = registry.get(PaymentInitiationJson::NAME).expect("registered");
    let wire_names: Vec<&str> = entry.fields().iter().map(|f| f.wire_name).collect();
    let declared: Vec<&str> = PaymentInitiationJson::fields().iter().map(|f| f.wire_name).collect();
    assert_eq!(wire_names, declared);
    assert_eq!(wire_names[0], "endToEndIdentification");
}

#[test]
fn test_enum_values_in_metadata() {
    use xs2a_model::model::payments::PaymentInitiationStatusResponse200Json;

    let fields = PaymentInitiationStatusResponse200Json::fields();
    match &fields[0].kind {
        FieldKind::Enum { name, values } => {
            assert_eq!(*name, "TransactionStatus");
            assert_eq!(*values, TransactionStatus::VALUES);
        }
        other => panic!("unexpected kind {:?}", other),
    }
}

#[test]
fn test_validate_by_name() {
    let registry = SchemaRegistry::new();

    let ok = registry.validate_value(
        "ScaStatusResponse",
        &json!({"scaStatus": "finalised", "trustedBeneficiaryFlag": false}),
    );
    assert!(ok.is_ok());

    let err = registry.validate_value("ScaStatusResponse", &json!([])).unwrap_err();
    assert_eq!(err.violations()[0].message, "Invalid 'ScaStatusResponse' format");

    assert!(matches!(
        registry.validate_value("Missing", &json!({})),
        Err(ModelError::UnknownSchema(_))
    ));
}

#[test]
fn test_csv_has_one_row_per_field() {
    let registry = SchemaRegistry::new();
    let mut out = Vec::new();
    registry.write_csv(&mut out).unwrap();

    let mut reader = csv::Reader::from_reader(out.as_slice());
    let rows = reader.records().collect::<Result<Vec<_>, _>>().unwrap();
    assert_eq!(rows.len(), registry.catalog().len());

    let max_items = rows
        .iter()
        .find(|r| &r[0] == "PeriodicPaymentInitiationJson" && &r[2] == "monthsOfExecution")
        .expect("monthsOfExecution row");
    assert_eq!(&max_items[5], "maxItems=11; uniqueItems");
}

#[test]
fn test_fingerprint_format() {
    let hash = SchemaRegistry::new().fingerprint().unwrap();
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}
