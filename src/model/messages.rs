// 🚨 Error Payloads - TPP message families per HTTP status and service
//
// Each family is a code list, a `TppMessage<status><service>` record and an
// `Error<status>NG<service>` envelope carrying the messages plus `_links`.

use super::enums::TppMessageCategory;
use super::links::LinksAll;
use crate::registry::SchemaRegistry;
use crate::schema::ValidationError;

macro_rules! error_family {
    (
        $(
            $error:ident, $message:ident, $code:ident {
                $( $variant:ident => $wire:literal ),+ $(,)?
            }
        )*
    ) => {
        $(
            wire_enum! {
                $code {
                    $( $variant => $wire ),+
                }
            }

            record! {
                $message {
                    category: TppMessageCategory = "category" [required],
                    code: $code = "code" [required],
                    path: String = "path" [],
                    text: String = "text" [max(500)],
                }
            }

            record! {
                $error {
                    tpp_messages: Vec<$message> = "tppMessages" [],
                    links: LinksAll = "_links" [],
                }
            }
        )*

        pub(crate) fn register(registry: &mut SchemaRegistry) {
            $(
                registry.register::<$message>();
                registry.register::<$error>();
            )*
        }
    };
}

// ============================================================================
// FAMILIES
// ============================================================================

error_family! {
    // 400 BAD REQUEST

    Error400NGAIS, TppMessage400AIS, MessageCode400AIS {
        FormatError => "FORMAT_ERROR",
        ParameterNotConsistent => "PARAMETER_NOT_CONSISTENT",
        ParameterNotSupported => "PARAMETER_NOT_SUPPORTED",
        ServiceInvalid => "SERVICE_INVALID",
        ResourceUnknown => "RESOURCE_UNKNOWN",
        ResourceExpired => "RESOURCE_EXPIRED",
        ResourceBlocked => "RESOURCE_BLOCKED",
        TimestampInvalid => "TIMESTAMP_INVALID",
        PeriodInvalid => "PERIOD_INVALID",
        ScaMethodUnknown => "SCA_METHOD_UNKNOWN",
        ConsentUnknown => "CONSENT_UNKNOWN",
        SessionsNotSupported => "SESSIONS_NOT_SUPPORTED",
    }

    Error400NGPIS, TppMessage400PIS, MessageCode400PIS {
        FormatError => "FORMAT_ERROR",
        ParameterNotConsistent => "PARAMETER_NOT_CONSISTENT",
        ParameterNotSupported => "PARAMETER_NOT_SUPPORTED",
        ServiceInvalid => "SERVICE_INVALID",
        ResourceUnknown => "RESOURCE_UNKNOWN",
        ResourceExpired => "RESOURCE_EXPIRED",
        ResourceBlocked => "RESOURCE_BLOCKED",
        TimestampInvalid => "TIMESTAMP_INVALID",
        PeriodInvalid => "PERIOD_INVALID",
        ScaMethodUnknown => "SCA_METHOD_UNKNOWN",
        ConsentUnknown => "CONSENT_UNKNOWN",
        PaymentFailed => "PAYMENT_FAILED",
        ExecutionDateInvalid => "EXECUTION_DATE_INVALID",
    }

    Error400NGPIIS, TppMessage400PIIS, MessageCode400PIIS {
        FormatError => "FORMAT_ERROR",
        ParameterNotConsistent => "PARAMETER_NOT_CONSISTENT",
        ParameterNotSupported => "PARAMETER_NOT_SUPPORTED",
        ServiceInvalid => "SERVICE_INVALID",
        ResourceUnknown => "RESOURCE_UNKNOWN",
        ResourceExpired => "RESOURCE_EXPIRED",
        ResourceBlocked => "RESOURCE_BLOCKED",
        TimestampInvalid => "TIMESTAMP_INVALID",
        PeriodInvalid => "PERIOD_INVALID",
        ScaMethodUnknown => "SCA_METHOD_UNKNOWN",
        ConsentUnknown => "CONSENT_UNKNOWN",
        CardInvalid => "CARD_INVALID",
        NoPiisActivation => "NO_PIIS_ACTIVATION",
    }

    Error400NGSBS, TppMessage400SBS, MessageCode400SBS {
        FormatError => "FORMAT_ERROR",
        ParameterNotConsistent => "PARAMETER_NOT_CONSISTENT",
        ParameterNotSupported => "PARAMETER_NOT_SUPPORTED",
        ServiceInvalid => "SERVICE_INVALID",
        ResourceUnknown => "RESOURCE_UNKNOWN",
        ResourceExpired => "RESOURCE_EXPIRED",
        ResourceBlocked => "RESOURCE_BLOCKED",
        TimestampInvalid => "TIMESTAMP_INVALID",
        PeriodInvalid => "PERIOD_INVALID",
        ScaMethodUnknown => "SCA_METHOD_UNKNOWN",
        ConsentUnknown => "CONSENT_UNKNOWN",
        ReferenceMixInvalid => "REFERENCE_MIX_INVALID",
    }

    // 401 UNAUTHORIZED

    Error401NGAIS, TppMessage401AIS, MessageCode401AIS {
        CertificateInvalid => "CERTIFICATE_INVALID",
        RoleInvalid => "ROLE_INVALID",
        CertificateExpired => "CERTIFICATE_EXPIRED",
        CertificateBlocked => "CERTIFICATE_BLOCKED",
        CertificateRevoked => "CERTIFICATE_REVOKED",
        CertificateMissing => "CERTIFICATE_MISSING",
        SignatureInvalid => "SIGNATURE_INVALID",
        SignatureMissing => "SIGNATURE_MISSING",
        CorporateIdInvalid => "CORPORATE_ID_INVALID",
        PsuCredentialsInvalid => "PSU_CREDENTIALS_INVALID",
        ConsentInvalid => "CONSENT_INVALID",
        ConsentExpired => "CONSENT_EXPIRED",
        TokenUnknown => "TOKEN_UNKNOWN",
        TokenInvalid => "TOKEN_INVALID",
        TokenExpired => "TOKEN_EXPIRED",
    }

    Error401NGPIS, TppMessage401PIS, MessageCode401PIS {
        CertificateInvalid => "CERTIFICATE_INVALID",
        RoleInvalid => "ROLE_INVALID",
        CertificateExpired => "CERTIFICATE_EXPIRED",
        CertificateBlocked => "CERTIFICATE_BLOCKED",
        CertificateRevoked => "CERTIFICATE_REVOKED",
        CertificateMissing => "CERTIFICATE_MISSING",
        SignatureInvalid => "SIGNATURE_INVALID",
        SignatureMissing => "SIGNATURE_MISSING",
        CorporateIdInvalid => "CORPORATE_ID_INVALID",
        PsuCredentialsInvalid => "PSU_CREDENTIALS_INVALID",
        ConsentInvalid => "CONSENT_INVALID",
        ConsentExpired => "CONSENT_EXPIRED",
        TokenUnknown => "TOKEN_UNKNOWN",
        TokenInvalid => "TOKEN_INVALID",
        TokenExpired => "TOKEN_EXPIRED",
    }

    Error401NGPIIS, TppMessage401PIIS, MessageCode401PIIS {
        CertificateInvalid => "CERTIFICATE_INVALID",
        RoleInvalid => "ROLE_INVALID",
        CertificateExpired => "CERTIFICATE_EXPIRED",
        CertificateBlocked => "CERTIFICATE_BLOCKED",
        CertificateRevoked => "CERTIFICATE_REVOKED",
        CertificateMissing => "CERTIFICATE_MISSING",
        SignatureInvalid => "SIGNATURE_INVALID",
        SignatureMissing => "SIGNATURE_MISSING",
        CorporateIdInvalid => "CORPORATE_ID_INVALID",
        PsuCredentialsInvalid => "PSU_CREDENTIALS_INVALID",
        ConsentInvalid => "CONSENT_INVALID",
        ConsentExpired => "CONSENT_EXPIRED",
        TokenUnknown => "TOKEN_UNKNOWN",
        TokenInvalid => "TOKEN_INVALID",
        TokenExpired => "TOKEN_EXPIRED",
    }

    Error401NGSBS, TppMessage401SBS, MessageCode401SBS {
        CertificateInvalid => "CERTIFICATE_INVALID",
        RoleInvalid => "ROLE_INVALID",
        CertificateExpired => "CERTIFICATE_EXPIRED",
        CertificateBlocked => "CERTIFICATE_BLOCKED",
        CertificateRevoked => "CERTIFICATE_REVOKED",
        CertificateMissing => "CERTIFICATE_MISSING",
        SignatureInvalid => "SIGNATURE_INVALID",
        SignatureMissing => "SIGNATURE_MISSING",
        CorporateIdInvalid => "CORPORATE_ID_INVALID",
        PsuCredentialsInvalid => "PSU_CREDENTIALS_INVALID",
        ConsentInvalid => "CONSENT_INVALID",
        ConsentExpired => "CONSENT_EXPIRED",
        TokenUnknown => "TOKEN_UNKNOWN",
        TokenInvalid => "TOKEN_INVALID",
        TokenExpired => "TOKEN_EXPIRED",
    }

    // 403 FORBIDDEN

    Error403NGAIS, TppMessage403AIS, MessageCode403AIS {
        ConsentUnknown => "CONSENT_UNKNOWN",
        ServiceBlocked => "SERVICE_BLOCKED",
        ResourceUnknown => "RESOURCE_UNKNOWN",
        ResourceExpired => "RESOURCE_EXPIRED",
    }

    Error403NGPIS, TppMessage403PIS, MessageCode403PIS {
        ConsentUnknown => "CONSENT_UNKNOWN",
        ServiceBlocked => "SERVICE_BLOCKED",
        ResourceUnknown => "RESOURCE_UNKNOWN",
        ResourceExpired => "RESOURCE_EXPIRED",
        ProductInvalid => "PRODUCT_INVALID",
    }

    Error403NGPIIS, TppMessage403PIIS, MessageCode403PIIS {
        ConsentUnknown => "CONSENT_UNKNOWN",
        ServiceBlocked => "SERVICE_BLOCKED",
        ResourceUnknown => "RESOURCE_UNKNOWN",
        ResourceExpired => "RESOURCE_EXPIRED",
    }

    Error403NGSBS, TppMessage403SBS, MessageCode403SBS {
        ConsentUnknown => "CONSENT_UNKNOWN",
        ServiceBlocked => "SERVICE_BLOCKED",
        ResourceUnknown => "RESOURCE_UNKNOWN",
        ResourceExpired => "RESOURCE_EXPIRED",
    }

    // 404 NOT FOUND

    Error404NGAIS, TppMessage404AIS, MessageCode404AIS {
        ResourceUnknown => "RESOURCE_UNKNOWN",
    }

    Error404NGPIS, TppMessage404PIS, MessageCode404PIS {
        ResourceUnknown => "RESOURCE_UNKNOWN",
        ProductUnknown => "PRODUCT_UNKNOWN",
    }

    Error404NGPIIS, TppMessage404PIIS, MessageCode404PIIS {
        ResourceUnknown => "RESOURCE_UNKNOWN",
    }

    Error404NGSBS, TppMessage404SBS, MessageCode404SBS {
        ResourceUnknown => "RESOURCE_UNKNOWN",
    }

    // 405 METHOD NOT ALLOWED

    Error405NGAIS, TppMessage405AIS, MessageCode405AIS {
        ServiceInvalid => "SERVICE_INVALID",
    }

    Error405NGPIS, TppMessage405PIS, MessageCode405PIS {
        ServiceInvalid => "SERVICE_INVALID",
        CancellationInvalid => "CANCELLATION_INVALID",
    }

    Error405NGPIIS, TppMessage405PIIS, MessageCode405PIIS {
        ServiceInvalid => "SERVICE_INVALID",
    }

    Error405NGSBS, TppMessage405SBS, MessageCode405SBS {
        ServiceInvalid => "SERVICE_INVALID",
    }

    // 406 NOT ACCEPTABLE

    Error406NGAIS, TppMessage406AIS, MessageCode406AIS {
        RequestedFormatsInvalid => "REQUESTED_FORMATS_INVALID",
    }

    Error406NGPIS, TppMessage406PIS, MessageCode406PIS {
        RequestedFormatsInvalid => "REQUESTED_FORMATS_INVALID",
    }

    Error406NGPIIS, TppMessage406PIIS, MessageCode406PIIS {
        RequestedFormatsInvalid => "REQUESTED_FORMATS_INVALID",
    }

    Error406NGSBS, TppMessage406SBS, MessageCode406SBS {
        RequestedFormatsInvalid => "REQUESTED_FORMATS_INVALID",
    }

    // 409 CONFLICT

    Error409NGAIS, TppMessage409AIS, MessageCode409AIS {
        StatusInvalid => "STATUS_INVALID",
    }

    Error409NGPIS, TppMessage409PIS, MessageCode409PIS {
        StatusInvalid => "STATUS_INVALID",
    }

    Error409NGPIIS, TppMessage409PIIS, MessageCode409PIIS {
        StatusInvalid => "STATUS_INVALID",
    }

    Error409NGSBS, TppMessage409SBS, MessageCode409SBS {
        ReferenceStatusInvalid => "REFERENCE_STATUS_INVALID",
        StatusInvalid => "STATUS_INVALID",
    }

    // 429 TOO MANY REQUESTS

    Error429NGAIS, TppMessage429AIS, MessageCode429AIS {
        AccessExceeded => "ACCESS_EXCEEDED",
    }

    Error429NGPIS, TppMessage429PIS, MessageCode429PIS {
        AccessExceeded => "ACCESS_EXCEEDED",
    }

    Error429NGPIIS, TppMessage429PIIS, MessageCode429PIIS {
        AccessExceeded => "ACCESS_EXCEEDED",
    }

    Error429NGSBS, TppMessage429SBS, MessageCode429SBS {
        AccessExceeded => "ACCESS_EXCEEDED",
    }
}

// ============================================================================
// FORMAT ERRORS FROM VALIDATION
// ============================================================================

/// 400 payloads that can report schema violations as `FORMAT_ERROR` messages.
pub trait FormatErrorPayload: Sized {
    /// One `ERROR`/`FORMAT_ERROR` message per violation, in order.
    fn from_violations(errors: &[ValidationError]) -> Self;
}

macro_rules! format_error_payload {
    ( $( $error:ident, $message:ident, $code:ident; )* ) => {
        $(
            impl FormatErrorPayload for $error {
                fn from_violations(errors: &[ValidationError]) -> Self {
                    let messages: Vec<$message> = errors
                        .iter()
                        .map(|error| {
                            let message = $message::new()
                                .with_category(TppMessageCategory::Error)
                                .with_code($code::FormatError)
                                .with_text(error.message.clone());
                            if error.path.is_empty() {
                                message
                            } else {
                                message.with_path(error.path.clone())
                            }
                        })
                        .collect();
                    $error::new().with_tpp_messages(messages)
                }
            }
        )*
    };
}

format_error_payload! {
    Error400NGAIS, TppMessage400AIS, MessageCode400AIS;
    Error400NGPIS, TppMessage400PIS, MessageCode400PIS;
    Error400NGPIIS, TppMessage400PIIS, MessageCode400PIIS;
    Error400NGSBS, TppMessage400SBS, MessageCode400SBS;
}

/// XS2A service a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    /// Account information
    Ais,
    /// Payment initiation
    Pis,
    /// Confirmation of funds
    Piis,
    /// Signing baskets
    Sbs,
}

impl ServiceType {
    /// Case-insensitive lookup ("ais", "PIS", ...).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ais" => Some(ServiceType::Ais),
            "pis" => Some(ServiceType::Pis),
            "piis" => Some(ServiceType::Piis),
            "sbs" => Some(ServiceType::Sbs),
            _ => None,
        }
    }
}

/// 400 error body for the given service, as JSON.
pub fn format_error_payload(
    service: ServiceType,
    errors: &[ValidationError],
) -> serde_json::Result<serde_json::Value> {
    match service {
        ServiceType::Ais => serde_json::to_value(Error400NGAIS::from_violations(errors)),
        ServiceType::Pis => serde_json::to_value(Error400NGPIS::from_violations(errors)),
        ServiceType::Piis => serde_json::to_value(Error400NGPIIS::from_violations(errors)),
        ServiceType::Sbs => serde_json::to_value(Error400NGSBS::from_violations(errors)),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Validate, ViolationKind};
    use serde_json::json;

    fn violations() -> Vec<ValidationError> {
        vec![
            ValidationError::new("PaymentInitiationJson", "creditorName", "creditorName", ViolationKind::Missing),
            ValidationError::new(
                "PaymentInitiationJson",
                "instructedAmount.currency",
                "currency",
                ViolationKind::PatternMismatch { pattern: "CURRENCY" },
            ),
        ]
    }

    #[test]
    fn test_format_error_payload_for_pis() {
        let payload = Error400NGPIS::from_violations(&violations());
        let messages = payload.tpp_messages.as_ref().expect("messages");

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].category, Some(TppMessageCategory::Error));
        assert_eq!(messages[0].code, Some(MessageCode400PIS::FormatError));
        assert_eq!(messages[0].text.as_deref(), Some("Value 'creditorName' should not be null"));
        assert_eq!(messages[1].path.as_deref(), Some("instructedAmount.currency"));
        assert!(payload.is_valid());
    }

    #[test]
    fn test_format_error_json_shape() {
        let json = format_error_payload(ServiceType::Ais, &violations()[..1]).unwrap();
        assert_eq!(
            json,
            json!({
                "tppMessages": [{
                    "category": "ERROR",
                    "code": "FORMAT_ERROR",
                    "path": "creditorName",
                    "text": "Value 'creditorName' should not be null"
                }]
            })
        );
    }

    #[test]
    fn test_service_type_lookup() {
        assert_eq!(ServiceType::from_name("PIIS"), Some(ServiceType::Piis));
        assert_eq!(ServiceType::from_name("sbs"), Some(ServiceType::Sbs));
        assert_eq!(ServiceType::from_name("xs2a"), None);
    }

    #[test]
    fn test_decode_error_envelope() {
        let body: Error403NGPIS = serde_json::from_value(json!({
            "tppMessages": [
                {"category": "ERROR", "code": "PRODUCT_INVALID", "text": "payment product not supported"},
                {"category": "ERROR", "code": "SOMETHING_NEW"}
            ],
            "_links": {"self": {"href": "/v1/payments/instant-sepa-credit-transfers"}}
        }))
        .unwrap();

        let messages = body.tpp_messages.as_ref().expect("messages");
        assert_eq!(messages[0].code, Some(MessageCode403PIS::ProductInvalid));
        assert_eq!(messages[1].code, None, "unknown code decodes as absent");
        assert!(!body.is_valid(), "code is required");
    }

    #[test]
    fn test_message_text_limit() {
        let message = TppMessage409SBS::new()
            .with_category(TppMessageCategory::Warning)
            .with_code(MessageCode409SBS::ReferenceStatusInvalid)
            .with_text("t".repeat(501));
        let errors = message.validate().unwrap_err();
        assert_eq!(errors[0].kind, ViolationKind::TooLong { max: 500 });
    }
}
