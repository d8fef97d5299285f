// 🧩 Shared Records - building blocks reused across every XS2A service

use super::enums::{AuthenticationType, MessageCode2XX, OtpFormat, TppMessageCategory};
use crate::patterns::{AMOUNT, BBAN, COUNTRY_CODE, CURRENCY, IBAN};

// ============================================================================
// MONEY + ACCOUNTS
// ============================================================================

record! {
    /// Monetary value. The amount stays a decimal string so no rounding can occur.
    Amount {
        currency: String = "currency" [required, pattern(&CURRENCY)],
        amount: String = "amount" [required, pattern(&AMOUNT)],
    }
}

impl Amount {
    /// Shorthand for `Amount::new().with_currency(..).with_amount(..)`.
    pub fn of(currency: impl Into<String>, amount: impl Into<String>) -> Self {
        Amount::new().with_currency(currency).with_amount(amount)
    }
}

record! {
    /// Proprietary account identification.
    OtherType {
        identification: String = "identification" [required, max(35)],
        scheme_name_code: String = "schemeNameCode" [max(35)],
        scheme_name_proprietary: String = "schemeNameProprietary" [max(70)],
        issuer: String = "issuer" [max(35)],
    }
}

record! {
    /// Reference to an account by one of its identifiers.
    AccountReference {
        iban: String = "iban" [pattern(&IBAN)],
        bban: String = "bban" [pattern(&BBAN)],
        pan: String = "pan" [max(35)],
        masked_pan: String = "maskedPan" [max(35)],
        msisdn: String = "msisdn" [max(35)],
        other: OtherType = "other" [],
        currency: String = "currency" [pattern(&CURRENCY)],
    }
}

impl AccountReference {
    /// First identifier present, in the order iban, bban, pan, maskedPan, msisdn.
    pub fn identifier(&self) -> Option<&str> {
        self.iban
            .as_deref()
            .or(self.bban.as_deref())
            .or(self.pan.as_deref())
            .or(self.masked_pan.as_deref())
            .or(self.msisdn.as_deref())
    }
}

list! {
    AccountReferenceList(AccountReference) []
}

record! {
    Address {
        street_name: String = "streetName" [max(70)],
        building_number: String = "buildingNumber" [],
        town_name: String = "townName" [],
        post_code: String = "postCode" [],
        country: String = "country" [required, pattern(&COUNTRY_CODE)],
    }
}

// ============================================================================
// HYPERLINKS
// ============================================================================

record! {
    /// Link target inside a `_links` object.
    HrefType {
        href: String = "href" [required],
    }
}

impl From<&str> for HrefType {
    fn from(href: &str) -> Self {
        HrefType::new().with_href(href)
    }
}

impl From<String> for HrefType {
    fn from(href: String) -> Self {
        HrefType::new().with_href(href)
    }
}

// ============================================================================
// REMITTANCE
// ============================================================================

record! {
    RemittanceInformationStructured {
        reference: String = "reference" [required, max(35)],
        reference_type: String = "referenceType" [max(35)],
        reference_issuer: String = "referenceIssuer" [max(35)],
    }
}

record! {
    /// Structured remittance with a reference of up to 140 characters.
    RemittanceInformationStructuredMax140 {
        reference: String = "reference" [required, max(140)],
        reference_type: String = "referenceType" [max(35)],
        reference_issuer: String = "referenceIssuer" [max(35)],
    }
}

list! {
    RemittanceInformationStructuredArray(RemittanceInformationStructured) []
}

list! {
    RemittanceInformationUnstructuredArray(String) [max(140)]
}

// ============================================================================
// STRONG CUSTOMER AUTHENTICATION
// ============================================================================

record! {
    /// Data needed to display an SCA challenge to the PSU.
    ChallengeData {
        image: String = "image" [],
        data: Vec<String> = "data" [],
        image_link: String = "imageLink" [],
        otp_max_length: i32 = "otpMaxLength" [],
        otp_format: OtpFormat = "otpFormat" [],
        additional_information: String = "additionalInformation" [],
    }
}

record! {
    /// An SCA method offered by the ASPSP.
    AuthenticationObject {
        authentication_type: String = "authenticationType" [required],
        authentication_version: String = "authenticationVersion" [],
        authentication_method_id: String = "authenticationMethodId" [required, max(35)],
        name: String = "name" [],
        explanation: String = "explanation" [],
    }
}

impl AuthenticationObject {
    /// Standardised type, `None` for proprietary method names.
    pub fn standard_type(&self) -> Option<AuthenticationType> {
        self.authentication_type
            .as_deref()
            .and_then(AuthenticationType::from_value)
    }
}

/// The method picked for the running authorisation.
pub type ChosenScaMethod = AuthenticationObject;

list! {
    ScaMethods(AuthenticationObject) []
}

record! {
    /// PSU credentials submitted during an embedded SCA.
    PsuData {
        password: String = "password" [],
        encrypted_password: String = "encryptedPassword" [],
        additional_password: String = "additionalPassword" [],
        additional_encrypted_password: String = "additionalEncryptedPassword" [],
    }
}

// ============================================================================
// MESSAGES
// ============================================================================

record! {
    /// Informational message attached to a successful response.
    TppMessageGeneric {
        category: TppMessageCategory = "category" [required],
        code: MessageCode2XX = "code" [required],
        path: String = "path" [],
        text: String = "text" [max(500)],
    }
}

list! {
    TppMessages(TppMessageGeneric) []
}

// ============================================================================
// TESTS
// ============================================================================
