// 📝 Consents - AIS consent requests/responses and funds confirmation

use super::common::{
    AccountReference, AccountReferenceList, Amount, AuthenticationObject, ChallengeData,
    ScaMethods, TppMessages,
};
use super::enums::{AllPsd2, AvailableAccounts, ConsentStatus, ScaStatus};
use super::links::{LinksAll, LinksConsents};
use chrono::NaiveDate;

// ============================================================================
// ACCESS
// ============================================================================

record! {
    /// Requested access: dedicated account lists or one of the global flags.
    AccountAccess {
        accounts: AccountReferenceList = "accounts" [],
        balances: AccountReferenceList = "balances" [],
        transactions: AccountReferenceList = "transactions" [],
        additional_information: AdditionalInformationAccess = "additionalInformation" [],
        available_accounts: AvailableAccounts = "availableAccounts" [],
        all_psd2: AllPsd2 = "allPsd2" [],
    }
}

impl AccountAccess {
    /// True when at least one account list is present and non-empty.
    pub fn is_dedicated(&self) -> bool {
        [
            self.accounts.as_ref(),
            self.balances.as_ref(),
            self.transactions.as_ref(),
        ]
        .into_iter()
        .flatten()
        .any(|list| !list.is_empty())
    }
}

record! {
    AdditionalInformationAccess {
        owner_name: AccountReferenceList = "ownerName" [],
        trusted_beneficiaries: AccountReferenceList = "trustedBeneficiaries" [],
    }
}

// ============================================================================
// CONSENT RESOURCES
// ============================================================================

record! {
    /// Consent creation request body.
    Consents {
        access: AccountAccess = "access" [required],
        recurring_indicator: bool = "recurringIndicator" [required],
        valid_until: NaiveDate = "validUntil" [required],
        frequency_per_day: i32 = "frequencyPerDay" [required],
        combined_service_indicator: bool = "combinedServiceIndicator" [required],
    }
}

record! {
    ConsentsResponse201 {
        consent_status: ConsentStatus = "consentStatus" [required],
        consent_id: String = "consentId" [required],
        sca_methods: ScaMethods = "scaMethods" [],
        chosen_sca_method: AuthenticationObject = "chosenScaMethod" [],
        challenge_data: ChallengeData = "challengeData" [],
        links: LinksConsents = "_links" [required],
        psu_message: String = "psuMessage" [max(500)],
        tpp_messages: TppMessages = "tppMessages" [],
        sca_status: ScaStatus = "scaStatus" [],
    }
}

record! {
    ConsentInformationResponse200Json {
        access: AccountAccess = "access" [required],
        recurring_indicator: bool = "recurringIndicator" [required],
        valid_until: NaiveDate = "validUntil" [required],
        frequency_per_day: i32 = "frequencyPerDay" [required],
        last_action_date: NaiveDate = "lastActionDate" [required],
        consent_status: ConsentStatus = "consentStatus" [required],
        links: LinksAll = "_links" [],
    }
}

record! {
    ConsentStatusResponse200 {
        consent_status: ConsentStatus = "consentStatus" [required],
        psu_message: String = "psuMessage" [max(500)],
    }
}

// ============================================================================
// FUNDS CONFIRMATION
// ============================================================================

record! {
    ConfirmationOfFunds {
        card_number: String = "cardNumber" [max(35)],
        account: AccountReference = "account" [required],
        payee: String = "payee" [max(70)],
        instructed_amount: Amount = "instructedAmount" [required],
    }
}

record! {
    /// Funds confirmation result.
    InlineResponse2003 {
        funds_available: bool = "fundsAvailable" [required],
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Validate;
    use serde_json::json;

    #[test]
    fn test_global_consent_request() {
        let request: Consents = serde_json::from_value(json!({
            "access": {"allPsd2": "allAccounts"},
            "recurringIndicator": true,
            "validUntil": "2030-12-31",
            "frequencyPerDay": 4,
            "combinedServiceIndicator": false
        }))
        .unwrap();

        let access = request.access.as_ref().expect("access");
        assert_eq!(access.all_psd2, Some(AllPsd2::AllAccounts));
        assert!(!access.is_dedicated());
        assert!(request.is_valid());
    }

    #[test]
    fn test_dedicated_access() {
        let access = AccountAccess::new().with_balances(
            AccountReferenceList::new().with_item(AccountReference::new().with_iban("DE89370400440532013000")),
        );
        assert!(access.is_dedicated());
        assert!(!AccountAccess::new().with_accounts(AccountReferenceList::new()).is_dedicated());
    }

    #[test]
    fn test_consent_response_wire_names() {
        let response = ConsentsResponse201::new()
            .with_consent_status(ConsentStatus::Received)
            .with_consent_id("1234-wertiq-983")
            .with_links(LinksConsents::new().with_sca_redirect("https://bank/sca"));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["consentStatus"], "received");
        assert_eq!(json["_links"]["scaRedirect"]["href"], "https://bank/sca");
        assert!(json.get("scaMethods").is_none(), "absent fields are omitted");
        assert!(response.is_valid());
    }

    #[test]
    fn test_consent_response_requires_links() {
        let response = ConsentsResponse201::new()
            .with_consent_status(ConsentStatus::Valid)
            .with_consent_id("c1");
        let errors = response.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "_links");
    }

    #[test]
    fn test_funds_confirmation() {
        let request = ConfirmationOfFunds::new()
            .with_account(AccountReference::new().with_iban("DE89370400440532013000"))
            .with_instructed_amount(Amount::of("EUR", "123.00"));
        assert!(request.is_valid());

        let answer: InlineResponse2003 = serde_json::from_str(r#"{"fundsAvailable":true}"#).unwrap();
        assert_eq!(answer.funds_available, Some(true));
    }
}
