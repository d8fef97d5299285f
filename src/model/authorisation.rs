// 🔐 Authorisation - SCA sub-resources shared by consents, payments and baskets

use super::common::{Amount, AuthenticationObject, ChallengeData, PsuData, ScaMethods};
use super::enums::ScaStatus;
use super::links::{LinksAll, LinksSelectPsuAuthenticationMethod, LinksStartScaProcess, LinksUpdatePsuAuthentication};

// ============================================================================
// START
// ============================================================================

record! {
    /// Answer to the creation of an authorisation sub-resource.
    StartScaprocessResponse {
        sca_status: ScaStatus = "scaStatus" [required],
        authorisation_id: String = "authorisationId" [required],
        sca_methods: ScaMethods = "scaMethods" [],
        chosen_sca_method: AuthenticationObject = "chosenScaMethod" [],
        challenge_data: ChallengeData = "challengeData" [],
        links: LinksStartScaProcess = "_links" [required],
        psu_message: String = "psuMessage" [max(500)],
    }
}

// ============================================================================
// UPDATE PSU DATA
// ============================================================================

record! {
    UpdatePsuAuthentication {
        psu_data: PsuData = "psuData" [required],
    }
}

record! {
    UpdatePsuAuthenticationResponse {
        transaction_fees: Amount = "transactionFees" [],
        currency_conversion_fees: Amount = "currencyConversionFees" [],
        estimated_total_amount: Amount = "estimatedTotalAmount" [],
        estimated_interbank_settlement_amount: Amount = "estimatedInterbankSettlementAmount" [],
        chosen_sca_method: AuthenticationObject = "chosenScaMethod" [],
        challenge_data: ChallengeData = "challengeData" [],
        sca_methods: ScaMethods = "scaMethods" [],
        links: LinksUpdatePsuAuthentication = "_links" [],
        sca_status: ScaStatus = "scaStatus" [required],
        psu_message: String = "psuMessage" [max(500)],
        authorisation_id: String = "authorisationId" [],
    }
}

record! {
    UpdatePsuIdenticationResponse {
        transaction_fees: Amount = "transactionFees" [],
        sca_methods: ScaMethods = "scaMethods" [],
        chosen_sca_method: AuthenticationObject = "chosenScaMethod" [],
        challenge_data: ChallengeData = "challengeData" [],
        links: LinksAll = "_links" [required],
        psu_message: String = "psuMessage" [max(500)],
        authorisation_id: String = "authorisationId" [],
        sca_status: ScaStatus = "scaStatus" [required],
    }
}

record! {
    SelectPsuAuthenticationMethod {
        authentication_method_id: String = "authenticationMethodId" [required, max(35)],
    }
}

record! {
    SelectPsuAuthenticationMethodResponse {
        transaction_fees: Amount = "transactionFees" [],
        currency_conversion_fees: Amount = "currencyConversionFees" [],
        estimated_total_amount: Amount = "estimatedTotalAmount" [],
        estimated_interbank_settlement_amount: Amount = "estimatedInterbankSettlementAmount" [],
        chosen_sca_method: AuthenticationObject = "chosenScaMethod" [],
        challenge_data: ChallengeData = "challengeData" [],
        links: LinksSelectPsuAuthenticationMethod = "_links" [],
        sca_status: ScaStatus = "scaStatus" [required],
        psu_message: String = "psuMessage" [max(500)],
    }
}

record! {
    /// OTP or other SCA result submitted by the PSU.
    TransactionAuthorisation {
        sca_authentication_data: String = "scaAuthenticationData" [required],
    }
}

// ============================================================================
// STATUS + LISTING
// ============================================================================

record! {
    ScaStatusResponse {
        sca_status: ScaStatus = "scaStatus" [required],
        trusted_beneficiary_flag: bool = "trustedBeneficiaryFlag" [],
    }
}

list! {
    AuthorisationsList(String) []
}

record! {
    /// Authorisation sub-resources of a consent, payment or basket.
    Authorisations {
        authorisation_ids: AuthorisationsList = "authorisationIds" [required],
    }
}

// ============================================================================
// TESTS
// ============================================================================
