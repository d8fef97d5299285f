// 🧺 Signing Baskets - several payments/consents authorised in one SCA

use super::common::{AuthenticationObject, ChallengeData, ScaMethods, TppMessages};
use super::enums::TransactionStatus;
use super::links::{LinksAll, LinksSigningBasket};

list! {
    PaymentIdList(String) []
}

list! {
    ConsentIdList(String) []
}

record! {
    /// Basket creation request.
    SigningBasket {
        payment_ids: PaymentIdList = "paymentIds" [],
        consent_ids: ConsentIdList = "consentIds" [],
    }
}

impl SigningBasket {
    /// Number of referenced payments and consents.
    pub fn item_count(&self) -> usize {
        self.payment_ids.as_ref().map_or(0, |ids| ids.len())
            + self.consent_ids.as_ref().map_or(0, |ids| ids.len())
    }
}

record! {
    SigningBasketResponse201 {
        transaction_status: TransactionStatus = "transactionStatus" [required],
        basket_id: String = "basketId" [required],
        sca_methods: ScaMethods = "scaMethods" [],
        chosen_sca_method: AuthenticationObject = "chosenScaMethod" [],
        challenge_data: ChallengeData = "challengeData" [],
        links: LinksSigningBasket = "_links" [required],
        psu_message: String = "psuMessage" [max(500)],
        tpp_messages: TppMessages = "tppMessages" [],
    }
}

record! {
    /// Basket content read back.
    SigningBasketResponse200 {
        payments: PaymentIdList = "payments" [],
        consents: ConsentIdList = "consents" [],
        transaction_status: TransactionStatus = "transactionStatus" [required],
        links: LinksAll = "_links" [],
    }
}

record! {
    SigningBasketStatusResponse200 {
        transaction_status: TransactionStatus = "transactionStatus" [required],
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
    fn test_basket_request() {
        let basket: SigningBasket = serde_json::from_value(json!({
            "paymentIds": ["123qwert456789", "12345qwert7899"],
            "consentIds": ["c-1"]
        }))
        .unwrap();
        assert_eq!(basket.item_count(), 3);
        assert_eq!(SigningBasket::new().item_count(), 0);
    }

    #[test]
    fn test_basket_created_response() {
        let response = SigningBasketResponse201::new()
            .with_transaction_status(TransactionStatus::Rcvd)
            .with_basket_id("1234-basket-567")
            .with_links(
                LinksSigningBasket::new()
                    .with_self_("/v1/signing-baskets/1234-basket-567")
                    .with_start_authorisation("/v1/signing-baskets/1234-basket-567/authorisations"),
            );
        assert!(response.is_valid());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["basketId"], "1234-basket-567");
        assert_eq!(json["_links"]["startAuthorisation"]["href"], "/v1/signing-baskets/1234-basket-567/authorisations");
    }

    #[test]
    fn test_basket_link_requires_href() {
        let response = SigningBasketResponse201::new()
            .with_transaction_status(TransactionStatus::Rcvd)
            .with_basket_id("b")
            .with_links(LinksSigningBasket::new().with_status(crate::model::common::HrefType::new()));
        let errors = response.validate().unwrap_err();
        assert_eq!(errors[0].path, "_links.status.href");
    }

    #[test]
    fn test_status_response() {
        let status: SigningBasketStatusResponse200 =
            serde_json::from_str(r#"{"transactionStatus":"ACTC"}"#).unwrap();
        assert_eq!(status.transaction_status, Some(TransactionStatus::Actc));
    }
}
