// 🏦 Account Information - accounts, card accounts and balances

use super::common::{AccountReference, Amount};
use super::enums::{AccountStatus, AccountUsage, BalanceType};
use super::links::LinksAll;
use crate::patterns::{BBAN, BIC, CURRENCY, IBAN};
use chrono::{DateTime, FixedOffset, NaiveDate};

// ============================================================================
// BALANCES
// ============================================================================

record! {
    Balance {
        balance_amount: Amount = "balanceAmount" [required],
        balance_type: BalanceType = "balanceType" [required],
        credit_limit_included: bool = "creditLimitIncluded" [],
        last_change_date_time: DateTime<FixedOffset> = "lastChangeDateTime" [],
        reference_date: NaiveDate = "referenceDate" [],
        last_committed_transaction: String = "lastCommittedTransaction" [max(35)],
    }
}

list! {
    BalanceList(Balance) []
}

impl BalanceList {
    /// First balance of the given type.
    pub fn of_type(&self, balance_type: BalanceType) -> Option<&Balance> {
        self.iter().find(|b| b.balance_type == Some(balance_type))
    }
}

// ============================================================================
// ACCOUNTS
// ============================================================================

record! {
    /// Payment account as returned by `/accounts`.
    AccountDetails {
        resource_id: String = "resourceId" [max(35)],
        iban: String = "iban" [pattern(&IBAN)],
        bban: String = "bban" [pattern(&BBAN)],
        msisdn: String = "msisdn" [max(35)],
        currency: String = "currency" [pattern(&CURRENCY)],
        name: String = "name" [max(35)],
        product: String = "product" [max(35)],
        cash_account_type: String = "cashAccountType" [],
        status: AccountStatus = "status" [],
        bic: String = "bic" [pattern(&BIC)],
        linked_accounts: String = "linkedAccounts" [max(70)],
        usage: AccountUsage = "usage" [],
        details: String = "details" [max(140)],
        balances: BalanceList = "balances" [],
        links: LinksAll = "_links" [],
    }
}

record! {
    AccountList {
        accounts: Vec<AccountDetails> = "accounts" [required],
    }
}

record! {
    /// Single account details response.
    InlineResponse200 {
        account: AccountDetails = "account" [required],
    }
}

record! {
    ReadAccountBalanceResponse200 {
        account: AccountReference = "account" [],
        balances: BalanceList = "balances" [required],
    }
}

// ============================================================================
// CARD ACCOUNTS
// ============================================================================

record! {
    CardAccountDetails {
        resource_id: String = "resourceId" [max(35)],
        masked_pan: String = "maskedPan" [required, max(35)],
        currency: String = "currency" [required, pattern(&CURRENCY)],
        name: String = "name" [max(35)],
        product: String = "product" [max(35)],
        status: AccountStatus = "status" [],
        usage: AccountUsage = "usage" [],
        details: String = "details" [max(140)],
        credit_limit: Amount = "creditLimit" [],
        balances: BalanceList = "balances" [],
        links: LinksAll = "_links" [],
    }
}

record! {
    CardAccountList {
        card_accounts: Vec<CardAccountDetails> = "cardAccounts" [required],
    }
}

record! {
    ReadCardAccountBalanceResponse200 {
        card_account: AccountReference = "cardAccount" [],
        debit_accounting: bool = "debitAccounting" [],
        balances: BalanceList = "balances" [required],
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

    fn sample_account() -> serde_json::Value {
        json!({
            "resourceId": "3dc3d5b3-7023-4848-9853-f5400a64e80",
            "iban": "DE89370400440532013000",
            "currency": "EUR",
            "name": "Main Account",
            "status": "enabled",
            "usage": "PRIV",
            "balances": [
                {
                    "balanceAmount": {"currency": "EUR", "amount": "500.00"},
                    "balanceType": "closingBooked",
                    "referenceDate": "2017-10-25"
                }
            ],
            "_links": {
                "balances": {"href": "/v1/accounts/3dc3d5b3/balances"}
            }
        })
    }

    #[test]
    fn test_decode_account_details() {
        let account: AccountDetails = serde_json::from_value(sample_account()).unwrap();

        assert_eq!(account.status, Some(AccountStatus::Enabled));
        assert_eq!(account.usage, Some(AccountUsage::Priv));
        let balances = account.balances.as_ref().expect("balances");
        let closing = balances.of_type(BalanceType::ClosingBooked).expect("closingBooked");
        assert_eq!(
            closing.reference_date,
            NaiveDate::from_ymd_opt(2017, 10, 25)
        );
        let links = account.links.as_ref().expect("links");
        assert!(links.balances().is_some());
        assert!(account.is_valid());
    }

    #[test]
    fn test_resource_id_limit() {
        let mut payload = sample_account();
        payload["resourceId"] = json!("3dc3d5b3-7023-4848-9853-f5400a64e80f");

        let account: AccountDetails = serde_json::from_value(payload).unwrap();
        let errors = account.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "resourceId");
        assert_eq!(errors[0].kind, crate::schema::ViolationKind::TooLong { max: 35 });
    }

    #[test]
    fn test_currency_is_optional() {
        let mut payload = sample_account();
        payload.as_object_mut().unwrap().remove("currency");

        let account: AccountDetails = serde_json::from_value(payload).unwrap();
        assert_eq!(account.currency, None);
        assert!(account.is_valid());
    }

    #[test]
    fn test_unknown_status_degrades_to_absent() {
        let mut payload = sample_account();
        payload["status"] = json!("frozen");

        let account: AccountDetails = serde_json::from_value(payload).unwrap();
        assert_eq!(account.status, None);
        assert_eq!(account.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_balance_requires_type() {
        let balance = Balance::new().with_balance_amount(Amount::of("EUR", "1.00"));
        let errors = balance.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "balanceType");
    }

    #[test]
    fn test_card_account_required_fields() {
        let card = CardAccountDetails::new().with_name("Visa");
        let errors = card.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["maskedPan", "currency"]);
    }

    #[test]
    fn test_balance_date_time_round_trip() {
        let stamp = DateTime::parse_from_rfc3339("2024-03-01T10:15:00+01:00").unwrap();
        let balance = Balance::new()
            .with_balance_amount(Amount::of("EUR", "10"))
            .with_balance_type(BalanceType::Expected)
            .with_last_change_date_time(stamp);

        let json = serde_json::to_string(&balance).unwrap();
        let back: Balance = serde_json::from_str(&json).unwrap();
        assert_eq!(back, balance);
    }

    #[test]
    fn test_account_list_requires_accounts() {
        assert!(!AccountList::new().is_valid());
        assert!(AccountList::new().with_accounts(Vec::new()).is_valid());
    }
}
