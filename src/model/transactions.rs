// 📜 Transaction Reports - booked/pending entries, card transactions, standing orders

use super::accounts::{Balance, BalanceList};
use super::common::{
    AccountReference, Address, Amount, RemittanceInformationStructured,
    RemittanceInformationStructuredArray, RemittanceInformationStructuredMax140,
    RemittanceInformationUnstructuredArray,
};
use super::enums::{DayOfExecution, ExecutionRule, FrequencyCode, PurposeCode};
use super::links::{Links, LinksAll};
use crate::patterns::{BIC, CURRENCY, MONTH_OF_EXECUTION};
use chrono::NaiveDate;

// ============================================================================
// EXCHANGE RATES
// ============================================================================

record! {
    ExchangeRate {
        currency_from: String = "currencyFrom" [required, pattern(&CURRENCY)],
        rate_from: String = "rateFrom" [required],
        currency: String = "currency" [required, pattern(&CURRENCY)],
        rate_to: String = "rateTo" [required],
        rate_date: NaiveDate = "rateDate" [required],
        rate_contract: String = "rateContract" [],
    }
}

list! {
    ExchangeRateList(ExchangeRate) []
}

record! {
    /// Exchange rate as reported on card and account statements.
    ReportExchangeRate {
        source_currency: String = "sourceCurrency" [required, pattern(&CURRENCY)],
        exchange_rate: String = "exchangeRate" [required],
        unit_currency: String = "unitCurrency" [required, pattern(&CURRENCY)],
        target_currency: String = "targetCurrency" [required, pattern(&CURRENCY)],
        quotation_date: NaiveDate = "quotationDate" [required],
        contract_identification: String = "contractIdentification" [],
    }
}

list! {
    ReportExchangeRateList(ReportExchangeRate) []
}

// ============================================================================
// STANDING ORDERS
// ============================================================================

list! {
    /// Months ("1".."12") in which a MonthlyVariable order executes.
    MonthsOfExecution(String) [pattern(&MONTH_OF_EXECUTION)]
}

record! {
    StandingOrderDetails {
        start_date: NaiveDate = "startDate" [required],
        frequency: FrequencyCode = "frequency" [required],
        end_date: NaiveDate = "endDate" [],
        execution_rule: ExecutionRule = "executionRule" [],
        within_a_month_flag: bool = "withinAMonthFlag" [],
        months_of_execution: MonthsOfExecution = "monthsOfExecution" [max_items(11), unique],
        multiplicator: i32 = "multiplicator" [],
        day_of_execution: DayOfExecution = "dayOfExecution" [],
        limit_amount: Amount = "limitAmount" [],
    }
}

record! {
    AdditionalInformationStructured {
        standing_order_details: StandingOrderDetails = "standingOrderDetails" [required],
    }
}

// ============================================================================
// ACCOUNT TRANSACTIONS
// ============================================================================

record! {
    /// Single entry inside a batch booking.
    EntryDetailsElement {
        end_to_end_id: String = "endToEndId" [max(35)],
        mandate_id: String = "mandateId" [max(35)],
        check_id: String = "checkId" [max(35)],
        creditor_id: String = "creditorId" [max(35)],
        transaction_amount: Amount = "transactionAmount" [required],
        currency_exchange: ReportExchangeRateList = "currencyExchange" [],
        creditor_name: String = "creditorName" [max(70)],
        creditor_account: AccountReference = "creditorAccount" [],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        ultimate_creditor: String = "ultimateCreditor" [max(70)],
        debtor_name: String = "debtorName" [max(70)],
        debtor_account: AccountReference = "debtorAccount" [],
        debtor_agent: String = "debtorAgent" [pattern(&BIC)],
        ultimate_debtor: String = "ultimateDebtor" [max(70)],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        remittance_information_unstructured_array: RemittanceInformationUnstructuredArray = "remittanceInformationUnstructuredArray" [],
        remittance_information_structured: RemittanceInformationStructured = "remittanceInformationStructured" [],
        remittance_information_structured_array: RemittanceInformationStructuredArray = "remittanceInformationStructuredArray" [],
        purpose_code: PurposeCode = "purposeCode" [],
    }
}

list! {
    EntryDetails(EntryDetailsElement) []
}

record! {
    /// Booked, pending or informational account transaction.
    Transactions {
        transaction_id: String = "transactionId" [],
        entry_reference: String = "entryReference" [max(35)],
        end_to_end_id: String = "endToEndId" [max(35)],
        batch_indicator: bool = "batchIndicator" [],
        batch_number_of_transactions: i32 = "batchNumberOfTransactions" [],
        mandate_id: String = "mandateId" [max(35)],
        check_id: String = "checkId" [max(35)],
        creditor_id: String = "creditorId" [max(35)],
        booking_date: NaiveDate = "bookingDate" [],
        value_date: NaiveDate = "valueDate" [],
        transaction_amount: Amount = "transactionAmount" [required],
        currency_exchange: ReportExchangeRateList = "currencyExchange" [],
        creditor_name: String = "creditorName" [max(70)],
        creditor_account: AccountReference = "creditorAccount" [],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        ultimate_creditor: String = "ultimateCreditor" [max(70)],
        debtor_name: String = "debtorName" [max(70)],
        debtor_account: AccountReference = "debtorAccount" [],
        debtor_agent: String = "debtorAgent" [pattern(&BIC)],
        ultimate_debtor: String = "ultimateDebtor" [max(70)],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        remittance_information_unstructured_array: RemittanceInformationUnstructuredArray = "remittanceInformationUnstructuredArray" [],
        remittance_information_structured: RemittanceInformationStructuredMax140 = "remittanceInformationStructured" [],
        remittance_information_structured_array: RemittanceInformationStructuredArray = "remittanceInformationStructuredArray" [],
        entry_details: EntryDetails = "entryDetails" [],
        additional_information: String = "additionalInformation" [max(500)],
        additional_information_structured: AdditionalInformationStructured = "additionalInformationStructured" [],
        purpose_code: PurposeCode = "purposeCode" [],
        bank_transaction_code: String = "bankTransactionCode" [],
        proprietary_bank_transaction_code: String = "proprietaryBankTransactionCode" [max(35)],
        balance_after_transaction: Balance = "balanceAfterTransaction" [],
        links: Links = "_links" [],
    }
}

impl Transactions {
    /// True when the transaction amount is negative.
    pub fn is_debit(&self) -> bool {
        self.transaction_amount
            .as_ref()
            .and_then(|a| a.amount.as_deref())
            .is_some_and(|amount| amount.starts_with('-'))
    }
}

list! {
    TransactionList(Transactions) []
}

record! {
    /// Transaction as returned by the single transaction endpoint.
    TransactionDetails {
        transaction_id: String = "transactionId" [],
        entry_reference: String = "entryReference" [max(35)],
        end_to_end_id: String = "endToEndId" [max(35)],
        mandate_id: String = "mandateId" [max(35)],
        check_id: String = "checkId" [max(35)],
        creditor_id: String = "creditorId" [max(35)],
        booking_date: NaiveDate = "bookingDate" [],
        value_date: NaiveDate = "valueDate" [],
        transaction_amount: Amount = "transactionAmount" [required],
        exchange_rate: ExchangeRateList = "exchangeRate" [],
        creditor_name: String = "creditorName" [max(70)],
        creditor_account: AccountReference = "creditorAccount" [],
        ultimate_creditor: String = "ultimateCreditor" [max(70)],
        debtor_name: String = "debtorName" [max(70)],
        debtor_account: AccountReference = "debtorAccount" [],
        ultimate_debtor: String = "ultimateDebtor" [max(70)],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        remittance_information_structured: String = "remittanceInformationStructured" [max(140)],
        purpose_code: PurposeCode = "purposeCode" [],
        bank_transaction_code: String = "bankTransactionCode" [],
        proprietary_bank_transaction_code: String = "proprietaryBankTransactionCode" [max(35)],
        links: Links = "_links" [],
    }
}

record! {
    InlineResponse2001 {
        transactions_details: TransactionDetails = "transactionsDetails" [required],
    }
}

record! {
    /// Booked, pending and informational entries of one account.
    AccountReport {
        booked: TransactionList = "booked" [],
        pending: TransactionList = "pending" [],
        information: TransactionList = "information" [],
        links: LinksAll = "_links" [required],
    }
}

record! {
    TransactionsResponse200Json {
        account: AccountReference = "account" [],
        transactions: AccountReport = "transactions" [],
        balances: BalanceList = "balances" [],
        links: LinksAll = "_links" [],
    }
}

// ============================================================================
// CARD TRANSACTIONS
// ============================================================================

record! {
    CardTransaction {
        card_transaction_id: String = "cardTransactionId" [max(35)],
        terminal_id: String = "terminalId" [max(35)],
        transaction_date: NaiveDate = "transactionDate" [],
        booking_date: NaiveDate = "bookingDate" [],
        transaction_amount: Amount = "transactionAmount" [required],
        currency_exchange: ReportExchangeRateList = "currencyExchange" [],
        original_amount: Amount = "originalAmount" [],
        markup_fee: Amount = "markupFee" [],
        markup_fee_percentage: String = "markupFeePercentage" [],
        card_acceptor_id: String = "cardAcceptorId" [max(35)],
        card_acceptor_address: Address = "cardAcceptorAddress" [],
        merchant_category_code: String = "merchantCategoryCode" [min(4), max(4)],
        masked_pan: String = "maskedPAN" [max(35)],
        transaction_details: String = "transactionDetails" [max(140)],
        invoiced: bool = "invoiced" [],
        proprietary_bank_transaction_code: String = "proprietaryBankTransactionCode" [max(35)],
    }
}

list! {
    CardTransactionList(CardTransaction) []
}

record! {
    CardAccountReport {
        booked: CardTransactionList = "booked" [required],
        pending: CardTransactionList = "pending" [],
        links: LinksAll = "_links" [required],
    }
}

record! {
    CardAccountsTransactionsResponse200 {
        card_account: AccountReference = "cardAccount" [],
        debit_accounting: bool = "debitAccounting" [],
        card_transactions: CardAccountReport = "cardTransactions" [],
        balances: BalanceList = "balances" [],
        links: LinksAll = "_links" [],
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

    #[test]
    fn test_decode_account_report() {
        let payload = json!({
            "account": {"iban": "DE2310010010123456789"},
            "transactions": {
                "booked": [
                    {
                        "transactionId": "1234567",
                        "creditorName": "John Miles",
                        "creditorAccount": {"iban": "DE67100100101306118605"},
                        "transactionAmount": {"currency": "EUR", "amount": "-256.67"},
                        "bookingDate": "2017-10-25",
                        "valueDate": "2017-10-26",
                        "remittanceInformationUnstructured": "Example 1"
                    }
                ],
                "pending": [
                    {
                        "transactionId": "123456789",
                        "creditorName": "Claude Renault",
                        "transactionAmount": {"currency": "EUR", "amount": "-100.03"},
                        "purposeCode": "NOT-A-CODE"
                    }
                ],
                "_links": {"account": {"href": "/v1/accounts/3dc3d5b3"}}
            }
        });

        let response: TransactionsResponse200Json = serde_json::from_value(payload).unwrap();
        let report = response.transactions.as_ref().expect("report");
        let booked = report.booked.as_ref().expect("booked");
        assert_eq!(booked.len(), 1);
        assert!(booked[0].is_debit());
        assert_eq!(booked[0].booking_date, NaiveDate::from_ymd_opt(2017, 10, 25));

        let pending = report.pending.as_ref().expect("pending");
        assert_eq!(pending[0].purpose_code, None, "unknown purpose code decodes as absent");
        assert!(response.is_valid());
    }

    #[test]
    fn test_transaction_requires_amount() {
        let errors = Transactions::new().with_transaction_id("1").validate().unwrap_err();
        assert_eq!(errors[0].path, "transactionAmount");
        assert_eq!(errors[0].kind, ViolationKind::Missing);
    }

    #[test]
    fn test_merchant_category_code_exact_length() {
        let base = CardTransaction::new().with_transaction_amount(Amount::of("EUR", "9.99"));

        assert!(base.clone().with_merchant_category_code("5411").is_valid());

        let short = base.clone().with_merchant_category_code("541").validate().unwrap_err();
        assert_eq!(short[0].kind, ViolationKind::TooShort { min: 4 });

        let long = base.with_merchant_category_code("54111").validate().unwrap_err();
        assert_eq!(long[0].kind, ViolationKind::TooLong { max: 4 });
    }

    #[test]
    fn test_months_of_execution_limits() {
        let months: MonthsOfExecution = (1..=12).map(|m| m.to_string()).collect();
        let order = StandingOrderDetails::new()
            .with_start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_frequency(FrequencyCode::MonthlyVariable)
            .with_months_of_execution(months);

        let errors = order.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ViolationKind::TooManyItems { max: 11 });
    }

    #[test]
    fn test_months_of_execution_must_not_repeat() {
        let order = StandingOrderDetails::new()
            .with_start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_frequency(FrequencyCode::MonthlyVariable)
            .with_months_of_execution(["3", "3"].into_iter().map(String::from).collect::<MonthsOfExecution>());

        let errors = order.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ViolationKind::DuplicateItem { index: 1 });
    }

    #[test]
    fn test_entry_details_nested_validation() {
        let entry = EntryDetailsElement::new()
            .with_transaction_amount(Amount::of("EUR", "1.00"))
            .with_creditor_agent("bad bic");
        let transaction = Transactions::new()
            .with_transaction_amount(Amount::of("EUR", "1.00"))
            .with_entry_details(EntryDetails::new().with_item(entry));

        let errors = transaction.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "entryDetails[0].creditorAgent");
    }

    #[test]
    fn test_card_report_requires_booked_and_links() {
        let errors = CardAccountReport::new().validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["booked", "_links"]);
    }
}
