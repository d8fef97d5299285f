// 💸 Payment Initiation - single, bulk and periodic payments per product family

use super::common::{
    AccountReference, Address, Amount, AuthenticationObject, ChallengeData,
    RemittanceInformationStructuredArray, RemittanceInformationStructuredMax140,
    RemittanceInformationUnstructuredArray, ScaMethods, TppMessages,
};
use super::enums::{ChargeBearer, DayOfExecution, ExecutionRule, FrequencyCode, PurposeCode, TransactionStatus};
use super::links::{LinksPaymentInitiation, LinksPaymentInitiationCancel};
use super::transactions::MonthsOfExecution;
use crate::patterns::BIC;
use chrono::{DateTime, FixedOffset, NaiveDate};

// ============================================================================
// SINGLE PAYMENTS
// ============================================================================

record! {
    /// Generic single payment body.
    PaymentInitiationJson {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_agent_name: String = "creditorAgentName" [max(70)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        requested_execution_date: NaiveDate = "requestedExecutionDate" [],
    }
}

record! {
    /// SEPA credit transfer.
    PaymentInitiationSctJson {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        requested_execution_date: NaiveDate = "requestedExecutionDate" [],
        requested_execution_time: DateTime<FixedOffset> = "requestedExecutionTime" [],
    }
}

record! {
    /// TARGET2 credit transfer.
    PaymentInitiationTarget2Json {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        requested_execution_date: NaiveDate = "requestedExecutionDate" [],
    }
}

record! {
    /// Cross-border credit transfer.
    PaymentInitiationCrossBorderJson {
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
    }
}

record! {
    /// Stored single payment read back with its status.
    PaymentInitiationWithStatusResponse {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        instruction_identification: String = "instructionIdentification" [max(35)],
        debtor_name: String = "debtorName" [max(70)],
        debtor_account: AccountReference = "debtorAccount" [required],
        ultimate_debtor: String = "ultimateDebtor" [max(70)],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        creditor_id: String = "creditorId" [max(35)],
        ultimate_creditor: String = "ultimateCreditor" [max(70)],
        purpose_code: PurposeCode = "purposeCode" [],
        charge_bearer: ChargeBearer = "chargeBearer" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        remittance_information_structured: String = "remittanceInformationStructured" [max(140)],
        remittance_information_structured_array: RemittanceInformationStructuredArray = "remittanceInformationStructuredArray" [],
        requested_execution_date: NaiveDate = "requestedExecutionDate" [],
        transaction_status: TransactionStatus = "transactionStatus" [],
        tpp_messages: TppMessages = "tppMessages" [],
    }
}

record! {
    PaymentInitiationSctWithStatusResponse {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        transaction_status: TransactionStatus = "transactionStatus" [],
    }
}

record! {
    PaymentInitiationTarget2WithStatusResponse {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        transaction_status: TransactionStatus = "transactionStatus" [],
    }
}

record! {
    PaymentInitiationCrossBorderWithStatusResponse {
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        transaction_status: TransactionStatus = "transactionStatus" [],
    }
}

// ============================================================================
// BULK PAYMENTS
// ============================================================================

record! {
    /// One payment inside a bulk; the debtor account lives on the bulk.
    PaymentInitiationBulkElementJson {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        instruction_identification: String = "instructionIdentification" [max(35)],
        debtor_name: String = "debtorName" [max(70)],
        ultimate_debtor: String = "ultimateDebtor" [max(70)],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_agent_name: String = "creditorAgentName" [max(140)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        creditor_id: String = "creditorId" [max(35)],
        ultimate_creditor: String = "ultimateCreditor" [max(70)],
        purpose_code: PurposeCode = "purposeCode" [],
        charge_bearer: ChargeBearer = "chargeBearer" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        remittance_information_unstructured_array: RemittanceInformationUnstructuredArray = "remittanceInformationUnstructuredArray" [],
        remittance_information_structured: RemittanceInformationStructuredMax140 = "remittanceInformationStructured" [],
        remittance_information_structured_array: RemittanceInformationStructuredArray = "remittanceInformationStructuredArray" [],
    }
}

record! {
    BulkPaymentInitiationJson {
        batch_booking_preferred: bool = "batchBookingPreferred" [],
        requested_execution_date: NaiveDate = "requestedExecutionDate" [],
        requested_execution_time: DateTime<FixedOffset> = "requestedExecutionTime" [],
        debtor_account: AccountReference = "debtorAccount" [required],
        payment_information_id: String = "paymentInformationId" [max(35)],
        payments: Vec<PaymentInitiationBulkElementJson> = "payments" [required],
    }
}

record! {
    BulkPaymentInitiationWithStatusResponse {
        batch_booking_preferred: bool = "batchBookingPreferred" [],
        requested_execution_date: NaiveDate = "requestedExecutionDate" [],
        acceptor_transaction_date_time: DateTime<FixedOffset> = "acceptorTransactionDateTime" [],
        debtor_account: AccountReference = "debtorAccount" [required],
        payment_information_id: String = "paymentInformationId" [max(35)],
        payments: Vec<PaymentInitiationBulkElementJson> = "payments" [required],
        transaction_status: TransactionStatus = "transactionStatus" [],
        tpp_messages: TppMessages = "tppMessages" [],
    }
}

// ============================================================================
// PERIODIC PAYMENTS
// ============================================================================

record! {
    PeriodicPaymentInitiationJson {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        instruction_identification: String = "instructionIdentification" [max(35)],
        debtor_name: String = "debtorName" [max(70)],
        debtor_account: AccountReference = "debtorAccount" [required],
        ultimate_debtor: String = "ultimateDebtor" [max(70)],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_id: String = "creditorId" [max(35)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        ultimate_creditor: String = "ultimateCreditor" [max(70)],
        purpose_code: PurposeCode = "purposeCode" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        remittance_information_unstructured_array: RemittanceInformationUnstructuredArray = "remittanceInformationUnstructuredArray" [],
        remittance_information_structured: RemittanceInformationStructuredMax140 = "remittanceInformationStructured" [],
        remittance_information_structured_array: RemittanceInformationStructuredArray = "remittanceInformationStructuredArray" [],
        start_date: NaiveDate = "startDate" [required],
        end_date: NaiveDate = "endDate" [],
        execution_rule: ExecutionRule = "executionRule" [],
        frequency: FrequencyCode = "frequency" [required],
        day_of_execution: DayOfExecution = "dayOfExecution" [],
        months_of_execution: MonthsOfExecution = "monthsOfExecution" [max_items(11), unique],
    }
}

impl PeriodicPaymentInitiationJson {
    /// True when an end date is set and lies before the start date.
    pub fn has_inverted_period(&self) -> bool {
        matches!((self.start_date, self.end_date), (Some(start), Some(end)) if end < start)
    }
}

record! {
    PeriodicPaymentInitiationSctJson {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        start_date: NaiveDate = "startDate" [required],
        end_date: NaiveDate = "endDate" [],
        execution_rule: ExecutionRule = "executionRule" [],
        frequency: FrequencyCode = "frequency" [required],
        day_of_execution: DayOfExecution = "dayOfExecution" [],
    }
}

record! {
    PeriodicPaymentInitiationTarget2Json {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        start_date: NaiveDate = "startDate" [required],
        end_date: NaiveDate = "endDate" [],
        execution_rule: ExecutionRule = "executionRule" [],
        frequency: FrequencyCode = "frequency" [required],
        day_of_execution: DayOfExecution = "dayOfExecution" [],
    }
}

record! {
    PeriodicPaymentInitiationCrossBorderJson {
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        start_date: NaiveDate = "startDate" [required],
        end_date: NaiveDate = "endDate" [],
        execution_rule: ExecutionRule = "executionRule" [],
        frequency: FrequencyCode = "frequency" [required],
        day_of_execution: DayOfExecution = "dayOfExecution" [],
    }
}

record! {
    PeriodicPaymentInitiationWithStatusResponse {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        debtor_name: String = "debtorName" [max(70)],
        debtor_account: AccountReference = "debtorAccount" [required],
        ultimate_debtor: String = "ultimateDebtor" [max(70)],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_id: String = "creditorId" [max(35)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        ultimate_creditor: String = "ultimateCreditor" [max(70)],
        purpose_code: PurposeCode = "purposeCode" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        remittance_information_structured: RemittanceInformationStructuredMax140 = "remittanceInformationStructured" [],
        start_date: NaiveDate = "startDate" [required],
        end_date: NaiveDate = "endDate" [],
        execution_rule: ExecutionRule = "executionRule" [],
        frequency: FrequencyCode = "frequency" [required],
        day_of_execution: DayOfExecution = "dayOfExecution" [],
        transaction_status: TransactionStatus = "transactionStatus" [],
        tpp_messages: TppMessages = "tppMessages" [],
    }
}

record! {
    PeriodicPaymentInitiationSctWithStatusResponse {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        start_date: NaiveDate = "startDate" [required],
        end_date: NaiveDate = "endDate" [],
        execution_rule: ExecutionRule = "executionRule" [],
        frequency: FrequencyCode = "frequency" [required],
        day_of_execution: DayOfExecution = "dayOfExecution" [],
        transaction_status: TransactionStatus = "transactionStatus" [],
        tpp_messages: TppMessages = "tppMessages" [],
    }
}

record! {
    PeriodicPaymentInitiationTarget2WithStatusResponse {
        end_to_end_identification: String = "endToEndIdentification" [max(35)],
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        start_date: NaiveDate = "startDate" [required],
        end_date: NaiveDate = "endDate" [],
        execution_rule: ExecutionRule = "executionRule" [],
        frequency: FrequencyCode = "frequency" [required],
        day_of_execution: DayOfExecution = "dayOfExecution" [],
        transaction_status: TransactionStatus = "transactionStatus" [],
        tpp_messages: TppMessages = "tppMessages" [],
    }
}

record! {
    PeriodicPaymentInitiationCrossBorderWithStatusResponse {
        debtor_account: AccountReference = "debtorAccount" [required],
        instructed_amount: Amount = "instructedAmount" [required],
        creditor_account: AccountReference = "creditorAccount" [required],
        creditor_agent: String = "creditorAgent" [pattern(&BIC)],
        creditor_name: String = "creditorName" [required, max(70)],
        creditor_address: Address = "creditorAddress" [],
        remittance_information_unstructured: String = "remittanceInformationUnstructured" [max(140)],
        start_date: NaiveDate = "startDate" [required],
        end_date: NaiveDate = "endDate" [],
        execution_rule: ExecutionRule = "executionRule" [],
        frequency: FrequencyCode = "frequency" [required],
        day_of_execution: DayOfExecution = "dayOfExecution" [],
        transaction_status: TransactionStatus = "transactionStatus" [],
        tpp_messages: TppMessages = "tppMessages" [],
    }
}

// ============================================================================
// RESPONSES
// ============================================================================

record! {
    /// Answer to a payment initiation request.
    PaymentInitationRequestResponse201 {
        transaction_status: TransactionStatus = "transactionStatus" [required],
        payment_id: String = "paymentId" [required],
        transaction_fees: Amount = "transactionFees" [],
        transaction_fee_indicator: bool = "transactionFeeIndicator" [],
        sca_methods: ScaMethods = "scaMethods" [],
        chosen_sca_method: AuthenticationObject = "chosenScaMethod" [],
        challenge_data: ChallengeData = "challengeData" [],
        links: LinksPaymentInitiation = "_links" [required],
        psu_message: String = "psuMessage" [max(500)],
        tpp_messages: TppMessages = "tppMessages" [],
    }
}

record! {
    PaymentInitiationStatusResponse200Json {
        transaction_status: TransactionStatus = "transactionStatus" [required],
        funds_available: bool = "fundsAvailable" [],
        psu_message: String = "psuMessage" [max(500)],
    }
}

record! {
    PaymentInitiationCancelResponse202 {
        transaction_status: TransactionStatus = "transactionStatus" [required],
        sca_methods: ScaMethods = "scaMethods" [],
        chosen_sca_method: AuthenticationObject = "chosenScaMethod" [],
        challenge_data: ChallengeData = "challengeData" [],
        links: LinksPaymentInitiationCancel = "_links" [],
    }
}

// ============================================================================
// TESTS
// ============================================================================
