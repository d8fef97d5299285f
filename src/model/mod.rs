// 🏦 XS2A Data Model
// Request and response bodies of the NextGenPSD2 access-to-account interface

pub mod enums;          // Closed wire vocabularies
pub mod common;         // Amounts, account references, SCA building blocks
pub mod links;          // `_links` maps
pub mod accounts;       // Account and card account details, balances
pub mod transactions;   // Account reports and transaction details
pub mod consents;       // AIS consents, funds confirmation
pub mod payments;       // Single, bulk and periodic payment initiation
pub mod authorisation;  // SCA sub-resources
pub mod signing_basket; // Signing baskets
pub mod messages;       // TPP error payloads

use crate::registry::SchemaRegistry;

macro_rules! register {
    ($registry:ident; $( $module:ident :: { $( $record:ident ),* $(,)? } )*) => {
        $( $( $registry.register::<$module::$record>(); )* )*
    };
}

/// Registers every record type of the model.
pub(crate) fn register_all(registry: &mut SchemaRegistry) {
    register! { registry;
        common::{
            Amount, OtherType, AccountReference, Address, HrefType,
            RemittanceInformationStructured, RemittanceInformationStructuredMax140,
            ChallengeData, AuthenticationObject, PsuData, TppMessageGeneric,
        }
        links::{ LinksSigningBasket }
        accounts::{
            Balance, AccountDetails, AccountList, InlineResponse200,
            ReadAccountBalanceResponse200, CardAccountDetails, CardAccountList,
            ReadCardAccountBalanceResponse200,
        }
        transactions::{
            ExchangeRate, ReportExchangeRate, StandingOrderDetails,
            AdditionalInformationStructured, EntryDetailsElement, Transactions,
            TransactionDetails, InlineResponse2001, AccountReport,
            TransactionsResponse200Json, CardTransaction, CardAccountReport,
            CardAccountsTransactionsResponse200,
        }
        consents::{
            AccountAccess, AdditionalInformationAccess, Consents, ConsentsResponse201,
            ConsentInformationResponse200Json, ConsentStatusResponse200,
            ConfirmationOfFunds, InlineResponse2003,
        }
        payments::{
            PaymentInitiationJson, PaymentInitiationSctJson, PaymentInitiationTarget2Json,
            PaymentInitiationCrossBorderJson, PaymentInitiationWithStatusResponse,
            PaymentInitiationSctWithStatusResponse, PaymentInitiationTarget2WithStatusResponse,
            PaymentInitiationCrossBorderWithStatusResponse, PaymentInitiationBulkElementJson,
            BulkPaymentInitiationJson, BulkPaymentInitiationWithStatusResponse,
            PeriodicPaymentInitiationJson, PeriodicPaymentInitiationSctJson,
            PeriodicPaymentInitiationTarget2Json, PeriodicPaymentInitiationCrossBorderJson,
            PeriodicPaymentInitiationWithStatusResponse,
            PeriodicPaymentInitiationSctWithStatusResponse,
            PeriodicPaymentInitiationTarget2WithStatusResponse,
            PeriodicPaymentInitiationCrossBorderWithStatusResponse,
            PaymentInitationRequestResponse201, PaymentInitiationStatusResponse200Json,
            PaymentInitiationCancelResponse202,
        }
        authorisation::{
            StartScaprocessResponse, UpdatePsuAuthentication, UpdatePsuAuthenticationResponse,
            UpdatePsuIdenticationResponse, SelectPsuAuthenticationMethod,
            SelectPsuAuthenticationMethodResponse, TransactionAuthorisation,
            ScaStatusResponse, Authorisations,
        }
        signing_basket::{
            SigningBasket, SigningBasketResponse201, SigningBasketResponse200,
            SigningBasketStatusResponse200,
        }
    }

    messages::register(registry);
}
