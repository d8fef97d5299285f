// 🔗 Hypermedia - `_links` objects
//
// A link map is an open relation-name -> HrefType map. Typed accessors are
// thin views over the same storage: setting `with_self_(..)` is exactly an
// insert under "self", and iteration sees it.

use super::common::HrefType;
use crate::attributes::{FieldKind, FieldType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

// ============================================================================
// LINK MAP
// ============================================================================

/// Open string-keyed map, ordered by key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkMap<V>(BTreeMap<String, V>);

impl<V> Default for LinkMap<V> {
    fn default() -> Self {
        LinkMap(BTreeMap::new())
    }
}

impl<V> LinkMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.0.insert(key.into(), value)
    }

    /// Builder: insert and return the map
    pub fn with(mut self, key: impl Into<String>, value: V) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    pub fn into_inner(self) -> BTreeMap<String, V> {
        self.0
    }
}

impl<V: FieldType> LinkMap<V> {
    /// Diagnostic block `Name {` / `    key: value` / `}`.
    pub fn render_named(&self, name: &str) -> String {
        let mut out = format!("{} {{\n", name);
        for (key, value) in &self.0 {
            out.push_str(&format!("    {}: {}\n", key, value.render().replace('\n', "\n    ")));
        }
        out.push('}');
        out
    }
}

impl<V> Deref for LinkMap<V> {
    type Target = BTreeMap<String, V>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<V> DerefMut for LinkMap<V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<V> FromIterator<(String, V)> for LinkMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        LinkMap(iter.into_iter().collect())
    }
}

impl<V> IntoIterator for LinkMap<V> {
    type Item = (String, V);
    type IntoIter = std::collections::btree_map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: FieldType> FieldType for LinkMap<V> {
    fn kind() -> FieldKind {
        FieldKind::Links {
            name: "Links",
            value: Box::new(V::kind()),
        }
    }

    fn render(&self) -> String {
        self.render_named("Links")
    }
}

impl<V: FieldType> std::fmt::Display for LinkMap<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render_named("Links"))
    }
}

/// Generic `_links` object without promoted keys.
pub type Links = LinkMap<HrefType>;

// ============================================================================
// SERVICE LINK MAPS
// ============================================================================

link_map! {
    /// Union of every relation an XS2A response may carry.
    LinksAll<HrefType> {
        sca_redirect => "scaRedirect",
        sca_oauth => "scaOAuth",
        start_authorisation => "startAuthorisation",
        start_authorisation_with_psu_identification => "startAuthorisationWithPsuIdentification",
        update_psu_identification => "updatePsuIdentification",
        start_authorisation_with_proprietary_data => "startAuthorisationWithProprietaryData",
        update_proprietary_data => "updateProprietaryData",
        start_authorisation_with_psu_authentication => "startAuthorisationWithPsuAuthentication",
        update_psu_authentication => "updatePsuAuthentication",
        start_authorisation_with_encrypted_psu_authentication => "startAuthorisationWithEncryptedPsuAuthentication",
        update_encrypted_psu_authentication => "updateEncryptedPsuAuthentication",
        start_authorisation_with_authentication_method_selection => "startAuthorisationWithAuthenticationMethodSelection",
        select_authentication_method => "selectAuthenticationMethod",
        start_authorisation_with_transaction_authorisation => "startAuthorisationWithTransactionAuthorisation",
        authorise_transaction => "authoriseTransaction",
        self_ => "self",
        status => "status",
        sca_status => "scaStatus",
        account => "account",
        balances => "balances",
        transactions => "transactions",
        transaction_details => "transactionDetails",
        card_account => "cardAccount",
        card_transactions => "cardTransactions",
        first => "first",
        next => "next",
        previous => "previous",
        last => "last",
        download => "download",
    }
}

link_map! {
    /// Links of a consent creation response.
    LinksConsents<HrefType> {
        sca_redirect => "scaRedirect",
        sca_oauth => "scaOAuth",
        start_authorisation => "startAuthorisation",
        start_authorisation_with_psu_identification => "startAuthorisationWithPsuIdentification",
        start_authorisation_with_psu_authentication => "startAuthorisationWithPsuAuthentication",
        start_authorisation_with_authentication_method_selection => "startAuthorisationWithAuthenticationMethodSelection",
        start_authorisation_with_transaction_authorisation => "startAuthorisationWithTransactionAuthorisation",
        self_ => "self",
        status => "status",
        sca_status => "scaStatus",
    }
}

link_map! {
    /// Links of a payment initiation response.
    LinksPaymentInitiation<HrefType> {
        sca_redirect => "scaRedirect",
        sca_oauth => "scaOAuth",
        start_authorisation => "startAuthorisation",
        start_authorisation_with_psu_identification => "startAuthorisationWithPsuIdentification",
        start_authorisation_with_psu_authentication => "startAuthorisationWithPsuAuthentication",
        start_authorisation_with_encrypted_psu_authentication => "startAuthorisationWithEncryptedPsuAuthentication",
        start_authorisation_with_authentication_method_selection => "startAuthorisationWithAuthenticationMethodSelection",
        start_authorisation_with_transaction_authorisation => "startAuthorisationWithTransactionAuthorisation",
        self_ => "self",
        status => "status",
        sca_status => "scaStatus",
    }
}

link_map! {
    /// Links of a payment cancellation response.
    LinksPaymentInitiationCancel<HrefType> {
        start_authorisation => "startAuthorisation",
        start_authorisation_with_psu_identification => "startAuthorisationWithPsuIdentification",
        start_authorisation_with_psu_authentication => "startAuthorisationWithPsuAuthentication",
        start_authorisation_with_encrypted_psu_authentication => "startAuthorisationWithEncryptedPsuAuthentication",
        start_authorisation_with_authentication_method_selection => "startAuthorisationWithAuthenticationMethodSelection",
    }
}

link_map! {
    LinksSelectPsuAuthenticationMethod<HrefType> {
        sca_redirect => "scaRedirect",
        sca_oauth => "scaOAuth",
        update_psu_identification => "updatePsuIdentification",
        update_psu_authentication => "updatePsuAuthentication",
        authorise_transaction => "authoriseTransaction",
        sca_status => "scaStatus",
    }
}

link_map! {
    /// Links of an authorisation sub-resource creation.
    LinksStartScaProcess<HrefType> {
        sca_redirect => "scaRedirect",
        sca_oauth => "scaOAuth",
        update_psu_identification => "updatePsuIdentification",
        start_authorisation_with_psu_authentication => "startAuthorisationWithPsuAuthentication",
        select_authentication_method => "selectAuthenticationMethod",
        authorise_transaction => "authoriseTransaction",
        sca_status => "scaStatus",
    }
}

link_map! {
    LinksStartScaProcessSingleSca<HrefType> {
        sca_redirect => "scaRedirect",
        sca_oauth => "scaOAuth",
        start_authorisation => "startAuthorisation",
        start_authorisation_with_psu_identification => "startAuthorisationWithPsuIdentification",
        start_authorisation_with_psu_authentication => "startAuthorisationWithPsuAuthentication",
        start_authorisation_with_encrypted_psu_authentication => "startAuthorisationWithEncryptedPsuAuthentication",
        start_authorisation_with_authentication_method_selection => "startAuthorisationWithAuthenticationMethodSelection",
        start_authorisation_with_transaction_authorisation => "startAuthorisationWithTransactionAuthorisation",
        self_ => "self",
        status => "status",
        sca_status => "scaStatus",
    }
}

link_map! {
    LinksStartScaProcessMultilevelSca<HrefType> {
        start_authorisation => "startAuthorisation",
        start_authorisation_with_psu_identification => "startAuthorisationWithPsuIdentification",
        start_authorisation_with_psu_authentication => "startAuthorisationWithPsuAuthentication",
        start_authorisation_with_encrypted_psu_authentication => "startAuthorisationWithEncryptedPsuAuthentication",
        self_ => "self",
        status => "status",
    }
}

link_map! {
    LinksUpdatePsuAuthentication<HrefType> {
        sca_oauth => "scaOAuth",
        select_authentication_method => "selectAuthenticationMethod",
        authorise_transaction => "authoriseTransaction",
        sca_status => "scaStatus",
    }
}

record! {
    /// Signing basket links form a closed record rather than an open map.
    LinksSigningBasket {
        sca_redirect: HrefType = "scaRedirect" [],
        sca_oauth: HrefType = "scaOAuth" [],
        start_authorisation: HrefType = "startAuthorisation" [],
        start_authorisation_with_psu_identification: HrefType = "startAuthorisationWithPsuIdentification" [],
        start_authorisation_with_psu_authentication: HrefType = "startAuthorisationWithPsuAuthentication" [],
        start_authorisation_with_encrypted_psu_authentication: HrefType = "startAuthorisationWithEncryptedPsuAuthentication" [],
        start_authorisation_with_authentication_method_selection: HrefType = "startAuthorisationWithAuthenticationMethodSelection" [],
        start_authorisation_with_transaction_authorisation: HrefType = "startAuthorisationWithTransactionAuthorisation" [],
        self_: HrefType = "self" [],
        status: HrefType = "status" [],
        sca_status: HrefType = "scaStatus" [],
    }
}

// ============================================================================
// TESTS
// ============================================================================
