// 🔤 Format Patterns - shared regular expressions for field validation
//
// Every pattern must match the whole value; the source is anchored once when
// the regex is first used.

use once_cell::sync::Lazy;
use regex::Regex;

/// Named full-match regular expression.
#[derive(Debug)]
pub struct Pattern {
    name: &'static str,
    source: &'static str,
    regex: Lazy<Regex>,
}

impl Pattern {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Unanchored source as declared.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// True when the entire value matches.
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

fn anchored(source: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", source)).expect("built-in pattern must compile")
}

macro_rules! pattern {
    ($(#[$meta:meta])* $ident:ident = $source:literal) => {
        $(#[$meta])*
        pub static $ident: Pattern = Pattern {
            name: stringify!($ident),
            source: $source,
            regex: Lazy::new(|| anchored($source)),
        };
    };
}

pattern! {
    /// ISO 4217 alpha code.
    CURRENCY = "[A-Z]{3}"
}

pattern! {
    /// Decimal amount: optional minus, up to 14 integer digits, up to 3 fraction digits.
    AMOUNT = r"-?[0-9]{1,14}(\.[0-9]{1,3})?"
}

pattern! {
    /// ISO 9362 business identifier code.
    BIC = "[A-Z]{6,6}[A-Z2-9][A-NP-Z0-9]([A-Z0-9]{3,3}){0,1}"
}

pattern! {
    IBAN = "[A-Z]{2,2}[0-9]{2,2}[a-zA-Z0-9]{1,30}"
}

pattern! {
    BBAN = "[a-zA-Z0-9]{1,30}"
}

pattern! {
    /// ISO 3166 alpha-2 country code.
    COUNTRY_CODE = "[A-Z]{2}"
}

pattern! {
    /// Month number 1..12.
    MONTH_OF_EXECUTION = "[1-9]|1[0-2]"
}

/// Every built-in pattern, for the catalog export.
pub fn all() -> [&'static Pattern; 7] {
    [
        &CURRENCY,
        &AMOUNT,
        &BIC,
        &IBAN,
        &BBAN,
        &COUNTRY_CODE,
        &MONTH_OF_EXECUTION,
    ]
}

// ============================================================================
// TESTS
// ============================================================================
