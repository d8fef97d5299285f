// 🏷️ Code Lists - closed string enumerations of the XS2A interface

// ============================================================================
// STATUS CODES
// ============================================================================

wire_enum! {
    /// ISO 20022 payment transaction status.
    TransactionStatus {
        /// AcceptedSettlementCompleted on the creditor side
        Accc => "ACCC",
        /// AcceptedCustomerProfile
        Accp => "ACCP",
        /// AcceptedSettlementCompleted on the debtor side
        Acsc => "ACSC",
        /// AcceptedSettlementInProcess
        Acsp => "ACSP",
        /// AcceptedTechnicalValidation
        Actc => "ACTC",
        /// AcceptedWithChange
        Acwc => "ACWC",
        /// AcceptedWithoutPosting
        Acwp => "ACWP",
        /// Received
        Rcvd => "RCVD",
        /// Pending
        Pdng => "PDNG",
        /// Rejected
        Rjct => "RJCT",
        /// Cancelled
        Canc => "CANC",
        /// AcceptedFundsChecked
        Acfc => "ACFC",
        /// PartiallyAcceptedTechnicalCorrect
        Patc => "PATC",
        /// PartiallyAccepted
        Part => "PART",
    }
}

wire_enum! {
    /// State of a strong customer authentication process.
    ScaStatus {
        Received => "received",
        PsuIdentified => "psuIdentified",
        PsuAuthenticated => "psuAuthenticated",
        ScaMethodSelected => "scaMethodSelected",
        Started => "started",
        Unconfirmed => "unconfirmed",
        Finalised => "finalised",
        Failed => "failed",
        Exempted => "exempted",
    }
}

impl ScaStatus {
    /// `finalised`, `failed` and `exempted` end the authorisation.
    pub fn is_final(&self) -> bool {
        matches!(self, ScaStatus::Finalised | ScaStatus::Failed | ScaStatus::Exempted)
    }
}

wire_enum! {
    ConsentStatus {
        Received => "received",
        Rejected => "rejected",
        Valid => "valid",
        RevokedByPsu => "revokedByPsu",
        Expired => "expired",
        TerminatedByTpp => "terminatedByTpp",
        TerminatedByAspsp => "terminatedByAspsp",
        PartiallyAuthorised => "partiallyAuthorised",
    }
}

wire_enum! {
    BalanceType {
        ClosingBooked => "closingBooked",
        Expected => "expected",
        Authorised => "authorised",
        OpeningBooked => "openingBooked",
        InterimAvailable => "interimAvailable",
        InterimBooked => "interimBooked",
        ForwardAvailable => "forwardAvailable",
        NonInvoiced => "nonInvoiced",
    }
}

wire_enum! {
    AccountStatus {
        Enabled => "enabled",
        Deleted => "deleted",
        Blocked => "blocked",
    }
}

wire_enum! {
    /// Private or organisational account usage.
    AccountUsage {
        Priv => "PRIV",
        Orga => "ORGA",
    }
}

// ============================================================================
// CONSENT ACCESS
// ============================================================================

wire_enum! {
    AvailableAccounts {
        AllAccounts => "allAccounts",
        AllAccountsWithBalances => "allAccountsWithBalances",
    }
}

wire_enum! {
    AllPsd2 {
        AllAccounts => "allAccounts",
    }
}

// ============================================================================
// PAYMENT SCHEDULING
// ============================================================================

wire_enum! {
    /// Execution frequency of a standing order.
    FrequencyCode {
        Daily => "Daily",
        Weekly => "Weekly",
        EveryTwoWeeks => "EveryTwoWeeks",
        Monthly => "Monthly",
        EveryTwoMonths => "EveryTwoMonths",
        Quarterly => "Quarterly",
        SemiAnnual => "SemiAnnual",
        Annual => "Annual",
        MonthlyVariable => "MonthlyVariable",
    }
}

wire_enum! {
    /// Shift of an execution date that falls on a non-business day.
    ExecutionRule {
        Following => "following",
        Preceding => "preceding",
    }
}

wire_enum! {
    /// Day of the month a recurring payment executes; "31" means the last day.
    DayOfExecution {
        Day1 => "1", Day2 => "2", Day3 => "3", Day4 => "4", Day5 => "5",
        Day6 => "6", Day7 => "7", Day8 => "8", Day9 => "9", Day10 => "10",
        Day11 => "11", Day12 => "12", Day13 => "13", Day14 => "14", Day15 => "15",
        Day16 => "16", Day17 => "17", Day18 => "18", Day19 => "19", Day20 => "20",
        Day21 => "21", Day22 => "22", Day23 => "23", Day24 => "24", Day25 => "25",
        Day26 => "26", Day27 => "27", Day28 => "28", Day29 => "29", Day30 => "30",
        Day31 => "31",
    }
}

impl DayOfExecution {
    /// Numeric day, 1..=31.
    pub fn day(&self) -> u32 {
        // declaration order matches the numeric value
        Self::ALL.iter().position(|d| d == self).map_or(0, |i| i as u32 + 1)
    }
}

wire_enum! {
    ChargeBearer {
        Debt => "DEBT",
        Cred => "CRED",
        Shar => "SHAR",
        Slev => "SLEV",
    }
}

wire_enum! {
    /// ISO 20022 ExternalPurpose1Code.
    PurposeCode {
        Bkdf => "BKDF", Bkfe => "BKFE", Bkfm => "BKFM", Bkip => "BKIP", Bkpp => "BKPP",
        Cblk => "CBLK", Cdcb => "CDCB", Cdcd => "CDCD", Cdcs => "CDCS", Cddp => "CDDP",
        Cdoc => "CDOC", Cdqc => "CDQC", Etup => "ETUP", Fcol => "FCOL", Mtup => "MTUP",
        Acct => "ACCT", Cash => "CASH", Coll => "COLL", Csdb => "CSDB", Dept => "DEPT",
        Intc => "INTC", Lima => "LIMA", Nett => "NETT", Bfwd => "BFWD", Ccir => "CCIR",
        Ccpc => "CCPC", Ccpm => "CCPM", Ccsm => "CCSM", Crds => "CRDS", Crpr => "CRPR",
        Crsp => "CRSP", Crtl => "CRTL", Eqpt => "EQPT", Equs => "EQUS", Expt => "EXPT",
        Extd => "EXTD", Fixi => "FIXI", Fwbc => "FWBC", Fwcc => "FWCC", Fwsb => "FWSB",
        Fwsc => "FWSC", Marg => "MARG", Mbsb => "MBSB", Mbsc => "MBSC", Mgcc => "MGCC",
        Mgsc => "MGSC", Occc => "OCCC", Opbc => "OPBC", Opcc => "OPCC", Opsb => "OPSB",
        Opsc => "OPSC", Optn => "OPTN", Otcd => "OTCD", Repo => "REPO", Rpbc => "RPBC",
        Rpcc => "RPCC", Rpsb => "RPSB", Rpsc => "RPSC", Rvpo => "RVPO", Sbsc => "SBSC",
        Scie => "SCIE", Scir => "SCIR", Scrp => "SCRP", Shbc => "SHBC", Shcc => "SHCC",
        Shsl => "SHSL", Sleb => "SLEB", Sloa => "SLOA", Swbc => "SWBC", Swcc => "SWCC",
        Swpt => "SWPT", Swsb => "SWSB", Swsc => "SWSC", Tbas => "TBAS", Tbbc => "TBBC",
        Tbcc => "TBCC", Trcp => "TRCP", Agrt => "AGRT", Aren => "AREN", Bexp => "BEXP",
        Boce => "BOCE", Comc => "COMC", Cpyr => "CPYR", Gdds => "GDDS", Gdsv => "GDSV",
        Gscb => "GSCB", Licf => "LICF", Mp2b => "MP2B", Pope => "POPE", Roya => "ROYA",
        Scve => "SCVE", Serv => "SERV", Subs => "SUBS", Supp => "SUPP", Trad => "TRAD",
        Char => "CHAR", Comt => "COMT", Mp2p => "MP2P", Ecpg => "ECPG", Ecpr => "ECPR",
        Ecpu => "ECPU", Epay => "EPAY", Clpr => "CLPR", Comp => "COMP", Dbtc => "DBTC",
        Govi => "GOVI", Hlrp => "HLRP", Hlst => "HLST", Inpc => "INPC", Inpr => "INPR",
        Insc => "INSC", Insu => "INSU", Inte => "INTE", Lbri => "LBRI", Lifi => "LIFI",
        Loan => "LOAN", Loar => "LOAR", Peno => "PENO", Ppti => "PPTI", Relg => "RELG",
        Rinp => "RINP", Trfd => "TRFD", Forw => "FORW", Fxnt => "FXNT", Admg => "ADMG",
        Adva => "ADVA", Bcdm => "BCDM", Bcfg => "BCFG", Bldm => "BLDM", Bnet => "BNET",
        Cbff => "CBFF", Cbfr => "CBFR", Ccrd => "CCRD", Cdbl => "CDBL", Cfee => "CFEE",
        Cgdd => "CGDD", Cort => "CORT", Cost => "COST", Cpkc => "CPKC", Dcrd => "DCRD",
        Dsmt => "DSMT", Dvpm => "DVPM", Educ => "EDUC", Fact => "FACT", Fand => "FAND",
        Fcpm => "FCPM", Fees => "FEES", Govt => "GOVT", Iccp => "ICCP", Idcp => "IDCP",
        Ihrp => "IHRP", Insm => "INSM", Ivpt => "IVPT", Mcdm => "MCDM", Mcfg => "MCFG",
        Msvc => "MSVC", Nows => "NOWS", Ocdm => "OCDM", Ocfg => "OCFG", Ofee => "OFEE",
        Othr => "OTHR", Padd => "PADD", Ptsp => "PTSP", Rcke => "RCKE", Rcpt => "RCPT",
        Rebt => "REBT", Refu => "REFU", Rent => "RENT", Reod => "REOD", Rimb => "RIMB",
        Rpnt => "RPNT", Rrbn => "RRBN", Rvpm => "RVPM", Slpi => "SLPI", Splt => "SPLT",
        Stdy => "STDY", Tban => "TBAN", Tbil => "TBIL", Tcsc => "TCSC", Teli => "TELI",
        Tmpg => "TMPG", Tpri => "TPRI", Tprp => "TPRP", Trnc => "TRNC", Trvc => "TRVC",
        Webi => "WEBI", Anni => "ANNI", Cafi => "CAFI", Cfdi => "CFDI", Cmdt => "CMDT",
        Deri => "DERI", Divd => "DIVD", Frex => "FREX", Hedg => "HEDG", Invs => "INVS",
        Prme => "PRME", Savg => "SAVG", Secu => "SECU", Sepi => "SEPI", Trea => "TREA",
        Unit => "UNIT", Fnet => "FNET", Futr => "FUTR", Ants => "ANTS", Cvcf => "CVCF",
        Dmeq => "DMEQ", Dnts => "DNTS", Hltc => "HLTC", Hlti => "HLTI", Hspc => "HSPC",
        Icrf => "ICRF", Ltcf => "LTCF", Mafc => "MAFC", Marf => "MARF", Mdcs => "MDCS",
        View => "VIEW", Cdep => "CDEP", Swfp => "SWFP", Swpp => "SWPP", Swrs => "SWRS",
        Swuf => "SWUF", Adcs => "ADCS", Aemp => "AEMP", Allw => "ALLW", Almy => "ALMY",
        Bbsc => "BBSC", Bech => "BECH", Bene => "BENE", Bonu => "BONU", Cchd => "CCHD",
        Comm => "COMM", Cslp => "CSLP", Gfrp => "GFRP", Gvea => "GVEA", Gveb => "GVEB",
        Gvec => "GVEC", Gved => "GVED", Gwlt => "GWLT", Hrec => "HREC", Payr => "PAYR",
        Pefc => "PEFC", Pens => "PENS", Prcp => "PRCP", Rhbs => "RHBS", Sala => "SALA",
        Ssbe => "SSBE", Lbin => "LBIN", Lcol => "LCOL", Lfee => "LFEE", Lmeq => "LMEQ",
        Lmfi => "LMFI", Lmrk => "LMRK", Lreb => "LREB", Lrev => "LREV", Lsfl => "LSFL",
        Estx => "ESTX", Fwlv => "FWLV", Gstx => "GSTX", Hstx => "HSTX", Intx => "INTX",
        Nitx => "NITX", Ptxp => "PTXP", Rdtx => "RDTX", Taxs => "TAXS", Vatx => "VATX",
        Whld => "WHLD", Taxr => "TAXR", B112 => "B112", Br12 => "BR12", Tlrf => "TLRF",
        Tlrr => "TLRR", Airb => "AIRB", Busb => "BUSB", Ferb => "FERB", Rlwy => "RLWY",
        Trpt => "TRPT", Cbtv => "CBTV", Elec => "ELEC", Enrg => "ENRG", Gasb => "GASB",
        Nwch => "NWCH", Nwcm => "NWCM", Otlc => "OTLC", Phon => "PHON", Ubil => "UBIL",
        Wter => "WTER",
    }
}

// ============================================================================
// AUTHENTICATION
// ============================================================================

wire_enum! {
    /// Standardised SCA method types. ASPSPs may also send proprietary names,
    /// so `AuthenticationObject` keeps the raw string.
    AuthenticationType {
        SmsOtp => "SMS_OTP",
        ChipOtp => "CHIP_OTP",
        PhotoOtp => "PHOTO_OTP",
        PushOtp => "PUSH_OTP",
        SmtpOtp => "SMTP_OTP",
    }
}

wire_enum! {
    OtpFormat {
        Characters => "characters",
        Integer => "integer",
    }
}

// ============================================================================
// MESSAGES
// ============================================================================

wire_enum! {
    TppMessageCategory {
        Error => "ERROR",
        Warning => "WARNING",
    }
}

wire_enum! {
    /// Message code allowed in successful (2xx) responses.
    MessageCode2XX {
        Warning => "WARNING",
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::FieldType;

    #[test]
    fn test_wire_strings() {
        assert_eq!(ConsentStatus::PartiallyAuthorised.as_str(), "partiallyAuthorised");
        assert_eq!(TransactionStatus::Acsc.to_string(), "ACSC");
        assert_eq!(FrequencyCode::EveryTwoWeeks.as_str(), "EveryTwoWeeks");
    }

    #[test]
    fn test_reverse_lookup_miss_is_none() {
        assert_eq!(ScaStatus::from_value("finalised"), Some(ScaStatus::Finalised));
        assert_eq!(ScaStatus::from_value("FINALISED"), None, "lookup is case sensitive");
        assert_eq!(ScaStatus::from_value(""), None);
    }

    #[test]
    fn test_all_values_round_trip() {
        for status in TransactionStatus::ALL {
            assert_eq!(TransactionStatus::from_value(status.as_str()), Some(*status));
        }
        assert_eq!(PurposeCode::ALL.len(), PurposeCode::VALUES.len());
    }

    #[test]
    fn test_standalone_deserialize_is_strict() {
        let parsed: ConsentStatus = serde_json::from_str("\"valid\"").unwrap();
        assert_eq!(parsed, ConsentStatus::Valid);
        assert!(serde_json::from_str::<ConsentStatus>("\"bogus\"").is_err());
    }

    #[test]
    fn test_serializes_as_string_not_ordinal() {
        assert_eq!(serde_json::to_string(&BalanceType::InterimAvailable).unwrap(), "\"interimAvailable\"");
    }

    #[test]
    fn test_day_of_execution() {
        assert_eq!(DayOfExecution::Day1.day(), 1);
        assert_eq!(DayOfExecution::Day31.day(), 31);
        assert_eq!(DayOfExecution::from_value("15").map(|d| d.day()), Some(15));
    }

    #[test]
    fn test_sca_status_final() {
        assert!(ScaStatus::Finalised.is_final());
        assert!(!ScaStatus::Started.is_final());
    }

    #[test]
    fn test_enum_kind() {
        match AccountStatus::kind() {
            crate::attributes::FieldKind::Enum { name, values } => {
                assert_eq!(name, "AccountStatus");
                assert_eq!(values, &["enabled", "deleted", "blocked"]);
            }
            other => panic!("unexpected kind {:?}", other),
        }
    }
}
