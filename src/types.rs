//! Core types and structures for account-forge

use serde::{Deserialize, Serialize};

/// Hard ceiling on the number of candidates a single request may ask for.
pub const MAX_RESULT_LIMIT: usize = 100_000;

/// Result count applied when a request leaves the limit unset or invalid.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Account-type family; each family carries its own numeric-prefix constraint
/// and generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Current/savings account, prefixed "000" or "001"
    Casa,
    /// Loan account, prefixed '4'
    Loan,
    /// Fixed/recurring deposit, prefixed '8'
    FdRd,
    /// Date-of-birth style number, prefixed '0'
    Dob,
    /// Phone-number style, prefixed '0' with second digit 1-9; never priced
    Phone,
    /// No prefix constraint
    Normal,
}

impl Default for AccountType {
    fn default() -> Self {
        Self::Normal
    }
}

impl AccountType {
    /// Fixed digit prefix this family forces onto every candidate.
    /// Casa alternates between "000" and "001"; the constraint is "00" + one digit.
    pub fn prefix(&self) -> &'static str {
        match self {
            AccountType::Casa => "00",
            AccountType::Loan => "4",
            AccountType::FdRd => "8",
            AccountType::Dob | AccountType::Phone => "0",
            AccountType::Normal => "",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Casa => write!(f, "casa"),
            AccountType::Loan => write!(f, "loan"),
            AccountType::FdRd => write!(f, "fd_rd"),
            AccountType::Dob => write!(f, "dob"),
            AccountType::Phone => write!(f, "phone"),
            AccountType::Normal => write!(f, "normal"),
        }
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "casa" => Ok(AccountType::Casa),
            "loan" => Ok(AccountType::Loan),
            "fd_rd" | "fdrd" | "fd-rd" => Ok(AccountType::FdRd),
            "dob" => Ok(AccountType::Dob),
            "phone" => Ok(AccountType::Phone),
            "normal" => Ok(AccountType::Normal),
            other => Err(format!("unknown account type: {}", other)),
        }
    }
}

/// Where the user's partial pattern must appear in a generated number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementFilter {
    Contains,
    StartsWith,
    EndsWith,
}

impl Default for PlacementFilter {
    fn default() -> Self {
        Self::Contains
    }
}

impl std::fmt::Display for PlacementFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementFilter::Contains => write!(f, "contains"),
            PlacementFilter::StartsWith => write!(f, "starts_with"),
            PlacementFilter::EndsWith => write!(f, "ends_with"),
        }
    }
}

impl std::str::FromStr for PlacementFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contains" | "contain" => Ok(PlacementFilter::Contains),
            "starts_with" | "start_with" => Ok(PlacementFilter::StartsWith),
            "ends_with" | "end_with" => Ok(PlacementFilter::EndsWith),
            other => Err(format!("unknown placement filter: {}", other)),
        }
    }
}

/// A generated account number with its appraised price.
/// Produced and consumed within a single generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCandidate {
    pub number: String,
    pub price: f64,
}

impl AccountCandidate {
    pub fn new(number: impl Into<String>, price: f64) -> Self {
        Self {
            number: number.into(),
            price,
        }
    }
}

/// Request for candidate account numbers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Partial digit pattern, 1-9 digits
    pub pattern: String,
    /// Lowest acceptable price, inclusive
    pub min_price: f64,
    /// Highest acceptable price, inclusive
    pub max_price: f64,
    /// Placement of the pattern; defaults to Contains when unset
    #[serde(default)]
    pub filter: Option<PlacementFilter>,
    /// Account-type family; defaults to Normal when unset
    #[serde(default)]
    pub account_type: Option<AccountType>,
    /// Requested candidate count; invalid or unset values fall back to 10
    #[serde(default)]
    pub limit: Option<usize>,
}

/// One priced candidate as returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDetails {
    pub account_number: String,
    pub price: f64,
    pub price_range: String,
}

/// Outcome of one generation call. `realized_count` may be lower than the
/// requested limit; callers must not assume they are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOutcome {
    pub candidates: Vec<CandidateDetails>,
    pub realized_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_prefixes() {
        assert_eq!(AccountType::Casa.prefix(), "00");
        assert_eq!(AccountType::Loan.prefix(), "4");
        assert_eq!(AccountType::FdRd.prefix(), "8");
        assert_eq!(AccountType::Dob.prefix(), "0");
        assert_eq!(AccountType::Phone.prefix(), "0");
        assert_eq!(AccountType::Normal.prefix(), "");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(AccountType::default(), AccountType::Normal);
        assert_eq!(PlacementFilter::default(), PlacementFilter::Contains);
    }

    #[test]
    fn test_parsing() {
        assert_eq!("fd-rd".parse::<AccountType>().unwrap(), AccountType::FdRd);
        assert_eq!(
            "START_WITH".parse::<PlacementFilter>().unwrap(),
            PlacementFilter::StartsWith
        );
        assert!("garbage".parse::<AccountType>().is_err());
    }
}
