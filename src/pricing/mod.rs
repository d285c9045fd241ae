//! Pattern valuation - prices a 9-digit account number by its lucky patterns
//!
//! `classify` is the validated entry point used on the "price one specific
//! account number" path; `appraise` is the raw cascade for inputs that are
//! already known to be well-formed.

mod patterns;
mod tiers;

pub use patterns::{appraise, rarity_score};
pub use tiers::PriceTier;

use crate::error::{AccountForgeError, Result};
use regex::Regex;

/// Price a specific account number, rejecting anything that is not exactly
/// nine decimal digits.
pub fn classify(account_number: &str) -> Result<f64> {
    let well_formed = Regex::new(r"^\d{9}$")
        .map_err(|e| AccountForgeError::internal(e.to_string()))?;

    if !well_formed.is_match(account_number) {
        return Err(AccountForgeError::validation(format!(
            "account number must be exactly 9 digits, got '{}'",
            account_number
        )));
    }

    Ok(appraise(account_number))
}

/// Human-readable price range for a price produced by the cascade
pub fn price_range_description(price: f64) -> String {
    PriceTier::from_price(price).range_description()
}
