//! Fixed price-tier catalog
//!
//! Eleven tiers, strictly increasing by price. Each tier maps a literal price
//! point to a display range; the top tier is unbounded.

use serde::{Deserialize, Serialize};

/// One of the eleven fixed price tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Default,
    Low20,
    Mid50,
    Mid100,
    Mid500,
    High1000,
    High1500,
    High2500,
    High3000,
    Premium5000,
    Premium10000,
}

impl PriceTier {
    /// All tiers in ascending price order
    pub const ALL: [PriceTier; 11] = [
        PriceTier::Default,
        PriceTier::Low20,
        PriceTier::Mid50,
        PriceTier::Mid100,
        PriceTier::Mid500,
        PriceTier::High1000,
        PriceTier::High1500,
        PriceTier::High2500,
        PriceTier::High3000,
        PriceTier::Premium5000,
        PriceTier::Premium10000,
    ];

    /// Literal price point of this tier
    pub fn price(&self) -> f64 {
        match self {
            PriceTier::Default => 10.0,
            PriceTier::Low20 => 20.0,
            PriceTier::Mid50 => 50.0,
            PriceTier::Mid100 => 100.0,
            PriceTier::Mid500 => 500.0,
            PriceTier::High1000 => 1000.0,
            PriceTier::High1500 => 1500.0,
            PriceTier::High2500 => 2500.0,
            PriceTier::High3000 => 3000.0,
            PriceTier::Premium5000 => 5000.0,
            PriceTier::Premium10000 => 10000.0,
        }
    }

    /// Lower bound of the display range
    pub fn min_range(&self) -> u64 {
        match self {
            PriceTier::Default => 0,
            PriceTier::Low20 => 10_000,
            PriceTier::Mid50 => 50_000,
            PriceTier::Mid100 => 100_000,
            PriceTier::Mid500 => 500_000,
            PriceTier::High1000 => 1_000_000,
            PriceTier::High1500 => 1_500_000,
            PriceTier::High2500 => 2_500_000,
            PriceTier::High3000 => 3_000_000,
            PriceTier::Premium5000 => 5_000_000,
            PriceTier::Premium10000 => 10_000_000,
        }
    }

    /// Upper bound of the display range; the top tier has none
    pub fn max_range(&self) -> Option<u64> {
        match self {
            PriceTier::Default => Some(10_000),
            PriceTier::Low20 => Some(50_000),
            PriceTier::Mid50 => Some(100_000),
            PriceTier::Mid100 => Some(500_000),
            PriceTier::Mid500 => Some(1_000_000),
            PriceTier::High1000 => Some(1_500_000),
            PriceTier::High1500 => Some(2_500_000),
            PriceTier::High2500 => Some(3_000_000),
            PriceTier::High3000 => Some(5_000_000),
            PriceTier::Premium5000 => Some(10_000_000),
            PriceTier::Premium10000 => None,
        }
    }

    /// Find the tier whose literal price equals the given value.
    /// Falls back to the Default tier when nothing matches.
    pub fn from_price(price: f64) -> PriceTier {
        for tier in PriceTier::ALL {
            if price == tier.price() {
                return tier;
            }
        }
        PriceTier::Default
    }

    /// Render the display range, e.g. "> 1,500,000 - 2,500,000" or
    /// "> 10,000,000" for the unbounded top tier.
    pub fn range_description(&self) -> String {
        match self.max_range() {
            Some(max) => format!(
                "> {} - {}",
                format_amount(self.min_range()),
                format_amount(max)
            ),
            None => format!("> {}", format_amount(self.min_range())),
        }
    }
}

/// Group a monetary amount with commas every three digits
fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
