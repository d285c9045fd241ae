//! Account Forge - lucky account number valuation and generation
//!
//! Prices 9-digit account numbers by the lucky digit patterns they contain
//! and generates candidates constrained by a partial pattern, an account-type
//! prefix, and a price band.

pub mod error;
pub mod generate;
pub mod pipeline;
pub mod pricing;
pub mod types;

// Re-export commonly used types
pub use error::{AccountForgeError, Result};
pub use types::{
    AccountCandidate, AccountType, CandidateDetails, GenerationOutcome, GenerationRequest,
    PlacementFilter, DEFAULT_RESULT_LIMIT, MAX_RESULT_LIMIT,
};

// Re-export main functionality
pub use generate::{AccountGenerator, ShowcaseFamily};
pub use pipeline::generate_accounts;
pub use pricing::{appraise, classify, price_range_description, rarity_score, PriceTier};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
