//! Request orchestration: validate a generation request, apply defaults,
//! run the generator, and shape the candidates for callers.

use rand::Rng;
use regex::Regex;
use tracing::{debug, info};

use crate::error::{AccountForgeError, Result};
use crate::generate::AccountGenerator;
use crate::pricing;
use crate::types::{
    CandidateDetails, GenerationOutcome, GenerationRequest, DEFAULT_RESULT_LIMIT,
    MAX_RESULT_LIMIT,
};

/// Run one generation request end to end.
///
/// Validation failures come back as errors; a valid request that finds fewer
/// candidates than asked for is not an error, the outcome just carries fewer.
pub fn generate_accounts<R: Rng>(
    generator: &mut AccountGenerator<R>,
    request: &GenerationRequest,
) -> Result<GenerationOutcome> {
    let pattern = request.pattern.trim();

    info!(
        pattern = pattern,
        min_price = request.min_price,
        max_price = request.max_price,
        "processing generation request"
    );

    validate_pattern(pattern)?;

    if request.min_price < 0.0 {
        return Err(AccountForgeError::validation(
            "Minimum price must not be negative",
        ));
    }
    if request.max_price < request.min_price {
        return Err(AccountForgeError::validation(
            "Maximum price must not be below minimum price",
        ));
    }

    let filter = request.filter.unwrap_or_default();
    let account_type = request.account_type.unwrap_or_default();
    let limit = match request.limit {
        Some(limit) if (1..=MAX_RESULT_LIMIT).contains(&limit) => limit,
        _ => DEFAULT_RESULT_LIMIT,
    };

    debug!(
        filter = %filter,
        account_type = %account_type,
        limit = limit,
        "resolved request parameters"
    );

    let candidates = generator.generate(
        pattern,
        filter,
        account_type,
        limit,
        request.min_price,
        request.max_price,
    );

    let candidates: Vec<CandidateDetails> = candidates
        .into_iter()
        .map(|candidate| CandidateDetails {
            price_range: pricing::price_range_description(candidate.price),
            account_number: candidate.number,
            price: candidate.price,
        })
        .collect();

    let realized_count = candidates.len();
    info!(realized_count, "generation request complete");

    Ok(GenerationOutcome {
        candidates,
        realized_count,
    })
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(AccountForgeError::validation(
            "Input number pattern is required",
        ));
    }
    if pattern.len() > 9 {
        return Err(AccountForgeError::validation(
            "Input must not exceed 9 digits",
        ));
    }

    let digits_only = Regex::new(r"^\d+$")
        .map_err(|e| AccountForgeError::internal(e.to_string()))?;
    if !digits_only.is_match(pattern) {
        return Err(AccountForgeError::validation(
            "Input must contain only digits",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AccountType, PlacementFilter};

    fn request(pattern: &str) -> GenerationRequest {
        GenerationRequest {
            pattern: pattern.to_string(),
            min_price: 0.0,
            max_price: 1_000_000.0,
            filter: None,
            account_type: None,
            limit: None,
        }
    }

    fn seeded() -> AccountGenerator {
        AccountGenerator::from_seed(99)
    }

    #[test]
    fn test_empty_pattern_is_rejected() {
        let err = generate_accounts(&mut seeded(), &request("   ")).unwrap_err();
        assert!(err.to_string().contains("pattern is required"));
    }

    #[test]
    fn test_overlong_pattern_is_rejected() {
        let err = generate_accounts(&mut seeded(), &request("1234567890")).unwrap_err();
        assert!(err.to_string().contains("must not exceed 9 digits"));
    }

    #[test]
    fn test_non_digit_pattern_is_rejected() {
        let err = generate_accounts(&mut seeded(), &request("12a4")).unwrap_err();
        assert!(err.to_string().contains("only digits"));
    }

    #[test]
    fn test_invalid_price_band_is_rejected() {
        let mut bad_min = request("123");
        bad_min.min_price = -1.0;
        assert!(generate_accounts(&mut seeded(), &bad_min).is_err());

        let mut inverted = request("123");
        inverted.min_price = 500.0;
        inverted.max_price = 100.0;
        assert!(generate_accounts(&mut seeded(), &inverted).is_err());
    }

    #[test]
    fn test_defaults_apply_when_fields_unset() {
        let outcome = generate_accounts(&mut seeded(), &request("88")).unwrap();
        assert!(outcome.realized_count <= DEFAULT_RESULT_LIMIT);
        assert_eq!(outcome.realized_count, outcome.candidates.len());
        for candidate in &outcome.candidates {
            assert!(candidate.account_number.contains("88"));
            assert!(!candidate.price_range.is_empty());
        }
    }

    #[test]
    fn test_invalid_limit_falls_back_to_default() {
        let mut zero_limit = request("7");
        zero_limit.limit = Some(0);
        let outcome = generate_accounts(&mut seeded(), &zero_limit).unwrap();
        assert!(outcome.realized_count <= DEFAULT_RESULT_LIMIT);

        let mut huge_limit = request("7");
        huge_limit.limit = Some(MAX_RESULT_LIMIT + 1);
        let outcome = generate_accounts(&mut seeded(), &huge_limit).unwrap();
        assert!(outcome.realized_count <= DEFAULT_RESULT_LIMIT);
    }

    #[test]
    fn test_pattern_is_trimmed_before_use() {
        let outcome = generate_accounts(&mut seeded(), &request(" 123 ")).unwrap();
        for candidate in &outcome.candidates {
            assert!(candidate.account_number.contains("123"));
        }
    }

    #[test]
    fn test_explicit_filter_and_type_are_honored() {
        let mut req = request("55");
        req.filter = Some(PlacementFilter::StartsWith);
        req.account_type = Some(AccountType::Loan);
        req.limit = Some(5);
        let outcome = generate_accounts(&mut seeded(), &req).unwrap();
        for candidate in &outcome.candidates {
            assert!(candidate.account_number.starts_with("455"));
        }
    }

    #[test]
    fn test_candidates_are_ranked_by_price() {
        let mut req = request("1");
        req.limit = Some(20);
        let outcome = generate_accounts(&mut seeded(), &req).unwrap();
        let prices: Vec<f64> = outcome.candidates.iter().map(|c| c.price).collect();
        for pair in prices.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }
}
