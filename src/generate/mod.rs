//! Candidate generation under per-account-type constraints
//!
//! Each account-type family has its own strategy for synthesizing 9-digit
//! candidates around the caller's partial pattern. All strategies share one
//! skeleton: synthesize, deduplicate, price, keep only candidates inside the
//! requested price band, and stop once the target count is reached or the
//! attempt budget runs out. Falling short of the target is a normal outcome.

mod casa;
mod dob;
mod phone;
mod placement;
mod prefixed;

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pricing;
use crate::types::{AccountCandidate, AccountType, PlacementFilter};

/// Randomized attempts allowed per requested candidate before giving up
pub const DEFAULT_ATTEMPTS_PER_RESULT: usize = 20;

/// Generator for pattern-constrained account numbers.
///
/// The pseudo-random source is an explicit dependency so tests can seed it;
/// `new()` draws entropy from the operating system.
pub struct AccountGenerator<R: Rng = StdRng> {
    rng: R,
    attempts_per_result: usize,
}

impl AccountGenerator<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create a generator with a reproducible random source
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AccountGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AccountGenerator<R> {
    /// Create a generator around an injected random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            attempts_per_result: DEFAULT_ATTEMPTS_PER_RESULT,
        }
    }

    /// Override the per-result attempt budget multiplier
    pub fn with_attempt_budget(mut self, attempts_per_result: usize) -> Self {
        self.attempts_per_result = attempts_per_result;
        self
    }

    /// Generate up to `count` distinct candidates matching the pattern,
    /// placement rule, account type, and price band, ranked by price
    /// descending. Returns fewer than `count` when the attempt budget or the
    /// enumeration space runs out first.
    pub fn generate(
        &mut self,
        pattern: &str,
        filter: PlacementFilter,
        account_type: AccountType,
        count: usize,
        min_price: f64,
        max_price: f64,
    ) -> Vec<AccountCandidate> {
        // Phone-style numbers are never priced and bypass the band filter
        if account_type == AccountType::Phone {
            return phone::generate(&mut self.rng, pattern);
        }

        let budget = count.saturating_mul(self.attempts_per_result);
        let mut sink = CandidateSink::new(count, min_price, max_price);

        match account_type {
            AccountType::Normal => {
                placement::generate(&mut self.rng, pattern, filter, budget, &mut sink)
            }
            AccountType::Loan => {
                prefixed::generate(&mut self.rng, b'4', pattern, filter, budget, &mut sink)
            }
            AccountType::FdRd => {
                prefixed::generate(&mut self.rng, b'8', pattern, filter, budget, &mut sink)
            }
            AccountType::Casa => {
                casa::generate(&mut self.rng, pattern, filter, budget, &mut sink)
            }
            AccountType::Dob => dob::generate(&mut self.rng, pattern, filter, budget, &mut sink),
            AccountType::Phone => unreachable!("handled above"),
        }

        sink.into_ranked()
    }

    /// Generate a single showcase number exhibiting a named pattern family
    pub fn showcase(&mut self, family: ShowcaseFamily) -> String {
        match family {
            ShowcaseFamily::UniformGroup => self.showcase_uniform_group(),
            ShowcaseFamily::Lucky168 => self.showcase_lucky_168(),
            ShowcaseFamily::Sequential => self.showcase_sequential(),
            ShowcaseFamily::Pairs => self.showcase_pairs(),
            ShowcaseFamily::Random => self.random_account_number(),
        }
    }

    /// A fully random 9-digit account number
    pub fn random_account_number(&mut self) -> String {
        let mut number = String::with_capacity(9);
        placement::push_random_digits(&mut self.rng, &mut number, 9);
        number
    }

    fn showcase_uniform_group(&mut self) -> String {
        let digit = char::from(b'0' + self.rng.gen_range(0..10));
        let group_index = self.rng.gen_range(0..3);

        let mut number = String::with_capacity(9);
        for position in 0..9 {
            if position / 3 == group_index {
                number.push(digit);
            } else {
                number.push(placement::random_digit(&mut self.rng));
            }
        }
        number
    }

    fn showcase_lucky_168(&mut self) -> String {
        let position = self.rng.gen_range(0..7);

        let mut number = String::with_capacity(9);
        placement::push_random_digits(&mut self.rng, &mut number, position);
        number.push_str("168");
        placement::fill_to(&mut self.rng, &mut number, 9);
        number
    }

    fn showcase_sequential(&mut self) -> String {
        let length = self.rng.gen_range(5..=9);
        let ascending = self.rng.gen_bool(0.5);
        let start = self.rng.gen_range(0..=9 - (length - 1)) as u8;

        let mut number = String::with_capacity(9);
        for step in 0..length as u8 {
            let digit = if ascending {
                start + step
            } else {
                9 - start - step
            };
            number.push(char::from(b'0' + digit));
        }
        placement::fill_to(&mut self.rng, &mut number, 9);
        number
    }

    fn showcase_pairs(&mut self) -> String {
        let pair_count = self.rng.gen_range(2..=4);

        let mut digits: Vec<u8> = Vec::with_capacity(pair_count);
        while digits.len() < pair_count {
            let digit = self.rng.gen_range(0..10u8);
            if !digits.contains(&digit) {
                digits.push(digit);
            }
        }

        let mut number = String::with_capacity(9);
        for digit in digits {
            let ch = char::from(b'0' + digit);
            number.push(ch);
            number.push(ch);
        }
        placement::fill_to(&mut self.rng, &mut number, 9);
        number
    }
}

/// Named pattern families for showcase numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseFamily {
    /// One aligned 3-digit group repeats a single digit
    UniformGroup,
    /// Contains the lucky substring "168"
    Lucky168,
    /// Contains a sequential digit run
    Sequential,
    /// Leading adjacent digit pairs
    Pairs,
    /// Unconstrained
    Random,
}

/// Shared accept loop state: deduplication, price-band filtering, and the
/// target count. Candidates are ranked price-descending on extraction.
pub(crate) struct CandidateSink {
    target: usize,
    min_price: f64,
    max_price: f64,
    seen: HashSet<String>,
    accepted: Vec<AccountCandidate>,
}

impl CandidateSink {
    fn new(target: usize, min_price: f64, max_price: f64) -> Self {
        Self {
            target,
            min_price,
            max_price,
            seen: HashSet::new(),
            accepted: Vec::new(),
        }
    }

    /// Price a synthesized number and accept it when it is new and inside
    /// the band. Returns whether it was accepted.
    fn offer(&mut self, number: String) -> bool {
        debug_assert!(
            number.len() == 9 && number.bytes().all(|b| b.is_ascii_digit()),
            "generation branch produced malformed candidate '{}'",
            number
        );

        if self.seen.contains(&number) {
            return false;
        }

        let price = pricing::appraise(&number);
        if price < self.min_price || price > self.max_price {
            return false;
        }

        self.seen.insert(number.clone());
        self.accepted.push(AccountCandidate::new(number, price));
        true
    }

    fn is_full(&self) -> bool {
        self.accepted.len() >= self.target
    }

    /// Accepted count so far; drives the CASA prefix round-robin
    fn accepted_len(&self) -> usize {
        self.accepted.len()
    }

    fn into_ranked(mut self) -> Vec<AccountCandidate> {
        self.accepted
            .sort_by(|a, b| b.price.total_cmp(&a.price));
        self.accepted
    }
}
