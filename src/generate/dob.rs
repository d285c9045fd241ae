//! Date-of-birth accounts: a forced leading '0' with the pattern placed in
//! the eight trailing positions. A full-width pattern short-circuits to a
//! single direct candidate.

use rand::Rng;

use super::placement::{self, ACCOUNT_WIDTH};
use super::CandidateSink;
use crate::types::PlacementFilter;

const BODY_WIDTH: usize = ACCOUNT_WIDTH - 1;

pub(super) fn generate<R: Rng>(
    rng: &mut R,
    pattern: &str,
    filter: PlacementFilter,
    budget: usize,
    sink: &mut CandidateSink,
) {
    // A pattern covering the whole number admits exactly one candidate
    if pattern.len() >= ACCOUNT_WIDTH {
        let mut number = String::with_capacity(ACCOUNT_WIDTH);
        number.push('0');
        number.push_str(&pattern[1..ACCOUNT_WIDTH]);
        sink.offer(number);
        return;
    }

    for _ in 0..budget {
        if sink.is_full() {
            break;
        }

        let mut number = String::with_capacity(ACCOUNT_WIDTH);
        number.push('0');

        match filter {
            PlacementFilter::StartsWith => {
                number.push_str(pattern);
                placement::fill_to(rng, &mut number, ACCOUNT_WIDTH);
            }
            PlacementFilter::EndsWith => {
                placement::push_random_digits(rng, &mut number, BODY_WIDTH - pattern.len());
                number.push_str(pattern);
            }
            PlacementFilter::Contains => {
                number.push_str(&placement::embed(rng, pattern, BODY_WIDTH));
            }
        }

        number.truncate(ACCOUNT_WIDTH);

        debug_assert!(number.len() == ACCOUNT_WIDTH);
        debug_assert!(number.starts_with('0'));

        sink.offer(number);
    }
}
