//! Loan and FD/RD strategies: a single forced prefix digit ('4' or '8')
//! with the placement rule scoped to the eight trailing positions.

use rand::Rng;

use super::placement::{self, ACCOUNT_WIDTH};
use super::CandidateSink;
use crate::types::PlacementFilter;

/// Width left for the pattern once the prefix digit is fixed
const BODY_WIDTH: usize = ACCOUNT_WIDTH - 1;

pub(super) fn generate<R: Rng>(
    rng: &mut R,
    prefix: u8,
    pattern: &str,
    filter: PlacementFilter,
    budget: usize,
    sink: &mut CandidateSink,
) {
    let prefix_char = char::from(prefix);

    // Without a usable pattern the whole body is random
    let degenerate = pattern.is_empty() || pattern == prefix_char.to_string().as_str();

    for _ in 0..budget {
        if sink.is_full() {
            break;
        }

        let mut number = if degenerate {
            let mut number = String::with_capacity(ACCOUNT_WIDTH);
            number.push(prefix_char);
            placement::fill_to(rng, &mut number, ACCOUNT_WIDTH);
            number
        } else {
            match filter {
                PlacementFilter::StartsWith => {
                    // Pattern follows directly after the prefix digit
                    let mut number = String::with_capacity(ACCOUNT_WIDTH);
                    number.push(prefix_char);
                    number.push_str(pattern);
                    number.truncate(ACCOUNT_WIDTH);
                    placement::fill_to(rng, &mut number, ACCOUNT_WIDTH);
                    number
                }
                PlacementFilter::EndsWith => {
                    if pattern.len() >= ACCOUNT_WIDTH {
                        pattern[..ACCOUNT_WIDTH].to_string()
                    } else {
                        let mut number = String::with_capacity(ACCOUNT_WIDTH);
                        number.push(prefix_char);
                        placement::push_random_digits(
                            rng,
                            &mut number,
                            BODY_WIDTH - pattern.len(),
                        );
                        number.push_str(pattern);
                        number
                    }
                }
                PlacementFilter::Contains => {
                    let mut number = String::with_capacity(ACCOUNT_WIDTH);
                    number.push(prefix_char);
                    number.push_str(&placement::embed(rng, pattern, BODY_WIDTH));
                    number
                }
            }
        };

        number.truncate(ACCOUNT_WIDTH);
        force_prefix(&mut number, prefix_char);

        debug_assert!(number.len() == ACCOUNT_WIDTH);
        debug_assert!(number.starts_with(prefix_char));

        sink.offer(number);
    }
}

/// Re-force the prefix digit in case placement drifted it
fn force_prefix(number: &mut String, prefix_char: char) {
    if !number.starts_with(prefix_char) {
        number.replace_range(0..1, &prefix_char.to_string());
    }
}
