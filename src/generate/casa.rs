//! CASA strategies: candidates carry a "000" or "001" prefix, alternating
//! round-robin across accepted candidates.
//!
//! Three branches: long patterns (6+ digits) are deterministic prefix
//! variants; an empty or "0" pattern walks the whole CASA numeric space in
//! sequence; anything else is the usual budgeted random search scoped to the
//! six positions after the prefix.

use rand::Rng;

use super::placement::{self, ACCOUNT_WIDTH};
use super::CandidateSink;
use crate::types::PlacementFilter;

/// Positions available after the three-digit family prefix
const BODY_WIDTH: usize = ACCOUNT_WIDTH - 3;

/// Size of one prefix bucket in the sequential enumeration
const BUCKET_SIZE: u32 = 1_000_000;

pub(super) fn generate<R: Rng>(
    rng: &mut R,
    pattern: &str,
    filter: PlacementFilter,
    budget: usize,
    sink: &mut CandidateSink,
) {
    if pattern.len() >= BODY_WIDTH {
        generate_prefix_variants(pattern, sink);
    } else if pattern.is_empty() || pattern == "0" {
        enumerate_sequentially(sink);
    } else {
        generate_randomized(rng, pattern, filter, budget, sink);
    }
}

/// Long patterns leave no room to randomize: emit the "000"/"001" pair and
/// then cycle the third prefix digit 0-9 while more candidates are needed.
fn generate_prefix_variants(pattern: &str, sink: &mut CandidateSink) {
    let truncated = &pattern[..BODY_WIDTH];

    for variant in ["000", "001"] {
        if sink.is_full() {
            return;
        }
        sink.offer(format!("{}{}", variant, truncated));
    }

    for digit in 0..10 {
        if sink.is_full() {
            return;
        }
        sink.offer(format!("00{}{}", digit, truncated));
    }
}

/// Walk "000000001" through "001999999" in order. Bounded by the space
/// itself, so no attempt budget applies.
fn enumerate_sequentially(sink: &mut CandidateSink) {
    for offset in 1..2 * BUCKET_SIZE {
        if sink.is_full() {
            return;
        }

        let number = if offset < BUCKET_SIZE {
            format!("000{:06}", offset)
        } else {
            format!("001{:06}", offset - BUCKET_SIZE)
        };
        sink.offer(number);
    }
}

fn generate_randomized<R: Rng>(
    rng: &mut R,
    pattern: &str,
    filter: PlacementFilter,
    budget: usize,
    sink: &mut CandidateSink,
) {
    for _ in 0..budget {
        if sink.is_full() {
            break;
        }

        // Alternate 000/001 across accepted candidates
        let third = char::from(b'0' + (sink.accepted_len() % 2) as u8);

        let mut number = String::with_capacity(ACCOUNT_WIDTH);
        number.push_str("00");
        number.push(third);

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
        debug_assert!(number.starts_with("00"));

        sink.offer(number);
    }
}
