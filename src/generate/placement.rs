//! Placement strategies for unconstrained (Normal) accounts, plus the
//! digit-fill helpers every other strategy builds on.

use rand::Rng;

use super::CandidateSink;
use crate::types::PlacementFilter;

/// Full width of an account number
pub(super) const ACCOUNT_WIDTH: usize = 9;

/// One uniformly random decimal digit
pub(super) fn random_digit<R: Rng>(rng: &mut R) -> char {
    char::from(b'0' + rng.gen_range(0..10u8))
}

/// Append `count` random digits
pub(super) fn push_random_digits<R: Rng>(rng: &mut R, number: &mut String, count: usize) {
    for _ in 0..count {
        number.push(random_digit(rng));
    }
}

/// Pad with random digits on the right until the number reaches `width`
pub(super) fn fill_to<R: Rng>(rng: &mut R, number: &mut String, width: usize) {
    while number.len() < width {
        number.push(random_digit(rng));
    }
}

/// Place the pattern at a uniformly random offset within a field of the
/// given width, padding both sides with random digits. Oversized patterns
/// are truncated to the field.
pub(super) fn embed<R: Rng>(rng: &mut R, pattern: &str, width: usize) -> String {
    if pattern.len() >= width {
        return pattern[..width].to_string();
    }

    let offset = rng.gen_range(0..=width - pattern.len());
    let mut field = String::with_capacity(width);
    push_random_digits(rng, &mut field, offset);
    field.push_str(pattern);
    fill_to(rng, &mut field, width);
    field
}

/// Pattern first, random padding after
pub(super) fn pad_after<R: Rng>(rng: &mut R, pattern: &str, width: usize) -> String {
    if pattern.len() >= width {
        return pattern[..width].to_string();
    }

    let mut field = String::with_capacity(width);
    field.push_str(pattern);
    fill_to(rng, &mut field, width);
    field
}

/// Random padding first, pattern last
pub(super) fn pad_before<R: Rng>(rng: &mut R, pattern: &str, width: usize) -> String {
    if pattern.len() >= width {
        return pattern[pattern.len() - width..].to_string();
    }

    let mut field = String::with_capacity(width);
    push_random_digits(rng, &mut field, width - pattern.len());
    field.push_str(pattern);
    field
}

/// Budgeted random search for Normal accounts: no prefix constraint, the
/// pattern placed per the filter across the full 9-digit field.
pub(super) fn generate<R: Rng>(
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

        let number = match filter {
            PlacementFilter::StartsWith => pad_after(rng, pattern, ACCOUNT_WIDTH),
            PlacementFilter::EndsWith => pad_before(rng, pattern, ACCOUNT_WIDTH),
            PlacementFilter::Contains => embed(rng, pattern, ACCOUNT_WIDTH),
        };

        sink.offer(number);
    }
}
