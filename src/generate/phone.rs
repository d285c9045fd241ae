//! Phone-style accounts: the number mirrors a local phone number, '0'
//! followed by a non-zero trunk digit. These are keepsakes rather than
//! merchandise, so they carry no price and skip the band filter entirely.

use rand::Rng;

use super::placement::{self, ACCOUNT_WIDTH};
use crate::types::AccountCandidate;

pub(super) fn generate<R: Rng>(rng: &mut R, pattern: &str) -> Vec<AccountCandidate> {
    let bytes = pattern.as_bytes();

    // Already a well-formed phone number
    if bytes.len() == ACCOUNT_WIDTH
        && bytes[0] == b'0'
        && (b'1'..=b'9').contains(&bytes[1])
        && bytes.iter().all(u8::is_ascii_digit)
    {
        return vec![AccountCandidate::new(pattern.to_string(), 0.0)];
    }

    // A phone number written without its leading zero
    if bytes.len() == ACCOUNT_WIDTH - 1
        && (b'1'..=b'9').contains(&bytes[0])
        && bytes.iter().all(u8::is_ascii_digit)
    {
        return vec![AccountCandidate::new(format!("0{}", pattern), 0.0)];
    }

    // Synthesize one phone-shaped number around the fragment
    let mut number = String::with_capacity(ACCOUNT_WIDTH);
    number.push('0');
    number.push(char::from(b'0' + rng.gen_range(1..10u8)));

    if pattern.len() <= ACCOUNT_WIDTH - 2 {
        number.push_str(pattern);
        placement::fill_to(rng, &mut number, ACCOUNT_WIDTH);
    } else {
        number.push_str(&pattern[..ACCOUNT_WIDTH - 2]);
    }
    number.truncate(ACCOUNT_WIDTH);

    debug_assert!(number.len() == ACCOUNT_WIDTH);

    vec![AccountCandidate::new(number, 0.0)]
}
