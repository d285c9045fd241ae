//! Lucky-pattern predicate library and the ordered appraisal cascade
//!
//! Every predicate is a pure boolean over the literal 9-character digit
//! string; leading zeros participate normally. The cascade walks the tiers
//! from the highest price down and stops at the first tier with any matching
//! predicate, so a number matching two tiers always prices at the higher one.
//!
//! The pair-group predicates cannot be regexes here: the `regex` crate has no
//! backreferences, so they are written as direct digit scans.

use super::tiers::PriceTier;

type Predicate = fn(&str) -> bool;

/// Ordered decision table: highest tier first, OR semantics within a row.
const CASCADE: [(PriceTier, &[Predicate]); 10] = [
    (
        PriceTier::Premium10000,
        &[
            same_8_or_9_digits,
            same_6_digits_plus_168,
            three_uniform_groups_in_order,
            same_5_digits_plus_two_pairs,
            same_7_digits_high,
        ],
    ),
    (
        PriceTier::Premium5000,
        &[
            same_5_digits_plus_168,
            four_pairs_in_a_row,
            same_6_digits_plus_other_triple,
            same_7_digits_low,
            same_4_digits_in_middle,
        ],
    ),
    (
        PriceTier::High3000,
        &[
            nine_digits_in_order,
            same_5_digits_plus_other_triple,
            same_5_digits_plus_other_quad,
            same_6_digits_at_edge,
        ],
    ),
    (
        PriceTier::High2500,
        &[three_uniform_groups_not_in_order, contains_168_plus_same_4],
    ),
    (
        PriceTier::High1500,
        &[seven_or_eight_in_order, three_pairs_in_a_row],
    ),
    (
        PriceTier::High1000,
        &[same_4_digits_plus_5_in_order, same_5_digits_at_edge],
    ),
    (PriceTier::Mid500, &[repeated_uniform_group]),
    (
        PriceTier::Mid100,
        &[six_in_order, same_5_digits_in_middle],
    ),
    (PriceTier::Mid50, &[same_4_digits_at_edge]),
    (PriceTier::Low20, &[any_uniform_group, contains_168]),
];

/// Price a 9-digit account number. Pure and deterministic; input must already
/// be validated as exactly nine ASCII digits.
pub fn appraise(account_number: &str) -> f64 {
    debug_assert!(
        account_number.len() == 9 && account_number.bytes().all(|b| b.is_ascii_digit()),
        "appraise requires a validated 9-digit string"
    );

    for (tier, predicates) in CASCADE {
        if predicates.iter().any(|check| check(account_number)) {
            return tier.price();
        }
    }
    PriceTier::Default.price()
}

// ---------------------------------------------------------------------------
// Predicates, one per recognized pattern
// ---------------------------------------------------------------------------

fn same_8_or_9_digits(s: &str) -> bool {
    // A uniform 9 contains a uniform 8, so one window length suffices
    has_uniform_run(s, 8)
}

fn same_6_digits_plus_168(s: &str) -> bool {
    contains_168(s) && has_uniform_run(s, 6)
}

fn same_7_digits_high(s: &str) -> bool {
    uniform_run_digits(s, 7).any(|d| d >= 8)
}

fn same_7_digits_low(s: &str) -> bool {
    uniform_run_digits(s, 7).any(|d| d < 8)
}

/// Shape `aa·ccccc·bb`: a uniform 5-run plus two 2-digit pairs that overlap
/// neither the run nor each other.
fn same_5_digits_plus_two_pairs(s: &str) -> bool {
    let Some(run_start) = first_uniform_run(s, 5) else {
        return false;
    };
    let run_end = run_start + 5;
    let b = s.as_bytes();

    let mut pairs = 0;
    let mut i = 0;
    while i + 1 < b.len() {
        let outside_run = i + 1 < run_start || i >= run_end;
        if outside_run && b[i] == b[i + 1] {
            pairs += 1;
            i += 2; // non-overlapping scan
        } else {
            i += 1;
        }
    }
    pairs >= 2
}

fn same_5_digits_plus_168(s: &str) -> bool {
    contains_168(s) && has_uniform_run(s, 5)
}

fn same_6_digits_plus_other_triple(s: &str) -> bool {
    match first_uniform_run_digit(s, 6) {
        Some(d) => uniform_run_digits(s, 3).any(|other| other != d),
        None => false,
    }
}

fn same_5_digits_plus_other_triple(s: &str) -> bool {
    match first_uniform_run_digit(s, 5) {
        Some(d) => uniform_run_digits(s, 3).any(|other| other != d),
        None => false,
    }
}

fn same_5_digits_plus_other_quad(s: &str) -> bool {
    match first_uniform_run_digit(s, 5) {
        Some(d) => uniform_run_digits(s, 4).any(|other| other != d),
        None => false,
    }
}

fn nine_digits_in_order(s: &str) -> bool {
    s == "123456789" || s == "987654321"
}

fn six_in_order(s: &str) -> bool {
    has_monotone_run(s, 6)
}

fn seven_or_eight_in_order(s: &str) -> bool {
    has_monotone_run(s, 7) || has_monotone_run(s, 8)
}

fn same_4_digits_plus_5_in_order(s: &str) -> bool {
    has_uniform_run(s, 4) && has_monotone_run(s, 5)
}

/// Three adjacent digit pairs in a row, e.g. "112233" anywhere
fn three_pairs_in_a_row(s: &str) -> bool {
    has_adjacent_pairs(s, 3)
}

/// Four adjacent digit pairs in a row, e.g. "11223344" anywhere
fn four_pairs_in_a_row(s: &str) -> bool {
    has_adjacent_pairs(s, 4)
}

fn contains_168(s: &str) -> bool {
    s.contains("168")
}

fn contains_168_plus_same_4(s: &str) -> bool {
    contains_168(s) && has_uniform_run(s, 4)
}

fn same_4_digits_in_middle(s: &str) -> bool {
    has_uniform_run_inside(s, 4)
}

fn same_5_digits_in_middle(s: &str) -> bool {
    has_uniform_run_inside(s, 5)
}

fn same_4_digits_at_edge(s: &str) -> bool {
    has_uniform_edge(s, 4)
}

fn same_5_digits_at_edge(s: &str) -> bool {
    has_uniform_edge(s, 5)
}

fn same_6_digits_at_edge(s: &str) -> bool {
    has_uniform_edge(s, 6)
}

/// All three aligned groups uniform with strictly ascending or descending
/// group digits, e.g. "111222333" or "555444333"
fn three_uniform_groups_in_order(s: &str) -> bool {
    match uniform_group_digits(s) {
        Some([a, b, c]) => (b > a && c > b) || (b < a && c < b),
        None => false,
    }
}

/// All three aligned groups uniform but the group digits are not ordered,
/// e.g. "111333222"
fn three_uniform_groups_not_in_order(s: &str) -> bool {
    match uniform_group_digits(s) {
        Some([a, b, c]) => !((b > a && c > b) || (b < a && c < b)),
        None => false,
    }
}

/// Any of the aligned groups (positions 0-2, 3-5, 6-8) is uniform
fn any_uniform_group(s: &str) -> bool {
    s.as_bytes().chunks_exact(3).any(is_uniform)
}

/// The same uniform group value appears in at least two aligned groups,
/// e.g. "111453111". Two uniform groups with different digits do not count.
fn repeated_uniform_group(s: &str) -> bool {
    let mut counts = [0u8; 10];
    for group in s.as_bytes().chunks_exact(3) {
        if is_uniform(group) {
            counts[(group[0] - b'0') as usize] += 1;
        }
    }
    counts.iter().any(|&n| n >= 2)
}

// ---------------------------------------------------------------------------
// Digit-scan helpers
// ---------------------------------------------------------------------------

fn is_uniform(window: &[u8]) -> bool {
    !window.is_empty() && window.iter().all(|&b| b == window[0])
}

fn has_uniform_run(s: &str, len: usize) -> bool {
    first_uniform_run(s, len).is_some()
}

/// Start index of the leftmost uniform run of the given length
fn first_uniform_run(s: &str, len: usize) -> Option<usize> {
    let b = s.as_bytes();
    if b.len() < len {
        return None;
    }
    (0..=b.len() - len).find(|&i| is_uniform(&b[i..i + len]))
}

fn first_uniform_run_digit(s: &str, len: usize) -> Option<u8> {
    first_uniform_run(s, len).map(|i| s.as_bytes()[i] - b'0')
}

/// Digits of every uniform window of the given length, left to right
fn uniform_run_digits(s: &str, len: usize) -> impl Iterator<Item = u8> + '_ {
    let b = s.as_bytes();
    b.windows(len)
        .filter(|w| is_uniform(w))
        .map(|w| w[0] - b'0')
}

/// Uniform run that touches neither position 0 nor the last index
fn has_uniform_run_inside(s: &str, len: usize) -> bool {
    let b = s.as_bytes();
    if b.len() < len + 2 {
        return false;
    }
    (1..=b.len() - len - 1).any(|i| is_uniform(&b[i..i + len]))
}

/// The first or last `len` characters are all identical
fn has_uniform_edge(s: &str, len: usize) -> bool {
    let b = s.as_bytes();
    b.len() >= len && (is_uniform(&b[..len]) || is_uniform(&b[b.len() - len..]))
}

/// Strictly ascending or descending run of consecutive digits (exact +-1
/// steps, no wraparound)
fn has_monotone_run(s: &str, len: usize) -> bool {
    let b = s.as_bytes();
    if b.len() < len {
        return false;
    }
    for step in [1i16, -1] {
        let found = (0..=b.len() - len).any(|i| {
            b[i..i + len]
                .windows(2)
                .all(|w| w[1] as i16 - w[0] as i16 == step)
        });
        if found {
            return true;
        }
    }
    false
}

/// `count` adjacent digit pairs in a row starting at any offset, the
/// `ddeeff[gg]` shape; pairs need not have distinct digits
fn has_adjacent_pairs(s: &str, count: usize) -> bool {
    let b = s.as_bytes();
    let span = count * 2;
    if b.len() < span {
        return false;
    }
    (0..=b.len() - span).any(|i| (0..count).all(|j| b[i + 2 * j] == b[i + 2 * j + 1]))
}

/// Digits of the three aligned groups when every group is uniform
fn uniform_group_digits(s: &str) -> Option<[u8; 3]> {
    let b = s.as_bytes();
    if b.len() != 9 {
        return None;
    }
    let groups = [&b[0..3], &b[3..6], &b[6..9]];
    if groups.iter().all(|g| is_uniform(g)) {
        Some([groups[0][0] - b'0', groups[1][0] - b'0', groups[2][0] - b'0'])
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Rarity scoring
// ---------------------------------------------------------------------------

/// Score the rarity of an account number from 0 to 10, independent of the
/// price cascade. Longest uniform run, longest monotone run, and lucky
/// substrings each contribute.
pub fn rarity_score(account_number: &str) -> u8 {
    let mut score: u8 = 0;

    for (len, points) in [(9, 10), (8, 9), (7, 8), (6, 7), (5, 6), (4, 4), (3, 2)] {
        if has_uniform_run(account_number, len) {
            score += points;
            break;
        }
    }

    for (len, points) in [(9, 8), (7, 6), (5, 4), (3, 2)] {
        if has_monotone_run(account_number, len) {
            score += points;
            break;
        }
    }

    if contains_168(account_number)
        || account_number.contains("888")
        || account_number.contains("999")
    {
        score += 3;
    }

    score.min(10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_same_digits() {
        assert_eq!(appraise("111111111"), 10000.0);
        assert_eq!(appraise("000000000"), 10000.0);
        assert_eq!(appraise("999999990"), 10000.0); // uniform 8-run
    }

    #[test]
    fn test_seven_run_split_by_digit_value() {
        // 7-run of a digit >= 8 stays premium
        assert_eq!(appraise("999999912"), 10000.0);
        assert_eq!(appraise("128888888"), 10000.0);
        // 7-run of a digit < 8 drops a tier
        assert_eq!(appraise("122222223"), 5000.0);
    }

    #[test]
    fn test_uniform_groups_in_order() {
        assert_eq!(appraise("111222333"), 10000.0);
        assert_eq!(appraise("555444333"), 10000.0);
        // uniform groups out of order price lower
        assert_eq!(appraise("111333222"), 2500.0);
        // equal neighboring groups are not "in order"
        assert_eq!(appraise("111222111"), 2500.0);
    }

    #[test]
    fn test_five_run_plus_pairs() {
        // aa·ccccc·bb shapes
        assert_eq!(appraise("112222233"), 10000.0);
        assert_eq!(appraise("220000033"), 10000.0);
        // pairs inside the run itself do not count
        assert_eq!(appraise("100000168"), 5000.0);
    }

    #[test]
    fn test_five_run_plus_168() {
        assert_eq!(appraise("100000168"), 5000.0);
        assert_eq!(appraise("168999995"), 5000.0);
    }

    #[test]
    fn test_pair_groups() {
        assert_eq!(appraise("112233445"), 5000.0); // four pairs
        assert_eq!(appraise("511223344"), 5000.0); // four pairs, offset 1
        assert_eq!(appraise("112233456"), 1500.0); // three pairs only
        assert_eq!(appraise("110220330"), 10.0); // pairs not adjacent
    }

    #[test]
    fn test_six_run_plus_other_triple() {
        assert_eq!(appraise("111111222"), 5000.0);
        assert_eq!(appraise("222333333"), 5000.0);
    }

    #[test]
    fn test_literal_full_sequences() {
        assert_eq!(appraise("123456789"), 3000.0);
        assert_eq!(appraise("987654321"), 3000.0);
    }

    #[test]
    fn test_uniform_edges() {
        // Runs of five or more always cover a window clear of both ends, so
        // the middle-quad rule prices them before the edge rules are reached
        assert_eq!(appraise("444444123"), 5000.0); // first six uniform
        assert_eq!(appraise("123444444"), 5000.0); // last six uniform
        assert_eq!(appraise("555551234"), 5000.0); // first five uniform
        // A bare quad at an edge is the only run the edge tier still catches
        assert_eq!(appraise("111190000"), 50.0); // first four uniform
        assert_eq!(appraise("900021111"), 50.0); // last four uniform
    }

    #[test]
    fn test_168_with_quad() {
        assert_eq!(appraise("116810000"), 2500.0);
        // 168 with only a triple stays at the bottom lucky tier
        assert_eq!(appraise("100168000"), 20.0);
    }

    #[test]
    fn test_monotone_runs() {
        assert_eq!(appraise("912345678"), 1500.0); // 8 ascending
        assert_eq!(appraise("987654329"), 1500.0); // 7 descending
        assert_eq!(appraise("123456012"), 100.0); // 6 ascending
        assert_eq!(appraise("111123456"), 1000.0); // leading quad + 5 ascending
        assert_eq!(appraise("123451111"), 1000.0); // trailing quad + 5 ascending
    }

    #[test]
    fn test_no_wraparound() {
        // 8->9->0->1 is not a monotone run
        assert_eq!(appraise("789012389"), 10.0);
    }

    #[test]
    fn test_repeated_uniform_group() {
        assert_eq!(appraise("111453111"), 500.0);
        // two different uniform groups do not satisfy the repeat rule
        assert_eq!(appraise("122333221"), 20.0);
    }

    #[test]
    fn test_runs_strictly_inside() {
        // 4-run touching neither end
        assert_eq!(appraise("155554321"), 5000.0);
        // an inside 5-run contains an inside 4-run, so it prices there too
        assert_eq!(appraise("120000043"), 5000.0);
        // 4-run at the very start is the edge tier instead
        assert_eq!(appraise("111190000"), 50.0);
        // 4-run touching the last index is not "inside"
        assert_eq!(appraise("900021111"), 50.0);
    }

    #[test]
    fn test_lucky_168_alone() {
        assert_eq!(appraise("104168021"), 20.0);
        assert_eq!(appraise("168102030"), 20.0);
    }

    #[test]
    fn test_aligned_group_alone() {
        assert_eq!(appraise("122333221"), 20.0);
        assert_eq!(appraise("999120345"), 20.0);
    }

    #[test]
    fn test_default_price() {
        assert_eq!(appraise("135792468"), 10.0);
        assert_eq!(appraise("102030405"), 10.0);
    }

    #[test]
    fn test_higher_tier_wins() {
        // all-same and contains-168 style conflicts resolve upward:
        // a number matching both a 20 predicate and a 10000 predicate
        assert_eq!(appraise("168168168"), 20.0); // only the 168 rule fires
        assert_eq!(appraise("888888888"), 10000.0); // uniform beats group rule
        assert_eq!(appraise("111111168"), 10000.0); // six-run + 168
    }

    #[test]
    fn test_appraise_is_deterministic() {
        for number in ["111111111", "135792468", "100000168", "112233445"] {
            let first = appraise(number);
            for _ in 0..3 {
                assert_eq!(appraise(number), first);
            }
        }
    }

    #[test]
    fn test_rarity_score() {
        assert_eq!(rarity_score("111111111"), 10); // capped
        assert_eq!(rarity_score("135792468"), 0);
        assert_eq!(rarity_score("123456789"), 8); // full sequential run
        assert_eq!(rarity_score("888157390"), 5); // triple (2) + lucky 888 (3)
        assert_eq!(rarity_score("123056789"), 4); // longest sequential run is 5
    }

    #[test]
    fn test_rarity_score_monotone_only() {
        // 5 sequential digits, nothing else
        assert_eq!(rarity_score("123450927"), 4);
    }
}
