//! Day 02: repeated-digit IDs within ranges.
//!
//! An ID is "repeated" if it is some base number of k digits (no
//! leading zero) written out m >= 2 times, e.g. 1212 or 123123123.
use std::collections::BTreeSet;
use std::str::FromStr;

use nom::{
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res},
    sequence::{delimited, separated_pair},
    IResult,
};
use tracing::{event, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub low: u64,
    pub high: u64,
}

fn u64_parser(input: &str) -> IResult<&str, u64> {
    map_res(digit1, FromStr::from_str)(input)
}

fn parse_range_token(input: &str) -> IResult<&str, (u64, u64)> {
    all_consuming(separated_pair(
        u64_parser,
        delimited(space0, char('-'), space0),
        u64_parser,
    ))(input)
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedRanges {
    pub ranges: Vec<IdRange>,
    pub skipped: usize,
}

/// Parses comma-separated `low-high` tokens.  The list may be broken
/// across lines.  Empty tokens are ignored; malformed or reversed
/// ranges are counted in `skipped`.
pub fn parse_ranges(input: &str) -> ParsedRanges {
    let joined: String = input.lines().collect();
    let mut result = ParsedRanges::default();
    for token in joined.split(',').map(str::trim) {
        if token.is_empty() {
            continue;
        }
        match parse_range_token(token) {
            Ok((_, (low, high))) if low <= high => {
                result.ranges.push(IdRange { low, high });
            }
            Ok((_, (low, high))) => {
                event!(Level::DEBUG, "skipping reversed range {}-{}", low, high);
                result.skipped += 1;
            }
            Err(e) => {
                event!(Level::DEBUG, "skipping malformed range {:?}: {}", token, e);
                result.skipped += 1;
            }
        }
    }
    if result.skipped > 0 {
        event!(Level::INFO, "skipped {} invalid ranges", result.skipped);
    }
    result
}

#[test]
fn test_parse_ranges() {
    let parsed = parse_ranges("11-22,95-115,\n998-1012 , 5 - 7,,\n");
    assert_eq!(
        parsed.ranges,
        vec![
            IdRange { low: 11, high: 22 },
            IdRange { low: 95, high: 115 },
            IdRange {
                low: 998,
                high: 1012
            },
            IdRange { low: 5, high: 7 },
        ]
    );
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn test_parse_ranges_split_across_lines() {
    // Line breaks (LF or CRLF) are removed before splitting, so a token
    // may be broken across lines.
    let parsed = parse_ranges("11-2\n2,95-1\n15");
    assert_eq!(
        parsed.ranges,
        vec![IdRange { low: 11, high: 22 }, IdRange { low: 95, high: 115 }]
    );
    let parsed = parse_ranges("11-2\r\n2,95-115\r\n");
    assert_eq!(
        parsed.ranges,
        vec![IdRange { low: 11, high: 22 }, IdRange { low: 95, high: 115 }]
    );
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn test_parse_ranges_skips_bad_tokens() {
    let parsed = parse_ranges("22-11,abc,1-x,7,-3,4-,1-2-3,99999999999999999999-1,3-4");
    assert_eq!(parsed.ranges, vec![IdRange { low: 3, high: 4 }]);
    assert_eq!(parsed.skipped, 8);
}

pub fn digit_count(n: u64) -> u32 {
    match n.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

#[test]
fn test_digit_count() {
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(999), 3);
    assert_eq!(digit_count(1000), 4);
    assert_eq!(digit_count(u64::MAX), 20);
}

/// The bases X of exactly `k` digits for which `X * multiplier` lies
/// within `range`, or None if there are none.
fn base_bounds(range: &IdRange, k: u32, multiplier: u128) -> Option<(u128, u128)> {
    let low = u128::from(range.low);
    let high = u128::from(range.high);
    let from_range = ((low + multiplier - 1) / multiplier, high / multiplier);
    let from_digits = (10u128.pow(k - 1), 10u128.pow(k) - 1);
    let lo = from_range.0.max(from_digits.0);
    let hi = from_range.1.min(from_digits.1);
    if lo <= hi {
        Some((lo, hi))
    } else {
        None
    }
}

fn sum_of_values(first: u128, last: u128) -> u128 {
    let n = last - first + 1;
    (n * (first + last)) / 2
}

/// Sums the IDs in `range` which are some base written exactly twice.
/// No ID is enumerated, so the size of the range doesn't matter.
pub fn sum_doubled_in_range(range: &IdRange) -> u128 {
    let mut total = 0;
    for k in 1..=digit_count(range.high) / 2 {
        let multiplier = 10u128.pow(k) + 1;
        if let Some((lo, hi)) = base_bounds(range, k, multiplier) {
            event!(
                Level::TRACE,
                "{}-{}: k={} bases {}..={}",
                range.low,
                range.high,
                k,
                lo,
                hi
            );
            total += multiplier * sum_of_values(lo, hi);
        }
    }
    total
}

#[cfg(test)]
fn sum_doubled_by_search(range: &IdRange) -> u128 {
    (range.low..=range.high)
        .filter(|n| {
            let s = n.to_string();
            let (left, right) = s.split_at(s.len() / 2);
            s.len() % 2 == 0 && left == right
        })
        .map(u128::from)
        .sum()
}

#[test]
fn test_sum_doubled_in_range() {
    assert_eq!(sum_doubled_in_range(&IdRange { low: 11, high: 22 }), 33);
    assert_eq!(sum_doubled_in_range(&IdRange { low: 95, high: 115 }), 99);
    assert_eq!(sum_doubled_in_range(&IdRange { low: 998, high: 1012 }), 1010);
    assert_eq!(sum_doubled_in_range(&IdRange { low: 1, high: 9 }), 0);
    assert_eq!(sum_doubled_in_range(&IdRange { low: 0, high: 0 }), 0);
    assert_eq!(
        sum_doubled_in_range(&IdRange {
            low: 1188511880,
            high: 1188511890
        }),
        1188511885
    );
    for (low, high) in [(0, 2000), (1, 99), (500, 12000), (99999, 123456)] {
        let range = IdRange { low, high };
        assert_eq!(sum_doubled_in_range(&range), sum_doubled_by_search(&range));
    }
}

#[test]
fn test_sum_doubled_is_repeatable() {
    let range = IdRange {
        low: 1,
        high: u64::MAX,
    };
    let first = sum_doubled_in_range(&range);
    assert!(first > 0);
    assert_eq!(first, sum_doubled_in_range(&range));
}

fn repeat_base(base: u128, m: u32) -> u128 {
    // At most 20 digits, which always fits.
    match base.to_string().repeat(m as usize).parse() {
        Ok(n) => n,
        Err(e) => panic!("repeating {} {} times: {}", base, m, e),
    }
}

/// Finds the IDs in `range` made of some base written two or more
/// times.  An ID like 111111 has several such decompositions but
/// appears once.
pub fn repeated_in_range(range: &IdRange) -> BTreeSet<u128> {
    let mut found = BTreeSet::new();
    let max_len = digit_count(range.high);
    let mut k = 1;
    while 2 * k <= max_len {
        let block = 10u128.pow(k);
        let mut m = 2;
        while k * m <= max_len {
            let multiplier = (10u128.pow(k * m) - 1) / (block - 1);
            if let Some((lo, hi)) = base_bounds(range, k, multiplier) {
                event!(
                    Level::TRACE,
                    "{}-{}: k={} m={} bases {}..={}",
                    range.low,
                    range.high,
                    k,
                    m,
                    lo,
                    hi
                );
                for base in lo..=hi {
                    let n = repeat_base(base, m);
                    if u128::from(range.low) <= n && n <= u128::from(range.high) {
                        found.insert(n);
                    }
                }
            }
            m += 1;
        }
        k += 1;
    }
    found
}

pub fn sum_repeated_in_range(range: &IdRange) -> u128 {
    repeated_in_range(range).iter().sum()
}

#[test]
fn test_sum_repeated_is_repeatable() {
    let range = IdRange {
        low: 1,
        high: 10_000_000,
    };
    let first = sum_repeated_in_range(&range);
    assert!(first > 0);
    assert_eq!(first, sum_repeated_in_range(&range));
}

#[cfg(test)]
fn is_repeated_by_search(n: u64) -> bool {
    let s = n.to_string();
    (1..=s.len() / 2)
        .filter(|k| s.len() % k == 0)
        .any(|k| s[..k].repeat(s.len() / k) == s)
}

#[test]
fn test_repeated_in_range() {
    let found = |low, high| -> Vec<u128> {
        repeated_in_range(&IdRange { low, high }).into_iter().collect()
    };
    assert_eq!(found(11, 22), vec![11, 22]);
    assert_eq!(found(95, 115), vec![99, 111]);
    assert_eq!(found(100, 133), vec![111]);
    assert_eq!(found(998, 1012), vec![999, 1010]);
    assert_eq!(found(222220, 222224), vec![222222]);
    assert_eq!(found(1698522, 1698528), Vec::<u128>::new());
    assert_eq!(found(824824821, 824824827), vec![824824824]);
    assert_eq!(found(2121212118, 2121212124), vec![2121212121]);
}

#[test]
fn test_repeated_in_range_matches_search() {
    for (low, high) in [(0, 5000), (9000, 12000), (100000, 112000)] {
        let expected: Vec<u128> = (low..=high)
            .filter(|&n| is_repeated_by_search(n))
            .map(u128::from)
            .collect();
        let got: Vec<u128> = repeated_in_range(&IdRange { low, high }).into_iter().collect();
        assert_eq!(got, expected, "range {}-{}", low, high);
    }
}

#[test]
fn test_repeated_includes_doubled() {
    for (low, high) in [(1, 9999), (95, 115), (123000, 124000)] {
        let range = IdRange { low, high };
        assert!(sum_repeated_in_range(&range) >= sum_doubled_in_range(&range));
    }
}

pub fn total_doubled(ranges: &[IdRange]) -> u128 {
    ranges.iter().map(sum_doubled_in_range).sum()
}

pub fn total_repeated(ranges: &[IdRange]) -> u128 {
    ranges.iter().map(sum_repeated_in_range).sum()
}

#[cfg(test)]
const EXAMPLE: &str = concat!(
    "11-22,95-115,998-1012,1188511880-1188511890,222220-222224,\n",
    "1698522-1698528,446443-446449,38593856-38593862,565653-565659,\n",
    "824824821-824824827,2121212118-2121212124\n",
);

#[test]
fn test_example() {
    let parsed = parse_ranges(EXAMPLE);
    assert_eq!(parsed.ranges.len(), 11);
    assert_eq!(parsed.skipped, 0);
    assert_eq!(total_doubled(&parsed.ranges), 1227775554);
    assert_eq!(total_repeated(&parsed.ranges), 4174379265);
}
