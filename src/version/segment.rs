//! Alphanumeric segment comparison
//!
//! The primitive underneath pacman-style version ordering: both strings are
//! walked left to right as alternating runs of ASCII digits and ASCII
//! letters, with every other byte acting as a separator. Epoch, pkgver and
//! pkgrel are each compared with this same walk.

use std::cmp::Ordering;

/// Compare two plain version substrings (no epoch/release structure).
///
/// Ordering rules, matching the reference package manager:
/// - a digit run always out-ranks a letter run at the same position
/// - digit runs compare by value, leading zeros are insignificant
/// - letter runs compare byte-lexicographically
/// - separators are skipped and carry no ordering weight; they delimit
///   runs but never merge two same-class runs into one
/// - when one side runs out: a remaining digit run wins, a remaining
///   letter run loses, and a trailing run of pure separators counts as
///   nothing at all
///
/// Skipped separators never influence the result, which keeps the order
/// transitive for every input.
pub(crate) fn segment_cmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    let mut i = 0;
    let mut j = 0;

    loop {
        skip_separators(a, &mut i);
        skip_separators(b, &mut j);

        match (i == a.len(), j == b.len()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return tail_ordering(b[j]),
            (false, true) => return tail_ordering(a[i]).reverse(),
            (false, false) => {}
        }

        let numeric = a[i].is_ascii_digit();
        let end_a = segment_end(a, i, numeric);
        let end_b = segment_end(b, j, numeric);

        // b holds a segment of the opposite class at this position
        if j == end_b {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let cmp = if numeric {
            numeric_cmp(&a[i..end_a], &b[j..end_b])
        } else {
            a[i..end_a].cmp(&b[j..end_b])
        };
        if cmp != Ordering::Equal {
            return cmp;
        }

        i = end_a;
        j = end_b;
    }
}

/// Ordering of an exhausted string against the side that still holds the
/// segment starting with `next`. A leftover letter run never beats an empty
/// tail; a leftover digit run always does.
fn tail_ordering(next: u8) -> Ordering {
    if next.is_ascii_alphabetic() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Advance past separator bytes.
fn skip_separators(s: &[u8], pos: &mut usize) {
    while *pos < s.len() && !s[*pos].is_ascii_alphanumeric() {
        *pos += 1;
    }
}

/// End index of the maximal same-class run starting at `start`.
fn segment_end(s: &[u8], start: usize, numeric: bool) -> usize {
    let mut end = start;
    while end < s.len() {
        let same_class = if numeric {
            s[end].is_ascii_digit()
        } else {
            s[end].is_ascii_alphabetic()
        };
        if !same_class {
            break;
        }
        end += 1;
    }
    end
}

/// Compare two digit runs by value: strip leading zeros, then the longer
/// run wins, then byte comparison settles equal lengths.
fn numeric_cmp(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let mut start = 0;
    while start < s.len() && s[start] == b'0' {
        start += 1;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_strings() {
        assert_eq!(segment_cmp("1.0.2", "1.0.2"), Ordering::Equal);
        assert_eq!(segment_cmp("", ""), Ordering::Equal);
    }

    #[test]
    fn test_simple_numeric() {
        assert_eq!(segment_cmp("1.0", "1.1"), Ordering::Less);
        assert_eq!(segment_cmp("2.0", "1.9"), Ordering::Greater);
    }

    #[test]
    fn test_multi_digit_not_lexicographic() {
        assert_eq!(segment_cmp("1.10", "1.9"), Ordering::Greater);
        assert_eq!(segment_cmp("1.9", "1.10"), Ordering::Less);
    }

    #[test]
    fn test_leading_zeros_insignificant() {
        assert_eq!(segment_cmp("1.007", "1.7"), Ordering::Equal);
        assert_eq!(segment_cmp("007", "7"), Ordering::Equal);
        assert_eq!(segment_cmp("1.008", "1.7"), Ordering::Greater);
    }

    #[test]
    fn test_numeric_beats_alphabetic() {
        assert_eq!(segment_cmp("1.a", "1.1"), Ordering::Less);
        assert_eq!(segment_cmp("1.1", "1.a"), Ordering::Greater);
        assert_eq!(segment_cmp("a", "0"), Ordering::Less);
    }

    #[test]
    fn test_alphabetic_lexicographic() {
        assert_eq!(segment_cmp("1.0a", "1.0b"), Ordering::Less);
        assert_eq!(segment_cmp("1.0alpha", "1.0b"), Ordering::Less);
        assert_eq!(segment_cmp("1.0rc", "1.0beta"), Ordering::Greater);
    }

    #[test]
    fn test_trailing_alpha_loses_to_exhaustion() {
        // pacman quirk: 1.0a is older than 1.0
        assert_eq!(segment_cmp("1.0a", "1.0"), Ordering::Less);
        assert_eq!(segment_cmp("1.0", "1.0a"), Ordering::Greater);
    }

    #[test]
    fn test_trailing_numeric_wins_over_exhaustion() {
        assert_eq!(segment_cmp("1.0.1", "1.0"), Ordering::Greater);
        assert_eq!(segment_cmp("1.0", "1.0.1"), Ordering::Less);
        // even a lone zero is a digit run, and a digit run beats nothing
        assert_eq!(segment_cmp("0", ""), Ordering::Greater);
        assert_eq!(segment_cmp("", "0"), Ordering::Less);
    }

    #[test]
    fn test_trailing_separators_count_as_nothing() {
        assert_eq!(segment_cmp("1.0.", "1.0"), Ordering::Equal);
        assert_eq!(segment_cmp("1.0", "1.0..."), Ordering::Equal);
        assert_eq!(segment_cmp("1.0._", "1.0"), Ordering::Equal);
    }

    #[test]
    fn test_separator_runs_carry_no_weight() {
        assert_eq!(segment_cmp("1..0", "1.0"), Ordering::Equal);
        assert_eq!(segment_cmp("1_0", "1.0"), Ordering::Equal);
        assert_eq!(segment_cmp("1a.2", "1a:2"), Ordering::Equal);
    }

    #[test]
    fn test_mixed_alpha_numeric_boundaries() {
        assert_eq!(segment_cmp("1.0a2", "1.0a1"), Ordering::Greater);
        assert_eq!(segment_cmp("2b1", "2a2"), Ordering::Greater);
        assert_eq!(segment_cmp("20220102", "20220101"), Ordering::Greater);
    }

    #[test]
    fn test_arbitrary_bytes_are_separators() {
        assert_eq!(segment_cmp("1+2", "1.2"), Ordering::Equal);
        assert_eq!(segment_cmp("1:2", "1.2"), Ordering::Equal);
    }
}
