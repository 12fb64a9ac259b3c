//! Occurrence grammar: how many times a pattern is allowed to match.
//!
//! | Spec   | Parsed as        | Accepts            |
//! |--------|------------------|--------------------|
//! | `3`    | `Exact(3)`       | exactly 3          |
//! | `4-`   | `AtMost(4)`      | 0 through 4        |
//! | `2-5`  | `Range(2, 5)`    | 2 through 5        |
//! | `5-2`  | `Range(2, 5)`    | 2 through 5        |
//! | `2\|9` | `Or(2, 9)`       | 2 or 9             |
//! | `4+`   | `AtLeast(4)`     | 4 or more          |
//!
//! "Must never appear" is spelled `0` and parses to `Exact(0)`. Counts are
//! bounded by `usize::MAX`; a larger count is rejected with the integer
//! overflow as the error's source.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::MalformedRangeError;

/// Parsed form of an occurrence spec. Exactly one shape per value; all
/// bounds are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occurrences {
    Exact(usize),
    /// Inclusive bounds, always stored with `low <= high`.
    Range(usize, usize),
    /// Either operand, kept in the order written.
    Or(usize, usize),
    AtLeast(usize),
    AtMost(usize),
}

impl Occurrences {
    /// Parse an occurrence spec such as `"2-5"` or `"4+"`.
    ///
    /// A dash wins over a pipe, and a pipe over a plus: `N-` (nothing after
    /// the dash) is [`AtMost`](Occurrences::AtMost), while `N-M` is a range.
    /// Reversed ranges are normalised, never rejected.
    pub fn parse(spec: &str) -> Result<Self, MalformedRangeError> {
        let count = |digits: &str| {
            parse_count(digits).map_err(|overflow| MalformedRangeError {
                spec: spec.to_string(),
                overflow,
            })
        };

        let occurrences = match (spec.split_once('-'), spec.split_once('|'), spec.strip_suffix('+')) {
            (Some((n, "")), _, _) => Occurrences::AtMost(count(n)?),
            (Some((a, b)), _, _) => {
                let (a, b) = (count(a)?, count(b)?);
                Occurrences::Range(a.min(b), a.max(b))
            }
            (None, Some((a, b)), _) => Occurrences::Or(count(a)?, count(b)?),
            (None, None, Some(n)) => Occurrences::AtLeast(count(n)?),
            (None, None, None) => Occurrences::Exact(count(spec)?),
        };
        Ok(occurrences)
    }

    /// Whether `count` observed matches satisfy this spec.
    pub fn evaluate(&self, count: usize) -> bool {
        match *self {
            Occurrences::Exact(n) => count == n,
            Occurrences::Range(low, high) => (low..=high).contains(&count),
            Occurrences::Or(a, b) => count == a || count == b,
            Occurrences::AtLeast(n) => count >= n,
            Occurrences::AtMost(n) => count <= n,
        }
    }
}

/// Free-function form of [`Occurrences::parse`].
pub fn parse_occurrence_spec(spec: &str) -> Result<Occurrences, MalformedRangeError> {
    Occurrences::parse(spec)
}

/// Free-function form of [`Occurrences::evaluate`].
pub fn evaluate(count: usize, occurrences: &Occurrences) -> bool {
    occurrences.evaluate(count)
}

// `usize::from_str` tolerates a leading `+`, which would let `+3` through.
// The inner error is only present for an all-digit count that overflows.
fn parse_count(digits: &str) -> Result<usize, Option<ParseIntError>> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(None);
    }
    digits.parse().map_err(Some)
}

impl FromStr for Occurrences {
    type Err = MalformedRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Occurrences::parse(s)
    }
}

impl fmt::Display for Occurrences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Occurrences::Exact(n) => write!(f, "{n}"),
            Occurrences::Range(low, high) => write!(f, "{low}-{high}"),
            Occurrences::Or(a, b) => write!(f, "{a}|{b}"),
            Occurrences::AtLeast(n) => write!(f, "{n}+"),
            Occurrences::AtMost(n) => write!(f, "{n}-"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
