//! Pattern builder: turns a match string and its option flags into a regex.
//!
//! The match string is a regular expression as written; nothing is escaped.
//! Whitespace tolerance is applied to the pattern source before compilation,
//! then case folding is selected as a compile mode.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::error::{Error, Result};

/// Pattern fragment substituted for literal whitespace under `w`.
const WHITESPACE_FRAGMENT: &str = r"\s*";

/// Option flags from the first field of a test record: `i` ignores case,
/// `w` ignores whitespace. The empty string means neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    pub ignore_case: bool,
    pub ignore_whitespace: bool,
}

impl MatchOptions {
    pub fn parse(flags: &str) -> Result<Self> {
        flags.chars().try_fold(MatchOptions::default(), |mut opts, flag| {
            match flag {
                'i' => opts.ignore_case = true,
                'w' => opts.ignore_whitespace = true,
                other => return Err(Error::UnknownOption(other)),
            }
            Ok(opts)
        })
    }
}

impl FromStr for MatchOptions {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MatchOptions::parse(s)
    }
}

impl fmt::Display for MatchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ignore_case {
            f.write_str("i")?;
        }
        if self.ignore_whitespace {
            f.write_str("w")?;
        }
        Ok(())
    }
}

/// A match string compiled with its options baked in.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Number of non-overlapping matches in `haystack`.
    pub fn count(&self, haystack: &str) -> usize {
        self.regex.find_iter(haystack).count()
    }

    /// The pattern source after whitespace substitution.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Build a [`CompiledPattern`] from a raw match string.
///
/// Fails with [`Error::PatternCompilation`] when the (substituted) source is
/// not a valid regex.
pub fn build_pattern(options: &MatchOptions, match_string: &str) -> Result<CompiledPattern> {
    let source = if options.ignore_whitespace {
        relax_whitespace(match_string)
    } else {
        match_string.to_string()
    };

    let regex = RegexBuilder::new(&source)
        .case_insensitive(options.ignore_case)
        .build()
        .map_err(|source| Error::PatternCompilation {
            pattern: match_string.to_string(),
            source,
        })?;

    tracing::debug!(pattern = %regex.as_str(), options = %options, "pattern compiled");
    Ok(CompiledPattern { regex })
}

/// Replace each run of spaces, tabs, `\n` and `\r\n` with a single
/// "zero or more whitespace" fragment. A `\r` not followed by `\n` is kept.
fn relax_whitespace(match_string: &str) -> String {
    let mut out = String::with_capacity(match_string.len() + 8);
    let mut chars = match_string.chars().peekable();
    let mut in_run = false;

    while let Some(c) = chars.next() {
        let is_space = match c {
            ' ' | '\t' | '\n' => true,
            '\r' => chars.peek() == Some(&'\n'),
            _ => false,
        };
        if is_space {
            if c == '\r' {
                chars.next();
            }
            if !in_run {
                out.push_str(WHITESPACE_FRAGMENT);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
