//! Generation parameters and their validation.

use std::fmt;

use super::charset::{CharacterClass, ClassSet};
use crate::error::{Error, Result};

/// Exclusive lower bound on password length.
pub const MIN_LENGTH: i64 = 4;
/// Exclusive upper bound on password length.
pub const MAX_LENGTH: i64 = 128;
/// Ceiling enforced under every policy; nothing longer is ever allocated.
pub const HARD_MAX_LENGTH: i64 = 4096;

/// What to do with a length outside `(MIN_LENGTH, MAX_LENGTH)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    #[default]
    Reject,
    /// Report the violation and generate anyway.
    Warn,
}

impl LengthPolicy {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "reject" | "strict" => Some(LengthPolicy::Reject),
            "warn" | "lenient" => Some(LengthPolicy::Warn),
            _ => None,
        }
    }
}

impl fmt::Display for LengthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthPolicy::Reject => write!(f, "reject"),
            LengthPolicy::Warn => write!(f, "warn"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationConfig {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }
}

/// Out-of-range length let through by `LengthPolicy::Warn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeWarning {
    pub length: i64,
}

/// Length that passed `check_length`, ready for generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckedLength {
    pub length: usize,
    pub warning: Option<RangeWarning>,
}

pub fn validate_length(n: i64) -> bool {
    n > MIN_LENGTH && n < MAX_LENGTH
}

/// Parse a decimal length as typed by the user. Negative numbers parse;
/// they are range violations, not parse failures.
pub fn parse_length(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| Error::Parse(trimmed.to_string()))
}

/// Apply `policy` to `length`.
///
/// Under `Warn` an out-of-range length comes back with a warning for the
/// caller to print; negative lengths generate nothing. Lengths above
/// `HARD_MAX_LENGTH` are refused under both policies.
pub fn check_length(length: i64, policy: LengthPolicy) -> Result<CheckedLength> {
    if validate_length(length) {
        return Ok(CheckedLength {
            length: length as usize,
            warning: None,
        });
    }
    if policy == LengthPolicy::Reject || length > HARD_MAX_LENGTH {
        return Err(Error::Range { length });
    }
    log::debug!("length {length} out of range, continuing under {policy} policy");
    Ok(CheckedLength {
        length: length.max(0) as usize,
        warning: Some(RangeWarning { length }),
    })
}

/// Keep the classes whose answer is yes.
pub fn collect_enabled_classes<I>(selections: I) -> ClassSet
where
    I: IntoIterator<Item = (CharacterClass, bool)>,
{
    selections
        .into_iter()
        .filter_map(|(class, enabled)| enabled.then_some(class))
        .collect()
}
