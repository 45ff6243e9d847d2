//! Loose dotted version values
//!
//! A version is a dot-separated sequence of alphanumeric tokens. Tokens that
//! mix digits and letters are split into alternating runs, so `2.0b1` becomes
//! `[2, 0, "b", 1]`. Comparison is component-wise:
//! - numeric runs compare numerically, text runs lexicographically
//! - a numeric component orders before a text component
//! - the shorter sequence is padded with numeric zero (`1.0` == `1.0.0`)

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::CheckError;

/// Runs of digits or letters inside a single dot-separated token
static COMPONENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+|[A-Za-z]+").expect("component regex is valid"));

/// Run of decimal digits, stored without leading zeros
///
/// Ordered numerically for any length: a longer run is larger, runs of equal
/// length compare digit by digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits(String);

impl Digits {
    /// `run` must consist of ASCII digits only
    fn new(run: &str) -> Self {
        let significant = run.trim_start_matches('0');
        if significant.is_empty() {
            Self("0".to_string())
        } else {
            Self(significant.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Digits {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single comparable piece of a version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Component {
    Number(Digits),
    Text(String),
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Number(n) => write!(f, "{}", n),
            Component::Text(s) => f.write_str(s),
        }
    }
}

/// Parsed, comparable representation of a dotted version string
#[derive(Debug, Clone)]
pub struct VersionValue {
    raw: String,
    components: Vec<Component>,
}

impl VersionValue {
    /// Parse a version string such as `2.0.3`, `2.1.a` or `5.0rc1`.
    ///
    /// Surrounding whitespace is ignored. Numeric runs may be arbitrarily
    /// long. Fails with `InvalidVersion` on an empty string, an empty token
    /// (`1..2`) or a character that is not ASCII alphanumeric.
    pub fn parse(version: &str) -> Result<Self, CheckError> {
        let trimmed = version.trim();
        if trimmed.is_empty() {
            return Err(CheckError::invalid_version(version, "version is empty"));
        }

        let mut components = Vec::new();
        for token in trimmed.split('.') {
            if token.is_empty() {
                return Err(CheckError::invalid_version(
                    version,
                    "empty component between dots",
                ));
            }
            if let Some(bad) = token.chars().find(|c| !c.is_ascii_alphanumeric()) {
                return Err(CheckError::invalid_version(
                    version,
                    format!("unexpected character '{}'", bad),
                ));
            }

            for run in COMPONENT_RE.find_iter(token) {
                let run = run.as_str();
                let component = if run.starts_with(|c: char| c.is_ascii_digit()) {
                    Component::Number(Digits::new(run))
                } else {
                    Component::Text(run.to_string())
                };
                components.push(component);
            }
        }

        Ok(Self {
            raw: trimmed.to_string(),
            components,
        })
    }

    /// The version text as written (trimmed)
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }
}

impl Ord for VersionValue {
    fn cmp(&self, other: &Self) -> Ordering {
        let zero = Component::Number(Digits::from(0));
        let len = self.components.len().max(other.components.len());

        (0..len)
            .map(|i| {
                let a = self.components.get(i).unwrap_or(&zero);
                let b = other.components.get(i).unwrap_or(&zero);
                a.cmp(b)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for VersionValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for VersionValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionValue {}

impl fmt::Display for VersionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for VersionValue {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
