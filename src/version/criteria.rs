//! Version criteria expressions
//!
//! Supported forms:
//! - `<2.0`, `<=2.0`, `=2.0`, `==2.0`, `!=2.0`, `>2.0`, `>=2.0` - single bound
//! - `2.0.5<>4.0.3` - inclusive range between two versions
//!
//! Whitespace around operands is ignored (`!= 5.0`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::version::error::CheckError;
use crate::version::value::VersionValue;

/// Token separating the two bounds of a range criteria
pub const BETWEEN_TOKEN: &str = "<>";

/// Single-bound comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparator {
    Lt,
    Le,
    Eq,
    Ne,
    Gt,
    Ge,
}

impl Comparator {
    /// Returns the canonical token for the comparator
    pub fn as_str(&self) -> &'static str {
        match self {
            Comparator::Lt => "<",
            Comparator::Le => "<=",
            Comparator::Eq => "==",
            Comparator::Ne => "!=",
            Comparator::Gt => ">",
            Comparator::Ge => ">=",
        }
    }

    fn apply(&self, version: &VersionValue, sentry: &VersionValue) -> bool {
        match self {
            Comparator::Lt => version < sentry,
            Comparator::Le => version <= sentry,
            Comparator::Eq => version == sentry,
            Comparator::Ne => version != sentry,
            Comparator::Gt => version > sentry,
            Comparator::Ge => version >= sentry,
        }
    }
}

/// Recognized tokens, longest first so `<=` is never read as `<`.
/// `None` marks the range form.
const TOKENS: [(&str, Option<Comparator>); 8] = [
    (BETWEEN_TOKEN, None),
    ("<=", Some(Comparator::Le)),
    (">=", Some(Comparator::Ge)),
    ("==", Some(Comparator::Eq)),
    ("!=", Some(Comparator::Ne)),
    ("<", Some(Comparator::Lt)),
    (">", Some(Comparator::Gt)),
    ("=", Some(Comparator::Eq)),
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Bound {
    Compare(Comparator, VersionValue),
    /// Invariant: `low <= high`
    Between {
        low: VersionValue,
        high: VersionValue,
    },
}

/// Parsed version criteria
///
/// Only built through [`Criteria::parse`], [`Criteria::compare`] or
/// [`Criteria::between`], so a range is never inverted and every value
/// renders to a string that parses back to itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Criteria {
    bound: Bound,
}

impl Criteria {
    /// Parse a criteria string.
    ///
    /// Fails with `InvalidCriteria` if no comparator token is present, the
    /// operand count does not fit the comparator, an operand is not a valid
    /// version, or a range is inverted.
    pub fn parse(criteria: &str) -> Result<Self, CheckError> {
        let Some((token, comparator)) = TOKENS.iter().find(|(token, _)| criteria.contains(token))
        else {
            return Err(CheckError::invalid_criteria(
                criteria,
                "no supported comparator (<, <=, =, ==, !=, >, >=, <>)",
            ));
        };

        let fields: Vec<&str> = criteria.split(token).map(str::trim).collect();
        let operand = |text: &str| {
            VersionValue::parse(text)
                .map_err(|e| CheckError::invalid_criteria(criteria, e.to_string()))
        };

        match (comparator, fields.as_slice()) {
            (None, [low, high]) if !low.is_empty() && !high.is_empty() => {
                Self::between(operand(*low)?, operand(*high)?).map_err(|_| {
                    CheckError::invalid_criteria(criteria, "lower bound is greater than upper bound")
                })
            }
            (None, _) => Err(CheckError::invalid_criteria(
                criteria,
                "range criteria needs exactly two versions: <low><><high>",
            )),
            (Some(comparator), ["", version]) if !version.is_empty() => {
                Ok(Self::compare(*comparator, operand(*version)?))
            }
            (Some(comparator), _) => Err(CheckError::invalid_criteria(
                criteria,
                format!(
                    "'{}' needs exactly one version after the comparator",
                    comparator.as_str()
                ),
            )),
        }
    }

    /// Build a single-bound criteria such as `>=2.0`
    pub fn compare(comparator: Comparator, version: VersionValue) -> Self {
        Self {
            bound: Bound::Compare(comparator, version),
        }
    }

    /// Build an inclusive range, rejecting `low > high`
    pub fn between(low: VersionValue, high: VersionValue) -> Result<Self, CheckError> {
        if low > high {
            return Err(CheckError::invalid_criteria(
                &format!("{}{}{}", low, BETWEEN_TOKEN, high),
                "lower bound is greater than upper bound",
            ));
        }
        Ok(Self {
            bound: Bound::Between { low, high },
        })
    }

    /// Single-bound comparator, or `None` for a range
    pub fn comparator(&self) -> Option<Comparator> {
        match &self.bound {
            Bound::Compare(comparator, _) => Some(*comparator),
            Bound::Between { .. } => None,
        }
    }

    /// Operands in written order: the single bound, or `(low, Some(high))`
    pub fn operands(&self) -> (&VersionValue, Option<&VersionValue>) {
        match &self.bound {
            Bound::Compare(_, version) => (version, None),
            Bound::Between { low, high } => (low, Some(high)),
        }
    }

    pub fn is_range(&self) -> bool {
        matches!(self.bound, Bound::Between { .. })
    }

    /// Returns the token this criteria compares with
    pub fn token(&self) -> &'static str {
        match &self.bound {
            Bound::Compare(comparator, _) => comparator.as_str(),
            Bound::Between { .. } => BETWEEN_TOKEN,
        }
    }

    /// Check an already parsed version
    pub fn matches(&self, version: &VersionValue) -> bool {
        match &self.bound {
            Bound::Compare(comparator, sentry) => comparator.apply(version, sentry),
            Bound::Between { low, high } => low <= version && version <= high,
        }
    }

    /// Parse `version` and check it against this criteria
    pub fn evaluate(&self, version: &str) -> Result<bool, CheckError> {
        let version = VersionValue::parse(version)?;
        Ok(self.matches(&version))
    }

    /// Like [`Criteria::evaluate`], but a missing version satisfies any criteria
    pub fn test(&self, version: Option<&str>) -> Result<bool, CheckError> {
        match version {
            None => Ok(true),
            Some(version) => self.evaluate(version),
        }
    }
}

/// Evaluate `version` against `criteria`
pub fn evaluate(criteria: &Criteria, version: &str) -> Result<bool, CheckError> {
    criteria.evaluate(version)
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.bound {
            Bound::Compare(comparator, version) => {
                write!(f, "{}{}", comparator.as_str(), version)
            }
            Bound::Between { low, high } => write!(f, "{}{}{}", low, BETWEEN_TOKEN, high),
        }
    }
}

impl FromStr for Criteria {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Criteria {
    type Error = CheckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Criteria> for String {
    fn from(value: Criteria) -> Self {
        value.to_string()
    }
}
