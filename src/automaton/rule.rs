//! Local transition rules over a (left, center, right) neighbourhood.

use std::fmt;
use std::str::FromStr;

use crate::error::AutomatonError;

/// Selects how a cell's next value is derived from its neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rule {
    /// `(left + center + right) mod 2`: three-cell parity.
    #[default]
    Rule184,
    /// `(center + right) mod 2`: the left neighbour is ignored.
    Rule2Neighbor,
}

impl Rule {
    pub const ALL: [Rule; 2] = [Rule::Rule184, Rule::Rule2Neighbor];

    /// Next value of a cell given its neighbourhood. Inputs are 0 or 1.
    #[inline]
    pub fn apply(self, left: u8, center: u8, right: u8) -> u8 {
        match self {
            Rule::Rule184 => (left + center + right) % 2,
            Rule::Rule2Neighbor => (center + right) % 2,
        }
    }

    /// Numeric selector used across the C ABI.
    pub fn code(self) -> u8 {
        match self {
            Rule::Rule184 => 0,
            Rule::Rule2Neighbor => 1,
        }
    }

    pub fn from_code(code: u8) -> Result<Self, AutomatonError> {
        match code {
            0 => Ok(Rule::Rule184),
            1 => Ok(Rule::Rule2Neighbor),
            other => Err(AutomatonError::UnknownRule(other)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::Rule184 => "rule184",
            Rule::Rule2Neighbor => "rule2neighbor",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = AutomatonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "184" | "rule184" | "parity" => Ok(Rule::Rule184),
            "2" | "rule2neighbor" | "two-neighbor" | "center-right" => Ok(Rule::Rule2Neighbor),
            _ => Err(AutomatonError::UnknownRuleName(s.to_string())),
        }
    }
}
