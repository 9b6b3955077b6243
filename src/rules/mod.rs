//! Built-in rule tables.
//!
//! Each table is plain configuration data: a list of pairs fed to the engine
//! through the same path as [`crate::Engine::add_pair`]. Nothing here affects
//! matching semantics.

use crate::Error;
use std::fmt;
use std::str::FromStr;

mod go;
mod python;

/// One entry of a built-in table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DefaultPair {
    pub left: &'static str,
    pub right: &'static str,
    pub priority: i64,
    pub right_is_literal: bool,
}

/// Built-in tables an engine can be seeded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSet {
    /// Python source rewrites (`def`, `class`, `:=`, `@quantum`).
    Python,
    /// Go source rewrites (`var`, `func`, `go`, `const`, `type`, `@quantum`).
    Go,
}

impl RuleSet {
    pub(crate) fn pairs(self) -> &'static [DefaultPair] {
        match self {
            RuleSet::Python => python::PAIRS,
            RuleSet::Go => go::PAIRS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RuleSet::Python => "python",
            RuleSet::Go => "go",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "python" | "py" => Ok(RuleSet::Python),
            "go" | "golang" => Ok(RuleSet::Go),
            _ => Err(Error::UnknownRuleSet(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests;
