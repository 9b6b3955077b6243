//! Priority selection over the stored pairs.
//!
//! Pairs are visited in insertion order and each compiled left pattern is
//! searched for anywhere in the input (anchors inside the pattern still
//! apply). The winner is tracked with a strict `<` on priority, so among
//! matching pairs that share the smallest priority the earliest one wins:
//!
//! ```text
//! pairs:   #1 "a" p=5   #2 "a" p=5   #3 "a" p=1   #4 "a" p=1
//! best:    #1           #1           #3           #3
//! ```
//!
//! A pair whose priority cannot beat the current best is skipped without
//! running its regex.

use crate::BipartitePair;
use regex::{Captures, Regex};
use std::collections::BTreeMap;

/// Capture groups of a successful left-pattern match.
///
/// Indexed groups are 1-based; index 0 is the whole match. A group can exist
/// in the pattern but not participate in the match, in which case lookups
/// return `None`.
#[derive(Debug)]
pub struct MatchData<'r, 'h> {
    regex: &'r Regex,
    captures: Captures<'h>,
}

impl<'r, 'h> MatchData<'r, 'h> {
    pub(crate) fn new(regex: &'r Regex, captures: Captures<'h>) -> Self {
        MatchData { regex, captures }
    }

    /// Text of the whole match.
    pub fn as_str(&self) -> &'h str {
        self.captures.get(0).map_or("", |m| m.as_str())
    }

    /// Number of indexed groups in the pattern, not counting the whole match.
    pub fn group_count(&self) -> usize {
        self.captures.len().saturating_sub(1)
    }

    /// Text of indexed group `index`, if it participated.
    pub fn get(&self, index: usize) -> Option<&'h str> {
        self.captures.get(index).map(|m| m.as_str())
    }

    /// Text of the named group, if it participated.
    pub fn name(&self, name: &str) -> Option<&'h str> {
        self.captures.name(name).map(|m| m.as_str())
    }

    /// Whether the pattern declares a group called `name`.
    pub fn has_group(&self, name: &str) -> bool {
        self.regex.capture_names().flatten().any(|n| n == name)
    }

    /// Every named group, with non-participating groups mapped to `""`.
    pub fn named_groups(&self) -> BTreeMap<String, String> {
        self.regex
            .capture_names()
            .flatten()
            .map(|name| (name.to_string(), self.name(name).unwrap_or("").to_string()))
            .collect()
    }
}

/// Pick the winning pair for `input`, or `None` if no left pattern matches.
pub(crate) fn find_best<'p, 'h>(
    pairs: &'p [BipartitePair],
    input: &'h str,
) -> Option<(&'p BipartitePair, MatchData<'p, 'h>)> {
    let mut best: Option<(&'p BipartitePair, MatchData<'p, 'h>)> = None;

    for pair in pairs {
        let Some(regex) = pair.left.compiled.as_ref() else {
            continue;
        };
        if let Some((current, _)) = &best {
            if pair.left.priority >= current.left.priority {
                continue;
            }
        }
        let Some(captures) = regex.captures(input) else {
            continue;
        };
        tracing::trace!(transform_id = pair.transform_id, priority = pair.left.priority, "candidate");
        best = Some((pair, MatchData::new(regex, captures)));
    }

    best
}
