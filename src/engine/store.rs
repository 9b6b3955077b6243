//! Rule storage and pattern compilation.
//!
//! The store owns the ordered list of [`BipartitePair`]s. Insertion order is
//! significant: the matcher walks pairs front to back and keeps the first pair
//! among those sharing the best priority.
//!
//! ## Compilation rules
//!
//! - The left pattern must compile. If it does not, nothing is stored and the
//!   caller gets [`Error::InvalidLeftPattern`].
//! - A non-literal right pattern is compiled as well, but only to classify it.
//!   Substitution markers are blanked out and stray braces escaped first
//!   (`{name}` and `{}` are not valid regex syntax on their own). If
//!   compilation still fails the right side silently becomes literal text.
//!
//! ## Invariants
//!
//! - `transform_id` of the n-th stored pair is `n` (1-based). Rejected adds
//!   leave no trace, so ids are never skipped or reused.
//! - Pairs are never removed or mutated after being pushed.

use crate::{BipartitePair, Error, Pattern, PatternFlags, Polarity, Result, TransformFn, TransformId};
use super::render::neutralize_markers;
use regex::Regex;

/// Right-hand side requested by a caller.
pub(crate) enum RightSpec<'a> {
    /// Template (or literal, when `literal` is set) output text.
    Template { text: &'a str, literal: bool },
    /// Output produced by a callable; `label` is kept as the literal text.
    Callable { label: &'a str, transform: TransformFn },
}

/// Append-only list of pairs in insertion order.
#[derive(Debug, Default)]
pub(crate) struct RuleStore {
    pairs: Vec<BipartitePair>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and append a pair, returning its id.
    pub fn add(&mut self, left: &str, right: RightSpec<'_>, priority: i64) -> Result<TransformId> {
        let left = compile_left(left, priority)?;

        let (right, transform) = match right {
            RightSpec::Template { text, literal } => (compile_right(text, priority, literal), None),
            RightSpec::Callable { label, transform } => {
                (literal_pattern(label, Polarity::Right, priority), Some(transform))
            }
        };

        let transform_id = self.pairs.len() as TransformId + 1;
        tracing::debug!(
            transform_id,
            priority,
            left = %left.text,
            right = %right.text,
            right_literal = right.is_literal(),
            "stored pair"
        );

        self.pairs.push(BipartitePair { left, right, transform, governed: false, transform_id });
        Ok(transform_id)
    }

    /// Pairs in insertion order.
    pub fn pairs(&self) -> &[BipartitePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

fn compile_left(text: &str, priority: i64) -> Result<Pattern> {
    let compiled = Regex::new(text).map_err(|source| {
        tracing::warn!(pattern = %text, error = %source, "rejected left pattern");
        Error::InvalidLeftPattern { pattern: text.to_string(), source }
    })?;

    let mut flags = PatternFlags::empty();
    if text.starts_with('^') {
        flags |= PatternFlags::ANCHORED;
    }

    Ok(Pattern { text: text.to_string(), polarity: Polarity::Left, priority, flags, compiled: Some(compiled) })
}

fn compile_right(text: &str, priority: i64, literal: bool) -> Pattern {
    if literal {
        return literal_pattern(text, Polarity::Right, priority);
    }

    match Regex::new(&neutralize_markers(text)) {
        Ok(compiled) => Pattern {
            text: text.to_string(),
            polarity: Polarity::Right,
            priority,
            flags: PatternFlags::empty(),
            compiled: Some(compiled),
        },
        Err(err) => {
            let pattern = literal_pattern(text, Polarity::Right, priority);
            tracing::debug!(
                pattern = %text,
                polarity = ?pattern.polarity,
                error = %err,
                "right pattern does not compile, using it as literal text"
            );
            pattern
        }
    }
}

fn literal_pattern(text: &str, polarity: Polarity, priority: i64) -> Pattern {
    Pattern { text: text.to_string(), polarity, priority, flags: PatternFlags::LITERAL, compiled: None }
}
