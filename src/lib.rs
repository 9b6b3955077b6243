//! Polar bipartite pattern engine.
//!
//! A rule is a *bipartite pair*: a left (input) regular expression bound to a
//! right (output) template. [`Engine::match_input`] scans every pair, picks the
//! matching pair with the smallest priority value, and renders its template with
//! the captured groups.
//!
//! ```
//! use riftmatch::Engine;
//!
//! let engine = Engine::new();
//! assert!(engine.add_pair(r"(\w+)@(\w+)", "user=$1 host=$2", 1, false));
//!
//! let res = engine.match_input("name@host");
//! assert_eq!(res.output.as_deref(), Some("user=name host=host"));
//! ```

use regex::Regex;
use std::sync::Arc;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;

pub use api::{DEFAULT_PRIORITY, Engine, EngineOptions, MatchResult, PairSummary};
pub use engine::{EngineMetrics, MatchData};
pub use error::{Error, Result};
pub use rules::RuleSet;

/// Stable identifier of a stored pair. Assigned from 1 upwards.
pub type TransformId = u64;

// --- Internal types ---------------------------------------------------------

/// Role of a pattern inside a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Polarity {
    /// Input side: matched against the caller's text.
    Left,
    /// Output side: rendered into the result.
    Right,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct PatternFlags: u8 {
        /// Text starts with `^`. Informational; the regex already encodes it.
        const ANCHORED = 1 << 0;
        /// Text is used verbatim and never compiled.
        const LITERAL  = 1 << 1;
    }
}

/// One side of a pair, with its compiled form when one exists.
#[derive(Debug, Clone)]
pub(crate) struct Pattern {
    pub text: String,
    pub polarity: Polarity,
    pub priority: i64,
    pub flags: PatternFlags,
    /// Present only for non-literal patterns that compiled.
    pub compiled: Option<Regex>,
}

impl Pattern {
    pub fn anchored(&self) -> bool {
        self.flags.contains(PatternFlags::ANCHORED)
    }

    pub fn is_literal(&self) -> bool {
        self.flags.contains(PatternFlags::LITERAL)
    }
}

/// Callable right side: receives the captures of the winning match.
pub(crate) type TransformFn = Arc<dyn Fn(&MatchData<'_, '_>) -> String + Send + Sync>;

pub(crate) fn transform_fn<F>(f: F) -> TransformFn
where
    F: Fn(&MatchData<'_, '_>) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

/// A left pattern bound to a right pattern, plus identity metadata.
///
/// Pairs are immutable once stored. When `transform` is set the right pattern
/// is a literal label and rendering is delegated to the callable.
pub(crate) struct BipartitePair {
    pub left: Pattern,
    pub right: Pattern,
    pub transform: Option<TransformFn>,
    pub governed: bool,
    pub transform_id: TransformId,
}

impl std::fmt::Debug for BipartitePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BipartitePair")
            .field("transform_id", &self.transform_id)
            .field("left", &self.left.text)
            .field("right", &self.right.text)
            .field("priority", &self.left.priority)
            .field("transform", &self.transform.as_ref().map(|_| "<function>"))
            .finish()
    }
}
