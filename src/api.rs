use crate::engine::{self, EngineMetrics, MatchData, MetricsRecorder, Outcome, RightSpec, RuleStore};
use crate::{Result, RuleSet, TransformId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

/// Priority given to pairs added without an explicit one.
pub const DEFAULT_PRIORITY: i64 = 100;

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Priority used by [`Engine::add_template`]. Built-in rule tables carry
    /// their own priorities.
    pub default_priority: i64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { default_priority: DEFAULT_PRIORITY }
    }
}

/// Result of [`Engine::match_input`].
///
/// A call that matched nothing returns [`MatchResult::no_match`]: `matched` is
/// false, `output` is `None`, and priority/id are zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    /// Rendered right side of the winning pair.
    pub output: Option<String>,
    /// Priority of the winning pair.
    pub priority: i64,
    /// Id of the winning pair.
    pub transform_id: TransformId,
    /// Named groups of the winning left pattern. Groups that did not
    /// participate map to `""`.
    pub groups: BTreeMap<String, String>,
}

impl MatchResult {
    pub fn no_match() -> Self {
        Self::default()
    }
}

/// Read-only description of a stored pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairSummary {
    pub transform_id: TransformId,
    pub left: String,
    pub right: String,
    pub priority: i64,
    pub anchored: bool,
    pub right_is_literal: bool,
    /// Output is produced by a callable rather than the right text.
    pub callable: bool,
    pub governed: bool,
}

struct EngineState {
    store: RuleStore,
    metrics: MetricsRecorder,
}

/// Bipartite pattern engine.
///
/// All operations take `&self` and are serialized by one internal lock, so a
/// single engine can be shared between threads (for example behind an `Arc`).
/// Adds and matches never observe each other half-way.
///
/// # Example
/// ```
/// use riftmatch::Engine;
///
/// let engine = Engine::new();
/// engine.add_pair("a", "A", 5, false);
/// engine.add_pair("a", "B", 5, false);
///
/// let res = engine.match_input("a");
/// assert_eq!(res.output.as_deref(), Some("A"));
/// assert_eq!(res.transform_id, 1);
/// ```
pub struct Engine {
    options: EngineOptions,
    state: Mutex<EngineState>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("Engine")
            .field("options", &self.options)
            .field("pairs", &state.store.pairs())
            .field("metrics", &state.metrics)
            .finish()
    }
}

impl Engine {
    /// Create an empty engine with default options.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Engine { options, state: Mutex::new(EngineState { store: RuleStore::new(), metrics: MetricsRecorder::new() }) }
    }

    /// Create an engine seeded with one of the built-in rule tables.
    pub fn with_rule_set(set: RuleSet) -> Self {
        let engine = Self::new();
        engine.load_rule_set(set);
        engine
    }

    /// Add a pair; returns `true` iff it was stored.
    ///
    /// `false` means the left pattern did not compile and nothing changed. An
    /// invalid right pattern is not an error: it is stored as literal text.
    pub fn add_pair(&self, left: &str, right: &str, priority: i64, right_is_literal: bool) -> bool {
        self.try_add_pair(left, right, priority, right_is_literal).is_ok()
    }

    /// Like [`add_pair`](Self::add_pair), returning the new id or the compile
    /// error.
    pub fn try_add_pair(&self, left: &str, right: &str, priority: i64, right_is_literal: bool) -> Result<TransformId> {
        self.lock().store.add(left, RightSpec::Template { text: right, literal: right_is_literal }, priority)
    }

    /// Add a template pair at the configured default priority.
    pub fn add_template(&self, left: &str, right: &str) -> bool {
        self.add_pair(left, right, self.options.default_priority, false)
    }

    /// Add a pair whose output is computed by `transform`.
    ///
    /// `label` is stored as the pair's (literal) right text and shows up in
    /// [`pairs`](Self::pairs). The callable runs while the engine lock is held
    /// and must not call back into the same engine.
    pub fn add_transform<F>(&self, left: &str, priority: i64, label: &str, transform: F) -> Result<TransformId>
    where
        F: Fn(&MatchData<'_, '_>) -> String + Send + Sync + 'static,
    {
        let transform = crate::transform_fn(transform);
        self.lock().store.add(left, RightSpec::Callable { label, transform }, priority)
    }

    /// Add every pair of a built-in table. Returns how many were stored.
    pub fn load_rule_set(&self, set: RuleSet) -> usize {
        let mut state = self.lock();
        let mut stored = 0;
        for pair in set.pairs() {
            let right = RightSpec::Template { text: pair.right, literal: pair.right_is_literal };
            if state.store.add(pair.left, right, pair.priority).is_ok() {
                stored += 1;
            }
        }
        tracing::debug!(rule_set = %set, stored, "loaded rule set");
        stored
    }

    /// Match `input` against every pair and render the winner.
    ///
    /// Never fails: no match yields [`MatchResult::no_match`] and is counted as
    /// a failure in [`metrics`](Self::metrics).
    pub fn match_input(&self, input: &str) -> MatchResult {
        let mut state = self.lock();
        let start = Instant::now();
        let EngineState { store, metrics } = &mut *state;

        let result = match engine::find_best(store.pairs(), input) {
            Some((pair, data)) => MatchResult {
                matched: true,
                output: Some(engine::render(pair, &data)),
                priority: pair.left.priority,
                transform_id: pair.transform_id,
                groups: data.named_groups(),
            },
            None => MatchResult::no_match(),
        };

        let outcome = if result.matched { Outcome::Matched } else { Outcome::Failed };
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        metrics.record(outcome, elapsed_ms);

        tracing::trace!(
            matched = result.matched,
            transform_id = result.transform_id,
            elapsed_ms,
            "match"
        );
        result
    }

    /// Consistent snapshot of the counters and pair count.
    pub fn metrics(&self) -> EngineMetrics {
        let state = self.lock();
        state.metrics.snapshot(state.store.len())
    }

    pub fn pair_count(&self) -> usize {
        self.lock().store.len()
    }

    /// Summaries of the stored pairs in insertion order.
    pub fn pairs(&self) -> Vec<PairSummary> {
        self.lock()
            .store
            .pairs()
            .iter()
            .map(|p| PairSummary {
                transform_id: p.transform_id,
                left: p.left.text.clone(),
                right: p.right.text.clone(),
                priority: p.left.priority,
                anchored: p.left.anchored(),
                right_is_literal: p.right.is_literal(),
                callable: p.transform.is_some(),
                governed: p.governed,
            })
            .collect()
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    // Every mutation completes before the guard drops, so a poisoned lock
    // still holds consistent state.
    fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
