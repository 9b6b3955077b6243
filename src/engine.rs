//! Matching engine internals.
//!
//! The public facade ([`crate::Engine`]) lives in `api.rs`; this module holds
//! the parts it drives while holding its lock.
//!
//! ## How the parts work together
//!
//! ```text
//! add_pair(left, right, priority)
//!     │  RuleStore::add               (store.rs)
//!     │    - compile left (reject on error)
//!     │    - compile right (fall back to literal)
//!     │    - assign transform_id, append
//!     v
//! Vec<BipartitePair>  (insertion order)
//!     │
//! input ── find_best ──────────────── (matcher.rs)
//!     │      - substring search per pair
//!     │      - smallest priority, first inserted wins ties
//!     v
//! (pair, MatchData)
//!     │  render                       (render.rs)
//!     │    - literal: text as-is
//!     │    - template: $N and {name} markers
//!     │    - callable: delegate
//!     v
//! output ── MetricsRecorder::record ─ (metrics.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `store.rs`: pattern compilation and the append-only pair list.
//! - `matcher.rs`: priority selection and the [`MatchData`] view of captures.
//! - `render.rs`: template substitution.
//! - `metrics.rs`: match/failure counters and the running mean latency.
//!
//! ## Debugging
//!
//! All modules emit `tracing` events; set `RIFTMATCH_LOG=riftmatch=trace` when
//! running the CLI to see them.

#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/render.rs"]
mod render;
#[path = "engine/store.rs"]
mod store;

pub(crate) use matcher::find_best;
pub use matcher::MatchData;
pub use metrics::EngineMetrics;
pub(crate) use metrics::{MetricsRecorder, Outcome};
pub(crate) use render::render;
pub(crate) use store::{RightSpec, RuleStore};
