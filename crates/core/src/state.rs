//! ResearchState — the single mutable record for one research run.
//!
//! The state is created once per topic, mutated in place by the loop in
//! `deepscout-agent`, and discarded after the report is extracted. There is
//! no persistence and exactly one writer, so no locking is needed.

use crate::source::Source;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// Sentinel returned by [`ResearchState::report`] when the loop never
/// reached the report writer.
pub const NO_REPORT: &str = "No report generated.";

/// Per-round verdict from the sufficiency evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Accumulated knowledge is not enough — run another round.
    Continue,
    /// Enough gathered — route to the report writer.
    Stop,
}

impl Decision {
    /// Classify a raw reflection response from the language model.
    ///
    /// Deliberately permissive: a case-insensitive substring match for
    /// `SUFFICIENT` means stop; *anything* else — including malformed or
    /// off-script output — means continue. A model that fails to follow
    /// instructions therefore biases toward more research rather than a
    /// premature report.
    pub fn from_reflection(response: &str) -> Self {
        if response.to_uppercase().contains("SUFFICIENT") {
            Decision::Stop
        } else {
            Decision::Continue
        }
    }
}

/// The full state of one research run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchState {
    /// The research topic. Set once at initialization, immutable after.
    pub topic: String,

    /// Running summary, replaced wholesale after each round with new
    /// findings fused in. Starts empty.
    pub running_summary: String,

    /// All sources gathered so far, in first-seen order, deduplicated by
    /// URL. Append-only; never shrinks.
    pub sources: Vec<Source>,

    /// The query used by the most recent round.
    pub current_query: String,

    /// The raw result batch from the most recent search, unfiltered.
    /// Consumed and cleared by the summary fuser each round.
    pub latest_results: Vec<Source>,

    /// Completed rounds so far.
    pub iteration: u32,

    /// Hard cap on rounds. Fixed at configuration time.
    pub max_iterations: u32,

    /// The final report. `None` until the report writer runs.
    pub report: Option<String>,
}

impl ResearchState {
    /// Create the initial state for a topic.
    pub fn new(topic: impl Into<String>, max_iterations: u32) -> Self {
        Self {
            topic: topic.into(),
            running_summary: String::new(),
            sources: Vec::new(),
            current_query: String::new(),
            latest_results: Vec::new(),
            iteration: 0,
            max_iterations,
            report: None,
        }
    }

    /// Merge a batch of search results into the source store.
    ///
    /// Items are walked in provider order; an item is appended only if its
    /// URL has not been seen — across previous batches *or* earlier in this
    /// batch. First occurrence wins; later duplicates are dropped silently.
    ///
    /// The raw, unfiltered batch is kept in `latest_results` for the
    /// summary fuser, which must see exactly what the search returned.
    pub fn record_batch(&mut self, batch: Vec<Source>) {
        let mut seen: HashSet<String> = self.sources.iter().map(|s| s.url.clone()).collect();

        let before = self.sources.len();
        for source in &batch {
            if seen.insert(source.url.clone()) {
                self.sources.push(source.clone());
            }
        }

        trace!(
            batch = batch.len(),
            appended = self.sources.len() - before,
            total = self.sources.len(),
            "Merged search batch into source store"
        );
        self.latest_results = batch;
        debug_assert!(self.sources_unique(), "duplicate URL in source store");
    }

    /// Whether the dedup invariant holds on the source store.
    fn sources_unique(&self) -> bool {
        let mut urls = HashSet::new();
        self.sources.iter().all(|s| urls.insert(&s.url))
    }

    /// Extract the report text, or the no-report sentinel if the loop
    /// never reached the report writer.
    pub fn report(&self) -> &str {
        self.report.as_deref().unwrap_or(NO_REPORT)
    }
}
