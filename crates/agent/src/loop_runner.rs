//! The research loop runner — sequences the five components through the
//! iterate-or-finish cycle.

use crate::reflect::assess;
use crate::{execute_search, generate_query, update_summary, write_report};
use deepscout_config::ResearchConfig;
use deepscout_core::llm::LanguageModel;
use deepscout_core::search::{SearchDepth, SearchProvider};
use deepscout_core::state::{Decision, ResearchState};
use std::sync::Arc;
use tracing::{debug, info};

/// The research loop controller.
///
/// Owns the two injected collaborators and the run knobs. One instance can
/// drive any number of sequential runs; each `run()` call gets a fresh
/// [`ResearchState`]. There are no ambient globals — everything the loop
/// touches comes in through the constructor.
pub struct ResearchLoop {
    /// The language model used for all four generation steps.
    llm: Arc<dyn LanguageModel>,

    /// The web-search backend.
    search: Arc<dyn SearchProvider>,

    /// Hard cap on research rounds.
    max_iterations: u32,

    /// Result-count cap per search call.
    max_search_results: u32,

    /// Search thoroughness.
    search_depth: SearchDepth,
}

impl ResearchLoop {
    /// Create a loop with default knobs (5 rounds, 5 results, advanced).
    pub fn new(llm: Arc<dyn LanguageModel>, search: Arc<dyn SearchProvider>) -> Self {
        Self {
            llm,
            search,
            max_iterations: 5,
            max_search_results: 5,
            search_depth: SearchDepth::Advanced,
        }
    }

    /// Create a loop with knobs taken from configuration.
    pub fn from_config(
        llm: Arc<dyn LanguageModel>,
        search: Arc<dyn SearchProvider>,
        config: &ResearchConfig,
    ) -> Self {
        Self::new(llm, search)
            .with_max_iterations(config.max_iterations)
            .with_max_search_results(config.max_search_results)
            .with_search_depth(config.search_depth)
    }

    /// Set the hard cap on research rounds.
    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = max;
        self
    }

    /// Set the per-round result-count cap.
    pub fn with_max_search_results(mut self, max: u32) -> Self {
        self.max_search_results = max;
        self
    }

    /// Set the search depth.
    pub fn with_search_depth(mut self, depth: SearchDepth) -> Self {
        self.search_depth = depth;
        self
    }

    /// Run research on a topic to completion and return the final state.
    ///
    /// One blocking call from the caller's perspective. Each round runs
    /// strictly in sequence: query → search/merge → fuse → reflect. A
    /// failed search degrades to an empty round; a failed model call
    /// aborts the run and the error surfaces here.
    pub async fn run(&self, topic: impl Into<String>) -> deepscout_core::Result<ResearchState> {
        let mut state = ResearchState::new(topic, self.max_iterations);

        info!(
            topic = %state.topic,
            max_iterations = self.max_iterations,
            llm = self.llm.name(),
            search = self.search.name(),
            "Starting research run"
        );

        loop {
            debug!(round = state.iteration + 1, "Research round starting");

            state.current_query =
                generate_query(self.llm.as_ref(), &state.topic, &state.running_summary).await?;
            info!(round = state.iteration + 1, query = %state.current_query, "Searching");

            execute_search(
                self.search.as_ref(),
                &mut state,
                self.max_search_results,
                self.search_depth,
            )
            .await;

            update_summary(self.llm.as_ref(), &mut state).await?;

            match assess(self.llm.as_ref(), &state).await? {
                Decision::Continue => continue,
                Decision::Stop => break,
            }
        }

        write_report(self.llm.as_ref(), &mut state).await?;

        info!(
            iterations = state.iteration,
            sources = state.sources.len(),
            "Research run complete"
        );
        Ok(state)
    }
}
