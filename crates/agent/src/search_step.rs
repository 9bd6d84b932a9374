//! Search execution + source-store merge — the only step that is allowed
//! to fail without aborting the run.

use deepscout_core::search::{SearchDepth, SearchProvider};
use deepscout_core::state::ResearchState;
use tracing::{debug, warn};

/// Run the current query against the search provider and merge results.
///
/// On success the new batch is merged into `state.sources` (deduplicated
/// by URL, first occurrence wins) and stored raw in `state.latest_results`
/// for the summary fuser.
///
/// On failure the error is logged and the round proceeds with an empty
/// batch — the fuser treats that as a skip signal. A broken search never
/// kills a research run.
pub async fn execute_search(
    search: &dyn SearchProvider,
    state: &mut ResearchState,
    max_results: u32,
    depth: SearchDepth,
) {
    match search
        .search(&state.current_query, max_results, depth)
        .await
    {
        Ok(batch) => {
            debug!(
                provider = search.name(),
                results = batch.len(),
                "Search returned results"
            );
            state.record_batch(batch);
        }
        Err(e) => {
            warn!(
                provider = search.name(),
                query = %state.current_query,
                error = %e,
                "Search failed, continuing with zero new results"
            );
            state.record_batch(Vec::new());
        }
    }
}
