//! Summary fusion — fold the latest search batch into the running summary.

use crate::prompts;
use deepscout_core::error::ProviderError;
use deepscout_core::llm::LanguageModel;
use deepscout_core::source::Source;
use deepscout_core::state::ResearchState;
use tracing::debug;

/// Update the running summary with the latest search results.
///
/// An empty batch short-circuits: no model call, summary untouched, only
/// the iteration counter moves. Otherwise the prior summary and the
/// formatted batch are fused by one model call and the summary is replaced
/// wholesale with the response.
///
/// The prompt instructs the model to add only new information and leave
/// the summary unchanged when nothing relevant came in. That contract
/// lives in the prompt; the code cannot verify compliance.
pub async fn update_summary(
    llm: &dyn LanguageModel,
    state: &mut ResearchState,
) -> std::result::Result<(), ProviderError> {
    if state.latest_results.is_empty() {
        debug!(iteration = state.iteration + 1, "No new results, skipping summary fusion");
        state.iteration += 1;
        return Ok(());
    }

    let results_block = format_results(&state.latest_results);
    let prompt = prompts::render_summarize(&state.topic, &state.running_summary, &results_block);

    let response = llm.generate(&prompt).await?;
    state.running_summary = response.trim().to_string();
    state.latest_results.clear();
    state.iteration += 1;

    debug!(
        iteration = state.iteration,
        summary_chars = state.running_summary.chars().count(),
        "Fused new results into summary"
    );
    Ok(())
}

/// Format a result batch as indexed blocks for the fusion prompt.
fn format_results(results: &[Source]) -> String {
    let mut text = String::new();
    for (i, r) in results.iter().enumerate() {
        text.push_str(&format!(
            "\n[{}] {}\nURL: {}\n{}\n",
            i + 1,
            r.title,
            r.url,
            r.content
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{batch_of, PanickingModel, ScriptedModel};

    #[tokio::test]
    async fn empty_batch_skips_model_and_bumps_iteration() {
        let mut state = ResearchState::new("topic", 5);
        state.running_summary = "what we know".into();

        update_summary(&PanickingModel, &mut state).await.unwrap();

        assert_eq!(state.running_summary, "what we know");
        assert_eq!(state.iteration, 1);
    }

    #[tokio::test]
    async fn fusion_replaces_summary_and_clears_batch() {
        let llm = ScriptedModel::new(vec!["  fused summary  ".into()]);
        let mut state = ResearchState::new("topic", 5);
        state.running_summary = "old".into();
        state.record_batch(batch_of(2));

        update_summary(&llm, &mut state).await.unwrap();

        assert_eq!(state.running_summary, "fused summary");
        assert!(state.latest_results.is_empty());
        assert_eq!(state.iteration, 1);
        assert_eq!(llm.call_count(), 1);
    }

    #[tokio::test]
    async fn prompt_contains_indexed_result_blocks() {
        let llm = ScriptedModel::new(vec!["summary".into()]);
        let mut state = ResearchState::new("topic", 5);
        state.record_batch(batch_of(2));

        update_summary(&llm, &mut state).await.unwrap();

        let prompt = llm.prompts()[0].clone();
        assert!(prompt.contains("[1] Result 1\nURL: https://example.com/1"));
        assert!(prompt.contains("[2] Result 2\nURL: https://example.com/2"));
        assert!(prompt.contains("Content of result 2"));
    }

    #[test]
    fn format_results_indexes_from_one() {
        let block = format_results(&batch_of(1));
        assert!(block.starts_with("\n[1] Result 1"));
    }
}
