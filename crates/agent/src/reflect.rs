//! Sufficiency evaluation — the continue-or-stop decision after each round.

use crate::prompts;
use deepscout_core::error::ProviderError;
use deepscout_core::llm::LanguageModel;
use deepscout_core::state::{Decision, ResearchState};
use tracing::{debug, info};

/// Minimum summary length (in characters) before the model is asked to
/// judge sufficiency. Below this, more research is obviously needed and a
/// model call would be wasted.
const MIN_SUMMARY_CHARS: usize = 200;

/// Decide whether to run another round or write the report.
///
/// Evaluated in strict short-circuit order:
/// 1. iteration cap reached → [`Decision::Stop`]. The only hard liveness
///    guarantee in the system — it holds regardless of model behavior.
/// 2. summary shorter than [`MIN_SUMMARY_CHARS`] → [`Decision::Continue`],
///    no model call.
/// 3. otherwise one reflection call, classified permissively by
///    [`Decision::from_reflection`].
pub async fn assess(
    llm: &dyn LanguageModel,
    state: &ResearchState,
) -> std::result::Result<Decision, ProviderError> {
    if state.iteration >= state.max_iterations {
        info!(
            iteration = state.iteration,
            max_iterations = state.max_iterations,
            "Iteration cap reached, stopping"
        );
        return Ok(Decision::Stop);
    }

    let summary_chars = state.running_summary.chars().count();
    if summary_chars < MIN_SUMMARY_CHARS {
        debug!(summary_chars, "Summary too thin to judge, continuing");
        return Ok(Decision::Continue);
    }

    let prompt = prompts::render_reflect(
        &state.topic,
        &state.running_summary,
        state.iteration,
        state.max_iterations,
    );
    let response = llm.generate(&prompt).await?;
    let decision = Decision::from_reflection(&response);

    debug!(?decision, response = %response.trim(), "Reflection verdict");
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{long_summary, PanickingModel, ScriptedModel};

    #[tokio::test]
    async fn iteration_cap_stops_without_model_call() {
        let mut state = ResearchState::new("topic", 3);
        state.iteration = 3;
        state.running_summary = long_summary();

        let decision = assess(&PanickingModel, &state).await.unwrap();
        assert_eq!(decision, Decision::Stop);
    }

    #[tokio::test]
    async fn cap_applies_even_with_empty_summary() {
        let mut state = ResearchState::new("topic", 2);
        state.iteration = 2;

        let decision = assess(&PanickingModel, &state).await.unwrap();
        assert_eq!(decision, Decision::Stop);
    }

    #[tokio::test]
    async fn short_summary_forces_continue_without_model_call() {
        let mut state = ResearchState::new("topic", 5);
        state.iteration = 1;
        state.running_summary = "only a little so far".into();

        let decision = assess(&PanickingModel, &state).await.unwrap();
        assert_eq!(decision, Decision::Continue);
    }

    #[tokio::test]
    async fn threshold_counts_characters_not_bytes() {
        let mut state = ResearchState::new("topic", 5);
        state.iteration = 1;
        // 199 chars of multibyte text is still below the threshold.
        state.running_summary = "é".repeat(199);

        let decision = assess(&PanickingModel, &state).await.unwrap();
        assert_eq!(decision, Decision::Continue);
    }

    #[tokio::test]
    async fn sufficient_response_stops() {
        let llm = ScriptedModel::new(vec!["SUFFICIENT".into()]);
        let mut state = ResearchState::new("topic", 5);
        state.iteration = 1;
        state.running_summary = long_summary();

        let decision = assess(&llm, &state).await.unwrap();
        assert_eq!(decision, Decision::Stop);
    }

    #[tokio::test]
    async fn off_script_response_continues() {
        let llm = ScriptedModel::new(vec!["I think we might need more data?".into()]);
        let mut state = ResearchState::new("topic", 5);
        state.iteration = 1;
        state.running_summary = long_summary();

        let decision = assess(&llm, &state).await.unwrap();
        assert_eq!(decision, Decision::Continue);
    }

    #[tokio::test]
    async fn model_judgment_can_stop_after_round_one() {
        let llm = ScriptedModel::new(vec!["sufficient".into()]);
        let mut state = ResearchState::new("topic", 5);
        state.iteration = 1;
        state.running_summary = long_summary();

        let decision = assess(&llm, &state).await.unwrap();
        assert_eq!(decision, Decision::Stop);
    }
}
