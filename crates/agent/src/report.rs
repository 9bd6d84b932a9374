//! Report writing — the terminal step of a research run.

use crate::prompts;
use deepscout_core::error::ProviderError;
use deepscout_core::llm::LanguageModel;
use deepscout_core::source::Source;
use deepscout_core::state::ResearchState;
use tracing::info;

/// At most this many sources are cited in the report prompt.
const MAX_CITED_SOURCES: usize = 15;

/// Write the final report from the summary and gathered sources.
///
/// One model call, not retried; failure propagates. The response becomes
/// `state.report`. Works fine with an empty summary and zero sources —
/// a run whose every search failed still produces a report.
pub async fn write_report(
    llm: &dyn LanguageModel,
    state: &mut ResearchState,
) -> std::result::Result<(), ProviderError> {
    let sources_block = format_source_list(&state.sources);
    let prompt = prompts::render_write_report(&state.topic, &state.running_summary, &sources_block);

    let response = llm.generate(&prompt).await?;
    state.report = Some(response.trim().to_string());

    info!(
        sources = state.sources.len(),
        iterations = state.iteration,
        "Report written"
    );
    Ok(())
}

/// Format the citation list: order-preserving unique URLs, capped at
/// [`MAX_CITED_SOURCES`], each resolved to the title of the first source
/// in the full list carrying that URL.
fn format_source_list(sources: &[Source]) -> String {
    let mut unique_urls: Vec<&str> = Vec::new();
    for s in sources {
        if !unique_urls.contains(&s.url.as_str()) {
            unique_urls.push(&s.url);
        }
    }

    let mut text = String::new();
    for (i, url) in unique_urls.iter().take(MAX_CITED_SOURCES).enumerate() {
        let title = sources
            .iter()
            .find(|s| s.url == *url)
            .map(|s| s.title.as_str())
            .unwrap_or("Source");
        text.push_str(&format!("[{}] {}: {}\n", i + 1, title, url));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{batch_of, ScriptedModel};

    #[tokio::test]
    async fn report_is_set_once_from_trimmed_response() {
        let llm = ScriptedModel::new(vec!["\n\nThe report body.\n".into()]);
        let mut state = ResearchState::new("topic", 5);
        state.running_summary = "findings".into();
        state.record_batch(batch_of(2));

        write_report(&llm, &mut state).await.unwrap();

        assert_eq!(state.report.as_deref(), Some("The report body."));
        assert_eq!(state.report(), "The report body.");
    }

    #[tokio::test]
    async fn empty_state_still_produces_a_report() {
        let llm = ScriptedModel::new(vec!["Nothing was found.".into()]);
        let mut state = ResearchState::new("topic", 5);

        write_report(&llm, &mut state).await.unwrap();

        assert_eq!(state.report.as_deref(), Some("Nothing was found."));
        let prompt = llm.prompts()[0].clone();
        assert!(prompt.contains("SOURCES USED:\n\n"));
    }

    #[test]
    fn source_list_is_indexed_and_ordered() {
        let block = format_source_list(&batch_of(3));
        assert_eq!(
            block,
            "[1] Result 1: https://example.com/1\n\
             [2] Result 2: https://example.com/2\n\
             [3] Result 3: https://example.com/3\n"
        );
    }

    #[test]
    fn source_list_caps_at_fifteen() {
        let block = format_source_list(&batch_of(20));
        assert!(block.contains("[15] Result 15"));
        assert!(!block.contains("[16]"));
        assert!(!block.contains("https://example.com/16"));
    }

    #[test]
    fn source_list_empty_for_no_sources() {
        assert_eq!(format_source_list(&[]), "");
    }
}
