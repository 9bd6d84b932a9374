//! Query generation — the first step of each research round.
//!
//! Each query is informed by what the running summary already covers,
//! which is what makes the research adaptive: early rounds ask broad
//! questions, later rounds target gaps.

use crate::prompts;
use deepscout_core::error::ProviderError;
use deepscout_core::llm::LanguageModel;
use tracing::debug;

/// Generate the next search query from the topic and the running summary.
///
/// The model's output is trimmed and stripped of one layer of surrounding
/// quotes; beyond that it is accepted as-is. A failed model call
/// propagates — query generation has no fallback.
pub async fn generate_query(
    llm: &dyn LanguageModel,
    topic: &str,
    running_summary: &str,
) -> std::result::Result<String, ProviderError> {
    let prompt = prompts::render_generate_query(topic, running_summary);
    let response = llm.generate(&prompt).await?;
    let query = strip_outer_quotes(response.trim()).to_string();

    debug!(query = %query, "Generated search query");
    Ok(query)
}

/// Strip at most ONE layer of matching surrounding quotes (`"` or `'`).
///
/// Models often wrap the query in quotes despite instructions. Stripping
/// is deliberately non-recursive: `"""a"""` becomes `""a""`, not `a`.
fn strip_outer_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if s.len() >= 2 {
        let (first, last) = (bytes[0], bytes[s.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &s[1..s.len() - 1];
        }
    }
    s
}
