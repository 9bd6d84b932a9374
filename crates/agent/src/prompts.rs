//! Prompt templates for the four language-model calls in the loop.
//!
//! All templates live here so the wording can be reviewed in one place.
//! Each render function substitutes its named placeholders and nothing
//! else — no truncation, no escaping.

/// Placeholder used wherever an empty running summary would otherwise
/// leave a blank hole in a prompt.
pub const NO_RESEARCH_YET: &str = "No research yet.";

const GENERATE_QUERY_PROMPT: &str = "\
You are a research assistant helping to gather information on a topic.

TOPIC: {topic}

CURRENT SUMMARY OF RESEARCH:
{running_summary}

Based on the topic and what has been researched so far, generate the next search query to find NEW, RELEVANT information that we don't already have.

If the current summary is empty, generate a broad initial query about the topic.
If we already have some information, identify GAPS or MISSING ASPECTS and search for those.

Requirements:
- Keep the query concise (3-7 words work best)
- Focus on finding NEW information not already in the summary
- Be specific enough to get relevant results

Return ONLY the search query, nothing else.";

const SUMMARIZE_PROMPT: &str = "\
You are a research assistant. Your job is to update a running summary with new information.

TOPIC: {topic}

CURRENT SUMMARY:
{running_summary}

NEW SEARCH RESULTS:
{search_results}

Instructions:
1. Read the new search results carefully
2. Extract information that is RELEVANT to the topic
3. Add NEW information to the summary (don't repeat what's already there)
4. Keep the summary well-organized and coherent
5. Note the source URLs for important facts

If the new results don't contain useful new information, return the current summary unchanged.

Return the updated summary:";

const REFLECT_PROMPT: &str = "\
You are evaluating whether we have enough research to write a comprehensive report.

TOPIC: {topic}

CURRENT RESEARCH SUMMARY:
{running_summary}

ITERATIONS COMPLETED: {iteration} / {max_iterations}

Evaluate the research so far:
1. Do we have enough information to thoroughly address the topic?
2. Are there critical gaps or missing perspectives?
3. Would more searching likely yield valuable new information?

If we have sufficient information OR we've reached max iterations, respond with: SUFFICIENT
If we need more research and have iterations remaining, respond with: CONTINUE

Respond with ONLY one word: either SUFFICIENT or CONTINUE";

const WRITE_REPORT_PROMPT: &str = "\
You are an expert research report writer. Write a comprehensive report based on the research gathered.

TOPIC: {topic}

RESEARCH SUMMARY:
{running_summary}

SOURCES USED:
{sources}

Write a well-structured report that:
1. Has a clear introduction stating what the report covers
2. Is organized into logical sections with headers
3. Presents information clearly and objectively
4. Cites sources using [Source: URL] format where appropriate
5. Ends with a brief conclusion summarizing key findings

Write the report in a professional, informative tone.

REPORT:";

/// Substitute an empty summary with the no-research sentinel.
fn summary_or_sentinel(running_summary: &str) -> &str {
    if running_summary.is_empty() {
        NO_RESEARCH_YET
    } else {
        running_summary
    }
}

pub fn render_generate_query(topic: &str, running_summary: &str) -> String {
    GENERATE_QUERY_PROMPT
        .replace("{topic}", topic)
        .replace("{running_summary}", summary_or_sentinel(running_summary))
}

pub fn render_summarize(topic: &str, running_summary: &str, search_results: &str) -> String {
    SUMMARIZE_PROMPT
        .replace("{topic}", topic)
        .replace("{running_summary}", summary_or_sentinel(running_summary))
        .replace("{search_results}", search_results)
}

pub fn render_reflect(
    topic: &str,
    running_summary: &str,
    iteration: u32,
    max_iterations: u32,
) -> String {
    REFLECT_PROMPT
        .replace("{topic}", topic)
        .replace("{running_summary}", running_summary)
        .replace("{iteration}", &iteration.to_string())
        .replace("{max_iterations}", &max_iterations.to_string())
}

pub fn render_write_report(topic: &str, running_summary: &str, sources: &str) -> String {
    WRITE_REPORT_PROMPT
        .replace("{topic}", topic)
        .replace("{running_summary}", running_summary)
        .replace("{sources}", sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_renders_as_sentinel() {
        let prompt = render_generate_query("benefits of meditation", "");
        assert!(prompt.contains("TOPIC: benefits of meditation"));
        assert!(prompt.contains(NO_RESEARCH_YET));
    }

    #[test]
    fn non_empty_summary_is_passed_through() {
        let prompt = render_generate_query("topic", "Meditation lowers stress.");
        assert!(prompt.contains("Meditation lowers stress."));
        assert!(!prompt.contains(NO_RESEARCH_YET));
    }

    #[test]
    fn reflect_prompt_shows_iteration_progress() {
        let prompt = render_reflect("topic", "summary", 2, 5);
        assert!(prompt.contains("ITERATIONS COMPLETED: 2 / 5"));
    }

    #[test]
    fn report_prompt_embeds_source_block() {
        let prompt = render_write_report("topic", "summary", "[1] Title: https://a.com\n");
        assert!(prompt.contains("[1] Title: https://a.com"));
    }
}
