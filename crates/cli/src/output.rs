//! Console formatting for research runs.

use deepscout_config::ResearchConfig;
use deepscout_core::ResearchState;

const RULE: &str = "============================================================";

/// The run header printed before research starts.
pub fn banner(topic: &str, config: &ResearchConfig) -> String {
    format!(
        "\n{RULE}\n\
         Research Topic: {topic}\n\
         Model: {}\n\
         Max Iterations: {}\n\
         {RULE}\n",
        config.model_name, config.max_iterations
    )
}

/// The final report, framed for the terminal. Falls back to the
/// no-report sentinel if the run never reached the report writer.
pub fn report_block(state: &ResearchState) -> String {
    format!(
        "\n{RULE}\nRESEARCH REPORT\n{RULE}\n\n{}\n\n{RULE}",
        state.report()
    )
}

/// One-line run statistics footer.
pub fn stats_line(state: &ResearchState) -> String {
    format!(
        "\nStats: {} iterations, {} sources gathered",
        state.iteration,
        state.sources.len()
    )
}
