//! The core research loop — the heart of DeepScout.
//!
//! One research run follows an **iterate-or-finish** cycle:
//!
//! 1. **Generate** the next search query from the topic and what we know
//! 2. **Search** the web (a failed search degrades to zero new results)
//! 3. **Merge** new sources into the store, deduplicated by URL
//! 4. **Fuse** the new findings into the running summary
//! 5. **Reflect**: continue researching, or stop?
//! 6. On stop, **write the report** from the summary and gathered sources
//!
//! The loop continues until the sufficiency evaluator returns
//! [`Decision::Stop`](deepscout_core::Decision) — at the latest when the
//! hard iteration cap is reached.

pub mod loop_runner;
pub mod prompts;
pub mod query;
pub mod reflect;
pub mod report;
pub mod search_step;
pub mod summarize;

#[cfg(test)]
pub(crate) mod test_support;

pub use loop_runner::ResearchLoop;
pub use query::generate_query;
pub use reflect::assess;
pub use report::write_report;
pub use search_step::execute_search;
pub use summarize::update_summary;
