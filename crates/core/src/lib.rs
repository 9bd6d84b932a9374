//! # DeepScout Core
//!
//! Domain types, traits, and error definitions for the DeepScout research
//! agent. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The two external collaborators — the language model and the web search
//! provider — are defined as traits here. Implementations live in
//! `deepscout-providers`. This enables:
//! - Swapping backends via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod llm;
pub mod search;
pub mod source;
pub mod state;

// Re-export key types at crate root for ergonomics
pub use error::{Error, ProviderError, Result, SearchError};
pub use llm::LanguageModel;
pub use search::{SearchDepth, SearchProvider};
pub use source::Source;
pub use state::{Decision, ResearchState, NO_REPORT};
