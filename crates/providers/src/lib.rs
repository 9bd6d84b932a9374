//! Provider implementations for DeepScout.
//!
//! - [`OpenAiCompatClient`] — any OpenAI-compatible chat-completions
//!   endpoint (OpenAI, OpenRouter, Ollama, vLLM, Together, …).
//! - [`TavilyClient`] — the Tavily web-search REST API.
//!
//! Both implement the traits from `deepscout-core`; the research loop
//! never sees past the trait boundary.

pub mod openai_compat;
pub mod tavily;

pub use openai_compat::OpenAiCompatClient;
pub use tavily::TavilyClient;
