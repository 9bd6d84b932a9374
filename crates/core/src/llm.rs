//! LanguageModel trait — the abstraction over LLM backends.
//!
//! The research loop treats the model as a black-box text function: prompt
//! in, completion out. Model name, temperature, and endpoint are baked into
//! the implementation so callers never carry provider settings around.
//!
//! Implementations: OpenAI-compatible endpoints (OpenAI, OpenRouter, Ollama,
//! vLLM), plus test mocks.

use crate::error::ProviderError;
use async_trait::async_trait;

/// The core language-model trait.
///
/// Every call in the research loop — query generation, summary fusion,
/// sufficiency reflection, report writing — goes through `generate()`
/// without knowing which backend is wired in.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// A human-readable name for this backend (e.g., "openai", "ollama").
    fn name(&self) -> &str;

    /// Send a prompt and get the completion text back.
    ///
    /// One prompt, one blocking call, one response. No streaming contract:
    /// a caller-facing streaming mode may wrap this without changing the
    /// loop.
    async fn generate(&self, prompt: &str) -> std::result::Result<String, ProviderError>;
}
