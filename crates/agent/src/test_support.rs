//! Shared test doubles for the loop components.

use deepscout_core::error::{ProviderError, SearchError};
use deepscout_core::llm::LanguageModel;
use deepscout_core::search::{SearchDepth, SearchProvider};
use deepscout_core::source::Source;
use std::sync::Mutex;

/// A mock language model that returns a sequence of scripted responses.
///
/// Each call to `generate` returns the next response in the queue and
/// records the prompt it was given. Panics if more calls are made than
/// responses provided — an over-called model is a test bug.
pub struct ScriptedModel {
    responses: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt the model has been called with, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LanguageModel for ScriptedModel {
    fn name(&self) -> &str {
        "scripted_mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let mut prompts = self.prompts.lock().unwrap();
        let responses = self.responses.lock().unwrap();

        if prompts.len() >= responses.len() {
            panic!(
                "ScriptedModel: no more responses (call #{}, have {})",
                prompts.len() + 1,
                responses.len()
            );
        }

        let response = responses[prompts.len()].clone();
        prompts.push(prompt.to_string());
        Ok(response)
    }
}

/// A language model that must never be called.
pub struct PanickingModel;

#[async_trait::async_trait]
impl LanguageModel for PanickingModel {
    fn name(&self) -> &str {
        "panicking_mock"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        panic!("PanickingModel was called — this step must not invoke the model");
    }
}

/// A language model that always fails.
pub struct FailingModel;

#[async_trait::async_trait]
impl LanguageModel for FailingModel {
    fn name(&self) -> &str {
        "failing_mock"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
        Err(ProviderError::Network("connection refused".into()))
    }
}

/// A mock search provider that returns a sequence of scripted batches.
///
/// Once the script runs out, further calls return empty batches.
pub struct ScriptedSearch {
    batches: Mutex<Vec<Result<Vec<Source>, SearchError>>>,
    call_count: Mutex<usize>,
}

impl ScriptedSearch {
    pub fn new(batches: Vec<Result<Vec<Source>, SearchError>>) -> Self {
        Self {
            batches: Mutex::new(batches),
            call_count: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl SearchProvider for ScriptedSearch {
    fn name(&self) -> &str {
        "scripted_search"
    }

    async fn search(
        &self,
        _query: &str,
        _max_results: u32,
        _depth: SearchDepth,
    ) -> Result<Vec<Source>, SearchError> {
        let mut count = self.call_count.lock().unwrap();
        let mut batches = self.batches.lock().unwrap();

        let result = if *count < batches.len() {
            std::mem::replace(&mut batches[*count], Ok(Vec::new()))
        } else {
            Ok(Vec::new())
        };
        *count += 1;
        result
    }
}

/// A search provider that fails on every call.
pub struct FailingSearch;

#[async_trait::async_trait]
impl SearchProvider for FailingSearch {
    fn name(&self) -> &str {
        "failing_search"
    }

    async fn search(
        &self,
        _query: &str,
        _max_results: u32,
        _depth: SearchDepth,
    ) -> Result<Vec<Source>, SearchError> {
        Err(SearchError::Network("dns failure".into()))
    }
}

/// Build a batch of distinct sources with predictable URLs.
pub fn batch_of(n: usize) -> Vec<Source> {
    (1..=n)
        .map(|i| {
            Source::new(
                format!("Result {i}"),
                format!("https://example.com/{i}"),
                format!("Content of result {i}"),
            )
        })
        .collect()
}

/// A summary comfortably past the 200-character reflection threshold.
pub fn long_summary() -> String {
    "Meditation has been shown to reduce stress and improve focus. \
     Studies link regular practice to lower blood pressure, better sleep, \
     and reduced symptoms of anxiety and depression. Several randomized \
     trials report measurable changes in attention after eight weeks."
        .to_string()
}
