//! SearchProvider trait — the abstraction over web-search backends.
//!
//! A SearchProvider takes a query and returns a list of normalized
//! [`Source`] records. The loop tolerates total failure of this call: a
//! search error degrades to an empty result batch, never a crashed run.

use crate::error::SearchError;
use crate::source::Source;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// How thorough a search pass should be.
///
/// Serialized lowercase — the value goes on the wire verbatim for
/// providers that understand it (Tavily does).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    Advanced,
}

impl Default for SearchDepth {
    fn default() -> Self {
        SearchDepth::Advanced
    }
}

impl std::fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchDepth::Basic => write!(f, "basic"),
            SearchDepth::Advanced => write!(f, "advanced"),
        }
    }
}

impl std::str::FromStr for SearchDepth {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(SearchDepth::Basic),
            "advanced" => Ok(SearchDepth::Advanced),
            other => Err(format!("unknown search depth: {other}")),
        }
    }
}

/// The core web-search trait.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// A human-readable name for this backend (e.g., "tavily").
    fn name(&self) -> &str;

    /// Run a single search and return normalized results.
    ///
    /// Items come back in provider order; missing title/content fields are
    /// normalized to empty strings by the implementation.
    async fn search(
        &self,
        query: &str,
        max_results: u32,
        depth: SearchDepth,
    ) -> std::result::Result<Vec<Source>, SearchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&SearchDepth::Advanced).unwrap(),
            "\"advanced\""
        );
        assert_eq!(
            serde_json::to_string(&SearchDepth::Basic).unwrap(),
            "\"basic\""
        );
    }

    #[test]
    fn depth_parses_case_insensitively() {
        assert_eq!("Basic".parse::<SearchDepth>().unwrap(), SearchDepth::Basic);
        assert_eq!(
            "ADVANCED".parse::<SearchDepth>().unwrap(),
            SearchDepth::Advanced
        );
        assert!("deep".parse::<SearchDepth>().is_err());
    }

    #[test]
    fn depth_defaults_to_advanced() {
        assert_eq!(SearchDepth::default(), SearchDepth::Advanced);
    }
}
