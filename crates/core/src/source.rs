//! Source — a single web document gathered during research.

use serde::{Deserialize, Serialize};

/// One search result kept for citation.
///
/// Identity is the `url`: two sources with the same URL are the same
/// entity, and the first-seen title/content wins. Deduplication is
/// enforced where sources are merged into [`crate::ResearchState`], not
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub content: String,
}

impl Source {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
        }
    }
}
