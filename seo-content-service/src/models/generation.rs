//! Request-scoped generation values.

use super::ContentType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Keywords as sent by callers: either one comma-separated string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Keywords {
    Text(String),
    List(Vec<String>),
}

impl Default for Keywords {
    fn default() -> Self {
        Keywords::Text(String::new())
    }
}

impl Keywords {
    /// Trimmed, non-empty keywords in caller order.
    pub fn to_list(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            Keywords::Text(text) => text.split(',').collect(),
            Keywords::List(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A validated request to generate content for one product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub product_title: String,
    pub keywords: Vec<String>,
    pub content_types: Vec<ContentType>,
}

impl GenerationRequest {
    pub fn new(
        product_title: impl Into<String>,
        keywords: &Keywords,
        content_types: Vec<ContentType>,
    ) -> Self {
        let product_title: String = product_title.into();
        Self {
            product_title: product_title.trim().to_string(),
            keywords: keywords.to_list(),
            content_types,
        }
    }

    pub fn keywords_text(&self) -> String {
        self.keywords.join(", ")
    }
}

/// A single question/answer pair. The model is prompted with the short
/// `q`/`a` keys, which are accepted alongside the long form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(alias = "q")]
    pub question: String,
    #[serde(alias = "a")]
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GeneratedContent {
    Text(String),
    List(Vec<String>),
    Faqs(Vec<Faq>),
}

/// Generated content keyed by the requested content type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GenerationResult(BTreeMap<ContentType, GeneratedContent>);

impl GenerationResult {
    pub fn insert(&mut self, content_type: ContentType, content: GeneratedContent) {
        self.0.insert(content_type, content);
    }

    pub fn get(&self, content_type: ContentType) -> Option<&GeneratedContent> {
        self.0.get(&content_type)
    }

    pub fn content_types(&self) -> impl Iterator<Item = ContentType> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
