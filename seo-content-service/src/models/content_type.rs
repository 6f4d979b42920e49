//! Content type tags a caller can request.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A kind of SEO content the model can be asked to produce.
///
/// Parsing accepts the legacy spellings `faq`, `descriptions` and `feature`
/// and maps them onto their canonical tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum ContentType {
    Description,
    ShortDescription,
    Features,
    Faqs,
    BulletFeature,
    MetaTitle,
    MetaDescription,
}

/// Shape of the value generated for a content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    List,
    Faqs,
}

impl ContentKind {
    /// Shape the model is asked to produce for this kind.
    pub fn expected(&self) -> &'static str {
        match self {
            ContentKind::Text => "a string",
            ContentKind::List => "a list of strings",
            ContentKind::Faqs => "a list of question/answer objects",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown content type: {0}")]
pub struct UnknownContentType(pub String);

impl ContentType {
    pub const ALL: [ContentType; 7] = [
        ContentType::Description,
        ContentType::ShortDescription,
        ContentType::Features,
        ContentType::Faqs,
        ContentType::BulletFeature,
        ContentType::MetaTitle,
        ContentType::MetaDescription,
    ];

    /// Canonical wire name, also the JSON key the model must use.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Description => "description",
            ContentType::ShortDescription => "shortDescription",
            ContentType::Features => "features",
            ContentType::Faqs => "faqs",
            ContentType::BulletFeature => "bulletFeature",
            ContentType::MetaTitle => "metaTitle",
            ContentType::MetaDescription => "metaDescription",
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            ContentType::Description
            | ContentType::ShortDescription
            | ContentType::MetaTitle
            | ContentType::MetaDescription => ContentKind::Text,
            ContentType::Features | ContentType::BulletFeature => ContentKind::List,
            ContentType::Faqs => ContentKind::Faqs,
        }
    }

    /// Parse a list of raw tags, normalising aliases and dropping repeats
    /// while keeping first-seen order.
    pub fn parse_list<I, S>(tags: I) -> Result<Vec<ContentType>, UnknownContentType>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for tag in tags {
            let content_type = tag.as_ref().parse::<ContentType>()?;
            if !parsed.contains(&content_type) {
                parsed.push(content_type);
            }
        }
        Ok(parsed)
    }
}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "description" | "descriptions" => Ok(ContentType::Description),
            "shortDescription" => Ok(ContentType::ShortDescription),
            "features" | "feature" => Ok(ContentType::Features),
            "faqs" | "faq" => Ok(ContentType::Faqs),
            "bulletFeature" => Ok(ContentType::BulletFeature),
            "metaTitle" => Ok(ContentType::MetaTitle),
            "metaDescription" => Ok(ContentType::MetaDescription),
            other => Err(UnknownContentType(other.to_string())),
        }
    }
}

impl TryFrom<String> for ContentType {
    type Error = UnknownContentType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_normalise_to_canonical_tags() {
        assert_eq!("faq".parse::<ContentType>().unwrap(), ContentType::Faqs);
        assert_eq!(
            "descriptions".parse::<ContentType>().unwrap(),
            ContentType::Description
        );
        assert_eq!("feature".parse::<ContentType>().unwrap(), ContentType::Features);
    }

    #[test]
    fn normalisation_is_idempotent() {
        for content_type in ContentType::ALL {
            let reparsed: ContentType = content_type.as_str().parse().unwrap();
            assert_eq!(reparsed, content_type);
        }
    }

    #[test]
    fn parse_list_handles_aliases_in_any_position() {
        let parsed = ContentType::parse_list(["metaTitle", "faq", "descriptions", "feature"]).unwrap();
        assert_eq!(
            parsed,
            vec![
                ContentType::MetaTitle,
                ContentType::Faqs,
                ContentType::Description,
                ContentType::Features,
            ]
        );
    }

    #[test]
    fn parse_list_collapses_alias_and_canonical_duplicates() {
        let parsed = ContentType::parse_list(["faq", "faqs", "description", "descriptions"]).unwrap();
        assert_eq!(parsed, vec![ContentType::Faqs, ContentType::Description]);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = ContentType::parse_list(["description", "tagline"]).unwrap_err();
        assert_eq!(err, UnknownContentType("tagline".to_string()));
    }

    #[test]
    fn deserializes_through_alias_table() {
        let parsed: Vec<ContentType> = serde_json::from_str(r#"["faq", "bulletFeature"]"#).unwrap();
        assert_eq!(parsed, vec![ContentType::Faqs, ContentType::BulletFeature]);
    }

    #[test]
    fn kinds_match_expected_shapes() {
        assert_eq!(ContentType::MetaTitle.kind(), ContentKind::Text);
        assert_eq!(ContentType::BulletFeature.kind(), ContentKind::List);
        assert_eq!(ContentType::Faqs.kind(), ContentKind::Faqs);
        assert_eq!(ContentType::Features.kind().expected(), "a list of strings");
    }
}
