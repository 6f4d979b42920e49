//! Domain models for the SEO content service.

pub mod content_type;
pub mod generation;

pub use content_type::{ContentKind, ContentType, UnknownContentType};
pub use generation::{Faq, GeneratedContent, GenerationRequest, GenerationResult, Keywords};
