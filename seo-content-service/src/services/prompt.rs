//! Prompt rendering for SEO content generation.
//!
//! The prompt is a pure function of the request: the same title, keywords
//! and content types always produce the same text.

use crate::config::PromptConfig;
use crate::models::{ContentType, GenerationRequest};
use serde_json::{json, Map, Value};

/// Render the instruction prompt sent to the model.
pub fn build_prompt(request: &GenerationRequest, options: &PromptConfig) -> String {
    let type_list = request
        .content_types
        .iter()
        .map(ContentType::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let guidance = request
        .content_types
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. \"{}\": {}", i + 1, t, guidance_for(*t, options)))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"You are a world-class SEO AI that generates SEO-friendly content for products.

Product title:
{title}

Keywords:
{keywords}

Types requested: {type_list}

IMPORTANT: Generate ONLY the types listed above. Do NOT generate any types that are not in the list.

Output instructions:
- ONLY output a valid JSON object.
- Do NOT include any Markdown formatting, code blocks, or extra text.
- The JSON object must contain ONLY the keys for the requested types.

Requested types and their structures:
{guidance}

{examples}

Generate content for EXACTLY these types: {type_list}
Do not include any other types in your output.
Tone: Use a conversational, friendly tone. Write like a human talking to another human. Use short sentences and everyday language.
Keyword usage: Include keywords naturally in sentences. Do NOT overstuff keywords or make sentences awkward.
Keep the content simple, original and easy to read.
"#,
        title = request.product_title,
        keywords = request.keywords_text(),
        type_list = type_list,
        guidance = guidance,
        examples = build_examples(&request.content_types, options),
    )
}

fn guidance_for(content_type: ContentType, options: &PromptConfig) -> String {
    match content_type {
        ContentType::Description => "A string containing a highly SEO-optimized product description \
             (minimum 150 words). Structure it as Introduction, Features & Benefits, \
             How it helps the customer, and Closing."
            .to_string(),
        ContentType::ShortDescription => {
            "A string with a short product summary of 40-60 words.".to_string()
        }
        ContentType::Features => {
            "An array of feature strings, each around 100 words and SEO-focused.".to_string()
        }
        ContentType::Faqs => format!(
            "An array of exactly {} question-answer objects with keys \"q\" and \"a\"; \
             each answer at least 40 words, addressing common concerns and advantages.",
            options.faq_count
        ),
        ContentType::BulletFeature => "An array of exactly 10 short bullet features, each 10-15 words, \
             highlighting unique selling points or benefits."
            .to_string(),
        ContentType::MetaTitle => "A string for an SEO-friendly meta title (max 60 characters, \
             include the main keyword and product name)."
            .to_string(),
        ContentType::MetaDescription => "A string for an SEO-friendly meta description \
             (max 160 characters, summarize the value and include primary keywords)."
            .to_string(),
    }
}

fn example_value(content_type: ContentType) -> Value {
    match content_type {
        ContentType::Description => json!("Your product description here"),
        ContentType::ShortDescription => json!("Your short product summary here"),
        ContentType::Features => json!(["Feature 1", "Feature 2", "Feature 3"]),
        ContentType::Faqs => json!([
            {"q": "Question 1?", "a": "Answer 1"},
            {"q": "Question 2?", "a": "Answer 2"}
        ]),
        ContentType::BulletFeature => json!([
            "Short feature 1 (10-15 words)",
            "Short feature 2 (10-15 words)",
            "Short feature 10 (10-15 words)"
        ]),
        ContentType::MetaTitle => json!("SEO-friendly meta title here (under 60 characters)"),
        ContentType::MetaDescription => {
            json!("SEO-friendly meta description here (under 160 characters)")
        }
    }
}

fn build_examples(types: &[ContentType], options: &PromptConfig) -> String {
    let mut lines = vec!["Example JSON structures:".to_string()];

    for content_type in types {
        let mut single = Map::new();
        single.insert(content_type.to_string(), example_value(*content_type));
        let mut line = format!(
            "- If \"{}\" is requested: {}",
            content_type,
            Value::Object(single)
        );
        if *content_type == ContentType::Faqs {
            line.push_str(&format!(" Provide exactly {} items.", options.faq_count));
        }
        lines.push(line);
    }

    if types.len() > 1 {
        let combined: Map<String, Value> = types
            .iter()
            .map(|t| (t.to_string(), example_value(*t)))
            .collect();
        let names: Vec<&str> = types.iter().map(ContentType::as_str).collect();
        lines.push(format!(
            "- For multiple types {}: {}",
            json!(names),
            Value::Object(combined)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Keywords;

    fn request(types: Vec<ContentType>) -> GenerationRequest {
        GenerationRequest::new(
            "Wireless Mouse",
            &Keywords::Text("ergonomic, wireless, rechargeable".to_string()),
            types,
        )
    }

    #[test]
    fn prompt_embeds_title_keywords_and_type_list() {
        let prompt = build_prompt(
            &request(vec![ContentType::Description, ContentType::Faqs]),
            &PromptConfig::default(),
        );

        assert!(prompt.contains("Wireless Mouse"));
        assert!(prompt.contains("ergonomic, wireless, rechargeable"));
        assert!(prompt.contains("Types requested: description, faqs"));
    }

    #[test]
    fn guidance_only_for_requested_types() {
        let prompt = build_prompt(
            &request(vec![ContentType::MetaTitle]),
            &PromptConfig::default(),
        );

        assert!(prompt.contains("max 60 characters"));
        assert!(!prompt.contains("minimum 150 words"));
        assert!(!prompt.contains("\"faqs\""));
        assert!(!prompt.contains("For multiple types"));
    }

    #[test]
    fn faq_count_is_configurable() {
        let prompt = build_prompt(
            &request(vec![ContentType::Faqs]),
            &PromptConfig { faq_count: 3 },
        );

        assert!(prompt.contains("exactly 3 question-answer objects"));
    }

    #[test]
    fn combined_example_lists_every_requested_type() {
        let prompt = build_prompt(
            &request(vec![ContentType::Description, ContentType::BulletFeature]),
            &PromptConfig::default(),
        );

        let combined = prompt
            .lines()
            .find(|l| l.starts_with("- For multiple types"))
            .expect("combined example present");
        assert!(combined.contains(r#"["description","bulletFeature"]"#));
        assert!(combined.contains(r#""bulletFeature":["#));
        assert!(combined.contains(r#""description":"Your product description here""#));
    }

    #[test]
    fn prompt_is_deterministic() {
        let req = request(vec![ContentType::Features, ContentType::MetaDescription]);
        let options = PromptConfig::default();
        assert_eq!(build_prompt(&req, &options), build_prompt(&req, &options));
    }

    #[test]
    fn empty_type_set_still_renders() {
        let prompt = build_prompt(&request(vec![]), &PromptConfig::default());

        assert!(prompt.contains("Types requested: \n"));
        assert!(prompt.contains("Example JSON structures:"));
    }
}
