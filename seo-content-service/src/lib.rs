//! SEO product content generation over an OpenRouter chat-completion model.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
