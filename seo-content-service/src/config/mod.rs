use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "google/gemini-2.5-flash-lite";
pub const DEFAULT_REFERER: &str = "https://truewebproai.onrender.com";
pub const DEFAULT_APP_TITLE: &str = "AI Demo App";
pub const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 3500;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_FAQ_COUNT: usize = 5;

#[derive(Debug, Clone)]
pub struct SeoConfig {
    pub common: core_config::Config,
    pub openrouter: OpenRouterConfig,
    pub prompt: PromptConfig,
    /// Directory served for paths no route claims (the demo frontend).
    pub static_dir: PathBuf,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    pub api_key: Secret<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub app_title: String,
    /// Sent as `HTTP-Referer`; the externally visible URL of this deployment.
    pub referer: String,
}

#[derive(Debug, Clone)]
pub struct PromptConfig {
    pub faq_count: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            faq_count: DEFAULT_FAQ_COUNT,
        }
    }
}

impl OpenRouterConfig {
    /// Defaults for everything but the key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            app_title: DEFAULT_APP_TITLE.to_string(),
            referer: DEFAULT_REFERER.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl SeoConfig {
    /// Load configuration from the process environment. Fails when
    /// `OPENROUTER_API_KEY` is missing or blank. A `.env` file is not read
    /// here; callers load it first.
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let api_key = get_env("OPENROUTER_API_KEY", None)?;
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "OPENROUTER_API_KEY is required but empty"
            )));
        }

        let referer = env::var("RENDER_EXTERNAL_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_REFERER.to_string());

        let openrouter = OpenRouterConfig {
            api_key: Secret::new(api_key.to_string()),
            base_url: get_env("OPENROUTER_BASE_URL", Some(DEFAULT_BASE_URL))?
                .trim_end_matches('/')
                .to_string(),
            model: get_env("OPENROUTER_MODEL", Some(DEFAULT_MODEL))?,
            temperature: parse_env("OPENROUTER_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            max_tokens: parse_env("OPENROUTER_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            timeout: Duration::from_secs(parse_env(
                "OPENROUTER_TIMEOUT_SECS",
                DEFAULT_TIMEOUT_SECS,
            )?),
            app_title: get_env("OPENROUTER_APP_TITLE", Some(DEFAULT_APP_TITLE))?,
            referer,
        };

        Ok(SeoConfig {
            common,
            openrouter,
            prompt: PromptConfig {
                faq_count: parse_env("SEO_FAQ_COUNT", DEFAULT_FAQ_COUNT)?,
            },
            static_dir: PathBuf::from(get_env("SEO_STATIC_DIR", Some(DEFAULT_STATIC_DIR))?),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|e| !e.is_empty()),
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val.trim().parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has an invalid value: {}", key, e))
        }),
        Err(_) => Ok(default),
    }
}
