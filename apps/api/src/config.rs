use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::ats::sanitize::{DEFAULT_MAX_JD_CHARS, DEFAULT_MAX_RESUME_CHARS};
use crate::llm_client::retry::RetryPolicy;

/// Application configuration loaded from environment variables.
/// Only malformed values fail startup; every variable has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub enable_llm_ats_scoring: bool,
    pub llm_max_retries: u32,
    pub llm_retry_base_ms: u64,
    pub max_resume_chars: usize,
    pub max_jd_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            anthropic_api_key: None,
            enable_llm_ats_scoring: false,
            llm_max_retries: 3,
            llm_retry_base_ms: 1000,
            max_resume_chars: DEFAULT_MAX_RESUME_CHARS,
            max_jd_chars: DEFAULT_MAX_JD_CHARS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            enable_llm_ats_scoring: parse_env(
                "ENABLE_LLM_ATS_SCORING",
                defaults.enable_llm_ats_scoring,
            )?,
            llm_max_retries: parse_env("LLM_MAX_RETRIES", defaults.llm_max_retries)?,
            llm_retry_base_ms: parse_env("LLM_RETRY_BASE_MS", defaults.llm_retry_base_ms)?,
            max_resume_chars: parse_env("MAX_RESUME_CHARS", defaults.max_resume_chars)?,
            max_jd_chars: parse_env("MAX_JD_CHARS", defaults.max_jd_chars)?,
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.llm_max_retries,
            Duration::from_millis(self.llm_retry_base_ms),
        )
    }

    /// The LLM scorer needs both the feature flag and a key.
    pub fn llm_scoring_key(&self) -> Option<&str> {
        self.anthropic_api_key
            .as_deref()
            .filter(|_| self.enable_llm_ats_scoring)
    }
}

fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
