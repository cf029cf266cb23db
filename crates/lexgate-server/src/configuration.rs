use crate::error::{to_env_var, ConfigError};
use config::{Config, ConfigBuilder, Environment};
use lexgate::providers::configs::{
    AnthropicProviderConfig, SearchProviderConfig, ANTHROPIC_DEFAULT_MAX_TOKENS,
    ANTHROPIC_DEFAULT_MODEL, ANTHROPIC_DEFAULT_TIMEOUT_SECS, ANTHROPIC_HOST, OPENROUTER_HOST,
    OPENROUTER_SEARCH_MODEL, SEARCH_DEFAULT_TIMEOUT_SECS, SEARCH_MAX_TOKENS,
};
use serde::Deserialize;
use std::env;
use std::net::{AddrParseError, SocketAddr};

#[derive(Debug, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[derive(Debug, Deserialize)]
pub struct PrimarySettings {
    pub host: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl PrimarySettings {
    pub fn into_config(self) -> AnthropicProviderConfig {
        AnthropicProviderConfig {
            host: self.host,
            api_key: self.api_key,
            model: self.model,
            max_tokens: self.max_tokens,
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchSettings {
    pub enabled: bool,
    pub host: String,
    #[serde(default)]
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub site_url: String,
    pub site_name: String,
    pub timeout_secs: u64,
}

impl SearchSettings {
    pub fn into_config(self) -> SearchProviderConfig {
        SearchProviderConfig {
            host: self.host,
            api_key: self.api_key,
            model: self.model,
            max_tokens: self.max_tokens,
            site_url: self.site_url,
            site_name: self.site_name,
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub primary: PrimarySettings,
    pub search: SearchSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    /// The primary key is checked at load time; the search key is only warned about
    pub fn warn_missing_credentials(&self) {
        if self.search.enabled && self.search.api_key.as_deref().unwrap_or_default().is_empty() {
            tracing::warn!(
                "no search provider key, set OPENROUTER_API_KEY or {}",
                to_env_var("search.api_key")
            );
        }
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Server defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            // Primary provider defaults
            .set_default("primary.host", ANTHROPIC_HOST)?
            .set_default("primary.model", ANTHROPIC_DEFAULT_MODEL)?
            .set_default("primary.max_tokens", ANTHROPIC_DEFAULT_MAX_TOKENS)?
            .set_default("primary.timeout_secs", ANTHROPIC_DEFAULT_TIMEOUT_SECS)?
            // Search provider defaults
            .set_default("search.enabled", true)?
            .set_default("search.host", OPENROUTER_HOST)?
            .set_default("search.model", OPENROUTER_SEARCH_MODEL)?
            .set_default("search.max_tokens", SEARCH_MAX_TOKENS)?
            .set_default("search.site_url", "https://lexgate.app")?
            .set_default("search.site_name", "lexgate")?
            .set_default("search.timeout_secs", SEARCH_DEFAULT_TIMEOUT_SECS)?;

        let config = Self::with_conventional_keys(builder)?
            // Layer on the environment variables
            .add_source(
                Environment::with_prefix("LEXGATE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Self = config.try_deserialize().map_err(|err| {
            tracing::debug!("Configuration error: {:?}", &err);
            ConfigError::Other(err)
        })?;

        // The search key may be absent, enrichment then degrades to no context
        if settings.primary.api_key.as_deref().unwrap_or_default().is_empty() {
            return Err(ConfigError::MissingEnvVar {
                env_var: to_env_var("primary.api_key"),
            });
        }

        Ok(settings)
    }

    /// The providers' usual variable names seed the credentials; the prefixed
    /// variables still take precedence.
    fn with_conventional_keys(
        mut builder: ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        if let Ok(key) = env::var("ANTHROPIC_API_KEY") {
            builder = builder.set_default("primary.api_key", key)?;
        }
        if let Ok(key) = env::var("OPENROUTER_API_KEY") {
            builder = builder.set_default("search.api_key", key)?;
        }
        Ok(builder)
    }
}
