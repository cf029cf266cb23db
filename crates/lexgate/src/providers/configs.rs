pub const ANTHROPIC_HOST: &str = "https://api.anthropic.com";
pub const ANTHROPIC_DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const ANTHROPIC_DEFAULT_MAX_TOKENS: u32 = 1500;
pub const ANTHROPIC_DEFAULT_TIMEOUT_SECS: u64 = 120;

pub const OPENROUTER_HOST: &str = "https://openrouter.ai/api";
pub const OPENROUTER_SEARCH_MODEL: &str = "perplexity/sonar";
pub const SEARCH_MAX_TOKENS: u32 = 800;
pub const SEARCH_DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone)]
pub struct AnthropicProviderConfig {
    pub host: String,
    pub api_key: Option<String>,
    /// Used when the caller does not name a model
    pub model: String,
    /// Used when the caller does not set max_tokens
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl AnthropicProviderConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            host: ANTHROPIC_HOST.to_string(),
            api_key,
            model: ANTHROPIC_DEFAULT_MODEL.to_string(),
            max_tokens: ANTHROPIC_DEFAULT_MAX_TOKENS,
            timeout_secs: ANTHROPIC_DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchProviderConfig {
    pub host: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    /// Sent as HTTP-Referer to identify the calling site
    pub site_url: String,
    /// Sent as X-Title
    pub site_name: String,
    pub timeout_secs: u64,
}

impl SearchProviderConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            host: OPENROUTER_HOST.to_string(),
            api_key,
            model: OPENROUTER_SEARCH_MODEL.to_string(),
            max_tokens: SEARCH_MAX_TOKENS,
            site_url: "https://lexgate.app".to_string(),
            site_name: "lexgate".to_string(),
            timeout_secs: SEARCH_DEFAULT_TIMEOUT_SECS,
        }
    }
}
