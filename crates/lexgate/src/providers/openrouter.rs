use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Datelike;
use reqwest::Client;
use serde_json::{json, Value};
use std::sync::Arc;

use super::base::SearchProvider;
use super::configs::SearchProviderConfig;
use super::utils::{build_client, first_choice_text};
use crate::clock::{format_date, Clock, SystemClock};
use crate::locale::{LocaleExtractor, RegexLocaleExtractor};
use crate::prompt_template::search_query_prompt;

/// Web search through a search-capable model behind an OpenAI-compatible
/// chat completions endpoint.
pub struct OpenRouterSearch {
    client: Client,
    config: SearchProviderConfig,
    clock: Arc<dyn Clock>,
    locale: Arc<dyn LocaleExtractor>,
}

impl OpenRouterSearch {
    pub fn new(config: SearchProviderConfig) -> Result<Self> {
        let client = build_client(config.timeout_secs)?;
        Ok(Self {
            client,
            config,
            clock: Arc::new(SystemClock),
            locale: Arc::new(RegexLocaleExtractor),
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_locale_extractor(mut self, locale: Arc<dyn LocaleExtractor>) -> Self {
        self.locale = locale;
        self
    }

    /// Returns `Ok(String::new())` when the provider answered but had nothing usable
    async fn try_search(&self, query: &str, system: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("search provider API key is not configured"))?;

        let today = self.clock.today();
        let hint = self.locale.extract(system);
        if hint.is_none() {
            tracing::debug!("no locale hint in system prompt, searching without a country");
        }
        let prompt = search_query_prompt(query, hint.as_ref(), today.year())?;

        let payload = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "messages": [{"role": "user", "content": prompt}],
        });

        let url = format!(
            "{}/v1/chat/completions",
            self.config.host.trim_end_matches('/')
        );
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("HTTP-Referer", &self.config.site_url)
            .header("X-Title", &self.config.site_name)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %error_text, "search provider returned an error");
            return Ok(String::new());
        }

        let data: Value = response.json().await?;
        Ok(match first_choice_text(&data) {
            Some(text) => format!("[Web search: {}]\n{}", format_date(today), text),
            None => {
                tracing::warn!("search provider response had no content");
                String::new()
            }
        })
    }
}

#[async_trait]
impl SearchProvider for OpenRouterSearch {
    async fn search(&self, query: &str, system: &str) -> String {
        match self.try_search(query, system).await {
            Ok(context) => {
                tracing::debug!(chars = context.chars().count(), "search finished");
                context
            }
            Err(e) => {
                tracing::warn!(error = %e, "search failed, continuing without context");
                String::new()
            }
        }
    }
}
