use anyhow::Result;
use std::sync::Arc;

use super::{
    anthropic::AnthropicProvider,
    base::{ModelGateway, SearchProvider},
    configs::{AnthropicProviderConfig, SearchProviderConfig},
    openrouter::OpenRouterSearch,
};
use crate::classifier::{Classifier, KeywordClassifier, NeverSearch};
use crate::clock::{Clock, SystemClock};
use crate::enricher::ContextEnricher;
use crate::pipeline::ChatPipeline;

pub fn get_gateway(config: AnthropicProviderConfig) -> Result<Arc<dyn ModelGateway>> {
    Ok(Arc::new(AnthropicProvider::new(config)?))
}

pub fn get_search_provider(
    config: SearchProviderConfig,
    clock: Arc<dyn Clock>,
) -> Result<Arc<dyn SearchProvider>> {
    Ok(Arc::new(OpenRouterSearch::new(config)?.with_clock(clock)))
}

/// Wire the full pipeline. With `search_enabled` off the classifier never fires,
/// so only the date annotation is added.
pub fn get_pipeline(
    primary: AnthropicProviderConfig,
    search: SearchProviderConfig,
    search_enabled: bool,
) -> Result<ChatPipeline> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let search = get_search_provider(search, clock.clone())?;

    let classifier: Arc<dyn Classifier> = if search_enabled {
        Arc::new(KeywordClassifier)
    } else {
        Arc::new(NeverSearch)
    };
    let enricher = ContextEnricher::new(search)
        .with_classifier(classifier)
        .with_clock(clock);

    Ok(ChatPipeline::new(enricher, get_gateway(primary)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::Message;
    use crate::models::request::ChatRequest;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_disabled_search_never_calls_search_provider() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(body_string_contains("Current date: "))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let primary = AnthropicProviderConfig {
            host: mock_server.uri(),
            api_key: Some("primary".to_string()),
            ..AnthropicProviderConfig::new(None)
        };
        let search = SearchProviderConfig {
            host: mock_server.uri(),
            api_key: Some("search".to_string()),
            ..SearchProviderConfig::new(None)
        };
        let pipeline = get_pipeline(primary, search, false).unwrap();

        let request = ChatRequest::new(
            "You assist users in Kazakhstan (KZ).",
            vec![Message::user().with_text("What is the minimum wage law?")],
        );
        let payload = pipeline.handle(request).await.unwrap();
        assert_eq!(payload, json!({"content": []}));
    }
}
