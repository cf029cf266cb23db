use std::sync::Arc;

use crate::classifier::{Classifier, KeywordClassifier};
use crate::clock::{format_date, Clock, SystemClock};
use crate::prompt_template::legal_context_block;
use crate::providers::base::SearchProvider;

/// Builds the system prompt actually sent to the primary model.
///
/// The result is always the caller's system prompt plus a current-date line. When
/// the classifier flags the query and the search provider comes back with
/// something, a delimited block of search context and a citation directive follow.
pub struct ContextEnricher {
    classifier: Arc<dyn Classifier>,
    search: Arc<dyn SearchProvider>,
    clock: Arc<dyn Clock>,
}

impl ContextEnricher {
    pub fn new(search: Arc<dyn SearchProvider>) -> Self {
        Self {
            classifier: Arc::new(KeywordClassifier),
            search,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn enrich(&self, query: Option<&str>, system: &str) -> String {
        let date = format_date(self.clock.today());
        let mut prompt = format!("{}\n\nCurrent date: {}.", system, date);

        let query = query.unwrap_or_default();
        if !self.classifier.should_search(query) {
            return prompt;
        }

        let context = self.search.search(query, system).await;
        if context.is_empty() {
            tracing::debug!("no search context, using date-annotated prompt");
            return prompt;
        }

        match legal_context_block(&date, &context) {
            Ok(block) => {
                prompt.push_str("\n\n");
                prompt.push_str(&block);
            }
            Err(e) => tracing::error!(error = %e, "failed to render search context block"),
        }
        prompt
    }
}
