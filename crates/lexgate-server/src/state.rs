use anyhow::Result;
use lexgate::pipeline::ChatPipeline;
use lexgate::providers::factory;
use std::sync::Arc;

use crate::configuration::Settings;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ChatPipeline>,
}

impl AppState {
    pub fn new(pipeline: ChatPipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    pub fn from_settings(settings: Settings) -> Result<Self> {
        let search_enabled = settings.search.enabled;
        let pipeline = factory::get_pipeline(
            settings.primary.into_config(),
            settings.search.into_config(),
            search_enabled,
        )?;
        Ok(Self::new(pipeline))
    }
}
