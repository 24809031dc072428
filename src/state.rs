// src/state.rs
use std::sync::Arc;

use tracing::warn;

use crate::config::Config;
use crate::services::gemini::{GeminiClient, TextGenerator};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// `None` when the service started without credentials.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.api_key {
            Some(key) => Self::new(Arc::new(GeminiClient::with_base_url(
                key.clone(),
                config.gemini_base_url.clone(),
            ))),
            None => {
                warn!("GEMINI_API_KEY not set; /chat will answer with a configuration error");
                Self::unconfigured()
            }
        }
    }
}
