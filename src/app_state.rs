use crate::config::Config;
use crate::credentials::{CredentialStoreTrait, FileCredentialStore};
use crate::summarizer::{HttpSummarizer, SummarizerTrait};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialStoreTrait + Send + Sync>,
    pub summarizer: Arc<dyn SummarizerTrait + Send + Sync>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            credentials: Arc::new(FileCredentialStore::new(config.credentials_path())),
            summarizer: Arc::new(HttpSummarizer::new(config.summarizer_url())?),
        })
    }
}
