use std::sync::Arc;

use crate::candidates::files::ResumeFiles;
use crate::candidates::store::CandidateStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Candidate records. Default: InMemoryCandidateStore.
    pub store: Arc<dyn CandidateStore>,
    pub files: ResumeFiles,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn CandidateStore>) -> Self {
        let files = ResumeFiles::new(config.upload_dir.clone());
        Self {
            config,
            store,
            files,
        }
    }
}
