use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct ExtractOptions {
    pub on_progress: Option<Arc<dyn Fn(Progress) + Send + Sync>>,
}

/// Reported after each entry is written.
#[derive(Clone, Debug)]
pub struct Progress {
    pub entries_processed: usize,
    pub entries_total: usize,
    pub bytes_processed: u64,
    pub current_file: Option<PathBuf>,
}

impl ExtractOptions {
    pub fn on_progress(mut self, callback: Arc<dyn Fn(Progress) + Send + Sync>) -> Self {
        self.on_progress = Some(callback);
        self
    }

    pub(crate) fn report(&self, progress: Progress) {
        if let Some(callback) = &self.on_progress {
            callback(progress);
        }
    }
}
