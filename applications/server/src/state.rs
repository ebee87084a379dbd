/// Shared application state
use crate::services::mailer::Mailer;
use bday_storage::RecordStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RecordStore>,
    pub mailer: Arc<dyn Mailer>,
    /// Name used to sign outgoing email bodies
    pub signature: String,
}

impl AppState {
    pub fn new(store: Arc<RecordStore>, mailer: Arc<dyn Mailer>, signature: String) -> Self {
        Self {
            store,
            mailer,
            signature,
        }
    }
}
