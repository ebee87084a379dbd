/// Common test utilities and fixtures
use async_trait::async_trait;
use bday_server::services::mailer::{MailError, Mailer};
use bday_storage::RecordStore;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// Create a test record store backed by a throwaway SQLite file
pub async fn create_test_store() -> (Arc<RecordStore>, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}", db_path.display());

    let pool = bday_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    bday_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    (Arc::new(RecordStore::new(pool)), temp_dir)
}

/// One captured outbound email
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mailer that records every send instead of delivering anything
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<SentMail>>,
}

impl RecordingMailer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}

/// Mailer that records attempts but fails delivery to selected addresses
pub struct FailingMailer {
    fail_for: Vec<String>,
    attempts: Mutex<Vec<SentMail>>,
}

impl FailingMailer {
    /// Fail every address in `fail_for`; deliver (silently) to everyone else
    pub fn failing_for(fail_for: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            fail_for: fail_for.iter().map(ToString::to_string).collect(),
            attempts: Mutex::new(Vec::new()),
        })
    }

    /// Every attempted send, including the failed ones
    pub fn attempts(&self) -> Vec<SentMail> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        self.attempts.lock().unwrap().push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });

        if self.fail_for.iter().any(|addr| addr == to) {
            return Err(MailError::Smtp(format!("transport rejected {to}")));
        }
        Ok(())
    }
}
