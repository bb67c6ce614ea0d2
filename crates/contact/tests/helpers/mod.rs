use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use kairos_contact::{ContactSubmission, Transport, TransportError};

pub fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        first_name: "Jane".to_owned(),
        last_name: "O'Brien".to_owned(),
        title: "VP of Revenue".to_owned(),
        email: "jane@acme.io".to_owned(),
        company: "Acme Corp".to_owned(),
        company_size: "25-50".to_owned(),
        source: Some("Podcast".to_owned()),
        message: "Our sales process breaks every time we add a new region.".to_owned(),
        honeypot: None,
        page_uri: Some("https://kairosperformance.ai/contact".to_owned()),
    }
}

/// Records every submission and answers with a fixed result.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    pub calls: Arc<AtomicUsize>,
    pub last: Arc<std::sync::Mutex<Option<ContactSubmission>>>,
    pub fail_with: Option<u16>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<ContactSubmission> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(submission.clone());

        match self.fail_with {
            Some(status) => Err(TransportError::Rejected {
                status,
                message: Some("Submission failed.".to_owned()),
            }),
            None => Ok(()),
        }
    }
}
