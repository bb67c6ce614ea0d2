use async_trait::async_trait;
use serde::Deserialize;

use crate::ContactSubmission;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("contact endpoint answered {status}: {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("contact endpoint unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error(transparent)]
    Service(#[from] crate::Error),
}

impl TransportError {
    /// Message the endpoint gave back, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            TransportError::Rejected { message, .. } => message.as_deref(),
            TransportError::Service(err) => Some(err.public_message()),
            TransportError::Network(_) => None,
        }
    }
}

/// How a form controller delivers a submission.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), TransportError>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Posts submissions as JSON to a site's `/api/contact` endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        let res = self.http.post(&self.url).json(submission).send().await?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let message = res
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);

        Err(TransportError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
