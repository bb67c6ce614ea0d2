use async_trait::async_trait;

use crate::{
    ContactSubmission, Error, FormTarget, FormsClient, Result, Transport, TransportError,
    hubspot::{DEFAULT_PAGE_NAME, FormsSubmission},
    validate,
};

/// Server-side half of the contact pipeline: re-validates a submission and
/// forwards it to the Forms API.
#[derive(Clone, Debug)]
pub struct ContactService {
    client: FormsClient,
    portal_id: Option<String>,
    form_id: Option<String>,
    default_page_uri: String,
    page_name: String,
}

impl ContactService {
    pub fn new(
        client: FormsClient,
        portal_id: Option<String>,
        form_id: Option<String>,
        default_page_uri: impl Into<String>,
    ) -> Self {
        Self {
            client,
            portal_id,
            form_id,
            default_page_uri: default_page_uri.into(),
            page_name: DEFAULT_PAGE_NAME.to_owned(),
        }
    }

    pub fn with_page_name(mut self, page_name: impl Into<String>) -> Self {
        self.page_name = page_name.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.resolve_target().is_ok()
    }

    /// Destination account and form. Blank ids count as missing.
    pub fn target(&self) -> Result<FormTarget> {
        self.resolve_target().inspect_err(|err| {
            tracing::error!(err = %err, "contact submission refused");
        })
    }

    fn resolve_target(&self) -> Result<FormTarget> {
        let present = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };

        let Some(portal_id) = present(&self.portal_id) else {
            return Err(Error::Configuration("hubspot.portal_id"));
        };
        let Some(form_id) = present(&self.form_id) else {
            return Err(Error::Configuration("hubspot.form_id"));
        };

        Ok(FormTarget { portal_id, form_id })
    }

    /// Validates and forwards `submission` to `target`, exactly once.
    pub async fn forward(&self, target: &FormTarget, submission: &ContactSubmission) -> Result<()> {
        if let Some(message) = validate(submission).rejection() {
            tracing::debug!(reason = message, "contact submission rejected");
            return Err(Error::Rejected(message));
        }

        let body = FormsSubmission::new(submission, &self.default_page_uri, &self.page_name);

        self.client
            .submit(target, &body)
            .await
            .inspect_err(|err| match err {
                Error::Upstream { status, body } => {
                    tracing::error!(status, body = %body, "forms api rejected contact submission")
                }
                err => tracing::error!(err = %err, "forms api request failed"),
            })?;

        tracing::info!(
            portal_id = %target.portal_id,
            form_id = %target.form_id,
            "contact submission forwarded"
        );

        Ok(())
    }

    /// Configuration check, validation and forwarding in one call.
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<()> {
        let target = self.target()?;
        self.forward(&target, submission).await
    }
}

#[async_trait]
impl Transport for ContactService {
    async fn send(&self, submission: &ContactSubmission) -> std::result::Result<(), TransportError> {
        Ok(self.submit(submission).await?)
    }
}
