//! HubSpot Forms API submission.

use serde::Serialize;

use crate::{ContactSubmission, Error, Field, Result};

pub const DEFAULT_ENDPOINT: &str = "https://api.hsforms.com";
pub const DEFAULT_PAGE_NAME: &str = "Contact";

/// Destination property for each forwarded form field.
pub const FIELD_MAP: [(Field, &str); 8] = [
    (Field::FirstName, "firstname"),
    (Field::LastName, "lastname"),
    (Field::Email, "email"),
    (Field::Title, "jobtitle"),
    (Field::Company, "0-2/name"),
    (Field::CompanySize, "numemployees"),
    (Field::Source, "how_did_you_hear_about_us_"),
    (Field::Message, "what_are_you_looking_to_solve_"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormsField {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormsContext {
    pub page_uri: String,
    pub page_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormsSubmission {
    pub fields: Vec<FormsField>,
    pub context: FormsContext,
}

impl FormsSubmission {
    pub fn new(
        submission: &ContactSubmission,
        default_page_uri: &str,
        page_name: impl Into<String>,
    ) -> Self {
        let fields = FIELD_MAP
            .iter()
            .map(|&(field, name)| FormsField {
                name,
                value: submission.get(field).trim().to_owned(),
            })
            .collect();

        let page_uri = submission
            .page_uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
            .unwrap_or(default_page_uri)
            .to_owned();

        Self {
            fields,
            context: FormsContext {
                page_uri,
                page_name: page_name.into(),
            },
        }
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

/// Account and form the submission is delivered to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTarget {
    pub portal_id: String,
    pub form_id: String,
}

#[derive(Clone, Debug)]
pub struct FormsClient {
    http: reqwest::Client,
    endpoint: String,
}

impl FormsClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn url(&self, target: &FormTarget) -> String {
        format!(
            "{}/submissions/v3/integration/submit/{}/{}",
            self.endpoint.trim_end_matches('/'),
            target.portal_id,
            target.form_id
        )
    }

    /// Posts `body` once. Any non-2xx answer is an [`Error::Upstream`].
    pub async fn submit(&self, target: &FormTarget, body: &FormsSubmission) -> Result<()> {
        let res = self.http.post(self.url(target)).json(body).send().await?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let body = res.text().await.unwrap_or_default();

        Err(Error::Upstream {
            status: status.as_u16(),
            body,
        })
    }
}

impl Default for FormsClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
