#![allow(dead_code)]

use axum::{Router, body::Body, response::Response};
use http_body_util::BodyExt;
use kairos::{
    AppState, Config,
    config::{HubSpotConfig, LoggingConfig, ServerConfig, SiteConfig},
};
use kairos_contact::ContactSubmission;

pub const PORTAL_ID: &str = "4242";
pub const FORM_ID: &str = "form-1";
pub const SUBMIT_PATH: &str = "/submissions/v3/integration/submit/4242/form-1";

pub fn test_config(endpoint: impl Into<String>) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        site: SiteConfig {
            base_url: "http://localhost:3000".to_owned(),
            ..Default::default()
        },
        hubspot: HubSpotConfig {
            endpoint: endpoint.into(),
            portal_id: Some(PORTAL_ID.to_owned()),
            form_id: Some(FORM_ID.to_owned()),
            ..Default::default()
        },
        logging: LoggingConfig::default(),
    }
}

pub fn unconfigured(endpoint: impl Into<String>) -> Config {
    let mut config = test_config(endpoint);
    config.hubspot.portal_id = None;
    config
}

pub fn create_test_app(config: Config) -> Router {
    kairos::app(AppState::new(config))
}

pub fn valid_submission() -> ContactSubmission {
    ContactSubmission {
        first_name: "Jane".to_owned(),
        last_name: "Smith-Jones".to_owned(),
        title: "VP of Revenue".to_owned(),
        email: "jane@acme.io".to_owned(),
        company: "Acme Corp".to_owned(),
        company_size: "25-50".to_owned(),
        source: Some("LinkedIn".to_owned()),
        message: "Our sales process breaks every time we add a new region.".to_owned(),
        honeypot: None,
        page_uri: Some("http://localhost:3000/contact".to_owned()),
    }
}

pub async fn body_string(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn json_body(value: &impl serde::Serialize) -> Body {
    Body::from(serde_json::to_vec(value).unwrap())
}
