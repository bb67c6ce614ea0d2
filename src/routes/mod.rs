use axum::{
    Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use kairos_contact::{ContactService, FormsClient};

use crate::template::{NotFoundTemplate, Template};

mod api;
mod contact;
mod health;
mod index;


#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub contact: ContactService,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        let hubspot = &config.hubspot;
        let contact = ContactService::new(
            FormsClient::new(&hubspot.endpoint),
            hubspot.portal_id.clone(),
            hubspot.form_id.clone(),
            config.site.url("/contact"),
        )
        .with_page_name(&hubspot.page_name);

        Self { config, contact }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/api/contact", post(api::contact))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
