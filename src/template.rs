use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use std::{collections::HashMap, convert::Infallible};

use crate::config::SiteConfig;

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    use time::OffsetDateTime;

    use crate::config::SiteConfig;

    /// CSS classes of a navigation link, marking the current page.
    #[askama::filter_fn]
    pub fn nav_class(href: &str, values: &dyn askama::Values) -> askama::Result<String> {
        let current_path = askama::get_value::<String>(values, "current_path")
            .map(String::as_str)
            .unwrap_or_default();

        let active = match href {
            "/" => current_path == "/",
            href => current_path == href || current_path.starts_with(&format!("{href}/")),
        };

        Ok(if active {
            "nav-link nav-link-active".to_owned()
        } else {
            "nav-link".to_owned()
        })
    }

    /// Site-wide settings by key: `name`, `contact_email`, `base_url`, `year`.
    #[askama::filter_fn]
    pub fn site(key: &str, values: &dyn askama::Values) -> askama::Result<String> {
        if key == "year" {
            return Ok(OffsetDateTime::now_utc().year().to_string());
        }

        let site = askama::get_value::<SiteConfig>(values, "site")?;

        let value = match key {
            "name" => &site.name,
            "contact_email" => &site.contact_email,
            "base_url" => &site.base_url,
            key => {
                return Err(askama::Error::Custom(
                    format!("unknown site key: {key}").into(),
                ));
            }
        };

        Ok(value.to_owned())
    }
}

/// Page renderer with the per-request values shared by every template.
pub struct Template {
    pub current_path: String,
    site: SiteConfig,
}

impl Template {
    pub fn new(current_path: impl Into<String>, site: SiteConfig) -> Self {
        Self {
            current_path: current_path.into(),
            site,
        }
    }

    fn render_with_values<T: askama::Template>(
        &self,
        template: T,
    ) -> Result<String, askama::Error> {
        let mut values: HashMap<&str, Box<dyn std::any::Any>> = HashMap::new();
        values.insert("current_path", Box::new(self.current_path.to_owned()));
        values.insert("site", Box::new(self.site.clone()));

        template.render_with_values(&values)
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_with_status(StatusCode::OK, template)
    }

    pub fn render_with_status<T: askama::Template>(
        &self,
        status: StatusCode,
        template: T,
    ) -> Response {
        match self.render_with_values(template) {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(path = %self.current_path, err = %err, "failed to render template");

                match self.render_with_values(ServerTemplate) {
                    Ok(html) => (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response(),
                    Err(_) => {
                        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
                    }
                }
            }
        }
    }
}

impl FromRequestParts<crate::routes::AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &crate::routes::AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Template::new(
            parts.uri.path(),
            state.config.site.clone(),
        ))
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;
