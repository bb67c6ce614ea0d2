use std::str::FromStr;

use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use kairos_contact::{
    CompanySize, ContactSubmission, Field, FormController, FormState, Source, SubmitOutcome,
    validation::MESSAGE_MAX,
};
use strum::VariantArray;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub form: FormController,
}

impl ContactTemplate {
    fn field(name: &str) -> Option<Field> {
        Field::from_str(name).ok()
    }

    pub fn value(&self, name: &str) -> &str {
        Self::field(name)
            .map(|field| self.form.value(field))
            .unwrap_or_default()
    }

    /// Error shown under the field once it has been touched.
    pub fn error(&self, name: &str) -> Option<&'static str> {
        Self::field(name).and_then(|field| self.form.visible_error(field))
    }

    pub fn field_class(&self, name: &str) -> &'static str {
        match (
            Self::field(name).is_some_and(|field| self.form.is_touched(field)),
            self.error(name),
        ) {
            (true, Some(_)) => "input input-invalid",
            (true, None) => "input input-valid",
            _ => "input",
        }
    }

    pub fn succeeded(&self) -> bool {
        self.form.state() == FormState::Success
    }

    pub fn failed(&self) -> bool {
        self.form.state() == FormState::Error
    }

    pub fn message_length(&self) -> usize {
        self.form.values().message.chars().count()
    }

    pub fn message_max(&self) -> usize {
        MESSAGE_MAX
    }

    pub fn company_sizes(&self) -> Vec<SelectOption> {
        let current = self.value("companySize");

        CompanySize::VARIANTS
            .iter()
            .map(|size| SelectOption {
                value: size.as_ref(),
                label: size.label(),
                selected: size.as_ref() == current,
            })
            .collect()
    }

    pub fn sources(&self) -> Vec<SelectOption> {
        let current = self.value("source");

        Source::VARIANTS
            .iter()
            .map(|source| SelectOption {
                value: source.as_ref(),
                label: source.as_ref(),
                selected: source.as_ref() == current,
            })
            .collect()
    }
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(ContactTemplate {
        form: FormController::new(),
    })
}

/// Plain HTML form post, for visitors without JavaScript.
///
/// Runs the same form session the browser would: invalid input re-renders
/// with every error visible, a failed delivery keeps what was typed.
pub async fn action(
    template: Template,
    State(app): State<AppState>,
    Form(input): Form<ContactSubmission>,
) -> impl IntoResponse {
    let page_uri = app.config.site.url("/contact");
    let mut form = FormController::with_values(input);

    let outcome = form.submit(&app.contact, Some(page_uri)).await;

    if outcome == SubmitOutcome::Suppressed {
        tracing::debug!("contact form honeypot filled");
    }

    template.render(ContactTemplate { form })
}
