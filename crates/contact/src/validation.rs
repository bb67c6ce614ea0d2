//! The contact form rule table.
//!
//! Both the server handler and the form controller call [`validate`], so the
//! rules, boundaries and messages below are the only copy of the contract.

use std::{collections::BTreeMap, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{CompanySize, ContactSubmission};

pub const NAME_MIN: usize = 2;
pub const MESSAGE_MIN: usize = 20;
pub const MESSAGE_MAX: usize = 1000;

/// Generic message shared by the honeypot and every unspecific rejection.
pub const INVALID_SUBMISSION: &str = "Invalid submission.";

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());
static RE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'\-.]+$").unwrap());

/// Contact form fields, declared in rule-table order.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Title,
    Email,
    Company,
    CompanySize,
    Source,
    Message,
    Honeypot,
}

impl Field {
    /// Short message the server answers with when this field fails.
    pub fn rejection(&self) -> &'static str {
        match self {
            Field::FirstName => "Invalid first name.",
            Field::LastName => "Invalid last name.",
            Field::Title => "Invalid job title.",
            Field::Email => "Invalid email address.",
            Field::Company => "Invalid company name.",
            Field::CompanySize => "Company size is required.",
            Field::Message => "Message must be between 20 and 1000 characters.",
            Field::Source | Field::Honeypot => INVALID_SUBMISSION,
        }
    }

    fn check(&self, value: &str) -> Option<&'static str> {
        // Any honeypot content counts, whitespace included.
        if *self == Field::Honeypot {
            return (!value.is_empty()).then_some(INVALID_SUBMISSION);
        }

        let value = value.trim();
        match self {
            Field::FirstName => check_name(
                value,
                "First name is required.",
                "Please enter your first name.",
                "First name contains invalid characters.",
            ),
            Field::LastName => check_name(
                value,
                "Last name is required.",
                "Please enter your last name.",
                "Last name contains invalid characters.",
            ),
            Field::Title => check_text(
                value,
                "Job title is required.",
                "Please enter your job title.",
            ),
            Field::Email => {
                if value.is_empty() {
                    Some("Work email is required.")
                } else if !RE_EMAIL.is_match(value) {
                    Some("Please enter a valid email address.")
                } else {
                    None
                }
            }
            Field::Company => check_text(
                value,
                "Company name is required.",
                "Please enter your company name.",
            ),
            Field::CompanySize => CompanySize::from_str(value)
                .is_err()
                .then_some("Please select your company size."),
            Field::Message => {
                let len = value.chars().count();
                if len == 0 {
                    Some("Please tell us what you're looking to solve.")
                } else if len < MESSAGE_MIN {
                    Some("Please provide a bit more detail (20 characters minimum).")
                } else if len > MESSAGE_MAX {
                    Some("Please keep your message under 1000 characters.")
                } else {
                    None
                }
            }
            Field::Source | Field::Honeypot => None,
        }
    }
}

fn check_text(
    value: &str,
    required: &'static str,
    too_short: &'static str,
) -> Option<&'static str> {
    if value.is_empty() {
        Some(required)
    } else if value.chars().count() < NAME_MIN {
        Some(too_short)
    } else {
        None
    }
}

fn check_name(
    value: &str,
    required: &'static str,
    too_short: &'static str,
    invalid: &'static str,
) -> Option<&'static str> {
    check_text(value, required, too_short).or_else(|| (!RE_NAME.is_match(value)).then_some(invalid))
}

/// Per-field errors, ordered like the rule table. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationResult(BTreeMap<Field, &'static str>);

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    /// The single message the server returns for this result.
    ///
    /// A populated honeypot answers with the same generic shape as any other
    /// field so automated callers cannot tell the two apart.
    pub fn rejection(&self) -> Option<&'static str> {
        if self.contains(Field::Honeypot) {
            return Some(Field::Honeypot.rejection());
        }

        self.0.keys().next().map(Field::rejection)
    }
}

/// Runs every rule against `submission`. Fields are checked independently.
pub fn validate(submission: &ContactSubmission) -> ValidationResult {
    ValidationResult(
        Field::VARIANTS
            .iter()
            .filter_map(|field| {
                field
                    .check(submission.get(*field))
                    .map(|message| (*field, message))
            })
            .collect(),
    )
}
