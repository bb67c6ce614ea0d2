use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum CompanySize {
    #[serde(rename = "1-5")]
    #[strum(serialize = "1-5")]
    UpToFive,
    #[serde(rename = "5-25")]
    #[strum(serialize = "5-25")]
    FiveToTwentyFive,
    #[serde(rename = "25-50")]
    #[strum(serialize = "25-50")]
    TwentyFiveToFifty,
    #[serde(rename = "50-100")]
    #[strum(serialize = "50-100")]
    FiftyToHundred,
    #[serde(rename = "100-500")]
    #[strum(serialize = "100-500")]
    HundredToFiveHundred,
    #[serde(rename = "500-1000")]
    #[strum(serialize = "500-1000")]
    FiveHundredToThousand,
    #[serde(rename = "1000+")]
    #[strum(serialize = "1000+")]
    OverThousand,
}

impl CompanySize {
    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::UpToFive => "1–5 employees",
            CompanySize::FiveToTwentyFive => "5–25 employees",
            CompanySize::TwentyFiveToFifty => "25–50 employees",
            CompanySize::FiftyToHundred => "50–100 employees",
            CompanySize::HundredToFiveHundred => "100–500 employees",
            CompanySize::FiveHundredToThousand => "500–1,000 employees",
            CompanySize::OverThousand => "1,000+ employees",
        }
    }
}

/// "How did you hear about us?" options offered by the contact form.
///
/// The server never validates `source` against this list; it is forwarded as
/// a free-form label.
#[derive(
    EnumString,
    Display,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
pub enum Source {
    LinkedIn,
    Referral,
    Google,
    Podcast,
    #[serde(rename = "Conference / Event")]
    #[strum(serialize = "Conference / Event")]
    ConferenceOrEvent,
    Other,
}
