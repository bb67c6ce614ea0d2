pub const INVALID_REQUEST_BODY: &str = "Invalid request body.";
pub const SERVER_CONFIGURATION_ERROR: &str = "Server configuration error.";
pub const SUBMISSION_FAILED: &str = "Submission failed.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request body is not a contact submission")]
    Malformed,

    #[error("{0}")]
    Rejected(&'static str),

    #[error("forms api is not configured: missing {0}")]
    Configuration(&'static str),

    #[error("forms api responded with {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("forms api request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Message safe to show to the caller. Never carries upstream or
    /// configuration details.
    pub fn public_message(&self) -> &'static str {
        match self {
            Error::Malformed => INVALID_REQUEST_BODY,
            Error::Rejected(message) => message,
            Error::Configuration(_) => SERVER_CONFIGURATION_ERROR,
            Error::Upstream { .. } | Error::Transport(_) => SUBMISSION_FAILED,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Malformed | Error::Rejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_messages_hide_details() {
        let upstream = Error::Upstream {
            status: 400,
            body: r#"{"message":"portal 123 not found"}"#.to_owned(),
        };

        assert_eq!(upstream.public_message(), SUBMISSION_FAILED);
        assert_eq!(
            Error::Configuration("hubspot.portal_id").public_message(),
            SERVER_CONFIGURATION_ERROR
        );
        assert!(!upstream.is_client_error());
        assert!(Error::Malformed.is_client_error());
    }
}
