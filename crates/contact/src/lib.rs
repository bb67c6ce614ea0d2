mod error;
pub mod form;
pub mod hubspot;
mod service;
mod submission;
pub mod transport;
mod types;
pub mod validation;

pub use error::*;
pub use form::{FormController, FormState, SubmitOutcome};
pub use hubspot::{FormTarget, FormsClient};
pub use service::ContactService;
pub use submission::ContactSubmission;
pub use transport::{HttpTransport, Transport, TransportError};
pub use types::*;
pub use validation::{Field, ValidationResult, validate};
