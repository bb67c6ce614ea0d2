use anyhow::{Result, bail};
use kairos_contact::{ContactSubmission, FormController, HttpTransport, SubmitOutcome};

/// Contact form answers, one flag per field.
#[derive(clap::Args, Debug)]
pub struct SubmitArgs {
    /// Contact endpoint to post to (defaults to the configured site)
    #[arg(long)]
    pub endpoint: Option<String>,

    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    /// Job title
    #[arg(long)]
    pub title: String,

    /// Work email
    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub company: String,

    /// Company size band, e.g. 25-50 or 1000+
    #[arg(long)]
    pub company_size: String,

    /// How did you hear about us?
    #[arg(long)]
    pub source: Option<String>,

    /// What are you looking to solve?
    #[arg(long)]
    pub message: String,
}

impl From<SubmitArgs> for ContactSubmission {
    fn from(args: SubmitArgs) -> Self {
        ContactSubmission {
            first_name: args.first_name,
            last_name: args.last_name,
            title: args.title,
            email: args.email,
            company: args.company,
            company_size: args.company_size,
            source: args.source,
            message: args.message,
            ..Default::default()
        }
    }
}

/// Sends one contact submission to a running site through its JSON endpoint.
pub async fn submit(config: crate::config::Config, args: SubmitArgs) -> Result<()> {
    let endpoint = args
        .endpoint
        .clone()
        .unwrap_or_else(|| config.site.url("/api/contact"));
    let transport = HttpTransport::new(&endpoint);
    let mut form = FormController::with_values(args.into());

    match form
        .submit(&transport, Some(config.site.url("/contact")))
        .await
    {
        SubmitOutcome::Sent => {
            tracing::info!(endpoint = %transport.url(), "Message received.");
            Ok(())
        }
        SubmitOutcome::Invalid => {
            for (field, message) in form.errors().iter() {
                tracing::error!(field = %field, "{message}");
            }
            bail!("submission is invalid")
        }
        SubmitOutcome::Failed => bail!(
            "{}: {}",
            transport.url(),
            form.failure()
                .unwrap_or("Something went wrong. Please try again or reach out directly.")
        ),
        outcome => bail!("submission not sent: {outcome:?}"),
    }
}
