// src/inquiry/sink.rs

use thiserror::Error;
use tracing::info;

use crate::inquiry::form::Inquiry;

#[derive(Debug, Error)]
pub enum SubmitError {
    // Only backend sinks fail; `LogInquirySink` never does.
    #[allow(dead_code)]
    #[error("inquiry backend unavailable: {0}")]
    Unavailable(String),
}

/// Where completed inquiries go. No backend ships with the site; this is the
/// seam one plugs into.
pub trait InquirySink: Send + Sync {
    fn submit(&self, inquiry: &Inquiry) -> Result<(), SubmitError>;
}

/// Default sink: logs the inquiry and drops it.
#[derive(Debug, Default)]
pub struct LogInquirySink;

impl InquirySink for LogInquirySink {
    fn submit(&self, inquiry: &Inquiry) -> Result<(), SubmitError> {
        info!(
            name = %inquiry.full_name,
            email = %inquiry.email,
            phone = %inquiry.phone,
            interest = inquiry.interest.slug(),
            "inquiry received (not forwarded)"
        );
        Ok(())
    }
}
