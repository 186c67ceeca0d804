pub mod form;
pub mod sink;

pub use form::{InquiryDraft, Interest};
pub use sink::{InquirySink, LogInquirySink};
