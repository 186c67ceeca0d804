// src/inquiry/form.rs

use thiserror::Error;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interest {
    OneBhk,
    TwoBhk,
    ThreeBhk,
    FourBhk,
}

impl Interest {
    pub const ALL: [Interest; 4] = [
        Interest::OneBhk,
        Interest::TwoBhk,
        Interest::ThreeBhk,
        Interest::FourBhk,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Interest::OneBhk => "1bhk",
            Interest::TwoBhk => "2bhk",
            Interest::ThreeBhk => "3bhk",
            Interest::FourBhk => "4bhk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interest::OneBhk => "1 BHK",
            Interest::TwoBhk => "2 BHK",
            Interest::ThreeBhk => "3 BHK",
            Interest::FourBhk => "4 BHK",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Interest::ALL.into_iter().find(|i| i.slug() == slug)
    }
}

/// A complete inquiry, ready to hand to an `InquirySink`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub interest: Interest,
    pub agree: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("unknown unit type {0:?}")]
    InvalidInterest(String),
}

/// Field values as typed, before anything is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub agree: bool,
}

impl InquiryDraft {
    /// Parse an `application/x-www-form-urlencoded` body. Unknown keys are ignored;
    /// a checkbox is checked when its key is present with any non-empty value.
    pub fn from_form(body: &[u8]) -> Self {
        let mut draft = InquiryDraft::default();
        for (key, value) in form_urlencoded::parse(body) {
            match key.as_ref() {
                "fullName" => draft.full_name = value.into_owned(),
                "email" => draft.email = value.into_owned(),
                "phone" => draft.phone = value.into_owned(),
                "interest" => draft.interest = value.into_owned(),
                "agree" => draft.agree = !value.is_empty() && value != "false",
                _ => {}
            }
        }
        draft
    }

    /// Required-field check only. Values are trimmed; no format checks beyond that.
    pub fn validate(&self) -> Result<Inquiry, InquiryError> {
        let full_name = required(&self.full_name, "Full name")?;
        let email = required(&self.email, "Email address")?;
        let phone = required(&self.phone, "Phone number")?;
        let interest_slug = required(&self.interest, "Unit type")?;
        let interest = Interest::from_slug(&interest_slug)
            .ok_or(InquiryError::InvalidInterest(interest_slug))?;
        if !self.agree {
            return Err(InquiryError::MissingField("Consent"));
        }

        Ok(Inquiry {
            full_name,
            email,
            phone,
            interest,
            agree: true,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, InquiryError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(InquiryError::MissingField(field));
    }
    Ok(v.to_string())
}
