// src/templates/components/inquiry_form.rs

use crate::inquiry::{InquiryDraft, Interest};
use maud::{html, Markup};

pub const FORM_ID: &str = "inquiry-form";
pub const SUBMIT_FAILED_TEXT: &str = "We could not send your enquiry. Please try again.";

const INPUT: &str = "bg-[#0A0A0A] text-[#E0E0E0] text-sm p-3.5 rounded-lg border border-[#333] focus:outline-none focus:ring-2 focus:ring-red-600";

/// The inquiry form. `draft` values are echoed back so a rejected
/// submission keeps what was typed.
pub fn inquiry_form(project_id: &str, draft: &InquiryDraft, error: Option<&str>) -> Markup {
    html! {
        form id=(FORM_ID) class="flex flex-col gap-6"
            method="post"
            action={ "/projects/" (project_id) "/inquiry" }
            hx-post={ "/projects/" (project_id) "/inquiry" }
            hx-target="this"
            hx-swap="outerHTML" {
            @if let Some(message) = error {
                p class="form-error text-sm text-[#E50914]" role="alert" { (message) }
            }
            div class="flex flex-col md:flex-row gap-6" {
                label class="flex-1 flex flex-col gap-2 text-sm text-white" {
                    "Full Name"
                    input type="text" name="fullName" placeholder="Enter your full name" class=(INPUT)
                        value=(draft.full_name) required;
                }
                label class="flex-1 flex flex-col gap-2 text-sm text-white" {
                    "Email Address"
                    input type="email" name="email" placeholder="Enter your email address" class=(INPUT)
                        value=(draft.email) required;
                }
            }
            div class="flex flex-col md:flex-row gap-6" {
                label class="flex-1 flex flex-col gap-2 text-sm text-white" {
                    "Phone Number"
                    input type="tel" name="phone" placeholder="Enter your phone number" class=(INPUT)
                        value=(draft.phone) required;
                }
                label class="flex-1 flex flex-col gap-2 text-sm text-white" {
                    "Interested In"
                    select name="interest" class={ (INPUT) " appearance-none" } required {
                        option value="" disabled selected[draft.interest.is_empty()] { "Select unit type" }
                        @for interest in Interest::ALL {
                            option value=(interest.slug()) selected[draft.interest == interest.slug()] {
                                (interest.label())
                            }
                        }
                    }
                }
            }
            label class="flex items-start gap-3 mt-2 text-sm text-[#A5A5A5]" {
                input type="checkbox" name="agree" value="on" class="mt-1 h-5 w-5" checked[draft.agree] required;
                span { "I agree to receive communications about the real estate universe Group and other projects from the developer." }
            }
            button type="submit" class="mt-4 bg-[#E50914] text-white py-3 px-6 rounded-lg font-medium text-base hover:bg-red-700 transition-colors duration-200" {
                "Submit Enquiry"
            }
        }
    }
}

pub fn inquiry_thanks(name: &str) -> Markup {
    html! {
        div id=(FORM_ID) class="inquiry-thanks text-center py-8" {
            h3 class="text-xl font-semibold mb-2" { "Thank you, " (name) "!" }
            p class="text-gray-300" { "Our team will get back to you shortly." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_draft_has_placeholder_selected() {
        let html = inquiry_form("1", &InquiryDraft::default(), None).into_string();
        assert!(html.contains("hx-post=\"/projects/1/inquiry\""));
        assert!(html.contains("<option value=\"\" disabled selected>"));
        assert!(!html.contains("form-error"));
        assert!(!html.contains("checked"));
    }

    #[test]
    fn rejected_draft_keeps_values_and_shows_message() {
        let draft = InquiryDraft {
            full_name: "Jane Doe".into(),
            email: "".into(),
            phone: "5551234567".into(),
            interest: "3bhk".into(),
            agree: true,
        };
        let html = inquiry_form("1", &draft, Some("Email address is required")).into_string();
        assert!(html.contains("value=\"Jane Doe\""));
        assert!(html.contains("value=\"5551234567\""));
        assert!(html.contains("<option value=\"3bhk\" selected>3 BHK</option>"));
        assert!(html.contains("Email address is required"));
        assert!(html.contains("checked"));
    }
}
