// Inline SVG icons, so the pages need no icon font.

use crate::domain::content::{HighlightIcon, Icon};
use maud::{html, Markup, PreEscaped};

fn path_for(icon: Icon) -> &'static str {
    match icon {
        Icon::Facebook => "M14 8h3V4h-3c-2.8 0-4 1.7-4 4v2H8v4h2v8h4v-8h3l1-4h-4V8.5c0-.3.2-.5.5-.5z",
        Icon::Twitter => "M22 5.8a8 8 0 0 1-2.4.7 4.1 4.1 0 0 0 1.8-2.3 8.3 8.3 0 0 1-2.6 1 4.1 4.1 0 0 0-7 3.7A11.6 11.6 0 0 1 3.4 4.6a4.1 4.1 0 0 0 1.3 5.5 4 4 0 0 1-1.9-.5 4.1 4.1 0 0 0 3.3 4 4.1 4.1 0 0 1-1.8.1 4.1 4.1 0 0 0 3.8 2.8A8.2 8.2 0 0 1 2 18.2 11.6 11.6 0 0 0 8.3 20c7.5 0 11.7-6.2 11.7-11.7v-.5A8.3 8.3 0 0 0 22 5.8z",
        Icon::Instagram => "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zm5 5a5 5 0 1 0 0 10 5 5 0 0 0 0-10zm0 2a3 3 0 1 1 0 6 3 3 0 0 1 0-6zm5.5-3.5a1 1 0 1 0 0 2 1 1 0 0 0 0-2z",
        Icon::Linkedin => "M4 3a2 2 0 1 1 0 4 2 2 0 0 1 0-4zM2 9h4v12H2zm7 0h4v1.7c.6-1 1.9-2 3.9-2 4.1 0 4.1 2.7 4.1 6.1V21h-4v-5.5c0-1.3 0-3-1.9-3s-2.1 1.4-2.1 2.9V21H9z",
        Icon::Location => "M12 2a7 7 0 0 0-7 7c0 5.3 7 13 7 13s7-7.7 7-13a7 7 0 0 0-7-7zm0 9.5a2.5 2.5 0 1 1 0-5 2.5 2.5 0 0 1 0 5z",
        Icon::Phone => "M6.6 10.8a15.1 15.1 0 0 0 6.6 6.6l2.2-2.2a1 1 0 0 1 1-.2 11.4 11.4 0 0 0 3.6.6 1 1 0 0 1 1 1V20a1 1 0 0 1-1 1A17 17 0 0 1 3 4a1 1 0 0 1 1-1h3.5a1 1 0 0 1 1 1c0 1.2.2 2.5.6 3.6a1 1 0 0 1-.3 1z",
        Icon::Email => "M20 4H4a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2zm0 4-8 5-8-5V6l8 5 8-5z",
        Icon::Time => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm0 18a8 8 0 1 1 0-16 8 8 0 0 1 0 16zm.5-13H11v6l5.2 3.2.8-1.3-4.5-2.7z",
        Icon::Search => "M15.5 14h-.8l-.3-.3A6.5 6.5 0 1 0 14 15.5l.3.3v.8l5 5 1.5-1.5zm-6 0a4.5 4.5 0 1 1 0-9 4.5 4.5 0 0 1 0 9z",
        Icon::Dropdown => "M7.4 8.6 12 13.2l4.6-4.6L18 10l-6 6-6-6z",
        Icon::Bedroom => "M7 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6zm12-6h-8v7H3V5H1v15h2v-3h18v3h2v-9a4 4 0 0 0-4-4z",
        Icon::Price => "M14 20H6v-2c1.1 0 2-.9 2-2v-3H6v-2h2V8a4 4 0 0 1 7.5-2l-1.8 1A2 2 0 0 0 10 8v3h4v2h-4v3c0 .7-.2 1.4-.5 2H14z",
    }
}

pub fn icon(icon: Icon, class: &str) -> Markup {
    html! {
        svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"
            class=(class) aria-hidden="true" {
            path d=(path_for(icon)) {}
        }
    }
}

pub fn highlight_icon(kind: HighlightIcon) -> Markup {
    let body = match kind {
        HighlightIcon::Rera => {
            r##"<path d="M12.5 1.5C6.5 1.5 1.5 6.5 1.5 12.5S6.5 23.5 12.5 23.5 23.5 18.5 23.5 12.5 18.5 1.5 12.5 1.5Z" fill="#E50914"/><path d="M12.5 6.5V12.5L17.5 15.5" stroke="white" stroke-width="2" stroke-linecap="round"/>"##
        }
        HighlightIcon::Calendar => {
            r##"<rect x="4.5" y="4.5" width="16" height="16" rx="1" stroke="#E50914" stroke-width="2"/><path d="M16.5 2.5V6.5M8.5 2.5V6.5M4.5 10.5H20.5" stroke="#E50914" stroke-width="2" stroke-linecap="round"/>"##
        }
        HighlightIcon::Area => {
            r##"<path d="M21.5 9.5C21.5 8 20.5 6.5 17.5 6.5H7.5C4.5 6.5 3.5 8 3.5 9.5V19.5C3.5 21 4.5 22.5 7.5 22.5H17.5C20.5 22.5 21.5 21 21.5 19.5Z" stroke="#E50914" stroke-width="2"/><path d="M7.5 6.5V3.5C7.5 3 8 2.5 8.5 2.5H16.5C17 2.5 17.5 3 17.5 3.5V6.5" stroke="#E50914" stroke-width="2"/>"##
        }
        HighlightIcon::OpenSpace => r##"<path d="M12.5 2.5L3.5 12.5H10.5V22.5H14.5V12.5H21.5Z" fill="#E50914"/>"##,
        HighlightIcon::Green => {
            r##"<path d="M22.5 12.5A10 10 0 1 1 15.5 3" stroke="#E50914" stroke-width="2" stroke-linecap="round"/><path d="M22.5 4.5V10.5H16.5M22.5 4.5L12.5 14.5" stroke="#E50914" stroke-width="2" stroke-linecap="round"/>"##
        }
    };

    html! {
        svg width="25" height="25" viewBox="0 0 25 25" fill="none" xmlns="http://www.w3.org/2000/svg" {
            (PreEscaped(body))
        }
    }
}
