// src/templates/components/navigation.rs
//
// The header re-renders itself through /fragments/nav. Its current state
// travels in the query of every hx-get it issues.

use crate::domain::content::{Icon, NavigationData};
use crate::state::header::SCROLL_THRESHOLD;
use crate::state::HeaderState;
use crate::templates::components::icons::icon;
use maud::{html, Markup};
use url::form_urlencoded;

pub const HEADER_ID: &str = "site-header";

fn flag(on: bool) -> &'static str {
    if on {
        "1"
    } else {
        "0"
    }
}

pub fn nav_url(state: HeaderState, event: &str, to: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("scrolled", flag(state.scrolled))
        .append_pair("menu", flag(state.menu_open))
        .append_pair("event", event);
    if let Some(to) = to {
        query.append_pair("to", to);
    }
    format!("/fragments/nav?{}", query.finish())
}

/// Fires only when the offset lands on the other side of the threshold from
/// what the header currently shows. The fragment endpoint still answers 204
/// for a scroll that changes nothing.
fn scroll_trigger() -> String {
    format!(
        "scroll[(window.scrollY>{SCROLL_THRESHOLD})!=(this.dataset.scrolled=='1')] from:window"
    )
}

pub fn navigation(nav: &NavigationData, state: HeaderState, scroll_locked: bool) -> Markup {
    let surface = if state.scrolled {
        "bg-[#1A1A1A]/95 backdrop-blur-sm shadow-lg"
    } else {
        "bg-transparent"
    };

    html! {
        header id=(HEADER_ID)
            class={ "fixed top-0 left-0 right-0 z-50 transition-colors duration-300 " (surface) }
            data-scrolled=(flag(state.scrolled))
            data-menu=(flag(state.menu_open))
            hx-get=(nav_url(state, "scroll", None))
            hx-trigger=(scroll_trigger())
            hx-vals="js:{y: Math.round(window.scrollY)}"
            hx-target="this"
            hx-swap="outerHTML" {
            @if scroll_locked {
                style { "body{overflow:hidden}" }
            }
            div class="max-w-7xl mx-auto px-4 md:px-8 h-20 flex items-center justify-between" {
                a href="/" class="flex-shrink-0" {
                    img src=(nav.logo.src) alt=(nav.logo.alt)
                        width=(nav.logo.width) height=(nav.logo.height);
                }
                nav class="hidden md:flex items-center gap-8" {
                    @for link in nav.links {
                        a href=(link.href) class="text-white hover:text-[#E50914] transition-colors" { (link.label) }
                    }
                }
                div class="hidden md:flex items-center relative" {
                    input type="search" name="q" placeholder=(nav.search_placeholder)
                        class="bg-white/10 text-white rounded-full pl-4 pr-10 py-2 w-64 placeholder-gray-400 focus:outline-none";
                    (icon(Icon::Search, "w-5 h-5 text-gray-400 absolute right-3"))
                }
                button type="button" class="md:hidden text-white p-2"
                    aria-label="Toggle menu"
                    aria-expanded=(if state.menu_open { "true" } else { "false" })
                    hx-get=(nav_url(state, "toggle", None))
                    hx-target={ "#" (HEADER_ID) }
                    hx-swap="outerHTML" {
                    @if state.menu_open {
                        span class="text-2xl leading-none" { "✕" }
                    } @else {
                        span class="text-2xl leading-none" { "☰" }
                    }
                }
            }
            @if state.menu_open {
                div class="md:hidden fixed inset-0 top-20 bg-[#1A1A1A] px-6 py-8 flex flex-col gap-6" {
                    div class="relative" {
                        input type="search" name="q" placeholder=(nav.search_placeholder)
                            class="bg-white/10 text-white rounded-full pl-4 pr-10 py-3 w-full placeholder-gray-400 focus:outline-none";
                    }
                    @for link in nav.links {
                        a href=(link.href)
                            class="text-white text-lg font-medium"
                            hx-get=(nav_url(state, "link", Some(link.href)))
                            hx-target={ "#" (HEADER_ID) }
                            hx-swap="outerHTML" {
                            (link.label)
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::chrome::NAVIGATION;

    #[test]
    fn urls_carry_current_state() {
        let state = HeaderState {
            scrolled: true,
            menu_open: false,
        };
        assert_eq!(
            nav_url(state, "toggle", None),
            "/fragments/nav?scrolled=1&menu=0&event=toggle"
        );
        assert_eq!(
            nav_url(state, "link", Some("/land")),
            "/fragments/nav?scrolled=1&menu=0&event=link&to=%2Fland"
        );
    }

    #[test]
    fn closed_menu_has_no_panel_and_no_lock() {
        let html = navigation(&NAVIGATION, HeaderState::default(), false).into_string();
        assert!(html.contains("bg-transparent"));
        assert!(!html.contains("overflow:hidden"));
        assert!(!html.contains("event=link"));
        assert!(html.contains("Search properties..."));
    }

    #[test]
    fn open_menu_renders_panel_and_lock() {
        let state = HeaderState {
            scrolled: false,
            menu_open: true,
        };
        let html = navigation(&NAVIGATION, state, true).into_string();
        assert!(html.contains("body{overflow:hidden}"));
        assert_eq!(html.matches("event=link").count(), NAVIGATION.links.len());
        assert!(html.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn scroll_trigger_filters_on_the_threshold_not_on_time() {
        let html = navigation(&NAVIGATION, HeaderState::default(), false).into_string();
        assert!(!html.contains("throttle"));
        assert!(html.contains("scroll[(window.scrollY"));
        assert!(html.contains("10)!=(this.dataset.scrolled=='1')] from:window"));
        assert!(html.contains("data-scrolled=\"0\""));
    }
}
