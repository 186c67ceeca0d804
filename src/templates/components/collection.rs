// src/templates/components/collection.rs

use crate::templates::components::card::{listing_card, BadgePosition, ToCard};
use maud::{html, Markup};

/// Where the "See All" control of a row points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeeAll<'a> {
    /// Rendered but inert.
    #[default]
    Unwired,
    Href(&'a str),
}

fn see_all_control(see_all: SeeAll) -> Markup {
    let class = "px-4 py-2 bg-white/10 hover:bg-white/20 rounded-full text-sm font-medium transition-colors";
    html! {
        @match see_all {
            SeeAll::Unwired => {
                button type="button" class=(class) disabled aria-disabled="true" { "See All" }
            }
            SeeAll::Href(href) => {
                a href=(href) class=(class) { "See All" }
            }
        }
    }
}

/// Heading, See-All control and every item, in input order, inside a
/// horizontally scrolling strip.
pub fn scroll_row<T>(
    heading: &str,
    see_all: SeeAll,
    items: &[T],
    render: impl Fn(&T) -> Markup,
) -> Markup {
    html! {
        div class="w-full" {
            div class="flex justify-between items-center mb-4 md:mb-6" {
                h2 class="text-white text-xl md:text-2xl font-bold" { (heading) }
                (see_all_control(see_all))
            }
            div class="relative" {
                div class="scroll-row overflow-x-auto pb-4 scrollbar-hide" {
                    div class="flex gap-4 md:gap-6 min-w-max" {
                        @for item in items {
                            (render(item))
                        }
                    }
                }
                div class="absolute right-0 top-0 bottom-4 w-24 bg-gradient-to-l from-[#1A1A1A] to-transparent pointer-events-none" {}
            }
        }
    }
}

pub fn card_row<T: ToCard>(
    heading: &str,
    see_all: SeeAll,
    items: &[T],
    position: BadgePosition,
) -> Markup {
    scroll_row(heading, see_all, items, |item| {
        listing_card(&item.to_card(), position)
    })
}
