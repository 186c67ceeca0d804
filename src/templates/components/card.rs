// src/templates/components/card.rs

use crate::domain::content::Icon;
use crate::domain::{
    Badge, CommercialSpace, Project, RelatedProject, ResidentialSpace, CARD_STATUSES,
    FEATURED_STATUSES,
};
use crate::templates::components::icons::icon;
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgePosition {
    #[default]
    Top,
    Bottom,
}

impl BadgePosition {
    fn class(&self) -> &'static str {
        match self {
            BadgePosition::Top => "top-4",
            BadgePosition::Bottom => "bottom-4",
        }
    }
}

/// One record normalised for the listing card. `descriptor` is the bhk or
/// size line, whichever the domain has.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView<'a> {
    pub href: Option<String>,
    pub title: &'a str,
    pub location: &'a str,
    pub price: &'a str,
    pub descriptor: &'a str,
    pub kind: &'a str,
    pub image: &'a str,
    pub badge: Badge,
}

pub trait ToCard {
    fn to_card(&self) -> CardView<'_>;
}

impl ToCard for Project {
    fn to_card(&self) -> CardView<'_> {
        CardView {
            href: Some(format!("/projects/{}", self.id)),
            title: self.title,
            location: self.location,
            price: self.price,
            descriptor: self.bhk,
            kind: self.kind,
            image: self.image,
            badge: *FEATURED_STATUSES.resolve(self.status),
        }
    }
}

impl ToCard for ResidentialSpace {
    fn to_card(&self) -> CardView<'_> {
        CardView {
            href: None,
            title: self.title,
            location: self.location,
            price: self.price,
            descriptor: self.bhk,
            kind: self.kind,
            image: self.image,
            badge: *CARD_STATUSES.resolve(self.status),
        }
    }
}

impl ToCard for CommercialSpace {
    fn to_card(&self) -> CardView<'_> {
        CardView {
            href: None,
            title: self.title,
            location: self.location,
            price: self.price,
            descriptor: self.size,
            kind: self.kind,
            image: self.image,
            badge: *CARD_STATUSES.resolve(self.status),
        }
    }
}

impl ToCard for RelatedProject {
    // Related projects carry no status; their type goes in the badge.
    fn to_card(&self) -> CardView<'_> {
        CardView {
            href: Some(format!("/projects/{}", self.id)),
            title: self.title,
            location: self.location,
            price: self.price,
            descriptor: self.size,
            kind: self.kind,
            image: self.image,
            badge: Badge {
                label: self.kind,
                class: "bg-white text-black",
            },
        }
    }
}

/// Fixed-size 360x280 listing card.
pub fn listing_card(card: &CardView, position: BadgePosition) -> Markup {
    let body = html! {
        div class="relative w-full h-[160px] bg-gray-800" {
            @if !card.image.is_empty() {
                img src=(card.image) alt=(card.title) class="w-full h-full object-cover" loading="lazy";
            }
            div class={ "absolute left-4 " (position.class()) } {
                span class={ "listing-badge px-2 py-1 text-xs font-medium rounded " (card.badge.class) } {
                    (card.badge.label)
                }
            }
        }
        div class="p-4 flex-1 flex flex-col" {
            h3 class="text-white text-lg font-medium leading-7" { (card.title) }
            div class="flex items-center mt-1 text-[#E0E0E0] text-sm" {
                (icon(Icon::Location, "w-4 h-4 text-[#9CA3AF] mr-1"))
                span { (card.location) }
            }
            div class="mt-2 flex items-center justify-between" {
                span class="text-sm bg-white/10 text-white px-2 py-1 rounded-md" { (card.price) }
                span class="text-sm text-[#E0E0E0]" { (card.descriptor) }
            }
            div class="mt-2 text-sm text-[#E0E0E0]" { (card.kind) }
        }
    };

    let class = "listing-card flex-none w-[300px] sm:w-[360px] h-[280px] bg-[#0A0A0A] rounded-lg shadow-lg overflow-hidden flex flex-col";

    html! {
        @if let Some(href) = &card.href {
            a href=(href) class=(class) { (body) }
        } @else {
            div class=(class) { (body) }
        }
    }
}
