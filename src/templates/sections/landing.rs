// src/templates/sections/landing.rs
//
// Listing strips and grids of the landing page, top to bottom.

use crate::domain::{Article, CommercialSpace, LocationCollection, Project, ResidentialSpace, TrendingProject};
use crate::templates::components::{card_row, scroll_row, BadgePosition, SeeAll};
use chrono::NaiveDate;
use maud::{html, Markup};

fn section(content: Markup) -> Markup {
    html! {
        section class="w-full bg-[#1A1A1A] py-12 sm:py-16 lg:py-20" {
            div class="max-w-screen-xl mx-auto px-4 sm:px-6 lg:px-8" { (content) }
        }
    }
}

pub fn featured_projects(projects: &[Project]) -> Markup {
    section(card_row(
        "Featured Projects",
        SeeAll::Unwired,
        projects,
        BadgePosition::Bottom,
    ))
}

pub fn residential_spaces(spaces: &[ResidentialSpace]) -> Markup {
    section(card_row(
        "Residential Spaces",
        SeeAll::Unwired,
        spaces,
        BadgePosition::Bottom,
    ))
}

pub fn commercial_spaces(spaces: &[CommercialSpace]) -> Markup {
    section(card_row(
        "Commercial Spaces",
        SeeAll::Unwired,
        spaces,
        BadgePosition::Bottom,
    ))
}

fn location_tile(location: &LocationCollection) -> Markup {
    html! {
        div class="location-tile flex-none w-[260px] h-[200px] sm:w-[310px] sm:h-[240px] rounded-lg shadow-lg overflow-hidden relative group" {
            img src=(location.image) alt=(location.title)
                class="absolute inset-0 w-full h-full object-cover transition-transform duration-300 group-hover:scale-105"
                loading="lazy";
            div class="absolute inset-0 bg-gradient-to-t from-black to-transparent" {}
            div class="absolute left-4 bottom-4 z-10" {
                h3 class="text-white text-base sm:text-lg font-medium" { (location.title) }
                p class="text-[#E0E0E0] text-xs sm:text-sm mt-1" { (location.property_count) " Properties" }
            }
        }
    }
}

pub fn location_collections(locations: &[LocationCollection]) -> Markup {
    section(scroll_row(
        "Location-wise Collections",
        SeeAll::Unwired,
        locations,
        location_tile,
    ))
}

/// Ranked grid, not a scrolling strip.
pub fn trending_projects(projects: &[TrendingProject]) -> Markup {
    section(html! {
        div class="flex flex-col sm:flex-row justify-between items-start sm:items-center mb-6 sm:mb-8" {
            h2 class="text-2xl sm:text-3xl font-bold text-white mb-4 sm:mb-0" { "Top 10 Trending Projects This Week" }
            button type="button" class="text-red-500" disabled aria-disabled="true" { "See All" }
        }
        div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 lg:grid-cols-4 xl:grid-cols-5 gap-4 sm:gap-6" {
            @for project in projects {
                a href={ "/projects/" (project.id) } class="trending-card group relative block w-full h-full overflow-hidden rounded-lg" {
                    div class="relative aspect-[4/3] w-full overflow-hidden" {
                        img src=(project.image) alt=(project.title)
                            class="w-full h-full object-cover transition-transform duration-300 group-hover:scale-105"
                            loading="lazy";
                        div class="rank absolute top-0 left-0 w-8 h-8 bg-red-600 text-white flex items-center justify-center text-sm font-bold" {
                            (project.rank)
                        }
                    }
                    div class="bg-[#262626] p-4" {
                        h3 class="text-white text-lg font-medium truncate" { (project.title) }
                        p class="text-gray-400 text-sm mt-1" { (project.location) }
                    }
                }
            }
        }
    })
}

/// "2024-09-12" → "12 Sep 2024". Anything unparseable is shown as stored.
pub fn display_date(iso: &str) -> String {
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%d %b %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

fn article_card(article: &Article) -> Markup {
    html! {
        article class="article-card flex flex-col w-[300px] sm:w-[360px] lg:w-[418px] flex-shrink-0" {
            div class="relative w-full h-[200px] sm:h-[240px] lg:h-[280px] rounded-lg overflow-hidden" {
                img src=(article.image) alt=(article.title) class="w-full h-full object-cover" loading="lazy";
                span class="absolute top-3 left-3 px-2 py-1 text-xs rounded bg-black/60" { (article.category) }
            }
            div class="mt-4" {
                h3 class="text-white text-base sm:text-lg font-medium leading-snug sm:leading-7" { (article.title) }
                time datetime=(article.date) class="block text-white text-xs sm:text-sm mt-2 underline" {
                    (display_date(article.date))
                }
            }
        }
    }
}

pub fn trending_articles(articles: &[Article]) -> Markup {
    section(scroll_row(
        "Top 10 Trending Articles This Week",
        SeeAll::Unwired,
        articles,
        article_card,
    ))
}
