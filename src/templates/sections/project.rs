// src/templates/sections/project.rs
//
// Sections of the project detail page, top to bottom.

use crate::catalog::project_page::{MAP_LOCATION_TAGLINE, MAP_LOCATION_TITLE};
use crate::domain::content::{DevelopmentShowcase, Highlight, Icon, ProjectPageContent, ProximityHighlight};
use crate::domain::{GalleryImage, Project, RelatedProject};
use crate::inquiry::InquiryDraft;
use crate::state::map::MapConfig;
use crate::state::GalleryTab;
use crate::templates::components::icons::{highlight_icon, icon};
use crate::templates::components::{card_row, inquiry_form, map_widget, BadgePosition, SeeAll};
use maud::{html, Markup};

pub const GALLERY_ID: &str = "project-gallery";
pub const INQUIRY_ID: &str = "inquiry";

pub fn gallery_path(project_id: &str) -> String {
    format!("/projects/{project_id}/gallery")
}

pub fn map_info_path(project_id: &str) -> String {
    format!("/projects/{project_id}/map/info")
}

pub fn project_hero(project: &Project, content: &ProjectPageContent) -> Markup {
    let background = format!(
        "background-image: linear-gradient(180deg, rgba(0,0,0,0) 0%, #000 100%), url({}); background-size: cover; background-position: center",
        project.image
    );

    html! {
        section class="project-hero relative w-full min-h-[640px] flex items-end" {
            div class="absolute inset-0" style=(background) role="img" aria-label=(project.title) {}
            div class="relative z-10 w-full max-w-[1440px] mx-auto px-4 md:px-16 pb-16 pt-32" {
                div class="max-w-[640px] bg-white/10 backdrop-blur-md rounded-2xl p-8 flex flex-col gap-4" {
                    div class="w-fit bg-[#E50914] rounded-full px-4 py-1 text-xs font-semibold" {
                        (content.status_badge)
                    }
                    h1 class="text-4xl md:text-5xl font-semibold text-white" { (project.title) }
                    div class="flex flex-wrap gap-6 text-[#F7F7F7]" {
                        div class="flex items-center" {
                            (icon(Icon::Location, "w-4 h-4 mr-2"))
                            span { (project.location) }
                        }
                        div { span class="font-medium" { (project.price) } }
                        div { span { (project.bhk) " " (content.apartments_label) } }
                    }
                    div class="flex flex-wrap gap-4 mt-2" {
                        a href={ "#" (INQUIRY_ID) } class="bg-[#E50914] text-white px-6 py-3 rounded-lg font-medium" {
                            (content.contact_developer)
                        }
                        a href={ "#" (GALLERY_ID) } class="bg-white/20 text-white px-6 py-3 rounded-lg font-medium" {
                            (content.view_gallery)
                        }
                    }
                }
            }
        }
    }
}

pub fn key_highlights(highlights: &[Highlight]) -> Markup {
    html! {
        section class="w-full bg-black overflow-hidden" {
            div class="max-w-[1440px] w-full mx-auto px-4 sm:px-6 lg:px-8 py-16" {
                h2 class="text-2xl font-medium text-white" { "Key Highlights" }
                div class="relative w-full mt-8" {
                    div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-6" {
                        @for item in highlights {
                            div class="highlight bg-[#0A0A0A] rounded-lg p-6 shadow-lg flex flex-col gap-4" {
                                div class="w-12 h-12 rounded-full bg-[rgba(229,9,20,0.1)] flex items-center justify-center" {
                                    (highlight_icon(item.icon))
                                }
                                div {
                                    h3 class="text-lg font-medium text-white mb-1" { (item.title) }
                                    p class="text-sm text-[#E0E0E0]" { (item.description) }
                                }
                            }
                        }
                    }
                    div class="absolute right-0 top-0 w-20 h-full bg-gradient-to-l from-black to-transparent pointer-events-none z-10" {}
                }
            }
        }
    }
}

/// Gallery with its tab bar. The tabs swap this whole section through
/// `GET /projects/{id}/gallery?tab=`.
pub fn gallery(project_id: &str, images: &[GalleryImage], active: GalleryTab) -> Markup {
    let path = gallery_path(project_id);

    html! {
        section id=(GALLERY_ID) class="w-full bg-black" data-tab=(active.slug()) {
            div class="max-w-[1440px] mx-auto px-4 md:px-16 py-20 flex flex-col gap-8" {
                div class="flex justify-between items-center" {
                    h2 class="text-2xl font-medium text-white" { "Gallery" }
                    div class="flex gap-4" role="tablist" {
                        @for tab in GalleryTab::ALL {
                            @let class = if tab == active {
                                "text-white border-b-2 border-white"
                            } else {
                                "text-white/50"
                            };
                            button type="button" role="tab"
                                class={ "px-4 py-2 " (class) }
                                aria-selected=(if tab == active { "true" } else { "false" })
                                hx-get={ (path) "?tab=" (tab.slug()) }
                                hx-target={ "#" (GALLERY_ID) }
                                hx-swap="outerHTML" {
                                span class="text-lg" { (tab.label()) }
                            }
                        }
                    }
                }
                div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6" {
                    @for image in images {
                        div class="gallery-item relative h-48 rounded overflow-hidden" {
                            img src=(image.src) alt=(image.alt) class="w-full h-full object-cover" loading="lazy";
                            div class="absolute inset-0 bg-black/30 flex items-end p-4 hover:bg-black/50 transition-colors" {
                                span class="text-white font-medium" { (image.category) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn location_advantages(
    project_id: &str,
    map: &MapConfig,
    proximity: &[ProximityHighlight],
) -> Markup {
    html! {
        section class="w-full bg-black px-4 md:px-16 py-20" {
            div class="flex flex-col gap-6 max-w-[1280px] mx-auto" {
                h2 class="text-2xl font-medium text-white" { "Location & Advantages" }
                div class="flex flex-col lg:flex-row gap-8" {
                    div class="relative w-full lg:w-[66%] h-[372px] rounded-lg overflow-hidden bg-[#E8E8E8]" {
                        (map_widget(map, &map_info_path(project_id)))
                        div class="location-card absolute bottom-4 right-4 bg-[#565656] rounded-xl p-5 w-[320px] shadow-lg z-10 flex gap-4" {
                            div class="w-[100px] h-[84px] rounded-lg bg-gray-400 flex-shrink-0" {}
                            div {
                                h3 class="text-white text-lg font-semibold mb-1" { (MAP_LOCATION_TITLE) }
                                p class="text-[#F7F7F7] text-sm" { (MAP_LOCATION_TAGLINE) }
                            }
                        }
                    }
                    div class="w-full lg:w-[32%] bg-[#0A0A0A] rounded-lg p-8" {
                        h3 class="text-white text-xl font-semibold mb-6" { "Proximity Highlights" }
                        div class="space-y-4" {
                            @for item in proximity {
                                div class="flex gap-3" {
                                    div class="mt-0.5" { (icon(Icon::Location, "w-4 h-4 text-[#FF4C4C]")) }
                                    div class=[item.multi_line.then_some("leading-tight")] {
                                        h4 class="text-white text-base font-medium" { (item.title) }
                                        p class="text-[#A5A5A5] text-sm" { (item.description) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn featured_development(showcase: &DevelopmentShowcase) -> Markup {
    let [(left, left_alt), (right, right_alt)] = showcase.images;

    html! {
        section class="w-full bg-black px-4 md:px-16 py-20" {
            div class="flex flex-col gap-6" {
                div class="flex flex-col gap-2" {
                    h2 class="text-2xl font-medium text-white" { (showcase.heading) }
                    p class="text-[#F3F3F3] text-lg font-light leading-relaxed max-w-[1312px]" { (showcase.body) }
                }
                div class="flex flex-col md:flex-row gap-6 w-full md:h-[420px]" {
                    div class="w-full md:w-[60%] h-full rounded-lg overflow-hidden" {
                        img src=(left) alt=(left_alt) class="w-full h-full object-cover" loading="lazy";
                    }
                    div class="w-full md:w-[40%] h-full rounded-lg overflow-hidden" {
                        img src=(right) alt=(right_alt) class="w-full h-full object-cover" loading="lazy";
                    }
                }
            }
        }
    }
}

pub fn inquiry_section(project_id: &str, draft: &InquiryDraft, error: Option<&str>) -> Markup {
    html! {
        section id=(INQUIRY_ID) class="flex flex-col items-center py-10 px-4 md:px-40 w-full bg-[#0A0A0A]" {
            div class="w-full max-w-[1120px] bg-[#141414] rounded-2xl p-10 md:p-20" {
                div class="flex flex-col items-center gap-1 mb-10" {
                    h2 class="text-2xl font-medium text-white text-center" { "Inquire Now" }
                    p class="text-[#E0E0E0] text-base text-center" {
                        "Schedule a site visit or request more information"
                    }
                }
                (inquiry_form(project_id, draft, error))
            }
        }
    }
}

pub fn related_projects(projects: &[RelatedProject]) -> Markup {
    html! {
        section class="w-full bg-black px-4 md:px-16 py-20" {
            (card_row("Related Projects", SeeAll::Unwired, projects, BadgePosition::Bottom))
        }
    }
}
