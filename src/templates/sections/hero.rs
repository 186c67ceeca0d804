// src/templates/sections/hero.rs

use crate::domain::content::{ButtonVariant, FilterInput, HeroData, Icon};
use crate::templates::components::icons::icon;
use maud::{html, Markup};

fn button_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => "bg-[#E50914] text-white",
        ButtonVariant::Secondary => "bg-white/20 backdrop-blur-md text-white",
        ButtonVariant::Outline => "border border-white text-white",
    }
}

/// Landing banner. The search filters and chips are decorative: nothing
/// submits or filters.
pub fn hero(data: &HeroData) -> Markup {
    let background = format!(
        "background-image: linear-gradient(0deg, rgba(0,0,0,0.12), rgba(0,0,0,0.12)), \
         linear-gradient(360deg, #1A1A1A -1.25%, rgba(26,26,26,0.02) 41.94%), url({})",
        data.background_image
    );

    html! {
        section class="relative w-full h-[720px]" {
            div class="absolute inset-0 bg-cover bg-center" style=(background) {}
            div class="relative z-10 flex flex-col justify-between h-full px-4 md:px-8 lg:px-16 pt-20 md:pt-32 pb-8 md:pb-16" {
                div class="flex flex-col gap-4" {
                    @if let Some(badge) = data.badge {
                        div class="w-fit bg-[#E50914] rounded-full px-4 py-1" {
                            span class="text-white text-xs font-semibold leading-5" { (badge) }
                        }
                    }
                    h1 class="text-white text-4xl md:text-5xl lg:text-[60px] font-semibold leading-[1.1] w-full md:w-3/4" {
                        @for (i, line) in data.title.split('\n').enumerate() {
                            @if i > 0 { br; }
                            (line)
                        }
                    }
                    div class="flex flex-wrap items-center gap-4 md:gap-6 mt-4" {
                        @for chip in data.info_chips {
                            div class="flex items-center gap-2" {
                                (icon(chip.icon, "text-white w-4 h-4"))
                                span class="text-[#F7F7F7] text-sm md:text-lg leading-6" { (chip.text) }
                            }
                        }
                    }
                    div class="flex flex-wrap gap-3 md:gap-4 mt-6" {
                        @for cta in data.cta_buttons {
                            a href=(cta.href)
                                class={ "px-4 md:px-6 py-2 md:py-3 rounded-lg font-medium text-sm md:text-base " (button_class(cta.variant)) } {
                                (cta.text)
                            }
                        }
                    }
                }
                div class="w-full max-w-[1312px] mx-auto mt-8 md:mt-0" {
                    div class="flex flex-wrap gap-3 md:gap-4" {
                        @for filter in data.search_filters {
                            div class="relative flex-1 min-w-[200px]" {
                                div class="absolute inset-y-0 left-0 flex items-center pl-3 pointer-events-none" {
                                    (icon(filter.icon, "text-[#9CA3AF] w-4 h-4"))
                                }
                                @match filter.input {
                                    FilterInput::Select(options) => {
                                        select id=(filter.id) aria-label=(filter.label)
                                            class="w-full h-12 pl-10 pr-10 bg-[#333333] text-white rounded-lg appearance-none text-sm focus:outline-none" {
                                            option value="" disabled selected { (filter.placeholder) }
                                            @for option in options {
                                                option value=(option) { (option) }
                                            }
                                        }
                                        div class="absolute inset-y-0 right-0 flex items-center pr-3 pointer-events-none" {
                                            (icon(Icon::Dropdown, "text-[#9CA3AF] w-3 h-3"))
                                        }
                                    }
                                    FilterInput::Text => {
                                        input id=(filter.id) type="text" aria-label=(filter.label)
                                            placeholder=(filter.placeholder)
                                            class="w-full h-12 pl-10 pr-4 bg-[#333333] text-white rounded-lg text-sm placeholder-[#9CA3AF] focus:outline-none";
                                    }
                                }
                            }
                        }
                        button type="button" class="flex items-center justify-center gap-2 px-4 md:px-6 py-3 text-white rounded-lg bg-[#E50914] text-sm font-medium whitespace-nowrap" {
                            (icon(Icon::Search, "w-4 h-4"))
                            "Search"
                        }
                    }
                    @if !data.filter_chips.is_empty() {
                        div class="flex flex-wrap justify-center gap-2 mt-4" {
                            @for chip in data.filter_chips {
                                @let class = if chip.active {
                                    "bg-white text-[#0A0A0A]"
                                } else {
                                    "bg-white/10 text-white hover:bg-white/20"
                                };
                                button type="button" data-chip=(chip.id)
                                    class={ "px-3 md:px-4 py-1.5 md:py-2 text-xs md:text-sm font-medium rounded-full transition-colors " (class) } {
                                    (chip.label)
                                }
                            }
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
    use crate::catalog::chrome::HERO;

    #[test]
    fn title_lines_are_split_on_newlines() {
        let html = hero(&HERO).into_string();
        assert!(html.contains("The Skyline<br>Residences"));
    }

    #[test]
    fn only_the_active_chip_is_highlighted() {
        let html = hero(&HERO).into_string();
        assert_eq!(html.matches("bg-white text-[#0A0A0A]").count(), 1);
        assert_eq!(html.matches("data-chip=").count(), HERO.filter_chips.len());
    }
}
