use crate::domain::content::{ContactKind, FooterData};
use crate::templates::components::icons::icon;
use maud::{html, Markup};

pub fn footer(data: &FooterData) -> Markup {
    html! {
        footer class="bg-[#0A0A0A] text-white pt-12 pb-6 px-4 md:px-8" {
            div class="max-w-7xl mx-auto grid grid-cols-1 md:grid-cols-3 gap-10" {
                div {
                    img src=(data.logo.src) alt=(data.logo.alt)
                        width=(data.logo.width) height=(data.logo.height);
                    p class="mt-4 text-sm text-gray-400 max-w-xs" { (data.description) }
                    div class="flex gap-3 mt-6" {
                        @for social in data.social_links {
                            a href=(social.href) aria-label=(social.label)
                                class="w-9 h-9 rounded-full flex items-center justify-center"
                                style={ "background-color:" (social.bg_color) } {
                                (icon(social.icon, "w-4 h-4"))
                            }
                        }
                    }
                }
                div {
                    h4 class="text-lg font-semibold mb-4" { "Quick Links" }
                    ul class="space-y-2 text-sm text-gray-400" {
                        @for link in data.quick_links {
                            li { a href=(link.href) class="hover:text-white" { (link.label) } }
                        }
                    }
                }
                div {
                    h4 class="text-lg font-semibold mb-4" { "Contact Us" }
                    ul class="space-y-3 text-sm text-gray-400" {
                        @for info in data.contact_info {
                            li class="flex items-start gap-3" {
                                (icon(info.icon, "w-4 h-4 mt-0.5 flex-shrink-0 text-[#E50914]"))
                                @match info.kind {
                                    ContactKind::Email => {
                                        a href={ "mailto:" (info.text) } class="hover:text-white" { (info.text) }
                                    }
                                    ContactKind::Phone => {
                                        a href={ "tel:" (info.text.replace(' ', "")) } class="hover:text-white" { (info.text) }
                                    }
                                    _ => { span { (info.text) } }
                                }
                            }
                        }
                    }
                }
            }
            div class="max-w-7xl mx-auto mt-10 pt-6 border-t border-white/10 flex flex-col md:flex-row justify-between gap-4 text-xs text-gray-500" {
                p { (data.copyright) }
                div class="flex gap-6" {
                    @for link in data.legal_links {
                        a href=(link.href) class="hover:text-white" { (link.label) }
                    }
                }
            }
        }
    }
}
