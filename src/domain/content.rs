// src/domain/content.rs
//
// Page chrome and editorial content: hero, navigation, footer, highlights.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Facebook,
    Twitter,
    Instagram,
    Linkedin,
    Location,
    Phone,
    Email,
    Time,
    Search,
    Dropdown,
    Bedroom,
    Price,
}

#[derive(Debug, Clone, Copy)]
pub struct Logo {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct LinkItem {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub bg_color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Text,
    Email,
    Phone,
    Address,
    Hours,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub icon: Icon,
    pub text: &'static str,
    pub kind: ContactKind,
}

#[derive(Debug, Clone, Copy)]
pub struct InfoChip {
    pub icon: Icon,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy)]
pub struct CtaButton {
    pub text: &'static str,
    pub variant: ButtonVariant,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub enum FilterInput {
    Text,
    Select(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct SearchFilter {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub icon: Icon,
    pub input: FilterInput,
}

/// Decorative filter chip; `active` only changes styling.
#[derive(Debug, Clone, Copy)]
pub struct FilterChip {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct HeroData {
    pub background_image: &'static str,
    pub badge: Option<&'static str>,
    /// Lines are separated by '\n'.
    pub title: &'static str,
    pub info_chips: &'static [InfoChip],
    pub cta_buttons: &'static [CtaButton],
    pub search_filters: &'static [SearchFilter],
    pub filter_chips: &'static [FilterChip],
}

#[derive(Debug, Clone, Copy)]
pub struct NavigationData {
    pub logo: Logo,
    pub links: &'static [LinkItem],
    pub search_placeholder: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct FooterData {
    pub logo: Logo,
    pub description: &'static str,
    pub social_links: &'static [SocialLink],
    pub quick_links: &'static [LinkItem],
    pub contact_info: &'static [ContactInfo],
    pub copyright: &'static str,
    pub legal_links: &'static [LinkItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightIcon {
    Rera,
    Calendar,
    Area,
    OpenSpace,
    Green,
}

#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub icon: HighlightIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ProximityHighlight {
    pub title: &'static str,
    pub description: &'static str,
    pub multi_line: bool,
}

/// Static copy shared by every project detail page.
#[derive(Debug, Clone, Copy)]
pub struct ProjectPageContent {
    pub status_badge: &'static str,
    pub contact_developer: &'static str,
    pub view_gallery: &'static str,
    pub apartments_label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct DevelopmentShowcase {
    pub heading: &'static str,
    pub body: &'static str,
    pub images: [(&'static str, &'static str); 2],
}
