// src/catalog/chrome.rs

use crate::domain::content::*;

pub const HERO: HeroData = HeroData {
    background_image: "/Hero.png",
    badge: Some("TOP PROJECT IN AHM"),
    title: "The Skyline\nResidences",
    info_chips: &[
        InfoChip {
            icon: Icon::Location,
            text: "Shantigram",
        },
        InfoChip {
            icon: Icon::Price,
            text: "£1.2M - £4.5M",
        },
        InfoChip {
            icon: Icon::Bedroom,
            text: "1-4 Bedroom Apartments",
        },
    ],
    cta_buttons: &[
        CtaButton {
            text: "View Project",
            variant: ButtonVariant::Primary,
            href: "#",
        },
        CtaButton {
            text: "Request Info",
            variant: ButtonVariant::Secondary,
            href: "#",
        },
    ],
    search_filters: &[
        SearchFilter {
            id: "location",
            label: "Location",
            placeholder: "Search by location",
            icon: Icon::Search,
            input: FilterInput::Text,
        },
        SearchFilter {
            id: "property-type",
            label: "Property Type",
            placeholder: "Select property type",
            icon: Icon::Dropdown,
            input: FilterInput::Select(&["Apartment", "Villa", "Penthouse", "Townhouse"]),
        },
        SearchFilter {
            id: "price-range",
            label: "Price Range",
            placeholder: "Select price range",
            icon: Icon::Dropdown,
            input: FilterInput::Select(&["£0 - £500,000", "£500,000 - £1,000,000", "£1,000,000+"]),
        },
    ],
    filter_chips: &[
        chip("more-filters", "More Filters", false),
        chip("studio", "Studio - 5+ BHK", false),
        chip("price-asc", "Price: Low to High", false),
        chip("ready-to-move", "Ready to Move", false),
        chip("rera-approved", "RERA Approved", false),
        chip("new-launch", "New Launch", true),
        chip("furnished", "Furnished", false),
        chip("semi-furnished", "Semi-Furnished", false),
        chip("unfurnished", "Unfurnished", false),
    ],
};

const fn chip(id: &'static str, label: &'static str, active: bool) -> FilterChip {
    FilterChip { id, label, active }
}

pub const NAVIGATION: NavigationData = NavigationData {
    logo: Logo {
        src: "/Logo.png",
        alt: "THE REAL ESTATE UNIVERSE",
        width: 178.57,
        height: 60.0,
    },
    links: &[
        LinkItem {
            label: "Residential",
            href: "/residential",
        },
        LinkItem {
            label: "Commercial",
            href: "/commercial",
        },
        LinkItem {
            label: "Land",
            href: "/land",
        },
        LinkItem {
            label: "Luxury",
            href: "/luxury",
        },
        LinkItem {
            label: "Articles",
            href: "/articles",
        },
    ],
    search_placeholder: "Search properties...",
};

const fn social(label: &'static str, icon: Icon) -> SocialLink {
    SocialLink {
        label,
        href: "#",
        icon,
        bg_color: "#333333",
    }
}

pub const FOOTER: FooterData = FooterData {
    logo: Logo {
        src: "/Logo.png",
        alt: "THE REAL ESTATE UNIVERSE",
        width: 162.67,
        height: 60.0,
    },
    description: "Discover your dream property with our real estate platform. \
                  Browse, explore, and find your perfect home.",
    social_links: &[
        social("Facebook", Icon::Facebook),
        social("Twitter", Icon::Twitter),
        social("Instagram", Icon::Instagram),
        social("LinkedIn", Icon::Linkedin),
    ],
    quick_links: &[
        LinkItem {
            label: "Home",
            href: "#",
        },
        LinkItem {
            label: "Properties",
            href: "#",
        },
        LinkItem {
            label: "Contact Us",
            href: "#",
        },
        LinkItem {
            label: "Blog",
            href: "#",
        },
    ],
    contact_info: &[
        ContactInfo {
            icon: Icon::Location,
            text: "919, Swati Clover, Shilaj Circle, S.P. Ring Road, Thaltej, Ahmedabad, Gujarat – 380054",
            kind: ContactKind::Address,
        },
        ContactInfo {
            icon: Icon::Phone,
            text: "063599 26999",
            kind: ContactKind::Phone,
        },
        ContactInfo {
            icon: Icon::Email,
            text: "connect@sakargroup.in",
            kind: ContactKind::Email,
        },
        ContactInfo {
            icon: Icon::Time,
            text: "Mon-Fri: 9AM-6PM",
            kind: ContactKind::Hours,
        },
    ],
    copyright: "© 2025 the real estate universe. All rights reserved.",
    legal_links: &[
        LinkItem {
            label: "Privacy Policy",
            href: "#",
        },
        LinkItem {
            label: "Terms of Service",
            href: "#",
        },
    ],
};
