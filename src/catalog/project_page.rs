// src/catalog/project_page.rs

use crate::domain::content::{
    DevelopmentShowcase, Highlight, HighlightIcon, ProjectPageContent, ProximityHighlight,
};
use crate::domain::{GalleryImage, RelatedProject};

pub const PROJECT_PAGE: ProjectPageContent = ProjectPageContent {
    status_badge: "TOP PROJECT IN AHM",
    contact_developer: "Contact Developer",
    view_gallery: "View Gallery",
    apartments_label: "Apartments",
};

pub const KEY_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: HighlightIcon::Rera,
        title: "RERA Approved",
        description: "Project registered under RERA with ID: PROJ12345",
    },
    Highlight {
        icon: HighlightIcon::Calendar,
        title: "Possession 2026",
        description: "Scheduled completion in Q2 2026",
    },
    Highlight {
        icon: HighlightIcon::Area,
        title: "Carpet Area",
        description: "1579–3265 sqft spacious layouts",
    },
    Highlight {
        icon: HighlightIcon::OpenSpace,
        title: "70% Open Space",
        description: "Abundant green areas and leisure spaces",
    },
    Highlight {
        icon: HighlightIcon::Green,
        title: "Green Building",
        description: "IGBC Gold certified sustainable design",
    },
];

pub const GALLERY_IMAGES: &[GalleryImage] = &[
    GalleryImage {
        id: "1",
        src: "/images/living-room.jpg",
        alt: "Living Room",
        category: "Living Room",
    },
    GalleryImage {
        id: "2",
        src: "/images/master-bedroom.jpg",
        alt: "Master Bedroom",
        category: "Master Bedroom",
    },
    GalleryImage {
        id: "3",
        src: "/images/kitchen.jpg",
        alt: "Kitchen",
        category: "Kitchen",
    },
    GalleryImage {
        id: "4",
        src: "/images/bathroom.jpg",
        alt: "Bathroom",
        category: "Bathroom",
    },
];

pub const PROXIMITY_HIGHLIGHTS: &[ProximityHighlight] = &[
    ProximityHighlight {
        title: "Educational Institutions",
        description: "Delhi Public School (2.5 km), Ahmedabad University (5 km)",
        multi_line: true,
    },
    ProximityHighlight {
        title: "Healthcare",
        description: "Apollo Hospital (3 km), Care Institute (4.2 km)",
        multi_line: false,
    },
    ProximityHighlight {
        title: "Shopping & Entertainment",
        description: "Ahmedabad One Mall (6 km), Alpha One Mall (7.5 km)",
        multi_line: true,
    },
    ProximityHighlight {
        title: "Business Hubs",
        description: "GIFT City (15 km), Ahmedabad CBD (9 km)",
        multi_line: false,
    },
];

pub const RELATED_PROJECTS: &[RelatedProject] = &[
    RelatedProject {
        id: "shilp-business-gateway",
        title: "Shilp Business Gateway",
        kind: "Prime Location",
        location: "SG Highway, Chharodi",
        price: "£75/sq ft",
        size: "5,000-20,000 sq ft",
        image: "/images/projects/shilp-business-gateway.jpg",
    },
    RelatedProject {
        id: "kensington-hotel",
        title: "Kensington Hotel",
        kind: "Industrial",
        location: "Memnagar",
        price: "£15.5M",
        size: "45 Rooms",
        image: "/images/projects/kensington-hotel.jpg",
    },
    RelatedProject {
        id: "pehel",
        title: "Pehel",
        kind: "Retail Space",
        location: "Vaishnodevi Circle",
        price: "£120/sq ft",
        size: "2,500-8,000 sq ft",
        image: "/images/projects/pehel.jpg",
    },
];

pub const FEATURED_DEVELOPMENT: DevelopmentShowcase = DevelopmentShowcase {
    heading: "Featured Development",
    body: "Thoughtfully planned residences with landscaped courtyards, \
           generous daylight and direct access to the city's business corridors.",
    images: [
        ("/images/development-1.jpg", "Development showcase 1"),
        ("/images/development-2.jpg", "Development showcase 2"),
    ],
};

/// Caption shown inside the map's info popup and location card.
pub const MAP_LOCATION_TITLE: &str = "The Skyline Residences";
pub const MAP_LOCATION_REGION: &str = "Ahmedabad, Gujarat";
pub const MAP_LOCATION_TAGLINE: &str = "Future-ready living with seamless connectivity";
