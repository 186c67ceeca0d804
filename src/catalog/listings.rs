// src/catalog/listings.rs

use crate::domain::status::ListingStatus::*;
use crate::domain::{
    Article, CommercialSpace, LocationCollection, Project, ResidentialSpace, TrendingProject,
};

pub const FEATURED_PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "The Sovereign",
        location: "Thaltej",
        price: "₹ 4.3–8.5 Cr",
        kind: "Prime 3 BHK flats",
        status: NewLaunch,
        image: "/featured/i1.png",
        bhk: "3 BHK",
    },
    Project {
        id: "2",
        title: "Adani Augusta Tragad",
        location: "Tragad",
        price: "₹ 1.12–1.42 Cr",
        kind: "Under-construction 3 BHK",
        status: ReadyToMove,
        image: "/featured/i2.png",
        bhk: "3 BHK",
    },
    Project {
        id: "3",
        title: "Adani Embrace Shantigram",
        location: "Shantigram",
        price: "₹ 1.29–2.67 Cr",
        kind: "Spacious 3 BHK",
        status: ReraApproved,
        image: "/featured/i3.png",
        bhk: "3 BHK",
    },
    Project {
        id: "4",
        title: "Canary Wharf Residences",
        location: "Canary Wharf, London",
        price: "£1.3M - £4.1M",
        kind: "Luxury Apartments",
        status: NewLaunch,
        image: "/featured/i4.png",
        bhk: "2-4 BHK",
    },
];

pub const RESIDENTIAL_SPACES: &[ResidentialSpace] = &[
    ResidentialSpace {
        id: "1",
        title: "Adani The North Park",
        location: "Adani's Shantigram township",
        price: "£25/sq ft",
        kind: "Residential",
        status: NewLaunch,
        image: "/residential/i1.png",
        bhk: "4/5/6-BHK villas",
    },
    ResidentialSpace {
        id: "2",
        title: "Shalin Boulevard",
        location: "SG Highway",
        price: "£120/sq ft",
        kind: "Residential",
        status: ReadyToMove,
        image: "/residential/i2.png",
        bhk: "~4,050 sq ft",
    },
    ResidentialSpace {
        id: "3",
        title: "True The North",
        location: "Navrangpura",
        price: "£45/sq ft",
        kind: "Residential",
        status: ReraApproved,
        image: "/residential/i3.png",
        bhk: "4 BHK units",
    },
    ResidentialSpace {
        id: "4",
        title: "Galaxy KP Villas",
        location: "SG Highway",
        price: "£75/sq ft",
        kind: "Residential",
        status: PrimeLocation,
        image: "/residential/i4.png",
        bhk: "5 BHK villas",
    },
    ResidentialSpace {
        id: "5",
        title: "Kensington Hotel",
        location: "Kensington, London",
        price: "£15.5M",
        kind: "Luxury Hotel",
        status: PrimeLocation,
        image: "/residential/i5.png",
        bhk: "45 Rooms",
    },
];

pub const COMMERCIAL_SPACES: &[CommercialSpace] = &[
    CommercialSpace {
        id: "c1",
        title: "Business Bay",
        location: "Dubai, UAE",
        price: "£120/sq ft",
        kind: "Office Space",
        status: PrimeLocation,
        image: "/commercial/i1.png",
        size: "5,000 - 50,000 sq ft",
    },
    CommercialSpace {
        id: "c2",
        title: "Oxford Street",
        location: "London, UK",
        price: "£250/sq ft",
        kind: "Retail Space",
        status: RetailSpace,
        image: "/commercial/i2.png",
        size: "1,000 - 10,000 sq ft",
    },
    CommercialSpace {
        id: "c3",
        title: "Silicon Oasis",
        location: "Dubai, UAE",
        price: "£80/sq ft",
        kind: "Co-Working",
        status: CoWorking,
        image: "/commercial/i3.png",
        size: "Flexible Desks & Offices",
    },
    CommercialSpace {
        id: "c4",
        title: "JAFZA",
        location: "Dubai, UAE",
        price: "£45/sq ft",
        kind: "Industrial",
        status: Industrial,
        image: "/commercial/i4.png",
        size: "10,000 - 100,000 sq ft",
    },
    CommercialSpace {
        id: "c5",
        title: "Canary Wharf",
        location: "London, UK",
        price: "£180/sq ft",
        kind: "Office Space",
        status: PrimeLocation,
        image: "/commercial/i5.png",
        size: "2,000 - 20,000 sq ft",
    },
];

pub const LOCATION_COLLECTIONS: &[LocationCollection] = &[
    LocationCollection {
        id: "l1",
        title: "SG Highway",
        property_count: 245,
        image: "/locations/i1.png",
    },
    LocationCollection {
        id: "l2",
        title: "Gift City",
        property_count: 128,
        image: "/locations/i2.png",
    },
    LocationCollection {
        id: "l3",
        title: "Shantigram, Jagatpur",
        property_count: 96,
        image: "/locations/i3.png",
    },
    LocationCollection {
        id: "l4",
        title: "Satellite",
        property_count: 82,
        image: "/locations/i4.png",
    },
];

const fn trending(
    id: u32,
    title: &'static str,
    location: &'static str,
    image: &'static str,
) -> TrendingProject {
    TrendingProject {
        id,
        title,
        location,
        image,
        rank: id as u8,
    }
}

// Ranked by popularity; rank mirrors the id.
pub const TRENDING_PROJECTS: &[TrendingProject] = &[
    trending(1, "The Shard Residences", "London Bridge", "/trending/i1.png"),
    trending(2, "Battersea Power Station", "Battersea, London", "/trending/i2.png"),
    trending(3, "One Blackfriars", "South Bank", "/trending/i3.png"),
    trending(4, "The Corniche", "Nine Elms", "/trending/i4.png"),
    trending(5, "The Madison", "Tower Bridge", "/trending/i5.png"),
    trending(6, "Embassy Gardens", "Nine Elms", "/trending/i6.png"),
    trending(7, "The Atlas Building", "Shoreditch", "/trending/i7.png"),
    trending(8, "The Stratford", "Stratford", "/trending/i8.png"),
    trending(9, "Wardian London", "Canary Wharf", "/trending/i9.png"),
    trending(10, "The Broadway", "Westminster", "/trending/i10.png"),
];

pub const TRENDING_ARTICLES: &[Article] = &[
    Article {
        id: 1,
        title: "A Guide to Choosing the Right Commercial Property in Vaishnodevi, Ahmedabad",
        date: "2024-09-12",
        image: "/articles/i1.png",
        category: "Commercial",
    },
    Article {
        id: 2,
        title: "Why Offices in Vaishnodevi Are the Ideal Choice for High-End Businesses",
        date: "2024-09-12",
        image: "/articles/i2.png",
        category: "Commercial",
    },
    Article {
        id: 3,
        title: "The Future of Real Estate Investment: Trends and Predictions",
        date: "2024-09-12",
        image: "/articles/i3.png",
        category: "Investment",
    },
];
