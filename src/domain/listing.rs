// src/domain/listing.rs

use crate::domain::status::ListingStatus;

/// A featured project. These are the only records with a detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub price: &'static str, // display string, never parsed
    pub kind: &'static str,
    pub status: ListingStatus,
    pub image: &'static str,
    pub bhk: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResidentialSpace {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub price: &'static str,
    pub kind: &'static str,
    pub status: ListingStatus,
    pub image: &'static str,
    pub bhk: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommercialSpace {
    pub id: &'static str,
    pub title: &'static str,
    pub location: &'static str,
    pub price: &'static str,
    pub kind: &'static str,
    pub status: ListingStatus,
    pub image: &'static str,
    pub size: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationCollection {
    pub id: &'static str,
    pub title: &'static str,
    pub property_count: u32,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendingProject {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    pub rank: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    /// ISO date, e.g. "2024-09-12".
    pub date: &'static str,
    pub image: &'static str,
    pub category: &'static str,
}

/// Sister projects shown at the bottom of a detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedProject {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: &'static str,
    pub location: &'static str,
    pub price: &'static str,
    pub size: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: &'static str,
    pub src: &'static str,
    pub alt: &'static str,
    pub category: &'static str,
}
