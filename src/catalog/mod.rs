// src/catalog/mod.rs
//
// All listing content is compiled into the binary. Pages read it through
// `ListingSource` so a real backend can replace the static arrays later.

pub mod chrome;
pub mod listings;
pub mod project_page;

use crate::domain::{
    Article, CommercialSpace, GalleryImage, LocationCollection, Project, RelatedProject,
    ResidentialSpace, TrendingProject,
};

/// Read-only "list records for domain D" interface.
pub trait ListingSource {
    fn featured(&self) -> &[Project];
    fn residential(&self) -> &[ResidentialSpace];
    fn commercial(&self) -> &[CommercialSpace];
    fn locations(&self) -> &[LocationCollection];
    fn trending(&self) -> &[TrendingProject];
    fn articles(&self) -> &[Article];
    fn related(&self) -> &[RelatedProject];
    fn gallery(&self) -> &[GalleryImage];

    /// Detail pages exist only for featured projects.
    fn find_project(&self, id: &str) -> Option<&Project> {
        self.featured().iter().find(|p| p.id == id)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl ListingSource for StaticCatalog {
    fn featured(&self) -> &[Project] {
        listings::FEATURED_PROJECTS
    }

    fn residential(&self) -> &[ResidentialSpace] {
        listings::RESIDENTIAL_SPACES
    }

    fn commercial(&self) -> &[CommercialSpace] {
        listings::COMMERCIAL_SPACES
    }

    fn locations(&self) -> &[LocationCollection] {
        listings::LOCATION_COLLECTIONS
    }

    fn trending(&self) -> &[TrendingProject] {
        listings::TRENDING_PROJECTS
    }

    fn articles(&self) -> &[Article] {
        listings::TRENDING_ARTICLES
    }

    fn related(&self) -> &[RelatedProject] {
        project_page::RELATED_PROJECTS
    }

    fn gallery(&self) -> &[GalleryImage] {
        project_page::GALLERY_IMAGES
    }
}
