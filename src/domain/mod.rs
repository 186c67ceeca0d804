pub mod content;
pub mod listing;
pub mod status;

pub use listing::{
    Article, CommercialSpace, GalleryImage, LocationCollection, Project, RelatedProject,
    ResidentialSpace, TrendingProject,
};
pub use status::{Badge, CARD_STATUSES, FEATURED_STATUSES};
