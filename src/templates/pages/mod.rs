pub mod landing;
pub mod project;

pub use landing::landing_page;
pub use project::project_page;
