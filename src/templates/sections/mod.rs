pub mod hero;
pub mod landing;
pub mod project;

pub use hero::hero;
