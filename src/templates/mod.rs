pub mod components;
pub mod layouts;
pub mod pages;
pub mod sections;

// Re-exports for convenience
pub use components::html_error_response;
pub use pages::{landing_page, project_page};
