// UI state owned by individual page components. Each value lives only as long
// as the component rendering it; the browser carries it between requests.
pub mod gallery;
pub mod header;
pub mod map;

pub use gallery::GalleryTab;
pub use header::HeaderState;
pub use map::MapSelection;
