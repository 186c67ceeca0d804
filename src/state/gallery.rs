// src/state/gallery.rs

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GalleryTab {
    #[default]
    Photos,
    Videos,
}

impl GalleryTab {
    pub const ALL: [GalleryTab; 2] = [GalleryTab::Photos, GalleryTab::Videos];

    pub fn slug(&self) -> &'static str {
        match self {
            GalleryTab::Photos => "photos",
            GalleryTab::Videos => "videos",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GalleryTab::Photos => "Photos",
            GalleryTab::Videos => "Videos",
        }
    }

    /// Anything other than "videos" shows photos.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("videos") => GalleryTab::Videos,
            _ => GalleryTab::Photos,
        }
    }
}
