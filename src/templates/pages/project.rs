// templates/pages/project.rs

use crate::catalog::chrome::{FOOTER, NAVIGATION};
use crate::catalog::project_page::{
    FEATURED_DEVELOPMENT, KEY_HIGHLIGHTS, PROJECT_PAGE, PROXIMITY_HIGHLIGHTS,
};
use crate::errors::ServerError;
use crate::inquiry::InquiryDraft;
use crate::site::Site;
use crate::state::{GalleryTab, HeaderState};
use crate::templates::components::{footer, navigation};
use crate::templates::layouts::site::site_layout;
use crate::templates::sections::project;
use maud::{html, Markup};

/// Detail page for one featured project. Unknown ids are `NotFound`; no
/// partial page is ever rendered.
pub fn project_page(site: &Site, id: &str, tab: GalleryTab) -> Result<Markup, ServerError> {
    let listing = site.catalog.find_project(id).ok_or(ServerError::NotFound)?;

    Ok(site_layout(
        listing.title,
        html! {
            (navigation(&NAVIGATION, HeaderState::default(), false))
            main {
                (project::project_hero(listing, &PROJECT_PAGE))
                (project::key_highlights(KEY_HIGHLIGHTS))
                (project::gallery(listing.id, site.catalog.gallery(), tab))
                (project::location_advantages(listing.id, &site.config.map, PROXIMITY_HIGHLIGHTS))
                (project::featured_development(&FEATURED_DEVELOPMENT))
                (project::inquiry_section(listing.id, &InquiryDraft::default(), None))
                (project::related_projects(site.catalog.related()))
            }
            (footer(&FOOTER))
        },
    ))
}
