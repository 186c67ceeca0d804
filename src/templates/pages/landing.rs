// templates/pages/landing.rs

use crate::catalog::chrome::{FOOTER, HERO, NAVIGATION};
use crate::site::Site;
use crate::state::HeaderState;
use crate::templates::components::{footer, navigation};
use crate::templates::layouts::site::site_layout;
use crate::templates::sections::{hero, landing};
use maud::{html, Markup};

pub fn landing_page(site: &Site) -> Markup {
    let catalog = &site.catalog;

    site_layout(
        "Home",
        html! {
            (navigation(&NAVIGATION, HeaderState::default(), false))
            main {
                (hero(&HERO))
                (landing::featured_projects(catalog.featured()))
                (landing::residential_spaces(catalog.residential()))
                (landing::commercial_spaces(catalog.commercial()))
                (landing::location_collections(catalog.locations()))
                (landing::trending_projects(catalog.trending()))
                (landing::trending_articles(catalog.articles()))
            }
            (footer(&FOOTER))
        },
    )
}
