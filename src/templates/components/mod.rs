pub mod card;
pub mod collection;
pub mod error;
pub mod footer;
pub mod icons;
pub mod inquiry_form;
pub mod map;
pub mod navigation;

pub use card::BadgePosition;
pub use collection::{card_row, scroll_row, SeeAll};
pub use error::html_error_response;
pub use footer::footer;
pub use inquiry_form::{inquiry_form, inquiry_thanks};
pub use map::{map_info, map_widget};
pub use navigation::navigation;
