pub mod assets;
pub mod html;

pub use crate::errors::ResultResp;

// Normal HTML responses
pub use html::{html_fragment, html_response, no_content, with_status};
pub use assets::static_file;
