pub mod errors;
pub mod html;
pub mod static_files;

pub use errors::{error_to_response, html_error_response};
pub use html::html_response;
pub use static_files::static_response;
