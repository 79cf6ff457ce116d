mod card;
mod error;
mod sidebar;

pub use card::{favorite_button, listing_card, toggle_fragment};
pub use error::loading_error;
pub use sidebar::favorite_items;
