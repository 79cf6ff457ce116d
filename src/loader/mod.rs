mod loader;
mod loader_error;
mod models;

pub use loader::{parse_dataset, DatasetLoader, MAX_LISTINGS};
pub use loader_error::LoaderError;
pub use models::Listing;
