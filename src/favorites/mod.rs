mod store;

pub use store::{FavoriteEntry, FavoritesStore, FAVORITES_KEY};
