use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::favorites::FavoritesStore;
use crate::loader::{Listing, LoaderError};
use std::sync::{Mutex, MutexGuard};

/// Everything the handlers share: the kv database, the session's dataset
/// load result, and the favorites store.
///
/// astra runs handlers on a worker pool, so the store sits behind a mutex
/// to keep a single writer at a time.
pub struct AppState {
    pub db: Database,
    dataset: Result<Vec<Listing>, LoaderError>,
    favorites: Mutex<FavoritesStore>,
}

impl AppState {
    /// Builds the session state, reading the persisted favorites once.
    /// A broken favorites read degrades to an empty store.
    pub fn new(db: Database, dataset: Result<Vec<Listing>, LoaderError>) -> Self {
        let favorites = FavoritesStore::load(&db).unwrap_or_else(|e| {
            eprintln!("⚠️ Loading favorites failed, starting empty: {e}");
            FavoritesStore::default()
        });

        Self {
            db,
            dataset,
            favorites: Mutex::new(favorites),
        }
    }

    /// The session's dataset, or the load error the page should show.
    pub fn dataset(&self) -> Result<&[Listing], &LoaderError> {
        match &self.dataset {
            Ok(listings) => Ok(listings.as_slice()),
            Err(e) => Err(e),
        }
    }

    pub fn find_listing(&self, id: i64) -> Option<&Listing> {
        self.dataset
            .as_ref()
            .ok()
            .and_then(|listings| listings.iter().find(|l| l.id == id))
    }

    pub fn favorites(&self) -> Result<MutexGuard<'_, FavoritesStore>, ServerError> {
        self.favorites.lock().map_err(|_| ServerError::InternalError)
    }
}
