use crate::db::connection::Database;
use crate::db::kv;
use crate::errors::ServerError;
use crate::loader::Listing;
use serde::{Deserialize, Serialize};

/// The single kv key the favorites array lives under.
pub const FAVORITES_KEY: &str = "airbnbFavorites";

/// Minimal projection of a [`Listing`] kept for the sidebar; this is the
/// shape that gets serialized under [`FAVORITES_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: i64,
    pub name: String,
    pub picture_url: String,
    pub price: String,
}

impl From<&Listing> for FavoriteEntry {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id,
            name: listing.name.clone(),
            picture_url: listing.picture_url.clone(),
            price: listing.price.clone(),
        }
    }
}

/// Insertion-ordered favorites, unique by listing id.
///
/// Loaded once at startup, rewritten in full to the kv store after every
/// mutation. Mutations never touch storage themselves; callers persist
/// explicitly so the core stays testable without a database.
#[derive(Debug, Default)]
pub struct FavoritesStore {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesStore {
    /// Reads the persisted array. Absent or malformed stored JSON yields
    /// an empty store rather than a wedged session.
    pub fn load(db: &Database) -> Result<Self, ServerError> {
        let entries = match kv::get(db, FAVORITES_KEY)? {
            Some(json) => serde_json::from_str(&json).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.iter().any(|fav| fav.id == id)
    }

    /// Flips membership for `listing` and returns the new state:
    /// `true` if the listing is now a favorite.
    pub fn toggle(&mut self, listing: &Listing) -> bool {
        match self.entries.iter().position(|fav| fav.id == listing.id) {
            Some(index) => {
                // No duplicates by invariant, so one removal is enough.
                self.entries.remove(index);
                false
            }
            None => {
                self.entries.push(FavoriteEntry::from(listing));
                true
            }
        }
    }

    /// Removes the entry with `id` if present; `true` if something was
    /// removed.
    pub fn remove(&mut self, id: i64) -> bool {
        match self.entries.iter().position(|fav| fav.id == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Rewrites the full serialized array under the fixed key. Always the
    /// whole sequence, never a delta, so storage mirrors memory after
    /// every mutation.
    pub fn persist(&self, db: &Database) -> Result<(), ServerError> {
        let json = serde_json::to_string(&self.entries)
            .map_err(|e| ServerError::DbError(format!("Serialize favorites failed: {e}")))?;
        kv::set(db, FAVORITES_KEY, &json)
    }
}
