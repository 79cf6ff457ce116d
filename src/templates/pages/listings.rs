use crate::favorites::FavoritesStore;
use crate::loader::{Listing, LoaderError};
use crate::templates::components::{favorite_items, listing_card, loading_error};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// The whole page: grid on the left, favorites panel on the right. Pure
/// mapping from (dataset, favorites) to markup; the handlers own all
/// state changes.
pub fn listings_page(
    dataset: Result<&[Listing], &LoaderError>,
    favorites: &FavoritesStore,
) -> Markup {
    desktop_layout(
        "San Francisco Stays",
        html! {
            main class="page" {
                section id="listings-container" class="listings-grid" {
                    @match dataset {
                        Ok(listings) => {
                            @for listing in listings {
                                (listing_card(listing, favorites.contains(listing.id)))
                            }
                        }
                        Err(e) => {
                            (loading_error(e))
                        }
                    }
                }
                aside class="favorites-panel" {
                    h2 { "Favorites" }
                    ul id="favorites-list" {
                        (favorite_items(favorites.entries()))
                    }
                }
            }
        },
    )
}
