use crate::favorites::FavoriteEntry;
use crate::loader::Listing;
use crate::templates::components::favorite_items;
use maud::{html, Markup};

const FALLBACK_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";

/// One grid card. `data-id` keys the card by listing identity so the
/// grid can be queried and patched by id.
pub fn listing_card(listing: &Listing, is_favorite: bool) -> Markup {
    html! {
        div class="listing-card" data-id=(listing.id) {
            div class="listing-thumbnail" {
                img src=(listing.picture_url)
                    alt=(listing.name)
                    loading="lazy"
                    onerror=(format!("this.src='{FALLBACK_IMAGE}'"));
                (favorite_button(listing.id, is_favorite))
            }
            div class="listing-info" {
                div class="listing-details" {
                    div class="listing-title" { (listing.name) }
                    div class="listing-host" {
                        img src=(listing.host_thumbnail_url)
                            alt=(listing.host_name)
                            class="host-photo"
                            onerror="this.style.display='none'";
                        "Hosted by " (listing.host_name)
                    }
                    div class="listing-amenities" { (listing.amenity_preview()) }
                    div class="listing-price" { span class="price-bold" { (listing.price) } }
                }
                div class="listing-rating" { "★ " (listing.rating_label()) }
            }
        }
    }
}

/// The heart toggle. A click swaps only this button (`outerHTML`), never
/// the surrounding card or grid.
pub fn favorite_button(id: i64, is_favorite: bool) -> Markup {
    let icon = if is_favorite { "❤️" } else { "🤍" };

    html! {
        button class="favorite-btn"
            aria-label="Add to favorites"
            hx-post=(format!("/favorites/toggle/{id}"))
            hx-swap="outerHTML"
        { (icon) }
    }
}

/// Toggle response: the replacement button, plus the sidebar list swapped
/// out-of-band so a toggle also re-renders the favorites panel.
pub fn toggle_fragment(id: i64, is_favorite: bool, entries: &[FavoriteEntry]) -> Markup {
    html! {
        (favorite_button(id, is_favorite))
        ul id="favorites-list" hx-swap-oob="true" {
            (favorite_items(entries))
        }
    }
}
