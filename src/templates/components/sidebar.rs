use crate::favorites::FavoriteEntry;
use maud::{html, Markup};

/// The children of `#favorites-list`: one item per entry in insertion
/// order, or the single empty-state placeholder.
pub fn favorite_items(entries: &[FavoriteEntry]) -> Markup {
    html! {
        @if entries.is_empty() {
            li class="empty-message" { "No favorites yet." }
        } @else {
            @for fav in entries {
                (favorite_item(fav))
            }
        }
    }
}

// The Remove control re-renders only the sidebar; the grid's heart icons
// are left as they are. TODO: patch the matching card's heart via data-id.
fn favorite_item(fav: &FavoriteEntry) -> Markup {
    html! {
        li class="fav-item" {
            img src=(fav.picture_url) alt=(fav.name);
            div class="fav-info" {
                strong { (fav.name) }
                span { (fav.price) }
                span class="remove-fav" data-id=(fav.id)
                    hx-post=(format!("/favorites/remove/{}", fav.id))
                    hx-target="#favorites-list"
                    hx-swap="innerHTML"
                { "Remove" }
            }
        }
    }
}
