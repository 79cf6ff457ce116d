use crate::errors::{ResultResp, ServerError};
use crate::responses::{html_response, static_response};
use crate::state::AppState;
use crate::templates::components;
use crate::templates::pages;
use astra::Request;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => {
            let favorites = state.favorites()?;
            html_response(pages::listings_page(state.dataset(), &favorites))
        }

        ("POST", p) if p.starts_with("/favorites/toggle/") => {
            toggle_favorite(state, &p["/favorites/toggle/".len()..])
        }

        ("POST", p) if p.starts_with("/favorites/remove/") => {
            remove_favorite(state, &p["/favorites/remove/".len()..])
        }

        ("GET", p) if p.starts_with("/static/") => static_response(&p["/static/".len()..]),

        _ => Err(ServerError::NotFound),
    }
}

/// Flip membership for one listing, rewrite storage, answer with the
/// replacement button plus the out-of-band sidebar. The grid itself is
/// never re-rendered by a toggle.
fn toggle_favorite(state: &AppState, raw_id: &str) -> ResultResp {
    let id = parse_id(raw_id)?;
    let listing = state.find_listing(id).ok_or(ServerError::NotFound)?;

    let mut favorites = state.favorites()?;
    let is_favorite = favorites.toggle(listing);

    // Memory has already advanced; a failed write is logged and the
    // response still goes out.
    if let Err(e) = favorites.persist(&state.db) {
        eprintln!("⚠️ Persisting favorites failed: {e}");
    }

    html_response(components::toggle_fragment(
        id,
        is_favorite,
        favorites.entries(),
    ))
}

/// Drop one entry from the sidebar, rewrite storage, answer with the
/// sidebar items only. Grid heart icons are not resynchronized here.
fn remove_favorite(state: &AppState, raw_id: &str) -> ResultResp {
    let id = parse_id(raw_id)?;

    let mut favorites = state.favorites()?;
    if favorites.remove(id) {
        if let Err(e) = favorites.persist(&state.db) {
            eprintln!("⚠️ Persisting favorites failed: {e}");
        }
    }

    html_response(components::favorite_items(favorites.entries()))
}

fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse()
        .map_err(|_| ServerError::BadRequest(format!("bad listing id: {raw}")))
}
