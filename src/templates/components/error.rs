use crate::loader::LoaderError;
use maud::{html, Markup};

/// Shown in place of the grid when the session's dataset load failed.
pub fn loading_error(err: &LoaderError) -> Markup {
    html! {
        div class="loading" { "Error loading listings: " (err) }
    }
}
