use crate::errors::ServerError;
use crate::favorites::FavoritesStore;
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, listing, make_db, make_state};
use astra::{Body, Request};
use http::Method;

fn post(path: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn toggle_adds_then_removes() {
    let state = make_state("toggle_twice", vec![listing(1, "Sunny studio")]);

    let mut resp = handle(post("/favorites/toggle/1"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("❤️"));
    assert!(body.contains("Sunny studio"));

    let mut resp = handle(post("/favorites/toggle/1"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("🤍"));
    assert!(body.contains("No favorites yet."));
}

#[test]
fn toggle_persists_across_sessions() {
    let db = make_db("toggle_persists");
    let state = AppState::new(db.clone(), Ok(vec![listing(1, "Sunny studio")]));

    handle(post("/favorites/toggle/1"), &state).unwrap();

    // A fresh session reads the same favorites back.
    let reloaded = FavoritesStore::load(&db).unwrap();
    assert_eq!(reloaded.entries().len(), 1);
    assert_eq!(reloaded.entries()[0].name, "Sunny studio");
}

#[test]
fn toggle_unknown_listing_is_not_found() {
    let state = make_state("toggle_unknown", vec![listing(1, "A")]);
    let err = handle(post("/favorites/toggle/999"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn toggle_rejects_a_non_numeric_id() {
    let state = make_state("toggle_bad_id", vec![listing(1, "A")]);
    let err = handle(post("/favorites/toggle/abc"), &state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn removing_the_only_favorite_restores_the_empty_state() {
    let state = make_state("remove_last", vec![listing(1, "Sunny studio")]);

    handle(post("/favorites/toggle/1"), &state).unwrap();

    let mut resp = handle(post("/favorites/remove/1"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("No favorites yet."));
    assert!(!body.contains("fav-item"));
}

#[test]
fn remove_persists_the_shrunken_array() {
    let db = make_db("remove_persists");
    let state = AppState::new(
        db.clone(),
        Ok(vec![listing(1, "A"), listing(2, "B")]),
    );

    handle(post("/favorites/toggle/1"), &state).unwrap();
    handle(post("/favorites/toggle/2"), &state).unwrap();
    handle(post("/favorites/remove/1"), &state).unwrap();

    let reloaded = FavoritesStore::load(&db).unwrap();
    let ids: Vec<i64> = reloaded.entries().iter().map(|fav| fav.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn remove_of_a_missing_id_still_renders_the_sidebar() {
    let state = make_state("remove_missing", vec![listing(1, "A")]);

    handle(post("/favorites/toggle/1"), &state).unwrap();

    let mut resp = handle(post("/favorites/remove/999"), &state).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("fav-item"));
}
