use crate::errors::ServerError;
use crate::loader::{parse_dataset, LoaderError};
use crate::router::handle;
use crate::state::AppState;
use crate::tests::utils::{body_string, listing, make_db, make_state};
use astra::{Body, Request};
use http::Method;

fn get(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn page_renders_first_50_of_a_large_dataset() {
    let listings: Vec<_> = (0..500)
        .map(|i| listing(i, &format!("Listing {i}")))
        .collect();
    let json = serde_json::to_string(&listings).unwrap();
    let state = make_state("page_large", parse_dataset(&json).unwrap());

    let mut resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert_eq!(body.matches("class=\"listing-card\"").count(), 50);
    // First 50 in source order, nothing past them.
    assert!(body.contains("Listing 0"));
    assert!(body.contains("Listing 49"));
    assert!(!body.contains("data-id=\"50\""));
}

#[test]
fn page_renders_a_small_dataset_whole() {
    let listings: Vec<_> = (0..10).map(|i| listing(i, &format!("Listing {i}"))).collect();
    let state = make_state("page_small", listings);

    let mut resp = handle(get("/"), &state).unwrap();
    let body = body_string(&mut resp);
    assert_eq!(body.matches("class=\"listing-card\"").count(), 10);
}

#[test]
fn page_shows_the_load_error_in_place_of_the_grid() {
    let state = AppState::new(
        make_db("page_error"),
        Err(LoaderError::Http { status: 500 }),
    );

    let mut resp = handle(get("/"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Error loading listings: HTTP error! status: 500"));
    assert!(!body.contains("class=\"listing-card\""));
    // The sidebar still renders its empty state.
    assert!(body.contains("No favorites yet."));
}

#[test]
fn unknown_routes_are_not_found() {
    let state = make_state("page_unknown", vec![]);
    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
