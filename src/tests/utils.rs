use crate::db::connection::{init_db, Database};
use crate::loader::Listing;
use crate::state::AppState;
use astra::Response;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Initialize a fresh test DB using the production schema
pub fn make_db(label: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{label}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path.to_string_lossy().to_string());

    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");

    db
}

/// A dataset record with every field populated.
pub fn listing(id: i64, name: &str) -> Listing {
    Listing {
        id,
        name: name.to_string(),
        picture_url: format!("https://example.com/listing-{id}.jpg"),
        host_thumbnail_url: "https://example.com/host.jpg".to_string(),
        host_name: "Alex".to_string(),
        amenities: r#"["Wifi", "Kitchen", "Heating", "Washer"]"#.to_string(),
        price: "$150.00".to_string(),
        review_scores_rating: Some(4.86),
    }
}

pub fn make_state(label: &str, listings: Vec<Listing>) -> AppState {
    AppState::new(make_db(label), Ok(listings))
}

pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("Failed to read response body");
    String::from_utf8(bytes).expect("Response body was not UTF-8")
}
