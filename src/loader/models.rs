use serde::{Deserialize, Serialize};

/// One record of the source dataset. Read-only for the whole session;
/// fields beyond these are ignored on parse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub picture_url: String,
    #[serde(default)]
    pub host_thumbnail_url: String,
    #[serde(default)]
    pub host_name: String,
    /// JSON-encoded array of strings embedded as text,
    /// e.g. `"[\"Wifi\", \"Kitchen\"]"`.
    #[serde(default)]
    pub amenities: String,
    #[serde(default)]
    pub price: String,
    pub review_scores_rating: Option<f64>,
}

impl Listing {
    /// First 3 amenity names joined for the card. The embedded JSON is
    /// per-listing data; if it doesn't parse, the card just shows none.
    pub fn amenity_preview(&self) -> String {
        let names: Vec<String> = serde_json::from_str(&self.amenities).unwrap_or_default();
        names
            .iter()
            .take(3)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" • ")
    }

    /// Rating text for the card; listings without reviews show "New".
    pub fn rating_label(&self) -> String {
        match self.review_scores_rating {
            Some(rating) => rating.to_string(),
            None => "New".to_string(),
        }
    }
}
