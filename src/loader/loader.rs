// loader.rs
use crate::loader::{Listing, LoaderError};
use reqwest::blocking::Client;
use std::fs;
use url::Url;

/// The page only ever shows the first 50 listings of the dataset.
pub const MAX_LISTINGS: usize = 50;

const DEFAULT_DATASET: &str = "data/listings.json";

/// One-shot dataset loader: fetch (or read), parse, truncate.
/// No retry, no timeout, no caching — one attempt per session.
pub struct DatasetLoader {
    source: Source,
}

enum Source {
    Remote { client: Client, url: Url },
    File(String),
}

impl DatasetLoader {
    /// Builds a loader for `source`. An `http(s)` source is fetched over
    /// the network; anything else is treated as a local file path.
    pub fn new(source: &str) -> Result<Self, LoaderError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            let url = Url::parse(source).map_err(|e| LoaderError::Network(e.to_string()))?;
            let client = Client::builder()
                .build()
                .map_err(|e| LoaderError::Network(e.to_string()))?;
            Ok(Self {
                source: Source::Remote { client, url },
            })
        } else {
            Ok(Self {
                source: Source::File(source.to_string()),
            })
        }
    }

    /// Source comes from `DATASET_URL`, falling back to the bundled path.
    pub fn from_env() -> Result<Self, LoaderError> {
        let source = std::env::var("DATASET_URL").unwrap_or_else(|_| DEFAULT_DATASET.to_string());
        Self::new(&source)
    }

    pub fn load(&self) -> Result<Vec<Listing>, LoaderError> {
        let body = match &self.source {
            Source::Remote { client, url } => {
                let resp = client
                    .get(url.clone())
                    .send()
                    .map_err(|e| LoaderError::Network(e.to_string()))?;

                let status = resp.status();
                if !status.is_success() {
                    return Err(LoaderError::Http {
                        status: status.as_u16(),
                    });
                }

                resp.text().map_err(|e| LoaderError::Network(e.to_string()))?
            }
            Source::File(path) => {
                fs::read_to_string(path).map_err(|e| LoaderError::Io(e.to_string()))?
            }
        };

        parse_dataset(&body)
    }
}

/// Parses the dataset body and keeps the first [`MAX_LISTINGS`] entries
/// in source order. An empty array is fine; malformed JSON is not.
pub fn parse_dataset(body: &str) -> Result<Vec<Listing>, LoaderError> {
    let mut listings: Vec<Listing> =
        serde_json::from_str(body).map_err(|e| LoaderError::Parse(e.to_string()))?;

    listings.truncate(MAX_LISTINGS);
    Ok(listings)
}
