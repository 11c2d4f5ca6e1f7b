pub mod file;
pub mod http;
pub mod traits;

pub use file::FileSource;
pub use http::HttpSource;
pub use traits::DatasetSource;

use crate::models::Property;
use anyhow::Result;

/// Pick a source for `location`: `http(s)://` URLs are fetched, anything else is a file path
pub fn from_location(location: &str) -> Result<Box<dyn DatasetSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// Parse a JSON array of property records
pub fn parse_dataset(json: &str) -> Result<Vec<Property>> {
    Ok(serde_json::from_str(json)?)
}
