use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for everything that can supply the listing dataset
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and parse the full record list
    async fn load(&self) -> Result<Vec<Property>>;

    /// Where the dataset comes from, for logs
    fn describe(&self) -> String;
}
