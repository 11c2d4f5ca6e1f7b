use crate::models::Property;
use crate::sources::traits::DatasetSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Dataset served over HTTP, like `fetch('property_data.json')` on the page
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("listing-browser/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn load(&self) -> Result<Vec<Property>> {
        debug!("Fetching URL: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {}", self.url))?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", self.url, response.status());
            anyhow::bail!("Failed to fetch {}: {}", self.url, response.status());
        }

        let records: Vec<Property> = response
            .json()
            .await
            .context("Failed to parse dataset response")?;

        debug!("Downloaded {} records", records.len());
        Ok(records)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
