use crate::models::Field;
use crate::ui::Form;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime settings for the listing browser binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Dataset file path or http(s) URL
    pub data: String,
    /// Where the rendered grid markup is written
    pub output: PathBuf,
    /// Where a JSON snapshot of the form is written
    pub form_output: PathBuf,
    /// Tracing filter directive, e.g. `info` or `listing_browser=debug`
    pub log: String,
    /// Search box contents
    pub search: Option<String>,
    /// `low` or `high`
    pub sort: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// Location dropdown value
    pub location: Option<String>,
    /// Bedrooms dropdown value
    pub bedrooms: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: "property_data.json".to_string(),
            output: PathBuf::from("property_grid.html"),
            form_output: PathBuf::from("form_state.json"),
            log: "info".to_string(),
            search: None,
            sort: None,
            min_price: None,
            max_price: None,
            location: None,
            bedrooms: None,
        }
    }
}

impl Config {
    /// Read `LISTING_*` environment variables over the defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            data: get("LISTING_DATA").unwrap_or(defaults.data),
            output: get("LISTING_OUTPUT").map(PathBuf::from).unwrap_or(defaults.output),
            form_output: get("LISTING_FORM_OUTPUT")
                .map(PathBuf::from)
                .unwrap_or(defaults.form_output),
            log: get("LISTING_LOG").unwrap_or(defaults.log),
            search: get("LISTING_SEARCH"),
            sort: get("LISTING_SORT"),
            min_price: get("LISTING_MIN_PRICE"),
            max_price: get("LISTING_MAX_PRICE"),
            location: get("LISTING_LOCATION"),
            bedrooms: get("LISTING_BEDROOMS"),
        }
    }

    /// Dropdown values to choose, in the order a user would pick them
    pub fn selections(&self) -> Vec<(Field, &str)> {
        [
            (Field::Location, self.location.as_deref()),
            (Field::Bedrooms, self.bedrooms.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }

    /// Type the configured search, sort and price values into the form.
    ///
    /// Returns whether anything was set.
    pub fn apply_inputs(&self, form: &mut Form) -> bool {
        let mut touched = false;

        if let Some(search) = &self.search {
            form.search = search.clone();
            touched = true;
        }
        if let Some(sort) = &self.sort {
            form.sort_price = sort.clone();
            touched = true;
        }
        if let Some(min) = &self.min_price {
            form.min_price.value = min.clone();
            touched = true;
        }
        if let Some(max) = &self.max_price {
            form.max_price.value = max.clone();
            touched = true;
        }

        touched
    }
}
