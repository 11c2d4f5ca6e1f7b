use super::search::SearchText;
use crate::models::{parse_number, Field, FieldValue, Property};
use serde::{Deserialize, Serialize};

/// Direction of the price sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Cheapest first (`low` on the form)
    Ascending,
    /// Dearest first; also used for any unrecognised or unset value
    #[default]
    Descending,
}

impl SortOrder {
    pub fn from_form(raw: &str) -> Self {
        if raw == "low" {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    pub fn as_form_value(self) -> &'static str {
        match self {
            SortOrder::Ascending => "low",
            SortOrder::Descending => "high",
        }
    }
}

/// Inclusive price window, in Lakhs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const DEFAULT_MIN: f64 = 0.0;
    pub const DEFAULT_MAX: f64 = 999_999.0;

    /// Read the two number inputs; anything unparsable falls back to the defaults.
    ///
    /// Parsing is strict: `"60abc"` is unparsable rather than read as `60`.
    pub fn from_form(min: &str, max: &str) -> Self {
        Self {
            min: parse_number(min).unwrap_or(Self::DEFAULT_MIN),
            max: parse_number(max).unwrap_or(Self::DEFAULT_MAX),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }
}

/// Exact-match constraints from the four dropdowns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selections {
    pub total_sqft: Option<FieldValue>,
    pub bedrooms: Option<FieldValue>,
    pub bathrooms: Option<FieldValue>,
    pub location: Option<FieldValue>,
}

impl Selections {
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        match field {
            Field::TotalSqft => self.total_sqft.as_ref(),
            Field::Bedrooms => self.bedrooms.as_ref(),
            Field::Bathrooms => self.bathrooms.as_ref(),
            Field::Location => self.location.as_ref(),
        }
    }

    pub fn set(&mut self, field: Field, value: Option<FieldValue>) {
        let slot = match field {
            Field::TotalSqft => &mut self.total_sqft,
            Field::Bedrooms => &mut self.bedrooms,
            Field::Bathrooms => &mut self.bathrooms,
            Field::Location => &mut self.location,
        };
        *slot = value;
    }

    /// Same selections with `field` left unconstrained
    pub fn without(&self, field: Field) -> Self {
        let mut rest = self.clone();
        rest.set(field, None);
        rest
    }

    /// Every set constraint holds for `property`
    pub fn admits(&self, property: &Property) -> bool {
        Field::ALL.iter().all(|&field| match self.get(field) {
            Some(wanted) => property.matches(field, wanted),
            None => true,
        })
    }
}

/// Everything the filter pipeline needs, rebuilt from the form on every event
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    pub selections: Selections,
    pub price: PriceRange,
    pub sort: SortOrder,
    pub search: Option<SearchText>,
}

impl Criteria {
    pub fn search_text(&self) -> Option<&str> {
        self.search.as_ref().map(SearchText::as_str)
    }
}
