use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields that back a selection control on the listing form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    TotalSqft,
    Bedrooms,
    Bathrooms,
    Location,
}

impl Field {
    /// Every selectable field, in form order
    pub const ALL: [Field; 4] = [
        Field::TotalSqft,
        Field::Bedrooms,
        Field::Bathrooms,
        Field::Location,
    ];

    /// Control id used by the host form
    pub fn id(self) -> &'static str {
        match self {
            Field::TotalSqft => "total_sqft",
            Field::Bedrooms => "bedrooms",
            Field::Bathrooms => "bathrooms",
            Field::Location => "location",
        }
    }

    /// Whether values of this field order numerically
    pub fn is_numeric(self) -> bool {
        !matches!(self, Field::Location)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Canonical value of a filterable field.
///
/// Record fields are normalised into this type when the dataset is
/// deserialized, and dropdown values are parsed into it before any
/// comparison, so `"3"` from a form and `3` from the JSON compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Parse a raw control value for `field`. Empty input means "no constraint".
    pub fn parse(field: Field, raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }

        if field.is_numeric() {
            if let Some(n) = parse_number(raw) {
                return Some(FieldValue::Number(n));
            }
        }

        Some(FieldValue::Text(raw.to_string()))
    }

    /// Normalise free-form text: numeric strings become numbers
    pub fn from_text(raw: &str) -> Self {
        let raw = raw.trim();
        match parse_number(raw) {
            Some(n) => FieldValue::Number(n),
            None => FieldValue::Text(raw.to_string()),
        }
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display already drops a trailing ".0"
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Parse a finite number, rejecting NaN and infinities
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
