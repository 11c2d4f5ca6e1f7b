mod value;

pub use value::{parse_number, Field, FieldValue};

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder shown for a missing society or balcony count
pub const NOT_AVAILABLE: &str = "N/A";

/// Core property data model, one entry of the listing dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub location: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub society: Option<String>,
    /// Asking price in Lakhs
    #[serde(deserialize_with = "number")]
    pub price: f64,
    #[serde(deserialize_with = "sqft")]
    pub total_sqft: FieldValue,
    #[serde(deserialize_with = "count")]
    pub bedrooms: u32,
    #[serde(deserialize_with = "count")]
    pub bathrooms: u32,
    #[serde(default, deserialize_with = "optional_count")]
    pub balcony: Option<u32>,
    #[serde(default)]
    pub area_type: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub image: String,
}

impl Property {
    /// Canonical value of a selectable field
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::TotalSqft => self.total_sqft.clone(),
            Field::Bedrooms => self.bedrooms.into(),
            Field::Bathrooms => self.bathrooms.into(),
            Field::Location => FieldValue::Text(self.location.clone()),
        }
    }

    /// Equality against a canonical value, without allocating
    pub fn matches(&self, field: Field, wanted: &FieldValue) -> bool {
        match (field, wanted) {
            (Field::TotalSqft, _) => &self.total_sqft == wanted,
            (Field::Bedrooms, FieldValue::Number(n)) => f64::from(self.bedrooms) == *n,
            (Field::Bathrooms, FieldValue::Number(n)) => f64::from(self.bathrooms) == *n,
            (Field::Location, FieldValue::Text(s)) => &self.location == s,
            _ => false,
        }
    }

    /// Society name, or the placeholder when the listing has none
    pub fn society_label(&self) -> &str {
        self.society.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn balcony_label(&self) -> String {
        match self.balcony {
            Some(n) => n.to_string(),
            None => NOT_AVAILABLE.to_string(),
        }
    }
}

/// Numbers in scraped datasets arrive as JSON numbers or numeric strings
#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(f64),
    Text(String),
}

fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => parse_number(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid number: {:?}", s))),
    }
}

fn sqft<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FieldValue, D::Error> {
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) => FieldValue::Number(n),
        Raw::Text(s) => FieldValue::from_text(&s),
    })
}

fn to_count<E: serde::de::Error>(raw: Raw) -> Result<u32, E> {
    let n = match raw {
        Raw::Number(n) => n,
        Raw::Text(s) => parse_number(&s)
            .ok_or_else(|| E::custom(format!("invalid count: {:?}", s)))?,
    };

    if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
        return Err(E::custom(format!("invalid count: {}", n)));
    }
    Ok(n as u32)
}

fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    to_count(Raw::deserialize(deserializer)?)
}

fn optional_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Option::<Raw>::deserialize(deserializer)?
        .map(to_count)
        .transpose()
}

fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(text.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let property: Property = serde_json::from_value(json!({
            "location": "Whitefield",
            "society": "Prestige",
            "price": 50.5,
            "total_sqft": "1200",
            "bedrooms": 2,
            "bathrooms": 2.0,
            "balcony": 1,
            "area_type": "Super built-up  Area",
            "availability": "Ready To Move",
            "image": "img/1.jpg"
        }))
        .unwrap();

        assert_eq!(property.total_sqft, FieldValue::Number(1200.0));
        assert_eq!(property.bathrooms, 2);
        assert_eq!(property.balcony, Some(1));
        assert_eq!(property.society_label(), "Prestige");
    }

    #[test]
    fn test_missing_optional_fields() {
        let property: Property = serde_json::from_value(json!({
            "location": "Indiranagar",
            "society": "  ",
            "price": 120,
            "total_sqft": "1133 - 1384",
            "bedrooms": "3",
            "bathrooms": 3,
            "balcony": null
        }))
        .unwrap();

        assert_eq!(property.society, None);
        assert_eq!(property.society_label(), NOT_AVAILABLE);
        assert_eq!(property.balcony_label(), NOT_AVAILABLE);
        assert_eq!(property.total_sqft, FieldValue::Text("1133 - 1384".into()));
        assert_eq!(property.bedrooms, 3);
        assert!(property.image.is_empty());
    }

    #[test]
    fn test_fractional_count_rejected() {
        let result: Result<Property, _> = serde_json::from_value(json!({
            "location": "Hebbal",
            "price": 80,
            "total_sqft": 1000,
            "bedrooms": 2.5,
            "bathrooms": 2
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_matches_is_canonical() {
        let property: Property = serde_json::from_value(json!({
            "location": "Hebbal",
            "price": 80,
            "total_sqft": 1000,
            "bedrooms": 2,
            "bathrooms": 1
        }))
        .unwrap();

        assert!(property.matches(Field::Bedrooms, &FieldValue::parse(Field::Bedrooms, "2").unwrap()));
        assert!(property.matches(Field::TotalSqft, &FieldValue::parse(Field::TotalSqft, "1000.0").unwrap()));
        assert!(property.matches(Field::Location, &"Hebbal".into()));
        assert!(!property.matches(Field::Bathrooms, &"1".into()));
    }
}
