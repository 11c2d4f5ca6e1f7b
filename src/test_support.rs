use crate::models::{FieldValue, Property};
use crate::sources::DatasetSource;
use anyhow::Result;
use async_trait::async_trait;

pub fn property(location: &str, price: f64) -> Property {
    Property {
        location: location.to_string(),
        society: None,
        price,
        total_sqft: FieldValue::Number(1000.0),
        bedrooms: 2,
        bathrooms: 2,
        balcony: None,
        area_type: "Super built-up  Area".to_string(),
        availability: "Ready To Move".to_string(),
        image: "images/house.jpg".to_string(),
    }
}

/// Four listings across three locations, prices 40.9 to 120.2
pub fn sample() -> Vec<Property> {
    let mut a = property("Whitefield", 50.0);
    a.bedrooms = 3;
    a.society = Some("Prestige Shantiniketan".to_string());
    a.total_sqft = FieldValue::Number(1500.0);

    let mut b = property("Whitefield", 75.5);
    b.total_sqft = FieldValue::Number(1200.0);

    let mut c = property("Indiranagar", 120.2);
    c.society = Some("Sobha Lakeview".to_string());
    c.total_sqft = FieldValue::Text("1133 - 1384".to_string());

    let mut d = property("Hebbal", 40.9);
    d.bedrooms = 1;
    d.bathrooms = 1;
    d.total_sqft = FieldValue::Number(600.0);

    vec![a, b, c, d]
}

/// In-memory dataset source
pub struct StaticSource(pub Vec<Property>);

#[async_trait]
impl DatasetSource for StaticSource {
    async fn load(&self) -> Result<Vec<Property>> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
