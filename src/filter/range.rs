use crate::models::Property;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Whole-number price bounds used to seed the min/max price inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

impl PriceBounds {
    /// `floor` of the cheapest and `ceil` of the dearest listing.
    ///
    /// An empty dataset has no bounds; that is reported as an error so the
    /// caller can surface a configuration problem instead of seeding NaNs.
    pub fn calibrate(records: &[Property]) -> Result<Self> {
        let Some(first) = records.first() else {
            bail!("cannot calibrate price range: dataset is empty");
        };

        let (min, max) = records
            .iter()
            .fold((first.price, first.price), |(min, max), p| {
                (min.min(p.price), max.max(p.price))
            });

        Ok(Self {
            min: min.floor(),
            max: max.ceil(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::property;

    #[test]
    fn test_calibrate_rounds_outward() {
        let records = vec![
            property("Whitefield", 50.4),
            property("Indiranagar", 120.2),
            property("Hebbal", 75.0),
        ];

        let bounds = PriceBounds::calibrate(&records).unwrap();
        assert_eq!(bounds, PriceBounds { min: 50.0, max: 121.0 });
    }

    #[test]
    fn test_single_record() {
        let bounds = PriceBounds::calibrate(&[property("Hebbal", 75.0)]).unwrap();
        assert_eq!(bounds.min, 75.0);
        assert_eq!(bounds.max, 75.0);
    }

    #[test]
    fn test_empty_dataset_is_error() {
        let err = PriceBounds::calibrate(&[]).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}
