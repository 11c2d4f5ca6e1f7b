use crate::filter::{distinct_values, Criteria, PriceBounds, PriceRange, SearchText, Selections, SortOrder};
use crate::models::{Field, FieldValue, Property};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A dropdown: an implicit "All" entry followed by `options`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectControl {
    pub options: Vec<FieldValue>,
    /// `None` is the "All" entry
    pub selected: Option<FieldValue>,
}

impl SelectControl {
    /// Current value as the form reports it; "All" is the empty string
    pub fn value(&self) -> String {
        self.selected
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    /// Choose an option by its form value. Values not on offer select "All".
    pub fn choose(&mut self, field: Field, raw: &str) -> bool {
        self.selected = FieldValue::parse(field, raw).filter(|v| self.options.contains(v));
        self.selected.is_some()
    }

    /// Replace the options, clearing any selection
    pub fn populate(&mut self, options: Vec<FieldValue>) {
        self.options = options;
        self.selected = None;
    }

    /// Replace the options, keeping the selection only if it is still offered
    pub fn narrow_to(&mut self, options: Vec<FieldValue>) {
        if let Some(current) = &self.selected {
            if !options.contains(current) {
                debug!("Selection {} no longer available, reverting to All", current);
                self.selected = None;
            }
        }
        self.options = options;
    }
}

/// A number input with optional bounds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberInput {
    pub value: String,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberInput {
    fn calibrate(&mut self, value: f64, bounds: PriceBounds) {
        self.value = value.to_string();
        self.min = Some(bounds.min);
        self.max = Some(bounds.max);
    }
}

/// In-memory model of the listing form on the host page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub total_sqft: SelectControl,
    pub bedrooms: SelectControl,
    pub bathrooms: SelectControl,
    pub location: SelectControl,
    pub min_price: NumberInput,
    pub max_price: NumberInput,
    /// `low` or `high`
    pub sort_price: String,
    pub search: String,
}

impl Default for Form {
    fn default() -> Self {
        Self {
            total_sqft: SelectControl::default(),
            bedrooms: SelectControl::default(),
            bathrooms: SelectControl::default(),
            location: SelectControl::default(),
            min_price: NumberInput::default(),
            max_price: NumberInput::default(),
            sort_price: SortOrder::default().as_form_value().to_string(),
            search: String::new(),
        }
    }
}

impl Form {
    pub fn select(&self, field: Field) -> &SelectControl {
        match field {
            Field::TotalSqft => &self.total_sqft,
            Field::Bedrooms => &self.bedrooms,
            Field::Bathrooms => &self.bathrooms,
            Field::Location => &self.location,
        }
    }

    pub fn select_mut(&mut self, field: Field) -> &mut SelectControl {
        match field {
            Field::TotalSqft => &mut self.total_sqft,
            Field::Bedrooms => &mut self.bedrooms,
            Field::Bathrooms => &mut self.bathrooms,
            Field::Location => &mut self.location,
        }
    }

    pub fn selections(&self) -> Selections {
        let mut selections = Selections::default();
        for field in Field::ALL {
            selections.set(field, self.select(field).selected.clone());
        }
        selections
    }

    /// Read the current control values into filter criteria
    pub fn criteria(&self) -> Criteria {
        Criteria {
            selections: self.selections(),
            price: PriceRange::from_form(&self.min_price.value, &self.max_price.value),
            sort: SortOrder::from_form(&self.sort_price),
            search: SearchText::new(&self.search),
        }
    }

    /// Seed both price inputs from calibrated bounds
    pub fn apply_bounds(&mut self, bounds: PriceBounds) {
        self.min_price.calibrate(bounds.min, bounds);
        self.max_price.calibrate(bounds.max, bounds);
    }

    /// Fill every dropdown with the distinct values of the full dataset
    pub fn populate_options(&mut self, records: &[Property]) {
        for field in Field::ALL {
            self.select_mut(field).populate(distinct_values(records, field));
        }
    }

    pub fn apply_narrowed(&mut self, narrowed: Vec<(Field, Vec<FieldValue>)>) {
        for (field, options) in narrowed {
            self.select_mut(field).narrow_to(options);
        }
    }

    /// Restore default control values. Option lists are left as they are.
    pub fn reset(&mut self) {
        for field in Field::ALL {
            self.select_mut(field).selected = None;
        }
        let defaults = Form::default();
        self.min_price.value = defaults.min_price.value;
        self.max_price.value = defaults.max_price.value;
        self.sort_price = defaults.sort_price;
        self.search = defaults.search;
    }
}
