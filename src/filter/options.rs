use super::criteria::Selections;
use crate::models::{Field, FieldValue, Property};
use std::collections::HashSet;

/// Distinct values of `field` across `records`.
///
/// Numeric fields come back in ascending order, with any values that are
/// not numbers (sqft ranges such as `"1133 - 1384"`) after them in the
/// order first seen. Locations keep the order first seen.
pub fn distinct_values<'a, I>(records: I, field: Field) -> Vec<FieldValue>
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut seen_numbers = HashSet::new();
    let mut seen_text = HashSet::new();
    let mut numbers = Vec::new();
    let mut text = Vec::new();

    for property in records {
        match property.value(field) {
            FieldValue::Number(n) => {
                // -0.0 and 0.0 are the same option
                if seen_numbers.insert((n + 0.0).to_bits()) {
                    numbers.push(n);
                }
            }
            FieldValue::Text(s) => {
                if seen_text.insert(s.clone()) {
                    text.push(s);
                }
            }
        }
    }

    if field.is_numeric() {
        numbers.sort_by(f64::total_cmp);
    }

    numbers
        .into_iter()
        .map(FieldValue::Number)
        .chain(text.into_iter().map(FieldValue::Text))
        .collect()
}

/// Options still reachable for each dropdown given the other dropdowns' selections
pub fn narrow(records: &[Property], selections: &Selections) -> Vec<(Field, Vec<FieldValue>)> {
    Field::ALL
        .iter()
        .map(|&field| {
            let others = selections.without(field);
            let subset = records.iter().filter(|p| others.admits(p));
            (field, distinct_values(subset, field))
        })
        .collect()
}
