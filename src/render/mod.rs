pub mod highlight;

pub use highlight::{highlight, segments, strip_highlights, Segment};

use crate::filter::SearchText;
use crate::models::Property;
use highlight::escape_html;

/// Markup shown in place of the grid when nothing matches
pub const NO_RESULTS: &str =
    r#"<p style="text-align:center; font-weight:bold;">No properties found.</p>"#;

/// Destination for rendered listing markup.
///
/// Every draw replaces whatever was shown before.
pub trait Grid {
    fn draw(&mut self, markup: String);
}

/// Render `records` as property cards, highlighting the search text in
/// location and society.
pub fn render(records: &[Property], search: Option<&SearchText>) -> String {
    if records.is_empty() {
        return NO_RESULTS.to_string();
    }

    records
        .iter()
        .map(|p| render_card(p, search))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render straight into a grid
pub fn draw(grid: &mut dyn Grid, records: &[Property], search: Option<&SearchText>) {
    grid.draw(render(records, search));
}

fn render_card(p: &Property, search: Option<&SearchText>) -> String {
    format!(
        r#"<div class="property-card">
  <img src="{image}" alt="{alt}">
  <div class="property-details">
    <h3>{location} - {bedrooms} - ₹{price} Lakhs</h3>
    <p>Area Type: {area_type}</p>
    <p>Bathrooms: {bathrooms} | Balcony: {balcony}</p>
    <p>Availability: {availability}</p>
    <p>Society: {society}</p>
  </div>
</div>"#,
        image = escape_html(&p.image),
        alt = escape_html(&p.location),
        location = highlight(&p.location, search),
        bedrooms = p.bedrooms,
        price = p.price,
        area_type = escape_html(&p.area_type),
        bathrooms = p.bathrooms,
        balcony = p.balcony_label(),
        availability = escape_html(&p.availability),
        society = highlight(p.society_label(), search),
    )
}
