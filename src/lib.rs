//! Real-estate listing browser.
//!
//! Loads a JSON array of property listings once, then filters, sorts,
//! searches and renders them as a card grid in response to form events.
//! The pure pipeline lives in [`filter`] and [`render`]; [`ui`] models the
//! host page and routes its events.

pub mod config;
pub mod filter;
pub mod models;
pub mod render;
pub mod sources;
pub mod store;
pub mod ui;

#[cfg(test)]
mod test_support;
