pub mod controller;
pub mod form;

pub use controller::{Controller, Event};
pub use form::{Form, NumberInput, SelectControl};

use crate::render::Grid;

/// Where the page is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Dataset not loaded yet
    #[default]
    Idle,
    /// Full, unfiltered list on screen
    Loaded,
    /// A filtered view on screen
    Filtered,
}

/// The grid element, holding whatever was drawn last
#[derive(Debug, Clone, Default)]
pub struct GridView {
    markup: String,
    draws: usize,
}

impl GridView {
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of redraws since the page was created
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl Grid for GridView {
    fn draw(&mut self, markup: String) {
        self.markup = markup;
        self.draws += 1;
    }
}

/// The host page: the listing form plus the card grid
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub form: Form,
    pub grid: GridView,
    pub state: ViewState,
}
