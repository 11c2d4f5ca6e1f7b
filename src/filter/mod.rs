pub mod criteria;
pub mod engine;
pub mod options;
pub mod range;
pub mod search;

pub use criteria::{Criteria, PriceRange, Selections, SortOrder};
pub use engine::filter;
pub use options::{distinct_values, narrow};
pub use range::PriceBounds;
pub use search::SearchText;
