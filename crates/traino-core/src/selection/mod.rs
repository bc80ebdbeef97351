//! Grouped selection state.

mod model;

pub use model::GroupedSelection;
