/// Comparison table core
///
/// Pure functions over the dataset and the view state:
/// - Cost formatting and sort-key extraction (cost.rs)
/// - Column comparator and sort engine (sort.rs)
/// - Presentation model consumed by the UI surfaces (model.rs)

pub mod cost;
pub mod model;
pub mod sort;

pub use model::TableModel;
