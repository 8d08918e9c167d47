/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Dataset loading and validation (dataset.rs)
/// - Selected unit and sort, driven by user actions (view.rs)

pub mod data;
pub mod dataset;
pub mod view;
