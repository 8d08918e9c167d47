use super::cost::Unit;
use super::sort::{sorted_view, Column};
use crate::state::data::{Dataset, Solution};
use crate::state::view::{SortIndicator, ViewState};

/// One column header
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub column: Column,
    pub label: &'static str,
    pub indicator: SortIndicator,
}

/// One rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Cell text in [`Column::ALL`] order
    pub cells: Vec<String>,
    /// The transparent reference row
    pub is_baseline: bool,
}

impl TableRow {
    fn new(solution: &Solution, unit: Unit, is_baseline: bool) -> Self {
        Self {
            cells: Column::ALL
                .iter()
                .map(|column| column.cell(solution, unit).to_string())
                .collect(),
            is_baseline,
        }
    }
}

/// Everything a surface needs to draw the table for one state
#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub unit: Unit,
    pub headers: Vec<HeaderCell>,
    /// Baseline first, then the solutions in view order
    pub rows: Vec<TableRow>,
}

impl TableModel {
    pub fn build(dataset: &Dataset, state: &ViewState) -> Self {
        let headers = Column::ALL
            .iter()
            .map(|&column| HeaderCell {
                column,
                label: column.label(),
                indicator: state.indicator(column),
            })
            .collect();

        // The baseline never takes part in sorting
        let rows = std::iter::once(TableRow::new(&dataset.baseline, state.unit, true))
            .chain(
                sorted_view(&dataset.solutions, state.sort, state.unit)
                    .into_iter()
                    .map(|solution| TableRow::new(solution, state.unit, false)),
            )
            .collect();

        Self {
            unit: state.unit,
            headers,
            rows,
        }
    }
}
