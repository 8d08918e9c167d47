/// Interactive state of one comparison view
///
/// Holds the selected cost unit and the active sort. It is created once per
/// window, changed only by user actions and never written anywhere.

use tracing::debug;

use crate::table::cost::Unit;
use crate::table::sort::{Column, Direction, SortKey};

/// Sort affordance shown on a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    None,
    Ascending,
    Descending,
}

impl SortIndicator {
    /// Arrow appended to the header label
    pub fn arrow(self) -> &'static str {
        match self {
            SortIndicator::None => "",
            SortIndicator::Ascending => " ▲",
            SortIndicator::Descending => " ▼",
        }
    }
}

/// Selected unit plus active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    /// Unit cost columns are displayed (and sorted) in
    pub unit: Unit,
    /// Active sort column and direction, `None` for authored order
    pub sort: SortKey,
}

impl ViewState {
    /// Fresh state: USD, unsorted
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a click on a column header.
    ///
    /// Each column cycles ascending → descending → unsorted. Clicking a
    /// different column starts over at ascending.
    pub fn activate_column(&mut self, column: Column) {
        self.sort = match self.sort {
            Some((active, Direction::Ascending)) if active == column => {
                Some((column, Direction::Descending))
            }
            Some((active, Direction::Descending)) if active == column => None,
            _ => Some((column, Direction::Ascending)),
        };
        debug!(?column, sort = ?self.sort, "Column activated");
    }

    /// Switch the display unit; the active sort is kept
    pub fn select_unit(&mut self, unit: Unit) {
        self.unit = unit;
        debug!(%unit, "Unit selected");
    }

    /// Header indicator for `column`
    pub fn indicator(&self, column: Column) -> SortIndicator {
        match self.sort {
            Some((active, Direction::Ascending)) if active == column => SortIndicator::Ascending,
            Some((active, Direction::Descending)) if active == column => SortIndicator::Descending,
            _ => SortIndicator::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.unit, Unit::Usd);
        assert_eq!(state.sort, None);
        for column in Column::ALL {
            assert_eq!(state.indicator(column), SortIndicator::None);
        }
    }

    #[test]
    fn test_three_state_cycle() {
        let mut state = ViewState::new();

        state.activate_column(Column::Speed);
        assert_eq!(state.sort, Some((Column::Speed, Direction::Ascending)));

        state.activate_column(Column::Speed);
        assert_eq!(state.sort, Some((Column::Speed, Direction::Descending)));

        state.activate_column(Column::Speed);
        assert_eq!(state.sort, None);

        state.activate_column(Column::Speed);
        assert_eq!(state.sort, Some((Column::Speed, Direction::Ascending)));
    }

    #[test]
    fn test_other_column_restarts_ascending() {
        let mut state = ViewState::new();
        state.activate_column(Column::Name);
        state.activate_column(Column::Name);
        assert_eq!(state.indicator(Column::Name), SortIndicator::Descending);

        state.activate_column(Column::EthTransfer);
        assert_eq!(state.sort, Some((Column::EthTransfer, Direction::Ascending)));
        assert_eq!(state.indicator(Column::Name), SortIndicator::None);
        assert_eq!(state.indicator(Column::EthTransfer), SortIndicator::Ascending);
    }

    #[test]
    fn test_unit_change_keeps_sort() {
        let mut state = ViewState::new();
        state.activate_column(Column::Erc20Transfer);
        state.activate_column(Column::Erc20Transfer);

        state.select_unit(Unit::Gas);
        assert_eq!(state.unit, Unit::Gas);
        assert_eq!(state.sort, Some((Column::Erc20Transfer, Direction::Descending)));
    }
}
