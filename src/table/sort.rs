/// Column ordering for the comparison table
///
/// Cost columns sort by the magnitude recovered from their formatted text
/// in the currently selected unit, so the order can change when the unit
/// changes. Every other column sorts as text.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

use super::cost::{extract_magnitude, format_cost, format_optional_cost, Unit};
use crate::state::data::Solution;

/// A column of the comparison table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Column {
    Name,
    Type,
    PrivacyLevel,
    EthTransfer,
    Erc20Transfer,
    Erc20Approval,
    Speed,
    Ux,
}

/// Sort direction of an active column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Active sort, `None` meaning authored order
pub type SortKey = Option<(Column, Direction)>;

impl Column {
    /// All columns, in display order
    pub const ALL: [Column; 8] = [
        Column::Name,
        Column::Type,
        Column::PrivacyLevel,
        Column::EthTransfer,
        Column::Erc20Transfer,
        Column::Erc20Approval,
        Column::Speed,
        Column::Ux,
    ];

    /// Header text
    pub fn label(self) -> &'static str {
        match self {
            Column::Name => "Solution",
            Column::Type => "Type",
            Column::PrivacyLevel => "Privacy Level",
            Column::EthTransfer => "ETH Transfer Cost",
            Column::Erc20Transfer => "ERC-20 Transfer Cost",
            Column::Erc20Approval => "ERC-20 Approval Cost",
            Column::Speed => "Speed",
            Column::Ux => "UX",
        }
    }

    /// Whether the column holds a cost (sorted by magnitude)
    pub fn is_cost(self) -> bool {
        matches!(
            self,
            Column::EthTransfer | Column::Erc20Transfer | Column::Erc20Approval
        )
    }

    /// Display text of this column for `solution`, costs shown in `unit`
    pub fn cell(self, solution: &Solution, unit: Unit) -> &str {
        match self {
            Column::Name => &solution.name,
            Column::Type => &solution.kind,
            Column::PrivacyLevel => &solution.privacy_level,
            Column::EthTransfer => format_cost(&solution.eth_transfer, unit),
            Column::Erc20Transfer => format_optional_cost(solution.erc20_transfer.as_ref(), unit),
            Column::Erc20Approval => format_optional_cost(solution.erc20_approval.as_ref(), unit),
            Column::Speed => &solution.speed,
            Column::Ux => &solution.ux,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compare two cells of `column` in ascending sense.
///
/// Callers reverse the result for descending order.
pub fn compare(a: &str, b: &str, column: Column) -> Ordering {
    if column.is_cost() {
        // Infinity (N/A) equals itself and sorts after every finite cost
        extract_magnitude(a).total_cmp(&extract_magnitude(b))
    } else {
        compare_text(a, b)
    }
}

thread_local! {
    /// Root-locale collator, tertiary strength
    static COLLATOR: Option<Collator> =
        match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!(%err, "Collator unavailable, text columns sort by code point");
                None
            }
        };
}

/// Locale-aware text ordering
fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

/// Order `solutions` for display.
///
/// With no active sort the authored order is returned as-is. Sorting is
/// stable, so rows with equal keys keep their relative order in both
/// directions. The input slice is never reordered.
pub fn sorted_view(solutions: &[Solution], sort: SortKey, unit: Unit) -> Vec<&Solution> {
    let mut rows: Vec<&Solution> = solutions.iter().collect();

    if let Some((column, direction)) = sort {
        rows.sort_by(|a, b| {
            let ordering = compare(column.cell(a, unit), column.cell(b, unit), column);
            match direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            }
        });
    }

    rows
}
