/// Cost formatting and sort-key extraction
///
/// Costs are stored the way they are displayed: one pre-formatted string
/// per unit ("$0.50 - $2.00", "0.0002 ETH", "21,000 gas"). This module picks
/// the string for the selected unit and recovers a sortable magnitude
/// from it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel shown wherever a cost does not apply to a solution
pub const NOT_APPLICABLE: &str = "N/A";

/// Display unit for cost columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Unit {
    /// US dollars
    #[default]
    Usd,
    /// Native token (ETH)
    Eth,
    /// Gas units
    Gas,
}

impl Unit {
    /// All units, in toggle order
    pub const ALL: [Unit; 3] = [Unit::Usd, Unit::Eth, Unit::Gas];

    /// Short label used on the unit toggle
    pub fn label(self) -> &'static str {
        match self {
            Unit::Usd => "USD",
            Unit::Eth => "ETH",
            Unit::Gas => "GAS",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One cost, pre-formatted in every supported unit
///
/// A missing value is written as [`NOT_APPLICABLE`], never left out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CostRecord {
    pub usd: String,
    pub eth: String,
    pub gas: String,
}

impl CostRecord {
    /// Check that every unit carries some text
    pub fn is_complete(&self) -> bool {
        Unit::ALL
            .iter()
            .all(|&unit| !format_cost(self, unit).trim().is_empty())
    }
}

/// Select the display string of `record` for `unit`
pub fn format_cost(record: &CostRecord, unit: Unit) -> &str {
    // Exhaustive on purpose: a new unit without a field fails to compile
    match unit {
        Unit::Usd => &record.usd,
        Unit::Eth => &record.eth,
        Unit::Gas => &record.gas,
    }
}

/// Like [`format_cost`], for auxiliary costs a solution may not have
pub fn format_optional_cost(record: Option<&CostRecord>, unit: Unit) -> &str {
    match record {
        Some(record) => format_cost(record, unit),
        None => NOT_APPLICABLE,
    }
}

/// Sort key of a formatted cost string
///
/// The key is the first numeric token in the string, so a range such as
/// "$0.50 - $2.00" sorts by its lower bound. A token is a run of digits
/// with at most one decimal point, which may lead (".50"); comma
/// thousands separators ("21,000") are read as part of the token.
///
/// Not-applicable values and strings without any digits map to
/// `f64::INFINITY`, which puts them last in ascending order.
pub fn extract_magnitude(display: &str) -> f64 {
    if display.contains(NOT_APPLICABLE) {
        return f64::INFINITY;
    }

    let bytes = display.as_bytes();
    let Some(start) = bytes.iter().position(u8::is_ascii_digit) else {
        return f64::INFINITY;
    };

    // ".50" reads as 0.50
    let mut seen_point = start > 0 && bytes[start - 1] == b'.';
    let mut token = String::from(if seen_point { "0." } else { "" });

    for i in start..bytes.len() {
        match bytes[i] {
            b @ b'0'..=b'9' => token.push(b as char),
            b'.' if !seen_point && digit_at(bytes, i + 1) => {
                seen_point = true;
                token.push('.');
            }
            b',' if !seen_point && is_thousands_group(bytes, i) => {}
            _ => break,
        }
    }

    token.parse().unwrap_or(f64::INFINITY)
}

fn digit_at(bytes: &[u8], index: usize) -> bool {
    bytes.get(index).is_some_and(u8::is_ascii_digit)
}

/// A comma followed by exactly three digits
fn is_thousands_group(bytes: &[u8], comma: usize) -> bool {
    (1..=3).all(|offset| digit_at(bytes, comma + offset)) && !digit_at(bytes, comma + 4)
}
