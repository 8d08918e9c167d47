/// Shared data structures for the comparison table
///
/// These structs mirror the JSON dataset one-to-one and are read-only
/// once loaded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::table::cost::CostRecord;

/// A transfer method shown as one row of the table
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Display name, unique within a dataset (e.g. "Railgun")
    pub name: String,
    /// Kind of solution (e.g. "Mixer", "Shielded pool", "L2")
    #[serde(rename = "type")]
    pub kind: String,
    /// Privacy classification (e.g. "None", "Medium", "High")
    pub privacy_level: String,
    /// Cost of a plain ETH transfer (always present)
    pub eth_transfer: CostRecord,
    /// Cost of an ERC-20 transfer, if the solution supports tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erc20_transfer: Option<CostRecord>,
    /// Cost of the approval step some solutions need before a token deposit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erc20_approval: Option<CostRecord>,
    /// How long a transfer takes (e.g. "2-5 min")
    pub speed: String,
    /// Usability rating (e.g. "Good")
    pub ux: String,
}

/// The full comparison: the transparent baseline plus the private options
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Non-private reference row, always rendered first
    pub baseline: Solution,
    /// Private transfer solutions, in their authored order
    pub solutions: Vec<Solution>,
    /// When the figures were last checked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
}
