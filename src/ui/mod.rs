/// Rendering surfaces for the comparison table
///
/// - `table.rs` - iced widgets for the desktop window
/// - `plain.rs` - aligned text for `--print`

pub mod plain;
pub mod table;
