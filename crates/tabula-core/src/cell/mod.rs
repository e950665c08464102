//! Cell addressing

mod address;

pub use address::{escape_sheet_name, CellAddress, CellRange};
