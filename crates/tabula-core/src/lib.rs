//! # tabula-core
//!
//! Core data structures shared by the tabula crates.
//!
//! - [`CellAddress`] and [`CellRange`] - cell addressing, ranges and
//!   formula references such as `Sheet1!$A$1:$A$10`
//! - [`Workbook`] and [`Sheet`] - the sheet registry charts resolve their
//!   data ranges against
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::{CellRange, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let id = workbook.add_worksheet("Sales Q1").unwrap();
//! let sheet = workbook.sheet(id).unwrap();
//!
//! let range = CellRange::parse("A1:A10").unwrap();
//! assert_eq!(range.to_formula_string(sheet.name()), "'Sales Q1'!$A$1:$A$10");
//! ```

pub mod cell;
pub mod error;
pub mod sheet;
pub mod workbook;

pub use cell::{escape_sheet_name, CellAddress, CellRange};
pub use error::{Error, Result};
pub use sheet::{Sheet, SheetId, SheetKind};
pub use workbook::Workbook;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
