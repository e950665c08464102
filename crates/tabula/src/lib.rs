//! # tabula
//!
//! Read, build and write spreadsheet charts.
//!
//! tabula works on the DrawingML chart parts of XLSX packages
//! (`xl/charts/chartN.xml`). Charts can be loaded from a package, built from
//! worksheet ranges, and written back.
//!
//! ## Example
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let data = workbook.add_worksheet("Data").unwrap();
//!
//! let mut chart = Chart::for_sheet(data).with_title("Monthly totals");
//! chart.set_chart_type(ChartType::Line);
//! chart.add_series_in(&workbook, &CellRange::parse("B1:D12").unwrap(), None);
//!
//! let bytes = save_chart(&mut chart).unwrap();
//! let reloaded = load_chart(&bytes).unwrap();
//! assert_eq!(reloaded.series().len(), 3);
//!
//! // Save to file
//! // tabula::save_charts(&mut [chart], "charts.xlsx").unwrap();
//! ```

pub mod prelude;

use std::path::Path;

// Re-export core types
pub use tabula_core::{
    escape_sheet_name, CellAddress, CellRange, Error, Result, Sheet, SheetId, SheetKind,
    Workbook, MAX_COLS, MAX_ROWS, MAX_SHEET_NAME_LEN,
};

// Re-export chart types
pub use tabula_chart::{
    dom, load_chart, load_chart_with, prepare_for_save, save_chart, save_chart_with, serialize,
    Axis, AxisHandle, AxisKind, AxisPosition, AxisSet, BarDirection, Chart, ChartError,
    ChartResult, ChartType, DefaultAxis, Legend, LegendPosition, LoadOptions, PreparedChart,
    SaveOptions, Series, SeriesHandle, SeriesSet,
};

// Re-export I/O types
pub use tabula_xlsx::{XlsxChartReader, XlsxChartWriter, XlsxError, XlsxResult};

/// Open the charts of the package at `path`
pub fn open_charts<P: AsRef<Path>>(path: P) -> Result<Vec<Chart>> {
    let path = path.as_ref();
    match package_extension(path).as_deref() {
        Some("xlsx") | Some("xlsm") => {
            XlsxChartReader::read_file(path).map_err(|e| Error::other(e.to_string()))
        }
        _ => Err(Error::other(format!(
            "Unsupported file format: {}",
            path.display()
        ))),
    }
}

/// Save `charts` as a package at `path`
pub fn save_charts<P: AsRef<Path>>(charts: &mut [Chart], path: P) -> Result<()> {
    let path = path.as_ref();
    match package_extension(path).as_deref() {
        Some("xlsx") => {
            XlsxChartWriter::write_file(charts, path).map_err(|e| Error::other(e.to_string()))
        }
        _ => Err(Error::other(format!(
            "Unsupported file format: {}",
            path.display()
        ))),
    }
}

fn package_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
