//! # tabula-xlsx
//!
//! Chart parts of XLSX (Office Open XML) packages for tabula.
//!
//! Only the `xl/charts/chartN.xml` parts are handled here; the rest of the
//! package is left to the caller.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxChartReader;
pub use writer::XlsxChartWriter;

/// Content type of a DrawingML chart part
pub const CHART_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.drawingml.chart+xml";

/// Package path of the `n`th chart part (1-based)
pub fn chart_part_name(n: usize) -> String {
    format!("xl/charts/chart{}.xml", n)
}
