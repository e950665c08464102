//! Prelude module - common imports for tabula users
//!
//! ```rust
//! use tabula::prelude::*;
//! ```

pub use crate::{
    // Chart types
    load_chart,
    save_chart,
    AxisKind,
    AxisPosition,
    BarDirection,
    // Cell types
    CellAddress,
    CellRange,
    Chart,
    ChartError,
    ChartType,
    // Error types
    Error,
    Legend,
    LegendPosition,
    LoadOptions,
    Result,
    SaveOptions,
    Series,
    // Main types
    Sheet,
    SheetId,
    Workbook,
    // I/O types
    XlsxChartReader,
    XlsxChartWriter,
};
