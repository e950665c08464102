//! # tabula-chart
//!
//! DrawingML chart parts (`xl/charts/chartN.xml`) for tabula.
//!
//! A [`Chart`] holds the chart type, series data references, axes, titles
//! and legend of one chart part. Charts are read with [`load_chart`] and
//! written with [`save_chart`]; new series are derived from a worksheet
//! range with [`Chart::add_series`].
//!
//! ```
//! use tabula_chart::{load_chart, save_chart, Chart, ChartType};
//! use tabula_core::{CellRange, Sheet};
//!
//! let sheet = Sheet::worksheet("Sales");
//! let mut chart = Chart::with_type(ChartType::Bar).with_title("Revenue");
//! chart.add_series(&CellRange::parse("A1:C4").unwrap(), &sheet);
//! assert_eq!(chart.series().len(), 3);
//!
//! let bytes = save_chart(&mut chart).unwrap();
//! let reloaded = load_chart(&bytes).unwrap();
//! assert_eq!(reloaded.series(), chart.series());
//! ```

mod axis;
mod chart;
mod chart_type;
pub mod dom;
mod error;
mod legend;
mod reader;
mod series;
mod writer;

pub use axis::{Axis, AxisHandle, AxisKind, AxisPosition, AxisSet};
pub use chart::Chart;
pub use chart_type::{BarDirection, ChartType, DefaultAxis};
pub use dom::{Document, Node, NodeId};
pub use error::{ChartError, ChartResult};
pub use legend::{Legend, LegendPosition};
pub use reader::{load_chart, load_chart_with, LoadOptions};
pub use series::{Series, SeriesHandle, SeriesSet};
pub use writer::{
    prepare_for_save, save_chart, save_chart_with, serialize, PreparedChart, SaveOptions,
};
