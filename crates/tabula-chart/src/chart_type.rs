//! Chart type enumeration

use std::fmt;

use crate::axis::{AxisKind, AxisPosition};

/// The plot types a chart part can hold.
///
/// Each variant corresponds to one `c:*Chart` element inside `c:plotArea`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChartType {
    Area,
    Area3D,
    Line,
    Line3D,
    Stock,
    Radar,
    Scatter,
    Pie,
    Pie3D,
    Doughnut,
    Bar,
    Bar3D,
    OfPie,
    Surface,
    Surface3D,
    Bubble,
}

/// Template for an axis synthesized at save time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultAxis {
    pub kind: AxisKind,
    pub position: AxisPosition,
    pub id: u32,
    pub cross_id: u32,
}

const fn default_axis(kind: AxisKind, position: AxisPosition, id: u32, cross_id: u32) -> DefaultAxis {
    DefaultAxis {
        kind,
        position,
        id,
        cross_id,
    }
}

const CATEGORY_VALUE: &[DefaultAxis] = &[
    default_axis(AxisKind::Category, AxisPosition::Bottom, 0, 1),
    default_axis(AxisKind::Value, AxisPosition::Left, 1, 0),
];

const CATEGORY_VALUE_SERIES: &[DefaultAxis] = &[
    default_axis(AxisKind::Category, AxisPosition::Bottom, 0, 1),
    default_axis(AxisKind::Value, AxisPosition::Left, 1, 0),
    default_axis(AxisKind::Series, AxisPosition::Bottom, 2, 0),
];

const VALUE_VALUE: &[DefaultAxis] = &[
    default_axis(AxisKind::Value, AxisPosition::Bottom, 0, 1),
    default_axis(AxisKind::Value, AxisPosition::Left, 1, 0),
];

impl ChartType {
    /// Every chart type, in the order the loader probes the plot area
    pub const ALL: [ChartType; 16] = [
        ChartType::Area,
        ChartType::Area3D,
        ChartType::Line,
        ChartType::Line3D,
        ChartType::Stock,
        ChartType::Radar,
        ChartType::Scatter,
        ChartType::Pie,
        ChartType::Pie3D,
        ChartType::Doughnut,
        ChartType::Bar,
        ChartType::Bar3D,
        ChartType::OfPie,
        ChartType::Surface,
        ChartType::Surface3D,
        ChartType::Bubble,
    ];

    /// Local element name, e.g. `barChart`
    pub fn local_name(self) -> &'static str {
        match self {
            ChartType::Area => "areaChart",
            ChartType::Area3D => "area3DChart",
            ChartType::Line => "lineChart",
            ChartType::Line3D => "line3DChart",
            ChartType::Stock => "stockChart",
            ChartType::Radar => "radarChart",
            ChartType::Scatter => "scatterChart",
            ChartType::Pie => "pieChart",
            ChartType::Pie3D => "pie3DChart",
            ChartType::Doughnut => "doughnutChart",
            ChartType::Bar => "barChart",
            ChartType::Bar3D => "bar3DChart",
            ChartType::OfPie => "ofPieChart",
            ChartType::Surface => "surfaceChart",
            ChartType::Surface3D => "surface3DChart",
            ChartType::Bubble => "bubbleChart",
        }
    }

    /// Qualified element name, e.g. `c:barChart`
    pub fn element_name(self) -> &'static str {
        match self {
            ChartType::Area => "c:areaChart",
            ChartType::Area3D => "c:area3DChart",
            ChartType::Line => "c:lineChart",
            ChartType::Line3D => "c:line3DChart",
            ChartType::Stock => "c:stockChart",
            ChartType::Radar => "c:radarChart",
            ChartType::Scatter => "c:scatterChart",
            ChartType::Pie => "c:pieChart",
            ChartType::Pie3D => "c:pie3DChart",
            ChartType::Doughnut => "c:doughnutChart",
            ChartType::Bar => "c:barChart",
            ChartType::Bar3D => "c:bar3DChart",
            ChartType::OfPie => "c:ofPieChart",
            ChartType::Surface => "c:surfaceChart",
            ChartType::Surface3D => "c:surface3DChart",
            ChartType::Bubble => "c:bubbleChart",
        }
    }

    /// Look up a chart type by element name, with or without prefix
    pub fn from_element_name(name: &str) -> Option<Self> {
        let local = name.split_once(':').map_or(name, |(_, local)| local);
        Self::ALL.into_iter().find(|t| t.local_name() == local)
    }

    /// Scatter and bubble series use `xVal`/`yVal` instead of `cat`/`val`
    pub fn uses_xy_values(self) -> bool {
        matches!(self, ChartType::Scatter | ChartType::Bubble)
    }

    pub fn is_3d(self) -> bool {
        matches!(
            self,
            ChartType::Area3D
                | ChartType::Line3D
                | ChartType::Pie3D
                | ChartType::Bar3D
                | ChartType::Surface3D
        )
    }

    /// Axes synthesized when a chart of this type is saved without any
    pub fn default_axes(self) -> &'static [DefaultAxis] {
        match self {
            ChartType::Bar
            | ChartType::Bar3D
            | ChartType::Line
            | ChartType::Area
            | ChartType::Area3D
            | ChartType::Stock
            | ChartType::Radar => CATEGORY_VALUE,
            ChartType::Line3D | ChartType::Surface | ChartType::Surface3D => {
                CATEGORY_VALUE_SERIES
            }
            ChartType::Scatter | ChartType::Bubble => VALUE_VALUE,
            ChartType::Pie | ChartType::Pie3D | ChartType::Doughnut | ChartType::OfPie => &[],
        }
    }

    /// Inclusive bounds on the number of axes a chart of this type references
    pub fn axis_count_bounds(self) -> (usize, usize) {
        match self {
            ChartType::Bar
            | ChartType::Line
            | ChartType::Area
            | ChartType::Stock
            | ChartType::Radar
            | ChartType::Scatter
            | ChartType::Bubble => (2, 2),
            ChartType::Bar3D | ChartType::Area3D | ChartType::Surface => (2, 3),
            ChartType::Line3D | ChartType::Surface3D => (3, 3),
            ChartType::Pie | ChartType::Pie3D | ChartType::Doughnut | ChartType::OfPie => (0, 0),
        }
    }

    /// Inclusive bounds on the number of series, where the type has any.
    ///
    /// Stock charts plot high-low-close or open-high-low-close series and
    /// take three or four of them.
    pub fn series_count_bounds(self) -> Option<(usize, usize)> {
        match self {
            ChartType::Stock => Some((3, 4)),
            _ => None,
        }
    }

    pub(crate) fn axis_count_description(self) -> &'static str {
        match self.axis_count_bounds() {
            (0, 0) => "no",
            (2, 2) => "exactly 2",
            (3, 3) => "exactly 3",
            _ => "2 or 3",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let local = self.local_name();
        f.write_str(local.strip_suffix("Chart").unwrap_or(local))
    }
}

/// Orientation of the bars in a bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarDirection {
    /// Horizontal bars
    Bar,
    /// Vertical bars
    #[default]
    Column,
}

impl BarDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            BarDirection::Bar => "bar",
            BarDirection::Column => "col",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bar" => Some(BarDirection::Bar),
            "col" => Some(BarDirection::Column),
            _ => None,
        }
    }
}
