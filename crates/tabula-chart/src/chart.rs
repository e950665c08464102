//! Chart types

use std::collections::BTreeMap;

use tabula_core::{CellRange, Sheet, SheetId, Workbook};

use crate::axis::{Axis, AxisHandle, AxisPosition, AxisSet};
use crate::chart_type::{BarDirection, ChartType};
use crate::legend::Legend;
use crate::series::{Series, SeriesHandle, SeriesSet};

/// Chart definition
///
/// A chart is either built in code (type, title and [`Chart::add_series`]
/// calls) or loaded from a chart part with [`load_chart`](crate::load_chart).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    chart_type: Option<ChartType>,
    title: Option<String>,
    series: SeriesSet,
    axes: AxisSet,
    /// Titles requested before any axis exists, applied when axes are synthesized
    axis_titles: BTreeMap<AxisPosition, String>,
    legend: Option<Legend>,
    bar_direction: BarDirection,
    /// Sheet the chart lives on
    owner: Option<SheetId>,
}

impl Chart {
    /// Create a new chart with no type set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chart that lives on `owner`
    pub fn for_sheet(owner: SheetId) -> Self {
        Self {
            owner: Some(owner),
            ..Self::default()
        }
    }

    /// Create a new chart of the given type
    pub fn with_type(chart_type: ChartType) -> Self {
        Self {
            chart_type: Some(chart_type),
            ..Self::default()
        }
    }

    pub fn chart_type(&self) -> Option<ChartType> {
        self.chart_type
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = Some(chart_type);
    }

    /// Chart title, if one is set
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Set chart title. An empty string clears it.
    pub fn set_title<S: Into<String>>(&mut self, title: S) {
        let title = title.into();
        self.title = if title.is_empty() { None } else { Some(title) };
    }

    /// Set chart title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.set_title(title);
        self
    }

    /// Title requested for the axis at `position`
    pub fn axis_title(&self, position: AxisPosition) -> Option<&str> {
        self.axis_titles.get(&position).map(String::as_str)
    }

    /// Request a title for the axis at `position`.
    ///
    /// The title is attached when default axes are synthesized on save. It
    /// does not touch axes the chart already has.
    pub fn set_axis_title<S: Into<String>>(&mut self, position: AxisPosition, title: S) {
        let title = title.into();
        if title.is_empty() {
            self.axis_titles.remove(&position);
        } else {
            self.axis_titles.insert(position, title);
        }
    }

    pub(crate) fn axis_titles(&self) -> &BTreeMap<AxisPosition, String> {
        &self.axis_titles
    }

    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    /// Append a series
    pub fn push_series(&mut self, series: Series) -> SeriesHandle {
        self.series.push(series)
    }

    pub fn axes(&self) -> &AxisSet {
        &self.axes
    }

    /// Append an axis
    pub fn push_axis(&mut self, axis: Axis) -> AxisHandle {
        self.axes.push(axis)
    }

    pub(crate) fn replace_axes(&mut self, axes: AxisSet) {
        self.axes = axes;
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    pub fn set_legend(&mut self, legend: Option<Legend>) {
        self.legend = legend;
    }

    /// Bar orientation, used by bar and 3-D bar charts
    pub fn bar_direction(&self) -> BarDirection {
        self.bar_direction
    }

    pub fn set_bar_direction(&mut self, direction: BarDirection) {
        self.bar_direction = direction;
    }

    /// The sheet this chart lives on
    pub fn owner(&self) -> Option<SheetId> {
        self.owner
    }

    /// Add the data series found in `range` of `sheet`.
    ///
    /// - A single row or column becomes one series over the whole range.
    /// - A range with more rows than columns yields one series per column.
    /// - Any other range yields one series per row.
    ///
    /// For scatter and bubble charts the first column (or row) is not
    /// plotted; it becomes the shared category source of every series.
    ///
    /// Invalid ranges and non-worksheet sheets are ignored.
    pub fn add_series(&mut self, range: &CellRange, sheet: &Sheet) {
        if !range.is_valid() || !sheet.is_worksheet() {
            log::debug!(
                "ignoring series range {} on sheet '{}'",
                range,
                sheet.name()
            );
            return;
        }

        let name = sheet.name();
        let reserve_first = self.chart_type.map_or(false, ChartType::uses_xy_values);

        if range.col_count() == 1 || range.row_count() == 1 {
            self.series.push(Series::new(range.to_formula_string(name)));
        } else if u32::from(range.col_count()) < range.row_count() {
            let mut first = range.first_column();
            let mut categories = None;
            if reserve_first {
                categories = Some(range.column_slice(first).to_formula_string(name));
                first += 1;
            }
            for col in first..=range.last_column() {
                self.series.push(Series {
                    category_source: categories.clone(),
                    value_source: Some(range.column_slice(col).to_formula_string(name)),
                });
            }
        } else {
            let mut first = range.first_row();
            let mut categories = None;
            if reserve_first {
                categories = Some(range.row_slice(first).to_formula_string(name));
                first += 1;
            }
            for row in first..=range.last_row() {
                self.series.push(Series {
                    category_source: categories.clone(),
                    value_source: Some(range.row_slice(row).to_formula_string(name)),
                });
            }
        }
    }

    /// Add the data series in `range`, resolving the sheet through `workbook`.
    ///
    /// `sheet` defaults to the chart's owner. Unknown sheets are ignored like
    /// non-worksheet sheets.
    pub fn add_series_in(&mut self, workbook: &Workbook, range: &CellRange, sheet: Option<SheetId>) {
        match sheet.or(self.owner).and_then(|id| workbook.sheet(id)) {
            Some(sheet) => self.add_series(range, sheet),
            None => log::debug!("no sheet to resolve series range {} against", range),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tabula_core::CellAddress;

    fn values(chart: &Chart) -> Vec<&str> {
        chart.series().iter().filter_map(Series::values).collect()
    }

    #[test]
    fn test_single_column_is_one_series() {
        let sheet = Sheet::worksheet("Sheet1");
        for chart_type in [ChartType::Bar, ChartType::Scatter] {
            let mut chart = Chart::with_type(chart_type);
            chart.add_series(&CellRange::parse("A1:A10").unwrap(), &sheet);
            chart.add_series(&CellRange::parse("B2:F2").unwrap(), &sheet);

            assert_eq!(values(&chart), vec!["Sheet1!$A$1:$A$10", "Sheet1!$B$2:$F$2"]);
            assert!(chart.series().iter().all(|s| s.categories().is_none()));
        }
    }

    #[test]
    fn test_column_based_series() {
        let sheet = Sheet::worksheet("Sheet1");
        let mut chart = Chart::with_type(ChartType::Line);
        chart.add_series(&CellRange::parse("A1:C10").unwrap(), &sheet);

        assert_eq!(
            values(&chart),
            vec!["Sheet1!$A$1:$A$10", "Sheet1!$B$1:$B$10", "Sheet1!$C$1:$C$10"]
        );
        assert!(chart.series().iter().all(|s| s.category_source.is_none()));
    }

    #[test]
    fn test_tall_range_past_u16_rows() {
        let sheet = Sheet::worksheet("Sheet1");
        let mut chart = Chart::with_type(ChartType::Area);
        chart.add_series(&CellRange::parse("A1:B70000").unwrap(), &sheet);

        assert_eq!(
            values(&chart),
            vec!["Sheet1!$A$1:$A$70000", "Sheet1!$B$1:$B$70000"]
        );

        // Wider than tall stays row-based even with many columns.
        let mut wide = Chart::with_type(ChartType::Area);
        wide.add_series(&CellRange::parse("A1:XFD2").unwrap(), &sheet);
        assert_eq!(values(&wide), vec!["Sheet1!$A$1:$XFD$1", "Sheet1!$A$2:$XFD$2"]);
    }

    #[test]
    fn test_scatter_reserves_first_column() {
        let sheet = Sheet::worksheet("Sheet1");
        let mut chart = Chart::with_type(ChartType::Scatter);
        chart.add_series(&CellRange::parse("A1:C10").unwrap(), &sheet);

        assert_eq!(chart.series().len(), 2);
        assert_eq!(values(&chart), vec!["Sheet1!$B$1:$B$10", "Sheet1!$C$1:$C$10"]);
        for series in chart.series() {
            assert_eq!(series.categories(), Some("Sheet1!$A$1:$A$10"));
        }
    }

    #[test]
    fn test_row_based_series() {
        let sheet = Sheet::worksheet("Data Sheet");
        let mut chart = Chart::with_type(ChartType::Bubble);
        chart.add_series(&CellRange::parse("B2:E4").unwrap(), &sheet);

        assert_eq!(
            values(&chart),
            vec!["'Data Sheet'!$B$3:$E$3", "'Data Sheet'!$B$4:$E$4"]
        );
        assert_eq!(
            chart.series().iter().next().unwrap().categories(),
            Some("'Data Sheet'!$B$2:$E$2")
        );

        // Square ranges are split by row.
        let mut bar = Chart::with_type(ChartType::Bar);
        bar.add_series(&CellRange::parse("A1:B2").unwrap(), &sheet);
        assert_eq!(
            values(&bar),
            vec!["'Data Sheet'!$A$1:$B$1", "'Data Sheet'!$A$2:$B$2"]
        );
    }

    #[test]
    fn test_ignored_inputs() {
        let mut chart = Chart::with_type(ChartType::Bar);
        let inverted = CellRange {
            start: CellAddress::new(9, 0),
            end: CellAddress::new(0, 0),
        };
        chart.add_series(&inverted, &Sheet::worksheet("Sheet1"));
        chart.add_series(&CellRange::parse("A1:A5").unwrap(), &Sheet::chartsheet("Chart1"));

        assert!(chart.series().is_empty());
    }

    #[test]
    fn test_add_series_in_uses_owner() {
        let mut workbook = Workbook::new();
        let data = workbook.add_worksheet("Data").unwrap();
        let charts = workbook.add_chartsheet("Chart1").unwrap();
        let range = CellRange::parse("A1:A3").unwrap();

        let mut on_chartsheet = Chart::for_sheet(charts);
        on_chartsheet.add_series_in(&workbook, &range, None);
        assert!(on_chartsheet.series().is_empty());
        on_chartsheet.add_series_in(&workbook, &range, Some(data));
        assert_eq!(values(&on_chartsheet), vec!["Data!$A$1:$A$3"]);

        let mut on_data = Chart::for_sheet(data);
        on_data.add_series_in(&workbook, &range, None);
        assert_eq!(on_data.series().len(), 1);
        assert_eq!(on_data.owner(), Some(data));
    }

    #[test]
    fn test_titles() {
        let mut chart = Chart::new().with_title("Revenue");
        assert_eq!(chart.title(), Some("Revenue"));
        chart.set_title("");
        assert_eq!(chart.title(), None);

        chart.set_axis_title(AxisPosition::Left, "USD");
        assert_eq!(chart.axis_title(AxisPosition::Left), Some("USD"));
        chart.set_axis_title(AxisPosition::Left, "");
        assert_eq!(chart.axis_title(AxisPosition::Left), None);
    }
}
