//! Chart part writer
//!
//! Saving is split in two steps. [`prepare_for_save`] settles the axis set,
//! synthesizing the default axes of the chart type when the chart has none,
//! and checks that the axis and series counts fit the type. [`serialize`] then renders
//! the prepared chart. Neither step touches the chart; [`save_chart`] runs
//! both and stores the synthesized axes back into it.

mod plot;
mod sink;

use std::collections::BTreeSet;

use crate::axis::{Axis, AxisSet};
use crate::chart::Chart;
use crate::chart_type::ChartType;
use crate::error::{ChartError, ChartResult};

use sink::XmlSink;

pub(crate) const NS_CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
pub(crate) const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(crate) const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Options for serializing a chart part
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Indent nested elements by this many spaces; compact output when `None`
    pub indent: Option<usize>,
}

/// A chart whose axis set is final and ready to serialize
#[derive(Debug, Clone)]
pub struct PreparedChart<'a> {
    chart: &'a Chart,
    chart_type: ChartType,
    axes: AxisSet,
    synthesized: bool,
}

impl<'a> PreparedChart<'a> {
    pub fn chart(&self) -> &'a Chart {
        self.chart
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    /// Axes that will be written, in `c:axId` order
    pub fn axes(&self) -> &AxisSet {
        &self.axes
    }

    /// Whether the axes were synthesized from the chart type defaults
    pub fn synthesized_axes(&self) -> bool {
        self.synthesized
    }

    pub fn into_axes(self) -> AxisSet {
        self.axes
    }
}

/// Settle the axis set of `chart` for saving.
///
/// A chart without axes gets the default axes of its type. Titles requested
/// with [`Chart::set_axis_title`] go to the first synthesized axis at the
/// matching position.
pub fn prepare_for_save(chart: &Chart) -> ChartResult<PreparedChart<'_>> {
    let chart_type = chart.chart_type().ok_or(ChartError::ChartTypeNotSet)?;

    let synthesized = chart.axes().is_empty();
    let axes = if synthesized {
        default_axes(chart, chart_type)
    } else {
        chart.axes().clone()
    };

    let (min, max) = chart_type.axis_count_bounds();
    if axes.len() < min || axes.len() > max {
        return Err(ChartError::InvalidAxisCardinality {
            chart_type,
            expected: chart_type.axis_count_description(),
            actual: axes.len(),
        });
    }

    if let Some((min, max)) = chart_type.series_count_bounds() {
        let actual = chart.series().len();
        if actual < min || actual > max {
            return Err(ChartError::InvalidSeriesCount {
                chart_type,
                min,
                max,
                actual,
            });
        }
    }

    Ok(PreparedChart {
        chart,
        chart_type,
        axes,
        synthesized,
    })
}

fn default_axes(chart: &Chart, chart_type: ChartType) -> AxisSet {
    let mut axes = AxisSet::new();
    let mut titled = BTreeSet::new();

    for template in chart_type.default_axes() {
        let mut axis = Axis::new(
            template.kind,
            Some(template.position),
            template.id,
            template.cross_id,
        );
        if let Some(title) = chart.axis_titles().get(&template.position) {
            if titled.insert(template.position) {
                axis.titles.insert(template.position, title.clone());
            }
        }
        axes.push(axis);
    }

    if !axes.is_empty() {
        log::debug!("synthesized {} default axes for {} chart", axes.len(), chart_type);
    }
    axes
}

/// Render a prepared chart as a complete chart part
pub fn serialize(prepared: &PreparedChart<'_>, options: &SaveOptions) -> ChartResult<Vec<u8>> {
    let chart = prepared.chart();
    let mut sink = XmlSink::new(options.indent);

    sink.declaration()?;
    sink.start(
        "c:chartSpace",
        &[
            ("xmlns:c", NS_CHART),
            ("xmlns:a", NS_DRAWING),
            ("xmlns:r", NS_RELATIONSHIPS),
        ],
    )?;
    sink.start("c:chart", &[])?;

    if let Some(title) = chart.title().filter(|t| !t.is_empty()) {
        plot::write_title(&mut sink, title)?;
    }

    sink.start("c:plotArea", &[])?;
    plot::write_chart_type(&mut sink, prepared)?;
    for axis in prepared.axes().iter() {
        plot::write_axis(&mut sink, axis)?;
    }
    sink.end("c:plotArea")?;

    if let Some(legend) = chart.legend() {
        sink.start("c:legend", &[])?;
        sink.val("c:legendPos", legend.position.code())?;
        sink.val("c:overlay", if legend.overlay { "1" } else { "0" })?;
        sink.end("c:legend")?;
    }

    sink.end("c:chart")?;
    sink.end("c:chartSpace")?;

    Ok(sink.into_inner())
}

/// Prepare and serialize `chart` with default options.
///
/// When the chart had no axes, the synthesized defaults are stored back into
/// it, so a second save writes the same axes.
pub fn save_chart(chart: &mut Chart) -> ChartResult<Vec<u8>> {
    save_chart_with(chart, &SaveOptions::default())
}

/// Prepare and serialize `chart`, storing synthesized axes back into it
pub fn save_chart_with(chart: &mut Chart, options: &SaveOptions) -> ChartResult<Vec<u8>> {
    let (bytes, axes) = {
        let prepared = prepare_for_save(chart)?;
        let bytes = serialize(&prepared, options)?;
        let axes = prepared.synthesized_axes().then(|| prepared.into_axes());
        (bytes, axes)
    };

    if let Some(axes) = axes {
        chart.replace_axes(axes);
    }
    Ok(bytes)
}
