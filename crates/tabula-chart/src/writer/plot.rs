//! Plot area content: chart-type element, series, axes and titles

use crate::axis::Axis;
use crate::chart_type::ChartType;
use crate::error::ChartResult;
use crate::series::Series;

use super::sink::XmlSink;
use super::PreparedChart;

/// Write the chart-type element with its series and axis references
pub(super) fn write_chart_type(sink: &mut XmlSink, prepared: &PreparedChart<'_>) -> ChartResult<()> {
    let chart_type = prepared.chart_type();
    let chart = prepared.chart();
    let name = chart_type.element_name();

    sink.start(name, &[])?;

    match chart_type {
        ChartType::Bar | ChartType::Bar3D => {
            sink.val("c:barDir", chart.bar_direction().as_str())?;
        }
        ChartType::Radar => {
            sink.val("c:radarStyle", "marker")?;
        }
        ChartType::Scatter => {
            sink.empty("c:scatterStyle", &[])?;
        }
        ChartType::OfPie => {
            sink.val("c:ofPieType", "pie")?;
            sink.val("c:varyColors", "1")?;
        }
        // Same as Excel: pies vary colors by point.
        ChartType::Pie | ChartType::Pie3D | ChartType::Doughnut => {
            sink.val("c:varyColors", "1")?;
        }
        ChartType::Area
        | ChartType::Area3D
        | ChartType::Line
        | ChartType::Line3D
        | ChartType::Stock
        | ChartType::Surface
        | ChartType::Surface3D
        | ChartType::Bubble => {}
    }

    for (index, series) in chart.series().iter().enumerate() {
        write_series(sink, series, index, chart_type.uses_xy_values())?;
    }

    if chart_type == ChartType::Doughnut {
        sink.val("c:holeSize", "50")?;
    }

    for axis in prepared.axes().iter() {
        sink.val("c:axId", &axis.id.to_string())?;
    }

    sink.end(name)
}

fn write_series(sink: &mut XmlSink, series: &Series, index: usize, xy: bool) -> ChartResult<()> {
    let index = index.to_string();

    sink.start("c:ser", &[])?;
    sink.val("c:idx", &index)?;
    sink.val("c:order", &index)?;

    if let Some(categories) = series.categories() {
        write_number_reference(sink, if xy { "c:xVal" } else { "c:cat" }, categories)?;
    }
    if let Some(values) = series.values() {
        write_number_reference(sink, if xy { "c:yVal" } else { "c:val" }, values)?;
    }

    sink.end("c:ser")
}

fn write_number_reference(sink: &mut XmlSink, name: &str, formula: &str) -> ChartResult<()> {
    sink.start(name, &[])?;
    sink.start("c:numRef", &[])?;
    sink.text_element("c:f", formula)?;
    sink.end("c:numRef")?;
    sink.end(name)
}

/// Write one axis definition
pub(super) fn write_axis(sink: &mut XmlSink, axis: &Axis) -> ChartResult<()> {
    let name = axis.kind.element_name();

    sink.start(name, &[])?;
    sink.val("c:axId", &axis.id.to_string())?;

    // Loaded scaling is not kept; every axis is written as minMax.
    sink.start("c:scaling", &[])?;
    sink.val("c:orientation", "minMax")?;
    sink.end("c:scaling")?;

    match axis.position {
        Some(position) => sink.val("c:axPos", position.code())?,
        None => sink.empty("c:axPos", &[])?,
    }

    if let Some(title) = axis.title() {
        write_title(sink, title)?;
    }

    sink.val("c:crossAx", &axis.cross_id.to_string())?;
    sink.end(name)
}

/// `c:title` holding a single rich text run
pub(super) fn write_title(sink: &mut XmlSink, text: &str) -> ChartResult<()> {
    sink.start("c:title", &[])?;
    sink.start("c:tx", &[])?;
    sink.start("c:rich", &[])?;
    sink.empty("a:bodyPr", &[])?;
    sink.empty("a:lstStyle", &[])?;

    sink.start("a:p", &[])?;
    sink.start("a:pPr", &[("lvl", "0")])?;
    sink.empty("a:defRPr", &[("b", "0")])?;
    sink.end("a:pPr")?;
    sink.start("a:r", &[])?;
    sink.text_element("a:t", text)?;
    sink.end("a:r")?;
    sink.end("a:p")?;

    sink.end("c:rich")?;
    sink.end("c:tx")?;
    sink.val("c:overlay", "0")?;
    sink.end("c:title")
}
