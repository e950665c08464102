//! Chart part loader
//!
//! Loading runs in two passes over the same bytes:
//!
//! 1. The part is parsed into a [`Document`]. The typed handlers locate
//!    `c:chart` and `c:plotArea`, probe the chart type, validate the
//!    type-specific element, and read the axes, chart title and legend.
//! 2. A streaming pass collects the `c:ser` records of every chart-type
//!    element in the plot area.
//!
//! Any failure aborts the load; no partially populated chart is returned.

mod axis;
mod plot;
mod series;

use crate::chart::Chart;
use crate::dom::{Document, NodeId};
use crate::error::{ChartError, ChartResult};
use crate::legend::{Legend, LegendPosition};

/// Options for loading a chart part
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Fail the load when the type-specific element (`c:barDir`,
    /// `c:radarStyle`, ...) is missing or holds an invalid value.
    ///
    /// When `false` those problems are logged and loading continues.
    pub validate_chart_types: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            validate_chart_types: true,
        }
    }
}

/// Load a chart part with default options
pub fn load_chart(bytes: &[u8]) -> ChartResult<Chart> {
    load_chart_with(bytes, &LoadOptions::default())
}

/// Load a chart part
pub fn load_chart_with(bytes: &[u8], options: &LoadOptions) -> ChartResult<Chart> {
    let doc = Document::parse(bytes)?;
    let root = doc.root();

    let chart_node = doc
        .find_child(root, "c:chart")
        .ok_or_else(|| ChartError::missing("c:chart"))?;
    let plot_area = doc
        .find_child(chart_node, "c:plotArea")
        .ok_or_else(|| ChartError::missing("c:plotArea"))?;

    let (chart_type, type_node) =
        plot::probe_chart_type(&doc, plot_area).ok_or(ChartError::NoChartTypeFound)?;
    log::debug!("chart type probe found {}", chart_type);

    let mut chart = Chart::with_type(chart_type);

    match plot::load_chart_type_node(&doc, type_node, chart_type) {
        Ok(details) => {
            if let Some(direction) = details.bar_direction {
                chart.set_bar_direction(direction);
            }
        }
        Err(e) if options.validate_chart_types => return Err(e),
        Err(e) => log::warn!("ignoring invalid {} chart element: {}", chart_type, e),
    }

    for axis in axis::load_axes(&doc, plot_area)? {
        chart.push_axis(axis);
    }

    if let Some(title) = doc.find_direct_child(chart_node, "c:title") {
        match rich_text(&doc, title) {
            Some(text) => chart.set_title(text),
            None => log::debug!("chart title has no rich text run"),
        }
    }

    if let Some(legend) = doc.find_direct_child(chart_node, "c:legend") {
        chart.set_legend(Some(load_legend(&doc, legend)?));
    }

    let streamed = series::collect_series(bytes)?;
    match streamed.chart_types.first() {
        Some(&first) if first != chart_type => log::warn!(
            "series walker saw {} before the probed {} element",
            first,
            chart_type
        ),
        None => log::debug!("plot area has no chart-type element with series"),
        _ => {}
    }
    for s in streamed.series {
        chart.push_series(s);
    }

    log::debug!(
        "loaded {} chart with {} series and {} axes",
        chart_type,
        chart.series().len(),
        chart.axes().len()
    );
    Ok(chart)
}

fn load_legend(doc: &Document, node: NodeId) -> ChartResult<Legend> {
    let mut legend = Legend::default();

    if let Some(pos) = doc.find_direct_child(node, "c:legendPos") {
        // `val` defaults to "r" in the schema.
        if let Some(code) = doc.attribute(pos, "val") {
            legend.position = LegendPosition::from_code(code)
                .ok_or_else(|| ChartError::invalid_value("c:legendPos", code))?;
        }
    }
    if let Some(overlay) = doc.find_direct_child(node, "c:overlay") {
        legend.overlay = optional_bool(doc, overlay, "c:overlay")?.unwrap_or(true);
    }

    Ok(legend)
}

/// Text of the first paragraph of a `c:title` (`tx/rich/p/r/t`).
///
/// Runs of the paragraph are concatenated. Returns `None` when any link of
/// the chain is missing.
pub(crate) fn rich_text(doc: &Document, title: NodeId) -> Option<String> {
    let rich = doc.find_path(title, &["c:tx", "c:rich"])?;
    let paragraph = doc.find_direct_child(rich, "a:p")?;

    let mut text = String::new();
    let mut found = false;
    for run in doc.children(paragraph) {
        if doc.node(run).name() != "a:r" {
            continue;
        }
        if let Some(t) = doc.find_direct_child(run, "a:t") {
            text.push_str(doc.node(t).text());
            found = true;
        }
    }
    found.then_some(text)
}

/// Mandatory child element
pub(crate) fn required_child(doc: &Document, parent: NodeId, qname: &str) -> ChartResult<NodeId> {
    doc.find_child(parent, qname)
        .ok_or_else(|| ChartError::missing(qname))
}

/// Mandatory `val` attribute
pub(crate) fn required_val<'a>(
    doc: &'a Document,
    node: NodeId,
    element: &str,
) -> ChartResult<&'a str> {
    doc.attribute(node, "val")
        .ok_or_else(|| ChartError::missing_attribute(element, "val"))
}

pub(crate) fn parse_u32(element: &str, value: &str) -> ChartResult<u32> {
    value.trim().parse().map_err(|_| ChartError::InvalidNumber {
        element: element.into(),
        value: value.into(),
    })
}

pub(crate) fn parse_f64(element: &str, value: &str) -> ChartResult<f64> {
    value.trim().parse().map_err(|_| ChartError::InvalidNumber {
        element: element.into(),
        value: value.into(),
    })
}

/// `CT_Boolean`: the `val` attribute is optional and defaults to true
pub(crate) fn optional_bool(
    doc: &Document,
    node: NodeId,
    element: &str,
) -> ChartResult<Option<bool>> {
    match doc.attribute(node, "val") {
        None => Ok(None),
        Some("1") | Some("true") => Ok(Some(true)),
        Some("0") | Some("false") => Ok(Some(false)),
        Some(other) => Err(ChartError::invalid_value(element, other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{AxisKind, AxisPosition};
    use crate::chart_type::{BarDirection, ChartType};
    use pretty_assertions::assert_eq;

    fn part(plot_area: &str, extra: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <c:lang val="en-US"/>
  <c:chart>
    <c:title><c:tx><c:rich><a:bodyPr/><a:p><a:r><a:t>Quarterly</a:t></a:r><a:r><a:t> Sales</a:t></a:r></a:p></c:rich></c:tx><c:overlay val="0"/></c:title>
    <c:plotArea>{}</c:plotArea>
    {}
    <c:plotVisOnly val="1"/>
  </c:chart>
  <c:printSettings/>
</c:chartSpace>"#,
            plot_area, extra
        )
    }

    const AXES: &str = r#"
      <c:catAx>
        <c:axId val="500"/>
        <c:scaling><c:orientation val="minMax"/></c:scaling>
        <c:delete val="0"/>
        <c:axPos val="b"/>
        <c:title><c:tx><c:rich><a:p><a:r><a:t>Month</a:t></a:r></a:p></c:rich></c:tx></c:title>
        <c:crossAx val="600"/>
        <c:crosses val="autoZero"/>
      </c:catAx>
      <c:valAx>
        <c:axId val="600"/>
        <c:scaling><c:logBase val="10"/><c:orientation val="maxMin"/><c:max val="100.5"/><c:min val="1"/></c:scaling>
        <c:axPos val="l"/>
        <c:crossAx val="500"/>
        <c:crossesAt val="3.5"/>
      </c:valAx>"#;

    #[test]
    fn test_load_bar_chart() {
        let plot = format!(
            r#"<c:barChart>
                <c:barDir val="bar"/>
                <c:grouping val="clustered"/>
                <c:ser><c:idx val="0"/><c:order val="0"/>
                  <c:cat><c:numRef><c:f>Sheet1!$A$1:$A$3</c:f></c:numRef></c:cat>
                  <c:val><c:numRef><c:f>Sheet1!$B$1:$B$3</c:f><c:numCache/></c:numRef></c:val>
                </c:ser>
                <c:ser><c:idx val="1"/><c:order val="1"/>
                  <c:val><c:numRef><c:f>Sheet1!$C$1:$C$3</c:f></c:numRef></c:val>
                </c:ser>
                <c:axId val="500"/><c:axId val="600"/>
              </c:barChart>{}"#,
            AXES
        );
        let xml = part(&plot, r#"<c:legend><c:legendPos val="b"/><c:overlay val="0"/></c:legend>"#);

        let chart = load_chart(xml.as_bytes()).unwrap();
        assert_eq!(chart.chart_type(), Some(ChartType::Bar));
        assert_eq!(chart.bar_direction(), BarDirection::Bar);
        assert_eq!(chart.title(), Some("Quarterly Sales"));

        let series: Vec<_> = chart.series().iter().cloned().collect();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].categories(), Some("Sheet1!$A$1:$A$3"));
        assert_eq!(series[0].values(), Some("Sheet1!$B$1:$B$3"));
        assert_eq!(series[1].categories(), None);
        assert_eq!(series[1].values(), Some("Sheet1!$C$1:$C$3"));

        let axes: Vec<_> = chart.axes().iter().collect();
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[0].kind, AxisKind::Category);
        assert_eq!(axes[0].position, Some(AxisPosition::Bottom));
        assert_eq!((axes[0].id, axes[0].cross_id), (500, 600));
        assert_eq!(axes[0].title(), Some("Month"));
        assert_eq!(axes[1].kind, AxisKind::Value);
        assert_eq!(axes[1].position, Some(AxisPosition::Left));
        assert_eq!(axes[1].title(), None);

        let legend = chart.legend().unwrap();
        assert_eq!(legend.position, LegendPosition::Bottom);
        assert!(!legend.overlay);
    }

    #[test]
    fn test_load_scatter_xy_values() {
        let plot = r#"<c:scatterChart>
            <c:scatterStyle val="lineMarker"/>
            <c:ser><c:idx val="0"/><c:order val="0"/>
              <c:xVal><c:numRef><c:f>Data!$A$2:$A$9</c:f></c:numRef></c:xVal>
              <c:yVal><c:numRef><c:f>Data!$B$2:$B$9</c:f></c:numRef></c:yVal>
            </c:ser>
          </c:scatterChart>"#;
        let chart = load_chart(part(plot, "").as_bytes()).unwrap();

        assert_eq!(chart.chart_type(), Some(ChartType::Scatter));
        let first = chart.series().iter().next().unwrap();
        assert_eq!(first.categories(), Some("Data!$A$2:$A$9"));
        assert_eq!(first.values(), Some("Data!$B$2:$B$9"));
        assert!(chart.axes().is_empty());
        assert!(chart.legend().is_none());
    }

    #[test]
    fn test_probe_order_wins() {
        // Schema-illegal, but the first type in probe order is taken.
        let plot = r#"<c:barChart><c:barDir val="col"/></c:barChart><c:lineChart/>"#;
        let chart = load_chart(part(plot, "").as_bytes()).unwrap();
        assert_eq!(chart.chart_type(), Some(ChartType::Line));
    }

    #[test]
    fn test_missing_structure() {
        let no_chart = r#"<c:chartSpace xmlns:c="urn:c"><c:lang val="en"/></c:chartSpace>"#;
        assert!(matches!(
            load_chart(no_chart.as_bytes()),
            Err(ChartError::MissingMandatoryElement(e)) if e == "c:chart"
        ));

        let no_plot = r#"<c:chartSpace xmlns:c="urn:c"><c:chart/></c:chartSpace>"#;
        assert!(matches!(
            load_chart(no_plot.as_bytes()),
            Err(ChartError::MissingMandatoryElement(e)) if e == "c:plotArea"
        ));

        assert!(matches!(
            load_chart(b"<c:chartSpace><c:chart>"),
            Err(ChartError::Parse(_)) | Err(ChartError::Xml(_))
        ));
    }

    #[test]
    fn test_no_chart_type_found() {
        let plot = r#"<c:layout/><c:funnelChart/>"#;
        assert!(matches!(
            load_chart(part(plot, "").as_bytes()),
            Err(ChartError::NoChartTypeFound)
        ));
    }

    #[test]
    fn test_invalid_axis_position() {
        let plot = r#"<c:lineChart/>
          <c:valAx><c:axId val="1"/><c:scaling/><c:axPos val="q"/><c:crossAx val="2"/></c:valAx>"#;
        assert!(matches!(
            load_chart(part(plot, "").as_bytes()),
            Err(ChartError::InvalidAxisPosition(v)) if v == "q"
        ));
    }

    #[test]
    fn test_type_validation_can_be_relaxed() {
        let plot = r#"<c:barChart><c:barDir val="sideways"/></c:barChart>"#;
        let xml = part(plot, "");

        assert!(matches!(
            load_chart(xml.as_bytes()),
            Err(ChartError::InvalidEnumerationValue { .. })
        ));

        let options = LoadOptions {
            validate_chart_types: false,
        };
        let chart = load_chart_with(xml.as_bytes(), &options).unwrap();
        assert_eq!(chart.chart_type(), Some(ChartType::Bar));
        assert_eq!(chart.bar_direction(), BarDirection::Column);
    }

    #[test]
    fn test_title_without_run_is_ignored() {
        let xml = r#"<c:chartSpace xmlns:c="urn:c" xmlns:a="urn:a"><c:chart>
            <c:title><c:tx><c:rich><a:p/></c:rich></c:tx></c:title>
            <c:plotArea><c:pieChart/></c:plotArea>
          </c:chart></c:chartSpace>"#;
        let chart = load_chart(xml.as_bytes()).unwrap();
        assert_eq!(chart.title(), None);
        assert_eq!(chart.chart_type(), Some(ChartType::Pie));
    }

    #[test]
    fn test_invalid_legend_position() {
        let xml = part("<c:pieChart/>", r#"<c:legend><c:legendPos val="middle"/></c:legend>"#);
        assert!(matches!(
            load_chart(xml.as_bytes()),
            Err(ChartError::InvalidEnumerationValue { element, .. }) if element == "c:legendPos"
        ));
    }
}
