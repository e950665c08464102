//! Chart-type probe and per-type element checks

use crate::chart_type::{BarDirection, ChartType};
use crate::dom::{Document, NodeId};
use crate::error::{ChartError, ChartResult};

use super::{optional_bool, parse_f64, required_child, required_val};

/// What the typed handlers keep from a chart-type element
#[derive(Debug, Default)]
pub(super) struct ChartTypeDetails {
    pub bar_direction: Option<BarDirection>,
}

const BAR_GROUPINGS: &[&str] = &["percentStacked", "clustered", "standard", "stacked"];
const GROUPINGS: &[&str] = &["percentStacked", "standard", "stacked"];
const BAR_SHAPES: &[&str] = &["cone", "coneToMax", "box", "cylinder", "pyramid", "pyramidToMax"];
const RADAR_STYLES: &[&str] = &["standard", "marker", "filled"];
const SCATTER_STYLES: &[&str] = &[
    "none",
    "line",
    "lineMarker",
    "marker",
    "smooth",
    "smoothMarker",
];
const OF_PIE_TYPES: &[&str] = &["pie", "bar"];
const SIZE_REPRESENTS: &[&str] = &["area", "w"];

/// Find the first chart-type element under the plot area, in probe order
pub(super) fn probe_chart_type(doc: &Document, plot_area: NodeId) -> Option<(ChartType, NodeId)> {
    ChartType::ALL
        .into_iter()
        .find_map(|t| doc.find_child(plot_area, t.element_name()).map(|node| (t, node)))
}

/// Check the type-specific children of a chart-type element.
///
/// Series and axis references are not read here; see the streaming pass.
pub(super) fn load_chart_type_node(
    doc: &Document,
    node: NodeId,
    chart_type: ChartType,
) -> ChartResult<ChartTypeDetails> {
    let mut details = ChartTypeDetails::default();

    match chart_type {
        ChartType::Bar | ChartType::Bar3D => {
            details.bar_direction = Some(load_bar_direction(doc, node)?);
            check_enum(doc, node, "c:grouping", BAR_GROUPINGS)?;
            check_bool(doc, node, "c:varyColors")?;
            if chart_type == ChartType::Bar3D {
                check_enum(doc, node, "c:shape", BAR_SHAPES)?;
            }
        }
        ChartType::Line | ChartType::Line3D | ChartType::Area | ChartType::Area3D => {
            check_enum(doc, node, "c:grouping", GROUPINGS)?;
            check_bool(doc, node, "c:varyColors")?;
        }
        ChartType::Radar => {
            let style = required_child(doc, node, "c:radarStyle")?;
            check_enum_value(doc, style, "c:radarStyle", RADAR_STYLES)?;
            check_bool(doc, node, "c:varyColors")?;
        }
        ChartType::Scatter => {
            let style = required_child(doc, node, "c:scatterStyle")?;
            check_enum_value(doc, style, "c:scatterStyle", SCATTER_STYLES)?;
            check_bool(doc, node, "c:varyColors")?;
        }
        ChartType::Pie | ChartType::Pie3D => {
            check_bool(doc, node, "c:varyColors")?;
            if chart_type == ChartType::Pie {
                check_range(doc, node, "c:firstSliceAng", 0.0, 360.0)?;
            }
        }
        ChartType::Doughnut => {
            check_bool(doc, node, "c:varyColors")?;
            check_range(doc, node, "c:firstSliceAng", 0.0, 360.0)?;
            check_range(doc, node, "c:holeSize", 1.0, 90.0)?;
        }
        ChartType::OfPie => {
            let kind = required_child(doc, node, "c:ofPieType")?;
            check_enum_value(doc, kind, "c:ofPieType", OF_PIE_TYPES)?;
            check_bool(doc, node, "c:varyColors")?;
        }
        ChartType::Surface | ChartType::Surface3D => {
            check_bool(doc, node, "c:wireframe")?;
        }
        ChartType::Bubble => {
            check_bool(doc, node, "c:varyColors")?;
            check_bool(doc, node, "c:bubble3D")?;
            check_range(doc, node, "c:bubbleScale", 0.0, 300.0)?;
            check_bool(doc, node, "c:showNegBubbles")?;
            check_enum(doc, node, "c:sizeRepresents", SIZE_REPRESENTS)?;
        }
        ChartType::Stock => {}
    }

    Ok(details)
}

fn load_bar_direction(doc: &Document, node: NodeId) -> ChartResult<BarDirection> {
    let bar_dir = required_child(doc, node, "c:barDir")?;
    let value = required_val(doc, bar_dir, "c:barDir")?;
    BarDirection::parse(value).ok_or_else(|| ChartError::invalid_value("c:barDir", value))
}

/// Optional element whose optional `val` must be one of `allowed`
fn check_enum(doc: &Document, parent: NodeId, qname: &str, allowed: &[&str]) -> ChartResult<()> {
    match doc.find_child(parent, qname) {
        Some(node) => check_enum_value(doc, node, qname, allowed),
        None => Ok(()),
    }
}

fn check_enum_value(doc: &Document, node: NodeId, qname: &str, allowed: &[&str]) -> ChartResult<()> {
    match doc.attribute(node, "val") {
        Some(value) if !allowed.contains(&value) => Err(ChartError::invalid_value(qname, value)),
        _ => Ok(()),
    }
}

fn check_bool(doc: &Document, parent: NodeId, qname: &str) -> ChartResult<()> {
    if let Some(node) = doc.find_child(parent, qname) {
        optional_bool(doc, node, qname)?;
    }
    Ok(())
}

/// Optional element with a numeric `val` (percent suffix allowed) in `[min, max]`
fn check_range(doc: &Document, parent: NodeId, qname: &str, min: f64, max: f64) -> ChartResult<()> {
    let Some(node) = doc.find_child(parent, qname) else {
        return Ok(());
    };
    let Some(raw) = doc.attribute(node, "val") else {
        return Ok(());
    };

    let value = parse_f64(qname, raw.strip_suffix('%').unwrap_or(raw))?;
    if value < min || value > max {
        return Err(ChartError::ValueOutOfRange {
            element: qname.into(),
            value: raw.into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn check(xml: &str, chart_type: ChartType) -> ChartResult<ChartTypeDetails> {
        let doc = Document::parse(xml.as_bytes()).unwrap();
        load_chart_type_node(&doc, doc.root(), chart_type)
    }

    #[test]
    fn test_probe() {
        let doc = Document::parse(
            br#"<c:plotArea><c:layout/><c:doughnutChart/><c:pieChart/></c:plotArea>"#,
        )
        .unwrap();
        let (found, node) = probe_chart_type(&doc, doc.root()).unwrap();
        assert_eq!(found, ChartType::Pie);
        assert_eq!(doc.node(node).name(), "c:pieChart");

        let empty = Document::parse(b"<c:plotArea><c:layout/></c:plotArea>").unwrap();
        assert!(probe_chart_type(&empty, empty.root()).is_none());
    }

    #[test]
    fn test_bar_direction_is_mandatory() {
        let details = check(r#"<c:barChart><c:barDir val="col"/></c:barChart>"#, ChartType::Bar).unwrap();
        assert_eq!(details.bar_direction, Some(BarDirection::Column));

        assert!(matches!(
            check("<c:barChart/>", ChartType::Bar),
            Err(ChartError::MissingMandatoryElement(e)) if e == "c:barDir"
        ));
        assert!(matches!(
            check("<c:bar3DChart><c:barDir/></c:bar3DChart>", ChartType::Bar3D),
            Err(ChartError::MissingAttribute { .. })
        ));
        assert!(matches!(
            check(
                r#"<c:barChart><c:barDir val="col"/><c:grouping val="zigzag"/></c:barChart>"#,
                ChartType::Bar
            ),
            Err(ChartError::InvalidEnumerationValue { element, .. }) if element == "c:grouping"
        ));
    }

    #[test]
    fn test_style_elements() {
        assert!(check("<c:scatterChart><c:scatterStyle/></c:scatterChart>", ChartType::Scatter).is_ok());
        assert!(matches!(
            check("<c:scatterChart/>", ChartType::Scatter),
            Err(ChartError::MissingMandatoryElement(_))
        ));
        assert!(matches!(
            check("<c:radarChart/>", ChartType::Radar),
            Err(ChartError::MissingMandatoryElement(e)) if e == "c:radarStyle"
        ));
        assert!(check(
            r#"<c:ofPieChart><c:ofPieType val="bar"/></c:ofPieChart>"#,
            ChartType::OfPie
        )
        .is_ok());
        assert!(check(r#"<c:lineChart><c:grouping val="clustered"/></c:lineChart>"#, ChartType::Line).is_err());
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(check(r#"<c:doughnutChart><c:holeSize val="50"/></c:doughnutChart>"#, ChartType::Doughnut).is_ok());
        assert!(check(r#"<c:doughnutChart><c:holeSize val="75%"/></c:doughnutChart>"#, ChartType::Doughnut).is_ok());
        assert!(matches!(
            check(r#"<c:doughnutChart><c:holeSize val="95"/></c:doughnutChart>"#, ChartType::Doughnut),
            Err(ChartError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            check(r#"<c:pieChart><c:firstSliceAng val="abc"/></c:pieChart>"#, ChartType::Pie),
            Err(ChartError::InvalidNumber { .. })
        ));
        assert!(matches!(
            check(r#"<c:pieChart><c:varyColors val="maybe"/></c:pieChart>"#, ChartType::Pie),
            Err(ChartError::InvalidEnumerationValue { .. })
        ));
    }
}
