//! Axis elements (`c:catAx`, `c:valAx`, `c:serAx`, `c:dateAx`)

use crate::axis::{Axis, AxisKind, AxisPosition};
use crate::dom::{Document, NodeId};
use crate::error::{ChartError, ChartResult};

use super::{optional_bool, parse_f64, parse_u32, required_child, required_val, rich_text};

const ORIENTATIONS: &[&str] = &["minMax", "maxMin"];
const CROSSES: &[&str] = &["autoZero", "max", "min"];

/// Load every axis that is a direct child of the plot area, in document order
pub(super) fn load_axes(doc: &Document, plot_area: NodeId) -> ChartResult<Vec<Axis>> {
    doc.children(plot_area)
        .filter_map(|node| AxisKind::from_element_name(doc.node(node).name()).map(|kind| (kind, node)))
        .map(|(kind, node)| load_axis(doc, node, kind))
        .collect()
}

/// Load the shared axis group of one axis element
fn load_axis(doc: &Document, node: NodeId, kind: AxisKind) -> ChartResult<Axis> {
    let id = load_u32(doc, node, "c:axId")?;

    let scaling = required_child(doc, node, "c:scaling")?;
    check_scaling(doc, scaling)?;

    if let Some(delete) = doc.find_direct_child(node, "c:delete") {
        optional_bool(doc, delete, "c:delete")?;
    }

    let ax_pos = required_child(doc, node, "c:axPos")?;
    let code = required_val(doc, ax_pos, "c:axPos")?;
    let position =
        AxisPosition::from_code(code).ok_or_else(|| ChartError::InvalidAxisPosition(code.into()))?;

    let cross_id = load_u32(doc, node, "c:crossAx")?;

    if let Some(crosses) = doc.find_direct_child(node, "c:crosses") {
        let value = required_val(doc, crosses, "c:crosses")?;
        if !CROSSES.contains(&value) {
            return Err(ChartError::invalid_value("c:crosses", value));
        }
    } else if let Some(at) = doc.find_direct_child(node, "c:crossesAt") {
        parse_f64("c:crossesAt", required_val(doc, at, "c:crossesAt")?)?;
    }

    let mut axis = Axis::new(kind, Some(position), id, cross_id);
    if let Some(title) = doc.find_direct_child(node, "c:title") {
        if let Some(text) = rich_text(doc, title) {
            axis.titles.insert(position, text);
        }
    }

    Ok(axis)
}

fn load_u32(doc: &Document, node: NodeId, qname: &str) -> ChartResult<u32> {
    let child = doc
        .find_direct_child(node, qname)
        .ok_or_else(|| ChartError::missing(qname))?;
    parse_u32(qname, required_val(doc, child, qname)?)
}

/// `c:scaling` is validated but not kept; axes are always saved as `minMax`.
fn check_scaling(doc: &Document, scaling: NodeId) -> ChartResult<()> {
    if let Some(log_base) = doc.find_direct_child(scaling, "c:logBase") {
        let raw = required_val(doc, log_base, "c:logBase")?;
        let value = parse_f64("c:logBase", raw)?;
        if !(2.0..=1000.0).contains(&value) {
            return Err(ChartError::ValueOutOfRange {
                element: "c:logBase".into(),
                value: raw.into(),
            });
        }
    }

    if let Some(orientation) = doc.find_direct_child(scaling, "c:orientation") {
        if let Some(value) = doc.attribute(orientation, "val") {
            if !ORIENTATIONS.contains(&value) {
                return Err(ChartError::invalid_value("c:orientation", value));
            }
        }
    }

    for bound in ["c:max", "c:min"] {
        if let Some(node) = doc.find_direct_child(scaling, bound) {
            parse_f64(bound, required_val(doc, node, bound)?)?;
        }
    }

    Ok(())
}
