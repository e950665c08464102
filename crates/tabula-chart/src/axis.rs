//! Axis types

use std::collections::BTreeMap;

/// The four axis element kinds of the chart schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisKind {
    /// `c:catAx`
    Category,
    /// `c:valAx`
    Value,
    /// `c:serAx`
    Series,
    /// `c:dateAx`
    Date,
}

impl AxisKind {
    pub fn element_name(self) -> &'static str {
        match self {
            AxisKind::Category => "c:catAx",
            AxisKind::Value => "c:valAx",
            AxisKind::Series => "c:serAx",
            AxisKind::Date => "c:dateAx",
        }
    }

    pub fn from_element_name(name: &str) -> Option<Self> {
        match name {
            "c:catAx" => Some(AxisKind::Category),
            "c:valAx" => Some(AxisKind::Value),
            "c:serAx" => Some(AxisKind::Series),
            "c:dateAx" => Some(AxisKind::Date),
            _ => None,
        }
    }
}

/// Axis position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisPosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl AxisPosition {
    /// The `axPos` attribute value
    pub fn code(self) -> &'static str {
        match self {
            AxisPosition::Left => "l",
            AxisPosition::Right => "r",
            AxisPosition::Top => "t",
            AxisPosition::Bottom => "b",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "l" => Some(AxisPosition::Left),
            "r" => Some(AxisPosition::Right),
            "t" => Some(AxisPosition::Top),
            "b" => Some(AxisPosition::Bottom),
            _ => None,
        }
    }
}

/// Chart axis
///
/// `id` is unique within a chart and `cross_id` names the axis this one
/// crosses. An axis without a position writes `c:axPos` with no value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis {
    pub kind: AxisKind,
    pub position: Option<AxisPosition>,
    pub id: u32,
    pub cross_id: u32,
    /// Title text keyed by axis position
    pub titles: BTreeMap<AxisPosition, String>,
}

impl Axis {
    /// Create a new axis
    pub fn new(kind: AxisKind, position: Option<AxisPosition>, id: u32, cross_id: u32) -> Self {
        Self {
            kind,
            position,
            id,
            cross_id,
            titles: BTreeMap::new(),
        }
    }

    /// Set the title for `position`
    pub fn with_title<S: Into<String>>(mut self, position: AxisPosition, title: S) -> Self {
        self.titles.insert(position, title.into());
        self
    }

    /// The title shown for this axis: the one keyed by its own position
    pub fn title(&self) -> Option<&str> {
        self.position
            .and_then(|pos| self.titles.get(&pos))
            .map(String::as_str)
            .filter(|t| !t.is_empty())
    }
}

/// Handle to an axis inside an [`AxisSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisHandle(usize);

/// Ordered axes of one chart
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisSet {
    axes: Vec<Axis>,
}

impl AxisSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, axis: Axis) -> AxisHandle {
        self.axes.push(axis);
        AxisHandle(self.axes.len() - 1)
    }

    pub fn get(&self, handle: AxisHandle) -> Option<&Axis> {
        self.axes.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: AxisHandle) -> Option<&mut Axis> {
        self.axes.get_mut(handle.0)
    }

    /// Find an axis by its chart-level id
    pub fn find_by_id(&self, id: u32) -> Option<AxisHandle> {
        self.axes.iter().position(|a| a.id == id).map(AxisHandle)
    }

    /// The axis that `handle` crosses, resolved through `cross_id`
    pub fn crossing(&self, handle: AxisHandle) -> Option<AxisHandle> {
        let axis = self.get(handle)?;
        self.find_by_id(axis.cross_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Axis> {
        self.axes.iter()
    }

    pub fn handles(&self) -> impl Iterator<Item = AxisHandle> {
        (0..self.axes.len()).map(AxisHandle)
    }

    pub fn len(&self) -> usize {
        self.axes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_position_codes() {
        for pos in [
            AxisPosition::Left,
            AxisPosition::Right,
            AxisPosition::Top,
            AxisPosition::Bottom,
        ] {
            assert_eq!(AxisPosition::from_code(pos.code()), Some(pos));
        }
        assert_eq!(AxisPosition::from_code("q"), None);
    }

    #[test]
    fn test_title_follows_position() {
        let axis = Axis::new(AxisKind::Value, Some(AxisPosition::Left), 1, 0)
            .with_title(AxisPosition::Bottom, "Time")
            .with_title(AxisPosition::Left, "Sales");
        assert_eq!(axis.title(), Some("Sales"));

        let unplaced = Axis::new(AxisKind::Value, None, 1, 0).with_title(AxisPosition::Left, "x");
        assert_eq!(unplaced.title(), None);
    }

    #[test]
    fn test_crossing_lookup() {
        let mut axes = AxisSet::new();
        let cat = axes.push(Axis::new(AxisKind::Category, Some(AxisPosition::Bottom), 10, 20));
        let val = axes.push(Axis::new(AxisKind::Value, Some(AxisPosition::Left), 20, 10));
        let orphan = axes.push(Axis::new(AxisKind::Series, None, 30, 99));

        assert_eq!(axes.crossing(cat), Some(val));
        assert_eq!(axes.crossing(val), Some(cat));
        assert_eq!(axes.crossing(orphan), None);
        assert_eq!(axes.handles().count(), 3);
    }
}
