//! Legend types

/// Chart legend
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Legend {
    /// Position
    pub position: LegendPosition,
    /// Whether legend overlays the chart
    pub overlay: bool,
}

impl Legend {
    /// Create a new legend
    pub fn new(position: LegendPosition) -> Self {
        Self {
            position,
            overlay: false,
        }
    }
}

/// Legend position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegendPosition {
    #[default]
    Right,
    Top,
    Bottom,
    Left,
    TopRight,
}

impl LegendPosition {
    /// The `legendPos` attribute value
    pub fn code(self) -> &'static str {
        match self {
            LegendPosition::Right => "r",
            LegendPosition::Top => "t",
            LegendPosition::Bottom => "b",
            LegendPosition::Left => "l",
            LegendPosition::TopRight => "tr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "r" => Some(LegendPosition::Right),
            "t" => Some(LegendPosition::Top),
            "b" => Some(LegendPosition::Bottom),
            "l" => Some(LegendPosition::Left),
            "tr" => Some(LegendPosition::TopRight),
            _ => None,
        }
    }
}
