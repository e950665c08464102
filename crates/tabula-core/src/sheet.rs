//! Sheet handles

/// Handle to a sheet inside a [`Workbook`](crate::Workbook).
///
/// Handles are plain indices. They never own the sheet, so a chart can keep
/// one as a back-reference to the sheet it lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetId(pub usize);

/// The kind of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetKind {
    /// A grid of cells
    #[default]
    Worksheet,
    /// A sheet holding a single chart and no cells
    Chartsheet,
}

/// A named sheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    name: String,
    kind: SheetKind,
}

impl Sheet {
    /// Create a worksheet
    pub fn worksheet<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            kind: SheetKind::Worksheet,
        }
    }

    /// Create a chartsheet
    pub fn chartsheet<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            kind: SheetKind::Chartsheet,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SheetKind {
        self.kind
    }

    /// Whether this sheet holds cells that chart series can reference
    pub fn is_worksheet(&self) -> bool {
        self.kind == SheetKind::Worksheet
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }
}
