//! Workbook type - the sheet registry

use crate::error::{Error, Result};
use crate::sheet::{Sheet, SheetId, SheetKind};
use crate::MAX_SHEET_NAME_LEN;

/// A workbook: an ordered collection of uniquely named sheets
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by handle
    pub fn sheet(&self, id: SheetId) -> Option<&Sheet> {
        self.sheets.get(id.0)
    }

    /// Look up a sheet handle by name (case-insensitive)
    pub fn sheet_id(&self, name: &str) -> Option<SheetId> {
        let name_lower = name.to_lowercase();
        self.sheets
            .iter()
            .position(|s| s.name().to_lowercase() == name_lower)
            .map(SheetId)
    }

    /// Get a sheet by name (case-insensitive)
    pub fn sheet_by_name(&self, name: &str) -> Result<&Sheet> {
        self.sheet_id(name)
            .and_then(|id| self.sheet(id))
            .ok_or_else(|| Error::SheetNotFound(name.into()))
    }

    /// Iterate over sheets with their handles
    pub fn sheets(&self) -> impl Iterator<Item = (SheetId, &Sheet)> {
        self.sheets.iter().enumerate().map(|(i, s)| (SheetId(i), s))
    }

    /// Add a worksheet with the given name
    pub fn add_worksheet(&mut self, name: &str) -> Result<SheetId> {
        self.add_sheet(name, SheetKind::Worksheet)
    }

    /// Add a chartsheet with the given name
    pub fn add_chartsheet(&mut self, name: &str) -> Result<SheetId> {
        self.add_sheet(name, SheetKind::Chartsheet)
    }

    /// Add a worksheet with a generated `SheetN` name
    pub fn add_default_worksheet(&mut self) -> Result<SheetId> {
        let name = self.generate_sheet_name();
        self.add_worksheet(&name)
    }

    fn add_sheet(&mut self, name: &str, kind: SheetKind) -> Result<SheetId> {
        self.validate_sheet_name_excluding(name, None)?;
        let sheet = match kind {
            SheetKind::Worksheet => Sheet::worksheet(name),
            SheetKind::Chartsheet => Sheet::chartsheet(name),
        };
        self.sheets.push(sheet);
        Ok(SheetId(self.sheets.len() - 1))
    }

    /// Rename a sheet
    pub fn rename_sheet(&mut self, id: SheetId, new_name: &str) -> Result<()> {
        if id.0 >= self.sheets.len() {
            return Err(Error::SheetOutOfBounds(id.0, self.sheets.len()));
        }
        self.validate_sheet_name_excluding(new_name, Some(id.0))?;
        self.sheets[id.0].rename(new_name.to_string());
        Ok(())
    }

    /// Validate a sheet name, optionally excluding a sheet from duplicate check
    fn validate_sheet_name_excluding(
        &self,
        name: &str,
        exclude_index: Option<usize>,
    ) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if let Some(c) = INVALID_CHARS.iter().find(|c| name.contains(**c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        let name_lower = name.to_lowercase();
        for (i, sheet) in self.sheets.iter().enumerate() {
            if Some(i) != exclude_index && sheet.name().to_lowercase() == name_lower {
                return Err(Error::DuplicateSheetName(name.into()));
            }
        }

        Ok(())
    }

    fn generate_sheet_name(&self) -> String {
        let mut n = self.sheets.len() + 1;
        loop {
            let name = format!("Sheet{}", n);
            if self.validate_sheet_name_excluding(&name, None).is_ok() {
                return name;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_sheets() {
        let mut wb = Workbook::new();
        let first = wb.add_default_worksheet().unwrap();
        let chart = wb.add_chartsheet("Chart1").unwrap();

        assert_eq!(first, SheetId(0));
        assert_eq!(wb.sheet(first).unwrap().name(), "Sheet1");
        assert!(wb.sheet(first).unwrap().is_worksheet());
        assert_eq!(wb.sheet(chart).unwrap().kind(), SheetKind::Chartsheet);
        assert_eq!(wb.sheet_count(), 2);
    }

    #[test]
    fn test_duplicate_name() {
        let mut wb = Workbook::new();
        wb.add_worksheet("Sheet1").unwrap();

        assert!(matches!(
            wb.add_worksheet("SHEET1"),
            Err(Error::DuplicateSheetName(_))
        ));
    }

    #[test]
    fn test_invalid_sheet_name() {
        let mut wb = Workbook::new();

        assert!(wb.add_worksheet("").is_err());
        assert!(wb.add_worksheet("Sheet/1").is_err());
        assert!(wb.add_worksheet("Sheet[1]").is_err());
        assert!(wb.add_worksheet(&"A".repeat(MAX_SHEET_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_rename_and_lookup() {
        let mut wb = Workbook::new();
        let id = wb.add_worksheet("Data").unwrap();
        wb.add_worksheet("Other").unwrap();

        assert!(wb.rename_sheet(id, "other").is_err());
        wb.rename_sheet(id, "Data 2024").unwrap();
        assert_eq!(wb.sheet_id("data 2024"), Some(id));
        assert!(wb.sheet_by_name("Data").is_err());
    }
}
