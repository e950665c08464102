//! Chart part reader

use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use tabula_chart::{load_chart_with, Chart, LoadOptions};

use crate::chart_part_name;
use crate::error::{XlsxError, XlsxResult};

const CHARTS_DIR: &str = "xl/charts/";

/// Reads the chart parts of an XLSX package
pub struct XlsxChartReader;

impl XlsxChartReader {
    /// Read every chart of the package at `path`
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Vec<Chart>> {
        let file = File::open(path)?;
        Self::read(file)
    }

    /// Read every chart part, ordered by part number
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Vec<Chart>> {
        Self::read_with(reader, &LoadOptions::default())
    }

    /// Read every chart part with the given load options
    pub fn read_with<R: Read + Seek>(reader: R, options: &LoadOptions) -> XlsxResult<Vec<Chart>> {
        let mut archive = open_package(reader)?;

        let mut parts: Vec<(usize, String)> = archive
            .file_names()
            .filter_map(|name| chart_part_number(name).map(|n| (n, name.to_string())))
            .collect();
        parts.sort();

        let mut charts = Vec::with_capacity(parts.len());
        for (_, name) in parts {
            log::debug!("loading chart part {}", name);
            let bytes = read_part(&mut archive, &name)?;
            charts.push(load_chart_with(&bytes, options)?);
        }
        Ok(charts)
    }

    /// Read the `n`th chart part (1-based)
    pub fn read_chart<R: Read + Seek>(reader: R, n: usize) -> XlsxResult<Chart> {
        let mut archive = open_package(reader)?;
        let bytes = read_part(&mut archive, &chart_part_name(n))?;
        Ok(load_chart_with(&bytes, &LoadOptions::default())?)
    }
}

fn open_package<R: Read + Seek>(reader: R) -> XlsxResult<zip::ZipArchive<R>> {
    let mut archive = zip::ZipArchive::new(reader)?;

    if archive.by_name("[Content_Types].xml").is_err() {
        return Err(XlsxError::InvalidFormat(
            "Missing [Content_Types].xml".into(),
        ));
    }
    Ok(archive)
}

fn read_part<R: Read + Seek>(archive: &mut zip::ZipArchive<R>, name: &str) -> XlsxResult<Vec<u8>> {
    let mut file = match archive.by_name(name) {
        Ok(f) => f,
        Err(zip::result::ZipError::FileNotFound) => {
            return Err(XlsxError::MissingPart(name.to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// `N` of an `xl/charts/chartN.xml` part name.
///
/// Relationship parts and chart styles (`colors1.xml`, `style1.xml`) live in
/// the same folder and are skipped.
fn chart_part_number(name: &str) -> Option<usize> {
    let file = name.strip_prefix(CHARTS_DIR)?;
    if file.contains('/') {
        return None;
    }

    let stem = file.strip_prefix("chart")?.strip_suffix(".xml")?;
    match stem.parse() {
        Ok(n) => Some(n),
        Err(_) => {
            log::warn!("skipping unrecognized chart part {}", name);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_part_number() {
        assert_eq!(chart_part_number("xl/charts/chart1.xml"), Some(1));
        assert_eq!(chart_part_number("xl/charts/chart12.xml"), Some(12));
        assert_eq!(chart_part_number("xl/charts/_rels/chart1.xml.rels"), None);
        assert_eq!(chart_part_number("xl/charts/colors1.xml"), None);
        assert_eq!(chart_part_number("xl/charts/chartEx.xml"), None);
        assert_eq!(chart_part_number("xl/drawings/drawing1.xml"), None);
    }
}
