//! Chart part writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use tabula_chart::{save_chart_with, Chart, SaveOptions};

use crate::error::XlsxResult;
use crate::{chart_part_name, CHART_CONTENT_TYPE};

/// Writes chart parts into an XLSX package
pub struct XlsxChartWriter;

impl XlsxChartWriter {
    /// Write a package holding only `charts` to a file path
    pub fn write_file<P: AsRef<Path>>(charts: &mut [Chart], path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(charts, file)
    }

    /// Write a package holding only `charts` and its `[Content_Types].xml`
    pub fn write<W: Write + Seek>(charts: &mut [Chart], writer: W) -> XlsxResult<()> {
        let mut zip = zip::ZipWriter::new(writer);

        Self::write_content_types(&mut zip, charts.len())?;
        Self::write_chart_parts(&mut zip, charts)?;

        zip.finish()?;
        Ok(())
    }

    /// Write `xl/charts/chartN.xml` for every chart, numbered from 1.
    ///
    /// Charts saved without axes get their default axes stored back.
    pub fn write_chart_parts<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        charts: &mut [Chart],
    ) -> XlsxResult<()> {
        Self::write_chart_parts_with(zip, charts, &SaveOptions::default())
    }

    pub fn write_chart_parts_with<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        charts: &mut [Chart],
        options: &SaveOptions,
    ) -> XlsxResult<()> {
        for (i, chart) in charts.iter_mut().enumerate() {
            // Serialize first so a failing chart leaves no empty entry behind.
            let bytes = save_chart_with(chart, options)?;

            let zip_options = zip::write::SimpleFileOptions::default();
            zip.start_file(chart_part_name(i + 1), zip_options)?;
            zip.write_all(&bytes)?;
        }
        Ok(())
    }

    /// `[Content_Types].xml` override entries for chart parts 1 to `n`
    pub fn content_type_overrides(n: usize) -> String {
        let mut content = String::new();
        for i in 1..=n {
            content.push_str(&format!(
                r#"
    <Override PartName="/{}" ContentType="{}"/>"#,
                chart_part_name(i),
                CHART_CONTENT_TYPE
            ));
        }
        content
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        chart_count: usize,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>"#,
        );
        content.push_str(&Self::content_type_overrides(chart_count));
        content.push_str("\n</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_content_type_overrides() {
        assert_eq!(XlsxChartWriter::content_type_overrides(0), "");
        assert_eq!(
            XlsxChartWriter::content_type_overrides(2),
            "\n    <Override PartName=\"/xl/charts/chart1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.drawingml.chart+xml\"/>\
             \n    <Override PartName=\"/xl/charts/chart2.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.drawingml.chart+xml\"/>"
        );
    }
}
