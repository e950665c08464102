//! Streaming pass collecting `c:ser` records from the plot area

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::chart_type::ChartType;
use crate::error::{ChartError, ChartResult};
use crate::series::Series;

/// Result of the streaming pass
#[derive(Debug, Default)]
pub(super) struct StreamedSeries {
    /// Chart-type elements seen under the plot area, in document order
    pub chart_types: Vec<ChartType>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Category,
    Value,
}

impl Source {
    fn from_element_name(name: &[u8]) -> Option<Self> {
        match name {
            b"c:cat" | b"c:xVal" => Some(Source::Category),
            b"c:val" | b"c:yVal" => Some(Source::Value),
            _ => None,
        }
    }
}

/// Walk `plotArea/*Chart/ser` and capture the `numRef/f` formula of each
/// `cat`/`xVal` and `val`/`yVal` element.
pub(super) fn collect_series(bytes: &[u8]) -> ChartResult<StreamedSeries> {
    let mut reader = Reader::from_reader(bytes);
    reader.trim_text(true);

    let mut result = StreamedSeries::default();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                enter(&mut result, &path, e.name().as_ref());
                path.push(e.name().as_ref().to_vec());
            }
            Ok(Event::Empty(e)) => {
                enter(&mut result, &path, e.name().as_ref());
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Text(e)) => {
                if let Some(source) = formula_source(&path) {
                    let text = e.unescape()?;
                    let series = result.series.last_mut().ok_or_else(|| {
                        ChartError::Parse("series formula outside c:ser".into())
                    })?;
                    let slot = match source {
                        Source::Category => &mut series.category_source,
                        Source::Value => &mut series.value_source,
                    };
                    slot.get_or_insert_with(String::new).push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ChartError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(result)
}

/// React to an element opening under `path`
fn enter(result: &mut StreamedSeries, path: &[Vec<u8>], name: &[u8]) {
    match path {
        [.., parent] if parent.as_slice() == b"c:plotArea" => {
            let name = String::from_utf8_lossy(name);
            if !name.ends_with("Chart") {
                return;
            }
            match ChartType::from_element_name(&name) {
                Some(chart_type) => result.chart_types.push(chart_type),
                None => log::warn!("skipping unknown chart element <{}>", name),
            }
        }
        [.., plot_area, chart] if plot_area.as_slice() == b"c:plotArea" && name == b"c:ser" => {
            if ChartType::from_element_name(&String::from_utf8_lossy(chart)).is_some() {
                result.series.push(Series::default());
            }
        }
        _ => {}
    }
}

/// Which series source the text at `path` belongs to, if any.
///
/// Matches `plotArea / <chart> / ser / (cat|xVal|val|yVal) / numRef / f`.
fn formula_source(path: &[Vec<u8>]) -> Option<Source> {
    match path {
        [.., plot_area, chart, ser, source, num_ref, f]
            if plot_area.as_slice() == b"c:plotArea"
                && ser.as_slice() == b"c:ser"
                && num_ref.as_slice() == b"c:numRef"
                && f.as_slice() == b"c:f"
                && ChartType::from_element_name(&String::from_utf8_lossy(chart)).is_some() =>
        {
            Source::from_element_name(source)
        }
        _ => None,
    }
}
