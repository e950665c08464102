//! Data series types

/// One plotted data sequence.
///
/// Both sources are formula references such as `Sheet1!$B$1:$B$10`. For
/// scatter and bubble charts the category source holds the x values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    /// Category (x axis) source
    pub category_source: Option<String>,
    /// Numeric (y axis) source
    pub value_source: Option<String>,
}

impl Series {
    /// Create a series plotting `value_source`
    pub fn new<S: Into<String>>(value_source: S) -> Self {
        Self {
            category_source: None,
            value_source: Some(value_source.into()),
        }
    }

    /// Set the category source
    pub fn with_categories<S: Into<String>>(mut self, category_source: S) -> Self {
        self.category_source = Some(category_source.into());
        self
    }

    /// Category source, if set and non-empty
    pub fn categories(&self) -> Option<&str> {
        self.category_source.as_deref().filter(|s| !s.is_empty())
    }

    /// Value source, if set and non-empty
    pub fn values(&self) -> Option<&str> {
        self.value_source.as_deref().filter(|s| !s.is_empty())
    }
}

/// Handle to a series inside a [`SeriesSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesHandle(usize);

impl SeriesHandle {
    /// Zero-based plot position (`c:idx` / `c:order`)
    pub fn index(self) -> usize {
        self.0
    }
}

/// Series of one chart, in plot order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesSet {
    series: Vec<Series>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, series: Series) -> SeriesHandle {
        self.series.push(series);
        SeriesHandle(self.series.len() - 1)
    }

    pub fn get(&self, handle: SeriesHandle) -> Option<&Series> {
        self.series.get(handle.0)
    }

    pub fn get_mut(&mut self, handle: SeriesHandle) -> Option<&mut Series> {
        self.series.get_mut(handle.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}
