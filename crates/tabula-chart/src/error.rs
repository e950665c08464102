//! Chart error types

use thiserror::Error;

use crate::chart_type::ChartType;

/// Result type for chart operations
pub type ChartResult<T> = std::result::Result<T, ChartError>;

/// Errors that can occur while loading or saving a chart part
#[derive(Debug, Error)]
pub enum ChartError {
    /// Malformed XML reported by the tokenizer
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error from the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally broken document (unclosed tags, no root element, ...)
    #[error("Parse error: {0}")]
    Parse(String),

    /// A schema-required element is absent
    #[error("Missing mandatory element: {0}")]
    MissingMandatoryElement(String),

    /// A schema-required attribute is absent
    #[error("Missing attribute '{attribute}' on {element}")]
    MissingAttribute { element: String, attribute: String },

    /// An attribute value outside its enumeration
    #[error("Invalid value '{value}' for {element}")]
    InvalidEnumerationValue { element: String, value: String },

    /// `axPos` value outside `l`, `r`, `t`, `b`
    #[error("Invalid axis position: {0}")]
    InvalidAxisPosition(String),

    /// A numeric attribute that does not parse
    #[error("Invalid number '{value}' for {element}")]
    InvalidNumber { element: String, value: String },

    /// A numeric attribute outside its schema bounds
    #[error("Value {value} out of range for {element}")]
    ValueOutOfRange { element: String, value: String },

    /// The plot area holds none of the known chart-type elements
    #[error("No chart type found in plot area")]
    NoChartTypeFound,

    /// Saving a chart whose type was never set
    #[error("Chart type is not set")]
    ChartTypeNotSet,

    /// The axis set does not fit the chart type
    #[error("{chart_type} chart expects {expected} axes, found {actual}")]
    InvalidAxisCardinality {
        chart_type: ChartType,
        expected: &'static str,
        actual: usize,
    },

    /// The number of series does not fit the chart type
    #[error("{chart_type} chart expects {min} to {max} series, found {actual}")]
    InvalidSeriesCount {
        chart_type: ChartType,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl ChartError {
    pub(crate) fn missing<S: Into<String>>(element: S) -> Self {
        ChartError::MissingMandatoryElement(element.into())
    }

    pub(crate) fn missing_attribute(element: &str, attribute: &str) -> Self {
        ChartError::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    pub(crate) fn invalid_value(element: &str, value: &str) -> Self {
        ChartError::InvalidEnumerationValue {
            element: element.into(),
            value: value.into(),
        }
    }
}
