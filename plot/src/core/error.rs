//! Error taxonomy for a single plot request.
//!
//! Every variant is terminal for the request that produced it. Hosts turn
//! them into `{ "error": ... }` responses via [`crate::PlotResponse`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("Failed to parse options JSON: {0}")]
    OptionsParse(String),

    #[error("no columns specified to plot")]
    NoColumnsRequested,

    #[error("{0}")]
    Parse(String),

    #[error("none of the specified columns were found in the CSV")]
    NoColumnsFound,

    #[error("{0}")]
    EmptyData(&'static str),

    #[error("could not determine valid X-axis range from data")]
    NoValidX,

    #[error("no valid numeric data found in the specified Y columns")]
    NoValidY,

    #[error("image size too small for margins")]
    CanvasTooSmall { width: u32, height: u32 },

    #[error("unable to allocate a {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },

    #[error("failed to encode image to PNG: {0}")]
    Encode(String),
}

impl PlotError {
    /// Stable name of the failure class, independent of the message text.
    pub fn kind(&self) -> &'static str {
        match self {
            PlotError::OptionsParse(_) => "OptionsParseError",
            PlotError::NoColumnsRequested => "NoColumnsRequestedError",
            PlotError::Parse(_) => "ParseError",
            PlotError::NoColumnsFound => "NoColumnsFoundError",
            PlotError::EmptyData(_) => "EmptyDataError",
            PlotError::NoValidX => "NoValidXError",
            PlotError::NoValidY => "NoValidYError",
            PlotError::CanvasTooSmall { .. } => "CanvasTooSmallError",
            PlotError::CanvasAllocation { .. } => "CanvasAllocationError",
            PlotError::Encode(_) => "EncodeError",
        }
    }
}

impl From<csv::Error> for PlotError {
    fn from(err: csv::Error) -> Self {
        PlotError::Parse(format!("csv read error: {err}"))
    }
}

impl From<serde_json::Error> for PlotError {
    fn from(err: serde_json::Error) -> Self {
        PlotError::OptionsParse(err.to_string())
    }
}

impl From<png::EncodingError> for PlotError {
    fn from(err: png::EncodingError) -> Self {
        PlotError::Encode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            PlotError::Parse("no data rows found in CSV".into()).to_string(),
            "no data rows found in CSV"
        );
        assert_eq!(
            PlotError::CanvasTooSmall {
                width: 100,
                height: 100
            }
            .to_string(),
            "image size too small for margins"
        );
    }

    #[test]
    fn json_errors_become_options_errors() {
        let err: PlotError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "OptionsParseError");
        assert!(err.to_string().starts_with("Failed to parse options JSON"));
    }
}
