//! Plot options: the JSON wire shape and the resolved per-request settings.
//!
//! Decoding is lenient in the same places a browser form is sloppy: `null`
//! means "not set", non-positive sizes fall back to the defaults and a bad
//! `size` string is reported and ignored.

use serde::Deserialize;
use tracing::warn;

use super::error::PlotError;

pub const DEFAULT_WIDTH: u32 = 768;
pub const DEFAULT_HEIGHT: u32 = 512;
pub const DEFAULT_SKIP: usize = 1;
pub const DEFAULT_TITLE: &str = "Scatter Plot from CSV";

/// Options exactly as they arrive from the host, before defaults apply.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsWire {
    pub columns: Option<Vec<String>>,
    pub max_range: Option<f64>,
    pub size: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub skip: Option<i64>,
    pub xdata: Option<bool>,
    pub xscale: Option<String>,
    pub title: Option<String>,
}

/// Resolved settings for one plot. `Default` yields an empty column list
/// and the standard canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub columns: Vec<String>,
    /// Inclusive X cutoff. `None` or a value `<= 0` disables filtering.
    pub max_x: Option<f64>,
    pub width: u32,
    pub height: u32,
    pub skip: usize,
    /// When false the parser synthesizes X = 1..N as the first column.
    pub x_in_first_column: bool,
    /// Raw `"start,end"` display remap for X, parsed by the range resolver.
    pub x_scale: Option<String>,
    pub title: String,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            max_x: None,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            skip: DEFAULT_SKIP,
            x_in_first_column: false,
            x_scale: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl PlotOptions {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().with_columns(columns)
    }

    /// Decode an options blob and apply defaults.
    pub fn from_json(raw: &str) -> Result<Self, PlotError> {
        let wire: OptionsWire = serde_json::from_str(raw)?;
        Ok(Self::from(wire))
    }

    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip.max(1);
        self
    }

    pub fn with_max_x(mut self, max_x: f64) -> Self {
        self.max_x = Some(max_x);
        self
    }

    pub fn with_x_in_first_column(mut self, enabled: bool) -> Self {
        self.x_in_first_column = enabled;
        self
    }

    pub fn with_x_scale(mut self, scale: impl Into<String>) -> Self {
        self.x_scale = Some(scale.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The X cutoff if it actually filters anything.
    pub fn effective_max_x(&self) -> Option<f64> {
        self.max_x.filter(|limit| *limit > 0.0)
    }
}

impl From<OptionsWire> for PlotOptions {
    fn from(wire: OptionsWire) -> Self {
        let mut options = PlotOptions {
            columns: wire.columns.unwrap_or_default(),
            max_x: wire.max_range.filter(|limit| *limit > 0.0),
            x_in_first_column: wire.xdata.unwrap_or(false),
            x_scale: wire.xscale.filter(|scale| !scale.is_empty()),
            ..PlotOptions::default()
        };

        if let Some(width) = wire.width.and_then(positive_dimension) {
            options.width = width;
        }
        if let Some(height) = wire.height.and_then(positive_dimension) {
            options.height = height;
        }

        if let Some(size) = wire.size.as_deref().filter(|size| !size.is_empty()) {
            match parse_size(size) {
                Some((width, height)) => {
                    options.width = width;
                    options.height = height;
                }
                None => warn!(
                    size,
                    width = options.width,
                    height = options.height,
                    "invalid `size` option, keeping current canvas size"
                ),
            }
        }

        if let Some(skip) = wire.skip {
            options.skip = skip_stride(skip);
        }

        if let Some(title) = wire.title.filter(|title| !title.is_empty()) {
            options.title = title;
        }

        options
    }
}

/// Row stride from the raw `skip` value. Anything below 1 keeps every row;
/// values past `usize::MAX` saturate so only the first row survives.
fn skip_stride(skip: i64) -> usize {
    if skip < 1 {
        1
    } else {
        usize::try_from(skip).unwrap_or(usize::MAX)
    }
}

/// Parse a `"WIDTHxHEIGHT"` string. Both parts must be positive integers.
pub fn parse_size(raw: &str) -> Option<(u32, u32)> {
    let (width, height) = raw.split_once('x')?;
    if height.contains('x') {
        return None;
    }
    let width: u32 = width.parse().ok()?;
    let height: u32 = height.parse().ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

fn positive_dimension(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|value| *value > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_minimal_blob() {
        let options = PlotOptions::from_json(r#"{"columns":["a"]}"#).unwrap();
        assert_eq!(options.columns, vec!["a".to_string()]);
        assert_eq!((options.width, options.height), (768, 512));
        assert_eq!(options.skip, 1);
        assert!(!options.x_in_first_column);
        assert_eq!(options.title, DEFAULT_TITLE);
        assert_eq!(options.max_x, None);
    }

    #[test]
    fn size_overrides_width_and_height() {
        let options =
            PlotOptions::from_json(r#"{"columns":["a"],"width":300,"height":200,"size":"640x480"}"#)
                .unwrap();
        assert_eq!((options.width, options.height), (640, 480));
    }

    #[test]
    fn malformed_size_keeps_explicit_dimensions() {
        let options =
            PlotOptions::from_json(r#"{"columns":["a"],"width":300,"height":200,"size":"640by480"}"#)
                .unwrap();
        assert_eq!((options.width, options.height), (300, 200));

        let options =
            PlotOptions::from_json(r#"{"columns":["a"],"size":"0x480"}"#).unwrap();
        assert_eq!((options.width, options.height), (768, 512));
    }

    #[test]
    fn nulls_and_out_of_range_values_fall_back() {
        let options = PlotOptions::from_json(
            r#"{"columns":["a"],"maxRange":null,"xscale":null,"skip":-4,"width":0,"height":-1,"title":""}"#,
        )
        .unwrap();
        assert_eq!(options.skip, 1);
        assert_eq!((options.width, options.height), (768, 512));
        assert_eq!(options.x_scale, None);
        assert_eq!(options.title, DEFAULT_TITLE);
    }

    #[test]
    fn large_skip_saturates_instead_of_keeping_every_row() {
        assert_eq!(skip_stride(0), 1);
        assert_eq!(skip_stride(-7), 1);
        assert_eq!(skip_stride(3), 3);
        assert_eq!(
            skip_stride(i64::MAX),
            usize::try_from(i64::MAX).unwrap_or(usize::MAX)
        );
        assert!(skip_stride(i64::MAX) > 1);

        let options =
            PlotOptions::from_json(r#"{"columns":["a"],"skip":9007199254740991}"#).unwrap();
        assert!(options.skip > 1);
    }

    #[test]
    fn non_positive_max_range_is_unbounded() {
        let options = PlotOptions::from_json(r#"{"columns":["a"],"maxRange":-3}"#).unwrap();
        assert_eq!(options.max_x, None);
        assert_eq!(PlotOptions::new(["a"]).with_max_x(0.0).effective_max_x(), None);
    }

    #[test]
    fn malformed_json_is_an_options_error() {
        let err = PlotOptions::from_json("{columns:").unwrap_err();
        assert_eq!(err.kind(), "OptionsParseError");
    }

    #[test]
    fn parse_size_rejects_extra_parts() {
        assert_eq!(parse_size("10x20"), Some((10, 20)));
        assert_eq!(parse_size("10x20x30"), None);
        assert_eq!(parse_size("x20"), None);
        assert_eq!(parse_size("-10x20"), None);
    }
}
