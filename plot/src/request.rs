//! The request boundary: CSV text + options in, PNG (or an error) out.

use serde::Serialize;
use tracing::debug;

use crate::core::error::PlotError;
use crate::core::mapper::Frame;
use crate::core::options::PlotOptions;
use crate::core::range::PlotRanges;
use crate::core::series::{filter_rows, resolve_series, thin_rows};
use crate::core::table::Table;
use crate::render::{encode_base64, encode_png, Canvas, ChartRenderer, PlottedSeries, SeriesData};

/// One plot job. Built per call and dropped afterwards.
#[derive(Debug, Clone)]
pub struct PlotRequest {
    pub csv_data: String,
    pub options: PlotOptions,
}

impl PlotRequest {
    pub fn new(csv_data: impl Into<String>, options: PlotOptions) -> Self {
        Self {
            csv_data: csv_data.into(),
            options,
        }
    }

    pub fn from_json(csv_data: impl Into<String>, options_json: &str) -> Result<Self, PlotError> {
        Ok(Self::new(csv_data, PlotOptions::from_json(options_json)?))
    }

    pub fn render(&self) -> Result<RenderedPlot, PlotError> {
        render_plot(&self.csv_data, &self.options)
    }

    /// Render and encode; returns base64 PNG text.
    pub fn generate(&self) -> Result<String, PlotError> {
        generate_plot(&self.csv_data, &self.options)
    }
}

/// A finished chart before encoding.
pub struct RenderedPlot {
    pub canvas: Canvas,
    pub ranges: PlotRanges,
    pub series: Vec<PlottedSeries>,
}

impl RenderedPlot {
    pub fn to_png(&self) -> Result<Vec<u8>, PlotError> {
        encode_png(&self.canvas)
    }
}

/// What a host hands back to its caller. Serializes to either
/// `{"base64Image": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PlotResponse {
    Image {
        #[serde(rename = "base64Image")]
        base64_image: String,
    },
    Error {
        error: String,
    },
}

impl PlotResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, PlotResponse::Error { .. })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            format!("{{\"error\":\"failed to serialize response: {err}\"}}")
        })
    }
}

impl From<Result<String, PlotError>> for PlotResponse {
    fn from(result: Result<String, PlotError>) -> Self {
        match result {
            Ok(base64_image) => PlotResponse::Image { base64_image },
            Err(err) => PlotResponse::Error {
                error: err.to_string(),
            },
        }
    }
}

/// Run the whole pipeline up to a drawn canvas.
pub fn render_plot(csv_data: &str, options: &PlotOptions) -> Result<RenderedPlot, PlotError> {
    if options.columns.is_empty() {
        return Err(PlotError::NoColumnsRequested);
    }

    let table = Table::parse(csv_data, options.x_in_first_column)?;
    let series = resolve_series(&table, &options.columns)?;
    let filtered = filter_rows(&table.rows, table.x_index, options.effective_max_x())?;
    let thinned = thin_rows(&filtered, options.skip)?;
    let ranges = PlotRanges::resolve(
        &filtered,
        &thinned,
        table.x_index,
        &series,
        options.x_scale.as_deref(),
    )?;

    let frame = Frame::new(options.width, options.height)?;
    let mut canvas = Canvas::new(options.width, options.height)?;

    let data = series
        .iter()
        .map(|s| SeriesData {
            name: s.name.clone(),
            points: s.points(&thinned, table.x_index),
        })
        .collect();

    let plotted = ChartRenderer::new(&mut canvas, frame, ranges, &options.title, data).render();
    debug!(
        series = plotted.len(),
        points = plotted.iter().map(|s| s.points.len()).sum::<usize>(),
        "rendered chart"
    );

    Ok(RenderedPlot {
        canvas,
        ranges,
        series: plotted,
    })
}

/// Render, encode as PNG and return the base64 text.
pub fn generate_plot(csv_data: &str, options: &PlotOptions) -> Result<String, PlotError> {
    let plot = render_plot(csv_data, options)?;
    let png = plot.to_png()?;
    Ok(encode_base64(&png))
}

/// String-in, response-out entry point used by the hosts. Never panics on
/// bad input; every failure becomes [`PlotResponse::Error`].
pub fn handle_request(csv_data: &str, options_json: &str) -> PlotResponse {
    PlotOptions::from_json(options_json)
        .and_then(|options| generate_plot(csv_data, &options))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_to_host_shape() {
        let ok = PlotResponse::Image {
            base64_image: "AAAA".into(),
        };
        assert_eq!(ok.to_json(), r#"{"base64Image":"AAAA"}"#);

        let err = PlotResponse::Error {
            error: "boom".into(),
        };
        assert_eq!(err.to_json(), r#"{"error":"boom"}"#);
        assert!(err.is_error());
    }

    #[test]
    fn empty_column_list_is_rejected_before_parsing() {
        let err = render_plot("not,even\ncsv", &PlotOptions::default())
            .err()
            .unwrap();
        assert_eq!(err.kind(), "NoColumnsRequestedError");
    }

    #[test]
    fn small_canvas_is_rejected() {
        let options = PlotOptions::new(["a"]).with_size(100, 400);
        let err = render_plot("a\n1\n", &options).err().unwrap();
        assert_eq!(err.kind(), "CanvasTooSmallError");
    }

    #[test]
    fn request_round_trips_through_json_options() {
        let request =
            PlotRequest::from_json("t,a\n1,10\n2,20\n3,30\n", r#"{"columns":["a"],"xdata":true}"#)
                .unwrap();
        let plot = request.render().unwrap();
        assert_eq!(plot.series.len(), 1);
        assert_eq!(plot.series[0].points.len(), 3);
    }
}
