//! Data extents and the optional X display remap.

use tracing::{debug, warn};

use super::error::PlotError;
use super::series::{Row, Series};
use super::table::numeric_cell;

/// Closed interval in data space. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Smallest range covering `values`, widened to `[v, v + 1]` when every
    /// value is the same. `None` for an empty iterator.
    pub fn covering<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let (min, max) = values
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            return None;
        }
        Some(Self::new(min, max).widened())
    }

    fn widened(self) -> Self {
        if self.min == self.max {
            Self::new(self.min, self.min + 1.0)
        } else {
            self
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Value at `ratio` of the way from `min` to `max`.
    pub fn lerp(&self, ratio: f64) -> f64 {
        self.min + ratio * self.span()
    }
}

/// Everything the mapper needs to place a data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRanges {
    /// Natural X extent of the filtered rows.
    pub x: Range,
    /// X range shown on the axis. Equals `x` unless a remap is active.
    pub display_x: Range,
    pub y: Range,
    pub remap: bool,
}

impl PlotRanges {
    pub fn resolve(
        filtered: &[Row<'_>],
        thinned: &[Row<'_>],
        x_index: usize,
        series: &[Series],
        x_scale: Option<&str>,
    ) -> Result<Self, PlotError> {
        let x = Range::covering(filtered.iter().filter_map(|row| numeric_cell(row, x_index)))
            .ok_or(PlotError::NoValidX)?;

        let y = Range::covering(series.iter().flat_map(|s| {
            thinned
                .iter()
                .filter_map(move |row| numeric_cell(row, s.index))
        }))
        .ok_or(PlotError::NoValidY)?;

        let display = x_scale.filter(|raw| !raw.is_empty()).and_then(|raw| {
            let parsed = parse_display_range(raw);
            if parsed.is_none() {
                warn!(xscale = raw, "invalid `xscale` option, using data range");
            }
            parsed
        });

        let ranges = match display {
            Some(display_x) => Self {
                x,
                display_x,
                y,
                remap: true,
            },
            None => Self {
                x,
                display_x: x,
                y,
                remap: false,
            },
        };

        debug!(?ranges, "resolved plot ranges");
        Ok(ranges)
    }
}

/// Parse `"start,end"` into a display range. Requires exactly two finite
/// numbers with `end > start`.
pub fn parse_display_range(raw: &str) -> Option<Range> {
    let (start, end) = raw.split_once(',')?;
    if end.contains(',') {
        return None;
    }
    let start: f64 = start.trim().parse().ok()?;
    let end: f64 = end.trim().parse().ok()?;
    (start.is_finite() && end.is_finite() && end > start).then(|| Range::new(start, end))
}
