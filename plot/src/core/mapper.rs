//! Data space → pixel space.

use super::error::PlotError;
use super::range::{PlotRanges, Range};

/// Border reserved around the plot rectangle for axes and labels.
pub const MARGIN: f64 = 60.0;

/// Points this far outside the plot rectangle are still drawn.
const ACCEPT_TOLERANCE: f64 = 1.0;

/// Pixel geometry of the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Frame {
    /// Frame for a canvas of the given size with the standard margin.
    pub fn new(width: u32, height: u32) -> Result<Self, PlotError> {
        let frame = Self {
            width: f64::from(width),
            height: f64::from(height),
            margin: MARGIN,
        };
        if frame.usable_width() <= 0.0 || frame.usable_height() <= 0.0 {
            return Err(PlotError::CanvasTooSmall { width, height });
        }
        Ok(frame)
    }

    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    pub fn usable_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }

    pub fn left(&self) -> f64 {
        self.margin
    }

    pub fn right(&self) -> f64 {
        self.width - self.margin
    }

    pub fn top(&self) -> f64 {
        self.margin
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.margin
    }

    fn accepts(&self, px: f64, py: f64) -> bool {
        px >= self.left() - ACCEPT_TOLERANCE
            && px <= self.right() + ACCEPT_TOLERANCE
            && py >= self.top() - ACCEPT_TOLERANCE
            && py <= self.bottom() + ACCEPT_TOLERANCE
    }
}

/// Rescale `x` from the natural X range into the display range.
pub fn remap_x(x: f64, natural: Range, display: Range) -> f64 {
    if natural.max == natural.min {
        return display.min;
    }
    display.min + (x - natural.min) / natural.span() * display.span()
}

/// Pixel position of a data point, or `None` when it lands outside the plot
/// rectangle (plus tolerance). Out-of-frame points are dropped, not clamped.
pub fn map_point(x: f64, y: f64, ranges: &PlotRanges, frame: &Frame) -> Option<(f64, f64)> {
    let x = if ranges.remap {
        remap_x(x, ranges.x, ranges.display_x)
    } else {
        x
    };

    let px = frame.left() + unit_position(x, ranges.display_x) * frame.usable_width();
    let py = frame.bottom() - unit_position(y, ranges.y) * frame.usable_height();

    frame.accepts(px, py).then_some((px, py))
}

/// Where `value` sits in `range` as a fraction; the midpoint for an empty range.
fn unit_position(value: f64, range: Range) -> f64 {
    if range.span() == 0.0 {
        0.5
    } else {
        (value - range.min) / range.span()
    }
}
