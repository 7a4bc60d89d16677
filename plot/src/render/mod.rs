//! Everything that touches pixels: palette, bitmap text, the canvas, chart
//! layout and PNG output.

pub mod canvas;
pub mod chart;
pub mod encode;
pub mod glyphs;
pub mod palette;

pub use canvas::{Anchor, Canvas};
pub use chart::{ChartRenderer, LegendBox, Phase, PlottedSeries, SeriesData};
pub use encode::{encode_base64, encode_png};
pub use palette::{generate_colors, Rgba};
