//! Shared plotting crate for csvgraph. Turns CSV text plus a handful of
//! options into a scatter-with-lines chart, encoded as base64 PNG. The web
//! and desktop hosts are thin wrappers around [`handle_request`].

pub mod core;
pub mod render;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

mod request;

pub use crate::core::error::PlotError;
pub use crate::core::options::PlotOptions;
pub use crate::core::range::{PlotRanges, Range};
pub use crate::core::series::Point;
pub use request::{
    generate_plot, handle_request, render_plot, PlotRequest, PlotResponse, RenderedPlot,
};
