//! Scatter chart layout: axes, ticks, gridlines, series, legend and title.
//!
//! Drawing happens in a fixed sequence of [`Phase`]s. Each phase only paints
//! on the canvas, so later phases always sit on top of earlier ones.

use super::canvas::{Anchor, Canvas};
use super::glyphs;
use super::palette::{generate_colors, Rgba};
use crate::core::mapper::{map_point, Frame};
use crate::core::range::PlotRanges;
use crate::core::series::Point;

const TICK_STEPS: u32 = 5;
const TICK_LENGTH: f64 = 5.0;
const AXIS_WIDTH: f32 = 1.5;
const TICK_WIDTH: f32 = 1.0;
const GRID_WIDTH: f32 = 0.5;
const GRID_COLOR: Rgba = Rgba::gray(200);

const SERIES_LINE_WIDTH: f32 = 1.0;
const MARKER_RADIUS: f32 = 2.5;

const LEGEND_OFFSET: f64 = 10.0;
const LEGEND_SWATCH: f64 = 10.0;
const LEGEND_ROW_PITCH: f64 = 18.0;
const LEGEND_PAD_X: f64 = 10.0;
const LEGEND_PAD_Y: f64 = 5.0;
const LEGEND_LABEL_GAP: f64 = 5.0;
const LEGEND_FILL: Rgba = Rgba::new(255, 255, 255, 200);
const LEGEND_BORDER: Rgba = Rgba::gray(100);
const LEGEND_BORDER_WIDTH: f32 = 0.5;

const TITLE_Y: f64 = 25.0;
const TITLE_SCALE: u32 = 2;
const LABEL_SCALE: u32 = 1;

/// Rendering order. Every chart runs all of them, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Background,
    Axes,
    Ticks,
    Series,
    Legend,
    Title,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Background,
        Phase::Axes,
        Phase::Ticks,
        Phase::Series,
        Phase::Legend,
        Phase::Title,
    ];
}

/// Input for one series: its legend name and its data points in row order.
#[derive(Debug, Clone)]
pub struct SeriesData {
    pub name: String,
    pub points: Vec<Point>,
}

/// A series after layout: the color it was drawn with and the points that
/// landed on the plot, both in data space and in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PlottedSeries {
    pub name: String,
    pub color: Rgba,
    pub points: Vec<Point>,
    pub pixels: Vec<(f64, f64)>,
}

/// Legend box geometry for `labels`, positioned right of the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LegendBox {
    /// `None` when there is nothing to list.
    pub fn layout<'a, I>(frame: &Frame, labels: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (count, widest) = labels.into_iter().fold((0usize, 0.0f64), |(n, w), label| {
            (n + 1, w.max(glyphs::text_width(label, LABEL_SCALE)))
        });
        if count == 0 {
            return None;
        }
        Some(Self {
            x: frame.right() + LEGEND_OFFSET,
            y: frame.top(),
            width: LEGEND_PAD_X * 2.0 + LEGEND_SWATCH + LEGEND_LABEL_GAP + widest,
            height: LEGEND_PAD_Y * 2.0 + count as f64 * LEGEND_ROW_PITCH
                - (LEGEND_ROW_PITCH - LEGEND_SWATCH),
        })
    }
}

pub struct ChartRenderer<'a> {
    canvas: &'a mut Canvas,
    frame: Frame,
    ranges: PlotRanges,
    title: &'a str,
    series: Vec<PlottedSeries>,
}

impl<'a> ChartRenderer<'a> {
    /// Assign colors and map every point up front; drawing happens in [`render`].
    ///
    /// [`render`]: ChartRenderer::render
    pub fn new(
        canvas: &'a mut Canvas,
        frame: Frame,
        ranges: PlotRanges,
        title: &'a str,
        data: Vec<SeriesData>,
    ) -> Self {
        let colors = generate_colors(data.len());
        let series = data
            .into_iter()
            .zip(colors)
            .map(|(series, color)| {
                let (points, pixels): (Vec<Point>, Vec<(f64, f64)>) = series
                    .points
                    .into_iter()
                    .filter_map(|p| map_point(p.x, p.y, &ranges, &frame).map(|px| (p, px)))
                    .unzip();
                PlottedSeries {
                    name: series.name,
                    color,
                    points,
                    pixels,
                }
            })
            .collect();

        Self {
            canvas,
            frame,
            ranges,
            title,
            series,
        }
    }

    /// Run every phase and hand back what was plotted.
    pub fn render(mut self) -> Vec<PlottedSeries> {
        for phase in Phase::ALL {
            self.draw(phase);
        }
        self.series
    }

    fn draw(&mut self, phase: Phase) {
        match phase {
            Phase::Background => self.canvas.clear(Rgba::WHITE),
            Phase::Axes => self.draw_axes(),
            Phase::Ticks => {
                self.draw_x_ticks();
                self.draw_y_ticks();
            }
            Phase::Series => self.draw_series(),
            Phase::Legend => self.draw_legend(),
            Phase::Title => self.draw_title(),
        }
    }

    fn draw_axes(&mut self) {
        let f = self.frame;
        self.canvas.line(
            (f.left(), f.bottom()),
            (f.right(), f.bottom()),
            Rgba::BLACK,
            AXIS_WIDTH,
        );
        self.canvas.line(
            (f.left(), f.top()),
            (f.left(), f.bottom()),
            Rgba::BLACK,
            AXIS_WIDTH,
        );
    }

    fn draw_x_ticks(&mut self) {
        let f = self.frame;
        for i in 0..=TICK_STEPS {
            let ratio = f64::from(i) / f64::from(TICK_STEPS);
            let tx = f.left() + ratio * f.usable_width();
            let label = format!("{:.1}", self.ranges.display_x.lerp(ratio));

            self.canvas.line(
                (tx, f.bottom()),
                (tx, f.bottom() + TICK_LENGTH),
                Rgba::BLACK,
                TICK_WIDTH,
            );
            self.canvas.text(
                &label,
                (tx, f.bottom() + 15.0),
                Anchor::new(0.5, 1.0),
                LABEL_SCALE,
                Rgba::BLACK,
            );
            if i > 0 && i < TICK_STEPS {
                self.canvas
                    .line((tx, f.top()), (tx, f.bottom()), GRID_COLOR, GRID_WIDTH);
            }
        }
    }

    fn draw_y_ticks(&mut self) {
        let f = self.frame;
        for i in 0..=TICK_STEPS {
            let ratio = f64::from(i) / f64::from(TICK_STEPS);
            let ty = f.bottom() - ratio * f.usable_height();
            let label = format!("{:.1}", self.ranges.y.lerp(ratio));

            self.canvas.line(
                (f.left() - TICK_LENGTH, ty),
                (f.left(), ty),
                Rgba::BLACK,
                TICK_WIDTH,
            );
            self.canvas.text(
                &label,
                (f.left() - 10.0, ty),
                Anchor::new(1.0, 0.5),
                LABEL_SCALE,
                Rgba::BLACK,
            );
            if i > 0 && i < TICK_STEPS {
                self.canvas
                    .line((f.left(), ty), (f.right(), ty), GRID_COLOR, GRID_WIDTH);
            }
        }
    }

    // Consecutive accepted points are joined even when a dropped point sat
    // between them.
    fn draw_series(&mut self) {
        for series in &self.series {
            if series.pixels.is_empty() {
                continue;
            }
            self.canvas
                .polyline(&series.pixels, series.color, SERIES_LINE_WIDTH);
            for &center in &series.pixels {
                self.canvas.fill_circle(center, MARKER_RADIUS, series.color);
            }
        }
    }

    fn draw_legend(&mut self) {
        let Some(legend) =
            LegendBox::layout(&self.frame, self.series.iter().map(|s| s.name.as_str()))
        else {
            return;
        };

        self.canvas
            .fill_rect(legend.x, legend.y, legend.width, legend.height, LEGEND_FILL);
        self.canvas.stroke_rect(
            legend.x,
            legend.y,
            legend.width,
            legend.height,
            LEGEND_BORDER,
            LEGEND_BORDER_WIDTH,
        );

        let swatch_x = legend.x + LEGEND_PAD_X;
        let label_x = swatch_x + LEGEND_SWATCH + LEGEND_LABEL_GAP;
        let mut row_y = legend.y + LEGEND_PAD_Y;
        for series in &self.series {
            self.canvas
                .fill_rect(swatch_x, row_y, LEGEND_SWATCH, LEGEND_SWATCH, series.color);
            self.canvas.text(
                &series.name,
                (label_x, row_y + LEGEND_SWATCH / 2.0),
                Anchor::new(0.0, 0.5),
                LABEL_SCALE,
                Rgba::BLACK,
            );
            row_y += LEGEND_ROW_PITCH;
        }
    }

    fn draw_title(&mut self) {
        self.canvas.text(
            self.title,
            (self.frame.width / 2.0, TITLE_Y),
            Anchor::new(0.5, 0.5),
            TITLE_SCALE,
            Rgba::BLACK,
        );
    }
}
