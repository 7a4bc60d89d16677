//! Raster drawing surface backed by a `tiny_skia::Pixmap`.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use super::glyphs::{self, ADVANCE};
use super::palette::Rgba;
use crate::core::error::PlotError;

/// Where a piece of text sits relative to its reference point, as fractions
/// of the text box: `(0.0, 0.0)` is top-left, `(0.5, 0.5)` centred,
/// `(1.0, 0.5)` right-aligned and vertically centred.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, PlotError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(PlotError::CanvasAllocation { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight (non-premultiplied) color of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgba::new(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn clear(&mut self, color: Rgba) {
        self.pixmap.fill(color.into());
    }

    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgba, width: f32) {
        self.polyline(&[from, to], color, width);
    }

    /// Connected straight segments through `points`, in order, as one stroke.
    pub fn polyline(&mut self, points: &[(f64, f64)], color: Rgba, width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        if rest.is_empty() {
            return;
        }

        let mut pb = PathBuilder::new();
        pb.move_to(first.0 as f32, first.1 as f32);
        for point in rest {
            pb.line_to(point.0 as f32, point.1 as f32);
        }

        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(
                &path,
                &solid(color, true),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }

    pub fn fill_circle(&mut self, center: (f64, f64), radius: f32, color: Rgba) {
        if let Some(path) = PathBuilder::from_circle(center.0 as f32, center.1 as f32, radius) {
            self.pixmap.fill_path(
                &path,
                &solid(color, true),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
            self.pixmap
                .fill_rect(rect, &solid(color, true), Transform::identity(), None);
        }
    }

    pub fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba, width: f32) {
        let corners = [(x, y), (x + w, y), (x + w, y + h), (x, y + h), (x, y)];
        self.polyline(&corners, color, width);
    }

    /// Draw `text` with the bitmap font, anchored at `at`. Glyph cells snap
    /// to whole pixels so the text stays crisp.
    pub fn text(&mut self, text: &str, at: (f64, f64), anchor: Anchor, scale: u32, color: Rgba) {
        let scale = scale.max(1);
        let width = glyphs::text_width(text, scale);
        let height = glyphs::text_height(scale);
        let left = (at.0 - anchor.x * width).round();
        let top = (at.1 - anchor.y * height).round();

        let paint = solid(color, false);
        let cell = scale as f32;
        let mut origin = left as f32;

        for ch in text.chars() {
            if let Some(glyph) = glyphs::glyph(ch) {
                for (col, row) in glyphs::lit_cells(glyph) {
                    let x = origin + (col * scale) as f32;
                    let y = top as f32 + (row * scale) as f32;
                    if let Some(rect) = Rect::from_xywh(x, y, cell, cell) {
                        self.pixmap
                            .fill_rect(rect, &paint, Transform::identity(), None);
                    }
                }
            }
            origin += (ADVANCE * scale) as f32;
        }
    }
}

fn solid(color: Rgba, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.into());
    paint.anti_alias = anti_alias;
    paint
}
