//! Canvas → PNG bytes → base64 text.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::canvas::Canvas;
use crate::core::error::PlotError;

/// Serialize the canvas as an 8-bit RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, PlotError> {
    // The pixmap stores premultiplied alpha; PNG wants straight alpha.
    let rgba: Vec<u8> = canvas
        .pixmap()
        .pixels()
        .iter()
        .flat_map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&rgba)?;
        writer.finish()?;
    }

    Ok(buffer)
}

/// Standard padded base64, no line wrapping.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
