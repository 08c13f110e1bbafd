use std::path::Path;

use ab_glyph::{Font as _, FontArc, ScaleFont as _, point};
use anyhow::Context as _;

use crate::{
    foundation::error::{ViewError, ViewResult},
    text::glyph::{Glyph, GlyphSource},
};

/// TrueType/OpenType face rasterized with `ab_glyph`.
#[derive(Clone, Debug)]
pub struct FontFace {
    font: FontArc,
    size: f32,
}

impl FontFace {
    /// Parse font data; `size` is the pixel size at window scale 1.
    pub fn from_bytes(data: Vec<u8>, size: f32) -> ViewResult<Self> {
        if !(size.is_finite() && size > 0.0) {
            return Err(ViewError::validation("font size must be > 0"));
        }
        let font = FontArc::try_from_vec(data).map_err(|e| ViewError::font(e.to_string()))?;
        Ok(Self { font, size })
    }

    /// Read and parse a font file.
    pub fn from_file(path: impl AsRef<Path>, size: f32) -> ViewResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        Self::from_bytes(data, size)
    }

    fn px(&self, scale: f32) -> f32 {
        self.size * scale.max(1.0)
    }
}

impl GlyphSource for FontFace {
    fn ascent(&self, scale: f32) -> i32 {
        self.font.as_scaled(self.px(scale)).ascent().ceil() as i32
    }

    fn line_height(&self, scale: f32) -> i32 {
        let scaled = self.font.as_scaled(self.px(scale));
        (scaled.height() + scaled.line_gap()).ceil() as i32
    }

    fn glyph(&self, ch: char, scale: f32) -> Glyph {
        let px = self.px(scale);
        let scaled = self.font.as_scaled(px);
        let id = self.font.glyph_id(ch);
        let advance = scaled.h_advance(id).round() as i32;

        let Some(outlined) = self
            .font
            .outline_glyph(id.with_scale_and_position(px, point(0.0, 0.0)))
        else {
            return Glyph {
                advance,
                ..Glyph::default()
            };
        };

        let bounds = outlined.px_bounds();
        let width = bounds.width().max(0.0) as u32;
        let height = bounds.height().max(0.0) as u32;
        let mut coverage = vec![0u8; (width as usize) * (height as usize)];
        outlined.draw(|x, y, c| {
            if x < width && y < height {
                let idx = (y as usize) * (width as usize) + (x as usize);
                coverage[idx] = (c.clamp(0.0, 1.0) * 255.0).round() as u8;
            }
        });

        Glyph {
            width,
            height,
            left: bounds.min.x as i32,
            top: bounds.min.y as i32,
            advance,
            coverage,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/face.rs"]
mod tests;
