/// Alpha coverage bitmap of one rasterized character.
///
/// `coverage` is row-major, `width * height` bytes, 0 = empty and 255 = fully covered.
/// The bitmap's top-left corner sits at `(pen_x + left, baseline + top)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Glyph {
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
    /// Horizontal bearing from the pen position.
    pub left: i32,
    /// Vertical bearing from the baseline (negative: above it).
    pub top: i32,
    /// Pen advance to the next character.
    pub advance: i32,
    /// Coverage values.
    pub coverage: Vec<u8>,
}

/// Producer of rasterized glyphs for overlay text.
///
/// `scale` is the window scale factor; implementations multiply their base size by it.
pub trait GlyphSource {
    /// Distance from the top of a text line to its baseline.
    fn ascent(&self, scale: f32) -> i32;

    /// Distance between consecutive baselines.
    fn line_height(&self, scale: f32) -> i32;

    /// Rasterize `ch`. Characters without an outline return an empty bitmap with an advance.
    fn glyph(&self, ch: char, scale: f32) -> Glyph;
}
