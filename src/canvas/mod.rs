pub(crate) mod viewport;

use std::fmt;

use crate::{
    canvas::viewport::{MoveOp, ScaleOp, Viewport},
    config::model::{Background, Config},
    foundation::{
        core::{Argb, Offset, Size},
        error::ViewResult,
    },
    render::blit,
    text::{
        face::FontFace,
        glyph::GlyphSource,
        overlay::{self, Corner, TextStyle},
    },
};

/// Viewport state plus the compositing operations that render one frame.
///
/// Geometry operations take `&mut self`; rendering operations take `&self` and only write
/// into caller-owned buffers, which are never retained past a call. The canvas is not
/// synchronized: confine it to one thread.
pub struct Canvas {
    viewport: Viewport,
    initial_scale: ScaleOp,
    background: Background,
    style: TextStyle,
    glyphs: Option<Box<dyn GlyphSource>>,
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Canvas")
            .field("viewport", &self.viewport)
            .field("initial_scale", &self.initial_scale)
            .field("background", &self.background)
            .field("style", &self.style)
            .field("has_font", &self.glyphs.is_some())
            .finish()
    }
}

impl Canvas {
    /// Create a canvas from validated settings, loading the configured font if any.
    #[tracing::instrument(skip(config))]
    pub fn new(config: &Config) -> ViewResult<Self> {
        config.validate()?;
        let glyphs: Option<Box<dyn GlyphSource>> = match &config.text.font.path {
            Some(path) => Some(Box::new(FontFace::from_file(path, config.text.font.size)?)),
            None => {
                tracing::debug!("no font configured, text overlays disabled");
                None
            }
        };
        Ok(Self::build(config, glyphs))
    }

    /// Create a canvas that rasterizes overlay text with `glyphs` instead of a font file.
    pub fn with_glyph_source(config: &Config, glyphs: Box<dyn GlyphSource>) -> ViewResult<Self> {
        config.validate()?;
        Ok(Self::build(config, Some(glyphs)))
    }

    fn build(config: &Config, glyphs: Option<Box<dyn GlyphSource>>) -> Self {
        Self {
            viewport: Viewport::new(config.zoom, config.move_step_percent),
            initial_scale: config.initial_scale,
            background: config.background,
            style: TextStyle {
                color: config.text.color.argb(),
                shadow: config.text.shadow.map(|c| c.argb()),
            },
            glyphs,
        }
    }

    /// Scale policy configured for freshly loaded images.
    pub fn initial_scale(&self) -> ScaleOp {
        self.initial_scale
    }

    /// Read-only view of the scale/pan state.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current window size.
    pub fn window_size(&self) -> Size {
        self.viewport.window_size()
    }

    /// Current window scale factor.
    pub fn window_scale(&self) -> u32 {
        self.viewport.window_scale()
    }

    /// Size of the current image.
    pub fn image_size(&self) -> Size {
        self.viewport.image_size()
    }

    /// Image origin relative to the window origin.
    pub fn offset(&self) -> Offset {
        self.viewport.offset()
    }

    /// Update the window geometry.
    ///
    /// Returns `true` exactly once: on the first successful resize. Zero width, height or
    /// scale is rejected and leaves the state untouched.
    pub fn resize(&mut self, width: u32, height: u32, scale: u32) -> ViewResult<bool> {
        self.viewport.resize(width, height, scale)
    }

    /// Start viewing a new image of the given size.
    ///
    /// Must precede [`Canvas::draw_image`] and [`Canvas::move_viewport`] for that image.
    #[tracing::instrument(skip(self))]
    pub fn reset_image(&mut self, width: u32, height: u32, op: ScaleOp) -> ViewResult<()> {
        self.viewport.reset_image(width, height, op)
    }

    /// Swap image width and height after a 90 degree rotation, keeping the image center.
    pub fn swap_image_size(&mut self) {
        self.viewport.swap_image_size();
    }

    /// Apply a scaling operation around the window center.
    ///
    /// Consecutive calls track the centered image point at sub-pixel precision, so a
    /// run of zoom steps undone by the opposite steps returns to the same pan.
    pub fn set_scale(&mut self, op: ScaleOp) {
        self.viewport.set_scale(op);
    }

    /// Current scale, `1.0` = 100%.
    pub fn get_scale(&self) -> f64 {
        self.viewport.scale()
    }

    /// Pan or recenter the image; returns `false` when nothing visibly changed.
    pub fn move_viewport(&mut self, op: MoveOp) -> bool {
        self.viewport.move_by(op)
    }

    /// Fill the window buffer with the configured backdrop.
    pub fn clear(&self, window: &mut [Argb]) -> ViewResult<()> {
        blit::clear(&self.viewport, self.background, window)
    }

    /// Draw the image into the window under the current scale and offset.
    pub fn draw_image(
        &self,
        use_alpha: bool,
        image: &[Argb],
        window: &mut [Argb],
    ) -> ViewResult<()> {
        blit::draw_image(&self.viewport, use_alpha, image, window)
    }

    /// Print a single line of text at a window corner.
    ///
    /// Draws nothing when the canvas has no glyph source.
    pub fn print_line(&self, window: &mut [Argb], corner: Corner, text: &str) -> ViewResult<()> {
        let Some(glyphs) = self.glyphs.as_deref() else {
            return self.window_size().check_buffer(window.len(), "window");
        };
        overlay::print_line(&self.viewport, glyphs, self.style, window, corner, text)
    }

    /// Print up to `count` key/value rows at the top-left corner.
    pub fn print_info<K, V>(
        &self,
        window: &mut [Argb],
        count: usize,
        info: &[(K, V)],
    ) -> ViewResult<()>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let Some(glyphs) = self.glyphs.as_deref() else {
            return self.window_size().check_buffer(window.len(), "window");
        };
        overlay::print_info(&self.viewport, glyphs, self.style, window, count, info)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/canvas.rs"]
mod tests;
