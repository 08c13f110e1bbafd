use crate::foundation::error::{ViewError, ViewResult};

/// Packed 32-bit pixel, `0xAARRGGBB`, straight (non-premultiplied) alpha.
pub type Argb = u32;

/// Alpha channel mask of an [`Argb`] pixel.
pub const ALPHA_MASK: Argb = 0xff00_0000;

/// Pack four channels into an [`Argb`] pixel.
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Argb {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Alpha channel of `c`.
pub const fn alpha(c: Argb) -> u8 {
    (c >> 24) as u8
}

/// Red channel of `c`.
pub const fn red(c: Argb) -> u8 {
    (c >> 16) as u8
}

/// Green channel of `c`.
pub const fn green(c: Argb) -> u8 {
    (c >> 8) as u8
}

/// Blue channel of `c`.
pub const fn blue(c: Argb) -> u8 {
    c as u8
}

/// Pixel dimensions of a window or an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a size value; zero dimensions are allowed and mean "empty".
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Return `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels (`width * height`).
    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Size with width and height exchanged.
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Check that a flat pixel buffer covers exactly this size.
    pub(crate) fn check_buffer(self, len: usize, what: &str) -> ViewResult<()> {
        if len != self.area() {
            return Err(ViewError::validation(format!(
                "{what} buffer has {len} pixels, expected {}x{} = {}",
                self.width,
                self.height,
                self.area()
            )));
        }
        Ok(())
    }
}

/// Position of the image origin relative to the window origin, in window pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Horizontal position (negative: image starts left of the window).
    pub x: i64,
    /// Vertical position (negative: image starts above the window).
    pub y: i64,
}

impl Offset {
    /// Create an offset.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
