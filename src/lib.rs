//! viewcanvas is the viewport and compositing core of an image viewer.
//!
//! A [`Canvas`] owns the mapping between a decoded image and a fixed-size window buffer:
//!
//! - **Geometry**: [`Canvas::resize`], [`Canvas::reset_image`], [`Canvas::swap_image_size`],
//!   [`Canvas::set_scale`] and [`Canvas::move_viewport`] mutate scale and offset.
//! - **Rendering**: [`Canvas::clear`], [`Canvas::draw_image`], [`Canvas::print_line`] and
//!   [`Canvas::print_info`] read that state and composite into caller-owned buffers.
//!
//! Buffers are flat, row-major slices of packed `0xAARRGGBB` pixels ([`Argb`]) sized exactly
//! `width * height`. Decoding images, running an event loop and shaping text are left to the
//! caller; glyphs arrive through the [`GlyphSource`] trait ([`FontFace`] wraps `ab_glyph`).
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod canvas;
mod config;
mod foundation;
mod render;
mod text;

pub use canvas::Canvas;
pub use canvas::viewport::{MoveOp, ScaleOp, Viewport};
pub use config::color::Color;
pub use config::model::{Background, Config, FontConfig, GridConfig, TextConfig, ZoomConfig};
pub use foundation::core::{ALPHA_MASK, Argb, Offset, Size, alpha, argb, blue, green, red};
pub use foundation::error::{ViewError, ViewResult};
pub use text::face::FontFace;
pub use text::glyph::{Glyph, GlyphSource};
pub use text::overlay::{Corner, TEXT_MARGIN};
