pub(crate) mod face;
pub(crate) mod glyph;
pub(crate) mod overlay;
