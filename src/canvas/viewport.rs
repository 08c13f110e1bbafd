use kurbo::Rect;
use serde::{Deserialize, Serialize};

use crate::{
    config::model::ZoomConfig,
    foundation::{
        core::{Offset, Size},
        error::{ViewError, ViewResult},
        math::round_px,
    },
};

/// Scaling operation applied by [`crate::Canvas::set_scale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleOp {
    /// Fit to the window, but never enlarge beyond 100%.
    FitOr100,
    /// Fit to the window: the limiting side matches the window exactly.
    FitWindow,
    /// Cover the whole window, cropping the other side.
    FillWindow,
    /// Native size (100%).
    RealSize,
    /// Enlarge by one zoom step, capped at the configured maximum.
    ///
    /// A step cut short by the cap is not undone exactly by [`ScaleOp::ZoomOut`]:
    /// with a max of 100, zooming in from 95 lands on 100 and zooming out again
    /// gives `100 / step`.
    ZoomIn,
    /// Reduce by one zoom step, floored at the configured minimum.
    ///
    /// Same boundary caveat as [`ScaleOp::ZoomIn`] near the minimum.
    ZoomOut,
}

impl ScaleOp {
    /// Return `true` for operations relative to the current scale.
    pub fn is_relative(self) -> bool {
        matches!(self, Self::ZoomIn | Self::ZoomOut)
    }
}

/// Viewport movement applied by [`crate::Canvas::move_viewport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOp {
    /// Center the image on both axes.
    Center,
    /// Center horizontally only.
    CenterHorizontal,
    /// Center vertically only.
    CenterVertical,
    /// Reveal more of the left side of the image.
    StepLeft,
    /// Reveal more of the right side of the image.
    StepRight,
    /// Reveal more of the top of the image.
    StepUp,
    /// Reveal more of the bottom of the image.
    StepDown,
}

/// Window-space rectangle covered by the image, already clipped to the window.
///
/// Half-open on both axes: `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelRect {
    pub(crate) x0: usize,
    pub(crate) y0: usize,
    pub(crate) x1: usize,
    pub(crate) y1: usize,
}

/// Image point (in unscaled image pixels) kept under the window center across
/// consecutive zoom steps, per axis.
///
/// Cleared by every other geometry change, and per axis when the fix-up moves
/// the image away from it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ZoomAnchor {
    x: Option<f64>,
    y: Option<f64>,
}

/// Scale and pan state mapping an image onto a window.
///
/// Only the geometry operations mutate it; renderers take it by shared reference.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    window: Size,
    window_scale: u32,
    image: Size,
    scale: f64,
    offset: Offset,
    zoom: ZoomConfig,
    move_step_percent: u32,
    anchor: ZoomAnchor,
}

impl Viewport {
    pub(crate) fn new(zoom: ZoomConfig, move_step_percent: u32) -> Self {
        Self {
            window: Size::default(),
            window_scale: 1,
            image: Size::default(),
            scale: 1.0,
            offset: Offset::default(),
            zoom,
            move_step_percent,
            anchor: ZoomAnchor::default(),
        }
    }

    /// Window size in pixels; empty until the first successful resize.
    pub fn window_size(&self) -> Size {
        self.window
    }

    /// Display scale factor of the window (HiDPI multiplier).
    pub fn window_scale(&self) -> u32 {
        self.window_scale
    }

    /// Size of the current image in pixels.
    pub fn image_size(&self) -> Size {
        self.image
    }

    /// Current zoom factor, `1.0` = 100%.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Image origin relative to the window origin.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Image size after scaling, in window pixels.
    pub fn scaled_extent(&self) -> (i64, i64) {
        (
            round_px(f64::from(self.image.width) * self.scale),
            round_px(f64::from(self.image.height) * self.scale),
        )
    }

    pub(crate) fn resize(&mut self, width: u32, height: u32, scale: u32) -> ViewResult<bool> {
        if width == 0 || height == 0 || scale == 0 {
            tracing::warn!(width, height, scale, "rejecting invalid window geometry");
            return Err(ViewError::validation(format!(
                "window geometry must be non-zero, got {width}x{height} at scale {scale}"
            )));
        }

        let first = self.window.is_empty();
        let old = self.window;
        self.window = Size::new(width, height);
        self.window_scale = scale;
        self.anchor = ZoomAnchor::default();

        if !self.image.is_empty() {
            if !first {
                self.offset.x += (i64::from(width) - i64::from(old.width)) / 2;
                self.offset.y += (i64::from(height) - i64::from(old.height)) / 2;
            }
            self.fix_viewport();
        }

        tracing::debug!(width, height, scale, first, "window resized");
        Ok(first)
    }

    pub(crate) fn reset_image(&mut self, width: u32, height: u32, op: ScaleOp) -> ViewResult<()> {
        if width == 0 || height == 0 {
            return Err(ViewError::validation(format!(
                "image size must be non-zero, got {width}x{height}"
            )));
        }

        self.image = Size::new(width, height);
        self.offset = Offset::default();
        self.anchor = ZoomAnchor::default();
        self.scale = 1.0;
        if let Some(scale) = self.target_scale(op) {
            self.scale = scale;
        }
        self.center(true, true);
        self.fix_viewport();

        tracing::debug!(width, height, scale = self.scale, "image reset");
        Ok(())
    }

    pub(crate) fn swap_image_size(&mut self) {
        let (old_w, old_h) = self.scaled_extent();
        self.image = self.image.swapped();
        let (new_w, new_h) = self.scaled_extent();
        self.anchor = ZoomAnchor::default();

        // keep the image center where it was
        self.offset.x += (old_w - new_w) / 2;
        self.offset.y += (old_h - new_h) / 2;
        self.fix_viewport();
    }

    pub(crate) fn set_scale(&mut self, op: ScaleOp) {
        let Some(scale) = self.target_scale(op) else {
            return;
        };
        if scale == self.scale {
            return;
        }

        // the image point under the window center stays in place
        let cx = i64::from(self.window.width) / 2;
        let cy = i64::from(self.window.height) / 2;
        let ax = self
            .anchor
            .x
            .unwrap_or((cx - self.offset.x) as f64 / self.scale);
        let ay = self
            .anchor
            .y
            .unwrap_or((cy - self.offset.y) as f64 / self.scale);
        let wanted = Offset::new(cx - round_px(ax * scale), cy - round_px(ay * scale));
        self.offset = wanted;
        self.scale = scale;
        self.fix_viewport();
        self.anchor = ZoomAnchor {
            x: (self.offset.x == wanted.x).then_some(ax),
            y: (self.offset.y == wanted.y).then_some(ay),
        };

        tracing::debug!(?op, scale, "scale changed");
    }

    pub(crate) fn move_by(&mut self, op: MoveOp) -> bool {
        let before = self.offset;
        self.anchor = ZoomAnchor::default();
        let step_x = self.step(self.window.width);
        let step_y = self.step(self.window.height);

        match op {
            MoveOp::Center => self.center(true, true),
            MoveOp::CenterHorizontal => self.center(true, false),
            MoveOp::CenterVertical => self.center(false, true),
            MoveOp::StepLeft => self.offset.x = self.offset.x.saturating_add(step_x),
            MoveOp::StepRight => self.offset.x = self.offset.x.saturating_sub(step_x),
            MoveOp::StepUp => self.offset.y = self.offset.y.saturating_add(step_y),
            MoveOp::StepDown => self.offset.y = self.offset.y.saturating_sub(step_y),
        }
        self.fix_viewport();

        self.offset != before
    }

    /// Window area covered by the image, or `None` when nothing is visible.
    pub(crate) fn visible_area(&self) -> Option<PixelRect> {
        if self.window.is_empty() || self.image.is_empty() {
            return None;
        }
        let (w, h) = self.scaled_extent();
        let image = Rect::new(
            self.offset.x as f64,
            self.offset.y as f64,
            self.offset.x.saturating_add(w) as f64,
            self.offset.y.saturating_add(h) as f64,
        );
        let window = Rect::new(
            0.0,
            0.0,
            f64::from(self.window.width),
            f64::from(self.window.height),
        );
        let clip = image.intersect(window);
        if clip.is_zero_area() {
            return None;
        }
        Some(PixelRect {
            x0: clip.x0 as usize,
            y0: clip.y0 as usize,
            x1: clip.x1 as usize,
            y1: clip.y1 as usize,
        })
    }

    fn target_scale(&self, op: ScaleOp) -> Option<f64> {
        let scale = match op {
            ScaleOp::FitOr100 => self.fit_factor().min(1.0),
            ScaleOp::FitWindow => self.fit_factor(),
            ScaleOp::FillWindow => self.fill_factor(),
            ScaleOp::RealSize => 1.0,
            ScaleOp::ZoomIn => {
                if self.scale >= self.zoom.max {
                    self.scale
                } else {
                    (self.scale * self.zoom.step).min(self.zoom.max)
                }
            }
            ScaleOp::ZoomOut => {
                if self.scale <= self.zoom.min {
                    self.scale
                } else {
                    (self.scale / self.zoom.step).max(self.zoom.min)
                }
            }
        };

        if scale.is_finite() && scale > 0.0 {
            Some(scale)
        } else {
            tracing::warn!(?op, scale, "ignoring non-positive scale");
            None
        }
    }

    fn axis_ratios(&self) -> Option<(f64, f64)> {
        if self.window.is_empty() || self.image.is_empty() {
            return None;
        }
        Some((
            f64::from(self.window.width) / f64::from(self.image.width),
            f64::from(self.window.height) / f64::from(self.image.height),
        ))
    }

    fn fit_factor(&self) -> f64 {
        self.axis_ratios().map_or(1.0, |(sx, sy)| sx.min(sy))
    }

    fn fill_factor(&self) -> f64 {
        self.axis_ratios().map_or(1.0, |(sx, sy)| sx.max(sy))
    }

    fn step(&self, window_dim: u32) -> i64 {
        (i64::from(window_dim) * i64::from(self.move_step_percent) / 100).max(1)
    }

    fn center(&mut self, horizontal: bool, vertical: bool) {
        let (w, h) = self.scaled_extent();
        if horizontal {
            self.offset.x = (i64::from(self.window.width) - w) / 2;
        }
        if vertical {
            self.offset.y = (i64::from(self.window.height) - h) / 2;
        }
    }

    fn fix_viewport(&mut self) {
        fn fix_axis(pos: i64, extent: i64, window: i64) -> i64 {
            if extent <= window {
                (window - extent) / 2
            } else {
                pos.clamp(window - extent, 0)
            }
        }

        let (w, h) = self.scaled_extent();
        self.offset.x = fix_axis(self.offset.x, w, i64::from(self.window.width));
        self.offset.y = fix_axis(self.offset.y, h, i64::from(self.window.height));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/viewport.rs"]
mod tests;
