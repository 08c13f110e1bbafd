use crate::{
    canvas::viewport::Viewport,
    foundation::{
        core::{Argb, Size},
        error::ViewResult,
    },
    render::composite::over_coverage,
    text::glyph::{Glyph, GlyphSource},
};

/// Distance between overlay text and the window edges, at window scale 1.
pub const TEXT_MARGIN: i64 = 10;

/// Window corner used to anchor a single text line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TextStyle {
    pub(crate) color: Argb,
    pub(crate) shadow: Option<Argb>,
}

struct TextLine {
    glyphs: Vec<(i64, Glyph)>,
    width: i64,
}

fn layout(glyphs: &dyn GlyphSource, text: &str, scale: f32) -> TextLine {
    let mut pen = 0i64;
    let mut out = Vec::new();
    for ch in text.chars().filter(|c| !c.is_control()) {
        let glyph = glyphs.glyph(ch, scale);
        let x = pen;
        pen += i64::from(glyph.advance);
        out.push((x, glyph));
    }
    TextLine {
        glyphs: out,
        width: pen,
    }
}

/// Metrics shared by every line drawn in one call.
struct Pen<'a> {
    glyphs: &'a dyn GlyphSource,
    style: TextStyle,
    window: Size,
    scale: f32,
    margin: i64,
    ascent: i64,
    line_height: i64,
    shadow_shift: i64,
}

impl<'a> Pen<'a> {
    fn new(vp: &Viewport, glyphs: &'a dyn GlyphSource, style: TextStyle) -> Self {
        let ws = vp.window_scale().max(1);
        let scale = ws as f32;
        Self {
            glyphs,
            style,
            window: vp.window_size(),
            scale,
            margin: TEXT_MARGIN * i64::from(ws),
            ascent: i64::from(glyphs.ascent(scale)),
            line_height: i64::from(glyphs.line_height(scale)),
            shadow_shift: i64::from(ws),
        }
    }

    fn layout(&self, text: &str) -> TextLine {
        layout(self.glyphs, text, self.scale)
    }

    /// Draw `line` with its top-left corner at `(x, top)`.
    fn draw(&self, window: &mut [Argb], line: &TextLine, x: i64, top: i64) {
        let baseline = top + self.ascent;
        if let Some(shadow) = self.style.shadow {
            let (sx, sy) = (x + self.shadow_shift, baseline + self.shadow_shift);
            for (gx, glyph) in &line.glyphs {
                blit_glyph(window, self.window, glyph, sx + gx, sy, shadow);
            }
        }
        for (gx, glyph) in &line.glyphs {
            blit_glyph(window, self.window, glyph, x + gx, baseline, self.style.color);
        }
    }
}

/// Composite one glyph at pen position `(x, baseline)`, clipped to the window.
fn blit_glyph(window: &mut [Argb], size: Size, glyph: &Glyph, x: i64, baseline: i64, color: Argb) {
    if glyph.width == 0 || glyph.height == 0 {
        return;
    }
    let (gw, gh) = (i64::from(glyph.width), i64::from(glyph.height));
    let (ww, wh) = (i64::from(size.width), i64::from(size.height));
    let left = x + i64::from(glyph.left);
    let top = baseline + i64::from(glyph.top);

    let cols = (-left).clamp(0, gw)..(ww - left).clamp(0, gw);
    let rows = (-top).clamp(0, gh)..(wh - top).clamp(0, gh);
    if cols.is_empty() || rows.is_empty() {
        return;
    }

    for gy in rows {
        let src_start = (gy * gw) as usize;
        let Some(src_row) = glyph.coverage.get(src_start..src_start + gw as usize) else {
            break;
        };
        let dst_start = ((top + gy) * ww + left) as usize;
        for gx in cols.clone() {
            let cov = src_row[gx as usize];
            if cov != 0 {
                let px = &mut window[dst_start + gx as usize];
                *px = over_coverage(*px, color, cov);
            }
        }
    }
}

pub(crate) fn print_line(
    vp: &Viewport,
    glyphs: &dyn GlyphSource,
    style: TextStyle,
    window: &mut [Argb],
    corner: Corner,
    text: &str,
) -> ViewResult<()> {
    let size = vp.window_size();
    size.check_buffer(window.len(), "window")?;
    if size.is_empty() {
        return Ok(());
    }

    let pen = Pen::new(vp, glyphs, style);
    let line = pen.layout(text);
    let (ww, wh) = (i64::from(size.width), i64::from(size.height));

    let x = match corner {
        Corner::TopRight | Corner::BottomRight => ww - pen.margin - line.width,
        Corner::BottomLeft => pen.margin,
    };
    let top = match corner {
        Corner::TopRight => pen.margin,
        Corner::BottomLeft | Corner::BottomRight => wh - pen.margin - pen.line_height,
    };

    pen.draw(window, &line, x, top);
    Ok(())
}

pub(crate) fn print_info<K, V>(
    vp: &Viewport,
    glyphs: &dyn GlyphSource,
    style: TextStyle,
    window: &mut [Argb],
    count: usize,
    info: &[(K, V)],
) -> ViewResult<()>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let size = vp.window_size();
    size.check_buffer(window.len(), "window")?;
    if size.is_empty() {
        return Ok(());
    }

    let rows = &info[..count.min(info.len())];
    let pen = Pen::new(vp, glyphs, style);
    let keys: Vec<TextLine> = rows
        .iter()
        .map(|(key, _)| pen.layout(&format!("{}:", key.as_ref())))
        .collect();
    let key_width = keys.iter().map(|k| k.width).max().unwrap_or(0);
    let space = i64::from(glyphs.glyph(' ', pen.scale).advance);
    let value_x = pen.margin + key_width + space;

    let wh = i64::from(size.height);
    for (i, ((_, value), key)) in rows.iter().zip(&keys).enumerate() {
        let top = pen.margin + (i as i64) * pen.line_height;
        if top >= wh {
            break;
        }
        pen.draw(window, key, pen.margin, top);
        pen.draw(window, &pen.layout(value.as_ref()), value_x, top);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/text/overlay.rs"]
mod tests;
