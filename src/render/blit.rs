use rayon::prelude::*;

use crate::{
    canvas::viewport::Viewport,
    config::model::Background,
    foundation::{core::Argb, error::ViewResult},
    render::composite::{opaque, over},
};

/// Paint the configured backdrop over the whole window buffer.
pub(crate) fn clear(vp: &Viewport, background: Background, window: &mut [Argb]) -> ViewResult<()> {
    let size = vp.window_size();
    size.check_buffer(window.len(), "window")?;
    if size.is_empty() {
        return Ok(());
    }

    match background {
        Background::Solid(color) => window.par_iter_mut().for_each(|px| *px = color.argb()),
        Background::Grid(grid) => {
            let cell = (grid.size as usize).saturating_mul(vp.window_scale() as usize).max(1);
            let (even, odd) = (grid.even.argb(), grid.odd.argb());
            window
                .par_chunks_mut(size.width as usize)
                .enumerate()
                .for_each(|(y, row)| {
                    let ty = y / cell;
                    for (x, px) in row.iter_mut().enumerate() {
                        *px = if (x / cell + ty) % 2 == 0 { even } else { odd };
                    }
                });
        }
    }
    Ok(())
}

/// Nearest-neighbour blit of the image into the window under the current viewport.
///
/// Both buffers are validated against the viewport sizes before any pixel is written;
/// all indexing stays inside the clipped visible area.
pub(crate) fn draw_image(
    vp: &Viewport,
    use_alpha: bool,
    image: &[Argb],
    window: &mut [Argb],
) -> ViewResult<()> {
    let win = vp.window_size();
    let img = vp.image_size();
    win.check_buffer(window.len(), "window")?;
    img.check_buffer(image.len(), "image")?;

    let Some(area) = vp.visible_area() else {
        return Ok(());
    };

    let scale = vp.scale();
    let offset = vp.offset();
    let win_w = win.width as usize;
    let img_w = img.width as usize;

    let columns: Vec<usize> = (area.x0..area.x1)
        .map(|x| source_index(x as i64 - offset.x, scale, img.width))
        .collect();

    window[area.y0 * win_w..area.y1 * win_w]
        .par_chunks_mut(win_w)
        .enumerate()
        .for_each(|(i, row)| {
            let sy = source_index((area.y0 + i) as i64 - offset.y, scale, img.height);
            let src_row = &image[sy * img_w..(sy + 1) * img_w];
            let dst = &mut row[area.x0..area.x1];
            if use_alpha {
                for (px, &sx) in dst.iter_mut().zip(&columns) {
                    *px = over(*px, src_row[sx]);
                }
            } else {
                for (px, &sx) in dst.iter_mut().zip(&columns) {
                    *px = opaque(src_row[sx]);
                }
            }
        });

    Ok(())
}

/// Map a distance from the image origin (window pixels) to a source pixel index.
fn source_index(dist: i64, scale: f64, len: u32) -> usize {
    let max = u64::from(len.saturating_sub(1));
    let src = (dist as f64 / scale).floor();
    if src <= 0.0 {
        0
    } else {
        (src as u64).min(max) as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/blit.rs"]
mod tests;
