use super::*;
use crate::{canvas::viewport::ScaleOp, config::model::ZoomConfig};

const BG: Argb = 0xff00_0000;
const RED: Argb = 0xffff_0000;
const GRAY: Argb = 0xff80_8080;

/// Every printable character is a solid 3x5 block sitting on the baseline.
struct BlockGlyphs;

impl GlyphSource for BlockGlyphs {
    fn ascent(&self, _scale: f32) -> i32 {
        5
    }

    fn line_height(&self, _scale: f32) -> i32 {
        7
    }

    fn glyph(&self, ch: char, _scale: f32) -> Glyph {
        if ch == ' ' {
            return Glyph {
                advance: 4,
                ..Glyph::default()
            };
        }
        Glyph {
            width: 3,
            height: 5,
            left: 0,
            top: -5,
            advance: 4,
            coverage: vec![255; 15],
        }
    }
}

fn viewport(width: u32, height: u32) -> Viewport {
    let mut vp = Viewport::new(ZoomConfig::default(), 10);
    vp.resize(width, height, 1).unwrap();
    vp.reset_image(1, 1, ScaleOp::RealSize).unwrap();
    vp
}

fn plain() -> TextStyle {
    TextStyle {
        color: RED,
        shadow: None,
    }
}

fn at(window: &[Argb], width: u32, x: usize, y: usize) -> Argb {
    window[y * width as usize + x]
}

#[test]
fn top_right_line_is_right_aligned_inside_margin() {
    let vp = viewport(40, 20);
    let mut wnd = vec![BG; 800];
    print_line(&vp, &BlockGlyphs, plain(), &mut wnd, Corner::TopRight, "ab").unwrap();

    // width 8 -> x = 40 - 10 - 8
    assert_eq!(at(&wnd, 40, 22, 10), RED);
    assert_eq!(at(&wnd, 40, 24, 14), RED);
    assert_eq!(at(&wnd, 40, 25, 10), BG);
    assert_eq!(at(&wnd, 40, 26, 10), RED);
    assert_eq!(at(&wnd, 40, 21, 10), BG);
    assert_eq!(at(&wnd, 40, 22, 9), BG);
    assert_eq!(at(&wnd, 40, 22, 15), BG);
    assert_eq!(wnd.iter().filter(|&&px| px == RED).count(), 30);
}

#[test]
fn bottom_corners_sit_above_the_margin() {
    let vp = viewport(40, 30);

    let mut wnd = vec![BG; 1200];
    print_line(&vp, &BlockGlyphs, plain(), &mut wnd, Corner::BottomLeft, "a").unwrap();
    // top = 30 - 10 - 7 = 13, glyph rows 13..18
    assert_eq!(at(&wnd, 40, 10, 13), RED);
    assert_eq!(at(&wnd, 40, 12, 17), RED);
    assert_eq!(at(&wnd, 40, 10, 18), BG);

    let mut wnd = vec![BG; 1200];
    print_line(&vp, &BlockGlyphs, plain(), &mut wnd, Corner::BottomRight, "a").unwrap();
    assert_eq!(at(&wnd, 40, 26, 13), RED);
    assert_eq!(at(&wnd, 40, 29, 13), BG);
}

#[test]
fn glyphs_past_the_window_edge_are_clipped() {
    let vp = viewport(16, 12);
    let mut wnd = vec![BG; 16 * 12];
    print_line(
        &vp,
        &BlockGlyphs,
        plain(),
        &mut wnd,
        Corner::BottomLeft,
        "a very long line that cannot fit",
    )
    .unwrap();
    assert_eq!(wnd.len(), 16 * 12);
    assert_eq!(at(&wnd, 16, 15, 0), BG);

    let mut wnd = vec![BG; 16 * 12];
    print_line(
        &vp,
        &BlockGlyphs,
        plain(),
        &mut wnd,
        Corner::TopRight,
        "another line that overflows to the left",
    )
    .unwrap();
    assert_eq!(at(&wnd, 16, 0, 10), RED);
}

#[test]
fn shadow_is_drawn_offset_and_under_the_text() {
    let vp = viewport(40, 20);
    let mut wnd = vec![BG; 800];
    let style = TextStyle {
        color: RED,
        shadow: Some(GRAY),
    };
    print_line(&vp, &BlockGlyphs, style, &mut wnd, Corner::TopRight, "a").unwrap();
    // text at x=26..29, y=10..15; shadow shifted by one pixel
    assert_eq!(at(&wnd, 40, 26, 10), RED);
    assert_eq!(at(&wnd, 40, 28, 14), RED);
    assert_eq!(at(&wnd, 40, 29, 15), GRAY);
    assert_eq!(at(&wnd, 40, 29, 11), GRAY);
}

#[test]
fn control_characters_are_skipped() {
    let vp = viewport(40, 20);
    let mut a = vec![BG; 800];
    let mut b = vec![BG; 800];
    print_line(&vp, &BlockGlyphs, plain(), &mut a, Corner::TopRight, "a\nb\t").unwrap();
    print_line(&vp, &BlockGlyphs, plain(), &mut b, Corner::TopRight, "ab").unwrap();
    assert_eq!(a, b);
}

#[test]
fn info_rows_use_two_columns_and_honor_count() {
    let vp = viewport(60, 40);
    let mut wnd = vec![BG; 2400];
    let info = [("k", "v"), ("key", "value"), ("hidden", "row")];
    print_info(&vp, &BlockGlyphs, plain(), &mut wnd, 2, &info).unwrap();

    // keys column at x=10, widest key "key:" = 16 px, plus one space -> values at 30
    assert_eq!(at(&wnd, 60, 10, 10), RED);
    assert_eq!(at(&wnd, 60, 30, 10), RED);
    assert_eq!(at(&wnd, 60, 29, 10), BG);
    // second row starts one line height lower
    assert_eq!(at(&wnd, 60, 10, 17), RED);
    assert_eq!(at(&wnd, 60, 10, 16), BG);
    // third row excluded by count
    assert_eq!(at(&wnd, 60, 10, 24), BG);
}

#[test]
fn info_count_larger_than_table_is_fine() {
    let vp = viewport(60, 40);
    let mut wnd = vec![BG; 2400];
    let info = [(String::from("a"), String::from("b"))];
    print_info(&vp, &BlockGlyphs, plain(), &mut wnd, 10, &info).unwrap();
    assert_eq!(at(&wnd, 60, 10, 10), RED);
}

#[test]
fn rows_below_the_window_are_not_drawn() {
    let vp = viewport(60, 20);
    let mut wnd = vec![BG; 1200];
    let info: Vec<(String, String)> = (0..20).map(|i| (format!("k{i}"), "v".into())).collect();
    print_info(&vp, &BlockGlyphs, plain(), &mut wnd, info.len(), &info).unwrap();
    assert_eq!(wnd.len(), 1200);
}

#[test]
fn print_rejects_mismatched_window() {
    let vp = viewport(10, 10);
    let mut wnd = vec![BG; 99];
    assert!(print_line(&vp, &BlockGlyphs, plain(), &mut wnd, Corner::TopRight, "x").is_err());
    let info: [(&str, &str); 0] = [];
    assert!(print_info(&vp, &BlockGlyphs, plain(), &mut wnd, 0, &info).is_err());
}
