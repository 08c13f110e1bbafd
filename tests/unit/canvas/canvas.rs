use super::*;
use crate::{
    config::{color::Color, model::FontConfig},
    foundation::error::ViewError,
    text::glyph::Glyph,
};

struct DotGlyphs;

impl GlyphSource for DotGlyphs {
    fn ascent(&self, scale: f32) -> i32 {
        scale as i32
    }

    fn line_height(&self, scale: f32) -> i32 {
        2 * scale as i32
    }

    fn glyph(&self, _ch: char, scale: f32) -> Glyph {
        let s = scale as u32;
        Glyph {
            width: s,
            height: s,
            left: 0,
            top: -(s as i32),
            advance: 2 * s as i32,
            coverage: vec![255; (s * s) as usize],
        }
    }
}

fn solid_config() -> Config {
    Config {
        background: Background::Solid(Color::rgb(0, 0, 0)),
        text: crate::config::model::TextConfig {
            color: Color::rgb(255, 255, 255),
            shadow: None,
            font: FontConfig::default(),
        },
        ..Config::default()
    }
}

#[test]
fn new_without_font_disables_text_but_still_checks_buffers() {
    let mut canvas = Canvas::new(&Config::default()).unwrap();
    canvas.resize(8, 8, 1).unwrap();
    let mut wnd = vec![0; 64];
    canvas
        .print_line(&mut wnd, Corner::BottomRight, "100%")
        .unwrap();
    canvas.print_info(&mut wnd, 1, &[("a", "b")]).unwrap();
    assert!(wnd.iter().all(|&px| px == 0));

    let mut short = vec![0; 63];
    assert!(canvas.print_line(&mut short, Corner::TopRight, "x").is_err());
}

#[test]
fn new_rejects_invalid_config_and_missing_font() {
    let bad = Config {
        move_step_percent: 0,
        ..Config::default()
    };
    assert!(matches!(
        Canvas::new(&bad).unwrap_err(),
        ViewError::Validation(_)
    ));

    let mut missing_font = Config::default();
    missing_font.text.font.path = Some("missing/font.ttf".into());
    assert!(matches!(
        Canvas::new(&missing_font).unwrap_err(),
        ViewError::Other(_)
    ));
}

#[test]
fn initial_scale_comes_from_config() {
    let cfg = Config {
        initial_scale: ScaleOp::FillWindow,
        ..Config::default()
    };
    assert_eq!(
        Canvas::new(&cfg).unwrap().initial_scale(),
        ScaleOp::FillWindow
    );
}

#[test]
fn rendering_does_not_touch_viewport_state() {
    let mut canvas = Canvas::with_glyph_source(&solid_config(), Box::new(DotGlyphs)).unwrap();
    canvas.resize(32, 24, 1).unwrap();
    canvas.reset_image(64, 64, ScaleOp::RealSize).unwrap();
    let before = canvas.viewport().clone();

    let img = vec![0xff11_2233; 64 * 64];
    let mut wnd = vec![0; 32 * 24];
    canvas.clear(&mut wnd).unwrap();
    canvas.draw_image(true, &img, &mut wnd).unwrap();
    canvas.print_line(&mut wnd, Corner::TopRight, "x").unwrap();
    canvas.print_info(&mut wnd, 2, &[("k", "v")]).unwrap();

    assert_eq!(canvas.viewport(), &before);
}

#[test]
fn window_scale_enlarges_text_and_margins() {
    let mut canvas = Canvas::with_glyph_source(&solid_config(), Box::new(DotGlyphs)).unwrap();
    canvas.resize(60, 60, 2).unwrap();
    let mut wnd = vec![0xff00_0000; 3600];
    canvas.print_line(&mut wnd, Corner::BottomLeft, "a").unwrap();

    // margin 20, line height 4 -> top 36, baseline 38, 2x2 dot at (20..22, 36..38)
    let lit: Vec<usize> = wnd
        .iter()
        .enumerate()
        .filter(|(_, px)| **px == 0xffff_ffff)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(lit, vec![36 * 60 + 20, 36 * 60 + 21, 37 * 60 + 20, 37 * 60 + 21]);
}

#[test]
fn configured_font_draws_info_block() {
    let mut cfg = solid_config();
    cfg.text.font.path = Some(
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSerif.ttf").into(),
    );
    let mut canvas = Canvas::new(&cfg).unwrap();
    canvas.resize(160, 60, 1).unwrap();
    canvas.reset_image(1, 1, ScaleOp::RealSize).unwrap();

    let mut wnd = vec![0xff00_0000; 160 * 60];
    canvas
        .print_info(&mut wnd, 2, &[("File", "a.png"), ("Size", "1x1")])
        .unwrap();

    let inked_rows: Vec<usize> = (0..60)
        .filter(|&y| wnd[y * 160..(y + 1) * 160].iter().any(|&px| px != 0xff00_0000))
        .collect();
    // two 14px rows starting at the 10px margin
    assert!(inked_rows.first().is_some_and(|&y| y >= 10));
    assert!(inked_rows.last().is_some_and(|&y| y < 10 + 2 * 14 + 4));
    assert!(inked_rows.iter().any(|&y| y >= 10 + 14));
    assert!((0..10).all(|x| (0..60).all(|y| wnd[y * 160 + x] == 0xff00_0000)));
}
