use super::*;

#[test]
fn over_transparent_src_is_noop() {
    let dst = argb(0xff, 10, 20, 30);
    assert_eq!(over(dst, argb(0, 255, 255, 255)), dst);
}

#[test]
fn over_opaque_src_replaces_dst() {
    let src = argb(0xff, 255, 0, 0);
    assert_eq!(over(argb(0xff, 0, 0, 255), src), src);
}

#[test]
fn over_half_alpha_mixes_evenly() {
    let out = over(argb(0xff, 0, 0, 0), argb(0x80, 255, 100, 0));
    assert_eq!(alpha(out), 0xff);
    assert_eq!(red(out), 128);
    assert_eq!(green(out), 50);
    assert_eq!(blue(out), 0);
}

#[test]
fn over_onto_transparent_dst_keeps_src_alpha() {
    let out = over(0, argb(0x40, 200, 200, 200));
    assert_eq!(alpha(out), 0x40);
}

#[test]
fn coverage_scales_color_alpha() {
    let dst = argb(0xff, 0, 0, 0);
    let white = argb(0xff, 255, 255, 255);
    assert_eq!(over_coverage(dst, white, 0), dst);
    assert_eq!(over_coverage(dst, white, 255), white);
    let half = over_coverage(dst, white, 128);
    assert_eq!(red(half), 128);
    assert_eq!(alpha(half), 0xff);
}

#[test]
fn opaque_ignores_alpha() {
    assert_eq!(opaque(0x0012_3456), 0xff12_3456);
}
