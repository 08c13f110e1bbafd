use crate::foundation::{
    core::{ALPHA_MASK, Argb, alpha, argb, blue, green, red},
    math::{add_sat_u8, mul_div255_u8},
};

/// Straight-alpha source-over of `src` onto `dst`.
pub(crate) fn over(dst: Argb, src: Argb) -> Argb {
    let sa = alpha(src);
    if sa == 0 {
        return dst;
    }
    if sa == 0xff {
        return src;
    }

    let sa16 = u16::from(sa);
    let inv = 255u16 - sa16;
    let mix = |s: u8, d: u8| {
        add_sat_u8(
            mul_div255_u8(u16::from(s), sa16),
            mul_div255_u8(u16::from(d), inv),
        )
    };

    argb(
        add_sat_u8(sa, mul_div255_u8(u16::from(alpha(dst)), inv)),
        mix(red(src), red(dst)),
        mix(green(src), green(dst)),
        mix(blue(src), blue(dst)),
    )
}

/// Blend `color` onto `dst` with its alpha attenuated by a glyph coverage value.
pub(crate) fn over_coverage(dst: Argb, color: Argb, coverage: u8) -> Argb {
    let a = mul_div255_u8(u16::from(alpha(color)), u16::from(coverage));
    over(dst, (u32::from(a) << 24) | (color & !ALPHA_MASK))
}

/// Source pixel written as-is, alpha forced to opaque.
pub(crate) fn opaque(src: Argb) -> Argb {
    src | ALPHA_MASK
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
