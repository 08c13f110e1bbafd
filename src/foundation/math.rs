pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Convert a floating-point pixel coordinate to `i64`, saturating instead of wrapping.
pub(crate) fn round_px(v: f64) -> i64 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(i64::MIN as f64, i64::MAX as f64) as i64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
