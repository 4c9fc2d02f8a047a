use std::f64::consts::PI;

use crate::model::Corner;

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 { deg * PI / 180.0 }

/// Vertical position of one corner after rotating the box about its anchor.
///
/// The anchor is `y + height`, not the box center: offsets of half the width
/// and half the height are rotated and added to that baseline.
#[inline]
pub fn rotated_corner_y(corner: Corner, y: f64, width: f64, height: f64, sin: f64, cos: f64) -> f64 {
    let (sx, sy) = corner.offset_signs();
    let dx = sx * width / 2.0;
    let dy = sy * height / 2.0;
    y + height + dx * sin + dy * cos
}

/// Corner Y values in upper-left, upper-right, bottom-right, bottom-left order.
pub fn rotated_corner_ys(y: f64, width: f64, height: f64, rotation_deg: f64) -> [f64; 4] {
    let (sin, cos) = deg_to_rad(rotation_deg).sin_cos();
    Corner::ALL.map(|c| rotated_corner_y(c, y, width, height, sin, cos))
}

/// Lowest and highest corner positions, NaN if any corner is NaN.
pub fn vertical_extent(ys: &[f64; 4]) -> (f64, f64) {
    if ys.iter().any(|v| v.is_nan()) { return (f64::NAN, f64::NAN); }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in ys { lo = lo.min(v); hi = hi.max(v); }
    (lo, hi)
}
