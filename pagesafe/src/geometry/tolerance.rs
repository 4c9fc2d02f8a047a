// Shared tolerances for geometry comparisons

pub const EPS_COORD: f64 = 1e-9;      // corner coincidence on the page (units)
pub const EPS_PERIODIC: f64 = 1e-6;   // slack for sin/cos of large angles
pub const FULL_TURN_DEG: f64 = 360.0;

#[inline] pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

/// Relative comparison for values that grow with the inputs (large offsets or angles).
#[inline]
pub fn approx_eq_rel(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps * (1.0 + a.abs().max(b.abs()))
}

/// Maps any finite angle into [0, 360). Non-finite input is returned unchanged.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    if !deg.is_finite() { return deg; }
    let r = deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if r >= FULL_TURN_DEG { 0.0 } else { r }
}
