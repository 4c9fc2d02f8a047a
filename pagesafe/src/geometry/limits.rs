// Ingestion limits applied to story documents coming from JSON

// Document size caps
pub const MAX_PAGES: usize = 500;
pub const MAX_ELEMENTS_PER_PAGE: usize = 2_000;
pub const MAX_ID_LEN: usize = 256;
pub const MAX_URL_LEN: usize = 8 * 1024;

// Numeric bounds
pub const COORD_MIN: f64 = -10_000_000.0;
pub const COORD_MAX: f64 =  10_000_000.0;
pub const SIZE_MAX: f64 = 10_000_000.0;

#[inline]
pub fn in_coord_bounds(v: f64) -> bool { v.is_finite() && v >= COORD_MIN && v <= COORD_MAX }

#[inline]
pub fn in_size_bounds(v: f64) -> bool { v.is_finite() && v >= 0.0 && v <= SIZE_MAX }

#[inline]
pub fn valid_angle(v: f64) -> bool { v.is_finite() }

#[inline]
pub fn valid_geometry_dim(v: f64) -> bool { v.is_finite() && v > 0.0 && v <= SIZE_MAX }
