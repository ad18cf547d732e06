//! WGS84 reference ellipsoid constants.

/// Semi-major (equatorial) axis, meters.
pub const SEMI_MAJOR_AXIS: f64 = 6378137.0;

/// Semi-minor (polar) axis, meters.
pub const SEMI_MINOR_AXIS: f64 = 6356752.315;

/// Flattening `(a - b) / a`.
pub const FLATTENING: f64 = (SEMI_MAJOR_AXIS - SEMI_MINOR_AXIS) / SEMI_MAJOR_AXIS;

/// First eccentricity squared `1 - b²/a²`.
pub const FIRST_ECCENTRICITY_SQ: f64 =
    1.0 - (SEMI_MINOR_AXIS * SEMI_MINOR_AXIS) / (SEMI_MAJOR_AXIS * SEMI_MAJOR_AXIS);

/// Second eccentricity squared `a²/b² - 1`.
pub const SECOND_ECCENTRICITY_SQ: f64 =
    (SEMI_MAJOR_AXIS * SEMI_MAJOR_AXIS) / (SEMI_MINOR_AXIS * SEMI_MINOR_AXIS) - 1.0;

/// Mean Earth radius used by the spherical (haversine) fast path, meters.
pub const EARTH_RADIUS: f64 = 6371000.0;

/// Prime-vertical radius of curvature `N(lat) = a / sqrt(1 - e² sin² lat)`.
#[inline]
pub fn prime_vertical_radius(latitude: f64) -> f64 {
    let s = latitude.sin();
    SEMI_MAJOR_AXIS / (1.0 - FIRST_ECCENTRICITY_SQ * s * s).sqrt()
}
