//! Geodetic coordinates (latitude, longitude, altitude).

use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{GeomError, Result};

use super::ecef::Ecef;
use super::wgs84;

/// Geodetic position on the WGS84 ellipsoid.
///
/// Invariants:
/// - `latitude ∈ [-pi/2, pi/2]`, `longitude ∈ [-pi, pi]`, both radians;
///   out-of-range (or NaN) values are rejected at construction.
/// - `altitude` is meters above the ellipsoid; NaN encodes "unknown" and
///   is treated as zero by the ECEF conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Geodetic {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        if !(-FRAC_PI_2..=FRAC_PI_2).contains(&latitude) {
            return Err(GeomError::Latitude(latitude));
        }
        if !(-PI..=PI).contains(&longitude) {
            return Err(GeomError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }

    /// Degree-based factory.
    pub fn from_degrees(latitude: f64, longitude: f64, altitude: f64) -> Result<Self> {
        Self::new(latitude.to_radians(), longitude.to_radians(), altitude)
    }

    #[inline]
    pub fn latitude_degrees(&self) -> f64 {
        self.latitude.to_degrees()
    }

    #[inline]
    pub fn longitude_degrees(&self) -> f64 {
        self.longitude.to_degrees()
    }

    /// True when the altitude is the "unknown" marker.
    #[inline]
    pub fn altitude_unknown(&self) -> bool {
        self.altitude.is_nan()
    }

    /// Closed-form conversion to ECEF, via the prime-vertical radius of
    /// curvature. An unknown (NaN) altitude converts as zero.
    pub fn to_ecef(&self) -> Ecef {
        let alt = if self.altitude.is_nan() {
            0.0
        } else {
            self.altitude
        };
        let (sin_lat, cos_lat) = self.latitude.sin_cos();
        let (sin_lon, cos_lon) = self.longitude.sin_cos();
        let n = wgs84::prime_vertical_radius(self.latitude);
        Ecef {
            x: (n + alt) * cos_lat * cos_lon,
            y: (n + alt) * cos_lat * sin_lon,
            z: (n * (1.0 - wgs84::FIRST_ECCENTRICITY_SQ) + alt) * sin_lat,
        }
    }
}
