//! Earth-Centered-Earth-Fixed Cartesian coordinates.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector3;

use super::geodetic::Geodetic;
use super::wgs84;

/// Radial distance (meters) below which a point counts as on the polar
/// axis, where longitude is undefined and taken as zero.
const POLAR_EPS: f64 = 1e-9;

/// ECEF position in meters: x through the equator/prime-meridian
/// intersection, z through the north pole.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ecef {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Ecef {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn from_vector(v: Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }

    #[inline]
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Straight-line (chord) distance, meters.
    #[inline]
    pub fn distance(&self, other: &Ecef) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    /// Fast closed-form conversion to geodetic (Bowring's approximation,
    /// sub-millimeter near the surface). Use
    /// [`Ecef::to_geodetic_iterative`] when more accuracy is needed.
    pub fn to_geodetic(&self) -> Geodetic {
        let a = wgs84::SEMI_MAJOR_AXIS;
        let b = wgs84::SEMI_MINOR_AXIS;
        let e2 = wgs84::FIRST_ECCENTRICITY_SQ;
        let ep2 = wgs84::SECOND_ECCENTRICITY_SQ;

        let p = self.x.hypot(self.y);
        if p < POLAR_EPS {
            return on_polar_axis(self.z);
        }
        let theta = (self.z * a).atan2(p * b);
        let (sin_t, cos_t) = theta.sin_cos();
        let latitude = (self.z + ep2 * b * sin_t.powi(3)).atan2(p - e2 * a * cos_t.powi(3));
        let longitude = self.y.atan2(self.x);
        let altitude = altitude_at(p, self.z, latitude);
        Geodetic {
            latitude,
            longitude,
            altitude,
        }
    }

    /// Iterative conversion to geodetic. Runs exactly `iterations`
    /// refinement steps (no convergence check); more iterations give
    /// higher accuracy. Around 5 steps reaches nanoradian agreement with
    /// the forward conversion near the surface.
    pub fn to_geodetic_iterative(&self, iterations: u32) -> Geodetic {
        let e2 = wgs84::FIRST_ECCENTRICITY_SQ;
        let p = self.x.hypot(self.y);
        if p < POLAR_EPS {
            return on_polar_axis(self.z);
        }
        let longitude = self.y.atan2(self.x);
        let mut latitude = self.z.atan2(p * (1.0 - e2));
        for _ in 0..iterations {
            let n = wgs84::prime_vertical_radius(latitude);
            let h = altitude_at(p, self.z, latitude);
            latitude = self.z.atan2(p * (1.0 - e2 * n / (n + h)));
        }
        let altitude = altitude_at(p, self.z, latitude);
        Geodetic {
            latitude,
            longitude,
            altitude,
        }
    }
}

/// Ellipsoid height at radial distance `p` and height `z` for a latitude
/// estimate. Switches formula near the poles where `cos(lat)` vanishes.
fn altitude_at(p: f64, z: f64, latitude: f64) -> f64 {
    let n = wgs84::prime_vertical_radius(latitude);
    if latitude.abs() > std::f64::consts::FRAC_PI_4 {
        z / latitude.sin() - n * (1.0 - wgs84::FIRST_ECCENTRICITY_SQ)
    } else {
        p / latitude.cos() - n
    }
}

fn on_polar_axis(z: f64) -> Geodetic {
    Geodetic {
        latitude: if z >= 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 },
        longitude: 0.0,
        altitude: z.abs() - wgs84::SEMI_MINOR_AXIS,
    }
}
