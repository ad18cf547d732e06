//! Great-circle and geodesic distance solvers.
//!
//! Two precision paths, deliberately separate operations:
//! - [`haversine`]: closed form on a mean-radius sphere, ~0.5% error.
//! - [`vincenty`]: iterative inverse solution on the WGS84 spheroid;
//!   converges to sub-millimeter but must be given an iteration cap, and
//!   reports cap exhaustion as [`GeomError::NoConvergence`] rather than
//!   returning a plausible-looking wrong answer.

use crate::error::{GeomError, Result};

use super::geodetic::Geodetic;
use super::wgs84;

/// Inverse-geodesic solution between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geodesic {
    /// Surface distance, meters.
    pub distance: f64,
    /// Forward azimuth at the start point, radians clockwise from north.
    pub initial_azimuth: f64,
    /// Forward azimuth at the end point, radians clockwise from north.
    pub final_azimuth: f64,
}

/// Great-circle distance on the mean-radius sphere (haversine formula).
/// Altitudes are ignored.
pub fn haversine(a: &Geodetic, b: &Geodetic) -> f64 {
    let dlat = b.latitude - a.latitude;
    let dlon = b.longitude - a.longitude;
    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();
    let h = sin_dlat * sin_dlat + a.latitude.cos() * b.latitude.cos() * sin_dlon * sin_dlon;
    2.0 * wgs84::EARTH_RADIUS * h.sqrt().min(1.0).asin()
}

/// Vincenty's inverse formula on the WGS84 spheroid.
///
/// Iterates until successive longitude differences on the auxiliary
/// sphere differ by less than `precision` (radians), or fails with
/// [`GeomError::NoConvergence`] after `max_iterations`. Coincident points
/// (`sin σ == 0`) short-circuit to a zero-distance solution. Antipodal
/// point pairs are the classical non-convergent inputs.
pub fn vincenty(
    a: &Geodetic,
    b: &Geodetic,
    precision: f64,
    max_iterations: u32,
) -> Result<Geodesic> {
    let f = wgs84::FLATTENING;
    let major = wgs84::SEMI_MAJOR_AXIS;
    let minor = wgs84::SEMI_MINOR_AXIS;

    // Reduced latitudes on the auxiliary sphere.
    let u1 = ((1.0 - f) * a.latitude.tan()).atan();
    let u2 = ((1.0 - f) * b.latitude.tan()).atan();
    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();
    let l = b.longitude - a.longitude;

    let mut lambda = l;
    let mut iter = 0u32;
    let (sin_sigma, cos_sigma, sigma, sin_alpha_sq, cos2_sigma_m, sin_lambda, cos_lambda) = loop {
        if iter >= max_iterations {
            return Err(GeomError::NoConvergence {
                iterations: max_iterations,
            });
        }
        iter += 1;

        let (sin_lambda, cos_lambda) = lambda.sin_cos();
        let t1 = cos_u2 * sin_lambda;
        let t2 = cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda;
        let sin_sigma = (t1 * t1 + t2 * t2).sqrt();
        if sin_sigma == 0.0 {
            // Coincident points: a degenerate zero-distance geodesic.
            return Ok(Geodesic {
                distance: 0.0,
                initial_azimuth: 0.0,
                final_azimuth: 0.0,
            });
        }
        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_alpha_sq = 1.0 - sin_alpha * sin_alpha;
        // Equatorial geodesics have cos²α = 0; the 2σm term drops out.
        let cos2_sigma_m = if cos_alpha_sq == 0.0 {
            0.0
        } else {
            cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_alpha_sq
        };
        let c = f / 16.0 * cos_alpha_sq * (4.0 + f * (4.0 - 3.0 * cos_alpha_sq));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos2_sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos2_sigma_m * cos2_sigma_m)));
        if (lambda - lambda_prev).abs() < precision {
            break (
                sin_sigma,
                cos_sigma,
                sigma,
                sin_alpha * sin_alpha,
                cos2_sigma_m,
                sin_lambda,
                cos_lambda,
            );
        }
    };

    let cos_alpha_sq = 1.0 - sin_alpha_sq;
    let u_sq = cos_alpha_sq * (major * major - minor * minor) / (minor * minor);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos2_sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos2_sigma_m * cos2_sigma_m)
                    - big_b / 6.0
                        * cos2_sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos2_sigma_m * cos2_sigma_m)));
    let distance = minor * big_a * (sigma - delta_sigma);

    let initial_azimuth =
        (cos_u2 * sin_lambda).atan2(cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
    let final_azimuth =
        (cos_u1 * sin_lambda).atan2(-sin_u1 * cos_u2 + cos_u1 * sin_u2 * cos_lambda);

    Ok(Geodesic {
        distance,
        initial_azimuth,
        final_azimuth,
    })
}
