//! Geodetic coordinates on the WGS84 ellipsoid.
//!
//! Purpose
//! - Stateless conversion graph `Geodetic ⇄ Ecef ⇄ Enu` plus great-circle
//!   (haversine) and geodesic (Vincenty) distance/azimuth solvers and
//!   antimeridian-aware bounding regions.
//!
//! Precision paths
//! - The fast paths (`haversine`, `Ecef::to_geodetic`) trade accuracy for
//!   a closed form; the slow paths (`vincenty`,
//!   `Ecef::to_geodetic_iterative`) refine on the ellipsoid. They are
//!   separate named operations so call sites document which tradeoff they
//!   accept.

mod bounds;
mod distance;
mod ecef;
mod enu;
mod geodetic;
pub mod wgs84;

pub use bounds::GeodeticBounds;
pub use distance::{haversine, vincenty, Geodesic};
pub use ecef::Ecef;
pub use enu::Enu;
pub use geodetic::Geodetic;
