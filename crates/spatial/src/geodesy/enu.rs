//! East-North-Up local tangent-plane coordinates.

use nalgebra::Vector3;

use super::ecef::Ecef;

/// ENU offset in meters from an owned reference point.
///
/// The tangent plane is anchored at `reference`; two `Enu` values are only
/// comparable when their references match.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enu {
    pub east: f64,
    pub north: f64,
    pub up: f64,
    pub reference: Ecef,
}

impl Enu {
    #[inline]
    pub fn new(east: f64, north: f64, up: f64, reference: Ecef) -> Self {
        Self {
            east,
            north,
            up,
            reference,
        }
    }

    /// Express `point` in the tangent frame anchored at `reference`.
    pub fn from_ecef(point: &Ecef, reference: &Ecef) -> Enu {
        let (east_axis, north_axis, up_axis) = tangent_axes(reference);
        let d = point.to_vector() - reference.to_vector();
        Enu {
            east: east_axis.dot(&d),
            north: north_axis.dot(&d),
            up: up_axis.dot(&d),
            reference: *reference,
        }
    }

    /// Back to ECEF.
    pub fn to_ecef(&self) -> Ecef {
        let (east_axis, north_axis, up_axis) = tangent_axes(&self.reference);
        let v = self.reference.to_vector()
            + east_axis * self.east
            + north_axis * self.north
            + up_axis * self.up;
        Ecef::from_vector(v)
    }

    /// 3D slant range from the reference, meters.
    #[inline]
    pub fn range(&self) -> f64 {
        (self.east * self.east + self.north * self.north + self.up * self.up).sqrt()
    }
}

/// Unit east/north/up axes of the tangent plane at `reference`, from its
/// geodetic latitude/longitude.
fn tangent_axes(reference: &Ecef) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let geo = reference.to_geodetic();
    let (sin_lat, cos_lat) = geo.latitude.sin_cos();
    let (sin_lon, cos_lon) = geo.longitude.sin_cos();
    let east = Vector3::new(-sin_lon, cos_lon, 0.0);
    let north = Vector3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);
    let up = Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);
    (east, north, up)
}
