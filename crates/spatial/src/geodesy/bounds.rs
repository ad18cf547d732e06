//! Latitude/longitude bounding regions, antimeridian-aware.

use std::f64::consts::{PI, TAU};

use super::geodetic::Geodetic;

/// Rectangular region on the ellipsoid, radians.
///
/// Invariants:
/// - `south <= north` (the constructor swaps them into order).
/// - `east < west` encodes a region crossing the antimeridian; every
///   operation respects that wrap convention.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeodeticBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Wrap into `(-pi, pi]`.
fn normalize_longitude(mut lon: f64) -> f64 {
    while lon > PI {
        lon -= TAU;
    }
    while lon <= -PI {
        lon += TAU;
    }
    lon
}

/// Eastward angular distance from `from` to `to`, in `[0, 2pi)`.
#[inline]
fn eastward(from: f64, to: f64) -> f64 {
    (to - from).rem_euclid(TAU)
}

impl GeodeticBounds {
    pub fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        let (south, north) = if south <= north {
            (south, north)
        } else {
            (north, south)
        };
        Self {
            south,
            west,
            north,
            east,
        }
    }

    /// Degenerate bounds covering a single point.
    pub fn from_point(point: &Geodetic) -> Self {
        Self {
            south: point.latitude,
            west: point.longitude,
            north: point.latitude,
            east: point.longitude,
        }
    }

    /// Smallest bounds covering two points, growing eastward or westward
    /// from `a` to whichever edge is angularly closer to `b`.
    pub fn from_point_pair(a: &Geodetic, b: &Geodetic) -> Self {
        Self::from_point(a).extend(b)
    }

    /// True when the region crosses the antimeridian.
    #[inline]
    pub fn is_wrapped(&self) -> bool {
        self.east < self.west
    }

    #[inline]
    pub fn latitude_extent(&self) -> f64 {
        self.north - self.south
    }

    /// Angular width; wraps add a full turn to the east edge.
    #[inline]
    pub fn longitude_extent(&self) -> f64 {
        if self.is_wrapped() {
            self.east - self.west + TAU
        } else {
            self.east - self.west
        }
    }

    fn contains_longitude(&self, longitude: f64) -> bool {
        eastward(self.west, longitude) <= self.longitude_extent()
    }

    /// Wrap-aware containment; edges are inclusive.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.south && latitude <= self.north && self.contains_longitude(longitude)
    }

    #[inline]
    pub fn contains_point(&self, point: &Geodetic) -> bool {
        self.contains(point.latitude, point.longitude)
    }

    /// True center `(latitude, longitude)`. When wrapped, the east edge is
    /// advanced a full turn before averaging, then the result is
    /// re-normalized into `(-pi, pi]`.
    pub fn center(&self) -> (f64, f64) {
        let latitude = (self.south + self.north) / 2.0;
        let east = if self.is_wrapped() {
            self.east + TAU
        } else {
            self.east
        };
        let longitude = normalize_longitude((self.west + east) / 2.0);
        (latitude, longitude)
    }

    /// Smallest bounds containing `self` and the point, growing towards
    /// whichever edge is angularly closer.
    pub fn extend(&self, point: &Geodetic) -> GeodeticBounds {
        let mut out = *self;
        out.south = out.south.min(point.latitude);
        out.north = out.north.max(point.latitude);
        if !self.contains_longitude(point.longitude) {
            let grow_east = eastward(self.east, point.longitude);
            let grow_west = eastward(point.longitude, self.west);
            if grow_east <= grow_west {
                out.east = point.longitude;
            } else {
                out.west = point.longitude;
            }
        }
        out
    }

    /// Smallest bounds covering both regions (wrap-aware in longitude).
    pub fn union(&self, other: &GeodeticBounds) -> GeodeticBounds {
        let south = self.south.min(other.south);
        let north = self.north.max(other.north);

        // Candidate spans anchored at either west edge; keep the narrower.
        let ext_a = self
            .longitude_extent()
            .max(eastward(self.west, other.west) + other.longitude_extent());
        let ext_b = other
            .longitude_extent()
            .max(eastward(other.west, self.west) + self.longitude_extent());
        let (west, extent) = if ext_a <= ext_b {
            (self.west, ext_a)
        } else {
            (other.west, ext_b)
        };
        if extent >= TAU {
            // Degenerates to the full longitude band.
            return GeodeticBounds::new(south, -PI, north, PI);
        }
        GeodeticBounds::new(south, west, north, normalize_longitude(west + extent))
    }

    /// Quad split at the true (wrap-aware) center:
    /// `[south-west, south-east, north-west, north-east]`. Halves that
    /// still cross the antimeridian keep the `east < west` encoding.
    pub fn subdivide(&self) -> [GeodeticBounds; 4] {
        let (mid_lat, mid_lon) = self.center();
        [
            GeodeticBounds::new(self.south, self.west, mid_lat, mid_lon),
            GeodeticBounds::new(self.south, mid_lon, mid_lat, self.east),
            GeodeticBounds::new(mid_lat, self.west, self.north, mid_lon),
            GeodeticBounds::new(mid_lat, mid_lon, self.north, self.east),
        ]
    }
}
