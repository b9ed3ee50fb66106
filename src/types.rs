//! Value types stored and indexed by the learned hash table.
//!
//! A table instance is monomorphic: it stores either [`IndexedPoint`]s or
//! [`Region`]s, selected by a type parameter at construction time. The
//! [`SpatialValue`] trait is the seam between the table and its values: it
//! yields the coordinate the model hashes on and the exact-match identity
//! used by point search and removal.

use geo::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The coordinate axis a table is trained and queried on.
///
/// Selected once at construction; every bucket computation reads this axis
/// from the value being stored or searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Hash on latitude (the y coordinate).
    Latitude,
    /// Hash on longitude (the x coordinate).
    Longitude,
}

impl Axis {
    /// Extract this axis' component from a 2D point.
    pub fn component(&self, point: &Point<f64>) -> f64 {
        match self {
            Axis::Latitude => point.y(),
            Axis::Longitude => point.x(),
        }
    }

    /// Pick this axis' component from a `(lat, lon)` pair.
    pub fn pick(&self, lat: f64, lon: f64) -> f64 {
        match self {
            Axis::Latitude => lat,
            Axis::Longitude => lon,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// A geographic point with an associated identifier.
///
/// Immutable once stored. Equality for search purposes is exact numeric
/// equality on both coordinates; there is no tolerance band, so lookups must
/// use the originally stored values rather than coordinates reconstructed
/// through arithmetic.
///
/// # Examples
///
/// ```
/// use geodex::IndexedPoint;
///
/// let p = IndexedPoint::new(7, 40.7128, -74.0060);
/// assert_eq!(p.lat(), 40.7128);
/// assert_eq!(p.lon(), -74.0060);
/// assert!(p.matches(40.7128, -74.0060));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedPoint {
    /// Caller-assigned identifier.
    pub id: u64,
    /// The 2D geographic point (x = longitude, y = latitude).
    pub point: Point<f64>,
}

impl IndexedPoint {
    /// Create a point from latitude/longitude coordinates.
    pub fn new(id: u64, lat: f64, lon: f64) -> Self {
        Self {
            id,
            point: Point::new(lon, lat),
        }
    }

    /// Create a point from an existing `geo::Point` (x = longitude, y = latitude).
    pub fn from_point(id: u64, point: Point<f64>) -> Self {
        Self { id, point }
    }

    /// Latitude (the y coordinate).
    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    /// Longitude (the x coordinate).
    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    /// Exact coordinate match, no tolerance.
    pub fn matches(&self, lat: f64, lon: f64) -> bool {
        self.lat() == lat && self.lon() == lon
    }
}

/// An axis-aligned rectangle spanned by two corner points.
///
/// The corners are stored exactly as given and are not required to be
/// ordered; min/max per axis is normalized when a containment test runs,
/// not at storage time. Containment is planar rectangle containment with
/// inclusive bounds.
///
/// # Examples
///
/// ```
/// use geodex::{IndexedPoint, Region};
///
/// // Corners in "wrong" order still describe the same rectangle.
/// let region = Region::new(
///     IndexedPoint::new(1, 10.0, 20.0),
///     IndexedPoint::new(1, 5.0, 5.0),
/// );
/// assert!(region.contains(7.5, 12.0));
/// assert!(region.contains(5.0, 5.0)); // bounds are inclusive
/// assert!(!region.contains(11.0, 12.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// First corner; its coordinates index the region in the table.
    pub a: IndexedPoint,
    /// Second corner.
    pub b: IndexedPoint,
}

impl Region {
    /// Create a region from two corners, in either order.
    pub fn new(a: IndexedPoint, b: IndexedPoint) -> Self {
        Self { a, b }
    }

    /// Latitude bounds as `(min, max)`.
    pub fn lat_bounds(&self) -> (f64, f64) {
        minmax(self.a.lat(), self.b.lat())
    }

    /// Longitude bounds as `(min, max)`.
    pub fn lon_bounds(&self) -> (f64, f64) {
        minmax(self.a.lon(), self.b.lon())
    }

    /// Inclusive planar containment test.
    ///
    /// A coordinate lying between two bounds makes the product of its
    /// differences against them non-positive, so the test is a sign check
    /// per axis.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        let (min_lat, max_lat) = self.lat_bounds();
        let (min_lon, max_lon) = self.lon_bounds();
        (lat - max_lat) * (lat - min_lat) <= 0.0 && (lon - max_lon) * (lon - min_lon) <= 0.0
    }
}

fn minmax(a: f64, b: f64) -> (f64, f64) {
    if a > b { (b, a) } else { (a, b) }
}

/// A value the learned hash table can store.
///
/// Implementations provide the coordinate the indexing model hashes on and
/// the exact-match identity used by point search and removal.
pub trait SpatialValue {
    /// The coordinate on the given axis that determines this value's bucket.
    fn axis_value(&self, axis: Axis) -> f64;

    /// Exact-equality match against a query coordinate pair.
    fn matches(&self, lat: f64, lon: f64) -> bool;
}

impl SpatialValue for IndexedPoint {
    fn axis_value(&self, axis: Axis) -> f64 {
        axis.component(&self.point)
    }

    fn matches(&self, lat: f64, lon: f64) -> bool {
        IndexedPoint::matches(self, lat, lon)
    }
}

impl SpatialValue for Region {
    /// Regions are indexed by their first corner.
    fn axis_value(&self, axis: Axis) -> f64 {
        axis.component(&self.a.point)
    }

    /// A region's identity for search/removal is its first corner.
    fn matches(&self, lat: f64, lon: f64) -> bool {
        self.a.matches(lat, lon)
    }
}
