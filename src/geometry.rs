//! Planar helpers for adjacency and distance between placed elements.
//!
//! Elements are treated as axis-aligned rectangles; rotation is ignored.

use crate::model::MapElement;

/// Maximum gap, in planar units, between two edges that still counts as touching.
pub const ADJACENCY_TOLERANCE: f64 = 5.0;

/// Editor units per real-world meter.
pub const UNITS_PER_METER: f64 = 10.0;

/// Assumed pedestrian speed in meters per second.
pub const WALKING_SPEED_MPS: f64 = 1.4;

const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when the rectangles share (within tolerance) a vertical or a
    /// horizontal edge.
    #[must_use]
    pub fn is_adjacent_to(&self, other: &Rect) -> bool {
        self.touches_horizontally(other) || self.touches_vertically(other)
    }

    // Side by side: a right edge meets the other's left edge.
    fn touches_horizontally(&self, other: &Rect) -> bool {
        let rows_overlap = (self.y - other.y).abs() < self.height + other.height;
        let edges_meet = (self.x + self.width - other.x).abs() < ADJACENCY_TOLERANCE
            || (other.x + other.width - self.x).abs() < ADJACENCY_TOLERANCE;
        rows_overlap && edges_meet
    }

    // Stacked: a bottom edge meets the other's top edge.
    fn touches_vertically(&self, other: &Rect) -> bool {
        let columns_overlap = (self.x - other.x).abs() < self.width + other.width;
        let edges_meet = (self.y + self.height - other.y).abs() < ADJACENCY_TOLERANCE
            || (other.y + other.height - self.y).abs() < ADJACENCY_TOLERANCE;
        columns_overlap && edges_meet
    }
}

impl From<&MapElement> for Rect {
    fn from(element: &MapElement) -> Self {
        Rect::new(element.x, element.y, element.width, element.height)
    }
}

/// Straight-line distance between the rectangles' centers, in meters.
#[must_use]
pub fn center_distance_meters(a: &Rect, b: &Rect) -> f64 {
    let (ax, ay) = a.center();
    let (bx, by) = b.center();
    let dx = (bx - ax) / UNITS_PER_METER;
    let dy = (by - ay) / UNITS_PER_METER;
    dx.hypot(dy)
}

/// Seconds needed to walk `meters`, rounded to the nearest second.
#[must_use]
pub fn walking_time_seconds(meters: f64) -> u64 {
    (meters / WALKING_SPEED_MPS).round() as u64
}

/// Great-circle distance between two `(latitude, longitude)` points in kilometers.
#[must_use]
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lat1, lon1) = a;
    let (lat2, lon2) = b;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}
