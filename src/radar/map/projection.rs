//! Spherical Web Mercator in pixel space.
//!
//! At zoom `z` the whole world is a square of `TILE_SIZE * 2^z` pixels with
//! the antimeridian at both edges and the Mercator latitude limit at top and
//! bottom.

use crate::model::Coordinate;
use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// A point in world pixels or screen pixels, depending on context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2f64.powf(zoom)
}

pub fn wrap_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

/// Projects a coordinate to world pixels at `zoom`.
pub fn project(c: Coordinate, zoom: f64) -> Point {
    let size = world_size(zoom);
    let lat = c.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (c.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    Point::new(x, y)
}

/// Inverse of [`project`]; longitude is wrapped into `[-180, 180)`.
pub fn unproject(p: Point, zoom: f64) -> Coordinate {
    let size = world_size(zoom);
    let lng = wrap_lng(p.x / size * 360.0 - 180.0);
    let n = PI * (1.0 - 2.0 * p.y / size);
    let lat = n.sinh().atan().to_degrees();
    Coordinate::new(lat.clamp(-MAX_LATITUDE, MAX_LATITUDE), lng)
}
