// --- File: crates/pluview_site/src/route_map.rs ---
//! Geometry behind the animated route on the map section: great-circle
//! distance between the two sites and the curved path a marker travels along.

use serde::Serialize;
use std::time::Duration;

pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// How far west of the midpoint the curve's control point sits, in degrees.
pub const CONTROL_LON_OFFSET: f64 = 3.0;
pub const CURVE_STEPS: usize = 50;
pub const PROGRESS_STEP: f64 = 0.015;
pub const FRAME_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Pompeia, SP
pub const ORIGIN: GeoPoint = GeoPoint::new(-22.11, -50.17);
/// Piauí
pub const DESTINATION: GeoPoint = GeoPoint::new(-7.53, -42.53);
pub const MAP_CENTER: GeoPoint = GeoPoint::new(-14.5, -46.5);

/// Great-circle distance in kilometres (haversine).
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push near-antipodal points just past 1
    let a = a.clamp(0.0, 1.0);
    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Distance rounded to whole kilometres, as shown on the map badge.
pub fn distance_label_km(from: GeoPoint, to: GeoPoint) -> u32 {
    haversine_km(from, to).round() as u32
}

/// Quadratic Bézier from `origin` to `destination`, `steps + 1` points inclusive.
pub fn curve_points(origin: GeoPoint, destination: GeoPoint, steps: usize) -> Vec<GeoPoint> {
    let steps = steps.max(1);
    let control = GeoPoint::new(
        (origin.lat + destination.lat) / 2.0,
        (origin.lon + destination.lon) / 2.0 - CONTROL_LON_OFFSET,
    );
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let u = 1.0 - t;
            GeoPoint::new(
                u * u * origin.lat + 2.0 * u * t * control.lat + t * t * destination.lat,
                u * u * origin.lon + 2.0 * u * t * control.lon + t * t * destination.lon,
            )
        })
        .collect()
}

/// South-west and north-east corners enclosing every point.
pub fn bounds(points: &[GeoPoint]) -> Option<(GeoPoint, GeoPoint)> {
    let first = points.first()?;
    let init = (*first, *first);
    Some(points.iter().fold(init, |(sw, ne), p| {
        (
            GeoPoint::new(sw.lat.min(p.lat), sw.lon.min(p.lon)),
            GeoPoint::new(ne.lat.max(p.lat), ne.lon.max(p.lon)),
        )
    }))
}

/// A marker looping along a precomputed path.
#[derive(Debug, Clone)]
pub struct RouteAnimation {
    points: Vec<GeoPoint>,
    progress: f64,
}

impl RouteAnimation {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self {
            points,
            progress: 0.0,
        }
    }

    /// The site's Pompeia → Piauí route.
    pub fn site_route() -> Self {
        Self::new(curve_points(ORIGIN, DESTINATION, CURVE_STEPS))
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// One animation frame. Once the end is reached the next frame restarts at 0.
    pub fn advance(&mut self) {
        self.progress = if self.progress >= 1.0 {
            0.0
        } else {
            self.progress + PROGRESS_STEP
        };
    }

    pub fn travel_point(&self) -> Option<GeoPoint> {
        let last = self.points.len().checked_sub(1)?;
        let index = (self.progress * self.points.len() as f64).floor() as usize;
        self.points.get(index.min(last)).copied()
    }
}
