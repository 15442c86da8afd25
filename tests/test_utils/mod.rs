#![allow(dead_code)]

use chrono::{DateTime, Utc};
use staypoint_core::gps_processor::{GpsPoint, EARTH_RADIUS_M};
use staypoint_core::import_data::PLT_TIME_FORMAT;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub const START_LNG: f64 = 116.318417;
pub const START_LAT: f64 = 39.984702;
// 2008-10-23 02:53:04 UTC
pub const START_TIMESTAMP_SEC: i64 = 1224730384;

pub const PLT_HEADER: &str = "Geolife trajectory
WGS 84
Altitude is in Feet
Reserved 3
0,2,255,My Track,0,0,2,8421376
0
";

pub fn meters_to_lat_degrees(meters: f64) -> f64 {
    (meters / EARTH_RADIUS_M).to_degrees()
}

pub fn timestamp(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

/// Builds a synthetic trajectory that only ever moves north, so distances
/// between points are exactly the meters walked.
pub struct TrackBuilder {
    points: Vec<GpsPoint>,
    lng: f64,
    lat: f64,
    time_sec: i64,
}

impl TrackBuilder {
    pub fn new() -> Self {
        TrackBuilder {
            points: Vec::new(),
            lng: START_LNG,
            lat: START_LAT,
            time_sec: START_TIMESTAMP_SEC,
        }
    }

    fn emit(&mut self, interval_sec: i64) {
        if !self.points.is_empty() {
            self.time_sec += interval_sec;
        }
        self.points
            .push(GpsPoint::new(self.lng, self.lat, timestamp(self.time_sec)));
    }

    /// Shifts the position without recording a point.
    pub fn move_by(mut self, meters: f64) -> Self {
        self.lat += meters_to_lat_degrees(meters);
        self
    }

    pub fn stay(mut self, count: usize, interval_sec: i64) -> Self {
        for _ in 0..count {
            self.emit(interval_sec);
        }
        self
    }

    pub fn walk(mut self, count: usize, step_m: f64, interval_sec: i64) -> Self {
        for _ in 0..count {
            self.lat += meters_to_lat_degrees(step_m);
            self.emit(interval_sec);
        }
        self
    }

    pub fn build(self) -> Vec<GpsPoint> {
        self.points
    }
}

/// A 40 minute stay, `gap` moving points 1 km apart, a second 40 minute
/// stay, then one departing point. With the corrected scan the stays are
/// `[0, 5]` and `[6 + gap, 11 + gap]`, the gap is `[6, 5 + gap]`.
pub fn two_stays_with_gap(gap: usize) -> Vec<GpsPoint> {
    TrackBuilder::new()
        .stay(5, 600)
        .walk(1 + gap, 1000., 60)
        .move_by(1000.)
        .stay(5, 600)
        .walk(1, 1000., 60)
        .build()
}

/// Deterministic pseudo random mix of stays and walks.
pub fn mixed_track(seed: u64, segments: usize) -> Vec<GpsPoint> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };
    let mut builder = TrackBuilder::new();
    for _ in 0..segments {
        builder = if next() % 2 == 0 {
            let count = 2 + next() % 20;
            builder.stay(count, 60 + (next() % 600) as i64)
        } else {
            let count = 2 + next() % 50;
            builder.walk(count, 50. + (next() % 500) as f64, 30)
        };
    }
    builder.build()
}

pub fn to_plt_line(point: &GpsPoint) -> String {
    format!(
        "{},{},0,492,39744.1201851852,{}",
        point.longitude(),
        point.latitude(),
        point.timestamp.format(PLT_TIME_FORMAT)
    )
}

pub fn write_plt(path: &Path, points: &[GpsPoint]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut file = File::create(path).unwrap();
    file.write_all(PLT_HEADER.as_bytes()).unwrap();
    for point in points {
        writeln!(file, "{}", to_plt_line(point)).unwrap();
    }
}
