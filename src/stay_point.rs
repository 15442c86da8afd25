use chrono::{DateTime, Utc};

use crate::config::ExtractionConfig;
use crate::gps_processor::{GpsPoint, Point};
use crate::segment_scanner::{self, Interval};

#[derive(Clone, Debug, PartialEq)]
pub struct StayPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub arrival_time: DateTime<Utc>,
    pub departure_time: DateTime<Utc>,
}

impl StayPoint {
    pub fn duration_sec(&self) -> i64 {
        (self.departure_time - self.arrival_time).num_seconds()
    }

    fn from_interval(points: &[GpsPoint], interval: Interval) -> Self {
        let members = &points[interval.range()];
        let center = mean_coordinate(members);
        StayPoint {
            longitude: center.longitude,
            latitude: center.latitude,
            arrival_time: points[interval.start()].timestamp,
            departure_time: points[interval.end()].timestamp,
        }
    }
}

/// Plain arithmetic mean of the raw degree values, not a geodesic centroid.
pub fn mean_coordinate(points: &[GpsPoint]) -> Point {
    assert!(!points.is_empty(), "mean of an empty point set");
    let (lon_sum, lat_sum) = points.iter().fold((0., 0.), |(lon, lat), p| {
        (lon + p.longitude(), lat + p.latitude())
    });
    let n = points.len() as f64;
    Point::new(lon_sum / n, lat_sum / n)
}

pub fn stay_points_from_intervals(points: &[GpsPoint], stays: &[Interval]) -> Vec<StayPoint> {
    stays
        .iter()
        .map(|interval| StayPoint::from_interval(points, *interval))
        .collect()
}

pub fn extract_stay_points(points: &[GpsPoint], config: &ExtractionConfig) -> Vec<StayPoint> {
    let stays = segment_scanner::stay_intervals(points, &config.scan_options());
    stay_points_from_intervals(points, &stays)
}

#[cfg(test)]
mod tests {
    use super::mean_coordinate;

    #[test]
    #[should_panic(expected = "mean of an empty point set")]
    fn mean_of_nothing_panics() {
        mean_coordinate(&[]);
    }
}
