use chrono::{DateTime, Utc};

pub const EARTH_RADIUS_M: f64 = 6371000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Point {
            latitude,
            longitude,
        }
    }

    pub fn haversine_distance(&self, other: &Point) -> f64 {
        distance(
            self.longitude,
            self.latitude,
            other.longitude,
            other.latitude,
        )
    }
}

/// Great-circle distance in meters between two points given in decimal
/// degrees, argument order is (lon1, lat1, lon2, lat2).
pub fn distance(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let dlat = lat2 - lat1;
    let dlon = (lon2 - lon1).to_radians();
    let a = (dlat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.).sin().powi(2);
    // rounding can push `a` slightly out of asin's domain for (anti)podal points
    let a = a.clamp(0., 1.);
    2. * EARTH_RADIUS_M * a.sqrt().asin()
}

/// One record of a GPS log.
#[derive(Clone, Debug, PartialEq)]
pub struct GpsPoint {
    pub point: Point,
    pub timestamp: DateTime<Utc>,
}

impl GpsPoint {
    pub fn new(longitude: f64, latitude: f64, timestamp: DateTime<Utc>) -> Self {
        GpsPoint {
            point: Point::new(longitude, latitude),
            timestamp,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.point.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.point.latitude
    }

    pub fn timestamp_sec(&self) -> i64 {
        self.timestamp.timestamp()
    }

    pub fn distance_to(&self, other: &GpsPoint) -> f64 {
        self.point.haversine_distance(&other.point)
    }

    /// Whole seconds from `self` to `other`, negative if `other` is earlier.
    pub fn seconds_until(&self, other: &GpsPoint) -> i64 {
        other.timestamp_sec() - self.timestamp_sec()
    }
}
