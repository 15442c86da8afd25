use anyhow::Result;

use crate::gps_processor::Point;

/// Converts a batch of coordinates from one reference system to another.
/// Implementations must return exactly one point per input point, in order.
pub trait CoordinateConverter {
    fn convert_batch(&self, points: &[Point]) -> Result<Vec<Point>>;
}

/// Keeps coordinates as they are.
pub struct IdentityConverter;

impl CoordinateConverter for IdentityConverter {
    fn convert_batch(&self, points: &[Point]) -> Result<Vec<Point>> {
        Ok(points.to_vec())
    }
}

impl<F> CoordinateConverter for F
where
    F: Fn(&[Point]) -> Result<Vec<Point>>,
{
    fn convert_batch(&self, points: &[Point]) -> Result<Vec<Point>> {
        self(points)
    }
}

/// Runs `converter` and checks that it kept the 1:1 mapping.
pub fn convert_checked(converter: &dyn CoordinateConverter, points: &[Point]) -> Result<Vec<Point>> {
    let converted = converter.convert_batch(points)?;
    if converted.len() != points.len() {
        bail!(
            "coordinate converter returned {} points for {} inputs",
            converted.len(),
            points.len()
        );
    }
    Ok(converted)
}
