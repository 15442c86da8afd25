use anyhow::Result;

use crate::config::{ExtractionConfig, MoveBoundary};
use crate::gps_processor::{GpsPoint, Point};
use crate::segment_scanner::{self, Interval};

#[derive(Clone, Debug, PartialEq)]
pub struct MoveTrack {
    pub points: Vec<Point>,
}

impl MoveTrack {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Turns the stays of one scan into the move ranges between them.
///
/// A gap qualifies when it holds strictly more than `move_point_threshold`
/// points. `final_anchor` is only read in `MoveBoundary::Legacy` mode, where
/// every qualifying range is stretched to it (clamped to the last point).
pub fn move_ranges(
    stays: &[Interval],
    point_count: usize,
    final_anchor: usize,
    config: &ExtractionConfig,
) -> Result<Vec<Interval>> {
    let mut ranges = Vec::new();
    if point_count == 0 {
        return Ok(ranges);
    }
    let last_index = point_count - 1;
    let qualifies = |count: usize| count > config.move_point_threshold;

    let mut next_free = 0;
    for stay in stays {
        // stays can share an endpoint when the scan resumes at `j`
        let gap = stay.start().saturating_sub(next_free);
        if qualifies(gap) {
            let end = match config.move_boundary {
                MoveBoundary::StayBounded => stay.start() - 1,
                MoveBoundary::Legacy => final_anchor.min(last_index),
            };
            ranges.push(Interval::new(next_free, end)?);
        }
        next_free = stay.end() + 1;
    }

    if config.move_boundary == MoveBoundary::StayBounded
        && next_free <= last_index
        && qualifies(point_count - next_free)
    {
        ranges.push(Interval::new(next_free, last_index)?);
    }
    Ok(ranges)
}

pub fn extract_move_tracks(
    points: &[GpsPoint],
    config: &ExtractionConfig,
) -> Result<Vec<MoveTrack>> {
    let scan = segment_scanner::scan(points, &config.scan_options());
    let ranges = move_ranges(
        &scan.stay_intervals(),
        points.len(),
        scan.final_anchor,
        config,
    )?;
    Ok(tracks_from_ranges(points, &ranges))
}

pub fn tracks_from_ranges(points: &[GpsPoint], ranges: &[Interval]) -> Vec<MoveTrack> {
    ranges
        .iter()
        .map(|range| MoveTrack {
            points: points[range.range()].iter().map(|p| p.point).collect(),
        })
        .collect()
}
