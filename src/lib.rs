#[macro_use]
extern crate log;
#[macro_use]
extern crate anyhow;

pub mod batch;
pub mod config;
pub mod coord_transform;
pub mod export_data;
pub mod gps_processor;
pub mod import_data;
pub mod logs;
pub mod move_track;
pub mod segment_scanner;
pub mod stay_point;

use anyhow::Result;

pub use config::{ExtractionConfig, MoveBoundary};
pub use gps_processor::{GpsPoint, Point};
pub use move_track::MoveTrack;
pub use stay_point::StayPoint;

/// Stay points and move tracks of one log, from a single scan.
#[derive(Clone, Debug, PartialEq)]
pub struct Extraction {
    pub stay_points: Vec<StayPoint>,
    pub move_tracks: Vec<MoveTrack>,
}

pub fn extract(points: &[GpsPoint], config: &ExtractionConfig) -> Result<Extraction> {
    let scan = segment_scanner::scan(points, &config.scan_options());
    let stays = scan.stay_intervals();
    let ranges = move_track::move_ranges(&stays, points.len(), scan.final_anchor, config)?;
    Ok(Extraction {
        stay_points: stay_point::stay_points_from_intervals(points, &stays),
        move_tracks: move_track::tracks_from_ranges(points, &ranges),
    })
}
