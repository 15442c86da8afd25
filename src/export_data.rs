use crate::import_data::PLT_TIME_FORMAT;
use crate::move_track::MoveTrack;
use crate::stay_point::StayPoint;
use anyhow::Result;
use chrono::TimeZone;
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;

pub const STAY_POINT_HEADER: &str =
    "Extracted stay points:\nlongitude\tlatitude\tarriving time\tleaving time";
pub const GPX_CREATOR: &str = "staypoint_core";

/// Plain text report, one stay point per line:
/// `<lon> <lat> <arriving time> <leaving time>`.
pub fn write_stay_points<W: Write, Tz: TimeZone>(
    writer: &mut W,
    stay_points: &[StayPoint],
    tz: &Tz,
) -> Result<()>
where
    Tz::Offset: Display,
{
    writeln!(writer, "{STAY_POINT_HEADER}")?;
    for stay_point in stay_points {
        writeln!(
            writer,
            "{} {} {} {}",
            stay_point.longitude,
            stay_point.latitude,
            stay_point
                .arrival_time
                .with_timezone(tz)
                .format(PLT_TIME_FORMAT),
            stay_point
                .departure_time
                .with_timezone(tz)
                .format(PLT_TIME_FORMAT),
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct TrackPointJson {
    lat: f64,
    lng: f64,
    count: u32,
}

#[derive(Serialize)]
struct MoveTracksJson {
    track: Vec<Vec<TrackPointJson>>,
}

fn round_to_6_decimal_places(num: f64) -> f64 {
    (num * 1000000.0).round() / 1000000.0
}

/// `{"track": [[{"lat": .., "lng": .., "count": 1}, ..], ..]}`
pub fn write_move_tracks_json<W: Write>(writer: &mut W, tracks: &[MoveTrack]) -> Result<()> {
    let json = MoveTracksJson {
        track: tracks
            .iter()
            .map(|track| {
                track
                    .points
                    .iter()
                    .map(|point| TrackPointJson {
                        lat: round_to_6_decimal_places(point.latitude),
                        lng: round_to_6_decimal_places(point.longitude),
                        count: 1,
                    })
                    .collect()
            })
            .collect(),
    };
    serde_json::to_writer(writer, &json)?;
    Ok(())
}

pub fn move_tracks_to_gpx(tracks: &[MoveTrack]) -> Result<Gpx> {
    let mut track = Track::new();
    track.name = Some("Move tracks".to_string());
    for move_track in tracks {
        let mut segment = TrackSegment::new();
        segment.points = move_track
            .points
            .iter()
            .map(|point| Waypoint::new(Point::new(point.longitude, point.latitude)))
            .collect();
        track.segments.push(segment);
    }
    Ok(Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(GPX_CREATOR.to_string()),
        tracks: vec![track],
        ..Default::default()
    })
}

pub fn write_move_tracks_gpx<W: Write>(writer: &mut W, tracks: &[MoveTrack]) -> Result<()> {
    gpx::write(&move_tracks_to_gpx(tracks)?, writer)?;
    Ok(())
}
