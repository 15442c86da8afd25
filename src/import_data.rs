use crate::gps_processor::{GpsPoint, Point};
use anyhow::{Context, Result};
use chrono::{Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

// The first lines of a PLT file describe the log itself and carry no points.
pub const PLT_HEADER_LINES: usize = 6;
pub const PLT_TIME_FORMAT: &str = "%Y-%m-%d,%H:%M:%S";

/// Parses one PLT record: `lon,lat,...,date,time`. The date and time are
/// read as wall-clock time in `tz`.
pub fn parse_plt_record<Tz: TimeZone>(line: &str, tz: &Tz) -> Result<GpsPoint> {
    let fields: Vec<&str> = line.trim_end().split(',').collect();
    if fields.len() < 4 {
        bail!("expected at least 4 fields, got {}", fields.len());
    }
    let longitude = fields[0]
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid longitude `{}`", fields[0]))?;
    let latitude = fields[1]
        .trim()
        .parse::<f64>()
        .with_context(|| format!("invalid latitude `{}`", fields[1]))?;

    let date_time = format!("{},{}", fields[fields.len() - 2], fields[fields.len() - 1]);
    let naive = NaiveDateTime::parse_from_str(&date_time, PLT_TIME_FORMAT)
        .with_context(|| format!("invalid timestamp `{date_time}`"))?;
    let timestamp = match tz.from_local_datetime(&naive) {
        LocalResult::Single(t) => t,
        // happens once a year when clocks go back
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => bail!("local time `{date_time}` does not exist"),
    };
    Ok(GpsPoint {
        point: Point::new(longitude, latitude),
        timestamp: timestamp.with_timezone(&Utc),
    })
}

pub fn read_plt<R: BufRead, Tz: TimeZone>(reader: R, tz: &Tz) -> Result<Vec<GpsPoint>> {
    let mut points = Vec::new();
    for (index, line) in reader.lines().enumerate().skip(PLT_HEADER_LINES) {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let point = parse_plt_record(&line, tz)
            .with_context(|| format!("line {}: `{}`", index + 1, line))?;
        points.push(point);
    }
    Ok(points)
}

pub fn load_plt_with_tz<P: AsRef<Path>, Tz: TimeZone>(path: P, tz: &Tz) -> Result<Vec<GpsPoint>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {path:?}"))?;
    let points =
        read_plt(BufReader::new(file), tz).with_context(|| format!("failed to parse {path:?}"))?;
    if points.is_empty() {
        warn!("no points in {:?}", path);
    }
    Ok(points)
}

pub fn load_plt<P: AsRef<Path>>(path: P) -> Result<Vec<GpsPoint>> {
    load_plt_with_tz(path, &Local)
}
