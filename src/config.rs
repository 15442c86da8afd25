use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

use crate::segment_scanner::ScanOptions;

pub const DEFAULT_DIST_THRESHOLD_M: f64 = 200.;
pub const DEFAULT_TIME_THRESHOLD_SEC: i64 = 30 * 60;
pub const DEFAULT_MOVE_POINT_THRESHOLD: usize = 100;

/// Where a qualifying move gap ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveBoundary {
    /// Gap ends right before the next stay starts, trailing gap included.
    StayBounded,
    /// Every gap runs up to the scan's final anchor index, as the original
    /// batch tool did.
    Legacy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    pub dist_threshold_m: f64,
    pub time_threshold_sec: i64,
    pub move_point_threshold: usize,
    pub legacy_scan_offset: bool,
    pub move_boundary: MoveBoundary,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        ExtractionConfig {
            dist_threshold_m: DEFAULT_DIST_THRESHOLD_M,
            time_threshold_sec: DEFAULT_TIME_THRESHOLD_SEC,
            move_point_threshold: DEFAULT_MOVE_POINT_THRESHOLD,
            legacy_scan_offset: true,
            move_boundary: MoveBoundary::StayBounded,
        }
    }
}

impl ExtractionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("failed to open config {path:?}"))?;
        let config: ExtractionConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid config {path:?}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.dist_threshold_m.is_nan() || self.dist_threshold_m < 0. {
            bail!(
                "`dist_threshold_m` must be a non-negative number, got {}",
                self.dist_threshold_m
            );
        }
        if self.time_threshold_sec < 0 {
            bail!(
                "`time_threshold_sec` must not be negative, got {}",
                self.time_threshold_sec
            );
        }
        Ok(())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            dist_threshold_m: self.dist_threshold_m,
            time_threshold_sec: self.time_threshold_sec,
            legacy_scan_offset: self.legacy_scan_offset,
        }
    }
}
