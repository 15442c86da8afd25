use anyhow::Result;
use std::ops::RangeInclusive;

use crate::gps_processor::GpsPoint;

/// Inclusive index range over a point sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    start: usize,
    end: usize,
}

impl Interval {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            bail!("invalid interval: start {} > end {}", start, end);
        }
        Ok(Interval { start, end })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CandidateKind {
    Stay,
    // the distance threshold was crossed but not enough time had passed
    Transit,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub interval: Interval,
    pub kind: CandidateKind,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScanOptions {
    pub dist_threshold_m: f64,
    pub time_threshold_sec: i64,
    pub legacy_scan_offset: bool,
}

/// Result of one pass over a point sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult {
    pub candidates: Vec<Candidate>,
    // the anchor index the outer loop stopped at, may be `points.len()`
    pub final_anchor: usize,
}

impl ScanResult {
    pub fn stay_intervals(&self) -> Vec<Interval> {
        self.candidates
            .iter()
            .filter(|c| c.kind == CandidateKind::Stay)
            .map(|c| c.interval)
            .collect()
    }
}

/// Two pointer scan: for every anchor `i`, find the first `j > i` whose
/// distance to `i` exceeds the threshold. `[i, j]` is a stay if more than
/// `time_threshold_sec` elapsed between the two, otherwise a transit. The
/// next anchor is `j + 1` with `legacy_scan_offset`, `j` without it.
pub fn scan(points: &[GpsPoint], options: &ScanOptions) -> ScanResult {
    let n = points.len();
    let mut candidates = Vec::new();
    let mut i = 0;
    while i + 1 < n {
        let mut broke = false;
        for j in (i + 1)..n {
            if points[i].distance_to(&points[j]) > options.dist_threshold_m {
                let elapsed = points[i].seconds_until(&points[j]);
                let kind = if elapsed > options.time_threshold_sec {
                    CandidateKind::Stay
                } else {
                    CandidateKind::Transit
                };
                // i < j always holds here
                candidates.push(Candidate {
                    interval: Interval { start: i, end: j },
                    kind,
                });
                i = j;
                broke = true;
                break;
            }
        }
        if options.legacy_scan_offset || !broke {
            i += 1;
        }
    }

    let stays = candidates
        .iter()
        .filter(|c| c.kind == CandidateKind::Stay)
        .count();
    debug!(
        "scanned {} points: {} candidates, {} stays",
        n,
        candidates.len(),
        stays
    );

    ScanResult {
        candidates,
        final_anchor: i,
    }
}

pub fn stay_intervals(points: &[GpsPoint], options: &ScanOptions) -> Vec<Interval> {
    scan(points, options).stay_intervals()
}
