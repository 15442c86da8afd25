use anyhow::{Context, Result};
use chrono::Local;
use itertools::Itertools;
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Component, Path, PathBuf},
};

use crate::config::ExtractionConfig;
use crate::coord_transform::{self, CoordinateConverter};
use crate::move_track::MoveTrack;
use crate::{export_data, extract, import_data};

pub const PLT_EXTENSION: &str = "plt";
pub const STAY_POINT_DIR: &str = "stay_point";
pub const MOVE_TRACK_DIR: &str = "move_tracks";
// GeoLife keeps each user's logs under `<user>/Trajectory/`.
const TRAJECTORY_DIR: &str = "Trajectory";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub stay_points: usize,
    pub move_tracks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub stay_points: usize,
    pub move_tracks: usize,
}

/// All `.plt` files under `dir`, depth first, sorted by path.
pub fn find_plt_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_plt_files(dir, &mut files)
        .with_context(|| format!("failed to walk {dir:?}"))?;
    Ok(files)
}

fn collect_plt_files(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    let entries = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    for path in entries.into_iter().map(|e| e.path()).sorted() {
        if path.is_dir() {
            collect_plt_files(&path, files)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(PLT_EXTENSION))
        {
            files.push(path);
        }
    }
    Ok(())
}

pub fn stay_point_output_path(output_dir: &Path, relative: &Path) -> PathBuf {
    output_dir.join(STAY_POINT_DIR).join(relative)
}

pub fn move_track_output_path(output_dir: &Path, relative: &Path) -> PathBuf {
    let mut path = output_dir.join(MOVE_TRACK_DIR);
    if let Some(parent) = relative.parent() {
        for component in parent.components() {
            if let Component::Normal(name) = component {
                if name != TRAJECTORY_DIR {
                    path.push(name);
                }
            }
        }
    }
    path.push(relative.file_name().unwrap_or(relative.as_os_str()));
    path.set_extension("json");
    path
}

fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("failed to create {parent:?}"))?;
    }
    let file = File::create(path).with_context(|| format!("failed to create {path:?}"))?;
    Ok(BufWriter::new(file))
}

pub fn process_file(
    input_file: &Path,
    relative: &Path,
    output_dir: &Path,
    config: &ExtractionConfig,
    converter: &dyn CoordinateConverter,
) -> Result<FileResult> {
    let points = import_data::load_plt(input_file)?;
    let extraction = extract(&points, config)?;

    let stay_points = extraction.stay_points;
    if !stay_points.is_empty() {
        let path = stay_point_output_path(output_dir, relative);
        let mut writer = create_output_file(&path)?;
        export_data::write_stay_points(&mut writer, &stay_points, &Local)?;
        writer.flush()?;
    }

    let move_tracks = extraction
        .move_tracks
        .into_iter()
        .map(|track| {
            Ok(MoveTrack {
                points: coord_transform::convert_checked(converter, &track.points)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let path = move_track_output_path(output_dir, relative);
    let mut writer = create_output_file(&path)?;
    export_data::write_move_tracks_json(&mut writer, &move_tracks)?;
    writer.flush()?;

    Ok(FileResult {
        stay_points: stay_points.len(),
        move_tracks: move_tracks.len(),
    })
}

/// Runs both extractions over every PLT file under `input_dir`. A file that
/// fails is logged and counted, the rest of the batch goes on.
pub fn run_batch(
    input_dir: &Path,
    output_dir: &Path,
    config: &ExtractionConfig,
    converter: &dyn CoordinateConverter,
) -> Result<BatchSummary> {
    config.validate()?;
    // an output directory nested in the input holds our own reports
    let files = find_plt_files(input_dir)?
        .into_iter()
        .filter(|file| !file.starts_with(output_dir))
        .collect::<Vec<_>>();
    info!("found {} plt files under {:?}", files.len(), input_dir);

    let mut summary = BatchSummary::default();
    for file in files {
        let relative = file.strip_prefix(input_dir)?;
        match process_file(&file, relative, output_dir, config, converter) {
            Ok(result) => {
                info!(
                    "{:?}: {} stay points, {} move tracks",
                    relative, result.stay_points, result.move_tracks
                );
                summary.files_processed += 1;
                summary.stay_points += result.stay_points;
                summary.move_tracks += result.move_tracks;
            }
            Err(e) => {
                error!("failed to process {:?}: {:?}", file, e);
                summary.files_failed += 1;
            }
        }
    }
    info!("batch finished: {:?}", summary);
    Ok(summary)
}
