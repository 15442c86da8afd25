use staypoint_core::batch;
use staypoint_core::config::ExtractionConfig;
use staypoint_core::coord_transform::IdentityConverter;
use staypoint_core::logs;
use std::env;
use std::path::Path;

fn program_name(args: &[String]) -> &str {
    args.first().map_or("stay_point_batch", String::as_str)
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!(
            "usage: {} <input_dir> <output_dir> [config.json]",
            program_name(&args)
        );
        std::process::exit(2);
    }
    let input_dir = Path::new(&args[1]);
    let output_dir = Path::new(&args[2]);
    let config = match args.get(3) {
        Some(path) => ExtractionConfig::load(path)?,
        None => ExtractionConfig::default(),
    };

    logs::init(&output_dir.join("logs"))?;

    let summary = batch::run_batch(input_dir, output_dir, &config, &IdentityConverter)?;
    println!(
        "processed {} files ({} failed): {} stay points, {} move tracks",
        summary.files_processed, summary.files_failed, summary.stay_points, summary.move_tracks
    );
    if summary.files_failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
