use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use levelgen::level::GenerationStats;
use levelgen::level::tuning::{DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS, DEFAULT_WIDTH};
use levelgen::level_file::{GROUND_LAYER, OBJECT_LAYER};
use levelgen::{GeneratedLevel, LayerGrid, LevelConfig, LevelGenerator};
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Level width in tiles
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Level height in tiles
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Give up after this many full regeneration attempts
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
    /// Where to write the level file
    #[arg(short, long, default_value = "level_output.xml")]
    output: PathBuf,
    /// Print both layers after generating
    #[arg(long)]
    print: bool,
    /// Emit the generation report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    width: usize,
    height: usize,
    output: &'a str,
    persisted: bool,
    fingerprint: String,
    stats: &'a GenerationStats,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = LevelConfig::new(args.width, args.height).with_max_attempts(args.max_attempts);
    let mut generator = LevelGenerator::new(config).context("Invalid level configuration")?;
    let saved = generator
        .generate_to_file(&args.output)
        .with_context(|| format!("Failed to generate a {}x{} level", args.width, args.height))?;

    let output = args.output.display().to_string();
    let report = Report {
        width: saved.level.width(),
        height: saved.level.height(),
        output: &output,
        persisted: saved.persisted,
        fingerprint: format!("{:016x}", saved.level.fingerprint()),
        stats: &saved.level.stats,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    if args.print {
        print_layers(&saved.level);
    }

    Ok(())
}

fn print_report(report: &Report<'_>) {
    println!("Level {}x{} generated.", report.width, report.height);
    println!("Attempts: {}", report.stats.attempts);
    println!("Fingerprint: {}", report.fingerprint);
    println!(
        "Keys: {}/{}  Spikes: {}/{}",
        report.stats.placement.keys_placed,
        report.stats.placement.key_quota,
        report.stats.placement.spikes_placed,
        report.stats.placement.spike_quota
    );
    if report.persisted {
        println!("Saved to {}", report.output);
    } else {
        println!("Could not save to {}; level exists in memory only.", report.output);
    }
}

fn print_layers(level: &GeneratedLevel) {
    for (name, layer) in [
        (GROUND_LAYER, LayerGrid::from_terrain(&level.grids)),
        (OBJECT_LAYER, LayerGrid::from_objects(&level.grids)),
    ] {
        println!();
        println!("Layer \"{name}\"");
        for row in layer.rows() {
            println!("{row}");
        }
    }
}
