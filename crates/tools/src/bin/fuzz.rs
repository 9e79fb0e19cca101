use anyhow::{Result, bail};
use clap::Parser;
use levelgen::level_file::decode_level;
use levelgen::{
    LevelConfig, LevelGenerator, ObjectTile, Pos, TerrainTile, encode_level, is_reachable,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    levels: u32,
    #[arg(long, default_value_t = 100)]
    width: usize,
    #[arg(long, default_value_t = 10)]
    height: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting level fuzz on seed {} for {} levels...", args.seed, args.levels);
    let config = LevelConfig::new(args.width, args.height);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut total_attempts = 0_u64;
    let mut worst_attempts = 0_u32;
    let mut under_filled = 0_u32;
    let mut spikes_under_ceiling = 0_u64;

    for _ in 0..args.levels {
        let level_seed = rng.next_u64();
        let mut generator = LevelGenerator::from_seed(config, level_seed)?;
        let level = generator.generate()?;
        let grids = &level.grids;

        // Assert invariants
        let markers =
            (grids.count_objects(ObjectTile::Player), grids.count_objects(ObjectTile::Door));
        if markers != (1, 1) {
            bail!("Invariant failed: spawn/exit count on seed {level_seed}");
        }
        if !is_reachable(grids, Some(level.spawn), Some(level.exit)) {
            bail!("Invariant failed: exit unreachable on seed {level_seed}");
        }
        if decode_level(&encode_level(grids))? != *grids {
            bail!("Invariant failed: encoded level does not round-trip on seed {level_seed}");
        }
        for x in 0..grids.width() {
            let surface = (0..grids.height())
                .map(|y| grids.terrain_at(Pos::new(y, x)))
                .find(|tile| tile.is_solid());
            if surface != Some(TerrainTile::Platform) {
                bail!("Invariant failed: column {x} surface is {surface:?} on seed {level_seed}");
            }
        }

        // Spikes block the search but not movement. Ones with no open cell
        // above can only be bypassed sideways.
        spikes_under_ceiling += (0..grids.height())
            .flat_map(|y| (0..grids.width()).map(move |x| Pos::new(y, x)))
            .filter(|&pos| grids.object_at(pos) == ObjectTile::Spike)
            .filter(|&pos| !grids.is_passable(Pos { y: pos.y - 1, x: pos.x }))
            .count() as u64;

        total_attempts += u64::from(level.stats.attempts);
        worst_attempts = worst_attempts.max(level.stats.attempts);
        if level.stats.placement.is_under_filled() {
            under_filled += 1;
        }
    }

    println!("Fuzzing completed successfully.");
    println!(
        "Average attempts: {:.2}, worst: {}",
        total_attempts as f64 / f64::from(args.levels.max(1)),
        worst_attempts
    );
    println!("Under-filled levels: {under_filled}");
    println!("Spikes under a ceiling: {spikes_under_ceiling}");
    Ok(())
}
