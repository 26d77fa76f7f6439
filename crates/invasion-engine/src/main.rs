//! Command-line entry point for the alien invasion simulation.
//!
//! Reads a city map, drops the requested number of aliens onto it, runs
//! the invasion until every alien is dead or the turn limit is reached,
//! and writes whatever is left of the map back out.
//!
//! # Startup Sequence
//!
//! 1. Parse command-line arguments
//! 2. Load configuration from `invasion-config.yaml` (if present)
//! 3. Initialize structured logging (tracing)
//! 4. Read the city map
//! 5. Seed the random source
//! 6. Place the aliens
//! 7. Run the simulation, printing each destroyed city
//! 8. Write the surviving map to the result file

mod error;
mod reporter;

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use invasion_core::config::DEFAULT_CONFIG_PATH;
use invasion_core::{InvasionConfig, InvasionState, populate_aliens, runner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::reporter::DestructionReporter;

/// Invasion - aliens wander a city graph and destroy every city they meet in
#[derive(Parser, Debug)]
#[command(name = "invasion")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of aliens to unleash (at most two per city)
    aliens: u32,

    /// Map file to read (default: `cities`)
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// File the surviving map is written to (default: `result`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Configuration file (default: `invasion-config.yaml` if it exists)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "invasion aborted");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run the whole invasion for the given arguments.
fn run(args: &Args) -> Result<(), EngineError> {
    let mut config = load_config(
        args.config.as_deref(),
        Path::new(DEFAULT_CONFIG_PATH),
        |key| std::env::var(key).ok(),
    )?;
    apply_overrides(&mut config, args);

    init_logging(&config.logging.level);
    info!(
        map = %config.io.map_path.display(),
        result = %config.io.result_path.display(),
        aliens = args.aliens,
        "invasion starting"
    );

    let city_map = invasion_world::read_map(&config.io.map_path)?;
    info!(
        cities = city_map.city_count(),
        edges = city_map.edge_count(),
        "Map loaded"
    );

    // One random source for the whole run, shared by placement and every
    // turn. The seed is logged so any run can be replayed.
    let seed = config.world.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, "Random source seeded");
    let mut rng = StdRng::seed_from_u64(seed);

    let occupancy = populate_aliens(args.aliens, &city_map, &mut rng)?;
    let mut state = InvasionState::new(city_map, occupancy);

    let mut reporter = DestructionReporter::new(io::stdout().lock());
    let result = runner::run_simulation(&mut state, &mut rng, &mut reporter)?;
    info!(lines = reporter.reported(), "Destruction report written");
    drop(reporter.into_inner());

    runner::log_simulation_end(&result, &state);

    invasion_world::write_map(&config.io.result_path, &state.city_map)?;
    info!(
        path = %config.io.result_path.display(),
        cities_remaining = state.city_map.city_count(),
        "Result written"
    );

    Ok(())
}

/// Load configuration from an explicit path, the default file if it
/// exists, or built-in defaults. The `env` lookup overrides file locations
/// in every case, including when no file is read.
fn load_config(
    explicit: Option<&Path>,
    default_path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<InvasionConfig, EngineError> {
    let mut config = match explicit {
        Some(path) => InvasionConfig::from_file(path)?,
        None if default_path.exists() => InvasionConfig::from_file(default_path)?,
        None => InvasionConfig::default(),
    };
    config.io.apply_overrides_from(env);
    Ok(config)
}

/// Command-line values win over configuration values.
fn apply_overrides(config: &mut InvasionConfig, args: &Args) {
    if let Some(ref map) = args.map {
        config.io.map_path.clone_from(map);
    }
    if let Some(ref output) = args.output {
        config.io.result_path.clone_from(output);
    }
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }
}

/// Initialize structured logging. `RUST_LOG` takes precedence over the
/// configured level. Logs go to stderr so stdout carries only the
/// destruction report.
fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use invasion_core::MAP_PATH_ENV;

    use super::*;

    #[test]
    fn parse_alien_count_only() {
        let args = Args::try_parse_from(["invasion", "12"]).unwrap();
        assert_eq!(args.aliens, 12);
        assert!(args.map.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn alien_count_is_required_and_numeric() {
        assert!(Args::try_parse_from(["invasion"]).is_err());
        assert!(Args::try_parse_from(["invasion", "many"]).is_err());
        assert!(Args::try_parse_from(["invasion", "-3"]).is_err());
    }

    #[test]
    fn cli_overrides_config() {
        let args = Args::try_parse_from([
            "invasion", "4", "--map", "earth", "--output", "ruins", "--seed", "9",
        ])
        .unwrap();
        let mut config = InvasionConfig::default();
        apply_overrides(&mut config, &args);
        assert_eq!(config.io.map_path, PathBuf::from("earth"));
        assert_eq!(config.io.result_path, PathBuf::from("ruins"));
        assert_eq!(config.world.seed, Some(9));
    }

    #[test]
    fn absent_flags_keep_config() {
        let args = Args::try_parse_from(["invasion", "4"]).unwrap();
        let mut config = InvasionConfig::default();
        config.world.seed = Some(1);
        apply_overrides(&mut config, &args);
        assert_eq!(config.world.seed, Some(1));
        assert_eq!(config.io.map_path, PathBuf::from("cities"));
    }

    #[test]
    fn env_overrides_apply_without_config_file() {
        let config = load_config(
            None,
            Path::new("no/such/dir/invasion-config.yaml"),
            |key| (key == MAP_PATH_ENV).then(|| "alt".to_owned()),
        )
        .unwrap();
        assert_eq!(config.io.map_path, PathBuf::from("alt"));
        assert_eq!(config.io.result_path, PathBuf::from("result"));
    }

    #[test]
    fn explicit_config_file_must_exist() {
        let result = load_config(
            Some(Path::new("no/such/dir/invasion-config.yaml")),
            Path::new("no/such/dir/invasion-config.yaml"),
            |_| None,
        );
        assert!(matches!(result, Err(EngineError::Config { .. })));
    }
}
