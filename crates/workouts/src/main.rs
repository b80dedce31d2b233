//! Prints a summary line for every workout in the feed.
//!
//! Run with:
//! ```
//! cargo run -p workouts --bin workout-summary
//! WORKOUT_FEED=feed.json WORKOUT_OUTPUT=json cargo run -p workouts --bin workout-summary
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use workouts::prelude::*;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let config = DriverConfig::from_env();

    let mut packages = match &config.feed_path {
        Some(path) => load_packages(path)?,
        None => {
            tracing::info!("No WORKOUT_FEED set, using sample packages");
            sample_packages()
        }
    };

    if config.generate > 0 {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        packages.extend(ReadingGenerator::new().packages(config.generate, &mut rng));
        tracing::info!("Generated {} packages", config.generate);
    }

    let report = process_feed(&packages);

    for summary in &report.summaries {
        match config.output {
            OutputFormat::Text => println!("{}", summary.message()),
            OutputFormat::Json => println!("{}", serde_json::to_string(summary)?),
        }
    }

    tracing::info!(
        "Processed {} workouts, {} failed",
        packages.len(),
        report.failures.len()
    );

    if !report.is_clean() {
        anyhow::bail!("{} workouts could not be summarised", report.failures.len());
    }

    Ok(())
}
