//! Write generated runs as label files for `sessbound evaluate`
//!
//! ```bash
//! cargo run -p sessbound-benchmarks --example write_runs -- runs/
//! sessbound evaluate -i 'runs/*.json'
//! ```

use sessbound_benchmarks::constants::{MAX_SHIFT, MEAN_SESSION_LENGTH, SEED};
use sessbound_benchmarks::generators;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("runs"));
    std::fs::create_dir_all(&dir)?;

    let size = 500;
    let runs = [
        generators::perfect(size, MEAN_SESSION_LENGTH, SEED),
        generators::shifted(size, MEAN_SESSION_LENGTH, 0.25, MAX_SHIFT, SEED),
        generators::noisy(size, MEAN_SESSION_LENGTH, 0.05, SEED),
        generators::never_starts(size, MEAN_SESSION_LENGTH, SEED),
    ];

    for run in &runs {
        run.validate()?;
        let path = dir.join(format!("{}.json", run.name));
        std::fs::write(&path, run.to_json()?)?;
        println!("{run} -> {}", path.display());
    }

    Ok(())
}
