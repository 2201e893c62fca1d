use std::time::Instant;

use anyhow::Result;

use graveler::constants::LOG_LEVEL;
use graveler::report::ElapsedBreakdown;
use graveler::simulation::run_simulation;
use graveler::SimulationConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(LOG_LEVEL)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();

    let result = run_simulation(&SimulationConfig::default())?;
    println!("{}", result);

    println!("{}", ElapsedBreakdown::from_duration(start.elapsed()));
    Ok(())
}
