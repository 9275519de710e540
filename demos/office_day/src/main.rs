//! office_day — replicate the reference office day and write the results.
//!
//! ```text
//! office_day [CONFIG.json] [RUNS]
//! ```
//!
//! Without a config file the reference office is used (20 seats, open 9–18,
//! four desks).  Each replication derives its seed from the config seed and
//! its run index, so a given `(config, RUNS)` pair always writes the same
//! files whether or not the `parallel` feature spreads the runs over
//! threads.  Set `RUST_LOG=debug` for a per-event trace.

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use office_core::OfficeConfig;
use office_output::{CsvWriter, OutputWriter};
use office_random::ProfileTable;
use office_sim::{ClientRecord, NoopObserver, OfficeBuilder, RunSummary, SimResult};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_RUNS: u64  = 5;
const OUTPUT_DIR:   &str = "output/office_day";

fn load_config(path: Option<&str>) -> Result<OfficeConfig> {
    let Some(path) = path else {
        return Ok(OfficeConfig::reference());
    };
    let file = File::open(path).with_context(|| format!("opening config {path}"))?;
    let config: OfficeConfig =
        serde_json::from_reader(file).with_context(|| format!("parsing config {path}"))?;
    Ok(config)
}

/// One full office day for replication `run`.
fn replicate(
    config:   &OfficeConfig,
    profiles: &ProfileTable,
    run:      u64,
) -> SimResult<(RunSummary, Vec<ClientRecord>)> {
    let mut office = OfficeBuilder::new(config.clone(), profiles.clone())
        .run_index(run)
        .build()?;
    let summary = office.run(&mut NoopObserver)?;
    Ok((summary, office.records()))
}

/// Every replication, in run order.
fn replicate_all(
    config:   &OfficeConfig,
    profiles: &ProfileTable,
    runs:     u64,
) -> SimResult<Vec<(RunSummary, Vec<ClientRecord>)>> {
    #[cfg(not(feature = "parallel"))]
    {
        (0..runs).map(|run| replicate(config, profiles, run)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        // Runs share nothing mutable; `collect` keeps index order.
        (0..runs)
            .into_par_iter()
            .map(|run| replicate(config, profiles, run))
            .collect()
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let runs: u64 = match args.get(1) {
        Some(n) => n.parse().with_context(|| format!("invalid run count {n:?}"))?,
        None    => DEFAULT_RUNS,
    };
    let profiles = ProfileTable::standard()?;

    println!("=== office_day ===");
    println!(
        "Hours: {:.2}–{:.2}  |  Seats: {}  |  Desks: {}  |  Runs: {runs}  |  Seed: {}",
        config.opening_hour,
        config.closing_hour,
        config.waiting_room_capacity,
        config.workers.len(),
        config.seed,
    );
    println!();

    let t0 = Instant::now();
    let results = replicate_all(&config, &profiles, runs)?;
    info!("{runs} runs in {:.3} s", t0.elapsed().as_secs_f64());

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let mut writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    for (summary, records) in &results {
        writer.write_clients(records)?;
        writer.write_run_summary(summary)?;
    }
    writer.finish()?;
    let summaries: Vec<RunSummary> = results.iter().map(|(s, _)| *s).collect();

    // Per-run table.
    println!(
        "{:<5} {:>8} {:>8} {:>10} {:>9} {:>16}",
        "Run", "Clients", "Served", "Abandoned", "Closed", "Net price"
    );
    println!("{}", "-".repeat(61));
    for s in &summaries {
        println!(
            "{:<5} {:>8} {:>8} {:>10} {:>9} {:>16.0}",
            s.run,
            s.clients,
            s.served,
            s.abandoned,
            s.end_time.to_string(),
            s.net_price,
        );
    }

    let clients: usize = summaries.iter().map(|s| s.clients).sum();
    let abandoned: usize = summaries.iter().map(|s| s.abandoned).sum();
    if clients > 0 {
        println!();
        println!(
            "Abandonment rate: {:.1}% over {clients} clients",
            100.0 * abandoned as f64 / clients as f64
        );
    }
    println!("Output written to {OUTPUT_DIR}/clients.csv and {OUTPUT_DIR}/runs.csv");

    Ok(())
}
