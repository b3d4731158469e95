//! Ring-dimension sweep over the textbook RLWE scheme.
//!
//! Runs `n ∈ {128, 256, 512, 1024, 2048}` with `q = 4097`, `t = 73`, `σ = 5`,
//! prints the timing/size/security table and emits the chart series as JSON.
//!
//! ```text
//! RUST_LOG=debug cargo run --release --example sweep
//! ```

use rlwe_sweep::{
    ChartSink, JsonChartSink, SweepConfig, TextbookRlwe, WallClock, run_sweep,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let config = SweepConfig::reference();
    println!("Ring-LWE parameters:");
    println!(
        "  q = {}, t = {}, σ = {}, {} bits per coefficient",
        config.modulus,
        config.plaintext_modulus,
        config.noise_std,
        config.bits_per_coefficient
    );
    println!();

    let report = match run_sweep(&config, TextbookRlwe::new(), WallClock) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("sweep aborted at n = {}: {err}", err.dimension());
            return ExitCode::FAILURE;
        }
    };

    print!("{report}");
    println!();

    let mut sink = JsonChartSink::new(io::stdout().lock());
    sink.plot(&report.chart_series());
    ExitCode::SUCCESS
}
