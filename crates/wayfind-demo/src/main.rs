//! Command-line demo: random planar graph, every strategy, timings.
//!
//! Run: cargo run --bin wayfind-demo -- --nodes 10000 --arcs 35000
//! Set `RUST_LOG=debug` to see per-search statistics.

mod cli;
mod run;

use clap::Parser;
use flexi_logger::Logger;

use crate::cli::Args;
use crate::run::{Instance, print, run};

fn main() {
    let args = Args::parse();

    // Dropping the handle would shut the logger down.
    let _logger = match Logger::try_with_env_or_str("info").and_then(|logger| logger.start()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: cannot start logger: {e}");
            std::process::exit(1);
        }
    };

    let start = std::time::Instant::now();
    let instance = match Instance::generate(&args) {
        Ok(instance) => instance,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "created {} nodes and {} arcs in {} milliseconds",
        instance.graph.node_count(),
        instance.graph.arc_count(),
        start.elapsed().as_millis()
    );

    match run(&args, &instance) {
        Ok(report) => print(&instance, &report, args.print_paths),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
