use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::warn;

use kernel_bench::{
    detect_environment, init_tracing, BenchmarkController, BenchmarkSettings, CliArgs,
    CurlTransport, GistId, GistSync,
};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    println!("Automated Benchmark Runner");
    println!("===========================");

    let machine = match args.machine.clone() {
        Some(machine) => machine,
        None => prompt_machine_name().context("failed to read machine name")?,
    };

    let gist_id = match args.gist_id.as_deref() {
        Some(id) => Some(GistId::new(id).context("invalid --gist-id")?),
        None => None,
    };

    let remote = (!args.no_upload)
        .then(|| GistSync::new(CurlTransport::new(), args.github_token.clone()));

    let settings = BenchmarkSettings {
        machine,
        build: args.build_label(),
        ledger_path: args.results_file.clone(),
        gist_id,
    };
    let controller = BenchmarkController::new(settings, detect_environment(), remote);

    controller.pull_remote();

    if args.demo {
        controller
            .show_demo(wait_for_enter)
            .context("visual demonstration failed")?;
    }

    let (timings, scaling) = controller.measure().context("benchmark run failed")?;

    controller
        .record(Local::now().naive_local(), &timings, &scaling)
        .with_context(|| format!("failed to record results in {}", args.results_file.display()))?;

    Ok(())
}

fn prompt_machine_name() -> io::Result<String> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Ok("Unknown".to_string());
    }

    print!("Enter machine name (e.g., 'MacBook Pro M3'): ");
    io::stdout().flush()?;

    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    let name = line.trim();
    Ok(if name.is_empty() { "Unknown" } else { name }.to_string())
}

fn wait_for_enter() {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return;
    }

    print!("\nPress Enter to continue to benchmark...");
    if let Err(err) = io::stdout().flush() {
        warn!(error = %err, "could not flush prompt");
    }

    let mut line = String::new();
    if let Err(err) = stdin.lock().read_line(&mut line) {
        warn!(error = %err, "could not read from stdin");
    }
}
