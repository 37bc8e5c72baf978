use std::path::PathBuf;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{info, warn};

use crate::controllers::suite::demo::run_demo;
use crate::controllers::suite::errors::SuiteError;
use crate::controllers::suite::report::render_report;
use crate::controllers::suite::runner::{run_default_resolution_scaling, run_suite, ScalingResult};
use crate::core::ports::pacer::ThreadSleepPacer;
use crate::environment::{EnvironmentLabels, EnvironmentProbe};
use crate::presenters::terminal::ansi_terminal::AnsiTerminalSink;
use crate::scenarios::timings::ScenarioTimings;
use crate::storage::ledger::errors::LedgerError;
use crate::storage::ledger::row::{LedgerRow, RunDescription, DATE_FORMAT};
use crate::storage::ledger::writer::{Ledger, DEFAULT_LEDGER_FILE};
use crate::sync::gist::{GistId, Published, RemoteSync};

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("benchmark scenario failed")]
    Suite(#[from] SuiteError),
    #[error("could not record results")]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkSettings {
    pub machine: String,
    pub build: String,
    pub ledger_path: PathBuf,
    pub gist_id: Option<GistId>,
}

/// Drives one benchmark session: optional download, suite, ledger, upload.
///
/// `remote` is `None` when gist traffic is disabled.
pub struct BenchmarkController<R: RemoteSync> {
    settings: BenchmarkSettings,
    probe: Box<dyn EnvironmentProbe>,
    remote: Option<R>,
}

impl<R: RemoteSync> BenchmarkController<R> {
    #[must_use]
    pub fn new(
        settings: BenchmarkSettings,
        probe: Box<dyn EnvironmentProbe>,
        remote: Option<R>,
    ) -> Self {
        Self {
            settings,
            probe,
            remote,
        }
    }

    #[must_use]
    pub fn ledger(&self) -> Ledger {
        Ledger::new(self.settings.ledger_path.clone())
    }

    fn ledger_file_name(&self) -> String {
        self.settings
            .ledger_path
            .file_name()
            .map_or_else(
                || DEFAULT_LEDGER_FILE.to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
    }

    /// Replaces the local ledger with the published one, if there is one.
    /// Any failure leaves the local ledger as it was.
    pub fn pull_remote(&self) {
        let (Some(remote), Some(id)) = (&self.remote, &self.settings.gist_id) else {
            return;
        };

        println!("Downloading existing results from gist {id}...");
        let content = match remote.fetch(id, &self.ledger_file_name()) {
            Ok(content) => content,
            Err(err) => {
                warn!(gist = %id, error = %err, "could not download ledger, keeping local copy");
                return;
            }
        };

        match self.ledger().install(&content) {
            Ok(document) => {
                println!("Downloaded {} previous result(s).", document.rows().len());
            }
            Err(err) => {
                warn!(error = %err, "could not store downloaded ledger, keeping local copy");
            }
        }
    }

    /// Animated visualisations on stdout; `between` runs after the fractal.
    pub fn show_demo(&self, between: impl FnMut()) -> Result<(), BenchmarkError> {
        let mut sink = AnsiTerminalSink::stdout();
        run_demo(&mut sink, &mut ThreadSleepPacer, between)?;
        Ok(())
    }

    /// Runs the ledger scenarios and the resolution scaling sweep.
    pub fn measure(&self) -> Result<(ScenarioTimings, Vec<ScalingResult>), BenchmarkError> {
        println!("\nRunning benchmarks...");

        let timings = run_suite(|id, elapsed| {
            println!("{} ({}) - Time: {elapsed}", id.display_name(), id.label());
        })?;

        println!("\nResolution scaling test:");
        let scaling = run_default_resolution_scaling(|result| {
            println!(
                "{size}x{size} resolution - Time: {}",
                result.elapsed,
                size = result.size
            );
        })?;

        Ok((timings, scaling))
    }

    #[must_use]
    pub fn describe(&self) -> RunDescription {
        let labels = EnvironmentLabels::collect(self.probe.as_ref());

        RunDescription {
            machine: self.settings.machine.clone(),
            os: labels.os,
            cpu: labels.cpu,
            memory: labels.memory,
            build: self.settings.build.clone(),
        }
    }

    /// Prints the report, appends the ledger row and publishes the ledger.
    ///
    /// Returns the publication when an upload happened.
    pub fn record(
        &self,
        recorded_at: NaiveDateTime,
        timings: &ScenarioTimings,
        scaling: &[ScalingResult],
    ) -> Result<Option<Published>, BenchmarkError> {
        let description = self.describe();
        let date = recorded_at.format(DATE_FORMAT).to_string();

        print!("{}", render_report(&description, &date, timings, scaling));

        let row = LedgerRow::new(recorded_at, &description, timings)?;
        let ledger = self.ledger();
        let document = ledger.append(row)?;

        info!(
            path = %ledger.path().display(),
            rows = document.rows().len(),
            "results recorded"
        );
        println!("\nBenchmark completed!");
        println!("Results saved to {}", ledger.path().display());

        Ok(self.push_remote(&ledger))
    }

    fn push_remote(&self, ledger: &Ledger) -> Option<Published> {
        let remote = self.remote.as_ref()?;

        let content = match ledger.read_raw() {
            Ok(Some(content)) => content,
            Ok(None) => {
                warn!(path = %ledger.path().display(), "ledger vanished before upload");
                return None;
            }
            Err(err) => {
                warn!(error = %err, "could not read ledger for upload");
                return None;
            }
        };

        println!("\nUploading results to GitHub Gist...");
        match remote.publish(
            self.settings.gist_id.as_ref(),
            &self.ledger_file_name(),
            &content,
        ) {
            Ok(published) => {
                println!("Upload successful!");
                if published.created {
                    print_new_gist_banner(&published);
                }
                Some(published)
            }
            Err(err) => {
                warn!(error = %err, "gist upload failed");
                println!("Upload failed. Results are still saved locally.");
                None
            }
        }
    }
}

fn print_new_gist_banner(published: &Published) {
    let rule = "=".repeat(50);

    println!("\n{rule}");
    println!("GIST ID FOR OTHER MACHINES: {}", published.id);
    if let Some(url) = &published.html_url {
        println!("URL: {url}");
    }
    println!("Pass --gist-id {} on other computers!", published.id);
    println!("{rule}");
}
