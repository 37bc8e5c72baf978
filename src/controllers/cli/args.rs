use std::path::PathBuf;

use clap::Parser;

use crate::storage::ledger::writer::DEFAULT_LEDGER_FILE;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "kernel-bench",
    version,
    about = "Times an escape-time fractal renderer and a wavefront path planner"
)]
pub struct CliArgs {
    /// Machine label for the ledger row; prompted for when omitted.
    #[arg(long)]
    pub machine: Option<String>,

    #[arg(long, default_value = DEFAULT_LEDGER_FILE)]
    pub results_file: PathBuf,

    /// Gist holding the shared ledger. A new one is created on first upload.
    #[arg(long)]
    pub gist_id: Option<String>,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Skip all gist traffic, both download and upload.
    #[arg(long)]
    pub no_upload: bool,

    /// Show the animated visualisations before benchmarking.
    #[arg(long)]
    pub demo: bool,

    /// Compiler column of the ledger row.
    #[arg(long)]
    pub build_label: Option<String>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    #[must_use]
    pub fn build_label(&self) -> String {
        self.build_label.clone().unwrap_or_else(default_build_label)
    }
}

#[must_use]
pub fn default_build_label() -> String {
    if cfg!(debug_assertions) {
        "rustc debug".to_string()
    } else {
        "rustc release".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::try_parse_from(["kernel-bench"]).unwrap();

        assert_eq!(args.results_file, PathBuf::from(DEFAULT_LEDGER_FILE));
        assert!(!args.no_upload);
        assert!(!args.demo);
        assert_eq!(args.build_label(), default_build_label());
    }

    #[test]
    fn test_all_flags() {
        let args = CliArgs::try_parse_from([
            "kernel-bench",
            "--machine",
            "bench box",
            "--results-file",
            "out.md",
            "--gist-id",
            "abc",
            "--github-token",
            "tok",
            "--no-upload",
            "--demo",
            "--build-label",
            "rustc 1.80 -O",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.machine.as_deref(), Some("bench box"));
        assert_eq!(args.results_file, PathBuf::from("out.md"));
        assert_eq!(args.gist_id.as_deref(), Some("abc"));
        assert_eq!(args.github_token.as_deref(), Some("tok"));
        assert!(args.no_upload && args.demo && args.verbose);
        assert_eq!(args.build_label(), "rustc 1.80 -O");
    }
}
