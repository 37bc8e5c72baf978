use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::environment::{format_gigabytes, EnvironmentProbe, UNKNOWN};

/// Reads host details from procfs under `root` (normally `/`).
#[derive(Debug, Clone)]
pub struct ProcfsProbe {
    root: PathBuf,
}

impl ProcfsProbe {
    #[must_use]
    pub fn new() -> Self {
        Self::with_root("/")
    }

    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read(&self, relative: &str) -> Option<String> {
        let path = self.root.join(relative);
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) => {
                debug!(path = %path.display(), error = %err, "procfs entry unavailable");
                None
            }
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for ProcfsProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvironmentProbe for ProcfsProbe {
    fn os_label(&self) -> String {
        match self.read("proc/sys/kernel/osrelease") {
            Some(release) if !release.trim().is_empty() => format!("Linux {}", release.trim()),
            _ => "Linux".to_string(),
        }
    }

    fn cpu_label(&self) -> String {
        self.read("proc/cpuinfo")
            .and_then(|text| parse_cpu_model(&text))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn mem_label(&self) -> String {
        self.read("proc/meminfo")
            .and_then(|text| parse_mem_total(&text))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// First `model name` entry of `/proc/cpuinfo`.
#[must_use]
pub fn parse_cpu_model(cpuinfo: &str) -> Option<String> {
    cpuinfo
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim() == "model name")
        .map(|(_, value)| value.trim().to_string())
        .filter(|model| !model.is_empty())
}

/// `MemTotal` of `/proc/meminfo`, which is given in kB.
#[must_use]
pub fn parse_mem_total(meminfo: &str) -> Option<String> {
    let line = meminfo.lines().find(|line| line.starts_with("MemTotal:"))?;
    let kilobytes: u64 = line.split_whitespace().nth(1)?.parse().ok()?;

    Some(format_gigabytes(kilobytes * 1024))
}
