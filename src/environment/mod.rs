//! Host description for ledger rows: operating system, CPU and memory.

pub mod fallback;
pub mod linux;
pub mod macos;

/// Placeholder for any label the host does not expose.
pub const UNKNOWN: &str = "Unknown";

pub trait EnvironmentProbe {
    fn os_label(&self) -> String;
    fn cpu_label(&self) -> String;
    fn mem_label(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentLabels {
    pub os: String,
    pub cpu: String,
    pub memory: String,
}

impl EnvironmentLabels {
    #[must_use]
    pub fn collect(probe: &dyn EnvironmentProbe) -> Self {
        Self {
            os: probe.os_label(),
            cpu: probe.cpu_label(),
            memory: probe.mem_label(),
        }
    }
}

/// Probe for the platform this binary was built for.
#[must_use]
pub fn detect() -> Box<dyn EnvironmentProbe> {
    if cfg!(target_os = "linux") {
        Box::new(linux::ProcfsProbe::new())
    } else if cfg!(target_os = "macos") {
        Box::new(macos::SysctlProbe)
    } else {
        Box::new(fallback::UnknownProbe)
    }
}

/// Formats a byte count the way ledger rows show memory.
#[must_use]
pub fn format_gigabytes(bytes: u64) -> String {
    format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_gigabytes() {
        assert_eq!(format_gigabytes(16 * 1024 * 1024 * 1024), "16.0 GB");
        assert_eq!(format_gigabytes(1536 * 1024 * 1024), "1.5 GB");
    }

    #[test]
    fn test_collect_uses_probe() {
        let labels = EnvironmentLabels::collect(&fallback::UnknownProbe);

        assert_eq!(labels.os, UNKNOWN);
        assert_eq!(labels.cpu, UNKNOWN);
        assert_eq!(labels.memory, UNKNOWN);
    }
}
