use std::process::Command;

use tracing::debug;

use crate::environment::{format_gigabytes, EnvironmentProbe, UNKNOWN};

/// Queries `sw_vers` and `sysctl`.
#[derive(Debug, Copy, Clone, Default)]
pub struct SysctlProbe;

impl EnvironmentProbe for SysctlProbe {
    fn os_label(&self) -> String {
        match first_line_of("sw_vers", &["-productVersion"]) {
            Some(version) => format!("macOS {version}"),
            None => "macOS".to_string(),
        }
    }

    fn cpu_label(&self) -> String {
        first_line_of("sysctl", &["-n", "machdep.cpu.brand_string"])
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    fn mem_label(&self) -> String {
        first_line_of("sysctl", &["-n", "hw.memsize"])
            .and_then(|text| parse_memsize(&text))
            .unwrap_or_else(|| UNKNOWN.to_string())
    }
}

/// `hw.memsize` is a byte count.
#[must_use]
pub fn parse_memsize(text: &str) -> Option<String> {
    text.trim().parse::<u64>().ok().map(format_gigabytes)
}

fn first_line_of(program: &str, args: &[&str]) -> Option<String> {
    let output = match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            debug!(program, status = %output.status, "probe command failed");
            return None;
        }
        Err(err) => {
            debug!(program, error = %err, "probe command unavailable");
            return None;
        }
    };

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}
