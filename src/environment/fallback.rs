use crate::environment::{EnvironmentProbe, UNKNOWN};

/// Used on platforms without a dedicated probe.
#[derive(Debug, Copy, Clone, Default)]
pub struct UnknownProbe;

impl EnvironmentProbe for UnknownProbe {
    fn os_label(&self) -> String {
        UNKNOWN.to_string()
    }

    fn cpu_label(&self) -> String {
        UNKNOWN.to_string()
    }

    fn mem_label(&self) -> String {
        UNKNOWN.to_string()
    }
}
