use std::fmt::Write;

use crate::controllers::suite::runner::ScalingResult;
use crate::scenarios::timings::ScenarioTimings;
use crate::scenarios::ScenarioId;
use crate::storage::ledger::row::RunDescription;

const RULE_WIDTH: usize = 50;

/// Copy-paste summary printed after a suite run.
#[must_use]
pub fn render_report(
    description: &RunDescription,
    recorded_at: &str,
    timings: &ScenarioTimings,
    scaling: &[ScalingResult],
) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(out, "\n{rule}\nBENCHMARK RESULTS (Copy-Paste Format)\n{rule}");
    let _ = writeln!(out, "Machine: {}", description.machine);
    let _ = writeln!(out, "OS: {}", description.os);
    let _ = writeln!(out, "CPU: {}", description.cpu);
    let _ = writeln!(out, "Memory: {}", description.memory);
    let _ = writeln!(out, "Compiler: {}", description.build);
    let _ = writeln!(out, "Date: {recorded_at}");

    let _ = writeln!(out, "\nMandelbrot Benchmark Results:");
    for id in &ScenarioId::ALL[..4] {
        write_timing(&mut out, *id, timings);
    }
    for result in scaling {
        let _ = writeln!(
            out,
            "- Resolution {size}x{size}: {}",
            result.elapsed,
            size = result.size
        );
    }

    let _ = writeln!(out, "\nWaveFront Benchmark Results:");
    for id in &ScenarioId::ALL[4..] {
        write_timing(&mut out, *id, timings);
    }

    out
}

fn write_timing(out: &mut String, id: ScenarioId, timings: &ScenarioTimings) {
    let elapsed = timings
        .get(id)
        .map_or_else(|| "not run".to_string(), |elapsed| elapsed.to_string());

    let _ = writeln!(out, "- {} ({}): {elapsed}", id.display_name(), id.label());
}
