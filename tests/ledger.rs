use std::fs;
use std::time::Duration;

use chrono::NaiveDate;
use kernel_bench::{
    count_table_rows, Elapsed, Ledger, LedgerRow, RunDescription, ScenarioId, ScenarioTimings,
};

fn row(machine: &str) -> LedgerRow {
    let description = RunDescription {
        machine: machine.to_string(),
        os: "Linux 6.1".to_string(),
        cpu: "Test CPU".to_string(),
        memory: "4.0 GB".to_string(),
        build: "rustc release".to_string(),
    };
    let timings: ScenarioTimings = ScenarioId::ALL
        .into_iter()
        .map(|id| (id, Elapsed::from_duration(Duration::from_micros(1_234))))
        .collect();
    let recorded_at = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();

    LedgerRow::new(recorded_at, &description, &timings).unwrap()
}

#[test]
fn successive_runs_accumulate_rows() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("benchmark_results.md"));

    for machine in ["alpha", "beta", "gamma"] {
        ledger.append(row(machine)).unwrap();
    }

    let text = fs::read_to_string(ledger.path()).unwrap();
    assert_eq!(count_table_rows(&text), 5);
    let machines: Vec<&str> = text
        .lines()
        .filter(|line| line.contains(" ms |"))
        .filter_map(|line| line.split('|').nth(2))
        .map(str::trim)
        .collect();
    assert_eq!(machines, vec!["alpha", "beta", "gamma"]);
}

#[test]
fn corrupted_ledger_is_rebuilt_around_valid_rows() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("benchmark_results.md"));
    let surviving = row("survivor");
    fs::write(
        ledger.path(),
        format!(
            "# Benchmark Results\n\n| Date | Machine |\n|------|------|\n{}\n\\ No newline at end of file\n| cut off | 1.0 ms |\n\u{0}\u{0}\n",
            surviving.as_str()
        ),
    )
    .unwrap();

    ledger.append(row("fresh")).unwrap();

    let text = fs::read_to_string(ledger.path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "# Benchmark Results");
    assert_eq!(lines[1], "");
    assert!(lines[2].ends_with("| WaveFront 400x400 |"));
    assert!(lines[3].starts_with("|------|"));
    assert_eq!(lines[4], surviving.as_str());
    assert!(lines[5].contains("| fresh |"));
    assert_eq!(lines.len(), 6);
    assert!(!ledger.side_path().exists());
}

#[test]
fn unwritable_location_leaves_nothing_behind() {
    let dir = tempfile::tempdir().unwrap();
    let ledger = Ledger::new(dir.path().join("missing-dir").join("benchmark_results.md"));

    assert!(ledger.append(row("alpha")).is_err());
    assert!(!ledger.path().exists());
    assert!(!ledger.side_path().exists());
}
