use chrono::NaiveDateTime;

use crate::scenarios::timings::ScenarioTimings;
use crate::scenarios::ScenarioId;
use crate::storage::ledger::document::COLUMN_COUNT;
use crate::storage::ledger::errors::LedgerError;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Labels that describe where and how a suite ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDescription {
    pub machine: String,
    pub os: String,
    pub cpu: String,
    pub memory: String,
    pub build: String,
}

/// One rendered data row of the ledger table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow(String);

impl LedgerRow {
    /// Every scenario must have a timing; the row is rejected otherwise.
    pub fn new(
        recorded_at: NaiveDateTime,
        description: &RunDescription,
        timings: &ScenarioTimings,
    ) -> Result<Self, LedgerError> {
        let mut cells = vec![
            recorded_at.format(DATE_FORMAT).to_string(),
            table_safe(&description.machine),
            table_safe(&description.os),
            table_safe(&description.cpu),
            table_safe(&description.memory),
            table_safe(&description.build),
        ];

        for id in ScenarioId::ALL {
            let elapsed = timings.get(id).ok_or(LedgerError::MissingTiming(id))?;
            cells.push(format!("{:.3} ms", elapsed.as_millis_f64()));
        }

        Ok(Self(format!("| {} |", cells.join(" | "))))
    }

    /// Accepts a line read back from a ledger if it looks like a complete
    /// data row.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end();

        if !is_data_row(line) || cell_count(line) != COLUMN_COUNT {
            return None;
        }

        Some(Self(line.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[must_use]
pub fn is_data_row(line: &str) -> bool {
    line.starts_with('|') && line.contains(" ms |")
}

fn cell_count(line: &str) -> usize {
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').count()
}

fn table_safe(label: &str) -> String {
    let cleaned: String = label
        .chars()
        .map(|c| match c {
            '|' => '/',
            '\n' | '\r' | '\t' => ' ',
            other => other,
        })
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        "Unknown".to_string()
    } else {
        cleaned.to_string()
    }
}
