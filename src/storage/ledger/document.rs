use crate::scenarios::ScenarioId;
use crate::storage::ledger::row::LedgerRow;

pub const TITLE: &str = "# Benchmark Results";

const DESCRIPTION_COLUMNS: [&str; 6] = ["Date", "Machine", "OS", "CPU", "Memory", "Compiler"];

pub const COLUMN_COUNT: usize = DESCRIPTION_COLUMNS.len() + ScenarioId::ALL.len();

#[must_use]
pub fn header() -> String {
    let titles: Vec<&str> = DESCRIPTION_COLUMNS
        .into_iter()
        .chain(ScenarioId::ALL.into_iter().map(ScenarioId::column_title))
        .collect();

    format!("| {} |", titles.join(" | "))
}

#[must_use]
pub fn separator() -> String {
    format!("|{}", "------|".repeat(COLUMN_COUNT))
}

/// The ledger as a list of recovered data rows.
///
/// Parsing is forgiving: title, header, separator and anything that is not a
/// complete data row are dropped and regenerated on [`render`](Self::render).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerDocument {
    rows: Vec<LedgerRow>,
}

impl LedgerDocument {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            rows: text.lines().filter_map(LedgerRow::parse).collect(),
        }
    }

    pub fn push(&mut self, row: LedgerRow) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    /// Header and separator plus one line per data row.
    #[must_use]
    pub fn table_rows(&self) -> usize {
        self.rows.len() + 2
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(TITLE);
        out.push_str("\n\n");
        out.push_str(&header());
        out.push('\n');
        out.push_str(&separator());
        out.push('\n');

        for row in &self.rows {
            out.push_str(row.as_str());
            out.push('\n');
        }

        out
    }
}

/// Counts lines that belong to the markdown table.
#[must_use]
pub fn count_table_rows(text: &str) -> usize {
    text.lines().filter(|line| line.starts_with('|')).count()
}
