//! Audit trail for bump cascades
//!
//! One row per propagated change, appended in propagation (pre)order. The
//! table never dedups or reorders; callers render whatever prefix of the
//! cascade completed.

use crate::version::ReleaseType;

/// Parent module a dependent's range was updated for
#[derive(Debug, Clone, PartialEq)]
pub struct ParentRef {
    pub name: String,
    pub version: String,
}

/// One propagated change
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRow {
    pub action: ReleaseType,
    pub module: String,
    pub version: String,
    /// None for the cascade root, which has no parent to report
    pub reference: Option<ParentRef>,
}

/// Append-only accumulator of audit rows
#[derive(Debug, Default)]
pub struct AuditTable {
    rows: Vec<AuditRow>,
}

const HEADERS: [&str; 4] = ["update", "module", "version", "ref updated"];

impl AuditTable {
    pub fn push(&mut self, row: AuditRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[AuditRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render as fixed-column text: `update | module | version | ref updated`
    pub fn render(&self) -> String {
        let cells: Vec<[String; 4]> = self.rows.iter().map(row_cells).collect();

        let mut widths: [usize; 4] = [0; 4];
        for (i, header) in HEADERS.iter().enumerate() {
            widths[i] = header.len();
        }
        for row in &cells {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }

        let mut out = String::new();
        render_line(&mut out, &HEADERS.map(str::to_string), &widths);
        for row in &cells {
            render_line(&mut out, row, &widths);
        }
        out
    }
}

fn row_cells(row: &AuditRow) -> [String; 4] {
    [
        row.action.as_str().to_uppercase(),
        row.module.clone(),
        row.version.clone(),
        row.reference
            .as_ref()
            .map(|r| format!("{} ({})", r.name, r.version))
            .unwrap_or_default(),
    ]
}

fn render_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
