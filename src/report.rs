//! Per-stage decision tables.
//!
//! Every backward-pass stage yields one [`StageReport`]: a row per node with
//! the candidate aggregate through each next-stage node, the optimal value,
//! and the tied optimal successors. `Display` renders the classic
//! grid-bordered text table with centered cells.

use std::fmt;

use crate::config::{Combine, Objective};
use crate::utils::fmt_number;

/// The decision record for a single node.
#[derive(Debug, Clone, PartialEq)]
pub struct StageRow {
    pub node: String,
    /// Candidate aggregate per next-stage node, `None` where no edge exists.
    /// Runs parallel to [`StageReport::targets`].
    pub candidates: Vec<Option<f64>>,
    /// The optimal aggregate assigned to the node.
    pub best: f64,
    /// All tied optimal successors, in discovery order.
    pub chosen: Vec<String>,
}

/// The decision table for one stage transition.
#[derive(Debug, Clone, PartialEq)]
pub struct StageReport {
    /// 1-based stage number, as displayed in the title.
    pub stage: usize,
    pub objective: Objective,
    pub combine: Combine,
    /// Next-stage nodes in declared order; one candidate column each.
    pub targets: Vec<String>,
    pub rows: Vec<StageRow>,
}

impl StageReport {
    /// Table title, e.g. `Stage 2 (min, op=+)`.
    pub fn title(&self) -> String {
        format!(
            "Stage {} ({}, op={})",
            self.stage, self.objective, self.combine
        )
    }

    /// Column headers: `node`, one per target, then the value and choice
    /// columns.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = Vec::with_capacity(self.targets.len() + 3);
        headers.push("node".to_owned());
        headers.extend(self.targets.iter().cloned());
        headers.push("f* (node)".to_owned());
        headers.push("next*".to_owned());
        headers
    }

    fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let mut cells = Vec::with_capacity(self.targets.len() + 3);
                cells.push(row.node.clone());
                for candidate in &row.candidates {
                    cells.push(candidate.map(fmt_number).unwrap_or_default());
                }
                cells.push(fmt_number(row.best));
                cells.push(row.chosen.join(","));
                cells
            })
            .collect()
    }
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        f.write_str(&render_grid(&self.headers(), &self.cells()))
    }
}

/// Render a grid table: `+---+` frame, `+===+` under the header, one space of
/// padding around centered cell text (extra space on the right when the
/// padding is odd).
fn render_grid(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |fill: char| {
        let mut line = String::from("+");
        for &width in &widths {
            for _ in 0..width + 2 {
                line.push(fill);
            }
            line.push('+');
        }
        line
    };
    let data_line = |cells: &[String]| {
        let mut line = String::from("|");
        for (cell, &width) in cells.iter().zip(&widths) {
            let pad = width - cell.chars().count();
            let left = pad / 2;
            line.push(' ');
            for _ in 0..left {
                line.push(' ');
            }
            line.push_str(cell);
            for _ in 0..pad - left {
                line.push(' ');
            }
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&rule('-'));
    out.push('\n');
    out.push_str(&data_line(headers));
    out.push('\n');
    out.push_str(&rule('='));
    for row in rows {
        out.push('\n');
        out.push_str(&data_line(row));
        out.push('\n');
        out.push_str(&rule('-'));
    }
    out
}
