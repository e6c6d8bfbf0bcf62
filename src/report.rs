//! Text and JSON rendering of simulation outcomes.
//!
//! The text report has three parts: a ruled title, the Gantt trace (process
//! ids over their start ticks) and a bordered schedule table with a footer
//! carrying the run averages and throughput.

use std::io::{self, Write};

use crate::error::ScheduleError;
use crate::scheduler::ScheduleOutcome;

const GANTT_CELL_WIDTH: usize = 8;

const TABLE_HEADER: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Writes the full text report for one outcome.
pub fn render<W: Write>(w: &mut W, outcome: &ScheduleOutcome) -> io::Result<()> {
    write_title(w, &outcome.title)?;
    write_gantt(w, outcome)?;
    write_schedule(w, outcome)
}

/// Writes all outcomes as one pretty-printed JSON array.
pub fn render_json<W: Write>(w: &mut W, outcomes: &[ScheduleOutcome]) -> Result<(), ScheduleError> {
    serde_json::to_writer_pretty(&mut *w, outcomes)?;
    writeln!(w)?;
    Ok(())
}

/// Writes the title between two dash rules.
pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

/// Writes the Gantt trace: one centred cell per slice, then the start ticks.
pub fn write_gantt<W: Write>(w: &mut W, outcome: &ScheduleOutcome) -> io::Result<()> {
    let slices = outcome.gantt.slices();

    writeln!(w, "Gantt schedule")?;
    write!(w, "|")?;
    for slice in slices {
        let pid = slice.process_id.to_string();
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    for (i, slice) in slices.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i + 1 == slices.len() {
            write!(w, "{}", slice.stop)?;
        }
    }
    write!(w, "\n\n")
}

/// Writes the schedule table with its summary footer.
pub fn write_schedule<W: Write>(w: &mut W, outcome: &ScheduleOutcome) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let mut table = TextTable::new(TABLE_HEADER.iter().map(|h| h.to_string()).collect());
    for row in &outcome.rows {
        table.push_row(vec![
            row.process_id.to_string(),
            row.priority.to_string(),
            row.burst_duration.to_string(),
            row.arrival_time.to_string(),
            row.waiting_time.to_string(),
            row.turnaround_time.to_string(),
            row.completion_time.to_string(),
        ]);
    }

    let summary = &outcome.summary;
    table.set_footer(vec![
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        format!("Average\n{:.2}", summary.average_wait),
        format!("Average\n{:.2}", summary.average_turnaround),
        format!("Throughput\n{:.2}/t", summary.throughput),
    ]);

    table.write_to(w)
}

/// Minimal bordered text table with optional multi-line footer cells.
#[derive(Debug, Clone)]
struct TextTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Vec<String>,
}

impl TextTable {
    fn new(header: Vec<String>) -> Self {
        Self {
            header,
            rows: Vec::new(),
            footer: Vec::new(),
        }
    }

    fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.header.len());
        self.rows.push(row);
    }

    fn set_footer(&mut self, footer: Vec<String>) {
        debug_assert_eq!(footer.len(), self.header.len());
        self.footer = footer;
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.header.len())
            .map(|col| {
                let body = self.rows.iter().map(|r| r[col].len());
                let foot = self
                    .footer
                    .get(col)
                    .into_iter()
                    .flat_map(|cell| cell.lines().map(str::len));
                body.chain(foot)
                    .chain(std::iter::once(self.header[col].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let widths = self.column_widths();
        let border = widths
            .iter()
            .fold(String::from("+"), |acc, width| {
                acc + &"-".repeat(width + 2) + "+"
            });

        writeln!(w, "{border}")?;
        write_line(w, &widths, |col, width| center(&self.header[col], width))?;
        writeln!(w, "{border}")?;

        for row in &self.rows {
            write_line(w, &widths, |col, width| format!("{:>width$}", row[col]))?;
        }

        if !self.footer.is_empty() {
            writeln!(w, "{border}")?;
            let height = self
                .footer
                .iter()
                .map(|cell| cell.lines().count())
                .max()
                .unwrap_or(0);
            for line in 0..height {
                write_line(w, &widths, |col, width| {
                    let text = self.footer[col].lines().nth(line).unwrap_or("");
                    format!("{text:>width$}")
                })?;
            }
        }

        writeln!(w, "{border}")
    }
}

fn write_line<W, F>(w: &mut W, widths: &[usize], cell: F) -> io::Result<()>
where
    W: Write,
    F: Fn(usize, usize) -> String,
{
    write!(w, "|")?;
    for (col, &width) in widths.iter().enumerate() {
        write!(w, " {} |", cell(col, width))?;
    }
    writeln!(w)
}

fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.len());
    let left = pad / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(pad - left))
}
