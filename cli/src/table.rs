//! Markdown pipe tables for terminal reports.

use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct PipeTable {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl PipeTable {
    pub fn new(columns: &[(&str, Align)]) -> Self {
        Self {
            headers: columns.iter().map(|(h, _)| h.to_string()).collect(),
            aligns: columns.iter().map(|&(_, a)| a).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }
        widths
    }

    fn write_line<W: Write>(&self, w: &mut W, cells: &[String], widths: &[usize]) -> io::Result<()> {
        write!(w, "|")?;
        for ((cell, &width), align) in cells.iter().zip(widths).zip(&self.aligns) {
            match align {
                Align::Left => write!(w, " {cell:<width$} |")?,
                Align::Right => write!(w, " {cell:>width$} |")?,
            }
        }
        writeln!(w)
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let widths = self.widths();
        self.write_line(w, &self.headers, &widths)?;

        write!(w, "|")?;
        for (&width, align) in widths.iter().zip(&self.aligns) {
            let dashes = "-".repeat(width + 1);
            match align {
                Align::Left => write!(w, ":{dashes}|")?,
                Align::Right => write!(w, "{dashes}:|")?,
            }
        }
        writeln!(w)?;

        for row in &self.rows {
            self.write_line(w, row, &widths)?;
        }
        Ok(())
    }
}
