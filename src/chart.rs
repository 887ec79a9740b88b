use crate::error::LxResult;
use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, CellAlignment, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// A bar chart handed to a [`ChartRenderer`]. Bars appear in `labels` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub values: Vec<usize>,
    /// Tick labels are long enough to need rotating.
    pub rotate_labels: bool,
    /// Width and height hint, in inches.
    pub figure_size: (f32, f32),
}

impl ChartRequest {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn bars(&self) -> impl Iterator<Item = (&str, usize)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Receives chart requests from the counting operations.
pub trait ChartRenderer {
    fn render(&mut self, request: &ChartRequest) -> LxResult<()>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &mut R {
    fn render(&mut self, request: &ChartRequest) -> LxResult<()> {
        (**self).render(request)
    }
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for Box<R> {
    fn render(&mut self, request: &ChartRequest) -> LxResult<()> {
        (**self).render(request)
    }
}

/// Drops every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoChart;

impl ChartRenderer for NoChart {
    fn render(&mut self, _request: &ChartRequest) -> LxResult<()> {
        Ok(())
    }
}

/// Keeps every request in memory, in arrival order.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub requests: Vec<ChartRequest>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&ChartRequest> {
        self.requests.last()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, request: &ChartRequest) -> LxResult<()> {
        self.requests.push(request.clone());
        Ok(())
    }
}

/// Writes each request as a single JSON line for an external plotting tool.
pub struct JsonChartWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonChartWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChartRenderer for JsonChartWriter<W> {
    fn render(&mut self, request: &ChartRequest) -> LxResult<()> {
        serde_json::to_writer(&mut self.out, request)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Horizontal bar chart drawn with block characters.
pub struct TerminalChart<W: Write> {
    out: W,
    bar_width: usize,
}

impl<W: Write> TerminalChart<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width.max(1);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Length of the bar for `value`, where `max` spans the full `width`.
/// Non-zero values always get at least one block.
pub fn bar_length(value: usize, max: usize, width: usize) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    (value.saturating_mul(width) / max).max(1)
}

impl<W: Write> ChartRenderer for TerminalChart<W> {
    fn render(&mut self, request: &ChartRequest) -> LxResult<()> {
        writeln!(self.out, "\n{}", request.title)?;
        if request.is_empty() {
            writeln!(self.out, "(no data)")?;
            self.out.flush()?;
            return Ok(());
        }

        let max = request.values.iter().copied().max().unwrap_or(0);
        let mut table = Table::new();
        table.load_preset(NOTHING);
        table.set_header(vec![
            Cell::new(&request.x_label).add_attribute(Attribute::Bold),
            Cell::new(&request.y_label).add_attribute(Attribute::Bold),
            Cell::new(""),
        ]);

        for (label, value) in request.bars() {
            let bar = "█".repeat(bar_length(value, max, self.bar_width));
            table.add_row(vec![
                Cell::new(label),
                Cell::new(value).set_alignment(CellAlignment::Right),
                Cell::new(bar),
            ]);
        }
        writeln!(self.out, "{}", table)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_length_scaling() {
        assert_eq!(bar_length(10, 10, 40), 40);
        assert_eq!(bar_length(5, 10, 40), 20);
        assert_eq!(bar_length(1, 1000, 40), 1);
        assert_eq!(bar_length(0, 10, 40), 0);
        assert_eq!(bar_length(3, 0, 40), 0);
    }
}
