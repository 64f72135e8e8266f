//! src/chart.rs
use crate::configuration::ChartSettings;
use crate::error::PresentationError;
use crate::frequency::WordFrequency;
use std::io::Write;

/// Labels and values of a bar chart, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl BarChart {
    pub fn new(settings: &ChartSettings, top: &[WordFrequency]) -> Self {
        let (labels, values): (Vec<String>, Vec<u64>) =
            top.iter().map(|f| (f.word.clone(), f.count)).unzip();
        Self {
            title: settings.title.clone(),
            x_label: settings.x_label.clone(),
            y_label: settings.y_label.clone(),
            labels,
            values,
        }
    }

    pub fn bars(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

pub trait ChartRenderer {
    fn render(&mut self, chart: &BarChart) -> Result<(), PresentationError>;
}

/// Draws horizontal `#` bars, scaled so the largest value spans `bar_width`
/// columns.
pub struct TerminalChart<W: Write> {
    writer: W,
    bar_width: usize,
}

impl TerminalChart<std::io::Stdout> {
    pub fn stdout(bar_width: usize) -> Self {
        Self::new(std::io::stdout(), bar_width)
    }
}

impl<W: Write> TerminalChart<W> {
    pub fn new(writer: W, bar_width: usize) -> Self {
        Self { writer, bar_width }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn bar_length(&self, value: u64, max: u64) -> usize {
        if value == 0 || max == 0 {
            return 0;
        }
        let scaled = (value as u128 * self.bar_width as u128).div_ceil(max as u128);
        usize::try_from(scaled).unwrap_or(self.bar_width).max(1)
    }
}

impl<W: Write> ChartRenderer for TerminalChart<W> {
    #[tracing::instrument(name = "Render chart", skip_all, fields(bars = chart.labels.len()))]
    fn render(&mut self, chart: &BarChart) -> Result<(), PresentationError> {
        let label_width = chart
            .labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(chart.x_label.chars().count()))
            .max()
            .unwrap_or_default();
        let max = chart.values.iter().copied().max().unwrap_or_default();

        writeln!(self.writer, "{}", chart.title)?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{:<label_width$} | {}",
            chart.x_label, chart.y_label
        )?;
        writeln!(
            self.writer,
            "{}-+-{}",
            "-".repeat(label_width),
            "-".repeat(self.bar_width.max(chart.y_label.chars().count()))
        )?;
        for (label, value) in chart.bars() {
            let bar = "#".repeat(self.bar_length(value, max));
            writeln!(self.writer, "{label:<label_width$} | {bar} {value}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
