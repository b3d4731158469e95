use super::ChartSeries;
use log::warn;
use std::io::{self, Write};

/// Receives chart data. Rendering never affects the sweep outcome, so there
/// is nothing to return.
pub trait ChartSink {
    fn plot(&mut self, series: &ChartSeries);
}

/// Writes each series as one pretty-printed JSON document.
#[derive(Debug)]
pub struct JsonChartSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonChartSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_series(&mut self, series: &ChartSeries) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, series)?;
        writeln!(self.writer)?;
        self.writer.flush()
    }
}

impl<W: Write> ChartSink for JsonChartSink<W> {
    fn plot(&mut self, series: &ChartSeries) {
        if let Err(err) = self.write_series(series) {
            warn!("failed to hand off chart series: {err}");
        }
    }
}
