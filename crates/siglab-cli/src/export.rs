use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use siglab::{Histogram, SignalBuffer};

use crate::config::LabConfig;

/// One `(index, value)` sample pair of a stage buffer.
#[derive(Debug, Clone, Serialize)]
pub struct SampleRow {
    pub index: usize,
    pub value: f64,
}

/// One `(bin, probability)` pair of a histogram, using the original
/// probability-table column names.
#[derive(Debug, Clone, Serialize)]
pub struct ProbabilityRow {
    #[serde(rename = "Bin")]
    pub bin: f64,
    #[serde(rename = "Probability")]
    pub probability: f64,
}

/// Entropy report for the inspected stage, echoing the driving config.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub config: LabConfig,
    pub stage: String,
    pub bins_emitted: usize,
    pub bin_width: f64,
    pub entropy_bits: f64,
}

pub fn write_samples_csv(path: &Path, buffer: &SignalBuffer) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open CSV path {}", path.display()))?;

    for (index, &value) in buffer.samples().iter().enumerate() {
        writer.serialize(SampleRow { index, value })?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_probability_csv(path: &Path, histogram: &Histogram) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to open CSV path {}", path.display()))?;

    for (&bin, &probability) in histogram.edges().iter().zip(histogram.mass()) {
        writer.serialize(ProbabilityRow { bin, probability })?;
    }

    writer.flush()?;
    Ok(())
}

pub fn write_summary_json(path: &Path, summary: &RunSummary) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_string_pretty(summary)?;
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_probability_csv, ProbabilityRow, SampleRow};
    use siglab::{Histogram, SignalBuffer};

    #[test]
    fn probability_rows_use_the_table_column_names() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .serialize(ProbabilityRow {
                bin: 0.5,
                probability: 0.25,
            })
            .unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(text.starts_with("Bin,Probability\n"));
    }

    #[test]
    fn sample_rows_pair_index_and_value() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(SampleRow { index: 3, value: -1.5 }).unwrap();
        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert!(text.starts_with("index,value\n"));
        assert!(text.contains("3,-1.5"));
    }

    #[test]
    fn probability_csv_has_one_row_per_bin() {
        let buffer = SignalBuffer::from_samples(vec![0.0, 10.0]);
        let histogram = Histogram::from_buffer(&buffer, 5).unwrap();

        let path = std::env::temp_dir().join(format!("siglab_prob_{}.csv", std::process::id()));
        write_probability_csv(&path, &histogram).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let rows = text.lines().count();
        assert_eq!(rows, histogram.len() + 1); // header + bins
        std::fs::remove_file(&path).ok();
    }
}
