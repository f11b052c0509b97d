//! MNIST digit sample conversion
//!
//! Reads labeled 28x28 samples from a local CSV (label first, then 784
//! pixel values in 0..=255), normalizes pixels to [0, 1] and writes each
//! sample as a `.mem` file in the same bit-string encoding as the
//! network weights.

use std::path::Path;

use crate::encoding::encode_f32;
use crate::materialize::{ensure_dir, write_mem_file};
use crate::{Error, Result};

/// Pixels per 28x28 sample
pub const PIXELS: usize = 784;

/// Subdirectory holding per-sample digit files
pub const DIGITS_DIR: &str = "Digits_folder";

/// One labeled image sample, pixels normalized to [0, 1]
#[derive(Debug, Clone)]
pub struct DigitSample {
    pub label: String,
    pub pixels: Vec<f32>,
}

/// Load up to `limit` samples from a CSV file.
///
/// Expected row format: `label,p0,p1,...,p783` with pixel values in
/// 0..=255. A header row is tolerated. Rows with the wrong pixel count
/// are fatal.
pub fn load_samples(path: &Path, limit: usize) -> Result<Vec<DigitSample>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut samples = Vec::new();
    for (index, record) in reader.records().enumerate() {
        if samples.len() >= limit {
            break;
        }
        let record = record?;
        // only a fully non-numeric first row is a header; a numeric first
        // row with the wrong field count is malformed data
        if index == 0 && is_header(&record) {
            continue;
        }
        samples.push(parse_record(&record)?);
    }

    tracing::info!("Loaded {} digit samples from {}", samples.len(), path.display());
    Ok(samples)
}

fn is_header(record: &csv::StringRecord) -> bool {
    record
        .iter()
        .all(|field| field.trim().parse::<f32>().is_err())
}

fn parse_record(record: &csv::StringRecord) -> Result<DigitSample> {
    if record.len() != PIXELS + 1 {
        return Err(Error::MalformedInput(format!(
            "expected {} fields per sample (label + {} pixels), got {}",
            PIXELS + 1,
            PIXELS,
            record.len()
        )));
    }
    let label = record[0].trim().to_string();
    let pixels = record
        .iter()
        .skip(1)
        .map(|field| {
            field
                .trim()
                .parse::<f32>()
                .map(|raw| raw / 255.0)
                .map_err(|_| Error::MalformedInput(format!("not a pixel value: {:?}", field)))
        })
        .collect::<Result<Vec<f32>>>()?;
    Ok(DigitSample { label, pixels })
}

/// Write each sample as `Digits_folder/Digit_<index>_<label>.mem`,
/// one encoded pixel per line.
pub fn write_samples(base: &Path, samples: &[DigitSample]) -> Result<()> {
    ensure_dir(base)?;
    let digits_dir = base.join(DIGITS_DIR);
    ensure_dir(&digits_dir)?;

    for (index, sample) in samples.iter().enumerate() {
        let path = digits_dir.join(format!("Digit_{}_{}.mem", index, sample.label));
        let lines: Vec<String> = sample.pixels.iter().map(|&p| encode_f32(p)).collect();
        write_mem_file(&path, lines.iter())?;
        tracing::debug!("Wrote sample {} (label {})", index, sample.label);
    }

    tracing::info!("Wrote {} digit files to {}", samples.len(), base.display());
    Ok(())
}
