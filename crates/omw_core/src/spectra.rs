//! Minimal peak-list handling for the raw-data viewer and demo workflows.
//!
//! The accepted format is plain text: one `m/z intensity` pair per line,
//! separated by tabs or spaces. Blank lines and `#` comments are skipped.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Errors from reading or parsing a peak list.
#[derive(Error, Debug)]
pub enum SpectraError {
    #[error("Line {line_no}: expected 'm/z intensity', got '{content}'")]
    ParseLine { line_no: usize, content: String },

    #[error("Failed to read peak list: {0}")]
    Io(#[from] io::Error),
}

/// Result type for peak-list operations.
pub type SpectraResult<T> = Result<T, SpectraError>;

/// A single centroided peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub mz: f64,
    pub intensity: f64,
}

/// Parse a peak list from text.
pub fn parse_peak_list(text: &str) -> SpectraResult<Vec<Peak>> {
    let mut peaks = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let peak = fields
            .next()
            .zip(fields.next())
            .and_then(|(mz, intensity)| {
                Some(Peak {
                    mz: mz.parse().ok()?,
                    intensity: intensity.parse().ok()?,
                })
            });

        match peak {
            Some(peak) => peaks.push(peak),
            None => {
                return Err(SpectraError::ParseLine {
                    line_no: idx + 1,
                    content: line.to_string(),
                })
            }
        }
    }

    Ok(peaks)
}

/// Read and parse a peak-list file.
pub fn read_peak_file(path: &Path) -> SpectraResult<Vec<Peak>> {
    let text = fs::read_to_string(path)?;
    parse_peak_list(&text)
}

/// Keep peaks at or above the intensity threshold.
pub fn filter_by_intensity(peaks: &[Peak], threshold: f64) -> Vec<Peak> {
    peaks
        .iter()
        .copied()
        .filter(|peak| peak.intensity >= threshold)
        .collect()
}

/// Aggregate statistics over a spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumSummary {
    pub peak_count: usize,
    pub min_mz: f64,
    pub max_mz: f64,
    pub total_intensity: f64,
    pub base_peak_mz: f64,
    pub base_peak_intensity: f64,
}

impl SpectrumSummary {
    /// Summarize a spectrum; `None` for an empty peak list.
    pub fn from_peaks(peaks: &[Peak]) -> Option<Self> {
        let first = peaks.first()?;

        let mut summary = Self {
            peak_count: peaks.len(),
            min_mz: first.mz,
            max_mz: first.mz,
            total_intensity: 0.0,
            base_peak_mz: first.mz,
            base_peak_intensity: first.intensity,
        };

        for peak in peaks {
            summary.min_mz = summary.min_mz.min(peak.mz);
            summary.max_mz = summary.max_mz.max(peak.mz);
            summary.total_intensity += peak.intensity;
            if peak.intensity > summary.base_peak_intensity {
                summary.base_peak_mz = peak.mz;
                summary.base_peak_intensity = peak.intensity;
            }
        }

        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "\
# m/z intensity
100.5\t2000.0
200.25 500.0

300.0\t8000.0
";

    #[test]
    fn parses_peaks_skipping_comments_and_blanks() {
        let peaks = parse_peak_list(SAMPLE).unwrap();
        assert_eq!(peaks.len(), 3);
        assert_eq!(peaks[0].mz, 100.5);
        assert_eq!(peaks[1].intensity, 500.0);
    }

    #[test]
    fn parse_error_carries_line_number() {
        let result = parse_peak_list("100.0\t1.0\nnot-a-peak\n");
        match result {
            Err(SpectraError::ParseLine { line_no, content }) => {
                assert_eq!(line_no, 2);
                assert_eq!(content, "not-a-peak");
            }
            other => panic!("expected ParseLine, got {:?}", other),
        }
    }

    #[test]
    fn missing_intensity_is_an_error() {
        assert!(parse_peak_list("100.0\n").is_err());
    }

    #[test]
    fn summary_statistics() {
        let peaks = parse_peak_list(SAMPLE).unwrap();
        let summary = SpectrumSummary::from_peaks(&peaks).unwrap();
        assert_eq!(summary.peak_count, 3);
        assert_eq!(summary.min_mz, 100.5);
        assert_eq!(summary.max_mz, 300.0);
        assert_eq!(summary.total_intensity, 10500.0);
        assert_eq!(summary.base_peak_mz, 300.0);
    }

    #[test]
    fn empty_spectrum_has_no_summary() {
        assert!(SpectrumSummary::from_peaks(&[]).is_none());
    }

    #[test]
    fn intensity_filter_keeps_threshold() {
        let peaks = parse_peak_list(SAMPLE).unwrap();
        let kept = filter_by_intensity(&peaks, 2000.0);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn reads_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("peaks.tsv");
        fs::write(&path, SAMPLE).unwrap();

        let peaks = read_peak_file(&path).unwrap();
        assert_eq!(peaks.len(), 3);
    }
}
