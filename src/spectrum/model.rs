use serde::Serialize;

use crate::error::SpectrumError;
use crate::spectrum::processor;

/// Minimum spectrum width.  Shorter raw histograms are right-padded with
/// zero-count bins so the derived columns always cover at least this range.
pub const MIN_BINS: usize = 10;

// ---------------------------------------------------------------------------
// SpectrumBin – one bin of the processed spectrum
// ---------------------------------------------------------------------------

/// A single multiplicity bin with its derived columns.
///
/// `relative_error` is NaN when `count` is zero (0/0); callers treat
/// non-finite cells as "undefined", not as a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumBin {
    /// Multiplicity k, also the bin index.
    pub bin: usize,
    /// Observed event count N_k.
    pub count: f64,
    /// Absolute counting error of `count`.
    pub count_error: f64,
    /// `count` normalized so the column sums to 1.
    pub probability: f64,
    /// Absolute error of `probability`.
    pub probability_error: f64,
    /// `count_error / count`.
    pub relative_error: f64,
}

// ---------------------------------------------------------------------------
// Moments – scalar quantities of the whole spectrum
// ---------------------------------------------------------------------------

/// First two moments of the multiplicity distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Expected multiplicity (count-weighted average bin index).
    pub mean: f64,
    /// Statistical error of `mean`.
    pub mean_error: f64,
    /// Second central moment.  No propagated error is computed for it.
    pub variance: f64,
}

// ---------------------------------------------------------------------------
// SpectrumRow – one row of the exported table
// ---------------------------------------------------------------------------

/// The nine-column row view used by the read interface and the CSV export.
///
/// `mean`, `mean_error` and `variance` are single scalars repeated on every
/// row; the flat table format has no other place to put them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpectrumRow {
    pub bin: usize,
    pub count: f64,
    pub count_error: f64,
    pub probability: f64,
    pub probability_error: f64,
    pub relative_error: f64,
    pub mean: f64,
    pub mean_error: f64,
    pub variance: f64,
}

// ---------------------------------------------------------------------------
// Spectrum – the complete processed histogram
// ---------------------------------------------------------------------------

/// A processed neutron-multiplicity spectrum.
///
/// Built once from a raw count array; every derived column is computed
/// eagerly at construction, in dependency order, and only read afterwards.
#[derive(Debug, Clone)]
pub struct Spectrum {
    bins: Vec<SpectrumBin>,
    moments: Moments,
}

impl Spectrum {
    /// Derive all columns from a raw count histogram.
    ///
    /// Input shorter than [`MIN_BINS`] is right-padded with zero-count bins.
    /// Fails if any value is NaN or infinite.  Negative counts are an
    /// accepted input-quality assumption: they are carried through the
    /// formulas unvalidated and surface as NaN errors downstream.
    pub fn from_counts(raw: &[f64]) -> Result<Self, SpectrumError> {
        if let Some(index) = raw.iter().position(|c| !c.is_finite()) {
            return Err(SpectrumError::InvalidInput {
                index,
                value: raw[index],
            });
        }

        let mut counts = raw.to_vec();
        if counts.len() < MIN_BINS {
            counts.resize(MIN_BINS, 0.0);
        }

        // Derivation pipeline, in dependency order.
        let count_errors = processor::count_errors(&counts);
        let relative_errors = processor::relative_errors(&counts, &count_errors);
        let (probabilities, probability_errors) = processor::normalize(&counts, &count_errors);
        let mean = processor::mean(&counts);
        let mean_error = processor::mean_error(&counts);
        let variance = processor::variance(&counts, mean);

        let bins = counts
            .iter()
            .enumerate()
            .map(|(k, &count)| SpectrumBin {
                bin: k,
                count,
                count_error: count_errors[k],
                probability: probabilities[k],
                probability_error: probability_errors[k],
                relative_error: relative_errors[k],
            })
            .collect();

        Ok(Spectrum {
            bins,
            moments: Moments {
                mean,
                mean_error,
                variance,
            },
        })
    }

    /// Per-bin records, ordered by multiplicity.
    pub fn bins(&self) -> &[SpectrumBin] {
        &self.bins
    }

    /// Scalar moments of the distribution.
    pub fn moments(&self) -> Moments {
        self.moments
    }

    /// Sum of all bin counts (total number of events).
    pub fn total_count(&self) -> f64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether the spectrum has no bins.  Never true for a constructed
    /// spectrum (padding guarantees at least [`MIN_BINS`]).
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Materialize the nine-column table view, one row per bin.
    pub fn rows(&self) -> Vec<SpectrumRow> {
        self.bins
            .iter()
            .map(|b| SpectrumRow {
                bin: b.bin,
                count: b.count,
                count_error: b.count_error,
                probability: b.probability,
                probability_error: b.probability_error,
                relative_error: b.relative_error,
                mean: self.moments.mean,
                mean_error: self.moments.mean_error,
                variance: self.moments.variance,
            })
            .collect()
    }
}
