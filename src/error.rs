use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Library error type
// ---------------------------------------------------------------------------

/// Errors surfaced by the spectrum library.
///
/// Division-by-zero during derivation (empty bins, all-zero histograms) is
/// deliberately *not* an error: those cells carry IEEE non-finite sentinels so
/// the remaining rows stay usable.
#[derive(Debug, Error)]
pub enum SpectrumError {
    /// Construction input could not be interpreted as a numeric histogram.
    #[error("count at bin {index} is not a finite number (got {value})")]
    InvalidInput { index: usize, value: f64 },

    /// Writing the derived table to disk failed.
    #[error("failed to write spectrum table to {}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
