//! Derivation formulas for the spectrum pipeline.
//!
//! Five stages, each a pure function over the (already padded) count array:
//! counting errors, relative errors, normalization, mean with its statistical
//! error, and variance.  Degenerate divisions (empty bins, all-zero
//! histograms) follow IEEE semantics and yield NaN cells instead of failing.

// ---------------------------------------------------------------------------
// Stage 1: counting error per bin
// ---------------------------------------------------------------------------

/// Absolute counting error of each bin:
///
/// ```text
/// s_k = sqrt(N_k / k)   for k > 1
/// s_k = sqrt(N_k)       for k <= 1
/// ```
///
/// A detected event of multiplicity k >= 2 averages over k correlated
/// sub-detections, which shrinks its effective independent-sample error.
/// Bins 0 *and* 1 use the plain Poisson form: the boundary is `k > 1`, not
/// `k >= 1`, reproduced from the reference analysis even though its prose
/// describes only a k=0 special case.
pub fn count_errors(counts: &[f64]) -> Vec<f64> {
    counts
        .iter()
        .enumerate()
        .map(|(k, &n)| if k > 1 { (n / k as f64).sqrt() } else { n.sqrt() })
        .collect()
}

// ---------------------------------------------------------------------------
// Stage 2: relative error per bin
// ---------------------------------------------------------------------------

/// `count_error / count` per bin.  NaN where the bin is empty (0/0).
pub fn relative_errors(counts: &[f64], count_errors: &[f64]) -> Vec<f64> {
    counts
        .iter()
        .zip(count_errors)
        .map(|(&n, &s)| s / n)
        .collect()
}

// ---------------------------------------------------------------------------
// Stage 3: normalization to emission probabilities
// ---------------------------------------------------------------------------

/// Convert counts and their errors into emission probabilities and errors by
/// dividing through the total event count.
///
/// When the histogram is all-zero the total is 0 and every cell becomes NaN;
/// the same policy applies to both columns.
pub fn normalize(counts: &[f64], count_errors: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let total: f64 = counts.iter().sum();
    let probabilities = counts.iter().map(|&n| n / total).collect();
    let probability_errors = count_errors.iter().map(|&s| s / total).collect();
    (probabilities, probability_errors)
}

// ---------------------------------------------------------------------------
// Stage 4: mean and its statistical error
// ---------------------------------------------------------------------------

/// Expected multiplicity: `(sum k * N_k) / (sum N_k)`.
pub fn mean(counts: &[f64]) -> f64 {
    total_neutrons(counts) / total_events(counts)
}

/// Statistical error of the mean.
///
/// Propagates through the ratio `mean = N / E` with both totals treated as
/// independent Poisson counters (`dN = sqrt(N)`, `dE = sqrt(E)`):
///
/// ```text
/// dM^2 = (dN / E)^2 + (N * dE / E^2)^2
/// ```
///
/// The independence of numerator and denominator is a known simplification of
/// the underlying statistics.
pub fn mean_error(counts: &[f64]) -> f64 {
    let neutrons = total_neutrons(counts);
    let events = total_events(counts);
    let delta_neutrons = neutrons.sqrt();
    let delta_events = events.sqrt();

    let delta_mean_sq = (delta_neutrons / events).powi(2)
        + (neutrons * delta_events / events.powi(2)).powi(2);
    delta_mean_sq.sqrt()
}

// ---------------------------------------------------------------------------
// Stage 5: variance
// ---------------------------------------------------------------------------

/// Second central moment: `E[k^2] - mean^2`.
pub fn variance(counts: &[f64], mean: f64) -> f64 {
    let events = total_events(counts);
    let mean_of_squares = counts
        .iter()
        .enumerate()
        .map(|(k, &n)| (k * k) as f64 * n)
        .sum::<f64>()
        / events;
    mean_of_squares - mean * mean
}

// -- Shared totals --

/// Total number of events: `sum N_k`.
fn total_events(counts: &[f64]) -> f64 {
    counts.iter().sum()
}

/// Total number of detected neutrons: `sum k * N_k`.
fn total_neutrons(counts: &[f64]) -> f64 {
    counts
        .iter()
        .enumerate()
        .map(|(k, &n)| k as f64 * n)
        .sum()
}
