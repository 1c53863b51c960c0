use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a raw count histogram from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.txt` / `.dat` – whitespace-separated numbers, bin 0 first
/// * `.csv`          – header row with a `count` column, one bin per row
/// * `.json`         – flat JSON array of numbers: `[10, 20, 30]`
///
/// The returned vector is the histogram exactly as stored; padding and
/// validation happen in [`Spectrum::from_counts`](crate::Spectrum::from_counts).
pub fn load_counts(path: &Path) -> Result<Vec<f64>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "txt" | "dat" => load_txt(path),
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Plain-text loader
// ---------------------------------------------------------------------------

/// Whitespace-separated numbers, in bin order.  Blank lines are fine.
fn load_txt(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).context("reading counts file")?;

    text.split_whitespace()
        .enumerate()
        .map(|(i, tok)| {
            tok.parse::<f64>()
                .with_context(|| format!("Value {i}: '{tok}' is not a number"))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one bin per data row.  Only the
/// `count` column is read; any other columns are ignored.
fn load_csv(path: &Path) -> Result<Vec<f64>> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let count_idx = headers
        .iter()
        .position(|h| h == "count")
        .context("CSV missing 'count' column")?;

    let mut counts = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        let field = record.get(count_idx).unwrap_or("");
        let value = field
            .trim()
            .parse::<f64>()
            .with_context(|| format!("CSV row {row_no}: '{field}' is not a number"))?;
        counts.push(value);
    }

    Ok(counts)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: a flat array of numbers, `[10, 20, 30, ...]`.
fn load_json(path: &Path) -> Result<Vec<f64>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let values = root.as_array().context("Expected top-level JSON array")?;

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_f64()
                .with_context(|| format!("Element {i}: not a number"))
        })
        .collect()
}
