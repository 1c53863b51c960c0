use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::SpectrumError;
use crate::spectrum::model::Spectrum;

// ---------------------------------------------------------------------------
// CSV export of the derived table
// ---------------------------------------------------------------------------

/// Default export filename embedding a local timestamp:
/// `neutrons_<YYYY>_<MM>_<DD>_<HH>_<MM>.csv`.
pub fn default_filename(now: DateTime<Local>) -> String {
    format!("neutrons_{}.csv", now.format("%Y_%m_%d_%H_%M"))
}

/// Write the derived table to `path`, or to a timestamped file in the working
/// directory when no path is given.  Returns the path actually written.
///
/// Layout: header row with the nine column names, then one data row per bin,
/// in bin order.  An invalid target (missing directory, unwritable file) comes
/// back as [`SpectrumError::Export`] for the caller to report; library code
/// never aborts on I/O.
pub fn export(spectrum: &Spectrum, path: Option<&Path>) -> Result<PathBuf, SpectrumError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(default_filename(Local::now())),
    };
    write_csv(spectrum, &path)?;
    Ok(path)
}

/// Serialize all rows to a CSV file at `path`.
///
/// The header comes from the [`SpectrumRow`](crate::SpectrumRow) field names,
/// so the on-disk column order is fixed by the row type.
pub fn write_csv(spectrum: &Spectrum, path: &Path) -> Result<(), SpectrumError> {
    let to_export_error = |source: csv::Error| SpectrumError::Export {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_export_error)?;
    for row in spectrum.rows() {
        writer.serialize(row).map_err(to_export_error)?;
    }
    writer
        .flush()
        .map_err(|e| to_export_error(csv::Error::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_filename_embeds_timestamp() {
        let now = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(default_filename(now), "neutrons_2024_03_07_09_05.csv");
    }

    #[test]
    fn written_file_has_header_and_one_row_per_bin() {
        let spectrum = Spectrum::from_counts(&[10.0, 20.0, 30.0]).unwrap();
        let path = std::env::temp_dir().join("neutron_spectra_export_ok.csv");

        write_csv(&spectrum, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "bin,count,count_error,probability,probability_error,relative_error,\
             mean,mean_error,variance"
        );
        assert_eq!(lines.len(), 1 + spectrum.len());
        assert!(lines[1].starts_with("0,10"), "got: {}", lines[1]);
    }

    #[test]
    fn export_into_missing_directory_fails_gracefully() {
        let spectrum = Spectrum::from_counts(&[1.0]).unwrap();
        let path = std::env::temp_dir()
            .join("neutron_spectra_no_such_dir")
            .join("out.csv");

        let err = export(&spectrum, Some(&path)).unwrap_err();
        match err {
            SpectrumError::Export { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Export error, got {other:?}"),
        }
    }

    #[test]
    fn export_returns_written_path() {
        let spectrum = Spectrum::from_counts(&[1.0, 2.0]).unwrap();
        let path = std::env::temp_dir().join("neutron_spectra_export_path.csv");

        let written = export(&spectrum, Some(&path)).unwrap();
        assert_eq!(written, path);
    }
}
