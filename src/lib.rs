//! Statistical preprocessing of neutron-multiplicity histograms.
//!
//! Takes a raw histogram of event counts per detected-neutron multiplicity
//! and derives the standard uncertainty-annotated table: counting errors,
//! normalized emission probabilities with propagated errors, and the first
//! two moments of the spectrum with the statistical error of the mean.
//!
//! ```
//! use neutron_spectra::Spectrum;
//!
//! let spectrum = Spectrum::from_counts(&[10.0, 20.0, 30.0]).unwrap();
//!
//! // Short input is padded to 10 bins with zero counts.
//! assert_eq!(spectrum.len(), 10);
//! assert!((spectrum.moments().mean - 80.0 / 60.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod spectrum;

pub use error::SpectrumError;
pub use spectrum::model::{Moments, Spectrum, SpectrumBin, SpectrumRow, MIN_BINS};
