/// Spectrum layer: core types, derivation pipeline, loading, and export.
///
/// Architecture:
/// ```text
///  .txt / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → raw counts (Vec<f64>)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  processor    │  pad → errors → normalize → moments
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Spectrum  │  per-bin records + scalar moments
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  nine-column CSV table
///   └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
pub mod processor;
