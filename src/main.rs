use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use neutron_spectra::spectrum::{export, loader};
use neutron_spectra::Spectrum;

/// Derive error-annotated emission probabilities and spectrum moments from a
/// raw neutron-multiplicity histogram.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Input histogram: .txt/.dat (whitespace-separated counts),
    /// .csv (a `count` column) or .json (flat numeric array)
    input: PathBuf,

    /// Output CSV path (default: neutrons_<timestamp>.csv in the working directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let counts = loader::load_counts(&cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    let spectrum = Spectrum::from_counts(&counts)?;

    let moments = spectrum.moments();
    println!("events:   {}", spectrum.total_count());
    println!("mean:     {:.6} ± {:.6}", moments.mean, moments.mean_error);
    println!("variance: {:.6}", moments.variance);

    let written = export::export(&spectrum, cli.output.as_deref())?;
    log::info!("wrote {} rows to {}", spectrum.len(), written.display());

    Ok(())
}
