use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use radix2_spectrum::window::WindowKind;
use radix2_spectrum::{AnalysisConfig, SpectrumAnalyzer};
use spectrum_cli::{process_file, OutputLayout};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    /// 6.5 s at 10 kHz: 4096-sample windows, 65536-point full transform.
    Long,
    /// 3 kHz captures: 2048-sample windows, 4096-point full transform.
    Short,
}

/// Compute sliding-window and full-signal magnitude spectra of sample files.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Sample files, one decimal value per line
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Base sizing preset; the flags below override single fields
    #[arg(long, value_enum, default_value_t = Preset::Long)]
    preset: Preset,

    /// Samples per analysis window (power of two)
    #[arg(long, env = "SPECTRUM_WINDOW_SIZE")]
    window_size: Option<usize>,

    /// Maximum number of samples read from each file
    #[arg(long, env = "SPECTRUM_TOTAL_SAMPLES")]
    total_samples: Option<usize>,

    /// Full-signal transform length (power of two)
    #[arg(long, env = "SPECTRUM_BUFFER_CAPACITY")]
    buffer_capacity: Option<usize>,

    /// Sampling rate in Hz
    #[arg(long, env = "SPECTRUM_SAMPLING_RATE")]
    sampling_rate: Option<f64>,

    /// Taper applied to each window: rectangular, hann, hamming or blackman
    #[arg(long, default_value = "rectangular")]
    taper: WindowKind,

    /// Output file layout
    #[arg(long, value_enum, default_value_t = OutputLayout::Table)]
    layout: OutputLayout,

    /// Appended to the input file stem to name the result file
    #[arg(long, default_value = "_fft")]
    suffix: String,
}

impl Args {
    fn config(&self) -> AnalysisConfig {
        let base = match self.preset {
            Preset::Long => AnalysisConfig::default(),
            Preset::Short => AnalysisConfig::short_signal(4096),
        };
        AnalysisConfig {
            window_size: self.window_size.unwrap_or(base.window_size),
            total_samples: self.total_samples.unwrap_or(base.total_samples),
            buffer_capacity: self.buffer_capacity.unwrap_or(base.buffer_capacity),
            sampling_rate: self.sampling_rate.unwrap_or(base.sampling_rate),
            window: self.taper,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let analyzer = SpectrumAnalyzer::new(args.config())?;

    let mut failed = 0usize;
    for input in &args.inputs {
        match process_file(input, &analyzer, args.layout, &args.suffix) {
            Ok(_) => {}
            Err(e) => {
                log::error!("{:#}", e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{failed} of {} files failed", args.inputs.len());
    }
    log::info!("Processed {} files", args.inputs.len());
    Ok(())
}
