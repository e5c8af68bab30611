//! Demonstrates enabling verbose logging for the analysis pipeline.
use radix2_spectrum::analysis::analyze;
use radix2_spectrum::AnalysisConfig;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let config = AnalysisConfig::short_signal(3000);
    let signal: Vec<f32> = (0..5000).map(|i| ((i % 16) as f32 - 8.0) / 8.0).collect();

    let out = analyze(&signal, &config).unwrap();
    log::info!(
        "{} windows, dominant full-signal bin {:?}",
        out.windows.len(),
        out.dominant_full_bin()
    );
}
