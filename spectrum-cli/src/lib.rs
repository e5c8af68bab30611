use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use radix2_spectrum::{SpectrumAnalysis, SpectrumAnalyzer};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Extension of sample files and result tables.
const TXT_EXT: &str = ".txt";

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputLayout {
    /// Full-signal and per-window columns with frequency axes.
    #[default]
    Table,
    /// Full-signal magnitudes only, one per line.
    FullOnly,
}

/// Parse one decimal sample per line. Blank lines are skipped.
pub fn parse_samples<R: BufRead>(reader: R) -> Result<Vec<f32>> {
    let mut samples = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", idx + 1))?;
        let value = line.trim();
        if value.is_empty() {
            continue;
        }
        let sample: f32 = value
            .parse()
            .with_context(|| format!("line {}: `{value}` is not a number", idx + 1))?;
        samples.push(sample);
    }
    Ok(samples)
}

pub fn read_samples(path: &Path) -> Result<Vec<f32>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    parse_samples(BufReader::new(file)).with_context(|| format!("in {}", path.display()))
}

/// `dir/name.txt` becomes `dir/name<suffix>.txt`; other names get
/// `<suffix>.txt` appended. Fails rather than name the input itself.
pub fn output_path(input: &Path, suffix: &str) -> Result<PathBuf> {
    let Some(name) = input.file_name().and_then(|n| n.to_str()) else {
        bail!("cannot derive an output name from {}", input.display());
    };
    let stem = name.strip_suffix(TXT_EXT).unwrap_or(name);
    let output = input.with_file_name(format!("{stem}{suffix}{TXT_EXT}"));
    if output == input {
        bail!(
            "output for {} would overwrite the input, pick a non-empty suffix",
            input.display()
        );
    }
    Ok(output)
}

/// Tab-separated columns: full-signal frequency and magnitude, then the
/// frame frequency axis and one column per frame while frame bins last.
pub fn write_table<W: Write>(mut out: W, analysis: &SpectrumAnalysis<f32>) -> io::Result<()> {
    let frames = analysis.windows.len();
    write!(out, "xaxis_fq\tfull_sig")?;
    if frames > 0 {
        write!(out, "\txaxis_fq")?;
        for k in 1..=frames {
            write!(out, "\twin{k}")?;
        }
    }
    writeln!(out)?;

    let frame_bins = analysis.window_bins();
    for (bin, &full) in analysis.full.iter().enumerate() {
        write!(
            out,
            "{:.6}\t{:.6}",
            analysis.full_frequency(bin),
            f64::from(full)
        )?;
        if bin < frame_bins {
            write!(out, "\t{:.6}", analysis.window_frequency(bin))?;
            for frame in &analysis.windows {
                write!(out, "\t{:.6}", f64::from(frame[bin]))?;
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

/// One full-signal magnitude per line.
pub fn write_full_only<W: Write>(mut out: W, analysis: &SpectrumAnalysis<f32>) -> io::Result<()> {
    for &m in &analysis.full {
        writeln!(out, "{:.6}", f64::from(m))?;
    }
    out.flush()
}

/// Read, analyze and write one sample file. Returns the result path.
pub fn process_file(
    input: &Path,
    analyzer: &SpectrumAnalyzer,
    layout: OutputLayout,
    suffix: &str,
) -> Result<PathBuf> {
    log::info!("Reading file {}", input.display());
    let samples = read_samples(input)?;
    log::info!("Read {} samples", samples.len());
    if samples.len() > analyzer.config().total_samples {
        log::warn!(
            "{} holds {} samples, only the first {} are analyzed",
            input.display(),
            samples.len(),
            analyzer.config().total_samples
        );
    }

    let analysis = analyzer
        .analyze(&samples)
        .with_context(|| format!("analyzing {}", input.display()))?;

    let output = output_path(input, suffix)?;
    let file =
        File::create(&output).with_context(|| format!("failed to open {}", output.display()))?;
    log::info!("Writing results to file {}", output.display());
    let writer = BufWriter::new(file);
    let written = match layout {
        OutputLayout::Table => write_table(writer, &analysis),
        OutputLayout::FullOnly => write_full_only(writer, &analysis),
    };
    written.with_context(|| format!("writing {}", output.display()))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use radix2_spectrum::AnalysisConfig;

    fn analysis() -> SpectrumAnalysis<f32> {
        SpectrumAnalysis {
            full: vec![1.0, 0.5, 0.25, 0.125],
            windows: vec![vec![2.0, 3.0], vec![4.0, 5.0]],
            full_step: 10.0,
            window_step: 20.0,
        }
    }

    #[test]
    fn table_layout() {
        let mut out = Vec::new();
        write_table(&mut out, &analysis()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "xaxis_fq\tfull_sig\txaxis_fq\twin1\twin2");
        assert_eq!(
            lines[1],
            "0.000000\t1.000000\t0.000000\t2.000000\t4.000000"
        );
        assert_eq!(
            lines[2],
            "10.000000\t0.500000\t20.000000\t3.000000\t5.000000"
        );
        assert_eq!(lines[3], "20.000000\t0.250000");
        assert_eq!(lines[4], "30.000000\t0.125000");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn table_without_frames() {
        let mut a = analysis();
        a.windows.clear();
        let mut out = Vec::new();
        write_table(&mut out, &a).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("xaxis_fq\tfull_sig\n0.000000\t1.000000\n"));
    }

    #[test]
    fn full_only_layout() {
        let mut out = Vec::new();
        write_full_only(&mut out, &analysis()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1.000000\n0.500000\n0.250000\n0.125000\n"
        );
    }

    #[test]
    fn output_names() {
        assert_eq!(
            output_path(Path::new("signals/sin01.txt"), "_fft").unwrap(),
            PathBuf::from("signals/sin01_fft.txt")
        );
        assert_eq!(
            output_path(Path::new("sin01"), "_fft").unwrap(),
            PathBuf::from("sin01_fft.txt")
        );
        assert_eq!(
            output_path(Path::new("a.txt.txt"), "_x").unwrap(),
            PathBuf::from("a.txt_x.txt")
        );
        assert!(output_path(Path::new(".."), "_fft").is_err());
    }

    #[test]
    fn empty_suffix_never_targets_the_input() {
        assert!(output_path(Path::new("signals/x.txt"), "").is_err());
        assert_eq!(
            output_path(Path::new("signals/x"), "").unwrap(),
            PathBuf::from("signals/x.txt")
        );

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("keep.txt");
        std::fs::write(&input, "0.5\n-0.5\n").unwrap();
        let analyzer = SpectrumAnalyzer::new(AnalysisConfig {
            window_size: 2,
            total_samples: 2,
            buffer_capacity: 2,
            ..AnalysisConfig::default()
        })
        .unwrap();
        assert!(process_file(&input, &analyzer, OutputLayout::Table, "").is_err());
        assert_eq!(std::fs::read_to_string(&input).unwrap(), "0.5\n-0.5\n");
    }

    #[test]
    fn parses_samples_and_reports_bad_lines() {
        let ok = parse_samples("0.5\n-1\n\n  2.25  \n".as_bytes()).unwrap();
        assert_eq!(ok, vec![0.5, -1.0, 2.25]);
        let err = parse_samples("1.0\nabc\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }

    #[test]
    fn process_file_writes_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tone.txt");
        let body: String = (0..100).map(|i| format!("{}\n", (i % 4) as f32 - 1.5)).collect();
        std::fs::write(&input, body).unwrap();
        let cfg = AnalysisConfig {
            window_size: 32,
            total_samples: 100,
            buffer_capacity: 128,
            ..AnalysisConfig::default()
        };
        let analyzer = SpectrumAnalyzer::new(cfg).unwrap();
        let out = process_file(&input, &analyzer, OutputLayout::Table, "_fft").unwrap();
        assert_eq!(out, dir.path().join("tone_fft.txt"));
        let text = std::fs::read_to_string(out).unwrap();
        assert!(text.starts_with("xaxis_fq\tfull_sig\txaxis_fq\twin1\twin2\twin3\twin4\n"));
        assert_eq!(text.lines().count(), 1 + 64);
    }
}
