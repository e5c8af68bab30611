// Test intent: runs the spectrum binary end to end on generated sample files.
use assert_cmd::Command;
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

fn write_sine(path: &Path, freq: f64, fs: f64, n: usize) {
    let body: String = (0..n)
        .map(|i| format!("{:.6}\n", (2.0 * PI * freq * i as f64 / fs).sin()))
        .collect();
    fs::write(path, body).unwrap();
}

fn spectrum() -> Command {
    let mut cmd = Command::cargo_bin("spectrum").unwrap();
    for var in [
        "SPECTRUM_WINDOW_SIZE",
        "SPECTRUM_TOTAL_SAMPLES",
        "SPECTRUM_BUFFER_CAPACITY",
        "SPECTRUM_SAMPLING_RATE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn short_preset_writes_table_with_peak() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sin300.txt");
    write_sine(&input, 300.0, 3000.0, 3000);

    spectrum().arg("--preset").arg("short").arg(&input).assert().success();

    let table = fs::read_to_string(dir.path().join("sin300_fft.txt")).unwrap();
    let mut lines = table.lines();
    assert_eq!(
        lines.next().unwrap(),
        "xaxis_fq\tfull_sig\txaxis_fq\twin1\twin2"
    );
    let rows: Vec<Vec<f64>> = lines
        .map(|l| l.split('\t').map(|v| v.parse().unwrap()).collect())
        .collect();
    assert_eq!(rows.len(), 2048);
    assert!(rows[..1024].iter().all(|r| r.len() == 5));
    assert!(rows[1024..].iter().all(|r| r.len() == 2));

    let (peak_row, _) = rows
        .iter()
        .enumerate()
        .skip(1)
        .max_by(|a, b| a.1[1].partial_cmp(&b.1[1]).unwrap())
        .unwrap();
    assert!((rows[peak_row][0] - 300.0).abs() < 1.0, "peak at {} Hz", rows[peak_row][0]);
}

#[test]
fn full_only_layout_and_custom_sizes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tone.txt");
    write_sine(&input, 1000.0, 8000.0, 500);

    spectrum()
        .args(["--window-size", "64", "--total-samples", "500"])
        .args(["--buffer-capacity", "512", "--sampling-rate", "8000"])
        .args(["--layout", "full-only", "--suffix", "_spec", "--taper", "hann"])
        .arg(&input)
        .assert()
        .success();

    let column = fs::read_to_string(dir.path().join("tone_spec.txt")).unwrap();
    let values: Vec<f64> = column.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(values.len(), 256);
    let peak = (1..values.len())
        .max_by(|&a, &b| values[a].partial_cmp(&values[b]).unwrap())
        .unwrap();
    assert!((peak as i64 - 64).abs() <= 1, "peak bin {peak}");
}

#[test]
fn bad_file_is_skipped_but_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    write_sine(&good, 100.0, 1000.0, 256);
    let bad = dir.path().join("bad.txt");
    fs::write(&bad, "0.1\nnot-a-number\n").unwrap();
    let missing = dir.path().join("missing.txt");

    spectrum()
        .args(["--preset", "short", "--sampling-rate", "1000"])
        .arg(&bad)
        .arg(&missing)
        .arg(&good)
        .assert()
        .failure();

    assert!(dir.path().join("good_fft.txt").exists());
    assert!(!dir.path().join("bad_fft.txt").exists());
}

#[test]
fn invalid_sizes_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("x.txt");
    write_sine(&input, 100.0, 1000.0, 16);
    spectrum()
        .args(["--window-size", "1000"])
        .arg(&input)
        .assert()
        .failure();
    assert!(!dir.path().join("x_fft.txt").exists());
}
