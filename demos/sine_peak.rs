//! Locate the tone in a 800 Hz sine sampled at 10 kHz.

use radix2_spectrum::analysis::peak_bin;
use radix2_spectrum::transform_magnitude;

const N: usize = 4096;
const FS: f32 = 10_000.0;

fn main() {
    // real samples in the first half, scratch in the second
    let mut buffer = vec![0.0f32; 2 * N];
    for (i, x) in buffer[..N].iter_mut().enumerate() {
        *x = (2.0 * std::f32::consts::PI * 800.0 * i as f32 / FS).sin();
    }

    transform_magnitude(&mut buffer, N).unwrap();

    let spectrum = &buffer[..N / 2];
    let bin = peak_bin(spectrum).unwrap();
    let step = FS / N as f32;
    println!(
        "peak at bin {bin} ({:.1} Hz), magnitude {:.4}",
        bin as f32 * step,
        spectrum[bin]
    );
}
