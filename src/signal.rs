/// Generate a bipolar square wave
///
/// Each cycle is `half_period` samples of `+amplitude` followed by
/// `half_period` samples of `-amplitude`. The result has
/// `2 * half_period * cycles` samples.
pub fn square_wave(half_period: usize, cycles: usize, amplitude: f64) -> Vec<f64> {
    let mut samples = Vec::with_capacity(2 * half_period * cycles);
    for _ in 0..cycles {
        samples.extend(std::iter::repeat_n(amplitude, half_period));
        samples.extend(std::iter::repeat_n(-amplitude, half_period));
    }
    samples
}
