use crate::error::Result;
use crate::signal_processing::convolution::ensure_taps;

/// Streaming form of the causal FIR filter
///
/// Contains the delay line, tap coefficients, and convolution logic for
/// sample-at-a-time filtering. Until the delay line has been filled, only the
/// taps that line up with a real sample contribute, so streaming a sequence
/// in any chunking gives bit-identical results to [`filter`] on the whole
/// sequence.
///
/// [`filter`]: crate::signal_processing::filter
pub struct FirFilterCore {
    taps: Vec<f64>,
    delay_line: Vec<f64>,
    pos: usize,
    filled: usize,
}

impl FirFilterCore {
    /// Create a new FIR filter core with the given tap coefficients
    ///
    /// # Errors
    /// Returns `FirError::InvalidArgument` if `taps` is empty
    pub fn new(taps: Vec<f64>) -> Result<Self> {
        ensure_taps(&taps)?;
        Ok(Self {
            delay_line: vec![0.0; taps.len()],
            taps,
            pos: 0,
            filled: 0,
        })
    }

    /// Process a single sample through the filter
    pub fn process(&mut self, sample: f64) -> f64 {
        let n = self.taps.len();
        self.delay_line[self.pos] = sample;
        if self.filled < n {
            self.filled += 1;
        }

        // Walk the ring buffer newest to oldest as two contiguous reverse
        // ranges, so tap k meets the sample k steps back without modulo.
        let newest_first = (0..=self.pos).rev().chain(((self.pos + 1)..n).rev());
        let mut output = 0.0f64;
        for (tap, delay_idx) in self.taps[..self.filled].iter().zip(newest_first) {
            output += tap * self.delay_line[delay_idx];
        }

        self.pos += 1;
        if self.pos == n {
            self.pos = 0;
        }
        output
    }

    /// Process an entire buffer of samples in-place
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Forget all past samples; the next sample is treated as index 0
    pub fn reset(&mut self) {
        self.delay_line.fill(0.0);
        self.pos = 0;
        self.filled = 0;
    }

    /// Get the number of taps (filter length)
    pub fn num_taps(&self) -> usize {
        self.taps.len()
    }

    /// Get access to the tap coefficients
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }
}
