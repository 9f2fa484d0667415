use crate::error::{FirError, Result};

/// Apply an FIR filter to a whole input sequence by direct causal convolution
///
/// Computes `output[n] = sum(coefficients[k] * input[n - k])` over the taps
/// with `n - k >= 0`. Samples before the start of `input` are excluded from
/// the sum rather than treated as zeros. Each output sample uses a single
/// accumulator summed in increasing `k`, so results are bit-reproducible.
///
/// # Errors
/// Returns `FirError::InvalidArgument` if `coefficients` is empty.
///
/// # Example
/// ```
/// use firgolden::signal_processing::filter;
///
/// let y = filter(&[0.5, 0.5], &[2.0, 4.0, 6.0]).unwrap();
/// assert_eq!(y, vec![1.0, 3.0, 5.0]);
/// ```
pub fn filter(coefficients: &[f64], input: &[f64]) -> Result<Vec<f64>> {
    ensure_taps(coefficients)?;
    Ok((0..input.len())
        .map(|n| convolve_at(coefficients, input, n))
        .collect())
}

/// FIR filter with validated, immutable tap coefficients
///
/// Holds no sample state, so one instance can filter any number of
/// independent sequences, from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct FirFilter {
    taps: Vec<f64>,
}

impl FirFilter {
    /// Create a filter from its impulse response
    ///
    /// # Errors
    /// Returns `FirError::InvalidArgument` if `taps` is empty or any tap is
    /// NaN or infinite.
    pub fn new(taps: Vec<f64>) -> Result<Self> {
        ensure_taps(&taps)?;
        if let Some(idx) = taps.iter().position(|t| !t.is_finite()) {
            return Err(FirError::InvalidArgument(format!(
                "coefficient {} is not finite: {}",
                idx, taps[idx]
            )));
        }
        Ok(Self { taps })
    }

    /// Filter a whole input sequence; the output has the same length
    pub fn apply(&self, input: &[f64]) -> Vec<f64> {
        (0..input.len())
            .map(|n| convolve_at(&self.taps, input, n))
            .collect()
    }

    /// Compute the single output sample at index `n`
    ///
    /// Depends only on `input[..=n]`, so callers may compute output samples
    /// in any order or in parallel.
    ///
    /// # Panics
    /// Panics if `n >= input.len()`.
    pub fn output_sample(&self, input: &[f64], n: usize) -> f64 {
        assert!(
            n < input.len(),
            "output index {} out of range for input of length {}",
            n,
            input.len()
        );
        convolve_at(&self.taps, input, n)
    }

    pub fn num_taps(&self) -> usize {
        self.taps.len()
    }

    pub fn taps(&self) -> &[f64] {
        &self.taps
    }
}

pub(crate) fn ensure_taps(taps: &[f64]) -> Result<()> {
    if taps.is_empty() {
        return Err(FirError::InvalidArgument(
            "coefficient vector must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[inline]
fn convolve_at(taps: &[f64], input: &[f64], n: usize) -> f64 {
    // Taps past n would reach before the first sample.
    let active = taps.len().min(n + 1);
    let mut acc = 0.0f64;
    for (k, &tap) in taps[..active].iter().enumerate() {
        acc += tap * input[n - k];
    }
    acc
}
