//! Configuration for the firgolden driver.
//!
//! A configuration names one input signal and any number of filters to apply
//! to it. It can be loaded from TOML:
//!
//! ```toml
//! display_samples = 16
//!
//! [input]
//! type = "square"
//! half_period = 4
//! cycles = 4
//! amplitude = 1.0
//!
//! [[filters]]
//! name = "LOWPASS FILTER (Moving Average)"
//! coefficients = [0.25, 0.25, 0.25, 0.25]
//! ```

use crate::error::{FirError, Result};
use crate::signal::square_wave;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Coefficient list parsed from a comma-separated string
///
/// # Parsing formats
/// - `0.25,0.25,0.25,0.25`
/// - `0.25, -0.25, -0.25, 0.25` (whitespace around values is ignored)
///
/// # Example
/// ```
/// use firgolden::config::TapList;
///
/// let taps: TapList = "0.25, -0.25, -0.25, 0.25".parse().unwrap();
/// assert_eq!(taps.as_slice(), &[0.25, -0.25, -0.25, 0.25]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TapList(Vec<f64>);

impl TapList {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl fmt::Display for TapList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|t| t.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl FromStr for TapList {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("coefficient list must not be empty".to_string());
        }

        let taps = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| format!("invalid coefficient: {:?}", part.trim()))
            })
            .collect::<std::result::Result<Vec<f64>, String>>()?;
        Ok(Self(taps))
    }
}

/// Input signal to feed through the filters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputConfig {
    /// Bipolar square wave, see [`square_wave`]
    Square {
        half_period: usize,
        cycles: usize,
        #[serde(default = "default_amplitude")]
        amplitude: f64,
    },
    /// Explicit sample values
    Samples { values: Vec<f64> },
}

impl InputConfig {
    /// Build the input sequence
    pub fn samples(&self) -> Vec<f64> {
        match self {
            InputConfig::Square {
                half_period,
                cycles,
                amplitude,
            } => square_wave(*half_period, *cycles, *amplitude),
            InputConfig::Samples { values } => values.clone(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        // [1, 1, 1, 1, -1, -1, -1, -1] repeated four times
        Self::Square {
            half_period: 4,
            cycles: 4,
            amplitude: 1.0,
        }
    }
}

/// A named coefficient vector
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilterConfig {
    pub name: String,
    pub coefficients: Vec<f64>,
}

impl FilterConfig {
    pub fn new(name: impl Into<String>, coefficients: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            coefficients,
        }
    }
}

/// Driver configuration
///
/// `FirConfig::default()` is the moving-average lowpass and the difference
/// highpass applied to a 32-sample square wave.
///
/// # Example
/// ```
/// use firgolden::config::FirConfig;
///
/// let config = FirConfig::default();
/// assert_eq!(config.filters.len(), 2);
/// assert_eq!(config.input.samples().len(), 32);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FirConfig {
    /// Number of output samples shown per filter
    #[serde(default = "default_display_samples")]
    pub display_samples: usize,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

impl Default for FirConfig {
    fn default() -> Self {
        Self {
            display_samples: default_display_samples(),
            input: InputConfig::default(),
            filters: vec![
                FilterConfig::new("LOWPASS FILTER (Moving Average)", vec![0.25; 4]),
                FilterConfig::new("HIGHPASS FILTER", vec![0.25, -0.25, -0.25, 0.25]),
            ],
        }
    }
}

impl FirConfig {
    /// Parse and validate a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| FirError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| FirError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Check that the configuration describes at least one usable filter
    pub fn validate(&self) -> Result<()> {
        if self.filters.is_empty() {
            return Err(FirError::Config("no filters configured".to_string()));
        }
        if let Some(f) = self.filters.iter().find(|f| f.coefficients.is_empty()) {
            return Err(FirError::Config(format!(
                "filter {:?} has no coefficients",
                f.name
            )));
        }
        if let InputConfig::Square {
            half_period,
            cycles,
            ..
        } = self.input
        {
            if half_period == 0 {
                return Err(FirError::Config(
                    "square wave half_period must be positive".to_string(),
                ));
            }
            if cycles == 0 {
                return Err(FirError::Config(
                    "square wave cycles must be positive".to_string(),
                ));
            }
            let len = half_period
                .checked_mul(2)
                .and_then(|v| v.checked_mul(cycles))
                .ok_or_else(|| FirError::Config("square wave length overflows".to_string()))?;
            if len > MAX_INPUT_SAMPLES {
                return Err(FirError::Config(format!(
                    "square wave length {} exceeds limit of {} samples",
                    len, MAX_INPUT_SAMPLES
                )));
            }
        }
        Ok(())
    }
}

/// Upper bound on the length of a generated input signal
pub const MAX_INPUT_SAMPLES: usize = 1 << 24;

fn default_display_samples() -> usize {
    16
}

fn default_amplitude() -> f64 {
    1.0
}
