use crate::config::FirConfig;
use crate::error::Result;
use crate::signal_processing::filter;
use serde::Serialize;

/// One filter applied to one input sequence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterRun {
    pub name: String,
    pub coefficients: Vec<f64>,
    pub input: Vec<f64>,
    pub output: Vec<f64>,
}

impl FilterRun {
    /// Filter `input` with `coefficients`
    pub fn new(name: impl Into<String>, coefficients: Vec<f64>, input: Vec<f64>) -> Result<Self> {
        let output = filter(&coefficients, &input)?;
        Ok(Self {
            name: name.into(),
            coefficients,
            input,
            output,
        })
    }
}

/// Build the configured input and apply every configured filter to it, in order
pub fn run_filters(config: &FirConfig) -> Result<Vec<FilterRun>> {
    config.validate()?;
    let input = config.input.samples();
    log::info!("Input: {} samples", input.len());

    config
        .filters
        .iter()
        .map(|f| {
            log::info!("Applying {} ({} taps)", f.name, f.coefficients.len());
            log::debug!("Coefficients: {:?}", f.coefficients);
            FilterRun::new(f.name.clone(), f.coefficients.clone(), input.clone())
        })
        .collect()
}
