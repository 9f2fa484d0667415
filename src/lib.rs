pub mod config;
pub mod error;
pub mod output;
pub mod processing;
pub mod signal;
pub mod signal_processing;

pub use config::FirConfig;
pub use error::{FirError, Result};
pub use processing::{FilterRun, run_filters};
pub use signal_processing::{FirFilter, FirFilterCore, filter};
