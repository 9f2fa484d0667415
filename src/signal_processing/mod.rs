pub mod convolution;
pub mod fir_core;

pub use convolution::{FirFilter, filter};
pub use fir_core::FirFilterCore;
