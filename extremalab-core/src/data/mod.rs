//! Bar data preparation.

pub mod resample;

pub use resample::{quantile, resample, ResampleError, VolumeClip};
