//! Application-level configuration.
//!
//! - [`GenerationParams`] - per-stage models, sampling and prompt audience

pub mod generation_params;

pub use generation_params::GenerationParams;
