//! # Rayon Utilities
//!
//! [`rayon`] powered wrappers for batch tagging.

mod rayon_pipeline;

pub use rayon_pipeline::ParallelRayonPipeline;
