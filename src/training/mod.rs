//! Training-side handle types
//!
//! The inference pipeline consumes models through a trainer handle; the
//! training loop itself lives outside this crate.

pub mod trainer;

pub use trainer::BasicTrainer;
