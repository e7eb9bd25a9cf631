//! Dataset splits
//!
//! Holds the raw examples a model was trained on together with the
//! vectorizer that produced its training tensors.

pub mod splits;

pub use splits::DatasetSplits;
