//! Neural network models
//!
//! The named-input forward interface and the text classifier built on it.

pub mod classifier;
pub mod forward;

pub use classifier::{ClassifierConfig, TextClassifier};
pub use forward::{Batch, BatchValue, ForwardModel, ForwardParam, ForwardSpec};
