//! Prediction and inference
//!
//! The predictor engine, the JSON pipeline hooks, and the concrete
//! classification predictor.

pub mod classification;
pub mod pipeline;
pub mod predictor;

pub use classification::ClassificationPredictor;
pub use pipeline::JsonPredictor;
pub use predictor::{Predictor, PredictorHyperParams};
