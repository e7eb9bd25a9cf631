//! JSON-to-JSON prediction pipeline

use crate::model::{Batch, ForwardModel};
use crate::predict::Predictor;
use crate::{InferError, Result};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use serde_json::Value;

/// Full prediction pipeline over a [`Predictor`] engine
///
/// The three conversion hooks default to a "not implemented" error; each
/// concrete predictor overrides them for its task. `json_to_json` chains
/// them with the forward pass in between.
pub trait JsonPredictor<B: Backend> {
    type Model: ForwardModel<B>;

    /// The underlying predictor engine
    fn engine(&self) -> &Predictor<B, Self::Model>;

    /// Transform one JSON input into a model-ready batch
    ///
    /// Same conversion a data loader applies to a raw example, minus any
    /// expected label.
    fn json_to_data(&self, _input: &Value) -> Result<Batch<B>> {
        Err(InferError::NotImplemented("json_to_data"))
    }

    /// Decode the raw output tensor into one value per batch example
    fn decode(&self, _output: &Tensor<B, 2>) -> Result<Vec<Value>> {
        Err(InferError::NotImplemented("decode"))
    }

    /// Assemble the decoded values into the output JSON document
    fn output_to_json(&self, _decoded: Vec<Value>) -> Result<Value> {
        Err(InferError::NotImplemented("output_to_json"))
    }

    /// Full prediction: input JSON → batch → inference → decoded → output JSON
    fn json_to_json(&self, input: &Value) -> Result<Value> {
        let batch = self.json_to_data(input)?;
        let output = self.engine().infer(batch)?;
        let decoded = self.decode(&output)?;
        self.output_to_json(decoded)
    }
}
