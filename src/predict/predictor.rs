//! Predictor engine: named-input resolution and the forward pass

use crate::model::{Batch, ForwardModel, ForwardSpec};
use crate::training::BasicTrainer;
use crate::vectorize::Vectorizer;
use crate::{InferError, Result};
use burn::module::AutodiffModule;
use burn::tensor::backend::{AutodiffBackend, Backend};
use burn::tensor::Tensor;
use std::sync::Arc;

/// References a predictor needs: a trained model and the vectorizer that
/// produced its training data
///
/// Plain holder, no validation. Extraction from a trainer is the only
/// operation with any substance: it converts the model off its autodiff
/// backend, which is what puts it in evaluation form.
pub struct PredictorHyperParams<M> {
    pub model: M,
    pub vectorizer: Arc<Vectorizer>,
}

impl<M> PredictorHyperParams<M> {
    pub fn new(model: M, vectorizer: Arc<Vectorizer>) -> Self {
        PredictorHyperParams { model, vectorizer }
    }

    /// Extract the trained model and vectorizer from a trainer
    ///
    /// The vectorizer is the trainer's own instance, not a copy. The model
    /// comes out via [`AutodiffModule::valid`]: same weights, no gradient
    /// tracking, permanently in evaluation mode.
    pub fn from_trainer<B, T>(trainer: &BasicTrainer<B, T>) -> Self
    where
        B: AutodiffBackend,
        T: AutodiffModule<B, InnerModule = M>,
    {
        PredictorHyperParams {
            model: trainer.model().valid(),
            vectorizer: Arc::clone(trainer.dataset_splits().vectorizer()),
        }
    }
}

/// Runs a trained model over named-input batches
///
/// Generic over a plain (non-autodiff) backend, so no gradient state exists
/// anywhere in an inference call. The forward spec is derived once at
/// construction; inference resolves each declared parameter from the batch
/// or its default.
pub struct Predictor<B: Backend, M: ForwardModel<B>> {
    model: M,
    vectorizer: Arc<Vectorizer>,
    forward_spec: ForwardSpec<B>,
    device: B::Device,
}

impl<B: Backend, M: ForwardModel<B>> Predictor<B, M> {
    /// Create a predictor from extracted hyperparameters
    pub fn new(params: PredictorHyperParams<M>) -> Self {
        let forward_spec = params.model.forward_spec();
        log::info!(
            "Predictor ready: {} forward parameters ({})",
            forward_spec.len(),
            forward_spec
                .params()
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Predictor {
            model: params.model,
            vectorizer: params.vectorizer,
            forward_spec,
            // CPU path: the backend's default device
            device: B::Device::default(),
        }
    }

    /// Run inference on a batch
    ///
    /// Moves all batch tensors to the predictor's device and performs the
    /// forward pass. Returns the raw model output tensor.
    pub fn infer(&self, batch: Batch<B>) -> Result<Tensor<B, 2>> {
        let batch = batch.to_device(&self.device);
        self.forward(&batch)
    }

    /// Resolve each declared parameter and invoke the model
    fn forward(&self, batch: &Batch<B>) -> Result<Tensor<B, 2>> {
        let mut inputs = Batch::new();
        for param in self.forward_spec.params() {
            let value = match batch.get(&param.name) {
                Some(value) => value.clone(),
                None => param
                    .default
                    .clone()
                    .ok_or_else(|| InferError::MissingParam(param.name.clone()))?,
            };
            inputs.insert(&param.name, value);
        }

        self.model.forward(&inputs)
    }

    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    pub fn forward_spec(&self) -> &ForwardSpec<B> {
        &self.forward_spec
    }

    pub fn device(&self) -> &B::Device {
        &self.device
    }

    pub fn model(&self) -> &M {
        &self.model
    }
}
