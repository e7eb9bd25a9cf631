//! Trainer handle exposing a trained model and its dataset splits

use crate::data::DatasetSplits;
use burn::module::AutodiffModule;
use burn::tensor::backend::AutodiffBackend;

/// Hand-off point between training and inference
///
/// Owns a model on an autodiff backend together with the dataset splits it
/// was trained on. The predictor side extracts the model via
/// [`AutodiffModule::valid`], which strips the autodiff graph and puts the
/// model permanently in evaluation form.
pub struct BasicTrainer<B: AutodiffBackend, M: AutodiffModule<B>> {
    model: M,
    dataset_splits: DatasetSplits,
    device: B::Device,
}

impl<B: AutodiffBackend, M: AutodiffModule<B>> BasicTrainer<B, M> {
    pub fn new(model: M, dataset_splits: DatasetSplits, device: B::Device) -> Self {
        BasicTrainer {
            model,
            dataset_splits,
            device,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn dataset_splits(&self) -> &DatasetSplits {
        &self.dataset_splits
    }

    pub fn device(&self) -> &B::Device {
        &self.device
    }
}
