//! MLP text classifier over collapsed one-hot vectors
//!
//! Architecture: Input(vocab) → [Linear → ReLU → Dropout]* → class logits

use burn::module::Module;
use burn::nn::{Dropout, DropoutConfig, Linear, LinearConfig};
use burn::tensor::activation::{relu, softmax};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;

use crate::model::forward::{Batch, BatchValue, ForwardModel, ForwardSpec};
use crate::Result;

/// Configuration for the text classifier
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Input dimension (vectorizer vocabulary size)
    pub input_dim: usize,
    /// Number of output classes
    pub num_classes: usize,
    /// Hidden layer dimensions
    pub hidden_dims: Vec<usize>,
    /// Dropout rate
    pub dropout: f64,
}

impl ClassifierConfig {
    pub fn new(input_dim: usize, num_classes: usize) -> Self {
        let defaults = crate::ModelConfig::default();
        ClassifierConfig {
            input_dim,
            num_classes,
            hidden_dims: defaults.hidden_dims,
            dropout: defaults.dropout,
        }
    }

    /// Build from the application model config plus the dimensions the
    /// vectorizer determines
    pub fn from_model_config(
        config: &crate::ModelConfig,
        input_dim: usize,
        num_classes: usize,
    ) -> Self {
        ClassifierConfig {
            input_dim,
            num_classes,
            hidden_dims: config.hidden_dims.clone(),
            dropout: config.dropout,
        }
    }
}

/// A single hidden layer: Linear → ReLU → Dropout
#[derive(Module, Debug)]
pub struct HiddenLayer<B: Backend> {
    linear: Linear<B>,
    dropout: Dropout,
}

impl<B: Backend> HiddenLayer<B> {
    pub fn new(device: &B::Device, in_dim: usize, out_dim: usize, dropout: f64) -> Self {
        HiddenLayer {
            linear: LinearConfig::new(in_dim, out_dim).init(device),
            dropout: DropoutConfig::new(dropout).init(),
        }
    }

    pub fn forward(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.linear.forward(x);
        let x = relu(x);
        self.dropout.forward(x)
    }
}

/// Feed-forward text classifier
///
/// Forward inputs: `x_in` (required, [batch, input_dim]) and `apply_softmax`
/// (optional flag, default false) selecting probabilities over raw logits.
#[derive(Module, Debug)]
pub struct TextClassifier<B: Backend> {
    hidden: Vec<HiddenLayer<B>>,
    output: Linear<B>,
}

impl<B: Backend> TextClassifier<B> {
    /// Create a new classifier with freshly initialized weights
    pub fn new(device: &B::Device, config: ClassifierConfig) -> Self {
        let mut hidden = Vec::with_capacity(config.hidden_dims.len());
        let mut in_dim = config.input_dim;
        for &out_dim in &config.hidden_dims {
            hidden.push(HiddenLayer::new(device, in_dim, out_dim, config.dropout));
            in_dim = out_dim;
        }

        TextClassifier {
            hidden,
            output: LinearConfig::new(in_dim, config.num_classes).init(device),
        }
    }

    /// Forward pass
    ///
    /// # Arguments
    /// * `x_in` - One-hot input features [batch, input_dim]
    /// * `apply_softmax` - Return class probabilities instead of logits
    ///
    /// # Returns
    /// Class logits or probabilities [batch, num_classes]
    pub fn forward(&self, x_in: Tensor<B, 2>, apply_softmax: bool) -> Tensor<B, 2> {
        let mut x = x_in;
        for layer in &self.hidden {
            x = layer.forward(x);
        }
        let logits = self.output.forward(x);

        if apply_softmax {
            softmax(logits, 1)
        } else {
            logits
        }
    }
}

impl<B: Backend> ForwardModel<B> for TextClassifier<B> {
    fn forward_spec(&self) -> ForwardSpec<B> {
        ForwardSpec::new()
            .required("x_in")
            .with_default("apply_softmax", BatchValue::Flag(false))
    }

    fn forward(&self, inputs: &Batch<B>) -> Result<Tensor<B, 2>> {
        let x_in = inputs.tensor("x_in")?;
        let apply_softmax = inputs.flag("apply_softmax")?;
        Ok(self.forward(x_in, apply_softmax))
    }
}
