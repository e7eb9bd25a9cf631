//! Named-input forward interface
//!
//! Models enumerate the inputs their forward pass accepts as an explicit
//! [`ForwardSpec`] instead of anything reflective: each parameter is either
//! required (`default: None`) or carries a concrete default value.

use crate::{InferError, Result};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use std::collections::HashMap;

/// A single named forward input: a tensor, or a non-tensor argument that a
/// forward signature commonly carries (a scalar or a boolean switch)
#[derive(Debug, Clone)]
pub enum BatchValue<B: Backend> {
    Tensor(Tensor<B, 2>),
    Scalar(f32),
    Flag(bool),
}

impl<B: Backend> BatchValue<B> {
    pub fn kind(&self) -> &'static str {
        match self {
            BatchValue::Tensor(_) => "tensor",
            BatchValue::Scalar(_) => "scalar",
            BatchValue::Flag(_) => "flag",
        }
    }

    /// Move tensor values to a device; non-tensor values are unaffected
    pub fn to_device(&self, device: &B::Device) -> Self {
        match self {
            BatchValue::Tensor(t) => BatchValue::Tensor(t.clone().to_device(device)),
            other => other.clone(),
        }
    }
}

/// One unit of model input: a mapping from parameter name to value
#[derive(Debug, Clone)]
pub struct Batch<B: Backend> {
    values: HashMap<String, BatchValue<B>>,
}

impl<B: Backend> Default for Batch<B> {
    fn default() -> Self {
        Batch::new()
    }
}

impl<B: Backend> Batch<B> {
    pub fn new() -> Self {
        Batch {
            values: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, value: BatchValue<B>) {
        self.values.insert(name.to_string(), value);
    }

    pub fn with_tensor(mut self, name: &str, tensor: Tensor<B, 2>) -> Self {
        self.insert(name, BatchValue::Tensor(tensor));
        self
    }

    pub fn with_scalar(mut self, name: &str, scalar: f32) -> Self {
        self.insert(name, BatchValue::Scalar(scalar));
        self
    }

    pub fn with_flag(mut self, name: &str, flag: bool) -> Self {
        self.insert(name, BatchValue::Flag(flag));
        self
    }

    pub fn get(&self, name: &str) -> Option<&BatchValue<B>> {
        self.values.get(name)
    }

    /// Typed access to a tensor value
    pub fn tensor(&self, name: &str) -> Result<Tensor<B, 2>> {
        match self.values.get(name) {
            Some(BatchValue::Tensor(t)) => Ok(t.clone()),
            Some(_) => Err(InferError::ParamKind {
                name: name.to_string(),
                expected: "tensor",
            }),
            None => Err(InferError::MissingParam(name.to_string())),
        }
    }

    /// Typed access to a scalar value
    pub fn scalar(&self, name: &str) -> Result<f32> {
        match self.values.get(name) {
            Some(BatchValue::Scalar(s)) => Ok(*s),
            Some(_) => Err(InferError::ParamKind {
                name: name.to_string(),
                expected: "scalar",
            }),
            None => Err(InferError::MissingParam(name.to_string())),
        }
    }

    /// Typed access to a boolean flag
    pub fn flag(&self, name: &str) -> Result<bool> {
        match self.values.get(name) {
            Some(BatchValue::Flag(f)) => Ok(*f),
            Some(_) => Err(InferError::ParamKind {
                name: name.to_string(),
                expected: "flag",
            }),
            None => Err(InferError::MissingParam(name.to_string())),
        }
    }

    /// Move all tensor values to a device
    pub fn to_device(&self, device: &B::Device) -> Self {
        let values = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_device(device)))
            .collect();
        Batch { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A forward parameter: its name and its default value, if any
///
/// `default: None` means the parameter is required; `Some(v)` means `v` is
/// used whenever the batch does not provide the parameter. The two cases are
/// kept distinct by the `Option` rather than any sentinel value.
#[derive(Debug, Clone)]
pub struct ForwardParam<B: Backend> {
    pub name: String,
    pub default: Option<BatchValue<B>>,
}

/// Ordered list of the inputs a model's forward pass accepts
#[derive(Debug, Clone)]
pub struct ForwardSpec<B: Backend> {
    params: Vec<ForwardParam<B>>,
}

impl<B: Backend> Default for ForwardSpec<B> {
    fn default() -> Self {
        ForwardSpec::new()
    }
}

impl<B: Backend> ForwardSpec<B> {
    pub fn new() -> Self {
        ForwardSpec { params: Vec::new() }
    }

    /// Declare a required parameter
    pub fn required(mut self, name: &str) -> Self {
        self.params.push(ForwardParam {
            name: name.to_string(),
            default: None,
        });
        self
    }

    /// Declare an optional parameter with a default value
    pub fn with_default(mut self, name: &str, default: BatchValue<B>) -> Self {
        self.params.push(ForwardParam {
            name: name.to_string(),
            default: Some(default),
        });
        self
    }

    pub fn params(&self) -> &[ForwardParam<B>] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// A model whose forward pass is invoked through named inputs
pub trait ForwardModel<B: Backend> {
    /// Enumerate the forward parameters and their defaults
    fn forward_spec(&self) -> ForwardSpec<B>;

    /// Run the forward pass on fully resolved named inputs
    ///
    /// Callers guarantee every parameter named by [`forward_spec`] is present
    /// in `inputs`.
    ///
    /// [`forward_spec`]: ForwardModel::forward_spec
    fn forward(&self, inputs: &Batch<B>) -> Result<Tensor<B, 2>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_typed_getters() {
        let device = Default::default();
        let batch = Batch::<TestBackend>::new()
            .with_tensor("x", Tensor::ones([1, 2], &device))
            .with_scalar("s", 2.5)
            .with_flag("f", true);

        assert_eq!(batch.tensor("x").unwrap().dims(), [1, 2]);
        assert_eq!(batch.scalar("s").unwrap(), 2.5);
        assert!(batch.flag("f").unwrap());
    }

    #[test]
    fn test_getter_kind_mismatch() {
        let batch = Batch::<TestBackend>::new().with_flag("f", false);

        let err = batch.tensor("f").unwrap_err();
        assert!(matches!(
            err,
            crate::InferError::ParamKind { name, expected: "tensor" } if name == "f"
        ));
    }

    #[test]
    fn test_getter_missing_param() {
        let batch = Batch::<TestBackend>::new();
        let err = batch.scalar("absent").unwrap_err();
        assert!(matches!(err, crate::InferError::MissingParam(name) if name == "absent"));
    }

    #[test]
    fn test_spec_orders_and_flags_defaults() {
        let spec = ForwardSpec::<TestBackend>::new()
            .required("x_in")
            .with_default("apply_softmax", BatchValue::Flag(false));

        assert_eq!(spec.len(), 2);
        assert_eq!(spec.params()[0].name, "x_in");
        assert!(spec.params()[0].default.is_none());
        assert!(matches!(
            spec.params()[1].default,
            Some(BatchValue::Flag(false))
        ));
    }
}
