//! Concrete predictor for text classification

use crate::model::{Batch, TextClassifier};
use crate::predict::{JsonPredictor, Predictor, PredictorHyperParams};
use crate::{InferError, Result};
use burn::tensor::backend::Backend;
use burn::tensor::Tensor;
use serde_json::{json, Value};

/// JSON-to-JSON predictor for the [`TextClassifier`]
///
/// Input: `{"text": "..."}`. Output: a document with one prediction per
/// example carrying the class label and its softmax probability.
pub struct ClassificationPredictor<B: Backend> {
    engine: Predictor<B, TextClassifier<B>>,
}

impl<B: Backend> ClassificationPredictor<B> {
    pub fn new(params: PredictorHyperParams<TextClassifier<B>>) -> Self {
        ClassificationPredictor {
            engine: Predictor::new(params),
        }
    }

    /// Classify a single text, going through the full JSON pipeline
    pub fn predict_text(&self, text: &str) -> Result<Value> {
        self.json_to_json(&json!({ "text": text }))
    }
}

impl<B: Backend> JsonPredictor<B> for ClassificationPredictor<B> {
    type Model = TextClassifier<B>;

    fn engine(&self) -> &Predictor<B, Self::Model> {
        &self.engine
    }

    fn json_to_data(&self, input: &Value) -> Result<Batch<B>> {
        let text = input
            .get("text")
            .and_then(Value::as_str)
            .ok_or(InferError::MissingField("text"))?;

        let vector = self.engine.vectorizer().vectorize(text);
        let dim = vector.len();
        let x_in =
            Tensor::<B, 1>::from_floats(vector.as_slice(), self.engine.device()).reshape([1, dim]);

        Ok(Batch::new()
            .with_tensor("x_in", x_in)
            .with_flag("apply_softmax", true))
    }

    fn decode(&self, output: &Tensor<B, 2>) -> Result<Vec<Value>> {
        let [_rows, classes] = output.dims();
        let data = output.to_data();
        let probs = data
            .as_slice::<f32>()
            .map_err(|e| InferError::Tensor(format!("{:?}", e)))?;

        let mut decoded = Vec::with_capacity(probs.len() / classes);
        for row in probs.chunks(classes) {
            let (index, probability) = row
                .iter()
                .enumerate()
                .max_by(|a, b| a.1.total_cmp(b.1))
                .ok_or_else(|| InferError::Tensor("empty output row".to_string()))?;

            let label = self.engine.vectorizer().label_at(index)?;
            decoded.push(json!({
                "label": label,
                "probability": probability,
            }));
        }

        Ok(decoded)
    }

    fn output_to_json(&self, decoded: Vec<Value>) -> Result<Value> {
        Ok(json!({ "predictions": decoded }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DatasetSplits;
    use crate::model::ClassifierConfig;
    use crate::training::BasicTrainer;
    use crate::{TextSample, VectorizerConfig};
    use burn::backend::{Autodiff, NdArray};

    type TestBackend = NdArray<f32>;
    type TrainBackend = Autodiff<NdArray<f32>>;

    fn build_predictor() -> ClassificationPredictor<TestBackend> {
        let device = Default::default();
        let splits = DatasetSplits::fit(
            vec![
                TextSample::labeled("great wonderful film", "positive"),
                TextSample::labeled("terrible boring film", "negative"),
            ],
            vec![],
            vec![],
            &VectorizerConfig::default(),
        )
        .unwrap();

        let config = ClassifierConfig::new(
            splits.vectorizer().input_dim(),
            splits.vectorizer().num_classes(),
        );
        let model = TextClassifier::<TrainBackend>::new(&device, config);
        let trainer = BasicTrainer::new(model, splits, device);

        ClassificationPredictor::new(PredictorHyperParams::from_trainer(&trainer))
    }

    #[test]
    fn test_json_to_json_round_trip() {
        let predictor = build_predictor();
        let input = json!({"text": "a wonderful film"});

        let output = predictor.json_to_json(&input).unwrap();
        let predictions = output["predictions"].as_array().unwrap();
        assert_eq!(predictions.len(), 1);

        let label = predictions[0]["label"].as_str().unwrap();
        assert!(label == "positive" || label == "negative");

        let probability = predictions[0]["probability"].as_f64().unwrap();
        assert!((0.0..=1.0).contains(&probability));
    }

    #[test]
    fn test_json_to_json_is_deterministic() {
        let predictor = build_predictor();
        let input = json!({"text": "boring film"});

        let first = predictor.json_to_json(&input).unwrap();
        let second = predictor.json_to_json(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_text_field() {
        let predictor = build_predictor();
        let err = predictor.json_to_json(&json!({"body": "hi"})).unwrap_err();
        assert!(matches!(err, InferError::MissingField("text")));
    }

    #[test]
    fn test_predict_text_matches_pipeline() {
        let predictor = build_predictor();
        let via_helper = predictor.predict_text("great film").unwrap();
        let via_pipeline = predictor
            .json_to_json(&json!({"text": "great film"}))
            .unwrap();
        assert_eq!(via_helper, via_pipeline);
    }

    #[test]
    fn test_decode_handles_multi_example_batches() {
        let predictor = build_predictor();
        let dim = predictor.engine().vectorizer().input_dim();

        let device = Default::default();
        let batch = Batch::new()
            .with_tensor("x_in", Tensor::ones([3, dim], &device))
            .with_flag("apply_softmax", true);
        let output = predictor.engine().infer(batch).unwrap();

        let decoded = predictor.decode(&output).unwrap();
        assert_eq!(decoded.len(), 3);
        // Identical inputs decode identically
        assert_eq!(decoded[0], decoded[1]);
    }
}
