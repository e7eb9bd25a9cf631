//! End-to-end demo: fit a vectorizer, hand a model through a trainer, and
//! run the JSON-to-JSON classification pipeline.
//!
//! The model here is freshly initialized rather than trained, so the labels
//! it picks are arbitrary; the point is the pipeline wiring.

use burn::backend::{Autodiff, NdArray};
use textinfer::data::DatasetSplits;
use textinfer::model::{ClassifierConfig, TextClassifier};
use textinfer::predict::{ClassificationPredictor, PredictorHyperParams};
use textinfer::training::BasicTrainer;
use textinfer::{Result, TextSample, VectorizerConfig};

type TrainBackend = Autodiff<NdArray<f32>>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let train = vec![
        TextSample::labeled("what a great and wonderful film", "positive"),
        TextSample::labeled("an absolute joy to watch", "positive"),
        TextSample::labeled("terrible boring waste of time", "negative"),
        TextSample::labeled("the worst film of the year", "negative"),
    ];
    let splits = DatasetSplits::fit(train, vec![], vec![], &VectorizerConfig::default())?;

    let device = Default::default();
    let config = ClassifierConfig::new(
        splits.vectorizer().input_dim(),
        splits.vectorizer().num_classes(),
    );
    let model = TextClassifier::<TrainBackend>::new(&device, config);
    let trainer = BasicTrainer::new(model, splits, device);

    let predictor = ClassificationPredictor::new(PredictorHyperParams::from_trainer(&trainer));

    for text in ["a wonderful film", "what a waste of time"] {
        let output = predictor.predict_text(text)?;
        println!("{} -> {}", text, serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
