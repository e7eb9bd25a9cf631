//! Train/validation/test splits and the vectorizer fitted on them

use crate::vectorize::Vectorizer;
use crate::{Result, TextSample, VectorizerConfig};
use std::sync::Arc;

/// Dataset splits plus the vectorizer fitted on the training split
///
/// The vectorizer is shared behind an `Arc`; everything downstream of the
/// trainer (the predictor in particular) holds the same instance rather than
/// a copy.
#[derive(Debug, Clone)]
pub struct DatasetSplits {
    train: Vec<TextSample>,
    validation: Vec<TextSample>,
    test: Vec<TextSample>,
    vectorizer: Arc<Vectorizer>,
}

impl DatasetSplits {
    /// Assemble splits around an already-fitted vectorizer
    pub fn new(
        train: Vec<TextSample>,
        validation: Vec<TextSample>,
        test: Vec<TextSample>,
        vectorizer: Arc<Vectorizer>,
    ) -> Self {
        DatasetSplits {
            train,
            validation,
            test,
            vectorizer,
        }
    }

    /// Assemble splits, fitting the vectorizer on the training split
    pub fn fit(
        train: Vec<TextSample>,
        validation: Vec<TextSample>,
        test: Vec<TextSample>,
        config: &VectorizerConfig,
    ) -> Result<Self> {
        let vectorizer = Arc::new(Vectorizer::fit(&train, config)?);
        Ok(Self::new(train, validation, test, vectorizer))
    }

    pub fn train(&self) -> &[TextSample] {
        &self.train
    }

    pub fn validation(&self) -> &[TextSample] {
        &self.validation
    }

    pub fn test(&self) -> &[TextSample] {
        &self.test
    }

    pub fn vectorizer(&self) -> &Arc<Vectorizer> {
        &self.vectorizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_uses_training_split_only() {
        let train = vec![
            TextSample::labeled("good movie", "positive"),
            TextSample::labeled("bad movie", "negative"),
        ];
        let validation = vec![TextSample::labeled("stellar film", "positive")];

        let splits =
            DatasetSplits::fit(train, validation, vec![], &VectorizerConfig::default()).unwrap();

        assert!(splits.vectorizer().tokens().contains("movie"));
        // Validation-only token never entered the vocabulary
        assert!(!splits.vectorizer().tokens().contains("stellar"));
        assert_eq!(splits.train().len(), 2);
        assert_eq!(splits.validation().len(), 1);
        assert!(splits.test().is_empty());
    }

    #[test]
    fn test_vectorizer_is_shared_not_copied() {
        let vectorizer = Arc::new(
            Vectorizer::fit(
                &[TextSample::labeled("hello world", "greeting")],
                &VectorizerConfig::default(),
            )
            .unwrap(),
        );

        let splits = DatasetSplits::new(vec![], vec![], vec![], Arc::clone(&vectorizer));
        assert!(Arc::ptr_eq(splits.vectorizer(), &vectorizer));
    }
}
