//! Collapsed one-hot vectorizer for text classification

use crate::vectorize::Vocabulary;
use crate::{InferError, Result, TextSample, VectorizerConfig};

/// Converts raw text into a collapsed one-hot vector over a fitted token
/// vocabulary, and maps class labels to dense indices for decoding.
///
/// Fitted once from a labeled corpus; shared read-only between the training
/// and inference sides afterwards.
#[derive(Debug, Clone)]
pub struct Vectorizer {
    tokens: Vocabulary,
    labels: Vocabulary,
}

impl Vectorizer {
    /// Fit token and label vocabularies from a labeled corpus
    ///
    /// Tokens occurring fewer than `token_cutoff` times are collapsed into
    /// the unknown token. Unlabeled samples contribute tokens only.
    pub fn fit(corpus: &[TextSample], config: &VectorizerConfig) -> Result<Self> {
        if corpus.is_empty() {
            return Err(InferError::EmptyCorpus);
        }

        let mut counts: std::collections::HashMap<String, usize> = std::collections::HashMap::new();
        for sample in corpus {
            for token in tokenize(&sample.text) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }

        let mut tokens = Vocabulary::with_unknown(&config.unknown_token);
        let mut sorted: Vec<_> = counts.into_iter().collect();
        // Stable vocabulary order regardless of hash iteration
        sorted.sort_by(|a, b| a.0.cmp(&b.0));
        for (token, count) in sorted {
            if count >= config.token_cutoff {
                tokens.add_token(&token);
            }
        }

        let mut labels = Vocabulary::new();
        for sample in corpus {
            if let Some(label) = &sample.label {
                labels.add_token(label);
            }
        }
        if labels.is_empty() {
            return Err(InferError::EmptyCorpus);
        }

        log::info!(
            "Fitted vectorizer: {} tokens, {} labels",
            tokens.len(),
            labels.len()
        );

        Ok(Vectorizer { tokens, labels })
    }

    /// Vectorize a text into a collapsed one-hot vector [input_dim]
    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut one_hot = vec![0.0f32; self.tokens.len()];
        for token in tokenize(text) {
            // Unknown-token fallback makes this lookup infallible
            if let Ok(index) = self.tokens.index_of(&token) {
                one_hot[index] = 1.0;
            }
        }
        one_hot
    }

    /// Dimension of vectorized inputs
    pub fn input_dim(&self) -> usize {
        self.tokens.len()
    }

    /// Number of distinct class labels
    pub fn num_classes(&self) -> usize {
        self.labels.len()
    }

    /// Label stored at a class index
    pub fn label_at(&self, index: usize) -> Result<&str> {
        self.labels.token_at(index)
    }

    /// Class index for a label
    pub fn label_index(&self, label: &str) -> Result<usize> {
        self.labels.index_of(label)
    }

    pub fn tokens(&self) -> &Vocabulary {
        &self.tokens
    }

    pub fn labels(&self) -> &Vocabulary {
        &self.labels
    }
}

/// Lowercase and split on non-alphanumeric boundaries
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<TextSample> {
        vec![
            TextSample::labeled("the quick brown fox", "animal"),
            TextSample::labeled("the lazy dog", "animal"),
            TextSample::labeled("a fast red car", "vehicle"),
        ]
    }

    #[test]
    fn test_fit_builds_both_vocabularies() {
        let vectorizer = Vectorizer::fit(&corpus(), &VectorizerConfig::default()).unwrap();

        assert!(vectorizer.tokens().contains("fox"));
        assert!(vectorizer.tokens().contains("car"));
        assert_eq!(vectorizer.num_classes(), 2);
        assert_eq!(vectorizer.label_index("animal").unwrap(), 0);
        assert_eq!(vectorizer.label_at(1).unwrap(), "vehicle");
    }

    #[test]
    fn test_vectorize_sets_token_positions() {
        let vectorizer = Vectorizer::fit(&corpus(), &VectorizerConfig::default()).unwrap();
        let vector = vectorizer.vectorize("the quick fox");

        assert_eq!(vector.len(), vectorizer.input_dim());
        assert_eq!(vector.iter().filter(|&&v| v == 1.0).count(), 3);

        let fox_index = vectorizer.tokens().index_of("fox").unwrap();
        assert_eq!(vector[fox_index], 1.0);
    }

    #[test]
    fn test_unseen_tokens_collapse_to_unknown() {
        let vectorizer = Vectorizer::fit(&corpus(), &VectorizerConfig::default()).unwrap();
        let vector = vectorizer.vectorize("zebra");

        // Only the unknown slot is set
        assert_eq!(vector.iter().filter(|&&v| v == 1.0).count(), 1);
        let unk_index = vectorizer.tokens().index_of("zebra").unwrap();
        assert_eq!(vector[unk_index], 1.0);
    }

    #[test]
    fn test_cutoff_drops_rare_tokens() {
        let config = VectorizerConfig {
            token_cutoff: 2,
            ..VectorizerConfig::default()
        };
        let vectorizer = Vectorizer::fit(&corpus(), &config).unwrap();

        // "the" appears twice, "fox" once
        assert!(vectorizer.tokens().contains("the"));
        assert!(!vectorizer.tokens().contains("fox"));
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let err = Vectorizer::fit(&[], &VectorizerConfig::default()).unwrap_err();
        assert!(matches!(err, InferError::EmptyCorpus));
    }

    #[test]
    fn test_tokenize_is_case_and_punctuation_insensitive() {
        let tokens: Vec<String> = tokenize("The QUICK, brown-fox!").collect();
        assert_eq!(tokens, ["the", "quick", "brown", "fox"]);
    }
}
