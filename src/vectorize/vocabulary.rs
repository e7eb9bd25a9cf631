//! Token and label vocabularies

use crate::{InferError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bidirectional mapping between tokens and dense indices
///
/// A vocabulary may carry an unknown token; lookups of absent tokens then
/// resolve to its index instead of failing. Label vocabularies are built
/// without one, so an unseen label is an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    token_to_index: HashMap<String, usize>,
    index_to_token: Vec<String>,
    unknown_index: Option<usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary with no unknown token
    pub fn new() -> Self {
        Vocabulary::default()
    }

    /// Create a vocabulary whose first entry is the unknown token
    pub fn with_unknown(unknown_token: &str) -> Self {
        let mut vocab = Vocabulary::new();
        let index = vocab.add_token(unknown_token);
        vocab.unknown_index = Some(index);
        vocab
    }

    /// Add a token, returning its index; adding an existing token is a no-op
    pub fn add_token(&mut self, token: &str) -> usize {
        if let Some(&index) = self.token_to_index.get(token) {
            return index;
        }
        let index = self.index_to_token.len();
        self.token_to_index.insert(token.to_string(), index);
        self.index_to_token.push(token.to_string());
        index
    }

    /// Look up a token's index, falling back to the unknown token if present
    pub fn index_of(&self, token: &str) -> Result<usize> {
        self.token_to_index
            .get(token)
            .copied()
            .or(self.unknown_index)
            .ok_or_else(|| InferError::UnknownToken(token.to_string()))
    }

    /// Look up the token stored at an index
    pub fn token_at(&self, index: usize) -> Result<&str> {
        self.index_to_token
            .get(index)
            .map(String::as_str)
            .ok_or(InferError::UnknownLabel(index))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.token_to_index.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.index_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index_to_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut vocab = Vocabulary::new();
        let a = vocab.add_token("alpha");
        let b = vocab.add_token("beta");

        assert_eq!(vocab.index_of("alpha").unwrap(), a);
        assert_eq!(vocab.index_of("beta").unwrap(), b);
        assert_eq!(vocab.token_at(a).unwrap(), "alpha");
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut vocab = Vocabulary::new();
        let first = vocab.add_token("alpha");
        let second = vocab.add_token("alpha");

        assert_eq!(first, second);
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn test_unknown_token_fallback() {
        let vocab = Vocabulary::with_unknown("<unk>");
        assert_eq!(vocab.index_of("never-seen").unwrap(), 0);
    }

    #[test]
    fn test_missing_token_without_unknown() {
        let vocab = Vocabulary::new();
        let err = vocab.index_of("absent").unwrap_err();
        assert!(matches!(err, InferError::UnknownToken(t) if t == "absent"));
    }

    #[test]
    fn test_index_out_of_range() {
        let vocab = Vocabulary::new();
        assert!(matches!(
            vocab.token_at(3),
            Err(InferError::UnknownLabel(3))
        ));
    }
}
