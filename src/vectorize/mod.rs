//! Text vectorization
//!
//! Converts raw text into model-ready numeric vectors.

pub mod vectorizer;
pub mod vocabulary;

pub use vectorizer::Vectorizer;
pub use vocabulary::Vocabulary;
