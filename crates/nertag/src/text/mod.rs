//! # Text Processing
//!
//! * [`Normalizer`] separates contractions and punctuation with spaces.
//! * [`tokenize`] splits normalized text into words, or a word into characters.

pub mod normalizer;
pub mod tokenizer;

#[doc(inline)]
pub use normalizer::{DEFAULT_PUNCTUATION, Normalizer, NormalizerOptions, normalize};
#[doc(inline)]
pub use tokenizer::{TokenizeOptions, tokenize};
