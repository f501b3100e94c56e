//! # Encoder Options

use serde::{Deserialize, Serialize};

use crate::{
    NTResult,
    NerError,
    text::NormalizerOptions,
    types::IdType,
    vocab::{DEFAULT_PAD_ID, DEFAULT_UNKNOWN_ID},
};

/// Options for building model input from text.
///
/// The lengths fix the tensor shapes the model expects:
/// ``(1, sequence_length)``, ``(1, sequence_length, word_length)``,
/// and ``(1, sequence_length)``.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    /// Maximum number of word tokens.
    ///
    /// Default: `32`.
    pub sequence_length: usize,

    /// Maximum number of characters per word.
    ///
    /// Default: `8`.
    pub word_length: usize,

    /// The id of tokens absent from a vocabulary.
    ///
    /// Default: [`DEFAULT_UNKNOWN_ID`].
    pub unknown_id: u64,

    /// The padding id.
    ///
    /// Default: [`DEFAULT_PAD_ID`].
    pub pad_id: u64,

    /// Text normalization options.
    pub normalizer: NormalizerOptions,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            sequence_length: 32,
            word_length: 8,
            unknown_id: DEFAULT_UNKNOWN_ID,
            pad_id: DEFAULT_PAD_ID,
            normalizer: NormalizerOptions::default(),
        }
    }
}

impl EncoderOptions {
    /// Set the sequence length.
    pub fn with_sequence_length(
        self,
        sequence_length: usize,
    ) -> Self {
        Self {
            sequence_length,
            ..self
        }
    }

    /// Set the word length.
    pub fn with_word_length(
        self,
        word_length: usize,
    ) -> Self {
        Self {
            word_length,
            ..self
        }
    }

    /// Set the unknown id.
    pub fn with_unknown_id(
        self,
        unknown_id: u64,
    ) -> Self {
        Self { unknown_id, ..self }
    }

    /// Set the padding id.
    pub fn with_pad_id(
        self,
        pad_id: u64,
    ) -> Self {
        Self { pad_id, ..self }
    }

    /// Replace the normalizer options.
    pub fn with_normalizer(
        self,
        normalizer: NormalizerOptions,
    ) -> Self {
        Self { normalizer, ..self }
    }

    /// Convert the configured ``(unknown_id, pad_id)`` to `T`.
    pub fn special_ids<T: IdType>(&self) -> NTResult<(T, T)> {
        let convert = |key: &str, id: u64| {
            T::from_u64(id).ok_or_else(|| NerError::IdOutOfRange {
                key: key.to_string(),
                id,
            })
        };
        Ok((
            convert("unknown_id", self.unknown_id)?,
            convert("pad_id", self.pad_id)?,
        ))
    }
}
