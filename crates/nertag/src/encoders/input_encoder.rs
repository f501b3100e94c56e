//! # Text to Model Input
//!
//! Builds the three fixed-shape tensors the model consumes:
//! * word ids, ``(sequence_length)``; from lower-cased word tokens;
//! * char ids, ``(sequence_length, word_length)``; from case-preserving tokens;
//! * mask, ``(sequence_length)``; `1` for real tokens, `0` for padding.

use std::sync::Arc;

use serde::Serialize;

use crate::{
    NTResult,
    encoders::{
        EncoderOptions,
        sequence::{pad_right, prefix_mask},
    },
    text::{Normalizer, TokenizeOptions, tokenize},
    types::IdType,
    vocab::Vocabulary,
};

/// Advisory signal: the input had more word tokens than fit the sequence.
///
/// Encoding still proceeds, on the truncated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruncationNotice {
    /// The sequence length limit.
    pub limit: usize,

    /// The number of word tokens in the input.
    pub token_count: usize,
}

impl core::fmt::Display for TruncationNotice {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        write!(
            f,
            "Input length longer than {} tokens will be truncated ({} tokens). \
             Consider splitting to shorter sequences.",
            self.limit, self.token_count
        )
    }
}

/// The model input tensors, with the batch dimension squeezed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelInput<T: IdType> {
    sequence_length: usize,
    word_length: usize,
    word_ids: Vec<T>,
    char_ids: Vec<T>,
    mask: Vec<u8>,
}

impl<T: IdType> ModelInput<T> {
    /// The sequence length.
    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// The word length.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Word ids; ``sequence_length`` entries.
    pub fn word_ids(&self) -> &[T] {
        &self.word_ids
    }

    /// Character ids, row-major; ``sequence_length * word_length`` entries.
    pub fn char_ids(&self) -> &[T] {
        &self.char_ids
    }

    /// The character ids of the word at `position`.
    ///
    /// ## Panics
    /// If `position >= sequence_length`.
    pub fn char_row(
        &self,
        position: usize,
    ) -> &[T] {
        let start = position * self.word_length;
        &self.char_ids[start..start + self.word_length]
    }

    /// The padding mask; ``sequence_length`` entries of `0` or `1`.
    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// The number of unmasked positions.
    pub fn true_token_count(&self) -> usize {
        self.mask.iter().filter(|&&m| m != 0).count()
    }

    /// The batched shapes: ``[(1, L), (1, L, W), (1, L)]``.
    pub fn batch_shapes(&self) -> [Vec<usize>; 3] {
        let (l, w) = (self.sequence_length, self.word_length);
        [vec![1, l], vec![1, l, w], vec![1, l]]
    }
}

/// The full result of encoding one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedInput<T: IdType> {
    /// The normalized text.
    pub normalized: String,

    /// Case-preserving word tokens; truncated to the sequence length.
    pub tokens: Vec<String>,

    /// The model tensors.
    pub input: ModelInput<T>,

    /// Set if the input was truncated.
    pub notice: Option<TruncationNotice>,
}

/// Encodes text into [`ModelInput`] against fixed vocabularies.
#[derive(Debug, Clone)]
pub struct InputEncoder<T: IdType> {
    options: EncoderOptions,
    normalizer: Normalizer,
    word_vocab: Arc<Vocabulary<T>>,
    char_vocab: Arc<Vocabulary<T>>,
    unknown_id: T,
    pad_id: T,
}

impl<T: IdType> InputEncoder<T> {
    /// Build an encoder.
    ///
    /// ## Arguments
    /// * `word_vocab` - lower-cased word vocabulary.
    /// * `char_vocab` - case-preserving character vocabulary.
    /// * `options` - lengths, special ids and normalizer options.
    ///
    /// ## Returns
    /// A `Result` with the encoder; fails if the normalizer cannot be
    /// compiled, or the special ids do not fit `T`.
    pub fn new(
        word_vocab: Arc<Vocabulary<T>>,
        char_vocab: Arc<Vocabulary<T>>,
        options: EncoderOptions,
    ) -> NTResult<Self> {
        let normalizer = options.normalizer.build()?;
        let (unknown_id, pad_id) = options.special_ids::<T>()?;
        Ok(Self {
            options,
            normalizer,
            word_vocab,
            char_vocab,
            unknown_id,
            pad_id,
        })
    }

    /// The encoder options.
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// The compiled normalizer.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Encode `text`.
    pub fn encode(
        &self,
        text: &str,
    ) -> EncodedInput<T> {
        let sequence_length = self.options.sequence_length;
        let word_length = self.options.word_length;

        let normalized = self.normalizer.normalize(text);

        let lower_words = tokenize(&normalized, TokenizeOptions::LOWER_WORDS);
        let word_ids = pad_right(
            &self.word_vocab.encode_all(&lower_words, self.unknown_id),
            sequence_length,
            self.pad_id,
        );

        let mut tokens = tokenize(&normalized, TokenizeOptions::WORDS);
        tokens.truncate(sequence_length);

        let mut char_ids = Vec::with_capacity(sequence_length * word_length);
        for position in 0..sequence_length {
            let word = tokens.get(position).map_or("", String::as_str);
            let chars = tokenize(word, TokenizeOptions::CHARS);
            char_ids.extend(pad_right(
                &self.char_vocab.encode_all(&chars, self.unknown_id),
                word_length,
                self.pad_id,
            ));
        }

        let mask = prefix_mask(tokens.len(), sequence_length);

        let notice = (lower_words.len() > sequence_length).then(|| TruncationNotice {
            limit: sequence_length,
            token_count: lower_words.len(),
        });
        if let Some(notice) = &notice {
            log::warn!("{notice}");
        }

        EncodedInput {
            normalized,
            tokens,
            input: ModelInput {
                sequence_length,
                word_length,
                word_ids,
                char_ids,
                mask,
            },
            notice,
        }
    }
}

/// Encode `text` with a one-off [`InputEncoder`].
pub fn build_input<T: IdType>(
    text: &str,
    word_vocab: Arc<Vocabulary<T>>,
    char_vocab: Arc<Vocabulary<T>>,
    options: &EncoderOptions,
) -> NTResult<EncodedInput<T>> {
    Ok(InputEncoder::new(word_vocab, char_vocab, options.clone())?.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabs() -> (Arc<Vocabulary<u32>>, Arc<Vocabulary<u32>>) {
        let words = Vocabulary::from_pairs([
            ("john", 2),
            ("'s", 3),
            ("car", 4),
            ("is", 5),
            ("red", 6),
            (".", 7),
        ]);
        let chars = Vocabulary::from_pairs([("J", 2), ("o", 3), ("h", 4), ("n", 5), ("'", 6)]);
        (Arc::new(words), Arc::new(chars))
    }

    #[test]
    fn test_encode_example() {
        let (words, chars) = vocabs();
        let options = EncoderOptions::default()
            .with_sequence_length(8)
            .with_word_length(4);
        let encoded = build_input("John's car is red.", words, chars, &options).unwrap();

        assert_eq!(encoded.normalized, "John 's car is red .");
        assert_eq!(encoded.tokens, vec!["John", "'s", "car", "is", "red", "."]);
        assert_eq!(encoded.notice, None);

        let input = &encoded.input;
        assert_eq!(input.word_ids(), &[2, 3, 4, 5, 6, 7, 0, 0]);
        assert_eq!(input.mask(), &[1, 1, 1, 1, 1, 1, 0, 0]);
        assert_eq!(input.true_token_count(), 6);
        assert_eq!(input.char_ids().len(), 8 * 4);
        assert_eq!(input.char_row(0), &[2, 3, 4, 5]);
        // `'s`: `'` known, `s` unknown.
        assert_eq!(input.char_row(1), &[6, 1, 0, 0]);
        assert_eq!(input.char_row(7), &[0, 0, 0, 0]);
        assert_eq!(input.batch_shapes(), [vec![1, 8], vec![1, 8, 4], vec![1, 8]]);
    }

    #[test]
    fn test_truncation() {
        let (words, chars) = vocabs();
        let options = EncoderOptions::default().with_sequence_length(4);
        let encoded = build_input("john car is red car is", words, chars, &options).unwrap();

        assert_eq!(encoded.tokens, vec!["john", "car", "is", "red"]);
        assert_eq!(encoded.input.word_ids(), &[2, 4, 5, 6]);
        assert_eq!(encoded.input.mask(), &[1, 1, 1, 1]);
        assert_eq!(
            encoded.notice,
            Some(TruncationNotice {
                limit: 4,
                token_count: 6,
            })
        );
        assert!(
            encoded
                .notice
                .unwrap()
                .to_string()
                .starts_with("Input length longer than 4 tokens")
        );
    }

    #[test]
    fn test_long_words_truncated() {
        let (words, chars) = vocabs();
        let options = EncoderOptions::default()
            .with_sequence_length(2)
            .with_word_length(3);
        let encoded = build_input("Johnny", words, chars, &options).unwrap();

        assert_eq!(encoded.input.char_row(0), &[2, 3, 4]);
        assert_eq!(encoded.input.word_ids(), &[1, 0]);
    }

    #[test]
    fn test_unknown_chars_never_fail() {
        let (words, chars) = vocabs();
        let options = EncoderOptions::default().with_word_length(4);
        let encoded = build_input("zzz", words, chars, &options).unwrap();
        assert_eq!(encoded.input.char_row(0), &[1, 1, 1, 0]);
    }

    #[test]
    fn test_custom_special_ids() {
        let (words, chars) = vocabs();
        let options = EncoderOptions::default()
            .with_sequence_length(3)
            .with_word_length(2)
            .with_unknown_id(9)
            .with_pad_id(8);
        let encoded = build_input("xx car", words, chars, &options).unwrap();

        assert_eq!(encoded.input.word_ids(), &[9, 4, 8]);
        assert_eq!(encoded.input.char_row(0), &[9, 9]);
        assert_eq!(encoded.input.char_row(2), &[8, 8]);
        // The mask is independent of the pad id.
        assert_eq!(encoded.input.mask(), &[1, 1, 0]);
    }

    #[test]
    fn test_consecutive_spaces_are_tokens() {
        let (words, chars) = vocabs();
        let options = EncoderOptions::default().with_sequence_length(4);
        let encoded = build_input("car  red", words, chars, &options).unwrap();

        assert_eq!(encoded.tokens, vec!["car", "", "red"]);
        assert_eq!(encoded.input.word_ids(), &[4, 1, 6, 0]);
        assert_eq!(encoded.input.true_token_count(), 3);
    }

    proptest::proptest! {
        #[test]
        fn shapes_and_mask_hold(text in "[a-zA-Z .,']{0,80}", l in 1usize..12, w in 1usize..6) {
            let (words, chars) = vocabs();
            let options = EncoderOptions::default()
                .with_sequence_length(l)
                .with_word_length(w);
            let encoded = build_input(&text, words, chars, &options).unwrap();

            let all = tokenize(&encoded.normalized, TokenizeOptions::WORDS);
            proptest::prop_assert_eq!(encoded.tokens.len(), all.len().min(l));
            proptest::prop_assert_eq!(encoded.input.word_ids().len(), l);
            proptest::prop_assert_eq!(encoded.input.char_ids().len(), l * w);
            proptest::prop_assert_eq!(encoded.input.true_token_count(), encoded.tokens.len());
            proptest::prop_assert_eq!(encoded.notice.is_some(), all.len() > l);
        }
    }
}
