//! # End-to-End Tagging Pipeline

use std::{path::Path, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    NTResult,
    NerError,
    encoders::{EncodedInput, EncoderOptions, InputEncoder, TruncationNotice},
    highlight::{CategoryMap, Highlighter},
    predict::{ScoreMatrix, TagModel, decode_scores},
    types::IdType,
    vocab::{LabelTable, Vocabulary},
};

/// Options for [`NerPipeline`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Encoding options.
    pub encoder: EncoderOptions,

    /// Highlight categories.
    pub categories: CategoryMap,
}

impl PipelineOptions {
    /// Replace the encoder options.
    pub fn with_encoder(
        self,
        encoder: EncoderOptions,
    ) -> Self {
        Self { encoder, ..self }
    }

    /// Replace the category map.
    pub fn with_categories(
        self,
        categories: CategoryMap,
    ) -> Self {
        Self { categories, ..self }
    }
}

/// The read-only lookup tables a pipeline runs against.
#[derive(Debug, Clone)]
pub struct PipelineTables<T: IdType> {
    /// Lower-cased word vocabulary.
    pub word_vocab: Arc<Vocabulary<T>>,

    /// Case-preserving character vocabulary.
    pub char_vocab: Arc<Vocabulary<T>>,

    /// Label table.
    pub labels: Arc<LabelTable>,
}

impl<T: IdType> PipelineTables<T> {
    /// Bundle loaded tables.
    pub fn new(
        word_vocab: Vocabulary<T>,
        char_vocab: Vocabulary<T>,
        labels: LabelTable,
    ) -> Self {
        Self {
            word_vocab: Arc::new(word_vocab),
            char_vocab: Arc::new(char_vocab),
            labels: Arc::new(labels),
        }
    }

    /// Load all three tables from JSON (or JS constant) files.
    pub fn load<P: AsRef<Path>>(
        word_vocab: P,
        char_vocab: P,
        labels: P,
    ) -> NTResult<Self> {
        Ok(Self::new(
            Vocabulary::from_path(word_vocab)?,
            Vocabulary::from_path(char_vocab)?,
            LabelTable::from_path(labels)?,
        ))
    }
}

/// Tokens and their predicted labels.
///
/// `tokens` and `labels` always have the same length; at most the
/// sequence length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// Case-preserving word tokens.
    pub tokens: Vec<String>,

    /// One label per token.
    pub labels: Vec<String>,

    /// Set if the input was truncated.
    pub notice: Option<TruncationNotice>,
}

impl Prediction {
    /// Decode model `scores` for an encoded input.
    ///
    /// ## Arguments
    /// * `encoded` - the encoded input the scores were computed for.
    /// * `scores` - the model output.
    /// * `labels` - the label table.
    pub fn from_scores<T: IdType>(
        encoded: EncodedInput<T>,
        scores: &ScoreMatrix,
        labels: &LabelTable,
    ) -> NTResult<Self> {
        let ids = decode_scores(
            scores,
            encoded.input.sequence_length(),
            encoded.input.true_token_count(),
        )?;
        let labels = labels.decode(&ids);

        if labels.len() != encoded.tokens.len() {
            return Err(NerError::LengthMismatch {
                left: encoded.tokens.len(),
                right: labels.len(),
            });
        }

        Ok(Self {
            tokens: encoded.tokens,
            labels,
            notice: encoded.notice,
        })
    }

    /// Iterate over ``(token, label)`` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .map(String::as_str)
            .zip(self.labels.iter().map(String::as_str))
    }
}

/// A rendered prediction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlighted {
    /// The markup.
    pub markup: String,

    /// The underlying prediction.
    pub prediction: Prediction,
}

/// Immutable tagging context: tables, model, and options.
///
/// Every call is independent; nothing is cached or mutated between calls,
/// so a pipeline may be shared freely across threads.
pub struct NerPipeline<T: IdType, M: TagModel<T>> {
    encoder: InputEncoder<T>,
    labels: Arc<LabelTable>,
    highlighter: Highlighter,
    model: M,
}

impl<T, M> NerPipeline<T, M>
where
    T: IdType,
    M: TagModel<T>,
{
    /// Build a pipeline.
    ///
    /// ## Arguments
    /// * `tables` - the loaded lookup tables.
    /// * `model` - the tagging model.
    /// * `options` - encoder and highlight options.
    pub fn new(
        tables: PipelineTables<T>,
        model: M,
        options: PipelineOptions,
    ) -> NTResult<Self> {
        let encoder = InputEncoder::new(tables.word_vocab, tables.char_vocab, options.encoder)?;
        Ok(Self {
            encoder,
            labels: tables.labels,
            highlighter: Highlighter::new(options.categories),
            model,
        })
    }

    /// The input encoder.
    pub fn encoder(&self) -> &InputEncoder<T> {
        &self.encoder
    }

    /// The label table.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// The highlighter.
    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// The model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Tag `text`.
    ///
    /// Over-long input is truncated; see [`Prediction::notice`].
    pub fn run_inference(
        &self,
        text: &str,
    ) -> NTResult<Prediction> {
        let encoded = self.encoder.encode(text);
        let scores = self.model.predict(&encoded.input)?;
        let prediction = Prediction::from_scores(encoded, &scores, &self.labels)?;
        log::debug!("tagged {} tokens", prediction.tokens.len());
        Ok(prediction)
    }

    /// Tag `text`, and render it as markup.
    pub fn highlight(
        &self,
        text: &str,
    ) -> NTResult<Highlighted> {
        let prediction = self.run_inference(text)?;
        let markup = self
            .highlighter
            .render(text, &prediction.tokens, &prediction.labels)?;
        Ok(Highlighted { markup, prediction })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encoders::ModelInput,
        types::{check_is_send, check_is_sync},
    };

    /// Scores each token's label from a fixed per-position list.
    fn fixed_model(ids: Vec<usize>) -> impl TagModel<u32> {
        move |input: &ModelInput<u32>| {
            let rows: Vec<Vec<f32>> = (0..input.sequence_length())
                .map(|pos| {
                    let mut row = vec![0.0; 5];
                    row[ids.get(pos).copied().unwrap_or(0)] = 1.0;
                    row
                })
                .collect();
            ScoreMatrix::from_rows(&rows)
        }
    }

    fn tables() -> PipelineTables<u32> {
        PipelineTables::new(
            Vocabulary::from_pairs([("john", 2), ("car", 3)]),
            Vocabulary::from_pairs([("J", 2)]),
            LabelTable::from_list(["O", "B-PER", "I-PER", "B-LOC"]),
        )
    }

    #[test]
    fn test_highlight_example() {
        let options = PipelineOptions::default()
            .with_encoder(EncoderOptions::default().with_sequence_length(8));
        let pipeline = NerPipeline::new(tables(), fixed_model(vec![1, 0, 0, 0, 0, 0]), options)
            .unwrap();
        check_is_send(&pipeline);
        check_is_sync(&pipeline);

        let result = pipeline.highlight("John's car is red.").unwrap();
        assert_eq!(
            result.prediction.tokens,
            vec!["John", "'s", "car", "is", "red", "."]
        );
        assert_eq!(
            result.prediction.labels,
            vec!["B-PER", "O", "O", "O", "O", "O"]
        );
        assert_eq!(
            result.markup,
            "<span class=\"highlightPer\" style=\"font-weight:bold\" title=\"B-PER\">John</span>\
             &#39;s car is red."
        );
        assert_eq!(result.prediction.notice, None);
    }

    #[test]
    fn test_unknown_label_ids() {
        let pipeline = NerPipeline::new(
            tables(),
            fixed_model(vec![4, 3]),
            PipelineOptions::default(),
        )
        .unwrap();

        let prediction = pipeline.run_inference("Paris London").unwrap();
        assert_eq!(prediction.labels, vec!["UNK", "B-LOC"]);
        assert_eq!(
            prediction.pairs().collect::<Vec<_>>(),
            vec![("Paris", "UNK"), ("London", "B-LOC")]
        );

        let markup = pipeline.highlight("Paris London").unwrap().markup;
        assert!(markup.starts_with("Paris <span class=\"highlightLoc\""));
    }

    #[test]
    fn test_truncation_notice() {
        let options = PipelineOptions::default()
            .with_encoder(EncoderOptions::default().with_sequence_length(4));
        let pipeline = NerPipeline::new(tables(), fixed_model(vec![1; 8]), options).unwrap();

        let prediction = pipeline.run_inference("a b c d e f").unwrap();
        assert_eq!(prediction.tokens, vec!["a", "b", "c", "d"]);
        assert_eq!(prediction.labels.len(), 4);
        assert_eq!(
            prediction.notice,
            Some(TruncationNotice {
                limit: 4,
                token_count: 6,
            })
        );
    }

    #[test]
    fn test_model_failure_propagates() {
        let model = |_: &ModelInput<u32>| -> NTResult<ScoreMatrix> {
            Err(NerError::Model("tensor rank".to_string()))
        };
        let pipeline = NerPipeline::new(tables(), model, PipelineOptions::default()).unwrap();
        assert!(matches!(
            pipeline.run_inference("John"),
            Err(NerError::Model(_))
        ));
    }

    #[test]
    fn test_load_tables() {
        let dir = tempdir::TempDir::new("nertag_pipeline").unwrap();
        let words = dir.path().join("wordVocab.js");
        let chars = dir.path().join("charVocab.js");
        let labels = dir.path().join("labels.js");
        std::fs::write(&words, "const wordVocab = {\"john\": 2};").unwrap();
        std::fs::write(&chars, "{\"J\": 2}").unwrap();
        std::fs::write(&labels, "const labels = {\"0\": \"O\", \"1\": \"B-PER\"};").unwrap();

        let tables = PipelineTables::<u32>::load(&words, &chars, &labels).unwrap();
        assert_eq!(tables.word_vocab.get("john"), Some(2));
        assert_eq!(tables.labels.get(1), "B-PER");

        let missing = dir.path().join("missing.js");
        assert!(PipelineTables::<u32>::load(&words, &chars, &missing).is_err());
    }
}
