use std::path::PathBuf;

use nertag::{
    encoders::{EncoderOptions, InputEncoder},
    text::NormalizerOptions,
    vocab::{DEFAULT_PAD_ID, DEFAULT_UNKNOWN_ID, LabelTable, Vocabulary},
};

/// Text normalization args.
#[derive(clap::Args, Debug)]
pub struct NormalizeArgs {
    /// Do not split contractions (``John's -> John 's``).
    #[arg(long)]
    pub keep_apostrophes: bool,

    /// Do not split punctuation from words.
    #[arg(long)]
    pub keep_punctuation: bool,
}

impl NormalizeArgs {
    /// Build the normalizer options.
    pub fn normalizer_options(&self) -> NormalizerOptions {
        NormalizerOptions::default()
            .with_separate_apostrophes(!self.keep_apostrophes)
            .with_separate_punctuation(!self.keep_punctuation)
    }
}

/// Encoder shape and special id args.
#[derive(clap::Args, Debug)]
pub struct EncoderArgs {
    /// Max tokens per input; longer inputs are truncated.
    #[arg(long, default_value_t = 32)]
    pub sequence_length: usize,

    /// Max characters per token.
    #[arg(long, default_value_t = 8)]
    pub word_length: usize,

    /// Id for out-of-vocabulary tokens.
    #[arg(long, default_value_t = DEFAULT_UNKNOWN_ID)]
    pub unknown_id: u64,

    /// Id for padding.
    #[arg(long, default_value_t = DEFAULT_PAD_ID)]
    pub pad_id: u64,

    #[command(flatten)]
    pub normalize: NormalizeArgs,
}

impl EncoderArgs {
    /// Build the encoder options.
    pub fn encoder_options(&self) -> EncoderOptions {
        let normalizer = self.normalize.normalizer_options();

        EncoderOptions::default()
            .with_sequence_length(self.sequence_length)
            .with_word_length(self.word_length)
            .with_unknown_id(self.unknown_id)
            .with_pad_id(self.pad_id)
            .with_normalizer(normalizer)
    }
}

/// Vocabulary table args.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    /// Word vocabulary; a JSON object (or JS constant) of ``token -> id``.
    #[arg(long)]
    pub word_vocab: PathBuf,

    /// Character vocabulary; a JSON object (or JS constant) of ``char -> id``.
    #[arg(long)]
    pub char_vocab: PathBuf,
}

impl VocabArgs {
    /// Load both vocabularies, and build an encoder over them.
    pub fn load_encoder(
        &self,
        options: EncoderOptions,
    ) -> Result<InputEncoder<u32>, Box<dyn std::error::Error>> {
        let words = Vocabulary::<u32>::from_path(&self.word_vocab)?;
        let chars = Vocabulary::<u32>::from_path(&self.char_vocab)?;
        log::info!(
            "loaded {} words and {} characters",
            words.len(),
            chars.len()
        );
        Ok(InputEncoder::new(words.into(), chars.into(), options)?)
    }
}

/// Label table args.
#[derive(clap::Args, Debug)]
pub struct LabelArgs {
    /// Label table; a JSON object of ``id -> label``, or a JSON array.
    #[arg(long)]
    pub labels: PathBuf,
}

impl LabelArgs {
    /// Load the label table.
    pub fn load_labels(&self) -> Result<LabelTable, Box<dyn std::error::Error>> {
        let labels = LabelTable::from_path(&self.labels)?;
        log::info!("loaded {} labels", labels.len());
        Ok(labels)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        vocab: VocabArgs,

        #[command(flatten)]
        encoder: EncoderArgs,

        #[command(flatten)]
        labels: LabelArgs,
    }

    #[test]
    fn test_load_tables() {
        let dir = tempdir::TempDir::new("nertag_cli_tables").unwrap();
        let words = dir.path().join("words.js");
        let chars = dir.path().join("chars.json");
        let labels = dir.path().join("labels.json");
        std::fs::write(&words, "const wordVocab = {\"car\": 5};\n").unwrap();
        std::fs::write(&chars, "{\"c\": 7}").unwrap();
        std::fs::write(&labels, "[\"O\", \"B-PER\"]").unwrap();

        let args = TestArgs::parse_from([
            "nertag",
            "--word-vocab",
            words.to_str().unwrap(),
            "--char-vocab",
            chars.to_str().unwrap(),
            "--labels",
            labels.to_str().unwrap(),
            "--sequence-length",
            "3",
            "--keep-punctuation",
        ]);

        let options = args.encoder.encoder_options();
        assert_eq!(options.sequence_length, 3);
        assert_eq!(options.word_length, 8);
        assert!(options.normalizer.separate_apostrophes);
        assert!(!options.normalizer.separate_punctuation);

        let encoder = args.vocab.load_encoder(options).unwrap();
        let encoded = encoder.encode("car.");
        assert_eq!(encoded.tokens, vec!["car."]);
        assert_eq!(encoded.input.word_ids(), &[1, 0, 0]);

        let encoded = encoder.encode("car");
        assert_eq!(encoded.input.word_ids(), &[5, 0, 0]);
        assert_eq!(&encoded.input.char_row(0)[..2], &[7, 1]);

        assert_eq!(args.labels.load_labels().unwrap().get(1), "B-PER");
    }
}
