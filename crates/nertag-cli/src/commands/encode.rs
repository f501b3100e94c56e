use std::io::{BufRead, Write};

use nertag::encoders::{EncodedInput, InputEncoder};
use serde::Serialize;

use crate::{
    input_output::{InputArgs, OutputArgs},
    tables::{EncoderArgs, VocabArgs},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    vocab: VocabArgs,

    #[command(flatten)]
    encoder: EncoderArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let encoder = self.vocab.load_encoder(self.encoder.encoder_options())?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_encode(&mut reader, &mut writer, &encoder)
    }
}

/// One output line.
#[derive(Serialize)]
struct EncodeRecord<'a> {
    normalized: &'a str,
    tokens: &'a [String],
    word_ids: &'a [u32],
    char_ids: Vec<&'a [u32]>,
    mask: &'a [u8],
    truncated: bool,
}

impl<'a> From<&'a EncodedInput<u32>> for EncodeRecord<'a> {
    fn from(encoded: &'a EncodedInput<u32>) -> Self {
        let input = &encoded.input;
        Self {
            normalized: &encoded.normalized,
            tokens: &encoded.tokens,
            word_ids: input.word_ids(),
            char_ids: (0..input.sequence_length())
                .map(|pos| input.char_row(pos))
                .collect(),
            mask: input.mask(),
            truncated: encoded.notice.is_some(),
        }
    }
}

fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    encoder: &InputEncoder<u32>,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let line = line?;
        let encoded = encoder.encode(&line);

        serde_json::to_writer(&mut *writer, &EncodeRecord::from(&encoded))?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}
