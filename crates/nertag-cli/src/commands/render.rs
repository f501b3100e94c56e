use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use nertag::{
    encoders::TruncationNotice,
    highlight::{CategoryMap, Highlighter},
    pipeline::{Highlighted, Prediction},
    predict::{ScoreMatrix, decode_scores},
    text::{Normalizer, TokenizeOptions, tokenize},
    vocab::LabelTable,
};
use serde::Deserialize;

use crate::{
    input_output::{InputArgs, OutputArgs},
    tables::{LabelArgs, NormalizeArgs},
};

/// Args for the render command.
#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    labels: LabelArgs,

    #[command(flatten)]
    normalize: NormalizeArgs,

    /// Optional category map; a JSON object keyed by category.
    #[arg(long)]
    categories: Option<PathBuf>,

    /// Write one JSON object (markup, tokens, labels) per line.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl RenderArgs {
    /// Run the render command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let categories = match &self.categories {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => CategoryMap::default(),
        };

        let renderer = Renderer {
            normalizer: self.normalize.normalizer_options().build()?,
            labels: self.labels.load_labels()?,
            highlighter: Highlighter::new(categories),
        };

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        renderer.run(&mut reader, &mut writer, self.json)
    }
}

/// One input line.
#[derive(Deserialize)]
struct RenderRequest {
    /// The text the model was run on.
    text: String,

    /// Tokens; derived from `text` when absent.
    #[serde(default)]
    tokens: Option<Vec<String>>,

    /// ``sequence_length x num_labels`` model scores.
    scores: Vec<Vec<f32>>,
}

struct Renderer {
    normalizer: Normalizer,
    labels: LabelTable,
    highlighter: Highlighter,
}

impl Renderer {
    fn render(
        &self,
        request: RenderRequest,
    ) -> Result<Highlighted, Box<dyn std::error::Error>> {
        let scores = ScoreMatrix::from_rows(&request.scores)?;
        let sequence_length = scores.rows();

        let mut tokens = request.tokens.unwrap_or_else(|| {
            tokenize(
                &self.normalizer.normalize(&request.text),
                TokenizeOptions::WORDS,
            )
        });

        let notice = (tokens.len() > sequence_length).then(|| TruncationNotice {
            limit: sequence_length,
            token_count: tokens.len(),
        });
        if let Some(notice) = &notice {
            log::warn!("{notice}");
        }
        tokens.truncate(sequence_length);

        let ids = decode_scores(&scores, sequence_length, tokens.len())?;
        let labels = self.labels.decode(&ids);
        let markup = self.highlighter.render(&request.text, &tokens, &labels)?;

        Ok(Highlighted {
            markup,
            prediction: Prediction {
                tokens,
                labels,
                notice,
            },
        })
    }

    fn run(
        &self,
        reader: &mut dyn BufRead,
        writer: &mut dyn Write,
        json: bool,
    ) -> Result<(), Box<dyn std::error::Error>> {
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let highlighted = self.render(serde_json::from_str(&line)?)?;
            if json {
                serde_json::to_writer(&mut *writer, &highlighted)?;
                writeln!(writer)?;
            } else {
                writeln!(writer, "{}", highlighted.markup)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}
