//! # ``CoNLL`` Corpus IO
//!
//! Reads tagged corpora in the column format (one token per line, the
//! tag in the last column, blank lines between sentences), and reads and
//! writes the vertical ``token gold predicted`` evaluation format.

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{NTResult, NerError};

/// The first column of document separator lines.
pub const DOCSTART: &str = "-DOCSTART-";

/// A tokenized sentence with one gold tag per token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSentence {
    /// The tokens.
    pub tokens: Vec<String>,

    /// One tag per token.
    pub tags: Vec<String>,
}

impl TaggedSentence {
    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the sentence empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// A sentence with gold and predicted tags, as in an evaluation file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalSentence {
    /// The tokens.
    pub tokens: Vec<String>,

    /// Gold tags.
    pub gold: Vec<String>,

    /// Predicted tags.
    pub predicted: Vec<String>,
}

/// Split a reader into sentences of whitespace-separated fields.
///
/// Blank lines end sentences; document separator lines are dropped.
fn read_blocks<R: BufRead>(reader: R) -> NTResult<Vec<Vec<(usize, Vec<String>)>>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();

        if fields.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        if fields[0] == DOCSTART {
            continue;
        }
        current.push((idx + 1, fields));
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    Ok(blocks)
}

/// Read a tagged corpus.
///
/// Each non-blank line holds a token in the first column and its tag in
/// the last; intermediate columns are ignored. A final sentence without
/// a trailing blank line is kept.
pub fn read_conll<R: BufRead>(reader: R) -> NTResult<Vec<TaggedSentence>> {
    let sentences = read_blocks(reader)?
        .into_iter()
        .map(|block| {
            let mut sentence = TaggedSentence::default();
            for (_, mut fields) in block {
                // `fields` is non-empty.
                let tag = fields.pop().unwrap_or_default();
                let token = if fields.is_empty() {
                    tag.clone()
                } else {
                    fields.swap_remove(0)
                };
                sentence.tokens.push(token);
                sentence.tags.push(tag);
            }
            sentence
        })
        .collect::<Vec<_>>();

    log::debug!("read {} tagged sentences", sentences.len());
    Ok(sentences)
}

/// Read a tagged corpus from a file.
pub fn read_conll_path<P: AsRef<Path>>(path: P) -> NTResult<Vec<TaggedSentence>> {
    read_conll(BufReader::new(File::open(path)?))
}

/// Read a vertical evaluation file.
///
/// Each non-blank line holds a token first, then the gold and predicted
/// tags in the last two columns.
///
/// ## Returns
/// The sentences; or [`NerError::Parse`] for lines with fewer than three columns.
pub fn read_eval_file<R: BufRead>(reader: R) -> NTResult<Vec<EvalSentence>> {
    read_blocks(reader)?
        .into_iter()
        .map(|block| {
            let mut sentence = EvalSentence::default();
            for (line, mut fields) in block {
                if fields.len() < 3 {
                    return Err(NerError::Parse(format!(
                        "line {line}: expected `token gold predicted`, found {} column(s)",
                        fields.len()
                    )));
                }
                let predicted = fields.pop().unwrap_or_default();
                let gold = fields.pop().unwrap_or_default();
                sentence.tokens.push(fields.swap_remove(0));
                sentence.gold.push(gold);
                sentence.predicted.push(predicted);
            }
            Ok(sentence)
        })
        .collect()
}

/// Write a vertical evaluation file.
///
/// One ``token gold predicted`` line per token, and a blank line after
/// each sentence:
/// ```text
/// EU B-ORG B-ORG
/// rejects O O
/// German B-MISC B-PER
/// ```
///
/// ## Arguments
/// * `writer` - the output.
/// * `sentences` - the gold sentences.
/// * `predictions` - predicted tags, one list per sentence.
///
/// ## Returns
/// [`NerError::LengthMismatch`] if the sentence and prediction counts,
/// or any sentence's token and prediction counts, disagree.
pub fn write_eval_file<W, S>(
    writer: &mut W,
    sentences: &[TaggedSentence],
    predictions: &[Vec<S>],
) -> NTResult<()>
where
    W: Write,
    S: AsRef<str>,
{
    if sentences.len() != predictions.len() {
        return Err(NerError::LengthMismatch {
            left: sentences.len(),
            right: predictions.len(),
        });
    }

    for (sentence, predicted) in sentences.iter().zip(predictions) {
        if sentence.len() != predicted.len() || sentence.tags.len() != sentence.len() {
            return Err(NerError::LengthMismatch {
                left: sentence.len(),
                right: predicted.len(),
            });
        }
        for ((token, gold), pred) in sentence.tokens.iter().zip(&sentence.tags).zip(predicted) {
            writeln!(writer, "{token} {gold} {}", pred.as_ref())?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
