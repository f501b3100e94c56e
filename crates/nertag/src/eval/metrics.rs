//! # Chunk-Level Metrics
//!
//! Precision, recall, and F1 over exactly matching chunks, plus token
//! accuracy; reported in the ``conlleval`` layout.

use core::fmt;
use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{
    NTResult,
    NerError,
    eval::{EvalSentence, extract_chunks},
};

/// Chunk counts for one type, or overall.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChunkCounts {
    /// Chunks in the gold tags.
    pub gold: usize,

    /// Chunks in the predicted tags.
    pub predicted: usize,

    /// Predicted chunks matching a gold chunk in type and span.
    pub correct: usize,
}

impl ChunkCounts {
    /// Score these counts.
    pub fn scores(&self) -> Scores {
        Scores::from_counts(self)
    }
}

/// Percent scores; `0.0` where undefined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Scores {
    /// ``100 * correct / predicted``.
    pub precision: f64,

    /// ``100 * correct / gold``.
    pub recall: f64,

    /// Harmonic mean of precision and recall.
    pub f1: f64,
}

fn percent(
    num: usize,
    den: usize,
) -> f64 {
    if den == 0 {
        0.0
    } else {
        100.0 * num as f64 / den as f64
    }
}

impl Scores {
    /// Score chunk counts.
    pub fn from_counts(counts: &ChunkCounts) -> Self {
        let precision = percent(counts.correct, counts.predicted);
        let recall = percent(counts.correct, counts.gold);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            f1,
        }
    }
}

/// Scores for one chunk type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeReport {
    /// The chunk type.
    pub kind: String,

    /// The counts.
    pub counts: ChunkCounts,

    /// The scores.
    pub scores: Scores,
}

/// An evaluation summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    /// Tokens processed.
    pub token_count: usize,

    /// Tokens whose predicted tag equals the gold tag.
    pub correct_tags: usize,

    /// ``100 * correct_tags / token_count``.
    pub accuracy: f64,

    /// Counts over all types.
    pub counts: ChunkCounts,

    /// Scores over all types.
    pub scores: Scores,

    /// Per-type reports, sorted by type.
    pub by_type: Vec<TypeReport>,
}

impl fmt::Display for EvalReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(
            f,
            "processed {} tokens with {} phrases; found: {} phrases; correct: {}.",
            self.token_count, self.counts.gold, self.counts.predicted, self.counts.correct,
        )?;
        writeln!(
            f,
            "accuracy: {:6.2}%; precision: {:6.2}%; recall: {:6.2}%; FB1: {:6.2}",
            self.accuracy, self.scores.precision, self.scores.recall, self.scores.f1,
        )?;
        for t in &self.by_type {
            writeln!(
                f,
                "{:>17}: precision: {:6.2}%; recall: {:6.2}%; FB1: {:6.2}  {}",
                t.kind, t.scores.precision, t.scores.recall, t.scores.f1, t.counts.predicted,
            )?;
        }
        Ok(())
    }
}

/// Accumulates gold / predicted tag sequences.
#[derive(Debug, Clone, Default)]
pub struct ChunkEvaluator {
    token_count: usize,
    correct_tags: usize,
    counts: ChunkCounts,
    by_type: BTreeMap<String, ChunkCounts>,
}

impl ChunkEvaluator {
    /// An empty evaluator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one sentence.
    ///
    /// ## Returns
    /// [`NerError::LengthMismatch`] if `gold` and `predicted` disagree in length.
    pub fn add_sentence<G, P>(
        &mut self,
        gold: &[G],
        predicted: &[P],
    ) -> NTResult<()>
    where
        G: AsRef<str>,
        P: AsRef<str>,
    {
        if gold.len() != predicted.len() {
            return Err(NerError::LengthMismatch {
                left: gold.len(),
                right: predicted.len(),
            });
        }

        self.token_count += gold.len();
        self.correct_tags += gold
            .iter()
            .zip(predicted)
            .filter(|(g, p)| g.as_ref() == p.as_ref())
            .count();

        let gold_chunks = extract_chunks(gold);
        let predicted_chunks = extract_chunks(predicted);
        let gold_set: BTreeSet<_> = gold_chunks.iter().collect();

        for chunk in &gold_chunks {
            self.counts.gold += 1;
            self.by_type.entry(chunk.kind.clone()).or_default().gold += 1;
        }
        for chunk in &predicted_chunks {
            let hit = gold_set.contains(chunk);
            self.counts.predicted += 1;
            self.counts.correct += hit as usize;

            let counts = self.by_type.entry(chunk.kind.clone()).or_default();
            counts.predicted += 1;
            counts.correct += hit as usize;
        }

        Ok(())
    }

    /// Add every sentence of an evaluation file.
    pub fn add_all(
        &mut self,
        sentences: &[EvalSentence],
    ) -> NTResult<()> {
        for sentence in sentences {
            self.add_sentence(&sentence.gold, &sentence.predicted)?;
        }
        Ok(())
    }

    /// Summarize everything added so far.
    pub fn report(&self) -> EvalReport {
        EvalReport {
            token_count: self.token_count,
            correct_tags: self.correct_tags,
            accuracy: percent(self.correct_tags, self.token_count),
            counts: self.counts,
            scores: self.counts.scores(),
            by_type: self
                .by_type
                .iter()
                .map(|(kind, counts)| TypeReport {
                    kind: kind.clone(),
                    counts: *counts,
                    scores: counts.scores(),
                })
                .collect(),
        }
    }
}

/// Evaluate a set of sentences.
pub fn evaluate(sentences: &[EvalSentence]) -> NTResult<EvalReport> {
    let mut evaluator = ChunkEvaluator::new();
    evaluator.add_all(sentences)?;
    Ok(evaluator.report())
}
