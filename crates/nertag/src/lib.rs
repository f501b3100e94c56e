//! # `nertag` Named-Entity Tagging Pipeline
//!
//! This crate prepares free text for a sequence-labeling NER model, and
//! turns the model's per-token scores back into labels and highlighted
//! markup.
//!
//! The model itself is opaque; anything implementing [`predict::TagModel`]
//! can be plugged in.
//!
//! See:
//! * [`text`] to normalize and tokenize text.
//! * [`vocab`] to load word / character vocabularies and label tables.
//! * [`encoders`] to encode text into fixed-shape model inputs.
//! * [`predict`] to decode model scores into label ids.
//! * [`highlight`] to render labeled tokens as markup.
//! * [`pipeline`] to run the whole thing end to end.
//! * [`eval`] to score predictions against a ``CoNLL`` corpus.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Tagging Text
//!
//! ```rust
//! use nertag::{
//!     NTResult,
//!     encoders::ModelInput,
//!     pipeline::{NerPipeline, PipelineOptions, PipelineTables},
//!     predict::ScoreMatrix,
//!     vocab::{LabelTable, Vocabulary},
//! };
//!
//! let tables = PipelineTables::<u32>::new(
//!     Vocabulary::from_pairs([("eu", 2), ("rejects", 3)]),
//!     Vocabulary::from_pairs([("E", 2), ("U", 3)]),
//!     LabelTable::from_list(["O", "B-ORG"]),
//! );
//!
//! // A stand-in model: upper-case words are organizations.
//! let model = |input: &ModelInput<u32>| -> NTResult<ScoreMatrix> {
//!     let rows: Vec<[f32; 2]> = (0..input.sequence_length())
//!         .map(|pos| match input.char_row(pos) {
//!             [2, 3, ..] => [0.0, 1.0],
//!             _ => [1.0, 0.0],
//!         })
//!         .collect();
//!     ScoreMatrix::from_rows(&rows)
//! };
//!
//! let pipeline = NerPipeline::new(tables, model, PipelineOptions::default())?;
//!
//! let prediction = pipeline.run_inference("EU rejects it.")?;
//! assert_eq!(prediction.tokens, vec!["EU", "rejects", "it", "."]);
//! assert_eq!(prediction.labels, vec!["B-ORG", "O", "O", "O"]);
//!
//! let markup = pipeline.highlight("EU rejects it.")?.markup;
//! assert!(markup.starts_with("<span class=\"highlightOrg\""));
//! assert!(markup.ends_with("</span> rejects it."));
//! # Ok::<(), nertag::NerError>(())
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod encoders;
pub mod errors;
pub mod eval;
pub mod highlight;
pub mod pipeline;
pub mod predict;
pub mod text;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use errors::{NTResult, NerError};
