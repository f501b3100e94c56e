//! # Tagging Pipeline
//!
//! Ties the encoder, a [`TagModel`](crate::predict::TagModel), the label
//! table, and the highlighter together.
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
//!     Vocabulary::from_pairs([("john", 2)]),
//!     Vocabulary::from_pairs([("J", 2)]),
//!     LabelTable::from_list(["O", "B-PER"]),
//! );
//!
//! // Tags the first token as a person.
//! let model = |input: &ModelInput<u32>| -> NTResult<ScoreMatrix> {
//!     let mut scores = [1.0, 0.0].repeat(input.sequence_length());
//!     scores[0] = 0.0;
//!     scores[1] = 1.0;
//!     ScoreMatrix::new(2, scores)
//! };
//!
//! let pipeline = NerPipeline::new(tables, model, PipelineOptions::default()).unwrap();
//! let result = pipeline.highlight("John runs").unwrap();
//! assert_eq!(result.prediction.labels, vec!["B-PER", "O"]);
//! assert!(result.markup.ends_with("</span> runs"));
//! ```

pub mod ner_pipeline;
pub mod pipeline_slot;

#[doc(inline)]
pub use ner_pipeline::{Highlighted, NerPipeline, PipelineOptions, PipelineTables, Prediction};
#[doc(inline)]
pub use pipeline_slot::PipelineSlot;
