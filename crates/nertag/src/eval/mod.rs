//! # Evaluation
//!
//! ``CoNLL`` corpus IO and chunk-level scoring.
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use nertag::eval::{evaluate, read_eval_file};
//!
//! let file = "EU B-ORG B-ORG\nrejects O O\nGerman B-MISC B-PER\n\n";
//! let report = evaluate(&read_eval_file(Cursor::new(file)).unwrap()).unwrap();
//!
//! assert_eq!(report.counts.correct, 1);
//! assert_eq!(report.scores.precision, 50.0);
//! ```

pub mod chunks;
pub mod conll;
pub mod metrics;

#[doc(inline)]
pub use chunks::{Chunk, extract_chunks, split_tag};
#[doc(inline)]
pub use conll::{
    DOCSTART,
    EvalSentence,
    TaggedSentence,
    read_conll,
    read_conll_path,
    read_eval_file,
    write_eval_file,
};
#[doc(inline)]
pub use metrics::{ChunkCounts, ChunkEvaluator, EvalReport, Scores, TypeReport, evaluate};
