//! # Prediction
//!
//! The model itself is opaque: a [`TagModel`] maps a
//! [`ModelInput`](crate::encoders::ModelInput) to a [`ScoreMatrix`].
//! This module only reduces those scores to label ids; interpreting
//! the ids is the job of [`LabelTable`](crate::vocab::LabelTable).

pub mod predictor;
pub mod tag_model;

#[doc(inline)]
pub use predictor::{argmax, decode_scores, predict_label_ids};
#[doc(inline)]
pub use tag_model::{ScoreMatrix, TagModel};
