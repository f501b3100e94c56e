//! # Encoders
//!
//! Turns text into the fixed-shape tensors the model consumes.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use nertag::{encoders::{EncoderOptions, build_input}, vocab::Vocabulary};
//!
//! let words: Vocabulary<u32> = Vocabulary::from_pairs([("john", 2), ("car", 3)]);
//! let chars: Vocabulary<u32> = Vocabulary::from_pairs([("J", 2), ("o", 3)]);
//!
//! let options = EncoderOptions::default().with_sequence_length(4).with_word_length(3);
//! let encoded = build_input("John's car", Arc::new(words), Arc::new(chars), &options).unwrap();
//!
//! assert_eq!(encoded.tokens, vec!["John", "'s", "car"]);
//! assert_eq!(encoded.input.word_ids(), &[2, 1, 3, 0]);
//! assert_eq!(encoded.input.mask(), &[1, 1, 1, 0]);
//! ```

pub mod encoder_options;
pub mod input_encoder;
pub mod sequence;

#[doc(inline)]
pub use encoder_options::EncoderOptions;
#[doc(inline)]
pub use input_encoder::{EncodedInput, InputEncoder, ModelInput, TruncationNotice, build_input};
#[doc(inline)]
pub use sequence::{pad_right, prefix_mask};
