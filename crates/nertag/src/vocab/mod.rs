//! # Vocabulary
//!
//! This module provides the lookup tables and related io mechanisms.
//!
//! * [`Vocabulary`] - a ``{ String -> T }`` token map, used for both the
//!   word-level and character-level vocabularies.
//! * [`LabelTable`] - a ``{ usize -> String }`` label map.
//!
//! Both are immutable once loaded, and are shared read-only.

pub mod io;
pub mod label_table;
pub mod vocabulary;

#[doc(inline)]
pub use label_table::{LabelTable, UNKNOWN_LABEL};
#[doc(inline)]
pub use vocabulary::{DEFAULT_PAD_ID, DEFAULT_UNKNOWN_ID, Vocabulary};
