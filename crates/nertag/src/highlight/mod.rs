//! # Highlighting
//!
//! Renders labeled tokens back into the text they came from, wrapping
//! entity tokens in styled spans keyed by [`Category`].

pub mod categories;
pub mod highlighter;

#[doc(inline)]
pub use categories::{Category, CategoryMap, CategoryStyle};
#[doc(inline)]
pub use highlighter::{Highlighter, escape_markup, highlight_span};
