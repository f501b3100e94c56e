//! # Span Highlighter
//!
//! Re-assembles predicted tokens into markup, walking a cursor through the
//! text the tokens came from. Inter-token spacing is reconstructed from the
//! text, without stored offsets:
//!
//! * the separator is a single space if the remaining text starts with one;
//! * leading spaces are then skipped, and the token must be a prefix of
//!   what remains.
//!
//! Tokens must be in their original left-to-right order.

use crate::{
    NTResult,
    NerError,
    highlight::{Category, CategoryMap},
};

/// Escape text for inclusion in markup, including attribute values.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Wrap `token` in a styled span, with `label` as the tooltip title.
pub fn highlight_span(
    token: &str,
    label: &str,
    class: &str,
) -> String {
    format!(
        "<span class=\"{}\" style=\"font-weight:bold\" title=\"{}\">{}</span>",
        escape_markup(class),
        escape_markup(label),
        escape_markup(token),
    )
}

/// Renders labeled tokens as markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Highlighter {
    categories: CategoryMap,
}

impl Highlighter {
    /// Build a highlighter.
    pub fn new(categories: CategoryMap) -> Self {
        Self { categories }
    }

    /// The category map.
    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    /// Render `tokens` (taken, in order, from `text`) with their `labels`.
    ///
    /// Tokens whose label falls in a category are wrapped with
    /// [`highlight_span`]; others are emitted as plain (escaped) text.
    ///
    /// ## Returns
    /// The markup; or [`NerError::LengthMismatch`] if `tokens` and `labels`
    /// disagree in length, or [`NerError::HighlightMismatch`] if a token is
    /// not found at the cursor.
    pub fn render<S, L>(
        &self,
        text: &str,
        tokens: &[S],
        labels: &[L],
    ) -> NTResult<String>
    where
        S: AsRef<str>,
        L: AsRef<str>,
    {
        if tokens.len() != labels.len() {
            return Err(NerError::LengthMismatch {
                left: tokens.len(),
                right: labels.len(),
            });
        }

        let mut output = String::with_capacity(text.len() * 2);
        let mut rest = text;

        for (index, (token, label)) in tokens.iter().zip(labels).enumerate() {
            let (token, label) = (token.as_ref(), label.as_ref());

            let separator = if rest.starts_with(' ') { " " } else { "" };

            let trimmed = rest.trim_start_matches(' ');
            let Some(after) = trimmed.strip_prefix(token) else {
                return Err(NerError::HighlightMismatch {
                    index,
                    token: token.to_string(),
                    remaining: trimmed.to_string(),
                });
            };

            output.push_str(separator);
            match self.categories.classify(label) {
                Some(category) => output.push_str(&self.wrap(token, label, category)),
                None => output.push_str(&escape_markup(token)),
            }

            rest = after;
        }

        Ok(output)
    }

    fn wrap(
        &self,
        token: &str,
        label: &str,
        category: Category,
    ) -> String {
        highlight_span(token, label, &self.categories.style(category).class)
    }
}
