//! # Whitespace / Character Tokenizer

/// Options for [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizeOptions {
    /// Lower-case the text before splitting.
    pub lower: bool,

    /// Split into single characters rather than words.
    pub char_level: bool,
}

impl TokenizeOptions {
    /// Word-level, case preserving.
    pub const WORDS: Self = Self {
        lower: false,
        char_level: false,
    };

    /// Word-level, lower-cased.
    pub const LOWER_WORDS: Self = Self {
        lower: true,
        char_level: false,
    };

    /// Character-level, case preserving.
    pub const CHARS: Self = Self {
        lower: false,
        char_level: true,
    };
}

/// Split `text` into tokens.
///
/// Word-level splitting is on the single space character only;
/// runs of spaces (and leading/trailing spaces) produce empty tokens,
/// and an empty `text` produces a single empty token.
///
/// Character-level splitting yields every `char`, spaces included.
pub fn tokenize(
    text: &str,
    options: TokenizeOptions,
) -> Vec<String> {
    let lowered;
    let text = if options.lower {
        lowered = text.to_lowercase();
        lowered.as_str()
    } else {
        text
    };

    if options.char_level {
        text.chars().map(String::from).collect()
    } else {
        text.split(' ').map(String::from).collect()
    }
}
