//! # Text Normalizer
//!
//! Inserts separating spaces so that a plain single-space split yields
//! clean word tokens:
//! * `Peter's` becomes `Peter 's`, `don't` becomes `do n't`;
//! * `red.` becomes `red .`, `(a)` becomes `( a )`.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::NTResult;

/// The default punctuation set; every ASCII punctuation character except `'`.
pub const DEFAULT_PUNCTUATION: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~";

/// Contraction suffixes, in match priority order.
const CONTRACTION_SUFFIXES: &[&str] = &["'", "'s", "'ll", "'m", "'re", "'ve", "'d", "n't"];

/// Options for [`Normalizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerOptions {
    /// Insert a space before contraction / possessive suffixes.
    ///
    /// Default: `true`.
    pub separate_apostrophes: bool,

    /// Insert spaces around punctuation characters.
    ///
    /// Default: `true`.
    pub separate_punctuation: bool,

    /// The punctuation set.
    ///
    /// Default: [`DEFAULT_PUNCTUATION`].
    pub punctuation: String,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            separate_apostrophes: true,
            separate_punctuation: true,
            punctuation: DEFAULT_PUNCTUATION.to_string(),
        }
    }
}

impl NormalizerOptions {
    /// Set whether apostrophe suffixes are separated.
    pub fn with_separate_apostrophes(
        self,
        separate_apostrophes: bool,
    ) -> Self {
        Self {
            separate_apostrophes,
            ..self
        }
    }

    /// Set whether punctuation is separated.
    pub fn with_separate_punctuation(
        self,
        separate_punctuation: bool,
    ) -> Self {
        Self {
            separate_punctuation,
            ..self
        }
    }

    /// Replace the punctuation set.
    pub fn with_punctuation<S>(
        self,
        punctuation: S,
    ) -> Self
    where
        S: Into<String>,
    {
        Self {
            punctuation: punctuation.into(),
            ..self
        }
    }

    /// Compile a [`Normalizer`] from these options.
    pub fn build(&self) -> NTResult<Normalizer> {
        Normalizer::new(self.clone())
    }
}

/// Build the body of a regex character class matching any char of `chars`.
fn escaped_class_body(chars: &str) -> String {
    chars
        .chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0; 4])))
        .collect()
}

/// A compiled text normalizer.
#[derive(Debug, Clone)]
pub struct Normalizer {
    options: NormalizerOptions,
    apostrophe: Option<Regex>,
    punctuation: Option<(Regex, Regex)>,
}

impl Normalizer {
    /// Compile a normalizer.
    ///
    /// ## Arguments
    /// * `options` - the separation options.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `Normalizer`.
    pub fn new(options: NormalizerOptions) -> NTResult<Self> {
        let class = escaped_class_body(&options.punctuation);

        let apostrophe = if options.separate_apostrophes {
            let suffixes = CONTRACTION_SUFFIXES
                .iter()
                .map(|s| regex::escape(s))
                .collect::<Vec<_>>()
                .join("|");
            Some(Regex::new(&format!(
                r"(?i)([a-z])({suffixes})([{class} ]|$)"
            ))?)
        } else {
            None
        };

        let punctuation = if options.separate_punctuation && !class.is_empty() {
            Some((
                Regex::new(&format!(r"(\S)([{class}])"))?,
                Regex::new(&format!(r"([{class}])(\S)"))?,
            ))
        } else {
            None
        };

        Ok(Self {
            options,
            apostrophe,
            punctuation,
        })
    }

    /// The options this normalizer was built from.
    pub fn options(&self) -> &NormalizerOptions {
        &self.options
    }

    /// Normalize `text`.
    ///
    /// The apostrophe step runs first, as a single non-overlapping pass;
    /// then the two punctuation passes each run over the output of the last.
    pub fn normalize(
        &self,
        text: &str,
    ) -> String {
        let mut text = text.to_string();

        if let Some(re) = &self.apostrophe {
            text = re.replace_all(&text, "${1} ${2}${3}").into_owned();
        }

        if let Some((before, after)) = &self.punctuation {
            text = before.replace_all(&text, "${1} ${2}").into_owned();
            text = after.replace_all(&text, "${1} ${2}").into_owned();
        }

        text
    }
}

/// Normalize `text` with a one-off [`Normalizer`].
///
/// Prefer holding a [`Normalizer`] when normalizing many texts.
pub fn normalize(
    text: &str,
    options: &NormalizerOptions,
) -> NTResult<String> {
    Ok(options.build()?.normalize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(text: &str) -> String {
        normalize(text, &NormalizerOptions::default()).unwrap()
    }

    #[test]
    fn test_apostrophes() {
        assert_eq!(norm("John's car"), "John 's car");
        assert_eq!(norm("I'm here"), "I 'm here");
        assert_eq!(norm("we'll"), "we 'll");
        assert_eq!(norm("they're"), "they 're");
        assert_eq!(norm("I've"), "I 've");
        assert_eq!(norm("she'd"), "she 'd");
        assert_eq!(norm("don't"), "do n't");
        assert_eq!(norm("the boys' toys"), "the boys ' toys");
        assert_eq!(norm("DON'T"), "DO N'T");
    }

    #[test]
    fn test_apostrophe_requires_terminator() {
        // The suffix must be followed by a space, punctuation or the end.
        let options = NormalizerOptions::default().with_separate_punctuation(false);
        let n = options.build().unwrap();
        assert_eq!(n.normalize("O'sa"), "O'sa");
        assert_eq!(n.normalize("it's."), "it 's.");
        assert_eq!(n.normalize("1's"), "1's");
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(norm("red."), "red .");
        assert_eq!(norm("(a)"), "( a )");
        assert_eq!(norm("a,b"), "a , b");
        assert_eq!(norm("U.S.A."), "U . S . A .");
        assert_eq!(norm("John's car is red."), "John 's car is red .");
    }

    #[test]
    fn test_consecutive_punctuation() {
        assert_eq!(norm("wait..."), "wait . . .");
        assert_eq!(norm("?!"), "? !");
    }

    #[test]
    fn test_disabled_steps() {
        let options = NormalizerOptions::default()
            .with_separate_apostrophes(false)
            .with_separate_punctuation(false);
        assert_eq!(normalize("John's car.", &options).unwrap(), "John's car.");
    }

    #[test]
    fn test_custom_punctuation() {
        let options = NormalizerOptions::default().with_punctuation("-");
        let n = options.build().unwrap();
        assert_eq!(n.normalize("a-b. c"), "a - b. c");

        // An empty set disables the punctuation step.
        let n = NormalizerOptions::default()
            .with_punctuation("")
            .build()
            .unwrap();
        assert_eq!(n.normalize("a.b"), "a.b");
        assert_eq!(n.normalize("it's"), "it 's");
    }

    #[test]
    fn test_idempotent_on_normalized() {
        for text in [
            "John's car is red.",
            "Don't stop (now), please!",
            "\"quoted\" text",
            "  spaced   out  ",
        ] {
            let once = norm(text);
            assert_eq!(norm(&once), once, "not idempotent for {text:?}");
        }
    }

    proptest::proptest! {
        #[test]
        fn normalized_text_is_a_fixed_point(
            words in proptest::collection::vec("[a-zA-Z]{1,8}|[.,!?()-]", 0..12)
        ) {
            let text = words.join(" ");
            proptest::prop_assert_eq!(norm(&text), text);
        }

        #[test]
        fn normalize_only_inserts_spaces(text in "\\PC{0,60}") {
            let out = norm(&text);
            let strip = |s: &str| s.chars().filter(|&c| c != ' ').collect::<String>();
            proptest::prop_assert_eq!(strip(&out), strip(&text));
        }
    }
}
