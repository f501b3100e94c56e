//! # Token Vocabulary ``{ String -> T }``

use std::path::Path;

use crate::{
    NTResult,
    NerError,
    types::{IdType, NTHashMap, hash_map_with_capacity},
    vocab::io::read_table_source,
};

/// The id reserved for padding.
pub const DEFAULT_PAD_ID: u64 = 0;

/// The id reserved for unknown tokens.
pub const DEFAULT_UNKNOWN_ID: u64 = 1;

/// Token vocabulary as a dictionary map of ``{ String -> T }``.
///
/// Encoding never fails; tokens absent from the map encode to the
/// caller-supplied unknown id.
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary<T: IdType> {
    token_map: NTHashMap<String, T>,
}

impl<T: IdType> Vocabulary<T> {
    /// Build a vocabulary from a token map.
    ///
    /// ## Arguments
    /// * `token_map` - the ``{ token -> id }`` map.
    pub fn new(token_map: NTHashMap<String, T>) -> Self {
        Self { token_map }
    }

    /// Build a vocabulary from ``(token, id)`` pairs.
    ///
    /// Later pairs override earlier ones.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(s, t)| (s.into(), t)).collect())
    }

    /// Parse a JSON object ``{ "token": id, ... }``.
    ///
    /// ## Returns
    /// A `Result` with the vocabulary, or an error if the JSON is malformed
    /// or an id does not fit `T`.
    pub fn from_json_str(json: &str) -> NTResult<Self> {
        let raw: NTHashMap<String, u64> = serde_json::from_str(json)?;

        let mut token_map = hash_map_with_capacity(raw.len());
        for (key, id) in raw {
            let Some(token) = T::from_u64(id) else {
                return Err(NerError::IdOutOfRange { key, id });
            };
            token_map.insert(key, token);
        }

        Ok(Self::new(token_map))
    }

    /// Load a vocabulary from a JSON (or JS constant) file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> NTResult<Self> {
        let vocab = Self::from_json_str(&read_table_source(path)?)?;
        log::debug!("loaded vocabulary with {} entries", vocab.len());
        Ok(vocab)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.token_map.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.token_map.is_empty()
    }

    /// Look up a token, without the unknown fallback.
    pub fn get(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_map.get(token).copied()
    }

    /// Encode a single token.
    ///
    /// ## Arguments
    /// * `token` - the token to look up.
    /// * `unknown_id` - the id returned on a miss.
    pub fn encode(
        &self,
        token: &str,
        unknown_id: T,
    ) -> T {
        self.get(token).unwrap_or(unknown_id)
    }

    /// Encode each token, in order.
    pub fn encode_all<S: AsRef<str>>(
        &self,
        tokens: &[S],
        unknown_id: T,
    ) -> Vec<T> {
        tokens
            .iter()
            .map(|t| self.encode(t.as_ref(), unknown_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vocabulary<u32> {
        Vocabulary::from_pairs([("[PAD]", 0), ("[UNK]", 1), ("john", 2), ("car", 3)])
    }

    #[test]
    fn test_encode() {
        let vocab = sample();
        assert_eq!(vocab.len(), 4);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.encode("john", 1), 2);
        assert_eq!(vocab.encode("John", 1), 1);
        assert_eq!(vocab.encode("", 1), 1);
        assert_eq!(vocab.encode_all(&["car", "bus", "john"], 1), vec![3, 1, 2]);
    }

    #[test]
    fn test_custom_unknown_id() {
        let vocab = sample();
        assert_eq!(vocab.encode("zebra", 99), 99);
        assert_eq!(vocab.get("zebra"), None);
        assert_eq!(vocab.get("car"), Some(3));
    }

    #[test]
    fn test_from_json_str() {
        let vocab = Vocabulary::<u16>::from_json_str(r#"{"a": 2, "b": 3}"#).unwrap();
        assert_eq!(vocab.encode("b", 1), 3);

        let err = Vocabulary::<u8>::from_json_str(r#"{"big": 300}"#).unwrap_err();
        assert!(matches!(err, NerError::IdOutOfRange { id: 300, .. }));

        assert!(matches!(
            Vocabulary::<u32>::from_json_str(r#"{"neg": -1}"#),
            Err(NerError::Json(_))
        ));
        assert!(Vocabulary::<u32>::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn test_from_path() {
        let dir = tempdir::TempDir::new("nertag_vocab").unwrap();
        let path = dir.path().join("charVocab.js");
        std::fs::write(&path, "const charVocab = {\"a\": 2, \"B\": 3};\n").unwrap();

        let vocab = Vocabulary::<u32>::from_path(&path).unwrap();
        assert_eq!(vocab.encode_all(&["a", "B", "b"], 1), vec![2, 3, 1]);
    }
}
