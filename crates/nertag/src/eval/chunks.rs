//! # Chunk Extraction
//!
//! Groups per-token tags into typed chunks using the ``conlleval``
//! chunk boundary rules. Tags are ``PREFIX-TYPE`` (``B-PER``) or a bare
//! prefix (``O``); recognized prefixes are:
//!
//! * ``B`` begin, ``I`` inside, ``O`` outside (IOB1 / IOB2);
//! * ``E`` end, ``S`` single (IOBES).
//!
//! A type change between consecutive non-``O`` tags always starts a new
//! chunk, so IOB1 sequences (``I-PER I-PER I-LOC``) are handled too.

use serde::{Deserialize, Serialize};

/// A typed span of tokens; `start..end` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Chunk {
    /// The chunk type; e.g. ``PER``.
    pub kind: String,

    /// First token index.
    pub start: usize,

    /// One past the last token index.
    pub end: usize,
}

/// Split a tag into its prefix and type.
///
/// Tags without a ``-`` have an empty type.
pub fn split_tag(tag: &str) -> (&str, &str) {
    tag.split_once('-').unwrap_or((tag, ""))
}

fn end_of_chunk(
    prev_tag: &str,
    tag: &str,
    prev_kind: &str,
    kind: &str,
) -> bool {
    matches!(prev_tag, "E" | "S")
        || matches!((prev_tag, tag), ("B" | "I", "B" | "S" | "O"))
        || (prev_tag != "O" && prev_tag != "." && prev_kind != kind)
}

fn start_of_chunk(
    prev_tag: &str,
    tag: &str,
    prev_kind: &str,
    kind: &str,
) -> bool {
    matches!(tag, "B" | "S")
        || matches!((prev_tag, tag), ("E" | "S" | "O", "E" | "I"))
        || (tag != "O" && tag != "." && prev_kind != kind)
}

/// Extract the chunks of a tag sequence, in order.
pub fn extract_chunks<S: AsRef<str>>(tags: &[S]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut open: Option<usize> = None;
    let (mut prev_tag, mut prev_kind) = ("O", "");

    let sentinel = std::iter::once("O");
    for (idx, tag) in tags.iter().map(|t| t.as_ref()).chain(sentinel).enumerate() {
        let (tag, kind) = split_tag(tag);

        let ends = end_of_chunk(prev_tag, tag, prev_kind, kind);
        let starts = start_of_chunk(prev_tag, tag, prev_kind, kind);

        if (ends || starts)
            && let Some(start) = open.take()
        {
            chunks.push(Chunk {
                kind: prev_kind.to_string(),
                start,
                end: idx,
            });
        }
        if starts {
            open = Some(idx);
        }

        (prev_tag, prev_kind) = (tag, kind);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(
        kind: &str,
        start: usize,
        end: usize,
    ) -> Chunk {
        Chunk {
            kind: kind.to_string(),
            start,
            end,
        }
    }

    #[test]
    fn test_split_tag() {
        assert_eq!(split_tag("B-PER"), ("B", "PER"));
        assert_eq!(split_tag("I-ORG-X"), ("I", "ORG-X"));
        assert_eq!(split_tag("O"), ("O", ""));
    }

    #[test]
    fn test_iob2() {
        let tags = ["B-PER", "I-PER", "O", "B-LOC", "B-LOC", "I-LOC"];
        assert_eq!(
            extract_chunks(&tags),
            vec![chunk("PER", 0, 2), chunk("LOC", 3, 4), chunk("LOC", 4, 6)]
        );
    }

    #[test]
    fn test_iob1() {
        let tags = ["I-PER", "I-PER", "I-LOC", "O", "I-ORG", "B-ORG"];
        assert_eq!(
            extract_chunks(&tags),
            vec![
                chunk("PER", 0, 2),
                chunk("LOC", 2, 3),
                chunk("ORG", 4, 5),
                chunk("ORG", 5, 6),
            ]
        );
    }

    #[test]
    fn test_iobes() {
        let tags = ["S-PER", "B-ORG", "I-ORG", "E-ORG", "O", "S-LOC", "S-LOC"];
        assert_eq!(
            extract_chunks(&tags),
            vec![
                chunk("PER", 0, 1),
                chunk("ORG", 1, 4),
                chunk("LOC", 5, 6),
                chunk("LOC", 6, 7),
            ]
        );
    }

    #[test]
    fn test_chunk_at_end_closes() {
        assert_eq!(extract_chunks(&["O", "B-MISC"]), vec![chunk("MISC", 1, 2)]);
    }

    #[test]
    fn test_no_chunks() {
        assert!(extract_chunks::<&str>(&[]).is_empty());
        assert!(extract_chunks(&["O", "O", "UNK"]).is_empty());
    }
}
