//! # Label Table ``{ usize -> String }``

use std::path::Path;

use serde::Deserialize;

use crate::{
    NTResult,
    NerError,
    types::{NTHashMap, hash_map_with_capacity},
    vocab::io::read_table_source,
};

/// The label returned for ids absent from the table.
pub const UNKNOWN_LABEL: &str = "UNK";

/// Accepted JSON layouts for a label table.
#[derive(Deserialize)]
#[serde(untagged)]
enum LabelTableSource {
    /// ``["O", "B-PER", ...]``; the index is the id.
    List(Vec<String>),

    /// ``{"0": "O", "1": "B-PER", ...}``.
    Map(NTHashMap<String, String>),
}

/// Maps predicted label ids back to label names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelTable {
    labels: NTHashMap<usize, String>,
}

impl LabelTable {
    /// Build a table from ``(id, label)`` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, S)>,
        S: Into<String>,
    {
        Self {
            labels: pairs.into_iter().map(|(id, s)| (id, s.into())).collect(),
        }
    }

    /// Build a table where each label's id is its position.
    pub fn from_list<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_pairs(labels.into_iter().enumerate())
    }

    /// Parse a JSON label table; either an object keyed by stringified ids,
    /// or an array of labels.
    pub fn from_json_str(json: &str) -> NTResult<Self> {
        match serde_json::from_str::<LabelTableSource>(json)? {
            LabelTableSource::List(labels) => Ok(Self::from_list(labels)),
            LabelTableSource::Map(raw) => {
                let mut labels = hash_map_with_capacity(raw.len());
                for (key, label) in raw {
                    let id = key
                        .trim()
                        .parse::<usize>()
                        .map_err(|e| NerError::Parse(format!("label id {key:?}: {e}")))?;
                    labels.insert(id, label);
                }
                Ok(Self { labels })
            }
        }
    }

    /// Load a label table from a JSON (or JS constant) file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> NTResult<Self> {
        let table = Self::from_json_str(&read_table_source(path)?)?;
        log::debug!("loaded label table with {} labels", table.len());
        Ok(table)
    }

    /// The number of labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Look up a label, falling back to [`UNKNOWN_LABEL`].
    pub fn get(
        &self,
        id: usize,
    ) -> &str {
        self.labels.get(&id).map_or(UNKNOWN_LABEL, String::as_str)
    }

    /// Decode each id, in order.
    pub fn decode(
        &self,
        ids: &[usize],
    ) -> Vec<String> {
        ids.iter().map(|&id| self.get(id).to_string()).collect()
    }

    /// The labels, ordered by id.
    pub fn sorted_labels(&self) -> Vec<(usize, &str)> {
        let mut labels: Vec<(usize, &str)> = self
            .labels
            .iter()
            .map(|(&id, label)| (id, label.as_str()))
            .collect();
        labels.sort_unstable_by_key(|&(id, _)| id);
        labels
    }
}
