//! # Model Boundary

use crate::{NTResult, NerError, encoders::ModelInput, types::IdType};

/// Per-position label scores; a row-major ``(rows, num_labels)`` matrix.
///
/// This is the model's ``(1, sequence_length, num_labels)`` output with the
/// batch dimension squeezed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    num_labels: usize,
    scores: Vec<f32>,
}

impl ScoreMatrix {
    /// Build a matrix from flat row-major scores.
    ///
    /// ## Arguments
    /// * `num_labels` - the row width; must be non-zero.
    /// * `scores` - the scores; the length must be a multiple of `num_labels`.
    pub fn new(
        num_labels: usize,
        scores: Vec<f32>,
    ) -> NTResult<Self> {
        if num_labels == 0 || scores.len() % num_labels != 0 {
            return Err(NerError::Model(format!(
                "{} scores do not form rows of {num_labels} labels",
                scores.len()
            )));
        }
        Ok(Self { num_labels, scores })
    }

    /// Build a matrix from rows; all rows must have the same non-zero width.
    pub fn from_rows<R>(rows: &[R]) -> NTResult<Self>
    where
        R: AsRef<[f32]>,
    {
        let num_labels = rows.first().map_or(0, |r| r.as_ref().len());
        if let Some(bad) = rows.iter().find(|r| r.as_ref().len() != num_labels) {
            return Err(NerError::Model(format!(
                "ragged score rows: {} vs {num_labels}",
                bad.as_ref().len()
            )));
        }
        let scores = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        if rows.is_empty() {
            return Ok(Self {
                num_labels: 0,
                scores,
            });
        }
        Self::new(num_labels, scores)
    }

    /// The number of rows (positions).
    pub fn rows(&self) -> usize {
        if self.num_labels == 0 {
            0
        } else {
            self.scores.len() / self.num_labels
        }
    }

    /// The row width.
    pub fn num_labels(&self) -> usize {
        self.num_labels
    }

    /// The scores at `position`.
    pub fn row(
        &self,
        position: usize,
    ) -> &[f32] {
        let start = position * self.num_labels;
        &self.scores[start..start + self.num_labels]
    }

    /// Iterate over the rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[f32]> {
        (0..self.rows()).map(|r| self.row(r))
    }
}

/// An opaque tagging model.
///
/// Given the three input tensors, returns per-position label scores.
/// Implementations must be safe to share across threads; the pipeline
/// never mutates a model.
pub trait TagModel<T: IdType>: Send + Sync {
    /// Score every position of `input`.
    fn predict(
        &self,
        input: &ModelInput<T>,
    ) -> NTResult<ScoreMatrix>;
}

impl<T, F> TagModel<T> for F
where
    T: IdType,
    F: Fn(&ModelInput<T>) -> NTResult<ScoreMatrix> + Send + Sync,
{
    fn predict(
        &self,
        input: &ModelInput<T>,
    ) -> NTResult<ScoreMatrix> {
        self(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let m = ScoreMatrix::new(2, vec![0.1, 0.9, 0.8, 0.2]).unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.num_labels(), 2);
        assert_eq!(m.row(1), &[0.8, 0.2]);
        assert_eq!(m.iter_rows().count(), 2);

        assert!(ScoreMatrix::new(0, vec![]).is_err());
        assert!(ScoreMatrix::new(3, vec![0.0; 4]).is_err());
    }

    #[test]
    fn test_from_rows() {
        let m = ScoreMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.row(0), &[1.0, 2.0]);

        assert!(ScoreMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
        assert!(ScoreMatrix::from_rows(&[Vec::<f32>::new()]).is_err());
        assert_eq!(ScoreMatrix::from_rows::<Vec<f32>>(&[]).unwrap().rows(), 0);
    }
}
