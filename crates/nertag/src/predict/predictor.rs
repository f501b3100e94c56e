//! # Arg-Max Label Prediction

use crate::{
    NTResult,
    NerError,
    encoders::ModelInput,
    predict::{ScoreMatrix, TagModel},
    types::IdType,
};

/// The index of the maximum score; the first maximum wins.
///
/// `NaN` never beats a number. Returns `0` for an empty row.
pub fn argmax(row: &[f32]) -> usize {
    let mut best = 0;
    for (idx, &score) in row.iter().enumerate().skip(1) {
        let current = row[best];
        if score > current || (current.is_nan() && !score.is_nan()) {
            best = idx;
        }
    }
    best
}

/// Reduce `scores` to label ids for the first `true_token_count` positions.
///
/// ## Arguments
/// * `scores` - the model output.
/// * `sequence_length` - the number of rows the model must return.
/// * `true_token_count` - the number of unpadded positions.
pub fn decode_scores(
    scores: &ScoreMatrix,
    sequence_length: usize,
    true_token_count: usize,
) -> NTResult<Vec<usize>> {
    if scores.rows() != sequence_length || scores.num_labels() == 0 {
        return Err(NerError::ModelShape {
            rows: scores.rows(),
            cols: scores.num_labels(),
            expected_rows: sequence_length,
        });
    }

    Ok(scores
        .iter_rows()
        .take(true_token_count)
        .map(argmax)
        .collect())
}

/// Run `model` on `input` and arg-max decode its scores.
///
/// The result has exactly ``input.true_token_count()`` entries;
/// predictions for padded positions are discarded.
/// Model errors propagate unchanged.
pub fn predict_label_ids<T, M>(
    model: &M,
    input: &ModelInput<T>,
) -> NTResult<Vec<usize>>
where
    T: IdType,
    M: TagModel<T> + ?Sized,
{
    let scores = model.predict(input)?;
    decode_scores(&scores, input.sequence_length(), input.true_token_count())
}
