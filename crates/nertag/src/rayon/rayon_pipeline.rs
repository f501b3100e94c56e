//! # Parallel Pipeline

use crate::{
    NTResult,
    pipeline::{Highlighted, NerPipeline, Prediction},
    predict::TagModel,
    types::IdType,
};

/// Batch-Level Parallel Pipeline Wrapper.
///
/// Each text in a batch is tagged independently; results are returned
/// in batch order, one per text.
pub struct ParallelRayonPipeline<T: IdType, M: TagModel<T>> {
    /// Wrapped pipeline.
    pub inner: NerPipeline<T, M>,
}

impl<T, M> From<NerPipeline<T, M>> for ParallelRayonPipeline<T, M>
where
    T: IdType,
    M: TagModel<T>,
{
    fn from(inner: NerPipeline<T, M>) -> Self {
        Self::new(inner)
    }
}

impl<T, M> ParallelRayonPipeline<T, M>
where
    T: IdType,
    M: TagModel<T>,
{
    /// Create a new parallel pipeline.
    ///
    /// ## Arguments
    /// * `inner` - The pipeline to wrap.
    pub fn new(inner: NerPipeline<T, M>) -> Self {
        Self { inner }
    }

    /// Tag a batch of texts.
    ///
    /// A failure in one text does not affect the others.
    pub fn run_inference_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<NTResult<Prediction>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.run_inference(text.as_ref()))
            .collect()
    }

    /// Tag and render a batch of texts.
    pub fn highlight_batch<S: AsRef<str> + Sync>(
        &self,
        batch: &[S],
    ) -> Vec<NTResult<Highlighted>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|text| self.inner.highlight(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        NerError,
        encoders::ModelInput,
        pipeline::{PipelineOptions, PipelineTables},
        predict::ScoreMatrix,
        types::{check_is_send, check_is_sync},
        vocab::{LabelTable, Vocabulary},
    };

    /// Tags tokens starting with ``A`` as ``B-PER``; fails past three tokens.
    fn model(input: &ModelInput<u32>) -> NTResult<ScoreMatrix> {
        if input.true_token_count() > 3 {
            return Err(NerError::Model("too many tokens".to_string()));
        }
        let rows: Vec<[f32; 2]> = (0..input.sequence_length())
            .map(|pos| {
                if input.char_row(pos).first() == Some(&2) {
                    [0.0, 1.0]
                } else {
                    [1.0, 0.0]
                }
            })
            .collect();
        ScoreMatrix::from_rows(&rows)
    }

    #[test]
    fn test_batch() {
        type Model = fn(&ModelInput<u32>) -> NTResult<ScoreMatrix>;

        let pipeline: NerPipeline<u32, Model> = NerPipeline::new(
            PipelineTables::new(
                Vocabulary::from_pairs([("ann", 2)]),
                Vocabulary::from_pairs([("A", 2)]),
                LabelTable::from_list(["O", "B-PER"]),
            ),
            model as Model,
            PipelineOptions::default(),
        )
        .unwrap();
        let pipeline = ParallelRayonPipeline::from(pipeline);
        check_is_send(&pipeline);
        check_is_sync(&pipeline);

        let batch = ["Ann runs", "ok then Ann", "plain text"];
        let results = pipeline.run_inference_batch(&batch[..]);
        assert_eq!(results.len(), 3);
        for (text, result) in batch.iter().zip(&results) {
            let expected = pipeline.inner.run_inference(text).unwrap();
            assert_eq!(result.as_ref().unwrap(), &expected);
        }
        assert_eq!(
            results[1].as_ref().unwrap().labels,
            vec!["O", "O", "B-PER"]
        );

        let highlighted = pipeline.highlight_batch(&["Ann", "a b c d"][..]);
        assert!(highlighted[0].as_ref().unwrap().markup.contains("highlightPer"));
        assert!(matches!(highlighted[1], Err(NerError::Model(_))));
    }
}
