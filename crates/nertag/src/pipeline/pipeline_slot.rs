//! # Load-Once Pipeline Slot
//!
//! Holds a [`NerPipeline`] that becomes available once loading completes.
//! Calls made before then are rejected with [`NerError::NotLoaded`];
//! they never run against partially loaded tables.

use once_cell::sync::OnceCell;

use crate::{
    NTResult,
    NerError,
    pipeline::{Highlighted, NerPipeline, Prediction},
    predict::TagModel,
    types::IdType,
};

/// A pipeline installed exactly once.
///
/// Suitable for a `static`:
/// ```rust
/// use nertag::{NTResult, encoders::ModelInput, pipeline::PipelineSlot, predict::ScoreMatrix};
///
/// type Model = fn(&ModelInput<u32>) -> NTResult<ScoreMatrix>;
///
/// static SLOT: PipelineSlot<u32, Model> = PipelineSlot::new();
///
/// assert!(!SLOT.is_loaded());
/// assert!(SLOT.run_inference("too early").is_err());
/// ```
pub struct PipelineSlot<T: IdType, M: TagModel<T>> {
    cell: OnceCell<NerPipeline<T, M>>,
}

impl<T, M> Default for PipelineSlot<T, M>
where
    T: IdType,
    M: TagModel<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M> PipelineSlot<T, M>
where
    T: IdType,
    M: TagModel<T>,
{
    /// An empty slot.
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Has a pipeline been installed?
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Install a loaded pipeline.
    ///
    /// ## Returns
    /// [`NerError::AlreadyLoaded`] if the slot is already filled.
    pub fn install(
        &self,
        pipeline: NerPipeline<T, M>,
    ) -> NTResult<()> {
        self.cell
            .set(pipeline)
            .map_err(|_| NerError::AlreadyLoaded)?;
        log::info!("pipeline loaded");
        Ok(())
    }

    /// Get the installed pipeline, loading it with `load` if the slot is empty.
    ///
    /// Concurrent callers block until the single load completes.
    /// A failed load leaves the slot empty.
    pub fn get_or_try_load<F>(
        &self,
        load: F,
    ) -> NTResult<&NerPipeline<T, M>>
    where
        F: FnOnce() -> NTResult<NerPipeline<T, M>>,
    {
        self.cell.get_or_try_init(|| {
            let pipeline = load()?;
            log::info!("pipeline loaded");
            Ok(pipeline)
        })
    }

    /// Get the installed pipeline.
    pub fn get(&self) -> NTResult<&NerPipeline<T, M>> {
        self.cell.get().ok_or(NerError::NotLoaded)
    }

    /// See [`NerPipeline::run_inference`].
    pub fn run_inference(
        &self,
        text: &str,
    ) -> NTResult<Prediction> {
        self.get()?.run_inference(text)
    }

    /// See [`NerPipeline::highlight`].
    pub fn highlight(
        &self,
        text: &str,
    ) -> NTResult<Highlighted> {
        self.get()?.highlight(text)
    }
}
