//! src/executors/sequential.rs
use crate::chunk_splitter::Fragment;
use crate::error::WorkerError;
use crate::executors::{Executor, count_fragment};
use crate::functions::{Mapper, WordCounts};
use std::sync::Arc;

/// Counts fragments one after another on the calling task.
///
/// Meant for small inputs and as a reference for the parallel executor.
#[derive(Clone, Copy, Debug, Default)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    #[tracing::instrument(
        name = "Execute fragments sequentially",
        skip_all,
        fields(fragments = fragments.len())
    )]
    async fn execute<M: Mapper>(
        &self,
        fragments: Vec<Fragment>,
        mapper: Arc<M>,
    ) -> Result<Vec<WordCounts>, WorkerError> {
        fragments
            .iter()
            .map(|fragment| count_fragment(mapper.as_ref(), fragment))
            .collect()
    }
}
