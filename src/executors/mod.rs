//! src/executors/mod.rs
use crate::chunk_splitter::Fragment;
use crate::error::WorkerError;
use crate::functions::{Mapper, WordCounts};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// Runs a mapper over every fragment and hands back one partial count per
/// fragment, in input order. Any failure fails the whole batch.
pub trait Executor {
    fn execute<M: Mapper>(
        &self,
        fragments: Vec<Fragment>,
        mapper: Arc<M>,
    ) -> impl Future<Output = Result<Vec<WordCounts>, WorkerError>> + Send;
}

/// Runs one mapper invocation, turning a panic into a `WorkerError`.
fn count_fragment<M: Mapper>(
    mapper: &M,
    fragment: &Fragment,
) -> Result<WordCounts, WorkerError> {
    let counts = std::panic::catch_unwind(AssertUnwindSafe(|| mapper.map(fragment.text())))
        .map_err(|payload| WorkerError::from_panic(fragment.index(), payload))?;
    tracing::debug!(
        fragment = fragment.index(),
        distinct = counts.len(),
        "Counted fragment"
    );
    Ok(counts)
}

mod parallel;
pub use parallel::ParallelExecutor;

mod sequential;
pub use sequential::SequentialExecutor;
