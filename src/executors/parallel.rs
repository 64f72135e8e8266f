//! src/executors/parallel.rs
use crate::chunk_splitter::Fragment;
use crate::error::WorkerError;
use crate::executors::{Executor, count_fragment};
use crate::functions::{Mapper, WordCounts};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Fans fragments out to the blocking pool, at most `workers` at a time,
/// and fans the partial counts back in once every worker has finished.
#[derive(Clone, Copy, Debug)]
pub struct ParallelExecutor {
    workers: NonZeroUsize,
}

impl ParallelExecutor {
    pub fn new(workers: NonZeroUsize) -> Self {
        Self { workers }
    }
}

impl Executor for ParallelExecutor {
    #[tracing::instrument(
        name = "Execute fragments in parallel",
        skip_all,
        fields(workers = self.workers.get(), fragments = fragments.len())
    )]
    async fn execute<M: Mapper>(
        &self,
        fragments: Vec<Fragment>,
        mapper: Arc<M>,
    ) -> Result<Vec<WordCounts>, WorkerError> {
        let total = fragments.len();
        let permits = Arc::new(Semaphore::new(self.workers.get()));
        let parent = tracing::Span::current();

        let mut tasks = JoinSet::new();
        let mut fragment_of_task = HashMap::with_capacity(total);
        for (slot, fragment) in fragments.into_iter().enumerate() {
            let index = fragment.index();
            let permits = permits.clone();
            let mapper = mapper.clone();
            let parent = parent.clone();
            let handle = tasks.spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .map_err(|_| WorkerError::Cancelled { fragment: index })?;
                let counts = tokio::task::spawn_blocking(move || {
                    parent.in_scope(|| count_fragment(mapper.as_ref(), &fragment))
                })
                .await
                .map_err(|_| WorkerError::Cancelled { fragment: index })??;
                Ok::<_, WorkerError>((slot, counts))
            });
            fragment_of_task.insert(handle.id(), index);
        }

        let mut partials: Vec<Option<WordCounts>> = vec![None; total];
        while let Some(joined) = tasks.join_next().await {
            let outcome = joined.map_err(|e| {
                let fragment = fragment_of_task.get(&e.id()).copied().unwrap_or_default();
                if e.is_panic() {
                    WorkerError::from_panic(fragment, e.into_panic())
                } else {
                    WorkerError::Cancelled { fragment }
                }
            });
            match outcome.and_then(|result| result) {
                Ok((slot, counts)) => partials[slot] = Some(counts),
                Err(e) => {
                    tracing::error!(error = %e, "Worker failed, abandoning remaining fragments");
                    tasks.abort_all();
                    return Err(e);
                }
            }
        }

        partials
            .into_iter()
            .enumerate()
            .map(|(slot, counts)| counts.ok_or(WorkerError::Cancelled { fragment: slot }))
            .collect()
    }
}
