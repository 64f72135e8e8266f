//! src/mapreduce.rs
use crate::chart::{BarChart, ChartRenderer};
use crate::chunk_splitter::ChunkSplitter;
use crate::configuration::{ChartSettings, PipelineSettings};
use crate::error::PipelineError;
use crate::executors::Executor;
use crate::frequency::{FrequencyTable, WordFrequency};
use crate::functions::{Mapper, Reducer};
use crate::mappers::WordCounter;
use crate::reducers::Adder;
use crate::source::DocumentSource;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

/// Outcome of one run: the full table and the words that were charted.
#[derive(Debug, Clone)]
pub struct JobReport {
    pub job_id: Uuid,
    pub table: FrequencyTable,
    pub top: Vec<WordFrequency>,
}

/// One word-frequency job: fetch, split, count in parallel, merge, present.
///
/// The pipeline is linear. The first error from any stage ends the run and
/// nothing downstream of it is executed.
pub struct MapReduce<S, E, M = WordCounter> {
    job_id: Uuid,
    settings: PipelineSettings,
    source: S,
    executor: E,
    mapper: Arc<M>,
}

impl<S, E> MapReduce<S, E>
where
    S: DocumentSource,
    E: Executor,
{
    pub fn new(settings: PipelineSettings, source: S, executor: E) -> Self {
        MapReduce {
            job_id: Uuid::new_v4(),
            settings,
            source,
            executor,
            mapper: Arc::new(WordCounter),
        }
    }
}

impl<S, E, M> MapReduce<S, E, M>
where
    S: DocumentSource,
    E: Executor,
    M: Mapper,
{
    pub fn with_mapper<N: Mapper>(self, mapper: N) -> MapReduce<S, E, N> {
        MapReduce {
            job_id: self.job_id,
            settings: self.settings,
            source: self.source,
            executor: self.executor,
            mapper: Arc::new(mapper),
        }
    }

    pub fn job_id(&self) -> &Uuid {
        &self.job_id
    }

    /// Retrieves the document behind `locator` and counts its words.
    #[tracing::instrument(name = "Count words", skip(self), fields(job_id = %self.job_id))]
    pub async fn count(&self, locator: &str) -> Result<FrequencyTable, PipelineError> {
        let document = self.source.fetch(locator).await?;
        self.count_document(document).await
    }

    /// Split, map and reduce an already retrieved document.
    pub async fn count_document(&self, document: String) -> Result<FrequencyTable, PipelineError> {
        let started = Instant::now();
        let fragments = ChunkSplitter::new(self.settings.fragments).split(&document);
        drop(document);

        let partials = self
            .executor
            .execute(fragments, self.mapper.clone())
            .await?;
        let table = FrequencyTable::from(Adder.reduce(partials));

        tracing::info!(
            distinct = table.distinct_words(),
            total = table.total_words(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Aggregated word counts"
        );
        Ok(table)
    }

    /// Counts the document and hands the top words to `renderer`.
    #[tracing::instrument(
        name = "Run MapReduce job",
        skip_all,
        fields(job_id = %self.job_id, locator = %locator)
    )]
    pub async fn run<R: ChartRenderer>(
        &self,
        locator: &str,
        chart: &ChartSettings,
        renderer: &mut R,
    ) -> Result<JobReport, PipelineError> {
        let table = self.count(locator).await?;
        let top = table.top(self.settings.top_n);
        let report = JobReport {
            job_id: self.job_id,
            table,
            top,
        };
        match renderer.render(&BarChart::new(chart, &report.top)) {
            Ok(()) => Ok(report),
            Err(source) => Err(PipelineError::Presentation {
                report: Box::new(report),
                source,
            }),
        }
    }
}
