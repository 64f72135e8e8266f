//! src/startup.rs
use crate::chart::TerminalChart;
use crate::configuration::Settings;
use crate::executors::ParallelExecutor;
use crate::mapreduce::{JobReport, MapReduce};
use crate::source::LocatorSource;
use anyhow::Context;

/// Builds a job from `configuration` and runs it against the configured
/// source, drawing the chart on stdout.
#[tracing::instrument(name = "Start word frequency job", skip_all)]
pub async fn run(configuration: Settings) -> Result<JobReport, anyhow::Error> {
    let source = LocatorSource::from_settings(&configuration.source)
        .context("Failed to build HTTP client")?;
    let executor = ParallelExecutor::new(configuration.pipeline.workers);
    let job = MapReduce::new(configuration.pipeline.clone(), source, executor);
    tracing::info!(
        job_id = %job.job_id(),
        source = %configuration.source.url,
        fragments = configuration.pipeline.fragments.get(),
        workers = configuration.pipeline.workers.get(),
        "Starting job"
    );

    let mut renderer = TerminalChart::stdout(configuration.chart.bar_width);
    let report = job
        .run(&configuration.source.url, &configuration.chart, &mut renderer)
        .await
        .with_context(|| format!("Job {} failed", job.job_id()))?;
    Ok(report)
}
