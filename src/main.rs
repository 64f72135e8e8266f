//! src/main.rs
use wordfreq::configuration::get_configuration;
use wordfreq::startup::run;
use wordfreq::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration()?;
    let tracer_provider = init_tracing("wordfreq", &configuration.telemetry)?;

    let result = run(configuration).await;
    match &result {
        Ok(report) => tracing::info!(
            job_id = %report.job_id,
            distinct = report.table.distinct_words(),
            total = report.table.total_words(),
            "Job finished"
        ),
        Err(e) => tracing::error!(error = ?e, "Word frequency job failed"),
    }

    if let Some(provider) = tracer_provider {
        provider.shutdown()?;
    }
    result?;
    Ok(())
}
