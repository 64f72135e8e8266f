//! tests/api/mapreduce.rs
use crate::helpers::{TestServer, setup_tracing, test_data_dir};
use claims::{assert_err, assert_le, assert_matches, assert_ok};
use std::num::NonZeroUsize;
use wordfreq::chart::TerminalChart;
use wordfreq::configuration::{ChartSettings, PipelineSettings, SourceSettings};
use wordfreq::error::{PipelineError, RetrievalError};
use wordfreq::executors::{ParallelExecutor, SequentialExecutor};
use wordfreq::mapreduce::MapReduce;
use wordfreq::source::LocatorSource;

const FOX: &str = "the quick brown fox the lazy fox the";

fn pipeline(fragments: usize, workers: usize, top_n: usize) -> PipelineSettings {
    PipelineSettings {
        fragments: NonZeroUsize::new(fragments).unwrap(),
        workers: NonZeroUsize::new(workers).unwrap(),
        top_n,
    }
}

fn source() -> LocatorSource {
    LocatorSource::from_settings(&SourceSettings::default()).expect("Failed to build source")
}

fn parallel_job(settings: PipelineSettings) -> MapReduce<LocatorSource, ParallelExecutor> {
    let executor = ParallelExecutor::new(settings.workers);
    MapReduce::new(settings, source(), executor)
}

#[tokio::test]
async fn downloads_counts_and_charts_a_document() {
    setup_tracing();
    let server = TestServer::serve(200, FOX).await;
    let job = parallel_job(pipeline(4, 4, 3));
    let mut renderer = TerminalChart::new(Vec::new(), 9);

    let report = assert_ok!(
        job.run(&server.url("fox.txt"), &ChartSettings::default(), &mut renderer)
            .await
    );

    // "fox" and "lazy" straddle the 9-character cuts.
    assert_eq!(report.table.get("the"), Some(3));
    assert_eq!(report.table.get("fox"), Some(1));
    assert_eq!(report.table.get("fo"), Some(1));
    assert_eq!(report.table.get("x"), Some(1));
    assert_eq!(report.table.get("laz"), Some(1));
    assert_eq!(report.table.get("y"), Some(1));
    assert_eq!(report.table.get("lazy"), None);
    assert_eq!(report.table.total_words(), 10);

    let words: Vec<_> = report.top.iter().map(|f| f.word.as_str()).collect();
    assert_eq!(words, vec!["the", "brown", "fo"]);

    let output = String::from_utf8(renderer.into_inner()).unwrap();
    let lines: Vec<_> = output.lines().collect();
    assert_eq!(lines[0], "Top 10 Most Frequent Words");
    assert_eq!(lines[2], "Words | Frequency");
    assert_eq!(lines[4], "the   | ######### 3");
    assert_eq!(lines[5], "brown | ### 1");
    assert_eq!(lines.len(), 7);
}

#[tokio::test]
async fn a_non_success_status_stops_the_job_before_the_chart() {
    setup_tracing();
    let server = TestServer::serve(404, "no such book").await;
    let job = parallel_job(pipeline(4, 4, 10));
    let mut renderer = TerminalChart::new(Vec::new(), 50);

    let err = assert_err!(
        job.run(&server.url("missing.txt"), &ChartSettings::default(), &mut renderer)
            .await
    );

    assert_matches!(err, PipelineError::Retrieval(RetrievalError::Status { .. }));
    assert!(renderer.into_inner().is_empty());
    assert_eq!(server.hits(), 1);
}

#[tokio::test]
async fn parallel_and_sequential_runs_agree_on_a_local_file() {
    setup_tracing();
    let mut path = test_data_dir();
    path.push("small_test.txt");
    let url = url::Url::from_file_path(&path).unwrap();

    let parallel = assert_ok!(parallel_job(pipeline(6, 3, 10)).count(url.as_str()).await);
    let sequential = assert_ok!(
        MapReduce::new(pipeline(6, 1, 10), source(), SequentialExecutor)
            .count(url.as_str())
            .await
    );
    assert_eq!(parallel, sequential);
}

#[tokio::test]
async fn cutting_a_local_file_only_adds_boundary_tokens() {
    setup_tracing();
    let mut path = test_data_dir();
    path.push("small_test.txt");
    let locator = path.to_str().unwrap();

    let whole = assert_ok!(parallel_job(pipeline(1, 1, 10)).count(locator).await);
    assert_eq!(whole.get("the"), Some(10));
    assert_eq!(whole.get("whenever"), Some(4));
    assert_eq!(whole.get("ishmael"), Some(1));
    assert_eq!(whole.total_words(), 202);
    assert_eq!(whole.distinct_words(), 135);

    let fragments = 4;
    let split = assert_ok!(parallel_job(pipeline(fragments, 4, 10)).count(locator).await);
    let extra = split.total_words() - whole.total_words();
    // 1108 characters cut into 277-character steps gives four fragments.
    assert_le!(extra, (fragments - 1) as u64);
}
