//! src/test_utils.rs
use crate::chart::{BarChart, ChartRenderer};
use crate::error::{PresentationError, RetrievalError};
use crate::source::DocumentSource;
use std::path::PathBuf;

pub fn test_data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

/// In-memory document source answering every locator the same way.
pub enum StaticSource {
    Text(String),
    Status(u16),
}

impl StaticSource {
    pub fn text(text: &str) -> Self {
        StaticSource::Text(text.to_string())
    }

    pub fn status(code: u16) -> Self {
        StaticSource::Status(code)
    }
}

impl DocumentSource for StaticSource {
    async fn fetch(&self, locator: &str) -> Result<String, RetrievalError> {
        match self {
            StaticSource::Text(text) => Ok(text.clone()),
            StaticSource::Status(code) => Err(RetrievalError::Status {
                url: locator.to_string(),
                status: reqwest::StatusCode::from_u16(*code).expect("Invalid status code"),
            }),
        }
    }
}

/// Keeps every chart it is asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    pub charts: Vec<BarChart>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, chart: &BarChart) -> Result<(), PresentationError> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

/// Fails every render the way a closed stdout would.
pub struct FailingRenderer;

impl ChartRenderer for FailingRenderer {
    fn render(&mut self, _: &BarChart) -> Result<(), PresentationError> {
        Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
    }
}
