//! src/source/file.rs
use crate::error::RetrievalError;
use crate::source::{DocumentSource, Locator};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default)]
pub struct FileSource;

impl FileSource {
    #[tracing::instrument(name = "Read document", skip(self, path), fields(path = %path.display()))]
    pub async fn read(&self, path: &Path) -> Result<String, RetrievalError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| RetrievalError::Io {
                path: path.display().to_string(),
                source,
            })?;
        tracing::info!(bytes = text.len(), "Read document");
        Ok(text)
    }
}

impl DocumentSource for FileSource {
    async fn fetch(&self, locator: &str) -> Result<String, RetrievalError> {
        match Locator::parse(locator)? {
            Locator::File(path) => self.read(&path).await,
            Locator::Http(url) => Err(RetrievalError::UnsupportedScheme {
                scheme: url.scheme().to_string(),
                locator: locator.to_string(),
            }),
        }
    }
}
