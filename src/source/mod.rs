//! src/source/mod.rs
use crate::configuration::SourceSettings;
use crate::error::RetrievalError;
use std::path::PathBuf;
use url::Url;

mod file;
mod http;
pub use file::FileSource;
pub use http::HttpSource;

/// Somewhere a whole document can be read from in one go.
pub trait DocumentSource {
    fn fetch(&self, locator: &str) -> impl Future<Output = Result<String, RetrievalError>> + Send;
}

#[derive(Debug, PartialEq, Eq)]
pub enum Locator {
    Http(Url),
    File(PathBuf),
}

impl Locator {
    /// `http(s)://` URLs go to the network, `file://` URLs and bare paths
    /// to the local filesystem.
    pub fn parse(locator: &str) -> Result<Self, RetrievalError> {
        let trimmed = locator.trim();
        if trimmed.is_empty() {
            return Err(RetrievalError::InvalidLocator(locator.to_string()));
        }
        match Url::parse(trimmed) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Locator::Http(url)),
                "file" => url
                    .to_file_path()
                    .map(Locator::File)
                    .map_err(|_| RetrievalError::InvalidLocator(locator.to_string())),
                scheme => Err(RetrievalError::UnsupportedScheme {
                    scheme: scheme.to_string(),
                    locator: locator.to_string(),
                }),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(Locator::File(PathBuf::from(trimmed)))
            }
            Err(_) => Err(RetrievalError::InvalidLocator(locator.to_string())),
        }
    }
}

/// Routes each locator to the HTTP or the file source.
#[derive(Clone, Debug)]
pub struct LocatorSource {
    http: HttpSource,
    file: FileSource,
}

impl LocatorSource {
    pub fn new(http: HttpSource, file: FileSource) -> Self {
        Self { http, file }
    }

    pub fn from_settings(settings: &SourceSettings) -> Result<Self, reqwest::Error> {
        Ok(Self::new(HttpSource::from_settings(settings)?, FileSource))
    }
}

impl DocumentSource for LocatorSource {
    async fn fetch(&self, locator: &str) -> Result<String, RetrievalError> {
        match Locator::parse(locator)? {
            Locator::Http(url) => self.http.get(url).await,
            Locator::File(path) => self.file.read(&path).await,
        }
    }
}
