//! src/source/http.rs
use crate::configuration::SourceSettings;
use crate::error::RetrievalError;
use crate::source::{DocumentSource, Locator};
use url::Url;

#[derive(Clone, Debug)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_settings(settings: &SourceSettings) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.as_str())
            .build()?;
        Ok(Self::new(client))
    }

    /// GETs `url` and returns the body. Anything but a 2xx answer is a
    /// retrieval failure.
    #[tracing::instrument(name = "Download document", skip(self, url), fields(url = %url))]
    pub async fn get(&self, url: Url) -> Result<String, RetrievalError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| RetrievalError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "Download rejected");
            return Err(RetrievalError::Status {
                url: url.to_string(),
                status,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|source| RetrievalError::Request {
                url: url.to_string(),
                source,
            })?;
        tracing::info!(bytes = text.len(), "Downloaded document");
        Ok(text)
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, locator: &str) -> Result<String, RetrievalError> {
        match Locator::parse(locator)? {
            Locator::Http(url) => self.get(url).await,
            Locator::File(_) => Err(RetrievalError::UnsupportedScheme {
                scheme: "file".into(),
                locator: locator.to_string(),
            }),
        }
    }
}
