//! src/configuration.rs
use serde_aux::field_attributes::{
    deserialize_bool_from_anything, deserialize_number_from_string,
};
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_SOURCE_URL: &str = "https://www.gutenberg.org/cache/epub/2701/pg2701.txt";

const DEFAULT_PARALLELISM: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(n) => n,
    None => panic!("default parallelism must be non-zero"),
};

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, Default)]
pub struct Settings {
    pub source: SourceSettings,
    pub pipeline: PipelineSettings,
    pub chart: ChartSettings,
    pub telemetry: TelemetrySettings,
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct SourceSettings {
    pub url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

/// Sizing of the map/reduce run.
///
/// `fragments` is the nominal number of pieces the document is cut into and
/// `workers` bounds how many of them are counted at the same time. Neither
/// may be zero.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq)]
pub struct PipelineSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub fragments: NonZeroUsize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub workers: NonZeroUsize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub top_n: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            fragments: DEFAULT_PARALLELISM,
            workers: DEFAULT_PARALLELISM,
            top_n: 10,
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct ChartSettings {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub bar_width: usize,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            title: "Top 10 Most Frequent Words".into(),
            x_label: "Words".into(),
            y_label: "Frequency".into(),
            bar_width: 50,
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug)]
pub struct TelemetrySettings {
    pub log_level: String,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub otlp_export: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            otlp_export: false,
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let config_dir = base_path.join("configuration");

    layered(&config_dir, environment())
}

/// `WORDFREQ_PIPELINE__WORKERS=8` sets `pipeline.workers`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("WORDFREQ")
        .prefix_separator("_")
        .separator("__")
}

fn layered(
    config_dir: &Path,
    environment: config::Environment,
) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::Config::try_from(&Settings::default())?)
        .add_source(config::File::from(config_dir.join("base.yaml")).required(false))
        .add_source(environment)
        .build()?;
    settings.try_deserialize::<Settings>()
}
