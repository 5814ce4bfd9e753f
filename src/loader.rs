//! This module loads schedule files, either from a web server or from the local filesystem

use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use encoding_rs::Encoding;
use url::Url;

use crate::config::{Config, SourceLocation};
use crate::records::{self, SkippedLine};
use crate::traits::EventSource;
use crate::EventCollection;


/// A schedule file served over HTTP(S)
pub struct HttpSource {
    url: Url,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: Url, timeout: Duration) -> Self {
        Self { url, timeout }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl EventSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()?;

        let res = client
            .get(self.url.as_str())
            .send()
            .await?;
        if res.status().is_success() == false {
            return Err(format!("Unexpected HTTP status {} for {}", res.status(), self.url).into());
        }

        let bytes = res.bytes().await?;
        Ok(bytes.to_vec())
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}


/// A schedule file on the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: PathBuf::from(path.as_ref()) }
    }
}

#[async_trait]
impl EventSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>> {
        match tokio::fs::read(&self.path).await {
            Err(err) => Err(format!("Unable to open file {:?}: {}", self.path, err).into()),
            Ok(content) => Ok(content),
        }
    }

    fn describe(&self) -> String {
        format!("{}", self.path.display())
    }
}



/// What came out of a [`Loader::load`]
#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
    /// The source has been read. It may contain no event at all
    Loaded {
        events: EventCollection,
        skipped: Vec<SkippedLine>,
    },
    /// The source could not be fetched or decoded
    Failed { reason: String },
}

impl LoadOutcome {
    pub fn is_failure(&self) -> bool {
        match self {
            LoadOutcome::Failed{ .. } => true,
            _ => false,
        }
    }

    /// Whether the source has been read, but has no event.
    /// This is `false` for failed loads.
    pub fn is_empty(&self) -> bool {
        match self {
            LoadOutcome::Loaded{ events, .. } => events.is_empty(),
            LoadOutcome::Failed{ .. } => false,
        }
    }

    pub fn collection(&self) -> Option<&EventCollection> {
        match self {
            LoadOutcome::Loaded{ events, .. } => Some(events),
            LoadOutcome::Failed{ .. } => None,
        }
    }

    /// The loaded events, or an empty collection in case the load failed
    pub fn into_collection(self) -> EventCollection {
        match self {
            LoadOutcome::Loaded{ events, .. } => events,
            LoadOutcome::Failed{ .. } => EventCollection::default(),
        }
    }
}


/// Fetches a schedule file, decodes it and parses it into events
pub struct Loader {
    source: Box<dyn EventSource + Send + Sync>,
    encoding: &'static Encoding,
}

impl Loader {
    pub fn new(source: Box<dyn EventSource + Send + Sync>, encoding: &'static Encoding) -> Self {
        Self { source, encoding }
    }

    pub fn from_config(config: &Config) -> Self {
        let source: Box<dyn EventSource + Send + Sync> = match config.source() {
            SourceLocation::Remote(url) => Box::new(HttpSource::new(url.clone(), config.timeout())),
            SourceLocation::Local(path) => Box::new(FileSource::new(path)),
        };
        Self::new(source, config.encoding())
    }

    /// Load the events.
    ///
    /// This never returns an error: failures are reported as [`LoadOutcome::Failed`]
    pub async fn load(&self) -> LoadOutcome {
        log::debug!("Loading events from {}", self.source.describe());

        let raw = match self.source.fetch().await {
            Err(err) => {
                log::error!("Error loading calendar data from {}: {}", self.source.describe(), err);
                return LoadOutcome::Failed{ reason: err.to_string() };
            },
            Ok(raw) => raw,
        };

        let text = match decode(&raw, self.encoding) {
            Err(err) => {
                log::error!("Error decoding calendar data from {}: {}", self.source.describe(), err);
                return LoadOutcome::Failed{ reason: err.to_string() };
            },
            Ok(text) => text,
        };

        let report = records::parse_with_report(&text);
        log::info!("Loaded {} events from {} ({} lines skipped)", report.events.len(), self.source.describe(), report.skipped.len());
        LoadOutcome::Loaded {
            events: EventCollection::new(report.events),
            skipped: report.skipped,
        }
    }
}

/// Load the events from the source a [`Config`] describes
pub async fn load_events(config: &Config) -> LoadOutcome {
    Loader::from_config(config).load().await
}

/// Decode raw bytes with a single-byte encoding.
///
/// A BOM is not taken into account, so that it never switches the decoder to UTF-8.
pub fn decode(raw: &[u8], encoding: &'static Encoding) -> Result<String, Box<dyn Error>> {
    let (text, had_errors) = encoding.decode_without_bom_handling(raw);
    if had_errors {
        return Err(format!("Content is not valid {}", encoding.name()).into());
    }
    Ok(text.into_owned())
}
