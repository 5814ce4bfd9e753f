use std::error::Error;

use async_trait::async_trait;

/// A place a schedule file can be fetched from
#[async_trait]
pub trait EventSource {
    /// Returns the raw (still encoded) content of the schedule file
    /// This may be a long process, or can even fail, e.g. in case of a remote server
    async fn fetch(&self) -> Result<Vec<u8>, Box<dyn Error + Send + Sync>>;

    /// A human-readable description of this source, for logs
    fn describe(&self) -> String;
}
