//! Support for loader configuration options

use std::path::PathBuf;
use std::time::Duration;

use encoding_rs::Encoding;
use url::Url;


/// The path of the schedule file when nothing else is configured
pub const DEFAULT_SOURCE_PATH: &str = "data/calendario.csv";
/// How long fetching a remote schedule file may take
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the schedule file is
#[derive(Clone, Debug, PartialEq)]
pub enum SourceLocation {
    Remote(Url),
    Local(PathBuf),
}

/// Options used by a [`Loader`](crate::loader::Loader)
#[derive(Clone, Debug)]
pub struct Config {
    source: SourceLocation,
    timeout: Duration,
    /// Schedule files are not UTF-8: they come from spreadsheet tools that save them with a legacy code page
    encoding: &'static Encoding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceLocation::Local(PathBuf::from(DEFAULT_SOURCE_PATH)),
            timeout: DEFAULT_TIMEOUT,
            encoding: encoding_rs::WINDOWS_1252,
        }
    }
}

impl Config {
    pub fn remote(url: Url) -> Self {
        Self::default().with_source(SourceLocation::Remote(url))
    }

    pub fn local<P: Into<PathBuf>>(path: P) -> Self {
        Self::default().with_source(SourceLocation::Local(path.into()))
    }

    pub fn with_source(mut self, source: SourceLocation) -> Self {
        self.source = source;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use another single-byte encoding. UTF-8 cannot be used here
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        if encoding.is_single_byte() == false {
            log::warn!("{} is not a single-byte encoding, keeping {}", encoding.name(), self.encoding.name());
            return self;
        }
        self.encoding = encoding;
        self
    }

    pub fn source(&self) -> &SourceLocation      { &self.source   }
    pub fn timeout(&self) -> Duration            { self.timeout   }
    pub fn encoding(&self) -> &'static Encoding  { self.encoding  }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_config() {
        let config = Config::default();
        assert_eq!(config.encoding(), encoding_rs::WINDOWS_1252);
        assert_eq!(config.source(), &SourceLocation::Local(PathBuf::from(DEFAULT_SOURCE_PATH)));

        let url: Url = "https://calendar.example.com/data/calendario.csv".parse().unwrap();
        let config = Config::remote(url.clone())
            .with_timeout(Duration::from_secs(5))
            .with_encoding(encoding_rs::ISO_8859_2);
        assert_eq!(config.source(), &SourceLocation::Remote(url));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.encoding(), encoding_rs::ISO_8859_2);
    }

    #[test]
    fn test_utf8_is_refused() {
        let config = Config::local("some/file.csv").with_encoding(encoding_rs::UTF_8);
        assert_eq!(config.encoding(), encoding_rs::WINDOWS_1252);
    }
}
