//! Fetching the export text over HTTP or from disk

use std::fmt;
use std::fs;
use std::path::PathBuf;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

/// Errors from resolving or fetching a source
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {spec:?}")]
    InvalidUrl {
        spec: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("server returned HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where the CSV text comes from
#[derive(Debug, Clone)]
pub enum Source {
    Url(Url),
    File(PathBuf),
}

impl Source {
    /// Resolve a CLI argument: http(s) specs become URLs, everything else
    /// is treated as a local path.
    pub fn parse(spec: &str) -> Result<Self, FetchError> {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            let url = Url::parse(spec).map_err(|source| FetchError::InvalidUrl {
                spec: spec.to_string(),
                source,
            })?;
            Ok(Source::Url(url))
        } else {
            Ok(Source::File(PathBuf::from(spec)))
        }
    }

    /// Fetch the full text of the source.
    ///
    /// One blocking GET for URLs, a plain read for files. No retries.
    pub fn fetch(&self) -> Result<String, FetchError> {
        match self {
            Source::Url(url) => {
                let client = Client::new();
                let resp = client
                    .get(url.as_str())
                    .send()
                    .map_err(|source| FetchError::Request {
                        url: url.to_string(),
                        source,
                    })?;

                let status = resp.status();
                if !status.is_success() {
                    return Err(FetchError::Status {
                        status,
                        url: url.to_string(),
                    });
                }

                resp.text().map_err(|source| FetchError::Request {
                    url: url.to_string(),
                    source,
                })
            }
            Source::File(path) => fs::read_to_string(path).map_err(|source| FetchError::Read {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}
