//! Report acquisition. One fetch per process; there is no retry and no
//! re-fetch, so every error is terminal and surfaces in the error panel.

use thiserror::Error;

use crate::report::Report;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed report: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fetch and parse the report from an HTTP(S) URL or a local path.
pub async fn fetch_report(source: &str) -> Result<Report, FetchError> {
    let body = if is_url(source) {
        let response = reqwest::get(source).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: source.to_string(),
                status,
            });
        }
        response.text().await?
    } else {
        tokio::fs::read_to_string(source)
            .await
            .map_err(|source_err| FetchError::Io {
                path: source.to_string(),
                source: source_err,
            })?
    };

    Ok(serde_json::from_str(&body)?)
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::{fetch_report, is_url, FetchError};
    use crate::report::fixtures::SAMPLE_REPORT;
    use std::io::Write;

    #[test]
    fn url_detection() {
        assert!(is_url("https://example.com/report.json"));
        assert!(is_url("http://localhost:8080/report.json"));
        assert!(!is_url("report.json"));
        assert!(!is_url("./data/report.json"));
    }

    #[tokio::test]
    async fn reads_local_report() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_REPORT.as_bytes()).unwrap();

        let report = fetch_report(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(report.channel_overview.name, "Jhoom Baba Gyaan");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let result = fetch_report("definitely-not-here.json").await;
        assert!(matches!(result, Err(FetchError::Io { .. })));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"a report\"}").unwrap();

        let result = fetch_report(file.path().to_str().unwrap()).await;
        assert!(matches!(result, Err(FetchError::Parse(_))));
    }
}
