//! Conference dataset fetching.
//!
//! The upstream endpoint returns a JSON array of conference records. Any
//! failure (transport, status, non-array payload) degrades to an empty
//! dataset so the pipeline can still answer from the no-data template.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Transport default for the single fetch; no per-call override, no retry.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// One conference entry from the upstream dataset. Every field is optional;
/// the context builder renders missing fields with an explicit placeholder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConferenceRecord {
    #[serde(default)]
    pub acronym: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub topics: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Seam for record retrieval, so tests can substitute a fake source.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the current dataset. Never fails: upstream outages and
    /// malformed payloads yield an empty Vec.
    async fn fetch(&self) -> Vec<ConferenceRecord>;
}

/// Production source reading the configured dataset URL once per request.
pub struct HttpRecordSource {
    client: Client,
    url: String,
}

impl HttpRecordSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            url: url.into(),
        }
    }

    async fn fetch_inner(&self) -> Result<Vec<ConferenceRecord>, reqwest::Error> {
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        // A non-array payload fails deserialization and counts as an outage.
        response.json::<Vec<ConferenceRecord>>().await
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch(&self) -> Vec<ConferenceRecord> {
        match self.fetch_inner().await {
            Ok(records) => records,
            Err(e) => {
                // Logged so operators can tell an outage from an empty dataset.
                warn!(url = %self.url, error = %e, "dataset fetch failed; continuing with empty dataset");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_tolerates_missing_fields() {
        let record: ConferenceRecord = serde_json::from_str(r#"{"acronym": "ICSE"}"#).unwrap();
        assert_eq!(record.acronym.as_deref(), Some("ICSE"));
        assert!(record.name.is_none());
        assert!(record.deadline.is_none());
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let record: ConferenceRecord =
            serde_json::from_str(r#"{"name": "Conf", "rank": "A*"}"#).unwrap();
        assert_eq!(record.name.as_deref(), Some("Conf"));
    }

    #[test]
    fn test_non_array_payload_fails_decode() {
        let parsed = serde_json::from_str::<Vec<ConferenceRecord>>(r#"{"error": "maintenance"}"#);
        assert!(parsed.is_err());
    }
}
