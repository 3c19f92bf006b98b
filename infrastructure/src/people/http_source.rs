//! HTTP adapter for the remote people service.
//!
//! Endpoints:
//! - `GET {base_url}/people/ids` → JSON array of integers
//! - `GET {base_url}/people/{id}` → JSON person object

use async_trait::async_trait;
use roster_application::ports::people_source::{PeopleSource, SourceError};
use roster_domain::{Person, PersonId};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9874";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = concat!("roster/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`HttpPeopleSource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSettings {
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SourceSettings {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// [`PeopleSource`] backed by a pooled `reqwest::Client`.
///
/// Safe to share across concurrent fetches.
pub struct HttpPeopleSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPeopleSource {
    pub fn new(settings: &SourceSettings) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| SourceError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: String,
        cancel: &CancellationToken,
    ) -> Result<T, SourceError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!("GET {}", url);

        let request = async move {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(transport_error)?;

            let status = response.status();
            if !status.is_success() {
                return Err(SourceError::Status {
                    status: status.as_u16(),
                    url,
                });
            }

            let body = response.bytes().await.map_err(transport_error)?;
            serde_json::from_slice(&body).map_err(|e| SourceError::Decode(e.to_string()))
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(SourceError::Cancelled),
            result = request => result,
        }
    }
}

fn transport_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else if e.is_decode() {
        SourceError::Decode(e.to_string())
    } else {
        SourceError::Connection(e.to_string())
    }
}

#[async_trait]
impl PeopleSource for HttpPeopleSource {
    async fn list_ids(&self, cancel: &CancellationToken) -> Result<Vec<PersonId>, SourceError> {
        self.get_json("people/ids".to_string(), cancel).await
    }

    async fn fetch_person(
        &self,
        id: PersonId,
        cancel: &CancellationToken,
    ) -> Result<Person, SourceError> {
        self.get_json(format!("people/{}", id), cancel).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer) -> HttpPeopleSource {
        let settings = SourceSettings::default()
            .with_base_url(server.uri())
            .with_timeout(Duration::from_millis(500));
        HttpPeopleSource::new(&settings).unwrap()
    }

    fn person_json(id: i64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "givenName": "John",
            "familyName": "Koenig",
            "startDate": "1975-10-17T00:00:00",
            "rating": 6,
            "formatString": ""
        })
    }

    #[tokio::test]
    async fn test_list_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/ids"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2, 3])))
            .mount(&server)
            .await;

        let ids = source_for(&server)
            .list_ids(&CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(ids, vec![PersonId::new(1), PersonId::new(2), PersonId::new(3)]);
    }

    #[tokio::test]
    async fn test_fetch_person() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(person_json(1)))
            .mount(&server)
            .await;

        let person = source_for(&server)
            .fetch_person(PersonId::new(1), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(person.id(), PersonId::new(1));
        assert_eq!(person.to_string(), "John Koenig");
        assert_eq!(person.rating(), 6);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/3"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = source_for(&server)
            .fetch_person(PersonId::new(3), &CancellationToken::new())
            .await
            .unwrap_err();
        match err {
            SourceError::Status { status, url } => {
                assert_eq!(status, 500);
                assert!(url.ends_with("/people/3"));
            }
            other => panic!("expected Status, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/ids"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = source_for(&server)
            .list_ids(&CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/ids"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([1]))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let err = source_for(&server)
            .list_ids(&CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err, SourceError::Timeout);
    }

    #[tokio::test]
    async fn test_cancel_abandons_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/people/1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(person_json(1))
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let settings = SourceSettings::default().with_base_url(server.uri());
        let source = HttpPeopleSource::new(&settings).unwrap();
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let err = source
            .fetch_person(PersonId::new(1), &token)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_connection_error() {
        let settings = SourceSettings::default().with_base_url("http://127.0.0.1:1");
        let source = HttpPeopleSource::new(&settings).unwrap();

        let err = source
            .list_ids(&CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "connection");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let settings = SourceSettings::default().with_base_url("http://localhost:9874/");
        let source = HttpPeopleSource::new(&settings).unwrap();
        assert_eq!(source.base_url(), "http://localhost:9874");
    }
}
