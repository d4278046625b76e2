//! Host lookup and search endpoints.
//!
//! Both operations return the raw response body as [`serde_json::Value`].
//! SHIRT only re-serializes what the API returns, so there is nothing to
//! gain from a typed model here.

use crate::ShodanClient;
use serde_json::Value;
use shirt_core::Result;

/// Host lookup and search endpoints
pub struct SearchApi<'a> {
    client: &'a ShodanClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) fn new(client: &'a ShodanClient) -> Self {
        Self { client }
    }

    /// Get all information about a host by IP address
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let host = client.search().host("8.8.8.8").await?;
    /// println!("{}", serde_json::to_string_pretty(&host)?);
    /// ```
    pub async fn host(&self, ip: &str) -> Result<Value> {
        self.client.get(&format!("/shodan/host/{ip}")).await
    }

    /// Search Shodan with a query string
    ///
    /// The query uses Shodan's filter syntax, e.g. `hostname:example.com`.
    pub async fn query(&self, query: &str) -> Result<Value> {
        self.client
            .get_with_query("/shodan/host/search", &[("query", query)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use shirt_core::ShirtError;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> crate::ShodanClient {
        crate::ShodanClient::builder("test-key")
            .base_url(server.uri())
            .build()
    }

    #[tokio::test]
    async fn host_lookup_returns_raw_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shodan/host/8.8.8.8"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ip_str": "8.8.8.8",
                "ports": [53, 443]
            })))
            .mount(&server)
            .await;

        let host = client_for(&server).search().host("8.8.8.8").await.unwrap();
        assert_eq!(host["ip_str"], "8.8.8.8");
        assert_eq!(host["ports"][0], 53);
    }

    #[tokio::test]
    async fn query_sends_filter_syntax() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shodan/host/search"))
            .and(query_param("query", "hostname:example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "matches": [],
                "total": 0
            })))
            .mount(&server)
            .await;

        let results = client_for(&server)
            .search()
            .query("hostname:example.com")
            .await
            .unwrap();
        assert_eq!(results["total"], 0);
    }

    #[tokio::test]
    async fn unauthorized_maps_to_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shodan/host/1.2.3.4"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server).search().host("1.2.3.4").await.unwrap_err();
        assert!(matches!(err, ShirtError::Unauthorized));
    }

    #[tokio::test]
    async fn api_error_message_comes_from_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shodan/host/search"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "Invalid search query"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).search().query("hostname:").await.unwrap_err();
        match err {
            ShirtError::Api { code, message } => {
                assert_eq!(code, 400);
                assert_eq!(message, "Invalid search query");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn not_found_maps_to_typed_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shodan/host/10.0.0.1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": "No information available for that IP."
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).search().host("10.0.0.1").await.unwrap_err();
        assert!(matches!(err, ShirtError::NotFound { .. }));
    }
}
