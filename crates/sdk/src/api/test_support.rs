use std::sync::Arc;

use wiremock::MockServer;

use crate::api::{http::HttpClient, types::ClientConfig};

pub(crate) const TEST_TOKEN: &str = "pk_test_token";

/// A real `HttpClient` pointed at a fresh mock server.
pub(crate) async fn mock_client() -> (MockServer, Arc<HttpClient>) {
    let server = MockServer::start().await;
    let config = ClientConfig::new(TEST_TOKEN).with_base_url(server.uri());
    (server, Arc::new(HttpClient::new(config)))
}
