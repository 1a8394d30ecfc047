use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, RequestOptions},
};
use crate::types::User;

/// Credentials for exchanging an OAuth authorization code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccessTokenParams {
    pub client_id: String,
    pub client_secret: String,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizedUserResponse {
    pub user: User,
}

#[derive(Debug, Clone)]
pub struct AuthorizationApi {
    client: Arc<HttpClient>,
}

impl AuthorizationApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Exchanges an authorization code for an access token. The returned
    /// token is not installed on this client; build a new one with it.
    ///
    /// See <https://developer.clickup.com/reference/getaccesstoken>
    pub async fn get_access_token(&self, params: &AccessTokenParams) -> ApiResult<AccessTokenResponse> {
        self.client
            .request("/oauth/token", RequestOptions::post().json(&json!({ "params": params }))?)
            .await
    }

    /// The user owning the configured token.
    pub async fn get_authorized_user(&self) -> ApiResult<AuthorizedUserResponse> {
        self.client.request("/user", RequestOptions::get()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{TEST_TOKEN, mock_client};
    use crate::api::types::ApiError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn get_access_token_nests_credentials_under_params() {
        let (server, client) = mock_client().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .and(body_json(json!({ "params": { "client_id": "id", "client_secret": "secret", "code": "abc" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "pk_new" })))
            .expect(1)
            .mount(&server)
            .await;

        let params = AccessTokenParams {
            client_id: "id".into(),
            client_secret: "secret".into(),
            code: "abc".into(),
        };
        let token = AuthorizationApi::new(client).get_access_token(&params).await.unwrap();
        assert_eq!(token.access_token, "pk_new");
    }

    #[tokio::test]
    async fn get_authorized_user_sends_token() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path("/user"))
            .and(header("authorization", TEST_TOKEN))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": { "id": 123, "username": "Jane", "color": "#000", "profilePicture": "https://x/p.png" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let user = AuthorizationApi::new(client).get_authorized_user().await.unwrap().user;
        assert_eq!(user.id, json!(123));
        assert_eq!(user.profile_picture.as_deref(), Some("https://x/p.png"));
    }

    #[tokio::test]
    async fn bad_oauth_code_surfaces_as_http_error() {
        let (server, client) = mock_client().await;
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "err": "Code not found", "ECODE": "OAUTH_014" })))
            .mount(&server)
            .await;

        let err = AuthorizationApi::new(client)
            .get_access_token(&AccessTokenParams::default())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Http { status: 400, message: "Code not found".into() });
    }
}
