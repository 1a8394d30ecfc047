use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, EmptyResponse, RequestOptions},
};
use crate::types::Status;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DueDatesFeature {
    pub enabled: bool,
    pub start_date: bool,
    pub remap_due_dates: bool,
    pub remap_closed_due_date: bool,
}

/// ClickApps toggled on a space. Unset features are left out of request bodies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_dates: Option<DueDatesFeature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_tracking: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimates: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklists: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remap_dependencies: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependency_warning: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolios: Option<Toggle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Space {
    pub id: String,
    pub name: String,
    pub private: bool,
    pub statuses: Vec<Status>,
    pub multiple_assignees: bool,
    pub features: SpaceFeatures,
    pub archived: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetSpacesResponse {
    pub spaces: Vec<Space>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateSpaceParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_assignees: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<SpaceFeatures>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateSpaceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_can_manage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_assignees: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<SpaceFeatures>,
}

#[derive(Debug, Clone)]
pub struct SpacesApi {
    client: Arc<HttpClient>,
}

impl SpacesApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Spaces in a workspace (`team_id`).
    ///
    /// See <https://developer.clickup.com/reference/getspaces>
    pub async fn get_spaces(
        &self,
        team_id: &str,
        archived: Option<bool>,
    ) -> ApiResult<GetSpacesResponse> {
        self.client
            .request(
                &format!("/team/{}/space", team_id),
                RequestOptions::get().query(json!({ "archived": archived })),
            )
            .await
    }

    /// Get a space
    pub async fn get_space(&self, space_id: &str) -> ApiResult<Space> {
        self.client.request(&format!("/space/{}", space_id), RequestOptions::get()).await
    }

    /// Create a space in a workspace
    ///
    /// # Arguments
    ///
    /// * `team_id` - The workspace to create the space in
    /// * `params` - Space name and optional ClickApp features
    pub async fn create_space(&self, team_id: &str, params: &CreateSpaceParams) -> ApiResult<Space> {
        self.client
            .request(&format!("/team/{}/space", team_id), RequestOptions::post().json(params)?)
            .await
    }

    /// Edit a space
    ///
    /// # Arguments
    ///
    /// * `space_id` - The space to edit
    /// * `params` - Only the fields that are set are sent
    pub async fn update_space(&self, space_id: &str, params: &UpdateSpaceParams) -> ApiResult<Space> {
        self.client
            .request(&format!("/space/{}", space_id), RequestOptions::put().json(params)?)
            .await
    }

    /// Delete a space
    pub async fn delete_space(&self, space_id: &str) -> ApiResult<EmptyResponse> {
        self.client.request(&format!("/space/{}", space_id), RequestOptions::delete()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::mock_client;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    fn space_json() -> serde_json::Value {
        json!({
            "id": "790",
            "name": "Engineering",
            "private": false,
            "statuses": [{ "status": "open", "type": "open", "orderindex": 0, "color": "#d3d3d3" }],
            "multiple_assignees": true,
            "features": {
                "due_dates": { "enabled": true, "start_date": false, "remap_due_dates": true, "remap_closed_due_date": false },
                "time_tracking": { "enabled": false }
            },
            "archived": false
        })
    }

    #[tokio::test]
    async fn get_spaces_and_space() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path("/team/123/space"))
            .and(query_param("archived", "false"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "spaces": [space_json()] })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/space/790"))
            .respond_with(ResponseTemplate::new(200).set_body_json(space_json()))
            .expect(1)
            .mount(&server)
            .await;

        let api = SpacesApi::new(client);
        let spaces = api.get_spaces("123", Some(false)).await.unwrap();
        assert_eq!(spaces.spaces.len(), 1);

        let space = api.get_space("790").await.unwrap();
        assert!(space.features.due_dates.unwrap().enabled);
        assert_eq!(space.features.time_tracking, Some(Toggle { enabled: false }));
        assert_eq!(space.features.tags, None);
    }

    #[tokio::test]
    async fn create_update_delete_space() {
        let (server, client) = mock_client().await;
        Mock::given(method("POST"))
            .and(path("/team/123/space"))
            .and(body_json(json!({
                "name": "Engineering",
                "multiple_assignees": true,
                "features": { "tags": { "enabled": true } }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(space_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/space/790"))
            .and(body_json(json!({ "color": "#7B68EE", "private": true })))
            .respond_with(ResponseTemplate::new(200).set_body_json(space_json()))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/space/790"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let api = SpacesApi::new(client);
        let params = CreateSpaceParams {
            name: "Engineering".into(),
            multiple_assignees: Some(true),
            features: Some(SpaceFeatures { tags: Some(Toggle { enabled: true }), ..Default::default() }),
        };
        assert_eq!(api.create_space("123", &params).await.unwrap().id, "790");

        let update = UpdateSpaceParams {
            color: Some("#7B68EE".into()),
            private: Some(true),
            ..Default::default()
        };
        api.update_space("790", &update).await.unwrap();
        api.delete_space("790").await.unwrap();
    }
}
