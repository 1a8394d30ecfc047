use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, EmptyResponse, RequestOptions},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,
    pub tag_fg: Option<String>,
    pub tag_bg: Option<String>,
    pub creator: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetSpaceTagsResponse {
    pub tags: Vec<Tag>,
}

/// Tag definition sent when creating or editing a tag. Colors are hex strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_bg: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TagsApi {
    client: Arc<HttpClient>,
}

impl TagsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// See <https://developer.clickup.com/reference/getspacetags>
    pub async fn get_space_tags(&self, space_id: &str) -> ApiResult<GetSpaceTagsResponse> {
        self.client.request(&format!("/space/{}/tag", space_id), RequestOptions::get()).await
    }

    /// See <https://developer.clickup.com/reference/createspacetag>
    pub async fn create_space_tag(&self, space_id: &str, tag: &TagInput) -> ApiResult<EmptyResponse> {
        self.client
            .request(
                &format!("/space/{}/tag", space_id),
                RequestOptions::post().json(&json!({ "tag": tag }))?,
            )
            .await
    }

    /// See <https://developer.clickup.com/reference/editspacetag>
    pub async fn update_space_tag(
        &self,
        space_id: &str,
        tag_name: &str,
        tag: &TagInput,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .request(
                &format!("/space/{}/tag/{}", space_id, tag_name),
                RequestOptions::put().json(&json!({ "tag": tag }))?,
            )
            .await
    }

    /// See <https://developer.clickup.com/reference/deletespacetag>
    pub async fn delete_space_tag(&self, space_id: &str, tag_name: &str) -> ApiResult<EmptyResponse> {
        self.client
            .request(&format!("/space/{}/tag/{}", space_id, tag_name), RequestOptions::delete())
            .await
    }
}
