use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, EmptyResponse, RequestOptions},
};
use crate::types::{ContainerRef, Status};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListStatus {
    pub status: String,
    pub color: Option<String>,
    pub hide_label: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListPriority {
    pub priority: String,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct List {
    pub id: String,
    pub name: String,
    pub orderindex: Option<i64>,
    pub content: Option<String>,
    pub status: Option<ListStatus>,
    pub priority: Option<ListPriority>,
    pub assignee: Option<crate::types::User>,
    pub task_count: Option<serde_json::Value>,
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub folder: Option<ContainerRef>,
    pub space: Option<ContainerRef>,
    pub archived: bool,
    pub override_statuses: Option<bool>,
    pub statuses: Vec<Status>,
    pub permission_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetListsResponse {
    pub lists: Vec<List>,
}

/// Body for creating a list, inside a folder or directly in a space.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateListParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unset_status: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct ListsApi {
    client: Arc<HttpClient>,
}

impl ListsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// See <https://developer.clickup.com/reference/getlists>
    pub async fn get_lists(
        &self,
        folder_id: &str,
        archived: Option<bool>,
    ) -> ApiResult<GetListsResponse> {
        self.client
            .request(
                &format!("/folder/{}/list", folder_id),
                RequestOptions::get().query(json!({ "archived": archived })),
            )
            .await
    }

    /// Lists that live directly in a space, outside any folder.
    ///
    /// See <https://developer.clickup.com/reference/getfolderlesslists>
    pub async fn get_folderless_lists(
        &self,
        space_id: &str,
        archived: Option<bool>,
    ) -> ApiResult<GetListsResponse> {
        self.client
            .request(
                &format!("/space/{}/list", space_id),
                RequestOptions::get().query(json!({ "archived": archived })),
            )
            .await
    }

    /// Get a list
    pub async fn get_list(&self, list_id: &str) -> ApiResult<List> {
        self.client.request(&format!("/list/{}", list_id), RequestOptions::get()).await
    }

    /// Create a list inside a folder
    ///
    /// # Arguments
    ///
    /// * `folder_id` - The folder to create the list in
    /// * `params` - List name and optional details
    pub async fn create_list(&self, folder_id: &str, params: &CreateListParams) -> ApiResult<List> {
        self.client
            .request(&format!("/folder/{}/list", folder_id), RequestOptions::post().json(params)?)
            .await
    }

    /// Create a list directly in a space
    ///
    /// # Arguments
    ///
    /// * `space_id` - The space to create the list in
    /// * `params` - List name and optional details
    pub async fn create_folderless_list(
        &self,
        space_id: &str,
        params: &CreateListParams,
    ) -> ApiResult<List> {
        self.client
            .request(&format!("/space/{}/list", space_id), RequestOptions::post().json(params)?)
            .await
    }

    /// Edit a list
    ///
    /// # Arguments
    ///
    /// * `list_id` - The list to edit
    /// * `params` - Only the fields that are set are sent
    pub async fn update_list(&self, list_id: &str, params: &UpdateListParams) -> ApiResult<List> {
        self.client
            .request(&format!("/list/{}", list_id), RequestOptions::put().json(params)?)
            .await
    }

    /// Delete a list
    pub async fn delete_list(&self, list_id: &str) -> ApiResult<EmptyResponse> {
        self.client.request(&format!("/list/{}", list_id), RequestOptions::delete()).await
    }
}
