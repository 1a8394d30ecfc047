use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    lists::List,
    types::{ApiResult, EmptyResponse, RequestOptions},
};
use crate::types::{ContainerRef, Status};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Folder {
    pub id: String,
    pub name: String,
    pub orderindex: Option<i64>,
    pub override_statuses: Option<bool>,
    pub hidden: bool,
    pub space: Option<ContainerRef>,
    pub task_count: Option<String>,
    pub archived: bool,
    pub statuses: Vec<Status>,
    pub lists: Vec<List>,
    pub permission_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFoldersResponse {
    pub folders: Vec<Folder>,
}

#[derive(Debug, Clone)]
pub struct FoldersApi {
    client: Arc<HttpClient>,
}

impl FoldersApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// See <https://developer.clickup.com/reference/getfolders>
    pub async fn get_folders(
        &self,
        space_id: &str,
        archived: Option<bool>,
    ) -> ApiResult<GetFoldersResponse> {
        self.client
            .request(
                &format!("/space/{}/folder", space_id),
                RequestOptions::get().query(json!({ "archived": archived })),
            )
            .await
    }

    /// Get a folder with its lists
    pub async fn get_folder(&self, folder_id: &str) -> ApiResult<Folder> {
        self.client.request(&format!("/folder/{}", folder_id), RequestOptions::get()).await
    }

    /// Create a folder in a space
    ///
    /// # Arguments
    ///
    /// * `space_id` - The space to create the folder in
    /// * `name` - Folder name
    pub async fn create_folder(&self, space_id: &str, name: &str) -> ApiResult<Folder> {
        self.client
            .request(
                &format!("/space/{}/folder", space_id),
                RequestOptions::post().json(&json!({ "name": name }))?,
            )
            .await
    }

    /// Rename a folder
    ///
    /// # Arguments
    ///
    /// * `folder_id` - The folder to rename
    /// * `name` - New folder name
    pub async fn update_folder(&self, folder_id: &str, name: &str) -> ApiResult<Folder> {
        self.client
            .request(
                &format!("/folder/{}", folder_id),
                RequestOptions::put().json(&json!({ "name": name }))?,
            )
            .await
    }

    /// Delete a folder
    pub async fn delete_folder(&self, folder_id: &str) -> ApiResult<EmptyResponse> {
        self.client.request(&format!("/folder/{}", folder_id), RequestOptions::delete()).await
    }
}
