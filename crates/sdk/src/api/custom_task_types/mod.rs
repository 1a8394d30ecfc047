use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, RequestOptions},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomItemAvatar {
    pub source: Option<String>,
    pub value: Option<String>,
}

/// A custom task type ("custom item") such as Milestone or Bug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomItem {
    pub id: u64,
    pub name: String,
    pub name_plural: Option<String>,
    pub description: Option<String>,
    pub avatar: Option<CustomItemAvatar>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCustomItemsResponse {
    pub custom_items: Vec<CustomItem>,
}

#[derive(Debug, Clone)]
pub struct CustomTaskTypesApi {
    client: Arc<HttpClient>,
}

impl CustomTaskTypesApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// See <https://developer.clickup.com/reference/getcustomitems>
    pub async fn get_custom_task_types(&self, team_id: u64) -> ApiResult<GetCustomItemsResponse> {
        self.client
            .request(&format!("/team/{}/custom_item", team_id), RequestOptions::get())
            .await
    }
}
