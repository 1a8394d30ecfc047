use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, RequestOptions},
};

/// A custom field definition available at some level of the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Shape depends on `kind` (dropdown options, currency settings, ...).
    pub type_config: Value,
    pub date_created: Option<String>,
    pub hide_from_guests: bool,
    pub required: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCustomFieldsResponse {
    pub fields: Vec<CustomField>,
}

#[derive(Debug, Clone)]
pub struct CustomFieldsApi {
    client: Arc<HttpClient>,
}

impl CustomFieldsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Fields created on the list itself.
    ///
    /// See <https://developer.clickup.com/reference/getaccessiblecustomfields>
    pub async fn get_list_custom_fields(&self, list_id: &str) -> ApiResult<GetCustomFieldsResponse> {
        self.client.request(&format!("/list/{}/field", list_id), RequestOptions::get()).await
    }

    /// Fields created on the space.
    pub async fn get_space_custom_fields(&self, space_id: &str) -> ApiResult<GetCustomFieldsResponse> {
        self.client.request(&format!("/space/{}/field", space_id), RequestOptions::get()).await
    }

    /// Workspace-level fields.
    pub async fn get_workspace_custom_fields(&self, team_id: &str) -> ApiResult<GetCustomFieldsResponse> {
        self.client.request(&format!("/team/{}/field", team_id), RequestOptions::get()).await
    }
}
