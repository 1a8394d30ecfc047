use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, EmptyResponse, RequestOptions},
};
use crate::types::User;

/// A key result ("target") tracked by a goal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyResult {
    pub id: String,
    pub name: String,
    /// One of `number`, `currency`, `boolean`, `percentage`, `automatic`.
    #[serde(rename = "type")]
    pub kind: String,
    pub date_created: Option<String>,
    pub start: Option<f64>,
    pub goal: Option<f64>,
    pub current: Option<f64>,
    pub unit: Option<String>,
    pub currency: Option<String>,
    pub owners: Vec<User>,
    pub last_action: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub team_id: Option<String>,
    pub date_created: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub description: Option<String>,
    pub private: bool,
    pub archived: bool,
    pub creator: Option<u64>,
    pub color: Option<String>,
    pub pretty_id: Option<String>,
    pub multiple_owners: bool,
    pub folder_id: Option<String>,
    pub members: Vec<User>,
    pub owners: Vec<User>,
    pub key_results: Vec<KeyResult>,
    pub percent_completed: Option<f64>,
    pub history: Vec<Value>,
    pub pretty_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalFolder {
    pub id: String,
    pub name: String,
    pub team_id: Option<String>,
    pub date_created: Option<String>,
    pub archived: bool,
    pub creator: Option<u64>,
    pub color: Option<String>,
    pub private: bool,
    pub hidden: bool,
    pub members: Vec<User>,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetGoalsResponse {
    pub goals: Vec<Goal>,
    pub folders: Vec<GoalFolder>,
}

/// `GET /goal/{id}`, `POST` and `PUT` all wrap the goal in a `goal` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalResponse {
    pub goal: Goal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateGoalParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_owners: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateGoalParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rem_owners: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_owners: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GoalsApi {
    client: Arc<HttpClient>,
}

impl GoalsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// See <https://developer.clickup.com/reference/getgoals>
    pub async fn get_goals(&self, team_id: u64) -> ApiResult<GetGoalsResponse> {
        self.client.request(&format!("/team/{}/goal", team_id), RequestOptions::get()).await
    }

    /// Get a goal with its key results
    pub async fn get_goal(&self, goal_id: &str) -> ApiResult<GoalResponse> {
        self.client.request(&format!("/goal/{}", goal_id), RequestOptions::get()).await
    }

    /// Create a goal in a workspace
    ///
    /// # Arguments
    ///
    /// * `team_id` - The workspace to create the goal in
    /// * `params` - Goal name, owners and optional details
    pub async fn create_goal(&self, team_id: u64, params: &CreateGoalParams) -> ApiResult<GoalResponse> {
        self.client
            .request(&format!("/team/{}/goal", team_id), RequestOptions::post().json(params)?)
            .await
    }

    /// Rename a goal, move its due date or change owners
    ///
    /// # Arguments
    ///
    /// * `goal_id` - The goal to edit
    /// * `params` - Only the fields that are set are sent
    pub async fn update_goal(&self, goal_id: &str, params: &UpdateGoalParams) -> ApiResult<GoalResponse> {
        self.client
            .request(&format!("/goal/{}", goal_id), RequestOptions::put().json(params)?)
            .await
    }

    /// Delete a goal
    pub async fn delete_goal(&self, goal_id: &str) -> ApiResult<EmptyResponse> {
        self.client.request(&format!("/goal/{}", goal_id), RequestOptions::delete()).await
    }
}
