use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{ContainerRef, TaskReference, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskStatus {
    pub id: Option<String>,
    pub status: String,
    pub color: Option<String>,
    pub orderindex: Value,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskTag {
    pub name: String,
    pub tag_fg: Option<String>,
    pub tag_bg: Option<String>,
    pub creator: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskPriority {
    pub id: Option<String>,
    pub priority: String,
    pub color: Option<String>,
    pub orderindex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskSharing {
    pub public: bool,
    pub public_share_expires_on: Option<String>,
    pub public_fields: Vec<String>,
    pub token: Option<String>,
    pub seo_optimized: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    pub custom_id: Option<String>,
    pub custom_item_id: Option<u64>,
    pub name: String,
    pub text_content: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub orderindex: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub date_closed: Option<String>,
    pub date_done: Option<String>,
    pub archived: bool,
    pub creator: Option<User>,
    pub assignees: Vec<User>,
    pub watchers: Vec<User>,
    pub checklists: Vec<Value>,
    pub tags: Vec<TaskTag>,
    pub parent: Option<String>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<String>,
    pub start_date: Option<String>,
    pub points: Option<f64>,
    pub time_estimate: Option<u64>,
    pub time_spent: Option<u64>,
    pub custom_fields: Vec<Value>,
    pub dependencies: Vec<Value>,
    pub linked_tasks: Vec<Value>,
    pub team_id: Option<String>,
    pub url: Option<String>,
    pub sharing: Option<TaskSharing>,
    pub permission_level: Option<String>,
    pub list: Option<ContainerRef>,
    pub project: Option<ContainerRef>,
    pub folder: Option<ContainerRef>,
    pub space: Option<ContainerRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetTasksResponse {
    pub tasks: Vec<Task>,
    pub last_page: bool,
}

/// Filters for `GET /list/{list_id}/task`. Array filters are sent as `key[]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetTasksParams {
    pub archived: Option<bool>,
    pub page: Option<u32>,
    pub order_by: Option<String>,
    pub reverse: Option<bool>,
    pub subtasks: Option<bool>,
    pub statuses: Option<Vec<String>>,
    pub include_closed: Option<bool>,
    pub assignees: Option<Vec<u64>>,
    pub tags: Option<Vec<String>>,
    pub due_date_gt: Option<u64>,
    pub due_date_lt: Option<u64>,
    pub date_created_gt: Option<u64>,
    pub date_created_lt: Option<u64>,
    pub date_updated_gt: Option<u64>,
    pub date_updated_lt: Option<u64>,
    /// JSON-encoded custom field filter, passed through as-is.
    pub custom_fields: Option<String>,
    pub custom_items: Option<Vec<u64>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetTaskParams {
    pub reference: TaskReference,
    pub include_subtasks: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomFieldValue {
    pub id: String,
    pub value: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTaskParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_assignees: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_required_custom_fields: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomFieldValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_item_id: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssigneeChanges {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rem: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskParams {
    #[serde(skip)]
    pub reference: TaskReference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<AssigneeChanges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// Which side of a dependency `task_id` sits on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependency {
    /// `task_id` is waiting on this task.
    DependsOn(String),
    /// `task_id` is blocking this task.
    DependencyOf(String),
}

impl Dependency {
    pub(crate) fn depends_on(&self) -> Option<&str> {
        match self {
            Dependency::DependsOn(id) => Some(id.as_str()),
            Dependency::DependencyOf(_) => None,
        }
    }

    pub(crate) fn dependency_of(&self) -> Option<&str> {
        match self {
            Dependency::DependsOn(_) => None,
            Dependency::DependencyOf(id) => Some(id.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyParams {
    pub dependency: Dependency,
    pub reference: TaskReference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLinkParams {
    pub links_to: String,
    pub reference: TaskReference,
}
