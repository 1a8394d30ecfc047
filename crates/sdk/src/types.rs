use serde::{Deserialize, Serialize};

/// A ClickUp user as returned inside most resources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: serde_json::Value,
    pub username: Option<String>,
    pub email: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "profilePicture")]
    pub profile_picture: Option<String>,
    pub initials: Option<String>,
    pub week_start_day: Option<u8>,
    pub global_font_support: Option<bool>,
    pub timezone: Option<String>,
}

/// How a task id in a path should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskReference {
    /// The id is ClickUp's own task id.
    #[default]
    TaskId,
    /// The id is a custom task id, which ClickUp resolves within `team_id`.
    CustomTaskId { team_id: u64 },
}

impl TaskReference {
    pub fn custom_task_ids(&self) -> Option<bool> {
        match self {
            TaskReference::TaskId => None,
            TaskReference::CustomTaskId { .. } => Some(true),
        }
    }

    pub fn team_id(&self) -> Option<u64> {
        match self {
            TaskReference::TaskId => None,
            TaskReference::CustomTaskId { team_id } => Some(*team_id),
        }
    }
}

/// Cursor for comment endpoints. ClickUp requires both halves together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Unix timestamp (ms) of the oldest comment already seen.
    pub start: u64,
    pub start_id: String,
}

pub(crate) fn pagination_parts(pagination: Option<&Pagination>) -> (Option<u64>, Option<&str>) {
    match pagination {
        Some(p) => (Some(p.start), Some(p.start_id.as_str())),
        None => (None, None),
    }
}

/// Status entry shared by spaces, folders and lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub id: Option<String>,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub orderindex: serde_json::Value,
    pub color: Option<String>,
}

/// Short reference to a parent container (`folder`, `space`, `list`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerRef {
    pub id: String,
    pub name: Option<String>,
    pub hidden: Option<bool>,
    pub access: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_reference_query_parts() {
        assert_eq!(TaskReference::TaskId.custom_task_ids(), None);
        assert_eq!(TaskReference::TaskId.team_id(), None);

        let custom = TaskReference::CustomTaskId { team_id: 123 };
        assert_eq!(custom.custom_task_ids(), Some(true));
        assert_eq!(custom.team_id(), Some(123));
    }

    #[test]
    fn user_accepts_numeric_ids_and_camel_case_picture() {
        let user: User = serde_json::from_str(
            r##"{"id":183,"username":"John","email":"j@x.io","color":"#827718","profilePicture":null,"initials":"J"}"##,
        )
        .unwrap();
        assert_eq!(user.id, serde_json::json!(183));
        assert_eq!(user.username.as_deref(), Some("John"));
        assert_eq!(user.profile_picture, None);
    }
}
