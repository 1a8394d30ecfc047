mod types;

pub use types::{
    AssigneeChanges, CreateTaskParams, CustomFieldValue, Dependency, DependencyParams,
    GetTaskParams, GetTasksParams, GetTasksResponse, Task, TaskLinkParams, TaskPriority,
    TaskSharing, TaskStatus, TaskTag, UpdateTaskParams,
};

use serde_json::json;
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    types::{ApiResult, EmptyResponse, RequestOptions},
};
use crate::types::TaskReference;

#[derive(Debug, Clone)]
pub struct TasksApi {
    client: Arc<HttpClient>,
}

impl TasksApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Tasks in a list, 100 per page.
    ///
    /// See <https://developer.clickup.com/reference/gettasks>
    pub async fn get_tasks(
        &self,
        list_id: &str,
        params: &GetTasksParams,
    ) -> ApiResult<GetTasksResponse> {
        let query = json!({
            "archived": params.archived,
            "page": params.page,
            "order_by": params.order_by,
            "reverse": params.reverse,
            "subtasks": params.subtasks,
            "statuses": params.statuses,
            "include_closed": params.include_closed,
            "assignees": params.assignees,
            "tags": params.tags,
            "due_date_gt": params.due_date_gt,
            "due_date_lt": params.due_date_lt,
            "date_created_gt": params.date_created_gt,
            "date_created_lt": params.date_created_lt,
            "date_updated_gt": params.date_updated_gt,
            "date_updated_lt": params.date_updated_lt,
            "custom_fields": params.custom_fields,
            "custom_items": params.custom_items,
        });

        self.client.request(&format!("/list/{}/task", list_id), RequestOptions::get().query(query)).await
    }

    /// See <https://developer.clickup.com/reference/gettask>
    pub async fn get_task(&self, task_id: &str, params: &GetTaskParams) -> ApiResult<Task> {
        let query = json!({
            "custom_task_ids": params.reference.custom_task_ids(),
            "team_id": params.reference.team_id(),
            "include_subtasks": params.include_subtasks,
        });

        self.client.request(&format!("/task/{}", task_id), RequestOptions::get().query(query)).await
    }

    /// See <https://developer.clickup.com/reference/createtask>
    pub async fn create_task(&self, list_id: &str, params: &CreateTaskParams) -> ApiResult<Task> {
        self.client
            .request(&format!("/list/{}/task", list_id), RequestOptions::post().json(params)?)
            .await
    }

    /// See <https://developer.clickup.com/reference/updatetask>
    pub async fn update_task(&self, task_id: &str, params: &UpdateTaskParams) -> ApiResult<Task> {
        let options = RequestOptions::put()
            .json(params)?
            .query(reference_query(&params.reference));

        self.client.request(&format!("/task/{}", task_id), options).await
    }

    /// See <https://developer.clickup.com/reference/deletetask>
    pub async fn delete_task(
        &self,
        task_id: &str,
        reference: TaskReference,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .request(
                &format!("/task/{}", task_id),
                RequestOptions::delete().query(reference_query(&reference)),
            )
            .await
    }

    /// Marks `task_id` as waiting on, or blocking, another task.
    ///
    /// See <https://developer.clickup.com/reference/adddependency>
    pub async fn add_dependency(
        &self,
        task_id: &str,
        params: &DependencyParams,
    ) -> ApiResult<EmptyResponse> {
        let body = json!({
            "depends_on": params.dependency.depends_on(),
            "dependency_of": params.dependency.dependency_of(),
        });
        let options = RequestOptions::post()
            .json(&without_nulls(body))?
            .query(reference_query(&params.reference));

        self.client.request(&format!("/task/{}/dependency", task_id), options).await
    }

    /// See <https://developer.clickup.com/reference/deletedependency>
    pub async fn delete_dependency(
        &self,
        task_id: &str,
        params: &DependencyParams,
    ) -> ApiResult<EmptyResponse> {
        let query = json!({
            "depends_on": params.dependency.depends_on(),
            "dependency_of": params.dependency.dependency_of(),
            "custom_task_ids": params.reference.custom_task_ids(),
            "team_id": params.reference.team_id(),
        });

        self.client
            .request(&format!("/task/{}/dependency", task_id), RequestOptions::delete().query(query))
            .await
    }

    /// See <https://developer.clickup.com/reference/addtasklink>
    pub async fn add_task_link(
        &self,
        task_id: &str,
        params: &TaskLinkParams,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .request(
                &format!("/task/{}/link/{}", task_id, params.links_to),
                RequestOptions::post().query(reference_query(&params.reference)),
            )
            .await
    }

    /// See <https://developer.clickup.com/reference/deletetasklink>
    pub async fn delete_task_link(
        &self,
        task_id: &str,
        params: &TaskLinkParams,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .request(
                &format!("/task/{}/link/{}", task_id, params.links_to),
                RequestOptions::delete().query(reference_query(&params.reference)),
            )
            .await
    }
}

pub(crate) fn reference_query(reference: &TaskReference) -> serde_json::Value {
    json!({
        "custom_task_ids": reference.custom_task_ids(),
        "team_id": reference.team_id(),
    })
}

fn without_nulls(mut value: serde_json::Value) -> serde_json::Value {
    if let Some(map) = value.as_object_mut() {
        map.retain(|_, v| !v.is_null());
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{TEST_TOKEN, mock_client};
    use crate::api::types::ApiError;
    use wiremock::matchers::{body_json, header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, ResponseTemplate};

    #[tokio::test]
    async fn get_tasks_sends_filters_and_bracketed_arrays() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path("/list/900/task"))
            .and(header("authorization", TEST_TOKEN))
            .and(query_param("archived", "false"))
            .and(query_param("page", "1"))
            .and(query_param("statuses[]", "in progress"))
            .and(query_param("statuses[]", "done"))
            .and(query_param("assignees[]", "42"))
            .and(query_param_is_missing("order_by"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tasks": [{ "id": "t1", "name": "Write docs", "archived": false }],
                "last_page": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let params = GetTasksParams {
            archived: Some(false),
            page: Some(1),
            statuses: Some(vec!["in progress".into(), "done".into()]),
            assignees: Some(vec![42]),
            ..Default::default()
        };
        let result = TasksApi::new(client).get_tasks("900", &params).await.unwrap();
        assert_eq!(result.tasks.len(), 1);
        assert_eq!(result.tasks[0].name, "Write docs");
        assert!(result.last_page);
    }

    #[tokio::test]
    async fn get_task_with_custom_id_reference() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path("/task/DEV-12"))
            .and(query_param("custom_task_ids", "true"))
            .and(query_param("team_id", "123"))
            .and(query_param("include_subtasks", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "abc", "name": "Fix bug" })))
            .expect(1)
            .mount(&server)
            .await;

        let params = GetTaskParams {
            reference: TaskReference::CustomTaskId { team_id: 123 },
            include_subtasks: Some(true),
        };
        let task = TasksApi::new(client).get_task("DEV-12", &params).await.unwrap();
        assert_eq!(task.id, "abc");
    }

    #[tokio::test]
    async fn create_task_omits_unset_fields() {
        let (server, client) = mock_client().await;
        Mock::given(method("POST"))
            .and(path("/list/900/task"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "name": "New task", "priority": 2, "tags": ["api"] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "t9", "name": "New task" })))
            .expect(1)
            .mount(&server)
            .await;

        let params = CreateTaskParams {
            name: "New task".into(),
            priority: Some(2),
            tags: Some(vec!["api".into()]),
            ..Default::default()
        };
        let task = TasksApi::new(client).create_task("900", &params).await.unwrap();
        assert_eq!(task.id, "t9");
    }

    #[tokio::test]
    async fn update_task_splits_body_and_reference_query() {
        let (server, client) = mock_client().await;
        Mock::given(method("PUT"))
            .and(path("/task/t1"))
            .and(query_param("custom_task_ids", "true"))
            .and(query_param("team_id", "5"))
            .and(body_json(json!({ "name": "Renamed", "assignees": { "add": [1] } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "t1", "name": "Renamed" })))
            .expect(1)
            .mount(&server)
            .await;

        let params = UpdateTaskParams {
            reference: TaskReference::CustomTaskId { team_id: 5 },
            name: Some("Renamed".into()),
            assignees: Some(AssigneeChanges { add: vec![1], rem: vec![] }),
            ..Default::default()
        };
        let task = TasksApi::new(client).update_task("t1", &params).await.unwrap();
        assert_eq!(task.name, "Renamed");
    }

    #[tokio::test]
    async fn delete_task_accepts_empty_body() {
        let (server, client) = mock_client().await;
        Mock::given(method("DELETE"))
            .and(path("/task/t1"))
            .and(query_param_is_missing("custom_task_ids"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let result = TasksApi::new(client).delete_task("t1", TaskReference::TaskId).await;
        assert_eq!(result, Ok(EmptyResponse {}));
    }

    #[tokio::test]
    async fn dependencies_use_body_on_add_and_query_on_delete() {
        let (server, client) = mock_client().await;
        Mock::given(method("POST"))
            .and(path("/task/t1/dependency"))
            .and(body_json(json!({ "depends_on": "t2" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/task/t1/dependency"))
            .and(query_param("dependency_of", "t3"))
            .and(query_param_is_missing("depends_on"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let api = TasksApi::new(client);
        let add = DependencyParams {
            dependency: Dependency::DependsOn("t2".into()),
            reference: TaskReference::TaskId,
        };
        api.add_dependency("t1", &add).await.unwrap();

        let delete = DependencyParams {
            dependency: Dependency::DependencyOf("t3".into()),
            reference: TaskReference::TaskId,
        };
        api.delete_dependency("t1", &delete).await.unwrap();
    }

    #[tokio::test]
    async fn task_links_target_the_linked_task_path() {
        let (server, client) = mock_client().await;
        Mock::given(method("POST"))
            .and(path("/task/t1/link/t2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "task": { "id": "t1" } })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/task/t1/link/t2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(""))
            .expect(1)
            .mount(&server)
            .await;

        let api = TasksApi::new(client);
        let params = TaskLinkParams { links_to: "t2".into(), reference: TaskReference::TaskId };
        api.add_task_link("t1", &params).await.unwrap();
        api.delete_task_link("t1", &params).await.unwrap();
    }

    #[tokio::test]
    async fn errors_propagate_unchanged() {
        let (server, client) = mock_client().await;
        Mock::given(method("GET"))
            .and(path("/task/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "err": "Task not found", "ECODE": "ITEM_013" })))
            .mount(&server)
            .await;

        let err = TasksApi::new(client)
            .get_task("missing", &GetTaskParams::default())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Http { status: 404, message: "Task not found".into() });
    }
}
