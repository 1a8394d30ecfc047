use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::api::{
    http::HttpClient,
    tasks::reference_query,
    types::{ApiResult, EmptyResponse, RequestOptions},
};
use crate::types::{Pagination, TaskReference, User, pagination_parts};

/// One rich-text fragment of a comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentSegment {
    pub text: String,
    pub attributes: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: String,
    pub comment: Vec<CommentSegment>,
    pub comment_text: String,
    pub user: Option<User>,
    pub resolved: bool,
    pub assignee: Option<User>,
    pub assigned_by: Option<User>,
    pub reactions: Vec<Value>,
    pub reply_count: Option<Value>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetCommentsResponse {
    pub comments: Vec<Comment>,
}

/// Returned by every comment create endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateCommentResponse {
    pub id: Value,
    pub hist_id: Option<String>,
    pub date: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTaskCommentParams {
    pub comment_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_assignee: Option<String>,
    pub notify_all: bool,
    #[serde(skip)]
    pub reference: TaskReference,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateChatViewCommentParams {
    pub comment_text: String,
    pub notify_all: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateListCommentParams {
    pub comment_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<u64>,
    pub notify_all: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateCommentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_assignee: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}

/// Reply posted under an existing comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateThreadedCommentParams {
    pub comment_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_assignee: Option<String>,
    pub notify_all: bool,
}

#[derive(Debug, Clone)]
pub struct CommentsApi {
    client: Arc<HttpClient>,
}

impl CommentsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Newest 25 comments on a task. Pass the oldest comment seen as
    /// `pagination` to page further back.
    ///
    /// See <https://developer.clickup.com/reference/gettaskcomments>
    pub async fn get_task_comments(
        &self,
        task_id: &str,
        reference: TaskReference,
        pagination: Option<&Pagination>,
    ) -> ApiResult<GetCommentsResponse> {
        let (start, start_id) = pagination_parts(pagination);
        let query = json!({
            "custom_task_ids": reference.custom_task_ids(),
            "team_id": reference.team_id(),
            "start": start,
            "start_id": start_id,
        });

        self.client
            .request(&format!("/task/{}/comment", task_id), RequestOptions::get().query(query))
            .await
    }

    /// See <https://developer.clickup.com/reference/createtaskcomment>
    pub async fn create_task_comment(
        &self,
        task_id: &str,
        params: &CreateTaskCommentParams,
    ) -> ApiResult<CreateCommentResponse> {
        let options = RequestOptions::post()
            .json(params)?
            .query(reference_query(&params.reference));

        self.client.request(&format!("/task/{}/comment", task_id), options).await
    }

    /// See <https://developer.clickup.com/reference/getchatviewcomments>
    pub async fn get_chat_view_comments(
        &self,
        view_id: &str,
        pagination: Option<&Pagination>,
    ) -> ApiResult<GetCommentsResponse> {
        let (start, start_id) = pagination_parts(pagination);
        self.client
            .request(
                &format!("/view/{}/comment", view_id),
                RequestOptions::get().query(json!({ "start": start, "start_id": start_id })),
            )
            .await
    }

    /// Post a comment to a chat view
    ///
    /// # Arguments
    ///
    /// * `view_id` - The chat view to comment on
    /// * `params` - Comment text and whether to notify everyone
    pub async fn create_chat_view_comment(
        &self,
        view_id: &str,
        params: &CreateChatViewCommentParams,
    ) -> ApiResult<CreateCommentResponse> {
        self.client
            .request(&format!("/view/{}/comment", view_id), RequestOptions::post().json(params)?)
            .await
    }

    /// See <https://developer.clickup.com/reference/getlistcomments>
    pub async fn get_list_comments(
        &self,
        list_id: &str,
        pagination: Option<&Pagination>,
    ) -> ApiResult<GetCommentsResponse> {
        let (start, start_id) = pagination_parts(pagination);
        self.client
            .request(
                &format!("/list/{}/comment", list_id),
                RequestOptions::get().query(json!({ "start": start, "start_id": start_id })),
            )
            .await
    }

    /// Post a comment to a list
    ///
    /// # Arguments
    ///
    /// * `list_id` - The list to comment on
    /// * `params` - Comment text, optional assignee and notification flag
    pub async fn create_list_comment(
        &self,
        list_id: &str,
        params: &CreateListCommentParams,
    ) -> ApiResult<CreateCommentResponse> {
        self.client
            .request(&format!("/list/{}/comment", list_id), RequestOptions::post().json(params)?)
            .await
    }

    /// Edit a comment's text, assignment or resolved state
    ///
    /// # Arguments
    ///
    /// * `comment_id` - The comment to edit
    /// * `params` - Only the fields that are set are sent
    pub async fn update_comment(
        &self,
        comment_id: &str,
        params: &UpdateCommentParams,
    ) -> ApiResult<EmptyResponse> {
        self.client
            .request(&format!("/comment/{}", comment_id), RequestOptions::put().json(params)?)
            .await
    }

    /// Delete a comment
    ///
    /// # Arguments
    ///
    /// * `comment_id` - The comment to delete
    pub async fn delete_comment(&self, comment_id: &str) -> ApiResult<EmptyResponse> {
        self.client.request(&format!("/comment/{}", comment_id), RequestOptions::delete()).await
    }

    /// Replies under `comment_id`. The parent comment is not included.
    ///
    /// See <https://developer.clickup.com/reference/getthreadedcomments>
    pub async fn get_threaded_comments(&self, comment_id: &str) -> ApiResult<GetCommentsResponse> {
        self.client
            .request(&format!("/comment/{}/reply", comment_id), RequestOptions::get())
            .await
    }

    /// Reply to a comment
    ///
    /// # Arguments
    ///
    /// * `comment_id` - The parent comment
    /// * `params` - Reply text, optional assignee or group assignee, notification flag
    pub async fn create_threaded_comment(
        &self,
        comment_id: &str,
        params: &CreateThreadedCommentParams,
    ) -> ApiResult<CreateCommentResponse> {
        self.client
            .request(&format!("/comment/{}/reply", comment_id), RequestOptions::post().json(params)?)
            .await
    }
}
