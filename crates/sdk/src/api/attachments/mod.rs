use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::api::{
    http::HttpClient,
    tasks::reference_query,
    types::{ApiResult, MultipartPayload, RequestBody, RequestOptions},
};
use crate::types::TaskReference;

/// Multipart field name ClickUp reads the upload from.
const ATTACHMENT_FIELD: &str = "attachment";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub id: String,
    pub version: Option<String>,
    pub date: Option<u64>,
    pub title: String,
    pub extension: Option<String>,
    pub thumbnail_small: Option<String>,
    pub thumbnail_large: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskAttachmentParams {
    pub file: Vec<u8>,
    pub file_name: String,
    pub mime_type: Option<String>,
    pub reference: TaskReference,
}

#[derive(Debug, Clone)]
pub struct AttachmentsApi {
    client: Arc<HttpClient>,
}

impl AttachmentsApi {
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Uploads a file to a task as `multipart/form-data`. Whitespace in the
    /// file name is replaced with `-`.
    ///
    /// See <https://developer.clickup.com/reference/createtaskattachment>
    pub async fn create_task_attachment(
        &self,
        task_id: &str,
        params: &CreateTaskAttachmentParams,
    ) -> ApiResult<Attachment> {
        let file_name = sanitize_file_name(&params.file_name);
        debug!(task_id, file_name = %file_name, size = params.file.len(), "uploading task attachment");

        let payload = MultipartPayload::new().file(
            ATTACHMENT_FIELD,
            params.file.clone(),
            file_name,
            params.mime_type.clone(),
        );
        let options = RequestOptions::post()
            .body(RequestBody::Multipart(payload))
            .query(reference_query(&params.reference));

        self.client.request(&format!("/task/{}/attachment", task_id), options).await
    }
}

fn sanitize_file_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("-")
}
