mod api;
mod types;

pub use api::{
    API_TOKEN_ENV, AccessTokenParams, AccessTokenResponse, ApiError, ApiResult, AssigneeChanges,
    Attachment, AttachmentsApi, AuthorizationApi, AuthorizedUserResponse, CLICKUP_API_BASE_URL,
    ClientConfig, Comment, CommentSegment, CommentsApi, ConfigError, ConfigOverrides,
    CreateChatViewCommentParams, CreateCommentResponse, CreateGoalParams, CreateListCommentParams,
    CreateListParams, CreateSpaceParams, CreateTaskAttachmentParams, CreateTaskCommentParams,
    CreateTaskParams, CreateThreadedCommentParams, CustomField, CustomFieldValue, CustomFieldsApi,
    CustomItem, CustomItemAvatar, CustomTaskTypesApi, Dependency, DependencyParams,
    DueDatesFeature, EmptyResponse, ErrorCode, ErrorInfo, Folder, FoldersApi,
    GetCommentsResponse, GetCustomFieldsResponse, GetCustomItemsResponse, GetFoldersResponse,
    GetGoalsResponse, GetListsResponse, GetSpaceTagsResponse, GetSpacesResponse, GetTaskParams,
    GetTasksParams, GetTasksResponse, Goal, GoalFolder, GoalResponse, GoalsApi, KeyResult, List,
    ListPriority, ListStatus, ListsApi, Method, MultipartPayload, RequestBody, RequestOptions,
    Space, SpaceFeatures, SpacesApi, Tag, TagInput, TagsApi, Task, TaskLinkParams, TaskPriority,
    TaskSharing, TaskStatus, TaskTag, TasksApi, Toggle, UpdateCommentParams, UpdateGoalParams,
    UpdateListParams, UpdateSpaceParams, UpdateTaskParams,
};
pub use api::http::HttpClient;
pub use api::transport::{
    PreparedBody, PreparedRequest, RawResponse, ReqwestTransport, Transport, TransportError,
};
pub use api::types::{MultipartPart, PartContent};
pub use types::{ContainerRef, Pagination, Status, TaskReference, User};

use std::sync::Arc;

/// Entry point bundling one facade per ClickUp resource, all sharing a single
/// [`HttpClient`].
#[derive(Debug, Clone)]
pub struct ClickUp {
    pub attachments: AttachmentsApi,
    pub authorization: AuthorizationApi,
    pub comments: CommentsApi,
    pub custom_fields: CustomFieldsApi,
    pub custom_task_types: CustomTaskTypesApi,
    pub folders: FoldersApi,
    pub goals: GoalsApi,
    pub lists: ListsApi,
    pub spaces: SpacesApi,
    pub tags: TagsApi,
    pub tasks: TasksApi,
    client: Arc<HttpClient>,
}

impl ClickUp {
    /// Create a client talking to ClickUp over `reqwest`.
    pub fn new(config: ClientConfig) -> Self {
        Self::from_client(HttpClient::new(config))
    }

    /// Create a client that sends requests through a custom [`Transport`].
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self::from_client(HttpClient::with_transport(config, transport))
    }

    /// A new client whose configuration is this one's with `overrides`
    /// shallow-merged on top. `self` is left untouched.
    pub fn with_config(&self, overrides: ConfigOverrides) -> Self {
        let config = self.client.config().merged(overrides);
        Self::from_client(self.client.reconfigured(config))
    }

    pub fn config(&self) -> &ClientConfig {
        self.client.config()
    }

    fn from_client(client: HttpClient) -> Self {
        let client = Arc::new(client);

        Self {
            attachments: AttachmentsApi::new(Arc::clone(&client)),
            authorization: AuthorizationApi::new(Arc::clone(&client)),
            comments: CommentsApi::new(Arc::clone(&client)),
            custom_fields: CustomFieldsApi::new(Arc::clone(&client)),
            custom_task_types: CustomTaskTypesApi::new(Arc::clone(&client)),
            folders: FoldersApi::new(Arc::clone(&client)),
            goals: GoalsApi::new(Arc::clone(&client)),
            lists: ListsApi::new(Arc::clone(&client)),
            spaces: SpacesApi::new(Arc::clone(&client)),
            tags: TagsApi::new(Arc::clone(&client)),
            tasks: TasksApi::new(Arc::clone(&client)),
            client,
        }
    }
}
