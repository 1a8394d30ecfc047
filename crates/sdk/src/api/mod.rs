mod attachments;
mod authorization;
mod comments;
mod custom_fields;
mod custom_task_types;
mod folders;
mod goals;
pub mod http;
mod lists;
mod spaces;
mod tags;
mod tasks;
pub mod transport;
pub mod types;

#[cfg(test)]
mod test_support;

pub use types::{
    API_TOKEN_ENV, ApiError, ApiResult, CLICKUP_API_BASE_URL, ClientConfig, ConfigError,
    ConfigOverrides, EmptyResponse, ErrorCode, ErrorInfo, Method, MultipartPayload, RequestBody,
    RequestOptions,
};

pub use attachments::{Attachment, AttachmentsApi, CreateTaskAttachmentParams};
pub use authorization::{
    AccessTokenParams, AccessTokenResponse, AuthorizationApi, AuthorizedUserResponse,
};
pub use comments::{
    Comment, CommentSegment, CommentsApi, CreateChatViewCommentParams, CreateCommentResponse,
    CreateListCommentParams, CreateTaskCommentParams, CreateThreadedCommentParams,
    GetCommentsResponse, UpdateCommentParams,
};
pub use custom_fields::{CustomField, CustomFieldsApi, GetCustomFieldsResponse};
pub use custom_task_types::{
    CustomItem, CustomItemAvatar, CustomTaskTypesApi, GetCustomItemsResponse,
};
pub use folders::{Folder, FoldersApi, GetFoldersResponse};
pub use goals::{
    CreateGoalParams, GetGoalsResponse, Goal, GoalFolder, GoalResponse, GoalsApi, KeyResult,
    UpdateGoalParams,
};
pub use lists::{
    CreateListParams, GetListsResponse, List, ListPriority, ListStatus, ListsApi,
    UpdateListParams,
};
pub use spaces::{
    CreateSpaceParams, DueDatesFeature, GetSpacesResponse, Space, SpaceFeatures, SpacesApi,
    Toggle, UpdateSpaceParams,
};
pub use tags::{GetSpaceTagsResponse, Tag, TagInput, TagsApi};
pub use tasks::{
    AssigneeChanges, CreateTaskParams, CustomFieldValue, Dependency, DependencyParams,
    GetTaskParams, GetTasksParams, GetTasksResponse, Task, TaskLinkParams, TaskPriority,
    TaskSharing, TaskStatus, TaskTag, TasksApi, UpdateTaskParams,
};
