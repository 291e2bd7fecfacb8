use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use taskdeck_shared::{
    AccessToken, CreateTaskRequest, PaginatedTasksResponse, Task, UpdateTaskRequest,
};
use tracing::debug;

use crate::error::ApiError;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub bearer: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[async_trait(?Send)]
pub trait HttpTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[async_trait(?Send)]
pub trait TaskApi {
    async fn list(
        &self,
        token: &AccessToken,
        page: u32,
        size: u32,
    ) -> Result<PaginatedTasksResponse, ApiError>;

    async fn get(&self, token: &AccessToken, task_id: &str) -> Result<Task, ApiError>;

    async fn create(
        &self,
        token: &AccessToken,
        data: &CreateTaskRequest,
    ) -> Result<Task, ApiError>;

    async fn update(
        &self,
        token: &AccessToken,
        task_id: &str,
        data: &UpdateTaskRequest,
    ) -> Result<Task, ApiError>;

    async fn delete(&self, token: &AccessToken, task_id: &str) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl<T: TaskApi + ?Sized> TaskApi for std::rc::Rc<T> {
    async fn list(
        &self,
        token: &AccessToken,
        page: u32,
        size: u32,
    ) -> Result<PaginatedTasksResponse, ApiError> {
        (**self).list(token, page, size).await
    }

    async fn get(&self, token: &AccessToken, task_id: &str) -> Result<Task, ApiError> {
        (**self).get(token, task_id).await
    }

    async fn create(
        &self,
        token: &AccessToken,
        data: &CreateTaskRequest,
    ) -> Result<Task, ApiError> {
        (**self).create(token, data).await
    }

    async fn update(
        &self,
        token: &AccessToken,
        task_id: &str,
        data: &UpdateTaskRequest,
    ) -> Result<Task, ApiError> {
        (**self).update(token, task_id, data).await
    }

    async fn delete(&self, token: &AccessToken, task_id: &str) -> Result<(), ApiError> {
        (**self).delete(token, task_id).await
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct TasksClient<T> {
    transport: T,
}

impl<T> TasksClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: HttpTransport> TasksClient<T> {
    async fn dispatch(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(
            method = request.method.as_str(),
            path = %request.path,
            "sending task request"
        );

        let response = self.transport.send(request).await?;

        if !(200..300).contains(&response.status) {
            let message = serde_json::from_str::<ErrorBody>(&response.body)
                .ok()
                .and_then(|body| body.message);
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        Ok(response)
    }

    async fn fetch<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ApiError> {
        let response = self.dispatch(request).await?;
        serde_json::from_str(&response.body).map_err(|error| ApiError::Decode(error.to_string()))
    }

    fn body_of<B: serde::Serialize>(data: &B) -> Result<serde_json::Value, ApiError> {
        serde_json::to_value(data).map_err(|error| ApiError::Decode(error.to_string()))
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport> TaskApi for TasksClient<T> {
    async fn list(
        &self,
        token: &AccessToken,
        page: u32,
        size: u32,
    ) -> Result<PaginatedTasksResponse, ApiError> {
        self.fetch(HttpRequest {
            method: HttpMethod::Get,
            path: format!(
                "/accounts/{}/tasks?page={page}&size={size}",
                token.account_id
            ),
            bearer: token.token.clone(),
            body: None,
        })
        .await
    }

    async fn get(&self, token: &AccessToken, task_id: &str) -> Result<Task, ApiError> {
        self.fetch(HttpRequest {
            method: HttpMethod::Get,
            path: format!("/accounts/{}/tasks/{task_id}", token.account_id),
            bearer: token.token.clone(),
            body: None,
        })
        .await
    }

    async fn create(
        &self,
        token: &AccessToken,
        data: &CreateTaskRequest,
    ) -> Result<Task, ApiError> {
        self.fetch(HttpRequest {
            method: HttpMethod::Post,
            path: format!("/accounts/{}/tasks", token.account_id),
            bearer: token.token.clone(),
            body: Some(Self::body_of(data)?),
        })
        .await
    }

    async fn update(
        &self,
        token: &AccessToken,
        task_id: &str,
        data: &UpdateTaskRequest,
    ) -> Result<Task, ApiError> {
        self.fetch(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("/accounts/{}/tasks/{task_id}", token.account_id),
            bearer: token.token.clone(),
            body: Some(Self::body_of(data)?),
        })
        .await
    }

    async fn delete(&self, token: &AccessToken, task_id: &str) -> Result<(), ApiError> {
        self.dispatch(HttpRequest {
            method: HttpMethod::Delete,
            path: format!("/accounts/{}/tasks/{task_id}", token.account_id),
            bearer: token.token.clone(),
            body: None,
        })
        .await?;
        Ok(())
    }
}
