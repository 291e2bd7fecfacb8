use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:          String,
  #[serde(rename = "accountId")]
  pub account_id:  String,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct CreateTaskRequest {
  pub title:       String,
  pub description: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct UpdateTaskRequest {
  pub title:       String,
  pub description: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct AccessToken {
  #[serde(rename = "accountId")]
  pub account_id: String,
  pub token:      String
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct PaginationParams {
  pub page:   u32,
  pub size:   u32,
  #[serde(default)]
  pub offset: u64
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct PaginatedTasksResponse {
  pub items: Vec<Task>,
  pub pagination_params:
    PaginationParams,
  pub total_count: u64,
  pub total_pages: u32
}
