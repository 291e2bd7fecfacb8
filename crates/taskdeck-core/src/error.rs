use thiserror::Error;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum ApiError {
  #[error("request failed: {0}")]
  Transport(String),

  #[error(
    "server returned status {status}"
  )]
  Status {
    status:  u16,
    message: Option<String>
  },

  #[error(
    "failed decoding response: {0}"
  )]
  Decode(String)
}

impl ApiError {
  pub fn server_message(
    &self
  ) -> Option<&str> {
    match self {
      | Self::Status {
        message, ..
      } => message.as_deref(),
      | _ => None
    }
  }

  pub fn user_message(
    &self,
    fallback: &str
  ) -> String {
    self
      .server_message()
      .unwrap_or(fallback)
      .to_string()
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum DashboardError {
  #[error("No access token found")]
  MissingCredential,

  #[error("{0}")]
  Validation(String),

  #[error(transparent)]
  Api(#[from] ApiError)
}
