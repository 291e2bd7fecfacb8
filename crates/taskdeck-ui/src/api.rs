use async_trait::async_trait;
use gloo::net::http::Request;
use taskdeck_core::client::{
  HttpMethod,
  HttpRequest,
  HttpResponse,
  HttpTransport
};
use taskdeck_core::error::ApiError;

const DEFAULT_BASE_URL: &str = "/api";

pub struct RestTransport {
  base_url: String
}

impl RestTransport {
  pub fn new(
    base_url: impl Into<String>
  ) -> Self {
    Self {
      base_url: base_url.into()
    }
  }
}

impl Default for RestTransport {
  fn default() -> Self {
    Self::new(DEFAULT_BASE_URL)
  }
}

#[async_trait(?Send)]
impl HttpTransport for RestTransport {
  async fn send(
    &self,
    request: HttpRequest
  ) -> Result<HttpResponse, ApiError>
  {
    let url = format!(
      "{}{}",
      self.base_url, request.path
    );
    let builder =
      match request.method {
        | HttpMethod::Get => {
          Request::get(&url)
        }
        | HttpMethod::Post => {
          Request::post(&url)
        }
        | HttpMethod::Patch => {
          Request::patch(&url)
        }
        | HttpMethod::Delete => {
          Request::delete(&url)
        }
      }
      .header(
        "Authorization",
        &format!(
          "Bearer {}",
          request.bearer
        )
      );

    let prepared = match request.body
    {
      | Some(body) => {
        builder.json(&body)
      }
      | None => builder.build()
    }
    .map_err(|error| {
      ApiError::Transport(
        error.to_string()
      )
    })?;

    let response = prepared
      .send()
      .await
      .map_err(|error| {
        ApiError::Transport(
          error.to_string()
        )
      })?;

    let status = response.status();
    let body = response
      .text()
      .await
      .map_err(|error| {
        ApiError::Transport(
          error.to_string()
        )
      })?;

    Ok(HttpResponse {
      status,
      body
    })
  }
}
