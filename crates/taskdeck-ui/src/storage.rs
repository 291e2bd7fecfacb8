use gloo::storage::{
  LocalStorage,
  Storage
};
use taskdeck_core::collab::CredentialSource;
use taskdeck_shared::AccessToken;

pub const ACCESS_TOKEN_STORAGE_KEY:
  &str = "access_token";

pub struct StoredCredentials;

impl CredentialSource
  for StoredCredentials
{
  fn current_access_token(
    &self
  ) -> Option<AccessToken> {
    match LocalStorage::get::<
      AccessToken
    >(ACCESS_TOKEN_STORAGE_KEY)
    {
      | Ok(token) => Some(token),
      | Err(error) => {
        tracing::debug!(
          %error,
          "no usable access token \
           in local storage"
        );
        None
      }
    }
  }
}
