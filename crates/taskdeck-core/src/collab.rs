use std::rc::Rc;

use taskdeck_shared::AccessToken;

pub trait CredentialSource {
  fn current_access_token(
    &self
  ) -> Option<AccessToken>;
}

pub trait Notifier {
  fn success(&self, message: &str);
  fn error(&self, message: &str);
}

pub trait Confirmer {
  fn confirm(&self, prompt: &str)
  -> bool;
}

impl<T: CredentialSource + ?Sized>
  CredentialSource for Rc<T>
{
  fn current_access_token(
    &self
  ) -> Option<AccessToken> {
    (**self).current_access_token()
  }
}

impl<T: Notifier + ?Sized> Notifier
  for Rc<T>
{
  fn success(&self, message: &str) {
    (**self).success(message);
  }

  fn error(&self, message: &str) {
    (**self).error(message);
  }
}

impl<T: Confirmer + ?Sized> Confirmer
  for Rc<T>
{
  fn confirm(
    &self,
    prompt: &str
  ) -> bool {
    (**self).confirm(prompt)
  }
}
