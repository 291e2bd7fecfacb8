use std::cell::{
  Cell,
  RefCell
};

use taskdeck_shared::{
  CreateTaskRequest,
  Task,
  UpdateTaskRequest
};
use tracing::{
  debug,
  warn
};

use crate::client::{
  DEFAULT_PAGE_SIZE,
  TaskApi
};
use crate::collab::{
  Confirmer,
  CredentialSource,
  Notifier
};
use crate::error::DashboardError;
use crate::state::{
  DashboardState,
  FormField,
  Mode
};

const DELETE_PROMPT: &str =
  "Are you sure you want to delete \
   this task?";

type ChangeListener =
  Box<dyn Fn(DashboardState)>;

pub struct Dashboard<A, C, N, K> {
  api:         A,
  credentials: C,
  notifier:    N,
  confirmer:   K,
  state:
    RefCell<DashboardState>,
  // Generation token for list
  // loads. A response carrying an
  // old generation is dropped
  // instead of clobbering a newer
  // page.
  generation:  Cell<u64>,
  listener:
    RefCell<Option<ChangeListener>>
}

impl<A, C, N, K> Dashboard<A, C, N, K>
where
  A: TaskApi,
  C: CredentialSource,
  N: Notifier,
  K: Confirmer
{
  pub fn new(
    api: A,
    credentials: C,
    notifier: N,
    confirmer: K
  ) -> Self {
    Self {
      api,
      credentials,
      notifier,
      confirmer,
      state: RefCell::new(
        DashboardState::default()
      ),
      generation: Cell::new(0),
      listener: RefCell::new(None)
    }
  }

  pub fn state(
    &self
  ) -> DashboardState {
    self.state.borrow().clone()
  }

  pub fn set_change_listener(
    &self,
    listener: impl Fn(DashboardState)
    + 'static
  ) {
    *self.listener.borrow_mut() =
      Some(Box::new(listener));
  }

  fn commit(
    &self,
    apply: impl FnOnce(
      &mut DashboardState
    )
  ) {
    let snapshot = {
      let mut state =
        self.state.borrow_mut();
      apply(&mut state);
      state.clone()
    };
    if let Some(listener) =
      self.listener.borrow().as_ref()
    {
      listener(snapshot);
    }
  }

  pub fn open_create(&self) {
    self.commit(|state| {
      state.open_create();
    });
  }

  pub fn start_edit(&self, task: Task) {
    self.commit(|state| {
      state.start_edit(task);
    });
  }

  pub fn cancel_form(&self) {
    self.commit(|state| {
      state.cancel_form();
    });
  }

  pub fn update_field(
    &self,
    field: FormField,
    value: String
  ) {
    self.commit(|state| {
      state.update_field(field, value);
    });
  }

  pub async fn load_page(
    &self,
    page: u32
  ) {
    let Some(token) =
      self.credentials
        .current_access_token()
    else {
      warn!(
        "list load blocked: no \
         access token"
      );
      self.notifier.error(
        &DashboardError::MissingCredential
          .to_string()
      );
      return;
    };

    let generation = self
      .generation
      .get()
      .wrapping_add(1);
    self.generation.set(generation);
    self.commit(|state| {
      state.loading = true;
    });

    debug!(page, "loading task page");
    let result = self
      .api
      .list(
        &token,
        page,
        DEFAULT_PAGE_SIZE
      )
      .await;

    if self.generation.get()
      != generation
    {
      debug!(
        generation,
        "dropping stale list response"
      );
      return;
    }

    match result {
      | Ok(response) => {
        self.commit(|state| {
          state.loading = false;
          state
            .apply_page(page, response);
        });
      }
      | Err(error) => {
        warn!(
          %error,
          page,
          "task page load failed"
        );
        self.notifier.error(
          &error.user_message(
            "Failed to load tasks"
          )
        );
        self.commit(|state| {
          state.loading = false;
        });
      }
    }
  }

  pub async fn refresh(&self) {
    let page = self
      .state
      .borrow()
      .current_page;
    self.load_page(page).await;
  }

  pub async fn change_page(
    &self,
    target: u32
  ) {
    let in_range = self
      .state
      .borrow()
      .page_in_range(target);
    if !in_range {
      debug!(
        target,
        "ignoring out-of-range page \
         change"
      );
      return;
    }
    self.load_page(target).await;
  }

  pub async fn submit(&self) {
    let (mode, form) = {
      let state = self.state.borrow();
      (
        state.mode.clone(),
        state.form.clone()
      )
    };

    if matches!(mode, Mode::List) {
      warn!(
        "submit ignored outside a \
         form"
      );
      return;
    }

    if let Err(error) =
      validate_required(
        &form.title,
        &form.description
      )
    {
      self
        .notifier
        .error(&error.to_string());
      return;
    }

    let Some(token) =
      self.credentials
        .current_access_token()
    else {
      self.notifier.error(
        &DashboardError::MissingCredential
          .to_string()
      );
      return;
    };

    match mode {
      | Mode::List => {}
      | Mode::Creating => {
        self.commit(|state| {
          state.loading = true;
        });
        let data = CreateTaskRequest {
          title:       form.title,
          description:
            form.description
        };
        match self
          .api
          .create(&token, &data)
          .await
        {
          | Ok(_) => {
            self
              .finish_mutation(
                "Task created \
                 successfully"
              )
              .await;
          }
          | Err(error) => {
            warn!(
              %error,
              "task create failed"
            );
            self.notifier.error(
              &error.user_message(
                "Failed to create \
                 task"
              )
            );
            self.commit(|state| {
              state.loading = false;
            });
          }
        }
      }
      | Mode::Editing(task) => {
        self.commit(|state| {
          state.loading = true;
        });
        let data = UpdateTaskRequest {
          title:       form.title,
          description:
            form.description
        };
        match self
          .api
          .update(
            &token, &task.id, &data
          )
          .await
        {
          | Ok(_) => {
            self
              .finish_mutation(
                "Task updated \
                 successfully"
              )
              .await;
          }
          | Err(error) => {
            warn!(
              %error,
              task_id = %task.id,
              "task update failed"
            );
            self.notifier.error(
              &error.user_message(
                "Failed to update \
                 task"
              )
            );
            self.commit(|state| {
              state.loading = false;
            });
          }
        }
      }
    }
  }

  pub async fn delete_task(
    &self,
    task_id: &str
  ) {
    if !self
      .confirmer
      .confirm(DELETE_PROMPT)
    {
      debug!(
        %task_id,
        "task deletion canceled"
      );
      return;
    }

    let Some(token) =
      self.credentials
        .current_access_token()
    else {
      self.notifier.error(
        &DashboardError::MissingCredential
          .to_string()
      );
      return;
    };

    self.commit(|state| {
      state.loading = true;
    });

    match self
      .api
      .delete(&token, task_id)
      .await
    {
      | Ok(()) => {
        self
          .finish_mutation(
            "Task deleted \
             successfully"
          )
          .await;
      }
      | Err(error) => {
        warn!(
          %error,
          %task_id,
          "task delete failed"
        );
        self.notifier.error(
          &error.user_message(
            "Failed to delete task"
          )
        );
        self.commit(|state| {
          state.loading = false;
        });
      }
    }
  }

  // Mutations reload the current
  // page instead of guessing where
  // the touched task landed. A
  // delete that empties the last
  // page therefore stays on that
  // page.
  async fn finish_mutation(
    &self,
    message: &str
  ) {
    self.notifier.success(message);
    self.commit(|state| {
      state.loading = false;
      state.cancel_form();
    });
    self.refresh().await;
  }
}

fn validate_required(
  title: &str,
  description: &str
) -> Result<(), DashboardError> {
  if title.trim().is_empty() {
    return Err(
      DashboardError::Validation(
        "Title is required"
          .to_string()
      )
    );
  }
  if description.trim().is_empty() {
    return Err(
      DashboardError::Validation(
        "Description is required"
          .to_string()
      )
    );
  }
  Ok(())
}
