use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use taskdeck_core::client::TasksClient;
use taskdeck_core::collab::{
  Confirmer,
  Notifier
};
use taskdeck_core::dashboard::Dashboard;
use taskdeck_core::state::{
  DashboardState,
  FormField
};
use taskdeck_shared::Task;
use yew::{
  Callback,
  Html,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_memo,
  use_mut_ref,
  use_reducer,
  use_state
};

use crate::api::RestTransport;
use crate::components::{
  PaginationControls,
  TaskForm,
  TaskList,
  Toast,
  ToastHost,
  ToastKind
};
use crate::storage::StoredCredentials;

const TOAST_DISMISS_MS: u32 = 4_000;

pub struct ToastNotifier {
  push: Callback<(ToastKind, String)>
}

impl Notifier for ToastNotifier {
  fn success(&self, message: &str) {
    self.push.emit((
      ToastKind::Success,
      message.to_string()
    ));
  }

  fn error(&self, message: &str) {
    self.push.emit((
      ToastKind::Error,
      message.to_string()
    ));
  }
}

pub struct WindowConfirmer;

impl Confirmer for WindowConfirmer {
  fn confirm(
    &self,
    prompt: &str
  ) -> bool {
    web_sys::window()
      .and_then(|window| {
        window
          .confirm_with_message(prompt)
          .ok()
      })
      .unwrap_or(false)
  }
}

type AppDashboard = Dashboard<
  TasksClient<RestTransport>,
  StoredCredentials,
  ToastNotifier,
  WindowConfirmer
>;

#[derive(Default, PartialEq)]
struct ToastStack {
  toasts: Vec<Toast>
}

enum ToastAction {
  Push(Toast),
  Dismiss(u64)
}

impl Reducible for ToastStack {
  type Action = ToastAction;

  fn reduce(
    self: Rc<Self>,
    action: ToastAction
  ) -> Rc<Self> {
    let mut toasts =
      self.toasts.clone();
    match action {
      | ToastAction::Push(toast) => {
        toasts.push(toast);
      }
      | ToastAction::Dismiss(id) => {
        toasts.retain(|toast| {
          toast.id != id
        });
      }
    }
    Rc::new(Self { toasts })
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let snapshot =
    use_state(DashboardState::default);
  let toasts =
    use_reducer(ToastStack::default);
  let toast_seq =
    use_mut_ref(|| 0_u64);

  let push_toast = {
    let toasts = toasts.clone();
    let toast_seq = toast_seq.clone();
    Callback::from(
      move |(kind, message): (
        ToastKind,
        String
      )| {
        let id = {
          let mut seq =
            toast_seq.borrow_mut();
          *seq += 1;
          *seq
        };
        toasts.dispatch(
          ToastAction::Push(Toast {
            id,
            kind,
            message
          })
        );

        let toasts = toasts.clone();
        wasm_bindgen_futures::spawn_local(async move {
                    TimeoutFuture::new(TOAST_DISMISS_MS).await;
                    toasts.dispatch(ToastAction::Dismiss(id));
                });
      }
    )
  };

  let dashboard: Rc<AppDashboard> = {
    let snapshot = snapshot.clone();
    use_memo((), move |_| {
      let dashboard = Dashboard::new(
        TasksClient::new(
          RestTransport::default()
        ),
        StoredCredentials,
        ToastNotifier {
          push: push_toast
        },
        WindowConfirmer
      );
      dashboard.set_change_listener(
        move |state| {
          snapshot.set(state);
        }
      );
      dashboard
    })
  };

  {
    let dashboard = dashboard.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(async move {
                dashboard.load_page(1).await;
            });
      || ()
    });
  }

  let on_open_create = {
    let dashboard = dashboard.clone();
    Callback::from(move |_| {
      dashboard.open_create();
    })
  };

  let on_edit = {
    let dashboard = dashboard.clone();
    Callback::from(
      move |task: Task| {
        dashboard.start_edit(task);
      }
    )
  };

  let on_cancel = {
    let dashboard = dashboard.clone();
    Callback::from(move |()| {
      dashboard.cancel_form();
    })
  };

  let on_field = {
    let dashboard = dashboard.clone();
    Callback::from(
      move |(field, value): (
        FormField,
        String
      )| {
        dashboard
          .update_field(field, value);
      }
    )
  };

  let on_submit = {
    let dashboard = dashboard.clone();
    Callback::from(move |()| {
      let dashboard =
        dashboard.clone();
      wasm_bindgen_futures::spawn_local(async move {
                dashboard.submit().await;
            });
    })
  };

  let on_delete = {
    let dashboard = dashboard.clone();
    Callback::from(
      move |task_id: String| {
        let dashboard =
          dashboard.clone();
        wasm_bindgen_futures::spawn_local(async move {
                    dashboard.delete_task(&task_id).await;
                });
      }
    )
  };

  let on_page_change = {
    let dashboard = dashboard.clone();
    Callback::from(move |page: u32| {
      let dashboard =
        dashboard.clone();
      wasm_bindgen_futures::spawn_local(async move {
                dashboard.change_page(page).await;
            });
    })
  };

  let on_toast_dismiss = {
    let toasts = toasts.clone();
    Callback::from(move |id: u64| {
      toasts.dispatch(
        ToastAction::Dismiss(id)
      );
    })
  };

  let state = (*snapshot).clone();

  html! {
      <div class="dashboard">
          <div class="dashboard-header">
              <h1>{ "Task Management" }</h1>
              {
                  if state.form_open() {
                      html! {}
                  } else {
                      html! {
                          <button
                              class="btn primary"
                              disabled={state.loading}
                              onclick={on_open_create}
                          >
                              { "Create New Task" }
                          </button>
                      }
                  }
              }
          </div>

          {
              if state.form_open() {
                  html! {
                      <TaskForm
                          editing={state.editing().is_some()}
                          form={state.form.clone()}
                          loading={state.loading}
                          on_field={on_field}
                          on_submit={on_submit}
                          on_cancel={on_cancel}
                      />
                  }
              } else {
                  html! {}
              }
          }

          <div class="panel list">
              <div class="header">
                  { format!("Tasks ({})", state.total_count) }
              </div>
              <TaskList
                  tasks={state.tasks.clone()}
                  loading={state.loading}
                  on_edit={on_edit}
                  on_delete={on_delete}
              />
              {
                  if state.has_pagination() {
                      html! {
                          <PaginationControls
                              current_page={state.current_page}
                              total_pages={state.total_pages}
                              loading={state.loading}
                              on_change={on_page_change}
                          />
                      }
                  } else {
                      html! {}
                  }
              }
          </div>

          <ToastHost
              toasts={toasts.toasts.clone()}
              on_dismiss={on_toast_dismiss}
          />
      </div>
  }
}
