use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use taskdeck_core::client::TaskApi;
use taskdeck_core::collab::{Confirmer, CredentialSource, Notifier};
use taskdeck_core::dashboard::Dashboard;
use taskdeck_core::error::ApiError;
use taskdeck_core::state::{FormField, Mode};
use taskdeck_shared::{
    AccessToken, CreateTaskRequest, PaginatedTasksResponse, PaginationParams, Task,
    UpdateTaskRequest,
};

#[derive(Default)]
struct FakeApi {
    list_calls: RefCell<Vec<u32>>,
    list_results: RefCell<VecDeque<Result<PaginatedTasksResponse, ApiError>>>,
    create_calls: RefCell<Vec<CreateTaskRequest>>,
    create_results: RefCell<VecDeque<Result<Task, ApiError>>>,
    update_calls: RefCell<Vec<(String, UpdateTaskRequest)>>,
    update_results: RefCell<VecDeque<Result<Task, ApiError>>>,
    delete_calls: RefCell<Vec<String>>,
    delete_results: RefCell<VecDeque<Result<(), ApiError>>>,
    yield_before_list_reply: Cell<bool>,
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn list(
        &self,
        _token: &AccessToken,
        page: u32,
        _size: u32,
    ) -> Result<PaginatedTasksResponse, ApiError> {
        self.list_calls.borrow_mut().push(page);
        if self.yield_before_list_reply.get() {
            tokio::task::yield_now().await;
        }
        self.list_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(page_of(Vec::new(), page, 1, 0)))
    }

    async fn get(&self, _token: &AccessToken, task_id: &str) -> Result<Task, ApiError> {
        Ok(task(task_id))
    }

    async fn create(
        &self,
        _token: &AccessToken,
        data: &CreateTaskRequest,
    ) -> Result<Task, ApiError> {
        self.create_calls.borrow_mut().push(data.clone());
        self.create_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(task("created")))
    }

    async fn update(
        &self,
        _token: &AccessToken,
        task_id: &str,
        data: &UpdateTaskRequest,
    ) -> Result<Task, ApiError> {
        self.update_calls
            .borrow_mut()
            .push((task_id.to_string(), data.clone()));
        self.update_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(task(task_id)))
    }

    async fn delete(&self, _token: &AccessToken, task_id: &str) -> Result<(), ApiError> {
        self.delete_calls.borrow_mut().push(task_id.to_string());
        self.delete_results
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

struct FakeCredentials {
    token: Option<AccessToken>,
}

impl CredentialSource for FakeCredentials {
    fn current_access_token(&self) -> Option<AccessToken> {
        self.token.clone()
    }
}

#[derive(Default)]
struct FakeNotifier {
    successes: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl Notifier for FakeNotifier {
    fn success(&self, message: &str) {
        self.successes.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}

struct FakeConfirmer {
    answer: Cell<bool>,
    prompts: RefCell<Vec<String>>,
}

impl Default for FakeConfirmer {
    fn default() -> Self {
        Self {
            answer: Cell::new(true),
            prompts: RefCell::new(Vec::new()),
        }
    }
}

impl Confirmer for FakeConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer.get()
    }
}

type TestDashboard =
    Dashboard<Rc<FakeApi>, Rc<FakeCredentials>, Rc<FakeNotifier>, Rc<FakeConfirmer>>;

struct Harness {
    api: Rc<FakeApi>,
    notifier: Rc<FakeNotifier>,
    confirmer: Rc<FakeConfirmer>,
    dashboard: TestDashboard,
}

fn harness_with(token: Option<AccessToken>) -> Harness {
    let api = Rc::new(FakeApi::default());
    let credentials = Rc::new(FakeCredentials { token });
    let notifier = Rc::new(FakeNotifier::default());
    let confirmer = Rc::new(FakeConfirmer::default());
    let dashboard = Dashboard::new(
        api.clone(),
        credentials,
        notifier.clone(),
        confirmer.clone(),
    );
    Harness {
        api,
        notifier,
        confirmer,
        dashboard,
    }
}

fn harness() -> Harness {
    harness_with(Some(AccessToken {
        account_id: "acc-1".to_string(),
        token: "opaque".to_string(),
    }))
}

fn task(id: &str) -> Task {
    Task {
        id: id.to_string(),
        account_id: "acc-1".to_string(),
        title: format!("task {id}"),
        description: "details".to_string(),
    }
}

fn page_of(
    items: Vec<Task>,
    page: u32,
    total_pages: u32,
    total_count: u64,
) -> PaginatedTasksResponse {
    PaginatedTasksResponse {
        items,
        pagination_params: PaginationParams {
            page,
            size: 10,
            offset: u64::from((page - 1) * 10),
        },
        total_count,
        total_pages,
    }
}

fn queue_list(harness: &Harness, result: Result<PaginatedTasksResponse, ApiError>) {
    harness.api.list_results.borrow_mut().push_back(result);
}

#[tokio::test]
async fn load_without_credential_issues_no_request() {
    let h = harness_with(None);

    h.dashboard.load_page(1).await;

    assert!(h.api.list_calls.borrow().is_empty());
    assert_eq!(
        h.notifier.errors.borrow().as_slice(),
        ["No access token found"]
    );
    assert!(!h.dashboard.state().loading);
}

#[tokio::test]
async fn load_replaces_page_state() {
    let h = harness();
    queue_list(&h, Ok(page_of(vec![task("t-1"), task("t-2")], 1, 3, 23)));

    h.dashboard.load_page(1).await;

    let state = h.dashboard.state();
    assert_eq!(state.tasks.len(), 2);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 3);
    assert_eq!(state.total_count, 23);
    assert!(!state.loading);
    assert!(h.notifier.errors.borrow().is_empty());
}

#[tokio::test]
async fn failed_load_keeps_previous_page() {
    let h = harness();
    queue_list(&h, Ok(page_of(vec![task("t-1")], 1, 3, 23)));
    h.dashboard.load_page(1).await;

    queue_list(
        &h,
        Err(ApiError::Status {
            status: 500,
            message: Some("backend down".to_string()),
        }),
    );
    h.dashboard.load_page(2).await;

    let state = h.dashboard.state();
    assert_eq!(state.current_page, 1);
    assert_eq!(state.tasks.len(), 1);
    assert_eq!(state.total_pages, 3);
    assert!(!state.loading);
    assert_eq!(h.notifier.errors.borrow().as_slice(), ["backend down"]);
}

#[tokio::test]
async fn failed_load_without_server_message_uses_fallback() {
    let h = harness();
    queue_list(&h, Err(ApiError::Transport("connection reset".to_string())));

    h.dashboard.load_page(1).await;

    assert_eq!(
        h.notifier.errors.borrow().as_slice(),
        ["Failed to load tasks"]
    );
}

#[tokio::test]
async fn out_of_range_page_change_is_a_noop() {
    let h = harness();
    queue_list(&h, Ok(page_of(vec![task("t-1")], 1, 3, 23)));
    h.dashboard.load_page(1).await;
    let before = h.dashboard.state();

    h.dashboard.change_page(0).await;
    h.dashboard.change_page(4).await;

    assert_eq!(h.api.list_calls.borrow().as_slice(), [1]);
    assert_eq!(h.dashboard.state(), before);
}

#[tokio::test]
async fn in_range_page_change_loads_target() {
    let h = harness();
    queue_list(&h, Ok(page_of(vec![task("t-1")], 1, 3, 23)));
    h.dashboard.load_page(1).await;
    queue_list(&h, Ok(page_of(vec![task("t-11")], 2, 3, 23)));

    h.dashboard.change_page(2).await;

    assert_eq!(h.api.list_calls.borrow().as_slice(), [1, 2]);
    assert_eq!(h.dashboard.state().current_page, 2);
}

#[tokio::test]
async fn open_create_then_cancel_resets_form() {
    let h = harness();

    h.dashboard.open_create();
    h.dashboard
        .update_field(FormField::Title, "half typed".to_string());
    h.dashboard.cancel_form();

    let state = h.dashboard.state();
    assert_eq!(state.mode, Mode::List);
    assert!(state.form.title.is_empty());
    assert!(state.form.description.is_empty());
}

#[tokio::test]
async fn successful_create_clears_form_and_reloads_current_page() {
    let h = harness();
    queue_list(&h, Ok(page_of(vec![task("t-11")], 2, 3, 23)));
    h.dashboard.load_page(2).await;

    h.dashboard.open_create();
    h.dashboard
        .update_field(FormField::Title, "New task".to_string());
    h.dashboard
        .update_field(FormField::Description, "Do the thing".to_string());
    queue_list(&h, Ok(page_of(vec![task("t-11"), task("t-24")], 2, 3, 24)));

    h.dashboard.submit().await;

    assert_eq!(
        h.api.create_calls.borrow().as_slice(),
        [CreateTaskRequest {
            title: "New task".to_string(),
            description: "Do the thing".to_string(),
        }]
    );
    let state = h.dashboard.state();
    assert_eq!(state.mode, Mode::List);
    assert!(state.form.title.is_empty());
    assert!(!state.loading);
    assert_eq!(state.current_page, 2);
    assert_eq!(h.api.list_calls.borrow().as_slice(), [2, 2]);
    assert_eq!(
        h.notifier.successes.borrow().as_slice(),
        ["Task created successfully"]
    );
}

#[tokio::test]
async fn failed_create_keeps_form_for_retry() {
    let h = harness();
    h.dashboard.open_create();
    h.dashboard
        .update_field(FormField::Title, "New task".to_string());
    h.dashboard
        .update_field(FormField::Description, "Do the thing".to_string());
    h.api
        .create_results
        .borrow_mut()
        .push_back(Err(ApiError::Status {
            status: 422,
            message: Some("Title too long".to_string()),
        }));

    h.dashboard.submit().await;

    let state = h.dashboard.state();
    assert_eq!(state.mode, Mode::Creating);
    assert_eq!(state.form.title, "New task");
    assert_eq!(state.form.description, "Do the thing");
    assert!(!state.loading);
    assert!(h.api.list_calls.borrow().is_empty());
    assert_eq!(h.notifier.errors.borrow().as_slice(), ["Title too long"]);
}

#[tokio::test]
async fn empty_required_fields_block_submit_before_any_request() {
    let h = harness();
    h.dashboard.open_create();
    h.dashboard
        .update_field(FormField::Description, "only a description".to_string());

    h.dashboard.submit().await;

    assert!(h.api.create_calls.borrow().is_empty());
    assert_eq!(h.notifier.errors.borrow().as_slice(), ["Title is required"]);
    let state = h.dashboard.state();
    assert_eq!(state.mode, Mode::Creating);
    assert!(!state.loading);
}

#[tokio::test]
async fn submit_outside_a_form_is_ignored() {
    let h = harness();

    h.dashboard.submit().await;

    assert!(h.api.create_calls.borrow().is_empty());
    assert!(h.api.update_calls.borrow().is_empty());
    assert!(h.notifier.errors.borrow().is_empty());
}

#[tokio::test]
async fn edit_seeds_form_and_update_patches_the_task() {
    let h = harness();
    queue_list(&h, Ok(page_of(vec![task("t-1")], 1, 1, 1)));
    h.dashboard.load_page(1).await;

    h.dashboard.start_edit(task("t-1"));
    let seeded = h.dashboard.state();
    assert_eq!(seeded.form.title, "task t-1");
    assert_eq!(seeded.form.description, "details");

    h.dashboard
        .update_field(FormField::Title, "Renamed".to_string());
    queue_list(&h, Ok(page_of(vec![task("t-1")], 1, 1, 1)));
    h.dashboard.submit().await;

    assert_eq!(
        h.api.update_calls.borrow().as_slice(),
        [(
            "t-1".to_string(),
            UpdateTaskRequest {
                title: "Renamed".to_string(),
                description: "details".to_string(),
            }
        )]
    );
    let state = h.dashboard.state();
    assert_eq!(state.mode, Mode::List);
    assert!(state.form.title.is_empty());
    assert_eq!(
        h.notifier.successes.borrow().as_slice(),
        ["Task updated successfully"]
    );
}

#[tokio::test]
async fn declined_delete_makes_no_request() {
    let h = harness();
    queue_list(&h, Ok(page_of(vec![task("t-1")], 1, 1, 1)));
    h.dashboard.load_page(1).await;
    let before = h.dashboard.state();
    h.confirmer.answer.set(false);

    h.dashboard.delete_task("t-1").await;

    assert!(h.api.delete_calls.borrow().is_empty());
    assert_eq!(
        h.confirmer.prompts.borrow().as_slice(),
        ["Are you sure you want to delete this task?"]
    );
    assert_eq!(h.dashboard.state(), before);
}

#[tokio::test]
async fn confirmed_delete_reloads_current_page_without_stepping_back() {
    let h = harness();
    queue_list(&h, Ok(page_of(vec![task("t-11")], 2, 3, 21)));
    h.dashboard.load_page(2).await;

    // Page 2 comes back empty after the delete; the dashboard stays on
    // page 2 rather than jumping to page 1.
    queue_list(&h, Ok(page_of(Vec::new(), 2, 2, 20)));
    h.dashboard.delete_task("t-11").await;

    assert_eq!(h.api.delete_calls.borrow().as_slice(), ["t-11"]);
    assert_eq!(h.api.list_calls.borrow().as_slice(), [2, 2]);
    let state = h.dashboard.state();
    assert_eq!(state.current_page, 2);
    assert!(state.tasks.is_empty());
    assert!(!state.loading);
    assert_eq!(
        h.notifier.successes.borrow().as_slice(),
        ["Task deleted successfully"]
    );
}

#[tokio::test]
async fn failed_delete_leaves_state_unchanged() {
    let h = harness();
    queue_list(&h, Ok(page_of(vec![task("t-1")], 1, 1, 1)));
    h.dashboard.load_page(1).await;
    let before = h.dashboard.state();
    h.api
        .delete_results
        .borrow_mut()
        .push_back(Err(ApiError::Transport("connection reset".to_string())));

    h.dashboard.delete_task("t-1").await;

    assert_eq!(h.api.list_calls.borrow().as_slice(), [1]);
    assert_eq!(h.dashboard.state(), before);
    assert_eq!(
        h.notifier.errors.borrow().as_slice(),
        ["Failed to delete task"]
    );
}

#[tokio::test]
async fn stale_list_response_is_dropped() {
    let h = harness();
    h.api.yield_before_list_reply.set(true);
    queue_list(&h, Ok(page_of(vec![task("t-1")], 2, 3, 23)));
    queue_list(&h, Ok(page_of(vec![task("t-21")], 3, 3, 23)));

    // Two rapid page changes: the reply for the first load arrives
    // after the second load was issued and must not win.
    tokio::join!(h.dashboard.load_page(2), h.dashboard.load_page(3));

    let state = h.dashboard.state();
    assert_eq!(state.current_page, 3);
    assert_eq!(
        state.tasks.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        ["t-21"]
    );
    assert!(!state.loading);
    assert!(h.notifier.errors.borrow().is_empty());
}

#[tokio::test]
async fn change_listener_sees_every_commit() {
    let h = harness();
    let loading_seen = Rc::new(RefCell::new(Vec::new()));
    let sink = loading_seen.clone();
    h.dashboard.set_change_listener(move |state| {
        sink.borrow_mut().push(state.loading);
    });
    queue_list(&h, Ok(page_of(vec![task("t-1")], 1, 1, 1)));

    h.dashboard.load_page(1).await;

    assert_eq!(loading_seen.borrow().as_slice(), [true, false]);
}
