use taskdeck_shared::{
  PaginatedTasksResponse,
  Task
};

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct FormData {
  pub title:       String,
  pub description: String
}

impl FormData {
  pub fn from_task(task: &Task) -> Self {
    Self {
      title:       task.title.clone(),
      description: task
        .description
        .clone()
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum FormField {
  Title,
  Description
}

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub enum Mode {
  #[default]
  List,
  Creating,
  Editing(Task)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
  pub tasks:        Vec<Task>,
  pub loading:      bool,
  pub mode:         Mode,
  pub current_page: u32,
  pub total_pages:  u32,
  pub total_count:  u64,
  pub form:         FormData
}

impl Default for DashboardState {
  fn default() -> Self {
    Self {
      tasks:        Vec::new(),
      loading:      false,
      mode:         Mode::List,
      current_page: 1,
      total_pages:  1,
      total_count:  0,
      form:         FormData::default()
    }
  }
}

impl DashboardState {
  pub fn form_open(&self) -> bool {
    !matches!(self.mode, Mode::List)
  }

  pub fn editing(
    &self
  ) -> Option<&Task> {
    match &self.mode {
      | Mode::Editing(task) => {
        Some(task)
      }
      | _ => None
    }
  }

  pub fn page_in_range(
    &self,
    target: u32
  ) -> bool {
    (1..=self.total_pages)
      .contains(&target)
  }

  pub fn has_pagination(
    &self
  ) -> bool {
    self.total_pages > 1
  }

  // OpenCreate is only legal from the
  // list view with no form open.
  pub fn open_create(&mut self) {
    if self.form_open() {
      return;
    }
    self.mode = Mode::Creating;
    self.form = FormData::default();
  }

  pub fn start_edit(
    &mut self,
    task: Task
  ) {
    self.form =
      FormData::from_task(&task);
    self.mode = Mode::Editing(task);
  }

  pub fn cancel_form(&mut self) {
    self.mode = Mode::List;
    self.form = FormData::default();
  }

  pub fn update_field(
    &mut self,
    field: FormField,
    value: String
  ) {
    match field {
      | FormField::Title => {
        self.form.title = value;
      }
      | FormField::Description => {
        self.form.description = value;
      }
    }
  }

  pub fn apply_page(
    &mut self,
    page: u32,
    response: PaginatedTasksResponse
  ) {
    self.tasks = response.items;
    self.total_count =
      response.total_count;
    self.total_pages =
      response.total_pages.max(1);
    self.current_page = page
      .clamp(1, self.total_pages);
  }
}
