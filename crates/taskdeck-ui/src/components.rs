mod pagination_controls;
mod task_form;
mod task_list;
mod toast_host;

pub use pagination_controls::PaginationControls;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use toast_host::{Toast, ToastHost, ToastKind};
