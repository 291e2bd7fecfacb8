use taskdeck_shared::Task;
use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
    pub tasks: Vec<Task>,
    pub loading: bool,
    pub on_edit: Callback<Task>,
    pub on_delete: Callback<String>,
}

#[function_component(TaskList)]
pub fn task_list(props: &TaskListProps) -> Html {
    if props.loading && props.tasks.is_empty() {
        return html! {
            <div class="list-placeholder">{ "Loading tasks..." }</div>
        };
    }

    if props.tasks.is_empty() {
        return html! {
            <div class="list-placeholder">
                { "No tasks found. Create your first task to get started!" }
            </div>
        };
    }

    html! {
        <div class="task-rows">
            {
                for props.tasks.iter().cloned().map(|task| {
                    let task_for_edit = task.clone();
                    let task_id = task.id.clone();
                    let on_edit = props.on_edit.clone();
                    let on_delete = props.on_delete.clone();

                    html! {
                        <div class="row" key={task.id.clone()}>
                            <div class="row-body">
                                <div class="row-title">{ &task.title }</div>
                                <div class="row-subtitle">{ &task.description }</div>
                            </div>
                            <div class="actions">
                                <button
                                    class="btn"
                                    disabled={props.loading}
                                    onclick={move |_| on_edit.emit(task_for_edit.clone())}
                                >
                                    { "Edit" }
                                </button>
                                <button
                                    class="btn danger"
                                    disabled={props.loading}
                                    onclick={move |_| on_delete.emit(task_id.clone())}
                                >
                                    { "Delete" }
                                </button>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}
