use taskdeck_core::state::{FormData, FormField};
use yew::{
    Callback, Html, InputEvent, Properties, SubmitEvent, TargetCast, function_component, html,
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
    pub editing: bool,
    pub form: FormData,
    pub loading: bool,
    pub on_field: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(TaskForm)]
pub fn task_form(props: &TaskFormProps) -> Html {
    let heading = if props.editing { "Edit Task" } else { "Create New Task" };
    let submit_label = if props.editing { "Update Task" } else { "Create Task" };

    let oninput_title = {
        let on_field = props.on_field.clone();
        Callback::from(move |event: InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            on_field.emit((FormField::Title, input.value()));
        })
    };

    let oninput_description = {
        let on_field = props.on_field.clone();
        Callback::from(move |event: InputEvent| {
            let area: web_sys::HtmlTextAreaElement = event.target_unchecked_into();
            on_field.emit((FormField::Description, area.value()));
        })
    };

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    let oncancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="panel form">
            <div class="header">{ heading }</div>
            <form {onsubmit}>
                <label class="field-label" for="task-title">{ "Title" }</label>
                <input
                    id="task-title"
                    name="title"
                    placeholder="Enter task title"
                    value={props.form.title.clone()}
                    oninput={oninput_title}
                    disabled={props.loading}
                />
                <label class="field-label" for="task-description">{ "Description" }</label>
                <textarea
                    id="task-description"
                    name="description"
                    placeholder="Enter task description"
                    rows="4"
                    value={props.form.description.clone()}
                    oninput={oninput_description}
                    disabled={props.loading}
                />
                <div class="actions">
                    <button class="btn primary" type="submit" disabled={props.loading}>
                        { submit_label }
                    </button>
                    <button
                        class="btn"
                        type="button"
                        onclick={oncancel}
                        disabled={props.loading}
                    >
                        { "Cancel" }
                    </button>
                </div>
            </form>
        </div>
    }
}
