use yew::{Callback, Html, Properties, function_component, html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    html! {
        <div class="toast-host">
            {
                for props.toasts.iter().cloned().map(|toast| {
                    let on_dismiss = props.on_dismiss.clone();
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };

                    html! {
                        <div class={class} key={toast.id.to_string()} onclick={move |_| on_dismiss.emit(toast.id)}>
                            { &toast.message }
                        </div>
                    }
                })
            }
        </div>
    }
}
