use yew::{Callback, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub current_page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub on_change: Callback<u32>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    let at_first = props.current_page <= 1;
    let at_last = props.current_page >= props.total_pages;

    let on_previous = {
        let on_change = props.on_change.clone();
        let target = props.current_page.saturating_sub(1);
        Callback::from(move |_| on_change.emit(target))
    };

    let on_next = {
        let on_change = props.on_change.clone();
        let target = props.current_page.saturating_add(1);
        Callback::from(move |_| on_change.emit(target))
    };

    html! {
        <div class="pagination">
            <div class="pagination-label">
                { format!("Page {} of {}", props.current_page, props.total_pages) }
            </div>
            <div class="actions">
                <button class="btn" disabled={at_first || props.loading} onclick={on_previous}>
                    { "Previous" }
                </button>
                <button class="btn" disabled={at_last || props.loading} onclick={on_next}>
                    { "Next" }
                </button>
            </div>
        </div>
    }
}
