use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls.
/// Pages are 1-based; `last_page` comes straight from the backend envelope.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Last page number (>= 1)
    #[prop(into)]
    last_page: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Current page size
    #[prop(into)]
    per_page: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_per_page_change: Callback<usize>,
) -> impl IntoView {
    let per_page_opts = [10usize, 25, 50, 100];

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title="Primera página"
            >
                {"«"}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Página anterior"
            >
                {"‹"}
            </button>
            <span class="pagination-info">
                {move || {
                    let page = current_page.get();
                    let last = last_page.get().max(1);
                    let count = total_count.get();
                    format!("{} / {} ({})", page, last, count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < last_page.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= last_page.get()
                title="Página siguiente"
            >
                {"›"}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last_page.get().max(1))
                disabled=move || current_page.get() >= last_page.get()
                title="Última página"
            >
                {"»"}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(25);
                    on_per_page_change.run(val);
                }
                prop:value=move || per_page.get().to_string()
            >
                {per_page_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || per_page.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
