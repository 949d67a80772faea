use crate::shared::icons::icon;
use leptos::prelude::*;

/// "Showing X to Y of Z results" for a 1-based inclusive range
pub fn showing_label(range: (usize, usize), total_count: usize) -> String {
    format!("Showing {} to {} of {} results", range.0, range.1, total_count)
}

/// PaginationControls component - reusable pagination controls
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages, at least 1
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of matched items
    #[prop(into)]
    total_count: Signal<usize>,

    /// 1-based bounds of the visible rows, `(0, 0)` when empty
    #[prop(into)]
    showing: Signal<(usize, usize)>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// A page exists before the current one
    #[prop(into)]
    has_previous: Signal<bool>,

    /// A page exists after the current one
    #[prop(into)]
    has_next: Signal<bool>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options (optional, defaults to [15, 30, 50])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![15, 30, 50]);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || showing_label(showing.get(), total_count.get())}
            </span>
            <div class="pagination-controls__nav">
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if has_previous.get() {
                            on_page_change.run(current_page.get() - 1);
                        }
                    }
                    disabled=move || !has_previous.get()
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                <span class="pagination-info">
                    {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| {
                        if has_next.get() {
                            on_page_change.run(current_page.get() + 1);
                        }
                    }
                    disabled=move || !has_next.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        match event_target_value(&ev).parse() {
                            Ok(val) => on_page_size_change.run(val),
                            Err(_) => log::warn!("invalid page size option"),
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.iter().map(|&size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
