use crate::shared::icons::icon;
use crate::shared::pagination::{PageButton, PageInfo};
use leptos::prelude::*;

/// PaginationControls component - page info line, numbered buttons and page size selector
///
/// Hidden entirely when `info` is `None` (empty list).
#[component]
pub fn PaginationControls(
    /// Pagination metadata for the current view
    #[prop(into)]
    info: Signal<Option<PageInfo>>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes (1-based page number)
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    /// Available page size options
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let fallback_size = page_size_options.first().copied().unwrap_or(10);

    view! {
        <Show when=move || info.with(|i| i.is_some())>
            <div class="pagination-controls">
                <span class="pagination-info">
                    {move || info.with(|i| i.as_ref().map(PageInfo::summary).unwrap_or_default())}
                </span>
                <div class="pagination-buttons">
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            if let Some(i) = info.get_untracked() {
                                on_page_change.run(i.current_page.saturating_sub(1));
                            }
                        }
                        disabled=move || info.with(|i| !i.as_ref().is_some_and(|i| i.has_previous))
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                    {move || {
                        info.get()
                            .map(|i| i.buttons)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|button| match button {
                                PageButton::Page { number, active } => view! {
                                    <button
                                        class={if active { "page-number active" } else { "page-number" }}
                                        on:click=move |_| on_page_change.run(number)
                                    >
                                        {number}
                                    </button>
                                }
                                .into_any(),
                                PageButton::Ellipsis => view! {
                                    <button class="page-number" disabled=true>"..."</button>
                                }
                                .into_any(),
                            })
                            .collect_view()
                    }}
                    <button
                        class="pagination-btn"
                        on:click=move |_| {
                            if let Some(i) = info.get_untracked() {
                                on_page_change.run(i.current_page + 1);
                            }
                        }
                        disabled=move || info.with(|i| !i.as_ref().is_some_and(|i| i.has_next))
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        let val = event_target_value(&ev).parse().unwrap_or(fallback_size);
                        on_page_size_change.run(val);
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
        </Show>
    }
}
