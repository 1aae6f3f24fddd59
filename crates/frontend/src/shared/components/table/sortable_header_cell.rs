//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Пример
//!
//! ```text
//! <SortableHeaderCell
//!     label="Price"
//!     direction=Signal::derive(move || sort_direction_for(sort.as_ref(), &ProductSortField::Price))
//!     on_sort=Callback::new(move |_| toggle_sort(ProductSortField::Price))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortDirection};
use leptos::prelude::*;
use thaw::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Показывает индикатор сортировки (▲▼⇅) и вызывает `on_sort` по клику.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Направление сортировки, если колонка активна
    #[prop(into)]
    direction: Signal<Option<SortDirection>>,

    /// Callback при клике на заголовок
    on_sort: Callback<()>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width class="resizable">
            <div
                class=move || format!("table__sortable-header {}", get_sort_class(direction.get()))
                style=header_style
                on:click=move |_| on_sort.run(())
            >
                {label}
                <span class="table__sort-indicator">
                    {move || get_sort_indicator(direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}
