/// Универсальные утилиты для работы со списками (поиск, сортировка, UI компоненты)
use leptos::prelude::*;
use std::cmp::Ordering;

/// Trait для типов данных, поддерживающих поиск
pub trait Searchable {
    /// Проверяет, соответствует ли объект поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Поле, по которому можно сортировать
    type Field: Copy + PartialEq;

    /// Сравнивает два объекта по указанному полю
    fn compare_by_field(&self, other: &Self, field: Self::Field) -> Ordering;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Активная сортировка: поле и направление задаются только вместе
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> SortDirective<F> {
    pub fn ascending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: F) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Следующее состояние сортировки после клика по заголовку `field`.
///
/// Тот же столбец: по возрастанию -> по убыванию -> без сортировки.
/// Другой столбец (или сортировки нет): по возрастанию.
pub fn next_sort<F: Copy + PartialEq>(
    current: Option<SortDirective<F>>,
    field: F,
) -> Option<SortDirective<F>> {
    match current {
        Some(s) if s.field == field => match s.direction {
            SortDirection::Ascending => Some(SortDirective::descending(field)),
            SortDirection::Descending => None,
        },
        _ => Some(SortDirective::ascending(field)),
    }
}

/// Сортирует список по указанному полю (стабильно)
pub fn sort_list<T: Sortable>(items: &mut [T], sort: SortDirective<T::Field>) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, sort.field);
        match sort.direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
}

/// Фильтрует список по поисковому запросу, сохраняя исходный порядок.
/// Пустой запрос пропускает всё.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Направление сортировки колонки `field`, если она сейчас активна
pub fn sort_direction_for<F: PartialEq>(
    current: Option<&SortDirective<F>>,
    field: &F,
) -> Option<SortDirection> {
    current.filter(|s| s.field == *field).map(|s| s.direction)
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

/// CSS класс заголовка сортируемой колонки
pub fn get_sort_class(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => "sortable asc",
        Some(SortDirection::Descending) => "sortable desc",
        None => "sortable",
    }
}

/// Компонент поиска с кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search by title...".to_string()
    } else {
        placeholder
    };

    let clear_filter = move |_| on_change.run(String::new());

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder={placeholder}
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
