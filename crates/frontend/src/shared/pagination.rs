//! Клиентская пагинация: расчёт страниц и набора кнопок.
//!
//! Страницы нумеруются с 1.

use std::ops::Range;

/// Количество страниц (ceil). Для пустого списка - 0.
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

/// Диапазон индексов элементов для страницы `page`
pub fn page_range(page: usize, page_size: usize, total_count: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);
    start..end
}

/// Приводит номер страницы к допустимому диапазону [1, max(1, total_pages)]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Компактный список кнопок: первая, последняя, текущая ±1,
/// многоточие на местах current-2 и current+2.
pub fn page_buttons(current_page: usize, total_pages: usize) -> Vec<PageButton> {
    let mut buttons = Vec::new();
    for i in 1..=total_pages {
        let is_neighbor = i + 1 >= current_page && i <= current_page + 1;
        if i == 1 || i == total_pages || is_neighbor {
            buttons.push(PageButton::Page {
                number: i,
                active: i == current_page,
            });
        } else if i + 2 == current_page || i == current_page + 2 {
            buttons.push(PageButton::Ellipsis);
        }
    }
    buttons
}

/// Данные для отрисовки панели пагинации
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    /// Номер первого показанного элемента (с 1)
    pub start_item: usize,
    /// Номер последнего показанного элемента (включительно)
    pub end_item: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub buttons: Vec<PageButton>,
}

impl PageInfo {
    /// `None` для пустого списка: панель пагинации не показывается
    pub fn new(current_page: usize, page_size: usize, total_count: usize) -> Option<Self> {
        if total_count == 0 || page_size == 0 {
            return None;
        }
        let total_pages = total_pages(total_count, page_size);
        let current_page = clamp_page(current_page, total_pages);
        let range = page_range(current_page, page_size, total_count);

        Some(Self {
            current_page,
            total_pages,
            total_count,
            start_item: range.start + 1,
            end_item: range.end,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            buttons: page_buttons(current_page, total_pages),
        })
    }

    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {} products",
            self.start_item, self.end_item, self.total_count
        )
    }
}
