use super::ProductSortField;
use crate::shared::list_utils::{
    filter_list, next_sort, sort_list, SortDirective,
};
use crate::shared::pagination::{clamp_page, page_range, total_pages, PageInfo};
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Состояние списка товаров.
///
/// `visible` всегда равен `sort(filter(catalog, search), sort)`; страница
/// после любого пересчёта лежит в `[1, max(1, total_pages)]`.
#[derive(Clone, Debug)]
pub struct ProductListState {
    // Данные
    catalog: Vec<Product>,
    visible: Vec<Product>,

    // Фильтр
    search: String,

    // Сортировка
    sort: Option<SortDirective<ProductSortField>>,

    // Пагинация (страницы с 1)
    page: usize,
    page_size: usize,

    // Флаг загрузки
    is_loaded: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ProductListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            catalog: Vec::new(),
            visible: Vec::new(),
            search: String::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
            is_loaded: false,
        }
    }

    /// Устанавливает загруженный каталог (один раз при старте)
    pub fn set_catalog(&mut self, products: Vec<Product>) {
        self.catalog = products;
        self.is_loaded = true;
        self.page = 1;
        self.recompute();
    }

    /// Поиск по названию; сбрасывает страницу на первую
    pub fn apply_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
        self.recompute();
        log::debug!(
            "search {:?}: {} of {} products",
            self.search,
            self.visible.len(),
            self.catalog.len()
        );
    }

    /// Клик по заголовку колонки: ASC -> DESC -> без сортировки
    pub fn toggle_sort(&mut self, field: ProductSortField) {
        self.sort = next_sort(self.sort, field);
        self.page = 1;
        self.recompute();
        log::debug!("sort: {:?}", self.sort);
    }

    /// Переход на страницу. Вне `[1, total_pages]` ничего не меняет.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.page = page;
            true
        } else {
            false
        }
    }

    /// Смена размера страницы; нулевой размер игнорируется
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            return false;
        }
        self.page_size = page_size;
        self.page = 1;
        true
    }

    fn recompute(&mut self) {
        let mut visible = filter_list(&self.catalog, &self.search);
        if let Some(sort) = self.sort {
            sort_list(&mut visible, sort);
        }
        self.visible = visible;
        self.page = clamp_page(self.page, self.total_pages());
    }

    /// Отфильтрованные и отсортированные товары
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> Option<SortDirective<ProductSortField>> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.visible.len(), self.page_size)
    }

    /// Товары текущей страницы
    pub fn page_items(&self) -> &[Product] {
        &self.visible[page_range(self.page, self.page_size, self.visible.len())]
    }

    pub fn page_info(&self) -> Option<PageInfo> {
        PageInfo::new(self.page, self.page_size, self.visible.len())
    }
}

pub fn create_state(page_size: usize) -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, title: &str, price: f64) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: None,
            category: None,
            images: Vec::new(),
            slug: None,
        }
    }

    fn loaded(products: Vec<Product>, page_size: usize) -> ProductListState {
        let mut state = ProductListState::new(page_size);
        state.set_catalog(products);
        state
    }

    fn numbered(n: usize) -> Vec<Product> {
        (1..=n)
            .map(|i| product(i as i64, &format!("Item {i}"), i as f64))
            .collect()
    }

    fn titles(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.title.as_str()).collect()
    }

    fn fruit() -> Vec<Product> {
        vec![
            product(1, "banana", 5.0),
            product(2, "Apple", 10.0),
            product(3, "cherry", 7.5),
            product(4, "Banana split", 12.0),
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = ProductListState::default();
        assert!(!state.is_loaded());
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.sort(), None);
        assert_eq!(state.page_info(), None);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let mut state = loaded(fruit(), 10);
        for term in ["", "an", "AN", "split", "e", "zzz", " "] {
            state.apply_search(term);
            let expected: Vec<Product> = fruit()
                .into_iter()
                .filter(|p| p.title.to_lowercase().contains(&term.to_lowercase()))
                .collect();
            assert_eq!(state.visible(), expected.as_slice(), "term {term:?}");
        }
    }

    #[test]
    fn test_search_apple_banana_scenario() {
        let mut state = loaded(vec![product(1, "Apple", 10.0), product(2, "Banana", 5.0)], 10);
        state.apply_search("an");
        assert_eq!(titles(state.visible()), vec!["Banana"]);
        state.toggle_sort(ProductSortField::Price);
        assert_eq!(titles(state.visible()), vec!["Banana"]);
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = loaded(numbered(30), 10);
        assert!(state.go_to_page(3));
        state.apply_search("Item");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let mut state = loaded(fruit(), 10);
        state.toggle_sort(ProductSortField::Title);
        assert_eq!(
            titles(state.visible()),
            vec!["Apple", "banana", "Banana split", "cherry"]
        );
        state.toggle_sort(ProductSortField::Title);
        assert_eq!(
            titles(state.visible()),
            vec!["cherry", "Banana split", "banana", "Apple"]
        );
    }

    #[test]
    fn test_sort_by_price_is_numeric() {
        let mut state = loaded(
            vec![product(1, "a", 100.0), product(2, "b", 9.0), product(3, "c", 20.5)],
            10,
        );
        state.toggle_sort(ProductSortField::Price);
        assert_eq!(titles(state.visible()), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_three_clicks_restore_filtered_order() {
        let mut state = loaded(fruit(), 10);
        state.apply_search("an");
        let original = state.visible().to_vec();

        state.toggle_sort(ProductSortField::Price);
        assert_eq!(
            state.sort(),
            Some(SortDirective::ascending(ProductSortField::Price))
        );
        state.toggle_sort(ProductSortField::Price);
        assert_eq!(
            state.sort(),
            Some(SortDirective::descending(ProductSortField::Price))
        );
        assert_eq!(titles(state.visible()), vec!["Banana split", "banana"]);
        state.toggle_sort(ProductSortField::Price);
        assert_eq!(state.sort(), None);
        assert_eq!(state.visible(), original.as_slice());
    }

    #[test]
    fn test_other_column_starts_ascending() {
        let mut state = loaded(fruit(), 10);
        state.toggle_sort(ProductSortField::Title);
        state.toggle_sort(ProductSortField::Title);
        state.toggle_sort(ProductSortField::Price);
        assert_eq!(
            state.sort(),
            Some(SortDirective::ascending(ProductSortField::Price))
        );
    }

    #[test]
    fn test_search_keeps_active_sort() {
        let mut state = loaded(fruit(), 10);
        state.toggle_sort(ProductSortField::Price);
        state.apply_search("b");
        assert_eq!(titles(state.visible()), vec!["banana", "Banana split"]);
        state.toggle_sort(ProductSortField::Price);
        assert_eq!(titles(state.visible()), vec!["Banana split", "banana"]);
    }

    #[test]
    fn test_sort_resets_page() {
        let mut state = loaded(numbered(25), 10);
        assert!(state.go_to_page(2));
        state.toggle_sort(ProductSortField::Title);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_out_of_range_navigation_is_noop() {
        let mut state = loaded(numbered(25), 10);
        assert!(state.go_to_page(2));
        assert!(!state.go_to_page(0));
        assert_eq!(state.page(), 2);
        assert!(!state.go_to_page(state.total_pages() + 1));
        assert_eq!(state.page(), 2);
        assert!(state.go_to_page(3));
        assert_eq!(state.page_items().len(), 5);
    }

    #[test]
    fn test_navigation_on_empty_catalog() {
        let mut state = loaded(Vec::new(), 10);
        assert_eq!(state.total_pages(), 0);
        assert!(!state.go_to_page(1));
        assert_eq!(state.page(), 1);
        assert!(state.page_items().is_empty());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = loaded(numbered(12), 10);
        assert!(state.go_to_page(2));
        assert!(state.set_page_size(5));
        assert!(state.go_to_page(3));

        assert!(state.set_page_size(10));
        assert!(state.set_page_size(5));
        assert_eq!(state.page(), 1);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.page_items().len(), 5);
    }

    #[test]
    fn test_zero_page_size_ignored() {
        let mut state = loaded(numbered(12), 5);
        assert!(state.go_to_page(2));
        assert!(!state.set_page_size(0));
        assert_eq!(state.page_size(), 5);
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_pages_partition_visible() {
        for n in [1usize, 9, 10, 11, 37] {
            for size in [1usize, 3, 10] {
                let mut state = loaded(numbered(n), size);
                let pages = state.total_pages();
                assert_eq!(pages, n.div_ceil(size));
                let mut seen = Vec::new();
                for p in 1..=pages {
                    assert!(state.go_to_page(p));
                    let items = state.page_items();
                    if p < pages {
                        assert_eq!(items.len(), size);
                    } else {
                        assert!(!items.is_empty() && items.len() <= size);
                    }
                    seen.extend(items.iter().map(|i| i.id));
                }
                let expected: Vec<i64> = (1..=n as i64).collect();
                assert_eq!(seen, expected);
            }
        }
    }

    #[test]
    fn test_page_info_follows_state() {
        let mut state = loaded(numbered(12), 5);
        assert!(state.go_to_page(3));
        let info = state.page_info().unwrap();
        assert_eq!(info.current_page, 3);
        assert_eq!((info.start_item, info.end_item, info.total_count), (11, 12, 12));

        state.apply_search("nothing matches");
        assert_eq!(state.page_info(), None);
    }
}
