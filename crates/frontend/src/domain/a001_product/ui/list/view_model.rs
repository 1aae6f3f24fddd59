//! Projection of the list state into what the table draws.

use super::state::ProductListState;
use super::ProductSortField;
use crate::shared::image_utils::collect_image_urls;
use crate::shared::list_utils::SortDirective;
use crate::shared::pagination::PageInfo;
use contracts::domain::a001_product::aggregate::Product;

pub const EMPTY_MESSAGE: &str = "No products found.";
pub const NO_DESCRIPTION: &str = "No description";
pub const NO_CATEGORY: &str = "N/A";

/// Строка таблицы, готовая к отображению
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: i64,
    pub title: String,
    /// Очищенные ссылки; пусто - показывается заглушка
    pub images: Vec<String>,
    pub price: String,
    pub description: String,
    pub category: String,
}

impl ProductRow {
    pub fn from_product(p: &Product, max_images: usize) -> Self {
        Self {
            id: p.id,
            title: p.title.clone(),
            images: collect_image_urls(&p.images, max_images),
            price: format_price(p.price),
            description: p
                .description
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            category: p
                .category_name()
                .unwrap_or(NO_CATEGORY)
                .to_string(),
        }
    }
}

/// `$10`, `$10.5`
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProductTableView {
    /// Каталог ещё загружается
    Loading,
    /// Нечего показать: пагинация скрыта
    Empty,
    Table {
        rows: Vec<ProductRow>,
        sort: Option<SortDirective<ProductSortField>>,
        page: PageInfo,
    },
}

impl ProductTableView {
    pub fn project(state: &ProductListState, max_images: usize) -> Self {
        if !state.is_loaded() {
            return ProductTableView::Loading;
        }
        let Some(page) = state.page_info() else {
            return ProductTableView::Empty;
        };

        let rows = state
            .page_items()
            .iter()
            .map(|p| ProductRow::from_product(p, max_images))
            .collect();

        ProductTableView::Table {
            rows,
            sort: state.sort(),
            page,
        }
    }

    pub fn page_info(&self) -> Option<&PageInfo> {
        match self {
            ProductTableView::Table { page, .. } => Some(page),
            _ => None,
        }
    }
}
