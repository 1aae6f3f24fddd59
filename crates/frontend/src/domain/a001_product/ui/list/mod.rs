pub mod state;
pub mod view_model;

use self::state::create_state;
use self::view_model::{ProductRow, ProductTableView, EMPTY_MESSAGE};
use crate::domain::a001_product::api::load_catalog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::shared::list_utils::{sort_direction_for, SearchInput, Searchable, SortDirective, Sortable};
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

/// Колонки, по которым можно сортировать таблицу товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortField {
    Title,
    Price,
}

impl Searchable for Product {
    fn matches_filter(&self, filter: &str) -> bool {
        self.title.to_lowercase().contains(&filter.to_lowercase())
    }
}

impl Sortable for Product {
    type Field = ProductSortField;

    fn compare_by_field(&self, other: &Self, field: ProductSortField) -> Ordering {
        match field {
            ProductSortField::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            ProductSortField::Price => self
                .price
                .partial_cmp(&other.price)
                .unwrap_or(Ordering::Equal),
        }
    }
}

const TABLE_ID: &str = "a001-product-table";

#[component]
pub fn ProductList(config: Config) -> impl IntoView {
    let state = create_state(config.list.default_page_size);
    let max_images = config.list.max_images;
    let products_url = config.api.products_url;
    let page_size_options = config.list.page_size_options;

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded()) {
            let url = products_url.clone();
            spawn_local(async move {
                let products = load_catalog(&url).await;
                state.update(|s| s.set_catalog(products));
            });
        }
    });

    let table_view = Memo::new(move |_| state.with(|s| ProductTableView::project(s, max_images)));

    let on_search = Callback::new(move |term: String| state.update(|s| s.apply_search(term)));

    let on_sort = Callback::new(move |field: ProductSortField| state.update(|s| s.toggle_sort(field)));

    let go_to_page = Callback::new(move |page: usize| {
        state.update(|s| {
            s.go_to_page(page);
        })
    });

    let change_page_size = Callback::new(move |size: usize| {
        state.update(|s| {
            s.set_page_size(size);
        })
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("products")}
                    <h1 class="page__title">"Products"</h1>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search().to_string()))
                        on_change=on_search
                        placeholder="Search by title..."
                    />
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    {move || match table_view.get() {
                        ProductTableView::Loading => view! {
                            <div class="table-placeholder">"Loading..."</div>
                        }.into_any(),
                        ProductTableView::Empty => view! {
                            <p class="table-empty">{EMPTY_MESSAGE}</p>
                        }.into_any(),
                        ProductTableView::Table { rows, sort, .. } => view! {
                            <ProductTable rows=rows sort=sort on_sort=on_sort />
                        }.into_any(),
                    }}
                </div>

                <PaginationControls
                    info=Signal::derive(move || table_view.with(|v| v.page_info().cloned()))
                    page_size=Signal::derive(move || state.with(|s| s.page_size()))
                    on_page_change=go_to_page
                    on_page_size_change=change_page_size
                    page_size_options=page_size_options
                />
            </div>
        </div>
    }
}

#[component]
fn ProductTable(
    rows: Vec<ProductRow>,
    sort: Option<SortDirective<ProductSortField>>,
    on_sort: Callback<ProductSortField>,
) -> impl IntoView {
    let title_direction = sort_direction_for(sort.as_ref(), &ProductSortField::Title);
    let price_direction = sort_direction_for(sort.as_ref(), &ProductSortField::Price);

    view! {
        <Table attr:id=TABLE_ID attr:style="width: 100%; min-width: 900px;">
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=false min_width=60.0>"ID"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=200.0>"Images"</TableHeaderCell>
                    <SortableHeaderCell
                        label="Title"
                        direction=Signal::derive(move || title_direction)
                        on_sort=Callback::new(move |_| on_sort.run(ProductSortField::Title))
                        min_width=200.0
                    />
                    <SortableHeaderCell
                        label="Price"
                        direction=Signal::derive(move || price_direction)
                        on_sort=Callback::new(move |_| on_sort.run(ProductSortField::Price))
                        align="right"
                    />
                    <TableHeaderCell resizable=false min_width=160.0>"Description"</TableHeaderCell>
                    <TableHeaderCell resizable=false min_width=120.0>"Category"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows.into_iter().map(|row| view! { <ProductTableRow row=row /> }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
fn ProductTableRow(row: ProductRow) -> impl IntoView {
    let ProductRow {
        id,
        title,
        images,
        price,
        description,
        category,
    } = row;

    let image_cell = if images.is_empty() {
        view! { <div class="no-image">{icon("products")}</div> }.into_any()
    } else {
        images
            .into_iter()
            .map(|src| {
                view! {
                    <img
                        src=src
                        alt=title.clone()
                        class="product-image"
                        referrerpolicy="no-referrer"
                        on:error=move |ev| {
                            let el: web_sys::Element = event_target(&ev);
                            el.remove();
                        }
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <TableRow>
            <TableCell>{id}</TableCell>
            <TableCell>
                <div class="product-images">{image_cell}</div>
            </TableCell>
            <TableCell>{title}</TableCell>
            <TableCell class="price text-right">{price}</TableCell>
            <TableCell class="description-cell">
                <span class="description-preview">"View description"</span>
                <div class="description-tooltip">{description}</div>
            </TableCell>
            <TableCell>
                <span class="category-badge">{category}</span>
            </TableCell>
        </TableRow>
    }
}
