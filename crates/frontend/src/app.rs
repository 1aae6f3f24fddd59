use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match load_config() {
        Ok(config) => view! { <ProductList config=config /> }.into_any(),
        Err(e) => {
            log::error!("{}", e);
            view! { <div class="alert alert--error">{e.to_string()}</div> }.into_any()
        }
    }
}
