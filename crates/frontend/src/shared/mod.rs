pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod image_utils;
pub mod list_utils;
pub mod pagination;
