use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// Категория товара, как её отдаёт API каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub slug: Option<String>,

    /// Обложка категории (в таблице не используется)
    #[serde(default)]
    pub image: Option<String>,
}

// ============================================================================
// Product
// ============================================================================

/// Товар каталога. Неизменяем после загрузки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,

    pub title: String,

    pub price: f64,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub category: Option<Category>,

    /// Ссылки на изображения. API иногда присылает их обёрнутыми в `[` `]` и кавычки,
    /// очистка выполняется на стороне отображения.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,

    #[serde(default)]
    pub slug: Option<String>,
}

impl Product {
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.name.as_str())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
