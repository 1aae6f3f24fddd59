//! Очистка ссылок на изображения из API каталога.
//!
//! API иногда отдаёт элементы массива `images` в виде `["https://..."` или
//! `"https://..."]`. Такие обёртки снимаются, всё остальное, что не похоже на
//! http(s)-ссылку, отбрасывается.

const WRAPPER_CHARS: [char; 3] = ['[', ']', '"'];
const ALLOWED_SCHEMES: [&str; 2] = ["http://", "https://"];

/// Возвращает очищенную ссылку или `None`, если строка не похожа на URL
pub fn sanitize_image_url(raw: &str) -> Option<String> {
    let cleaned: String = raw.chars().filter(|c| !WRAPPER_CHARS.contains(c)).collect();
    let cleaned = cleaned.trim();

    if ALLOWED_SCHEMES.iter().any(|scheme| cleaned.starts_with(scheme)) {
        Some(cleaned.to_string())
    } else {
        None
    }
}

/// Берёт первые `limit` элементов и оставляет только корректные ссылки
pub fn collect_image_urls(images: &[String], limit: usize) -> Vec<String> {
    images
        .iter()
        .take(limit)
        .filter_map(|raw| sanitize_image_url(raw))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url() {
        assert_eq!(
            sanitize_image_url("https://i.imgur.com/a.jpeg"),
            Some("https://i.imgur.com/a.jpeg".to_string())
        );
        assert_eq!(
            sanitize_image_url("http://example.com/b.png"),
            Some("http://example.com/b.png".to_string())
        );
    }

    #[test]
    fn test_wrapped_url() {
        assert_eq!(
            sanitize_image_url("[\"https://i.imgur.com/a.jpeg\""),
            Some("https://i.imgur.com/a.jpeg".to_string())
        );
        assert_eq!(
            sanitize_image_url(" \"https://i.imgur.com/b.jpeg\"] "),
            Some("https://i.imgur.com/b.jpeg".to_string())
        );
    }

    #[test]
    fn test_rejects_non_urls() {
        assert_eq!(sanitize_image_url(""), None);
        assert_eq!(sanitize_image_url("[]"), None);
        assert_eq!(sanitize_image_url("not a url"), None);
        assert_eq!(sanitize_image_url("ftp://example.com/a.png"), None);
        assert_eq!(sanitize_image_url("javascript:alert(1)"), None);
    }

    #[test]
    fn test_collect_only_looks_at_first_entries() {
        let images = vec![
            "garbage".to_string(),
            "[\"https://a/1.png\"".to_string(),
            "https://a/2.png".to_string(),
            "https://a/3.png".to_string(),
        ];
        assert_eq!(
            collect_image_urls(&images, 3),
            vec!["https://a/1.png".to_string(), "https://a/2.png".to_string()]
        );
        assert!(collect_image_urls(&[], 3).is_empty());
    }
}
