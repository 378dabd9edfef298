//! Live-news feed items.

use serde::{Deserialize, Serialize};

/// One article from the live-news feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Headline.
    pub title: String,
    /// Short description or summary.
    pub description: String,
    /// Link to the article.
    pub url: String,
    /// Lead image, when the source provides one.
    pub image: Option<String>,
    /// Publisher name.
    pub source: String,
    /// Publication timestamp as reported by the source (RFC 3339).
    #[serde(rename = "publishedAt")]
    pub published_at: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_article_serde_field_names() {
        let article = NewsArticle {
            title: "Budget tabled".into(),
            description: "Summary".into(),
            url: "https://example.com/a".into(),
            image: None,
            source: "Wire".into(),
            published_at: "2024-02-01T09:30:00Z".into(),
        };
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["publishedAt"], "2024-02-01T09:30:00Z");
        assert!(json["image"].is_null());
    }
}
