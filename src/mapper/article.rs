use serde_json::{json, Value};

use super::{collapse_or, field, or_default};
use crate::forms::ArticleForm;

/// Article, NewsArticle or BlogPosting. Image rows are emitted unpruned.
pub fn map_article(form: &ArticleForm) -> Value {
    let images: Vec<Value> = form.images.values().map(|url| json!(field(url))).collect();

    json!({
        "@context": "https://schema.org",
        "@type": or_default(&form.article_type, "Article"),
        "headline": field(&form.headline),
        "image": collapse_or(images, json!([])),
        "author": {
            "@type": field(&form.author_type),
            "name": field(&form.author_name),
        },
        "publisher": {
            "@type": "Organization",
            "name": field(&form.publisher_name),
            "logo": {
                "@type": "ImageObject",
                "url": field(&form.publisher_logo),
            },
        },
        "datePublished": field(&form.date_published),
    })
}
