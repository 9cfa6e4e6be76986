use serde_json::{json, Value};

use super::{collapse_or, field};
use crate::forms::BreadcrumbForm;

/// Every crumb is listed, blank or not, with its 1-based position
pub fn map_breadcrumb(form: &BreadcrumbForm) -> Value {
    let items: Vec<Value> = form
        .items
        .values()
        .enumerate()
        .map(|(i, item)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": field(&item.name),
                "item": field(&item.url),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org/",
        "@type": "BreadcrumbList",
        "itemListElement": collapse_or(items, json!([])),
    })
}
