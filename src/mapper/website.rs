use serde_json::{json, Map, Value};

use super::field;
use crate::forms::WebsiteForm;

pub fn map_website(form: &WebsiteForm) -> Value {
    let mut schema = Map::new();
    schema.insert("@context".into(), json!("https://schema.org/"));
    schema.insert("@type".into(), json!("WebSite"));
    schema.insert("name".into(), json!(field(&form.name)));
    schema.insert("url".into(), json!(field(&form.url)));

    let search_url = field(&form.search_url);
    if !search_url.is_empty() {
        schema.insert(
            "potentialAction".into(),
            json!({
                "@type": "SearchAction",
                "target": format!(
                    "{}{{search_term_string}}{}",
                    search_url,
                    field(&form.search_suffix)
                ),
                "query-input": "required name=search_term_string",
            }),
        );
    }

    Value::Object(schema)
}
