use serde_json::{json, Map, Value};

use super::{collapse, field};
use crate::forms::PersonForm;

pub fn map_person(form: &PersonForm) -> Value {
    let mut schema = Map::new();
    schema.insert("@context".into(), json!("https://schema.org/"));
    schema.insert("@type".into(), json!("Person"));
    schema.insert("name".into(), json!(field(&form.name)));
    schema.insert("url".into(), json!(field(&form.url)));
    schema.insert("image".into(), json!(field(&form.image)));

    let job_title = field(&form.job_title);
    if !job_title.is_empty() {
        schema.insert("jobTitle".into(), json!(job_title));
    }

    let company = field(&form.company);
    if !company.is_empty() {
        schema.insert(
            "worksFor".into(),
            json!({ "@type": "Organization", "name": company }),
        );
    }

    // platform choice only drives the selectors; the url is what gets emitted
    let profiles: Vec<Value> = form
        .social_profiles
        .rows()
        .values()
        .map(|profile| field(&profile.url))
        .filter(|url| !url.is_empty())
        .map(|url| json!(url))
        .collect();
    if let Some(same_as) = collapse(profiles) {
        schema.insert("sameAs".into(), same_as);
    }

    Value::Object(schema)
}
