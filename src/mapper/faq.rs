use serde_json::{json, Value};

use super::{collapse_or, field};
use crate::forms::FaqForm;

pub fn map_faq(form: &FaqForm) -> Value {
    let entities: Vec<Value> = form
        .items
        .values()
        .filter(|item| !field(&item.question).is_empty() || !field(&item.answer).is_empty())
        .map(|item| {
            json!({
                "@type": "Question",
                "name": field(&item.question),
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": field(&item.answer),
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": collapse_or(entities, json!([])),
    })
}
