use serde_json::{json, Map, Value};

use super::{collapse, field, minutes_duration};
use crate::forms::{HowToForm, HowToStep};
use crate::domain::RowList;

fn named_items<const FLOOR: usize>(rows: &RowList<String, FLOOR>, item_type: &str) -> Vec<Value> {
    rows.values()
        .map(|name| field(name))
        .filter(|name| !name.is_empty())
        .map(|name| json!({ "@type": item_type, "name": name }))
        .collect()
}

fn has_content(step: &HowToStep) -> bool {
    [&step.instruction, &step.image, &step.name, &step.url]
        .iter()
        .any(|f| !field(f).is_empty())
}

pub fn map_howto(form: &HowToForm) -> Value {
    let mut schema = Map::new();
    schema.insert("@context".into(), json!("https://schema.org/"));
    schema.insert("@type".into(), json!("HowTo"));
    schema.insert("name".into(), json!(field(&form.name)));
    schema.insert("description".into(), json!(field(&form.description)));
    schema.insert("totalTime".into(), json!(minutes_duration(&form.total_time)));

    let cost = field(&form.cost);
    let currency = field(&form.currency);
    if !cost.is_empty() && !currency.is_empty() {
        schema.insert(
            "estimatedCost".into(),
            json!({
                "@type": "MonetaryAmount",
                "currency": currency,
                "value": cost,
            }),
        );
    }

    if let Some(supply) = collapse(named_items(&form.supplies, "HowToSupply")) {
        schema.insert("supply".into(), supply);
    }
    if let Some(tool) = collapse(named_items(&form.tools, "HowToTool")) {
        schema.insert("tool".into(), tool);
    }

    // steps are never collapsed
    let steps: Vec<Value> = form
        .steps
        .values()
        .filter(|step| has_content(step))
        .map(|step| {
            json!({
                "@type": "HowToStep",
                "text": field(&step.instruction),
                "image": field(&step.image),
                "name": field(&step.name),
                "url": field(&step.url),
            })
        })
        .collect();
    schema.insert("step".into(), Value::Array(steps));

    Value::Object(schema)
}
