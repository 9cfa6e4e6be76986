use serde_json::{json, Map, Value};

use super::{collapse, date_time, field, schema_uri};
use crate::forms::{EventForm, Ticket};

fn offer(ticket: &Ticket, currency: &str) -> Value {
    json!({
        "@type": "Offer",
        "name": field(&ticket.name),
        "price": field(&ticket.price),
        "priceCurrency": currency,
        "validFrom": field(&ticket.valid_from),
        "url": field(&ticket.url),
        "availability": schema_uri(&ticket.availability),
    })
}

/// A ticket row counts once it has a name, a price or a url
fn is_sold(ticket: &Ticket) -> bool {
    [&ticket.name, &ticket.price, &ticket.url]
        .iter()
        .any(|f| !field(f).is_empty())
}

pub fn map_event(form: &EventForm) -> Value {
    let currency = field(&form.currency);
    let offers: Vec<Value> = form
        .tickets
        .values()
        .filter(|t| is_sold(t))
        .map(|t| offer(t, currency))
        .collect();

    let mut schema = Map::new();
    schema.insert("@context".into(), json!("https://schema.org"));
    schema.insert("@type".into(), json!("Event"));
    schema.insert("name".into(), json!(field(&form.name)));
    schema.insert(
        "startDate".into(),
        json!(date_time(&form.start_date, &form.start_time)),
    );
    schema.insert("eventStatus".into(), json!(schema_uri(&form.status)));
    if let Some(offers) = collapse(offers) {
        schema.insert("offers".into(), offers);
    }
    schema.insert("image".into(), json!(field(&form.image)));
    schema.insert("description".into(), json!(field(&form.description)));
    schema.insert(
        "endDate".into(),
        json!(date_time(&form.end_date, &form.end_time)),
    );
    schema.insert(
        "eventAttendanceMode".into(),
        json!(schema_uri(&form.attendance_mode)),
    );

    let performer_type = field(&form.performer_type);
    let performer_name = field(&form.performer_name);
    if !performer_type.is_empty() && !performer_name.is_empty() {
        schema.insert(
            "performer".into(),
            json!({ "@type": performer_type, "name": performer_name }),
        );
    }

    Value::Object(schema)
}
