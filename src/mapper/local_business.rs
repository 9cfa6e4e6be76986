use serde_json::{json, Map, Value};

use super::{collapse, field, or_default};
use crate::domain::{catalog, RowList};
use crate::forms::{Department, LocalBusinessForm, OpeningHours};

/// Rows with a day, an opening and a closing time
fn opening_hours<const FLOOR: usize>(rows: &RowList<OpeningHours, FLOOR>) -> Vec<Value> {
    rows.values()
        .filter(|row| {
            !field(&row.day).is_empty()
                && !field(&row.opens).is_empty()
                && !field(&row.closes).is_empty()
        })
        .map(|row| {
            json!({
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": field(&row.day),
                "opens": field(&row.opens),
                "closes": field(&row.closes),
            })
        })
        .collect()
}

fn around_the_clock() -> Value {
    json!({
        "@type": "OpeningHoursSpecification",
        "dayOfWeek": catalog::ALL_WEEK,
        "opens": "00:00",
        "closes": "23:59",
    })
}

fn department(dept: &Department) -> Value {
    let mut schema = Map::new();
    schema.insert(
        "@type".into(),
        json!(or_default(&dept.department_type, "LocalBusiness")),
    );
    schema.insert("name".into(), json!(field(&dept.name)));
    schema.insert("image".into(), json!(field(&dept.image)));
    schema.insert("telephone".into(), json!(field(&dept.phone)));
    if let Some(hours) = collapse(opening_hours(&dept.opening_hours)) {
        schema.insert("openingHoursSpecification".into(), hours);
    }
    Value::Object(schema)
}

pub fn map_local_business(form: &LocalBusinessForm) -> Value {
    let mut schema = Map::new();
    schema.insert("@context".into(), json!("https://schema.org"));
    schema.insert(
        "@type".into(),
        json!(or_default(&form.business_type, "LocalBusiness")),
    );
    schema.insert("name".into(), json!(field(&form.name)));
    schema.insert("image".into(), json!(field(&form.image)));
    schema.insert("@id".into(), json!(field(&form.id)));
    schema.insert("url".into(), json!(field(&form.url)));
    schema.insert("telephone".into(), json!(field(&form.phone)));
    schema.insert(
        "address".into(),
        json!({
            "@type": "PostalAddress",
            "streetAddress": field(&form.street),
            "addressLocality": field(&form.city),
            "postalCode": field(&form.zip),
            "addressCountry": field(&form.country),
            "addressRegion": field(&form.region),
        }),
    );

    let price_range = field(&form.price_range);
    if !price_range.is_empty() {
        schema.insert("priceRange".into(), json!(price_range));
    }

    let latitude = field(&form.latitude);
    let longitude = field(&form.longitude);
    if !latitude.is_empty() && !longitude.is_empty() {
        schema.insert(
            "geo".into(),
            json!({
                "@type": "GeoCoordinates",
                "latitude": latitude,
                "longitude": longitude,
            }),
        );
    }

    let socials: Vec<Value> = form
        .socials
        .split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(|url| json!(url))
        .collect();
    if let Some(same_as) = collapse(socials) {
        schema.insert("sameAs".into(), same_as);
    }

    let hours = if form.open_24_7 {
        Some(around_the_clock())
    } else {
        collapse(opening_hours(&form.opening_hours))
    };
    if let Some(hours) = hours {
        schema.insert("openingHoursSpecification".into(), hours);
    }

    let departments: Vec<Value> = form
        .departments
        .values()
        .filter(|dept| !field(&dept.name).is_empty())
        .map(department)
        .collect();
    if let Some(departments) = collapse(departments) {
        schema.insert("department".into(), departments);
    }

    Value::Object(schema)
}
