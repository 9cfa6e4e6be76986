use serde_json::{json, Value};

use super::{collapse_or, field, or_default};
use crate::forms::VideoForm;

pub fn map_video(form: &VideoForm) -> Value {
    let thumbnails: Vec<Value> = form
        .thumbnails
        .values()
        .map(|url| field(url))
        .filter(|url| !url.is_empty())
        .map(|url| json!(url))
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "VideoObject",
        "name": field(&form.name),
        "description": field(&form.description),
        "uploadDate": field(&form.upload_date),
        "duration": format!(
            "PT{}M{}S",
            or_default(&form.minutes, "0"),
            or_default(&form.seconds, "0")
        ),
        "thumbnailUrl": collapse_or(thumbnails, json!("")),
    })
}
