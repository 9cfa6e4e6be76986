use serde_json::{json, Map, Value};

use super::{field, or_default};
use crate::forms::JobPostingForm;

fn hiring_organization(form: &JobPostingForm) -> Value {
    let mut org = Map::new();
    org.insert("@type".into(), json!("Organization"));
    org.insert("name".into(), json!(field(&form.company)));
    let url = field(&form.company_url);
    if !url.is_empty() {
        org.insert("sameAs".into(), json!(url));
    }
    let logo = field(&form.company_logo);
    if !logo.is_empty() {
        org.insert("logo".into(), json!(logo));
    }
    Value::Object(org)
}

/// `None` unless at least one bound is set. A lone minimum is a point value.
fn base_salary(form: &JobPostingForm) -> Option<Value> {
    let min = field(&form.salary_min);
    let max = field(&form.salary_max);
    if min.is_empty() && max.is_empty() {
        return None;
    }

    let mut value = Map::new();
    value.insert("@type".into(), json!("QuantitativeValue"));
    value.insert("unitText".into(), json!(field(&form.salary_period)));
    match (min.is_empty(), max.is_empty()) {
        (false, true) => {
            value.insert("value".into(), json!(min));
        }
        (true, false) => {
            value.insert("maxValue".into(), json!(max));
        }
        _ => {
            value.insert("minValue".into(), json!(min));
            value.insert("maxValue".into(), json!(max));
        }
    }

    Some(json!({
        "@type": "MonetaryAmount",
        "currency": field(&form.currency),
        "value": Value::Object(value),
    }))
}

pub fn map_job_posting(form: &JobPostingForm) -> Value {
    let mut schema = Map::new();
    schema.insert("@context".into(), json!("https://schema.org/"));
    schema.insert("@type".into(), json!("JobPosting"));
    schema.insert("title".into(), json!(field(&form.title)));
    schema.insert("description".into(), json!(field(&form.description)));
    schema.insert("hiringOrganization".into(), hiring_organization(form));
    schema.insert("employmentType".into(), json!(field(&form.employment_type)));
    schema.insert("datePosted".into(), json!(field(&form.date_posted)));
    schema.insert("validThrough".into(), json!(field(&form.valid_through)));

    let identifier = field(&form.identifier);
    if !identifier.is_empty() {
        schema.insert(
            "identifier".into(),
            json!({
                "@type": "PropertyValue",
                "name": field(&form.company),
                "value": identifier,
            }),
        );
    }
    let industry = field(&form.industry);
    if !industry.is_empty() {
        schema.insert("industry".into(), json!(industry));
    }
    let work_hours = field(&form.work_hours);
    if !work_hours.is_empty() {
        schema.insert("workHours".into(), json!(work_hours));
    }

    if form.remote {
        schema.insert("jobLocationType".into(), json!("TELECOMMUTE"));
        schema.insert(
            "applicantLocationRequirements".into(),
            json!({
                "@type": "Country",
                "name": or_default(&form.country, "VN"),
            }),
        );
    } else {
        schema.insert(
            "jobLocation".into(),
            json!({
                "@type": "Place",
                "address": {
                    "@type": "PostalAddress",
                    "streetAddress": field(&form.street),
                    "addressLocality": field(&form.city),
                    "addressRegion": field(&form.region),
                    "postalCode": field(&form.zip),
                    "addressCountry": field(&form.country),
                },
            }),
        );
    }

    if let Some(salary) = base_salary(form) {
        schema.insert("baseSalary".into(), salary);
    }

    Value::Object(schema)
}
