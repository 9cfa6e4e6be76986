use serde_json::{json, Value};

use super::*;
use crate::domain::Platform;
use crate::forms::{
    Department, EventForm, JobPostingForm, LocalBusinessForm, OpeningHours, PersonForm, Ticket,
};

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|o| o.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

// ============================================================================
// Event
// ============================================================================

#[test]
fn test_event_start_date() {
    let mut form = EventForm {
        start_date: "2025-01-01".to_string(),
        start_time: "18:00".to_string(),
        ..EventForm::default()
    };
    assert_eq!(map_event(&form)["startDate"], "2025-01-01T18:00");
    form.start_time.clear();
    assert_eq!(map_event(&form)["startDate"], "2025-01-01");
}

#[test]
fn test_event_without_tickets_omits_offers() {
    let form = EventForm {
        name: "Launch".to_string(),
        status: "EventScheduled".to_string(),
        performer_type: "Person".to_string(),
        ..EventForm::default()
    };
    let schema = map_event(&form);
    assert_eq!(
        keys(&schema),
        vec![
            "@context",
            "@type",
            "name",
            "startDate",
            "eventStatus",
            "image",
            "description",
            "endDate",
            "eventAttendanceMode"
        ]
    );
    assert_eq!(schema["eventStatus"], "https://schema.org/EventScheduled");
    assert_eq!(schema["eventAttendanceMode"], "");
}

#[test]
fn test_event_offers_and_performer() {
    let mut form = EventForm {
        currency: "EUR".to_string(),
        performer_type: "MusicGroup".to_string(),
        performer_name: "The Band".to_string(),
        ..EventForm::default()
    };
    let first = form.tickets.ids().next().unwrap();
    *form.tickets.get_mut(first).unwrap() = Ticket {
        name: "General".to_string(),
        price: "20".to_string(),
        availability: "InStock".to_string(),
        ..Ticket::default()
    };
    // blank row is pruned
    form.tickets.add();

    let schema = map_event(&form);
    assert_eq!(
        schema["offers"],
        json!({
            "@type": "Offer",
            "name": "General",
            "price": "20",
            "priceCurrency": "EUR",
            "validFrom": "",
            "url": "",
            "availability": "https://schema.org/InStock"
        })
    );
    assert_eq!(
        keys(&schema).last().copied(),
        Some("performer")
    );
    assert_eq!(
        schema["performer"],
        json!({ "@type": "MusicGroup", "name": "The Band" })
    );

    form.tickets.push(Ticket {
        url: "https://t.example".to_string(),
        ..Ticket::default()
    });
    assert_eq!(map_event(&form)["offers"].as_array().unwrap().len(), 2);
}

// ============================================================================
// JobPosting
// ============================================================================

fn job() -> JobPostingForm {
    JobPostingForm {
        title: "Engineer".to_string(),
        company: "Acme".to_string(),
        ..JobPostingForm::default()
    }
}

#[test]
fn test_job_posting_on_site() {
    let form = JobPostingForm {
        city: "Hanoi".to_string(),
        company_url: "https://acme.example".to_string(),
        ..job()
    };
    let schema = map_job_posting(&form);
    assert_eq!(
        keys(&schema),
        vec![
            "@context",
            "@type",
            "title",
            "description",
            "hiringOrganization",
            "employmentType",
            "datePosted",
            "validThrough",
            "jobLocation"
        ]
    );
    assert_eq!(
        schema["hiringOrganization"],
        json!({ "@type": "Organization", "name": "Acme", "sameAs": "https://acme.example" })
    );
    assert_eq!(schema["jobLocation"]["address"]["addressLocality"], "Hanoi");
}

#[test]
fn test_job_posting_remote_defaults_country() {
    let form = JobPostingForm {
        remote: true,
        identifier: "ENG-1".to_string(),
        ..job()
    };
    let schema = map_job_posting(&form);
    assert!(schema.get("jobLocation").is_none());
    assert_eq!(schema["jobLocationType"], "TELECOMMUTE");
    assert_eq!(
        schema["applicantLocationRequirements"],
        json!({ "@type": "Country", "name": "VN" })
    );
    assert_eq!(
        schema["identifier"],
        json!({ "@type": "PropertyValue", "name": "Acme", "value": "ENG-1" })
    );
}

#[test]
fn test_job_posting_salary_bounds() {
    let range = JobPostingForm {
        salary_min: "1000".to_string(),
        salary_max: "2000".to_string(),
        currency: "USD".to_string(),
        salary_period: "MONTH".to_string(),
        ..job()
    };
    let schema = map_job_posting(&range);
    assert_eq!(
        keys(&schema["baseSalary"]["value"]),
        vec!["@type", "unitText", "minValue", "maxValue"]
    );

    let min_only = JobPostingForm {
        salary_max: String::new(),
        ..range.clone()
    };
    let value = &map_job_posting(&min_only)["baseSalary"]["value"];
    assert_eq!(keys(value), vec!["@type", "unitText", "value"]);
    assert_eq!(value["value"], "1000");

    let max_only = JobPostingForm {
        salary_min: String::new(),
        ..range
    };
    let value = &map_job_posting(&max_only)["baseSalary"]["value"];
    assert_eq!(keys(value), vec!["@type", "unitText", "maxValue"]);

    assert!(map_job_posting(&job()).get("baseSalary").is_none());
}

// ============================================================================
// LocalBusiness
// ============================================================================

fn hours(day: &str, opens: &str, closes: &str) -> OpeningHours {
    OpeningHours {
        day: day.to_string(),
        opens: opens.to_string(),
        closes: closes.to_string(),
    }
}

#[test]
fn test_local_business_minimal() {
    let schema = map_local_business(&LocalBusinessForm::default());
    assert_eq!(schema["@type"], "LocalBusiness");
    assert_eq!(
        keys(&schema),
        vec!["@context", "@type", "name", "image", "@id", "url", "telephone", "address"]
    );
}

#[test]
fn test_local_business_around_the_clock() {
    let mut form = LocalBusinessForm {
        open_24_7: true,
        ..LocalBusinessForm::default()
    };
    form.opening_hours.push(hours("Monday", "09:00", "17:00"));
    let schema = map_local_business(&form);
    assert_eq!(
        schema["openingHoursSpecification"],
        json!({
            "@type": "OpeningHoursSpecification",
            "dayOfWeek": [
                "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"
            ],
            "opens": "00:00",
            "closes": "23:59"
        })
    );
}

#[test]
fn test_local_business_full() {
    let mut form = LocalBusinessForm {
        business_type: "Restaurant".to_string(),
        name: "Pho 24".to_string(),
        price_range: "$$".to_string(),
        latitude: "21.02".to_string(),
        longitude: "105.85".to_string(),
        socials: "https://fb.example/pho, ,https://ig.example/pho".to_string(),
        ..LocalBusinessForm::default()
    };
    form.opening_hours.push(hours("Monday", "09:00", "17:00"));
    form.opening_hours.push(hours("Tuesday", "09:00", ""));

    let bar = form.departments.push(Department {
        name: "Bar".to_string(),
        ..Department::default()
    });
    form.departments.add();
    let hour = form.add_department_opening_hour(bar).unwrap();
    *form
        .departments
        .get_mut(bar)
        .unwrap()
        .opening_hours
        .get_mut(hour)
        .unwrap() = hours("Friday", "18:00", "23:00");

    let schema = map_local_business(&form);
    assert_eq!(
        keys(&schema)[8..],
        ["priceRange", "geo", "sameAs", "openingHoursSpecification", "department"]
    );
    assert_eq!(
        schema["sameAs"],
        json!(["https://fb.example/pho", "https://ig.example/pho"])
    );
    // the row without a closing time is pruned
    assert_eq!(schema["openingHoursSpecification"]["dayOfWeek"], "Monday");
    assert_eq!(
        schema["department"],
        json!({
            "@type": "LocalBusiness",
            "name": "Bar",
            "image": "",
            "telephone": "",
            "openingHoursSpecification": {
                "@type": "OpeningHoursSpecification",
                "dayOfWeek": "Friday",
                "opens": "18:00",
                "closes": "23:00"
            }
        })
    );
}

// ============================================================================
// Person
// ============================================================================

#[test]
fn test_person_optional_fields() {
    let schema = map_person(&PersonForm {
        name: "Ada".to_string(),
        ..PersonForm::default()
    });
    assert_eq!(keys(&schema), vec!["@context", "@type", "name", "url", "image"]);
}

#[test]
fn test_person_profiles() {
    let mut form = PersonForm {
        name: "Ada".to_string(),
        job_title: "Engineer".to_string(),
        company: "Acme".to_string(),
        ..PersonForm::default()
    };
    let a = form.social_profiles.add();
    form.social_profiles.set_platform(a, Some(Platform::LinkedIn));
    form.social_profiles.set_url(a, "https://linkedin.com/in/ada");
    form.social_profiles.add();

    let schema = map_person(&form);
    assert_eq!(schema["sameAs"], "https://linkedin.com/in/ada");
    assert_eq!(
        schema["worksFor"],
        json!({ "@type": "Organization", "name": "Acme" })
    );
    assert_eq!(
        keys(&schema)[5..],
        ["jobTitle", "worksFor", "sameAs"]
    );
}
