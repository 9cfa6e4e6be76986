//! Required fields and formats per form

use super::{FieldKind, FieldPath, FormValidator};
use crate::domain::catalog;
use crate::forms::{
    ArticleForm, BreadcrumbForm, EventForm, FaqForm, HowToForm, JobPostingForm,
    LocalBusinessForm, OpeningHours, PersonForm, RecipeForm, VideoForm, WebsiteForm,
};

pub(super) fn article(form: &ArticleForm, v: &mut FormValidator) {
    let root = FieldPath::root("article");
    v.require(root.property("headline"), &form.headline, FieldKind::Text);
    for (i, image) in form.images.values().enumerate() {
        v.optional(root.property("images").index(i), image, FieldKind::Url);
    }
    v.optional(root.property("publisher_logo"), &form.publisher_logo, FieldKind::Url);
    v.optional(root.property("date_published"), &form.date_published, FieldKind::Date);
}

pub(super) fn breadcrumb(form: &BreadcrumbForm, v: &mut FormValidator) {
    let items = FieldPath::root("breadcrumb").property("items");
    for (i, item) in form.items.values().enumerate() {
        // crumbs may point at site-relative paths
        v.require(items.index(i).property("name"), &item.name, FieldKind::Text);
        v.require(items.index(i).property("url"), &item.url, FieldKind::Text);
    }
}

pub(super) fn event(form: &EventForm, v: &mut FormValidator) {
    let root = FieldPath::root("event");
    v.require(root.property("name"), &form.name, FieldKind::Text);
    v.require(root.property("start_date"), &form.start_date, FieldKind::Date);
    v.optional(root.property("start_time"), &form.start_time, FieldKind::Time);
    v.optional(root.property("end_date"), &form.end_date, FieldKind::Date);
    v.optional(root.property("end_time"), &form.end_time, FieldKind::Time);
    v.optional(root.property("image"), &form.image, FieldKind::Url);

    let tickets = root.property("tickets");
    for (i, ticket) in form.tickets.values().enumerate() {
        let path = tickets.index(i);
        v.optional(path.property("price"), &ticket.price, FieldKind::Number);
        v.optional(path.property("valid_from"), &ticket.valid_from, FieldKind::Date);
        v.optional(path.property("url"), &ticket.url, FieldKind::Url);
        let availability = ticket.availability.trim();
        if !availability.is_empty() && !catalog::TICKET_AVAILABILITY.contains(&availability) {
            v.malformed(
                path.property("availability"),
                availability,
                "is not a ticket availability",
            );
        }
    }
}

pub(super) fn faq(form: &FaqForm, v: &mut FormValidator) {
    let items = FieldPath::root("faq").property("items");
    for (i, item) in form.items.values().enumerate() {
        let question = item.question.trim();
        let answer = item.answer.trim();
        // blank rows are ignored, half-filled ones are not
        if question.is_empty() && !answer.is_empty() {
            v.missing(items.index(i).property("question"));
        }
        if answer.is_empty() && !question.is_empty() {
            v.missing(items.index(i).property("answer"));
        }
    }
}

pub(super) fn howto(form: &HowToForm, v: &mut FormValidator) {
    let root = FieldPath::root("howto");
    v.require(root.property("name"), &form.name, FieldKind::Text);
    v.optional(root.property("total_time"), &form.total_time, FieldKind::Integer);
    v.optional(root.property("cost"), &form.cost, FieldKind::Number);

    let steps = root.property("steps");
    let mut any_step = false;
    for (i, step) in form.steps.values().enumerate() {
        any_step |= [&step.instruction, &step.image, &step.name, &step.url]
            .iter()
            .any(|f| !f.trim().is_empty());
        v.optional(steps.index(i).property("image"), &step.image, FieldKind::Url);
        v.optional(steps.index(i).property("url"), &step.url, FieldKind::Url);
    }
    if !any_step {
        v.missing(steps);
    }
}

pub(super) fn job_posting(form: &JobPostingForm, v: &mut FormValidator) {
    let root = FieldPath::root("job_posting");
    v.require(root.property("title"), &form.title, FieldKind::Text);
    v.require(root.property("description"), &form.description, FieldKind::Text);
    v.require(root.property("company"), &form.company, FieldKind::Text);
    v.require(root.property("date_posted"), &form.date_posted, FieldKind::Date);
    v.optional(root.property("valid_through"), &form.valid_through, FieldKind::Date);
    v.optional(root.property("company_url"), &form.company_url, FieldKind::Url);
    v.optional(root.property("company_logo"), &form.company_logo, FieldKind::Url);
    v.optional(root.property("salary_min"), &form.salary_min, FieldKind::Number);
    v.optional(root.property("salary_max"), &form.salary_max, FieldKind::Number);
}

fn opening_hours<const FLOOR: usize>(
    path: FieldPath,
    rows: &crate::domain::RowList<OpeningHours, FLOOR>,
    v: &mut FormValidator,
) {
    for (i, row) in rows.values().enumerate() {
        let path = path.index(i);
        v.optional(path.property("day"), &row.day, FieldKind::Weekday);
        v.optional(path.property("opens"), &row.opens, FieldKind::Time);
        v.optional(path.property("closes"), &row.closes, FieldKind::Time);
    }
}

fn business_type(path: FieldPath, value: &str, v: &mut FormValidator) {
    let value = value.trim();
    if !value.is_empty() && !catalog::is_business_type(value) {
        v.malformed(path, value, "is not a LocalBusiness type");
    }
}

pub(super) fn local_business(form: &LocalBusinessForm, v: &mut FormValidator) {
    let root = FieldPath::root("local_business");
    v.require(root.property("name"), &form.name, FieldKind::Text);
    business_type(root.property("business_type"), &form.business_type, v);
    v.optional(root.property("image"), &form.image, FieldKind::Url);
    v.optional(root.property("url"), &form.url, FieldKind::Url);
    v.optional(root.property("latitude"), &form.latitude, FieldKind::Number);
    v.optional(root.property("longitude"), &form.longitude, FieldKind::Number);
    for (i, social) in form
        .socials
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
    {
        v.optional(root.property("socials").index(i), social, FieldKind::Url);
    }
    if !form.open_24_7 {
        opening_hours(root.property("opening_hours"), &form.opening_hours, v);
    }

    let departments = root.property("departments");
    for (i, dept) in form.departments.values().enumerate() {
        let path = departments.index(i);
        business_type(path.property("department_type"), &dept.department_type, v);
        v.optional(path.property("image"), &dept.image, FieldKind::Url);
        opening_hours(path.property("opening_hours"), &dept.opening_hours, v);
    }
}

pub(super) fn person(form: &PersonForm, v: &mut FormValidator) {
    let root = FieldPath::root("person");
    v.require(root.property("name"), &form.name, FieldKind::Text);
    v.optional(root.property("url"), &form.url, FieldKind::Url);
    v.optional(root.property("image"), &form.image, FieldKind::Url);
    for (i, profile) in form.social_profiles.rows().values().enumerate() {
        v.optional(
            root.property("social_profiles").index(i).property("url"),
            &profile.url,
            FieldKind::Url,
        );
    }
}

pub(super) fn video(form: &VideoForm, v: &mut FormValidator) {
    let root = FieldPath::root("video");
    v.require(root.property("name"), &form.name, FieldKind::Text);
    v.require(root.property("upload_date"), &form.upload_date, FieldKind::Date);
    v.optional(root.property("minutes"), &form.minutes, FieldKind::Integer);
    v.optional(root.property("seconds"), &form.seconds, FieldKind::Integer);
    for (i, thumb) in form.thumbnails.values().enumerate() {
        v.optional(root.property("thumbnails").index(i), thumb, FieldKind::Url);
    }
}

pub(super) fn website(form: &WebsiteForm, v: &mut FormValidator) {
    let root = FieldPath::root("website");
    v.require(root.property("name"), &form.name, FieldKind::Text);
    v.require(root.property("url"), &form.url, FieldKind::Url);
    v.optional(root.property("search_url"), &form.search_url, FieldKind::Url);
}

pub(super) fn recipe(form: &RecipeForm, v: &mut FormValidator) {
    let root = FieldPath::root("recipe");
    v.require(root.property("name"), &form.name, FieldKind::Text);
    v.optional(root.property("prep_time"), &form.prep_time, FieldKind::Integer);
    v.optional(root.property("cook_time"), &form.cook_time, FieldKind::Integer);
    for (i, thumb) in form.thumbnails.values().enumerate() {
        v.optional(root.property("thumbnails").index(i), thumb, FieldKind::Url);
    }
}
