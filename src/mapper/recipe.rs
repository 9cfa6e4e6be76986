use serde_json::{json, Map, Value};

use super::{collapse_or, field, minutes_duration, or_default, RecipeRowBinding};
use crate::forms::{RecipeForm, RecipeReview};

/// Leading integer of a string, read the way a browser's `parseInt` reads
/// it: optional sign, then decimal digits or `0x` hex digits, leading
/// whitespace ignored. `None` when no digit leads.
pub(crate) fn parse_int_prefix(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let (sign, rest) = match value.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, value.strip_prefix('+').unwrap_or(value)),
    };
    let (radix, digits) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    let magnitude = if radix == 10 {
        digits.parse::<f64>().ok()?
    } else {
        digits
            .chars()
            .filter_map(|c| c.to_digit(16))
            .fold(0.0, |n, d| n * 16.0 + f64::from(d))
    };
    Some(sign * magnitude)
}

/// Integral number in browser notation: shortest digits padded with zeros,
/// exponent form from 1e21 up
fn format_integral(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let sign = if n < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", n.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: usize = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if exponent >= 21 {
        let (head, tail) = digits.split_at(1);
        let fraction = if tail.is_empty() {
            String::new()
        } else {
            format!(".{}", tail)
        };
        format!("{}{}{}e+{}", sign, head, fraction, exponent)
    } else {
        let zeros = (exponent + 1).saturating_sub(digits.len());
        format!("{}{}{}", sign, digits, "0".repeat(zeros))
    }
}

/// `PT{prep + cook}M` when both are set; `PTNaNM` when either has no
/// leading integer
fn total_time(prep: &str, cook: &str) -> String {
    let (prep, cook) = (field(prep), field(cook));
    if prep.is_empty() || cook.is_empty() {
        return String::new();
    }
    match (parse_int_prefix(prep), parse_int_prefix(cook)) {
        (Some(p), Some(c)) => format!("PT{}M", format_integral(p + c)),
        _ => "PTNaNM".to_string(),
    }
}

fn non_empty<'a>(values: impl Iterator<Item = &'a String>) -> impl Iterator<Item = &'a str> {
    values.map(|v| field(v)).filter(|v| !v.is_empty())
}

fn review(review: &RecipeReview) -> Value {
    json!({
        "@type": "Review",
        "name": field(&review.name),
        "reviewBody": field(&review.body),
        "author": {
            "@type": "Person",
            "name": field(&review.author),
        },
    })
}

fn has_content(review: &RecipeReview) -> bool {
    [&review.name, &review.body, &review.author]
        .iter()
        .any(|f| !field(f).is_empty())
}

fn ingredients(form: &RecipeForm, binding: RecipeRowBinding) -> Vec<Value> {
    match binding {
        RecipeRowBinding::Legacy => Vec::new(),
        RecipeRowBinding::Direct => non_empty(form.ingredients.values()).map(|i| json!(i)).collect(),
    }
}

fn instructions(form: &RecipeForm, binding: RecipeRowBinding) -> Vec<Value> {
    match binding {
        RecipeRowBinding::Legacy => Vec::new(),
        RecipeRowBinding::Direct => non_empty(form.steps.values())
            .map(|text| json!({ "@type": "HowToStep", "text": text }))
            .collect(),
    }
}

pub fn map_recipe(form: &RecipeForm, binding: RecipeRowBinding) -> Value {
    let images: Vec<Value> = non_empty(form.thumbnails.values()).map(|url| json!(url)).collect();
    let reviews: Vec<Value> = form
        .reviews
        .values()
        .filter(|r| has_content(r))
        .map(review)
        .collect();

    let mut schema = Map::new();
    schema.insert("@context".into(), json!("https://schema.org/"));
    schema.insert("@type".into(), json!("Recipe"));
    schema.insert("name".into(), json!(field(&form.name)));
    schema.insert("image".into(), collapse_or(images, json!(["", ""])));
    schema.insert("description".into(), json!(field(&form.description)));
    schema.insert("keywords".into(), json!(field(&form.keywords)));
    schema.insert(
        "author".into(),
        json!({ "@type": "Person", "name": field(&form.creator) }),
    );
    schema.insert("prepTime".into(), json!(minutes_duration(&form.prep_time)));
    schema.insert("cookTime".into(), json!(minutes_duration(&form.cook_time)));
    schema.insert(
        "totalTime".into(),
        json!(total_time(&form.prep_time, &form.cook_time)),
    );
    schema.insert(
        "recipeCategory".into(),
        json!(or_default(&form.category, "appetizer")),
    );
    schema.insert(
        "nutrition".into(),
        json!({
            "@type": "NutritionInformation",
            "calories": field(&form.calories),
        }),
    );
    schema.insert(
        "recipeIngredient".into(),
        collapse_or(ingredients(form, binding), json!(["", ""])),
    );
    schema.insert(
        "recipeInstructions".into(),
        collapse_or(
            instructions(form, binding),
            json!([
                { "@type": "HowToStep", "text": "" },
                { "@type": "HowToStep", "text": "" },
            ]),
        ),
    );
    schema.insert(
        "review".into(),
        collapse_or(
            reviews,
            json!({
                "@type": "Review",
                "name": "ggg",
                "reviewBody": "",
                "author": { "@type": "Person", "name": "" },
            }),
        ),
    );

    Value::Object(schema)
}
