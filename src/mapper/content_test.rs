use serde_json::{json, Value};

use super::*;
use crate::forms::{
    ArticleForm, BreadcrumbForm, BreadcrumbItem, FaqForm, FaqItem, HowToForm, HowToStep,
    RecipeForm, RecipeReview, VideoForm, WebsiteForm,
};

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_object()
        .map(|o| o.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

fn breadcrumb(items: &[(&str, &str)]) -> BreadcrumbForm {
    let mut form = BreadcrumbForm::default();
    let ids: Vec<_> = form.items.ids().collect();
    for id in ids {
        form.items.remove(id);
    }
    // the floor keeps one blank row
    let first = form.items.ids().next().unwrap();
    for (i, (name, url)) in items.iter().enumerate() {
        let item = BreadcrumbItem {
            name: name.to_string(),
            url: url.to_string(),
        };
        if i == 0 {
            *form.items.get_mut(first).unwrap() = item;
        } else {
            form.items.push(item);
        }
    }
    form
}

// ============================================================================
// Article
// ============================================================================

#[test]
fn test_article_defaults_and_order() {
    let schema = map_article(&ArticleForm::default());
    assert_eq!(
        keys(&schema),
        vec![
            "@context",
            "@type",
            "headline",
            "image",
            "author",
            "publisher",
            "datePublished"
        ]
    );
    assert_eq!(schema["@context"], "https://schema.org");
    assert_eq!(schema["@type"], "Article");
    // the single image row is emitted even when blank
    assert_eq!(schema["image"], "");
    assert_eq!(schema["publisher"]["logo"]["@type"], "ImageObject");
}

#[test]
fn test_article_images_and_type() {
    let mut form = ArticleForm {
        article_type: "BlogPosting".to_string(),
        headline: " Hello ".to_string(),
        author_type: "Person".to_string(),
        author_name: "Ada".to_string(),
        ..ArticleForm::default()
    };
    let first = form.images.ids().next().unwrap();
    *form.images.get_mut(first).unwrap() = "https://a.example/1.png".to_string();
    form.images.push("https://a.example/2.png".to_string());

    let schema = map_article(&form);
    assert_eq!(schema["@type"], "BlogPosting");
    assert_eq!(schema["headline"], "Hello");
    assert_eq!(
        schema["image"],
        json!(["https://a.example/1.png", "https://a.example/2.png"])
    );
    assert_eq!(schema["author"], json!({ "@type": "Person", "name": "Ada" }));
}

// ============================================================================
// Breadcrumb
// ============================================================================

#[test]
fn test_breadcrumb_two_items() {
    let form = breadcrumb(&[("Home", "/"), ("Shop", "/shop")]);
    let schema = map_breadcrumb(&form);
    assert_eq!(schema["@context"], "https://schema.org/");
    assert_eq!(
        schema["itemListElement"],
        json!([
            { "@type": "ListItem", "position": 1, "name": "Home", "item": "/" },
            { "@type": "ListItem", "position": 2, "name": "Shop", "item": "/shop" }
        ])
    );
}

#[test]
fn test_breadcrumb_single_item_collapses() {
    let form = breadcrumb(&[("Home", "/")]);
    let schema = map_breadcrumb(&form);
    assert_eq!(schema["itemListElement"]["position"], 1);
}

#[test]
fn test_breadcrumb_keeps_blank_rows() {
    let schema = map_breadcrumb(&BreadcrumbForm::default());
    let items = schema["itemListElement"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1]["name"], "");
}

// ============================================================================
// FAQ
// ============================================================================

#[test]
fn test_faq_single_pair_is_an_object() {
    let mut form = FaqForm::default();
    form.items.push(FaqItem {
        question: "Do you ship?".to_string(),
        answer: "Yes.".to_string(),
    });
    form.items.add();
    let schema = map_faq(&form);
    assert_eq!(
        schema["mainEntity"],
        json!({
            "@type": "Question",
            "name": "Do you ship?",
            "acceptedAnswer": { "@type": "Answer", "text": "Yes." }
        })
    );
}

#[test]
fn test_faq_without_entries() {
    let schema = map_faq(&FaqForm::default());
    assert_eq!(schema["mainEntity"], json!([]));
}

// ============================================================================
// HowTo
// ============================================================================

#[test]
fn test_howto_total_time_and_omitted_sections() {
    let form = HowToForm {
        name: "Brew tea".to_string(),
        total_time: "30".to_string(),
        cost: "2".to_string(),
        ..HowToForm::default()
    };
    let schema = map_howto(&form);
    assert_eq!(schema["totalTime"], "PT30M");
    assert_eq!(
        keys(&schema),
        vec!["@context", "@type", "name", "description", "totalTime", "step"]
    );
    assert_eq!(schema["step"], json!([]));
}

#[test]
fn test_howto_supplies_tools_and_steps() {
    let mut form = HowToForm {
        cost: "5".to_string(),
        currency: "USD".to_string(),
        ..HowToForm::default()
    };
    form.supplies.push("Tea".to_string());
    form.supplies.push("  ".to_string());
    form.tools.push("Kettle".to_string());
    form.tools.push("Cup".to_string());
    let first = form.steps.ids().next().unwrap();
    form.steps.get_mut(first).unwrap().instruction = "Boil water".to_string();

    let schema = map_howto(&form);
    assert_eq!(
        keys(&schema),
        vec![
            "@context",
            "@type",
            "name",
            "description",
            "totalTime",
            "estimatedCost",
            "supply",
            "tool",
            "step"
        ]
    );
    assert_eq!(
        schema["estimatedCost"],
        json!({ "@type": "MonetaryAmount", "currency": "USD", "value": "5" })
    );
    assert_eq!(schema["supply"], json!({ "@type": "HowToSupply", "name": "Tea" }));
    assert_eq!(schema["tool"].as_array().unwrap().len(), 2);
    // a single step stays in an array
    assert_eq!(
        schema["step"],
        json!([{
            "@type": "HowToStep",
            "text": "Boil water",
            "image": "",
            "name": "",
            "url": ""
        }])
    );
}

// ============================================================================
// Video
// ============================================================================

#[test]
fn test_video_duration_and_thumbnails() {
    let mut form = VideoForm {
        minutes: "3".to_string(),
        ..VideoForm::default()
    };
    let schema = map_video(&form);
    assert_eq!(schema["duration"], "PT3M0S");
    assert_eq!(schema["thumbnailUrl"], "");

    form.thumbnails.push("https://v.example/a.jpg".to_string());
    form.thumbnails.push("https://v.example/b.jpg".to_string());
    let schema = map_video(&form);
    assert_eq!(
        schema["thumbnailUrl"],
        json!(["https://v.example/a.jpg", "https://v.example/b.jpg"])
    );
}

// ============================================================================
// Website
// ============================================================================

#[test]
fn test_website_search_action() {
    let mut form = WebsiteForm {
        name: "Example".to_string(),
        url: "https://example.com".to_string(),
        ..WebsiteForm::default()
    };
    assert!(map_website(&form).get("potentialAction").is_none());

    form.search_url = "https://example.com/search?q=".to_string();
    form.search_suffix = "&src=ld".to_string();
    let schema = map_website(&form);
    assert_eq!(
        schema["potentialAction"],
        json!({
            "@type": "SearchAction",
            "target": "https://example.com/search?q={search_term_string}&src=ld",
            "query-input": "required name=search_term_string"
        })
    );
}

// ============================================================================
// Recipe
// ============================================================================

#[test]
fn test_recipe_placeholders() {
    let schema = map_recipe(&RecipeForm::default(), RecipeRowBinding::Legacy);
    assert_eq!(schema["image"], json!(["", ""]));
    assert_eq!(schema["recipeCategory"], "appetizer");
    assert_eq!(schema["totalTime"], "");
    assert_eq!(schema["recipeIngredient"], json!(["", ""]));
    assert_eq!(
        schema["recipeInstructions"],
        json!([
            { "@type": "HowToStep", "text": "" },
            { "@type": "HowToStep", "text": "" }
        ])
    );
    assert_eq!(schema["review"]["name"], "ggg");
    assert_eq!(
        keys(&schema),
        vec![
            "@context",
            "@type",
            "name",
            "image",
            "description",
            "keywords",
            "author",
            "prepTime",
            "cookTime",
            "totalTime",
            "recipeCategory",
            "nutrition",
            "recipeIngredient",
            "recipeInstructions",
            "review"
        ]
    );
}

fn filled_recipe() -> RecipeForm {
    let mut form = RecipeForm {
        name: "Pho".to_string(),
        prep_time: "20".to_string(),
        cook_time: "180".to_string(),
        ..RecipeForm::default()
    };
    let first = form.ingredients.ids().next().unwrap();
    *form.ingredients.get_mut(first).unwrap() = "Beef bones".to_string();
    form.ingredients.push("Rice noodles".to_string());
    let step = form.steps.ids().next().unwrap();
    *form.steps.get_mut(step).unwrap() = "Simmer the broth".to_string();
    let review = form.reviews.ids().next().unwrap();
    *form.reviews.get_mut(review).unwrap() = RecipeReview {
        name: "Great".to_string(),
        body: "Rich broth".to_string(),
        author: "Lan".to_string(),
    };
    form
}

#[test]
fn test_recipe_legacy_binding_ignores_rows() {
    let schema = map_recipe(&filled_recipe(), RecipeRowBinding::Legacy);
    assert_eq!(schema["totalTime"], "PT200M");
    assert_eq!(schema["recipeIngredient"], json!(["", ""]));
    assert_eq!(schema["review"]["author"]["name"], "Lan");
}

#[test]
fn test_recipe_direct_binding_reads_rows() {
    let schema = map_recipe(&filled_recipe(), RecipeRowBinding::Direct);
    assert_eq!(schema["recipeIngredient"], json!(["Beef bones", "Rice noodles"]));
    assert_eq!(
        schema["recipeInstructions"],
        json!({ "@type": "HowToStep", "text": "Simmer the broth" })
    );
}
