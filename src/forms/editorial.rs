//! Forms for content-centric types: Article, Breadcrumb, FAQ, HowTo, Recipe,
//! Video and Website.

use serde::{Deserialize, Serialize};

use crate::domain::RowList;

// ============================================================================
// Article
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleForm {
    /// Article, NewsArticle, BlogPosting...; blank means `Article`
    pub article_type: String,
    pub headline: String,
    pub images: RowList<String, 1>,
    pub author_type: String,
    pub author_name: String,
    pub publisher_name: String,
    pub publisher_logo: String,
    pub date_published: String,
}

// ============================================================================
// Breadcrumb
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbForm {
    pub items: RowList<BreadcrumbItem, 1>,
}

impl Default for BreadcrumbForm {
    fn default() -> Self {
        // the page opens with two crumbs
        Self {
            items: RowList::with_rows(2),
        }
    }
}

// ============================================================================
// FAQ
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqForm {
    pub items: RowList<FaqItem, 0>,
}

// ============================================================================
// HowTo
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HowToStep {
    pub instruction: String,
    pub image: String,
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HowToForm {
    pub name: String,
    pub description: String,
    /// Minutes
    pub total_time: String,
    pub cost: String,
    pub currency: String,
    pub supplies: RowList<String, 0>,
    pub tools: RowList<String, 0>,
    pub steps: RowList<HowToStep, 1>,
}

// ============================================================================
// Video
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoForm {
    pub name: String,
    pub description: String,
    pub upload_date: String,
    pub minutes: String,
    pub seconds: String,
    pub thumbnails: RowList<String, 1>,
}

// ============================================================================
// Website
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebsiteForm {
    pub name: String,
    pub url: String,
    /// Search URL up to the query term, e.g. `https://example.com/search?q=`
    pub search_url: String,
    /// Anything that follows the query term
    pub search_suffix: String,
}

// ============================================================================
// Recipe
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeReview {
    pub name: String,
    pub body: String,
    pub author: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeForm {
    pub name: String,
    pub description: String,
    pub keywords: String,
    pub creator: String,
    /// Minutes
    pub prep_time: String,
    /// Minutes
    pub cook_time: String,
    /// Blank means `appetizer`
    pub category: String,
    pub calories: String,
    pub thumbnails: RowList<String, 1>,
    pub ingredients: RowList<String, 0>,
    pub steps: RowList<String, 1>,
    pub reviews: RowList<RecipeReview, 1>,
}

impl Default for RecipeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            keywords: String::new(),
            creator: String::new(),
            prep_time: String::new(),
            cook_time: String::new(),
            category: String::new(),
            calories: String::new(),
            thumbnails: RowList::new(),
            ingredients: RowList::with_rows(1),
            steps: RowList::new(),
            reviews: RowList::new(),
        }
    }
}
