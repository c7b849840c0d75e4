use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ingredient names picked by the user, in the order they were added.
/// Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSelection {
    pub(crate) ingredients: Vec<String>,
}

/// A lightweight recipe candidate shown before a detail is generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeSummary {
    pub name: String,
    #[serde(rename = "time")]
    pub estimated_minutes: u32,
    pub category: String,
    #[serde(rename = "img_url", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// The fully expanded recipe: nutrition, ingredients and steps.
///
/// Field names on the wire follow the keys the model is asked to produce and
/// the keys stored in the bookmark collection, `protain` included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "time", default, skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
    /// kcal
    pub calories: u32,
    #[serde(rename = "carbohydrate")]
    pub carbohydrate_grams: u32,
    #[serde(rename = "fat")]
    pub fat_grams: u32,
    #[serde(rename = "protain")]
    pub protein_grams: u32,
    pub ingredients: Vec<IngredientLine>,
    pub steps: Vec<CookingStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    /// Free text such as "반 개" or "150g".
    pub amount: String,
    #[serde(rename = "img_url", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CookingStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(rename = "step")]
    pub step_number: u32,
    pub description: String,
    #[serde(rename = "img_url", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// One row of the bookmark listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkEntry {
    pub title: String,
    pub calories_label: String,
    pub category: String,
    pub ingredients_label: String,
}

/// A stored document that could not be read back as a [`RecipeDetail`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub document_id: String,
    pub reason: String,
}

/// Result of reading the whole bookmark collection.
///
/// Reading is partial-success: documents that fail to decode end up in
/// `skipped` and the remaining ones are still returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkListing {
    pub recipes: Vec<RecipeDetail>,
    pub skipped: Vec<SkippedDocument>,
}
