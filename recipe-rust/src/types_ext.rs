use crate::{BookmarkEntry, BookmarkListing, IngredientSelection, RecipeDetail, RecipeSummary};
use uuid::Uuid;

/// Placeholder shown for a bookmarked recipe that lacks a name or category.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Ingredients offered as one-tap additions on the search screen.
pub const RECOMMENDED_INGREDIENTS: [&str; 3] = ["시금치", "양파", "당근"];

impl IngredientSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed ingredient. Empty input is ignored and reported as
    /// `false`.
    pub fn add(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.is_empty() {
            return false;
        }
        self.ingredients.push(name);
        true
    }

    /// Append one of [`RECOMMENDED_INGREDIENTS`] by index.
    pub fn add_recommended(&mut self, index: usize) -> bool {
        match RECOMMENDED_INGREDIENTS.get(index) {
            Some(name) => self.add(*name),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.ingredients.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ingredients
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for IngredientSelection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut selection = Self::new();
        for name in iter {
            selection.add(name);
        }
        selection
    }
}

impl RecipeSummary {
    pub fn new(name: impl Into<String>, estimated_minutes: u32, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            estimated_minutes,
            category: category.into(),
            image_url: None,
        }
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Rebuild the summary used to reopen a bookmarked detail.
    pub fn from_bookmark(detail: &RecipeDetail) -> Self {
        Self {
            name: detail
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            estimated_minutes: detail.estimated_minutes.unwrap_or(0),
            category: detail
                .category
                .clone()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            image_url: None,
        }
    }
}

impl RecipeDetail {
    /// Copy name, category and time from `summary` and assign a fresh id.
    #[must_use]
    pub fn with_summary(mut self, summary: &RecipeSummary) -> Self {
        self.category = Some(summary.category.clone());
        self.estimated_minutes = Some(summary.estimated_minutes);
        self.name = Some(summary.name.clone());
        self.id = Some(Uuid::new_v4());
        self
    }

    /// Ingredient names joined for display, e.g. `"양파, 고추장"`.
    pub fn ingredient_names(&self) -> String {
        self.ingredients
            .iter()
            .map(|ingredient| ingredient.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<&RecipeDetail> for BookmarkEntry {
    fn from(detail: &RecipeDetail) -> Self {
        Self {
            title: detail
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            calories_label: format!("{}kcal", detail.calories),
            category: detail
                .category
                .clone()
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            ingredients_label: format!("재료 : {}", detail.ingredient_names()),
        }
    }
}

impl BookmarkListing {
    pub fn entries(&self) -> Vec<BookmarkEntry> {
        self.recipes.iter().map(BookmarkEntry::from).collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&RecipeDetail> {
        self.recipes
            .iter()
            .find(|recipe| recipe.name.as_deref() == Some(name))
    }
}
