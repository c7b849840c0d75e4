use crate::{prompt, RecipeDetail, RecipeError, RecipeResult, RecipeSummary};
use chat_sdk::LanguageModel;
use serde::Deserialize;
use std::sync::Arc;

/// Turns ingredients into recipe candidates and candidates into details,
/// one chat completion per call.
#[derive(Clone)]
pub struct RecipeResolver {
    model: Arc<dyn LanguageModel>,
}

/// What the model is asked to return for each candidate.
#[derive(Debug, Deserialize)]
struct CandidateJson {
    name: String,
    time: u32,
    category: String,
}

impl RecipeResolver {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn resolve_candidates<S: AsRef<str>>(
        &self,
        ingredients: &[S],
    ) -> RecipeResult<Vec<RecipeSummary>> {
        if ingredients.is_empty() {
            return Err(RecipeError::InvalidInput(
                "at least one ingredient is required".to_string(),
            ));
        }

        let prompt = prompt::candidates_prompt(ingredients);
        let reply = self.model.complete(&prompt).await?;
        let candidates = parse_candidates(&reply)?;

        tracing::info!(
            ingredients = ingredients.len(),
            candidates = candidates.len(),
            "resolved recipe candidates"
        );
        Ok(candidates)
    }

    pub async fn resolve_detail(&self, summary: &RecipeSummary) -> RecipeResult<RecipeDetail> {
        let prompt = prompt::detail_prompt(&summary.name);
        let reply = self.model.complete(&prompt).await?;
        let detail = parse_detail(&reply, summary)?;

        tracing::info!(
            recipe = %summary.name,
            ingredients = detail.ingredients.len(),
            steps = detail.steps.len(),
            "resolved recipe detail"
        );
        Ok(detail)
    }

    /// Return `bookmarked` untouched when present; otherwise generate.
    pub async fn open_detail(
        &self,
        summary: &RecipeSummary,
        bookmarked: Option<RecipeDetail>,
    ) -> RecipeResult<RecipeDetail> {
        if let Some(detail) = bookmarked {
            tracing::debug!(recipe = %summary.name, "reusing bookmarked detail");
            return Ok(detail);
        }
        self.resolve_detail(summary).await
    }
}

/// Parse the model's reply as a JSON array of candidates.
///
/// All-or-nothing: one bad element fails the whole list. Any image the
/// model supplied is replaced with an empty URL.
pub fn parse_candidates(reply: &str) -> RecipeResult<Vec<RecipeSummary>> {
    let candidates: Vec<CandidateJson> = serde_json::from_str(reply.trim())
        .map_err(|error| RecipeError::RecipeListParse(error.to_string()))?;

    if candidates.is_empty() {
        return Err(RecipeError::RecipeListParse(
            "reply contained no recipes".to_string(),
        ));
    }

    candidates
        .into_iter()
        .enumerate()
        .map(|(index, candidate)| {
            if candidate.name.trim().is_empty() || candidate.category.trim().is_empty() {
                return Err(RecipeError::RecipeListParse(format!(
                    "recipe at index {index} has an empty name or category"
                )));
            }
            Ok(RecipeSummary {
                name: candidate.name,
                estimated_minutes: candidate.time,
                category: candidate.category,
                image_url: Some(String::new()),
            })
        })
        .collect()
}

/// Parse the model's reply as a detail and overlay the summary's fields.
pub fn parse_detail(reply: &str, summary: &RecipeSummary) -> RecipeResult<RecipeDetail> {
    let detail: RecipeDetail = serde_json::from_str(reply.trim())
        .map_err(|error| RecipeError::RecipeDetailParse(error.to_string()))?;

    if detail.ingredients.is_empty() {
        return Err(RecipeError::RecipeDetailParse(
            "detail has no ingredients".to_string(),
        ));
    }
    if detail.steps.is_empty() {
        return Err(RecipeError::RecipeDetailParse(
            "detail has no steps".to_string(),
        ));
    }

    Ok(detail.with_summary(summary))
}
