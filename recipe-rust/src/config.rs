use crate::ConfigError;
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const OPENAI_KEY_FIELD: &str = "openAIKey";

/// Settings bundled with the application, read once at startup.
///
/// ```toml
/// openAIKey = "sk-..."
///
/// [generation]
/// model = "gpt-3.5-turbo"
/// max_tokens = 500
///
/// [firestore]
/// project_id = "recipe-app"
/// api_key = "AIza..."
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RecipeConfig {
    #[serde(rename = "openAIKey", default)]
    pub openai_key: String,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub firestore: Option<FirestoreConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GenerationConfig {
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub database: Option<String>,
    pub collection: Option<String>,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub base_url: Option<String>,
}

impl RecipeConfig {
    /// Read and validate the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|error| ConfigError::Read(path.display().to_string(), error))?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.openai_key.trim().is_empty() {
            return Err(ConfigError::MissingKey(OPENAI_KEY_FIELD));
        }
        if let Some(firestore) = &config.firestore {
            if firestore.project_id.trim().is_empty() {
                return Err(ConfigError::MissingKey("firestore.project_id"));
            }
        }
        Ok(config)
    }

    pub fn model_id(&self) -> &str {
        self.generation.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}
