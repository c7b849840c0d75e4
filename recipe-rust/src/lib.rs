mod config;
mod errors;
mod finder;
pub mod prompt;
mod resolver;
pub mod store;
mod types;
mod types_ext;

pub use config::{FirestoreConfig, GenerationConfig, RecipeConfig, DEFAULT_MODEL, OPENAI_KEY_FIELD};
pub use errors::*;
pub use finder::{RecipeFinder, SaveOutcome, SAVE_FAILED_MESSAGE, SAVE_SUCCEEDED_MESSAGE};
pub use resolver::{parse_candidates, parse_detail, RecipeResolver};
pub use types::*;
pub use types_ext::{RECOMMENDED_INGREDIENTS, UNKNOWN_LABEL};
