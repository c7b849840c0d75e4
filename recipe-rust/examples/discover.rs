use dotenvy::dotenv;
use recipe_finder::{IngredientSelection, RecipeConfig, RecipeFinder};
use tracing_subscriber::EnvFilter;

// cargo run --example discover -- key.toml 치킨 브로콜리 쌀
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "key.toml".to_string());
    let config = RecipeConfig::load(&config_path)?;
    let finder = RecipeFinder::from_config(&config);

    let mut selection: IngredientSelection = args.collect();
    if selection.is_empty() {
        selection.add_recommended(0);
        selection.add_recommended(1);
    }

    let candidates = finder.search(&selection).await?;
    for candidate in &candidates {
        println!(
            "[{}] {} ({} 분 소요)",
            candidate.category, candidate.name, candidate.estimated_minutes
        );
    }

    let Some(first) = candidates.first() else {
        return Ok(());
    };
    let detail = finder.open_detail(first, None).await?;
    println!("{detail:#?}");

    let outcome = finder.save(&detail).await;
    println!("{}", outcome.message());

    for entry in finder.bookmarks().await?.entries() {
        println!(
            "{} | {} | {} | {}",
            entry.title, entry.calories_label, entry.category, entry.ingredients_label
        );
    }

    Ok(())
}
