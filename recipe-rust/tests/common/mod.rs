#![allow(dead_code)]

use recipe_finder::{CookingStep, IngredientLine, RecipeDetail};

pub const CANDIDATES_REPLY: &str = r#"[
  {"name": "치킨 브로콜리 볶음밥", "time": 20, "category": "밥"},
  {"name": "닭가슴살 브로콜리 죽", "time": 30, "category": "죽"},
  {"name": "치킨 덮밥", "time": 25, "category": "밥"},
  {"name": "브로콜리 닭볶음", "time": 15, "category": "반찬"},
  {"name": "치킨 리조또", "time": 35, "category": "양식"}
]"#;

pub const DETAIL_REPLY: &str = r#"{
  "calories": 520,
  "carbohydrate": 65,
  "fat": 14,
  "protain": 32,
  "ingredients": [
    {"id": 1, "name": "닭가슴살", "amount": "100g"},
    {"id": 2, "name": "브로콜리", "amount": "반 송이"},
    {"id": 3, "name": "밥", "amount": "1공기"}
  ],
  "steps": [
    {"id": 1, "step": 1, "description": "닭가슴살과 브로콜리를 잘게 썰어 주세요."},
    {"id": 2, "step": 2, "description": "팬에 닭가슴살을 먼저 볶아 주세요."},
    {"id": 3, "step": 3, "description": "밥과 브로콜리를 넣고 함께 볶아 주세요."}
  ]
}"#;

pub fn recipe(name: Option<&str>, calories: u32) -> RecipeDetail {
    RecipeDetail {
        id: None,
        name: name.map(str::to_string),
        category: Some("찌개".to_string()),
        estimated_minutes: Some(20),
        calories,
        carbohydrate_grams: 20,
        fat_grams: 15,
        protein_grams: 18,
        ingredients: vec![IngredientLine {
            id: Some(1),
            name: "김치".to_string(),
            amount: "1컵".to_string(),
            image_url: None,
        }],
        steps: vec![CookingStep {
            id: Some(1),
            step_number: 1,
            description: "김치를 볶아 주세요.".to_string(),
            image_url: None,
        }],
    }
}
