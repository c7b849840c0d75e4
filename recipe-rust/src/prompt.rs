//! Natural-language prompts sent to the chat model.
//!
//! The endpoint has no schema enforcement, so every prompt carries the
//! expected JSON shape, cardinality and output language in its text.

const CANDIDATE_EXAMPLE: &str = r#"{
  "name": "example_name",
  "time": 15,
  "category": "example_category"
}"#;

const DETAIL_EXAMPLE: &str = r#"{
  "calories": 200,
  "carbohydrate": 50,
  "fat": 10,
  "protain": 21,
  "ingredients": [
    { "id": 1, "name": "양파", "amount": "반 개" },
    { "id": 2, "name": "고추장", "amount": "한 큰술" },
    { "id": 3, "name": "돼지 고기", "amount": "150g" }
  ],
  "steps": [
    { "id": 1, "step": 1, "description": "양파를 물에 씻으세요." },
    { "id": 2, "step": 2, "description": "후라이팬에 식용유를 두르고 다진 마늘을 볶아 주세요." },
    { "id": 3, "step": 3, "description": "양파를 후라이팬에 넣고 갈색이 될 때까지 볶아 주세요." }
  ]
}"#;

/// Ask for 5 to 10 `{name, time, category}` objects made from `ingredients`.
pub fn candidates_prompt<S: AsRef<str>>(ingredients: &[S]) -> String {
    let joined = ingredients
        .iter()
        .map(|name| name.as_ref())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{CANDIDATE_EXAMPLE}\n\n\
         이 형식에 맞게 {joined} 의 재료로 만들 수 있는 레시피들 5개 이상 10개 이하로 알려줘.\n\
         name에는 음식 이름을 넣어주고, time은 분 단위 조리 시간, category에는 '국'이나 '반찬', '찌개' 등의 카테고리를 적어줘.\n\
         배열로 만들어 주는데 배열의 원소로 json으로 만들어줘.\n\
         반드시 text는 한국어로 적어줘."
    )
}

/// Ask for the nutrition, ingredients and steps of `recipe_name`.
pub fn detail_prompt(recipe_name: &str) -> String {
    format!(
        "{DETAIL_EXAMPLE}\n\
         ingredients와 steps의 갯수는 최소 1개 이상이여야 해.\n\
         ingredients와 steps의 갯수가 꼭 3개씩일 필요는 없어.\n\
         이 형식에 맞게 {recipe_name} 의 레시피를 알려줘.\n\
         calories는 kcal 단위로 숫자만 넣어줘.\n\
         carbohydrate, fat, protain은 g단위로 숫자만 넣어줘.\n\
         반드시 text는 한국어로 적어줘."
    )
}
