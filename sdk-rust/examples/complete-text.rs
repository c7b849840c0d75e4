use chat_sdk::{
    openai::{OpenAIChatModel, OpenAIChatModelOptions},
    LanguageModel,
};
use dotenvy::dotenv;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let model = OpenAIChatModel::new(
        "gpt-3.5-turbo",
        OpenAIChatModelOptions {
            api_key: std::env::var("OPENAI_API_KEY")
                .expect("OPENAI_API_KEY environment variable must be set"),
            ..Default::default()
        },
    );

    let reply = model
        .complete("양파와 당근으로 만들 수 있는 요리 하나만 알려줘.")
        .await
        .unwrap();

    println!("{reply}");
}
