use chat_sdk::{
    chat_sdk_test::{MockCompleteResult, MockLanguageModel},
    LanguageModel, LanguageModelError,
};

#[tokio::test]
async fn mock_language_model_tracks_prompts_and_returns_results() {
    let model = MockLanguageModel::new();

    model
        .enqueue_complete("Hello, world!")
        .enqueue_complete(MockCompleteResult::error(LanguageModelError::InvalidInput(
            "complete error".to_string(),
        )))
        .enqueue_complete("Goodbye, world!");

    let res1 = model
        .complete("Hi")
        .await
        .expect("first complete should succeed");
    assert_eq!(res1, "Hello, world!");
    assert_eq!(model.tracked_prompts(), vec!["Hi".to_string()]);

    let err = model
        .complete("Error")
        .await
        .expect_err("second complete should error");
    match err {
        LanguageModelError::InvalidInput(msg) => {
            assert_eq!(msg, "complete error");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
    assert_eq!(model.tracked_prompts().len(), 2);

    let res3 = model
        .complete("Goodbye")
        .await
        .expect("third complete should succeed");
    assert_eq!(res3, "Goodbye, world!");
    assert_eq!(
        model.tracked_prompts(),
        vec!["Hi".to_string(), "Error".to_string(), "Goodbye".to_string()]
    );

    model.reset();
    assert!(model.tracked_prompts().is_empty());

    model.enqueue_complete("After reset");

    model.restore();
    assert!(model.tracked_prompts().is_empty());

    let err = model
        .complete("Hi")
        .await
        .expect_err("complete after restore should fail");
    match err {
        LanguageModelError::Parse(provider, message) => {
            assert_eq!(provider, "mock");
            assert_eq!(message, "no mocked complete results available");
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
}

#[tokio::test]
async fn mock_language_model_reports_overridden_identity() {
    let mut model = MockLanguageModel::new();
    model.set_provider("fake-openai");
    model.set_model_id("gpt-fake");

    assert_eq!(model.provider(), "fake-openai");
    assert_eq!(model.model_id(), "gpt-fake");
    assert!(model.metadata().is_none());
}
