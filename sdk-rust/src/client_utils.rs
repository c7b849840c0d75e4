use crate::LanguageModelError;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// Create a JSON request, parse the response.
/// Returns `Server` on any status other than `200 OK` and `Parse` when the
/// body does not decode into `R`.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    url: &str,
    data: &T,
    headers: reqwest::header::HeaderMap,
    provider: &'static str,
) -> Result<R, LanguageModelError> {
    let response = client.post(url).headers(headers).json(data).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        return Err(LanguageModelError::Server(
            status,
            response.text().await.unwrap_or_default(),
        ));
    }

    let body = response.text().await?;
    serde_json::from_str::<R>(&body).map_err(|error| {
        LanguageModelError::Parse(provider, format!("Failed to parse response body: {error}"))
    })
}
