use super::{decode_documents, encode_document, firestore_value, BookmarkStore, RECIPES_COLLECTION};
use crate::{BookmarkListing, RecipeDetail, RecipeResult, StoreError};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client, RequestBuilder, Response, Url,
};
use serde::Deserialize;
use serde_json::{Map, Value};

const PROVIDER: &str = "firestore";

pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const DEFAULT_DATABASE: &str = "(default)";
const LIST_PAGE_SIZE: u32 = 300;

/// Bookmark collection backed by the Firestore REST API.
pub struct FirestoreBookmarkStore {
    collection_url: String,
    api_key: Option<String>,
    access_token: Option<String>,
    client: Client,
}

#[derive(Clone, Default)]
pub struct FirestoreOptions {
    pub project_id: String,
    /// Defaults to `(default)`.
    pub database: Option<String>,
    /// Defaults to [`RECIPES_COLLECTION`].
    pub collection: Option<String>,
    /// Web API key, sent as the `key` query parameter.
    pub api_key: Option<String>,
    /// OAuth access token or ID token, sent as a bearer credential.
    pub access_token: Option<String>,
    pub base_url: Option<String>,
    pub client: Option<Client>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    /// Full resource name, ending in `/documents/{collection}/{id}`.
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl FirestoreDocument {
    fn document_id(&self) -> String {
        self.name
            .rsplit('/')
            .next()
            .unwrap_or(self.name.as_str())
            .to_string()
    }
}

impl FirestoreBookmarkStore {
    #[must_use]
    pub fn new(options: FirestoreOptions) -> Self {
        let FirestoreOptions {
            project_id,
            database,
            collection,
            api_key,
            access_token,
            base_url,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_FIRESTORE_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let database = database.unwrap_or_else(|| DEFAULT_DATABASE.to_string());
        let collection = collection.unwrap_or_else(|| RECIPES_COLLECTION.to_string());

        Self {
            collection_url: format!(
                "{base_url}/projects/{project_id}/databases/{database}/documents/{collection}"
            ),
            api_key,
            access_token,
            client: client.unwrap_or_else(Client::new),
        }
    }

    fn request_headers(&self) -> Result<HeaderMap, StoreError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.access_token {
            let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|error| {
                StoreError::Encode(format!("Invalid Firestore access token header value: {error}"))
            })?;
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    /// `{collection_url}/{document_id}` with the id percent-encoded as a
    /// single path segment, so `?`, `#` and `/` stay part of the name.
    fn document_url(&self, document_id: &str) -> Result<Url, StoreError> {
        let mut url = Url::parse(&self.collection_url).map_err(|error| {
            StoreError::Encode(format!("Invalid Firestore collection url: {error}"))
        })?;
        url.path_segments_mut()
            .map_err(|()| {
                StoreError::Encode(format!(
                    "Firestore collection url cannot take a document path: {}",
                    self.collection_url
                ))
            })?
            .push(document_id);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, StoreError> {
        let request = request.headers(self.request_headers()?);
        Ok(match &self.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        })
    }

    async fn list_page(&self, page_token: Option<&str>) -> Result<ListDocumentsResponse, StoreError> {
        let mut request = self
            .client
            .get(&self.collection_url)
            .query(&[("pageSize", LIST_PAGE_SIZE.to_string())]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = check_status(self.authorize(request)?.send().await?).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|error| {
            StoreError::Invariant(PROVIDER, format!("Failed to parse document list: {error}"))
        })
    }
}

async fn check_status(response: Response) -> Result<Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(StoreError::StatusCode(
            status,
            response.text().await.unwrap_or_default(),
        ))
    }
}

#[async_trait::async_trait]
impl BookmarkStore for FirestoreBookmarkStore {
    async fn save(&self, detail: &RecipeDetail) -> RecipeResult<()> {
        let (document_id, body) = encode_document(detail)?;
        let fields = match &body {
            Value::Object(object) => firestore_value::to_fields(object),
            other => {
                return Err(StoreError::Encode(format!(
                    "recipe did not serialize to an object: {other}"
                ))
                .into())
            }
        };

        // PATCH without an update mask replaces the whole document.
        let request = self
            .client
            .patch(self.document_url(&document_id)?)
            .json(&serde_json::json!({ "fields": fields }));
        check_status(self.authorize(request)?.send().await.map_err(StoreError::from)?).await?;

        tracing::info!(document = %document_id, "saved bookmark");
        Ok(())
    }

    async fn fetch_all(&self) -> RecipeResult<BookmarkListing> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_page(page_token.as_deref()).await?;
            documents.extend(page.documents);
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        let listing = decode_documents(documents.into_iter().map(|document| {
            let body = firestore_value::from_fields(&document.fields).map(Value::Object);
            (document.document_id(), body)
        }));

        tracing::info!(
            recipes = listing.recipes.len(),
            skipped = listing.skipped.len(),
            "fetched bookmarks"
        );
        Ok(listing)
    }
}
