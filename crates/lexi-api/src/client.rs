use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use lexi_types::{
    Collection, CollectionUpdate, NewCollection, NewExample, NewMeaning, NewWord, Word,
};

use crate::DictionaryApi;
use crate::error::ApiError;
use crate::response::{
    CollectionDetailResponse, CollectionResponse, CollectionsResponse, SearchResponse,
    WordResponse, WordsResponse,
};

/// Reqwest-backed gateway to the dictionary backend.
#[derive(Clone)]
pub struct HttpDictionaryClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDictionaryClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Headwords are free text and may contain spaces or punctuation;
    /// they are always percent-encoded before landing in a path segment.
    fn word_segment(word: &str) -> String {
        urlencoding::encode(word).into_owned()
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = self.client.get(self.url(path)).send().await?;
        decode(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        decode(response).await
    }

    /// POST with no request body, response body ignored
    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self.client.post(self.url(path)).send().await?;
        check(response).await
    }

    async fn put_json<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        check(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.client.delete(self.url(path)).send().await?;
        check(response).await
    }
}

/// Decode a JSON success body, or normalize the failure.
async fn decode<T>(response: reqwest::Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(ApiError::from_error_response(status, &body));
    }

    serde_json::from_slice(&body)
        .map_err(|e| ApiError::Transport(format!("failed to decode response: {e}")))
}

/// Status check for calls whose success body carries nothing we need.
async fn check(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(());
    }

    let body = response.bytes().await?;
    Err(ApiError::from_error_response(status, &body))
}

#[async_trait::async_trait]
impl DictionaryApi for HttpDictionaryClient {
    async fn list_words(&self) -> Result<WordsResponse, ApiError> {
        self.get_json("/words").await
    }

    async fn search_words(&self, term: &str) -> Result<SearchResponse, ApiError> {
        let response = self
            .client
            .get(self.url("/search"))
            .query(&[("term", term)])
            .send()
            .await?;

        decode(response).await
    }

    async fn get_word(&self, word: &str) -> Result<Word, ApiError> {
        let response: WordResponse = self
            .get_json(&format!("/words/{}", Self::word_segment(word)))
            .await?;

        Ok(response.word)
    }

    async fn create_word(&self, draft: &NewWord) -> Result<Word, ApiError> {
        let response: WordResponse = self.post_json("/words", draft).await?;

        Ok(response.word)
    }

    async fn delete_word(&self, word: &str) -> Result<(), ApiError> {
        self.delete(&format!("/words/{}", Self::word_segment(word)))
            .await
    }

    async fn add_meaning(&self, word: &str, draft: &NewMeaning) -> Result<Word, ApiError> {
        let response: WordResponse = self
            .post_json(
                &format!("/words/{}/meanings", Self::word_segment(word)),
                draft,
            )
            .await?;

        Ok(response.word)
    }

    async fn delete_meaning(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/meanings/{id}")).await
    }

    async fn add_example(&self, meaning_id: i64, example: &NewExample) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/meanings/{meaning_id}/examples")))
            .json(example)
            .send()
            .await?;

        check(response).await
    }

    async fn delete_example(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/examples/{id}")).await
    }

    async fn list_collections(&self) -> Result<Vec<Collection>, ApiError> {
        let response: CollectionsResponse = self.get_json("/collections").await?;

        Ok(response.collections)
    }

    async fn create_collection(&self, draft: &NewCollection) -> Result<Collection, ApiError> {
        let response: CollectionResponse = self.post_json("/collections", draft).await?;

        Ok(response.collection)
    }

    async fn get_collection(&self, id: i64) -> Result<CollectionDetailResponse, ApiError> {
        self.get_json(&format!("/collections/{id}")).await
    }

    async fn update_collection(&self, id: i64, update: &CollectionUpdate) -> Result<(), ApiError> {
        self.put_json(&format!("/collections/{id}"), update).await
    }

    async fn delete_collection(&self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/collections/{id}")).await
    }

    async fn add_word_to_collection(
        &self,
        collection_id: i64,
        word: &str,
    ) -> Result<(), ApiError> {
        self.post_empty(&format!(
            "/collections/{collection_id}/words/{}",
            Self::word_segment(word)
        ))
        .await
    }

    async fn remove_word_from_collection(
        &self,
        collection_id: i64,
        word: &str,
    ) -> Result<(), ApiError> {
        self.delete(&format!(
            "/collections/{collection_id}/words/{}",
            Self::word_segment(word)
        ))
        .await
    }

    async fn word_collections(&self, word: &str) -> Result<Vec<Collection>, ApiError> {
        let response: CollectionsResponse = self
            .get_json(&format!("/words/{}/collections", Self::word_segment(word)))
            .await?;

        Ok(response.collections)
    }
}
