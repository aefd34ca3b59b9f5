mod client;
mod error;
mod response;

pub use client::HttpDictionaryClient;
pub use error::ApiError;
pub use response::{CollectionDetailResponse, SearchResponse, WordsResponse};

use lexi_types::{
    Collection, CollectionUpdate, NewCollection, NewExample, NewMeaning, NewWord, Word,
};

/// Gateway to the dictionary REST backend, one method per interaction.
///
/// Implementations never touch view state; they translate every failure
/// into an [`ApiError`] carrying the best available human-readable message.
#[async_trait::async_trait]
pub trait DictionaryApi: Send + Sync {
    /// Full word list with aggregate counts
    async fn list_words(&self) -> Result<WordsResponse, ApiError>;

    /// Substring search, count-only stats
    async fn search_words(&self, term: &str) -> Result<SearchResponse, ApiError>;

    /// Single word detail, looked up by headword
    async fn get_word(&self, word: &str) -> Result<Word, ApiError>;

    async fn create_word(&self, draft: &NewWord) -> Result<Word, ApiError>;

    async fn delete_word(&self, word: &str) -> Result<(), ApiError>;

    /// Add a meaning to an existing word; returns the updated word
    async fn add_meaning(&self, word: &str, draft: &NewMeaning) -> Result<Word, ApiError>;

    async fn delete_meaning(&self, id: i64) -> Result<(), ApiError>;

    async fn add_example(&self, meaning_id: i64, example: &NewExample) -> Result<(), ApiError>;

    async fn delete_example(&self, id: i64) -> Result<(), ApiError>;

    async fn list_collections(&self) -> Result<Vec<Collection>, ApiError>;

    async fn create_collection(&self, draft: &NewCollection) -> Result<Collection, ApiError>;

    /// Collection metadata plus its member word references
    async fn get_collection(&self, id: i64) -> Result<CollectionDetailResponse, ApiError>;

    async fn update_collection(&self, id: i64, update: &CollectionUpdate) -> Result<(), ApiError>;

    async fn delete_collection(&self, id: i64) -> Result<(), ApiError>;

    async fn add_word_to_collection(&self, collection_id: i64, word: &str)
    -> Result<(), ApiError>;

    async fn remove_word_from_collection(
        &self,
        collection_id: i64,
        word: &str,
    ) -> Result<(), ApiError>;

    /// Collections that already contain the given word
    async fn word_collections(&self, word: &str) -> Result<Vec<Collection>, ApiError>;
}
