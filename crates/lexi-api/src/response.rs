use lexi_types::{Collection, Word, WordRef};
use serde::Deserialize;

/// GET /words
#[derive(Debug, Deserialize)]
pub struct WordsResponse {
    pub words: Vec<Word>,
    pub count: usize,
    pub total_meanings: usize,
    pub total_examples: usize,
}

/// GET /search?term=
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub words: Vec<Word>,
    pub count: usize,
}

/// GET /words/{word}, POST /words, POST /words/{word}/meanings
#[derive(Debug, Deserialize)]
pub(crate) struct WordResponse {
    pub word: Word,
}

/// GET /collections, GET /words/{word}/collections
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionsResponse {
    pub collections: Vec<Collection>,
}

/// POST /collections
#[derive(Debug, Deserialize)]
pub(crate) struct CollectionResponse {
    pub collection: Collection,
}

/// GET /collections/{id}
#[derive(Debug, Deserialize)]
pub struct CollectionDetailResponse {
    pub collection: Collection,
    pub words: Vec<WordRef>,
}
