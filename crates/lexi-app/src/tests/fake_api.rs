use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use lexi_api::{ApiError, CollectionDetailResponse, DictionaryApi, SearchResponse, WordsResponse};
use lexi_types::{
    Collection, CollectionUpdate, Example, Meaning, NewCollection, NewExample, NewMeaning, NewWord,
    Word, WordRef,
};
use tokio::sync::Semaphore;

/// In-memory gateway double: canned data, a log of observed calls, and
/// switchable failures keyed by method name (or `method:arg` for a single
/// argument value).
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<String>>,
    pub words: Mutex<Vec<Word>>,
    pub collections: Mutex<Vec<Collection>>,
    pub word_collections: Mutex<Vec<Collection>>,
    pub collection_words: Mutex<Vec<WordRef>>,
    failing: Mutex<HashSet<String>>,
    /// When set, `get_word` waits for a permit before answering, letting
    /// tests interleave a competing flow.
    pub get_word_gate: Mutex<Option<Arc<Semaphore>>>,
    /// Same, for `word_collections`.
    pub word_collections_gate: Mutex<Option<Arc<Semaphore>>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn word(id: i64, headword: &str) -> Word {
        Word {
            id,
            word: headword.to_string(),
            transcription: None,
            description: None,
            meanings: vec![Meaning {
                id: id * 100,
                translation: format!("translation of {headword}"),
                transcription: None,
                description: None,
                examples: vec![Example {
                    id: id * 1000,
                    text: format!("example for {headword}"),
                }],
            }],
        }
    }

    pub fn collection(id: i64, name: &str) -> Collection {
        Collection {
            id,
            name: name.to_string(),
            description: None,
        }
    }

    pub fn fail(&self, key: &str) {
        self.failing.lock().unwrap().insert(key.to_string());
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, method: &str, key: &str) -> Result<(), ApiError> {
        let failing = self.failing.lock().unwrap();
        if failing.contains(method) || failing.contains(key) {
            return Err(ApiError::Backend(format!("{method} failed")));
        }
        Ok(())
    }

    fn next_word_id(&self) -> i64 {
        self.words.lock().unwrap().iter().map(|w| w.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl DictionaryApi for FakeApi {
    async fn list_words(&self) -> Result<WordsResponse, ApiError> {
        self.record("list_words".to_string());
        self.check("list_words", "list_words")?;

        let words = self.words.lock().unwrap().clone();
        let total_meanings = words.iter().map(|w| w.meanings.len()).sum();
        let total_examples = words
            .iter()
            .flat_map(|w| &w.meanings)
            .map(|m| m.examples.len())
            .sum();
        Ok(WordsResponse {
            count: words.len(),
            total_meanings,
            total_examples,
            words,
        })
    }

    async fn search_words(&self, term: &str) -> Result<SearchResponse, ApiError> {
        self.record(format!("search_words:{term}"));
        self.check("search_words", &format!("search_words:{term}"))?;

        let words: Vec<Word> = self
            .words
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.word.contains(term))
            .cloned()
            .collect();
        Ok(SearchResponse {
            count: words.len(),
            words,
        })
    }

    async fn get_word(&self, word: &str) -> Result<Word, ApiError> {
        self.record(format!("get_word:{word}"));

        let gate = self.get_word_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            let _permit = gate.acquire().await.expect("gate closed");
        }

        self.check("get_word", &format!("get_word:{word}"))?;
        self.words
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.word == word)
            .cloned()
            .ok_or_else(|| ApiError::Backend(format!("word not found: {word}")))
    }

    async fn create_word(&self, draft: &NewWord) -> Result<Word, ApiError> {
        self.record(format!("create_word:{}", draft.word));
        self.check("create_word", &format!("create_word:{}", draft.word))?;

        let id = self.next_word_id();
        let word = Word {
            id,
            word: draft.word.clone(),
            transcription: Some(draft.transcription.clone()),
            description: Some(draft.description.clone()),
            meanings: vec![Meaning {
                id: id * 100,
                translation: draft.translation.clone(),
                transcription: None,
                description: None,
                examples: Vec::new(),
            }],
        };
        self.words.lock().unwrap().push(word.clone());
        Ok(word)
    }

    async fn delete_word(&self, word: &str) -> Result<(), ApiError> {
        self.record(format!("delete_word:{word}"));
        self.check("delete_word", &format!("delete_word:{word}"))?;

        self.words.lock().unwrap().retain(|w| w.word != word);
        Ok(())
    }

    async fn add_meaning(&self, word: &str, draft: &NewMeaning) -> Result<Word, ApiError> {
        self.record(format!("add_meaning:{word}"));
        self.check("add_meaning", &format!("add_meaning:{word}"))?;

        let mut words = self.words.lock().unwrap();
        let entry = words
            .iter_mut()
            .find(|w| w.word == word)
            .ok_or_else(|| ApiError::Backend(format!("word not found: {word}")))?;
        let meaning_id = entry.id * 100 + entry.meanings.len() as i64 + 1;
        entry.meanings.push(Meaning {
            id: meaning_id,
            translation: draft.translation.clone(),
            transcription: None,
            description: None,
            examples: Vec::new(),
        });
        Ok(entry.clone())
    }

    async fn delete_meaning(&self, id: i64) -> Result<(), ApiError> {
        self.record(format!("delete_meaning:{id}"));
        self.check("delete_meaning", &format!("delete_meaning:{id}"))?;

        for word in self.words.lock().unwrap().iter_mut() {
            word.meanings.retain(|m| m.id != id);
        }
        Ok(())
    }

    async fn add_example(&self, meaning_id: i64, example: &NewExample) -> Result<(), ApiError> {
        self.record(format!("add_example:{meaning_id}"));
        self.check("add_example", &format!("add_example:{meaning_id}"))?;

        let mut words = self.words.lock().unwrap();
        let meaning = words
            .iter_mut()
            .flat_map(|w| w.meanings.iter_mut())
            .find(|m| m.id == meaning_id)
            .ok_or_else(|| ApiError::Backend(format!("meaning not found: {meaning_id}")))?;
        let example_id = meaning_id * 10 + meaning.examples.len() as i64 + 1;
        meaning.examples.push(Example {
            id: example_id,
            text: example.text.clone(),
        });
        Ok(())
    }

    async fn delete_example(&self, id: i64) -> Result<(), ApiError> {
        self.record(format!("delete_example:{id}"));
        self.check("delete_example", &format!("delete_example:{id}"))?;

        for word in self.words.lock().unwrap().iter_mut() {
            for meaning in word.meanings.iter_mut() {
                meaning.examples.retain(|e| e.id != id);
            }
        }
        Ok(())
    }

    async fn list_collections(&self) -> Result<Vec<Collection>, ApiError> {
        self.record("list_collections".to_string());
        self.check("list_collections", "list_collections")?;

        Ok(self.collections.lock().unwrap().clone())
    }

    async fn create_collection(&self, draft: &NewCollection) -> Result<Collection, ApiError> {
        self.record(format!("create_collection:{}", draft.name));
        self.check("create_collection", &format!("create_collection:{}", draft.name))?;

        let mut collections = self.collections.lock().unwrap();
        let id = collections.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let collection = Collection {
            id,
            name: draft.name.clone(),
            description: Some(draft.description.clone()),
        };
        collections.push(collection.clone());
        Ok(collection)
    }

    async fn get_collection(&self, id: i64) -> Result<CollectionDetailResponse, ApiError> {
        self.record(format!("get_collection:{id}"));
        self.check("get_collection", &format!("get_collection:{id}"))?;

        let collection = self
            .collections
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| ApiError::Backend(format!("collection not found: {id}")))?;
        Ok(CollectionDetailResponse {
            collection,
            words: self.collection_words.lock().unwrap().clone(),
        })
    }

    async fn update_collection(&self, id: i64, update: &CollectionUpdate) -> Result<(), ApiError> {
        self.record(format!("update_collection:{id}"));
        self.check("update_collection", &format!("update_collection:{id}"))?;

        let mut collections = self.collections.lock().unwrap();
        let collection = collections
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::Backend(format!("collection not found: {id}")))?;
        collection.name = update.name.clone();
        collection.description = Some(update.description.clone());
        Ok(())
    }

    async fn delete_collection(&self, id: i64) -> Result<(), ApiError> {
        self.record(format!("delete_collection:{id}"));
        self.check("delete_collection", &format!("delete_collection:{id}"))?;

        self.collections.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    async fn add_word_to_collection(
        &self,
        collection_id: i64,
        word: &str,
    ) -> Result<(), ApiError> {
        let key = format!("add_word_to_collection:{collection_id}:{word}");
        self.record(key.clone());
        self.check("add_word_to_collection", &key)?;

        let collection = self
            .collections
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == collection_id)
            .cloned()
            .ok_or_else(|| ApiError::Backend(format!("collection not found: {collection_id}")))?;
        self.word_collections.lock().unwrap().push(collection);
        let word_id = self
            .words
            .lock()
            .unwrap()
            .iter()
            .find(|w| w.word == word)
            .map(|w| w.id)
            .unwrap_or(0);
        self.collection_words.lock().unwrap().push(WordRef {
            id: word_id,
            word: word.to_string(),
        });
        Ok(())
    }

    async fn remove_word_from_collection(
        &self,
        collection_id: i64,
        word: &str,
    ) -> Result<(), ApiError> {
        let key = format!("remove_word_from_collection:{collection_id}:{word}");
        self.record(key.clone());
        self.check("remove_word_from_collection", &key)?;

        self.word_collections
            .lock()
            .unwrap()
            .retain(|c| c.id != collection_id);
        self.collection_words.lock().unwrap().retain(|r| r.word != word);
        Ok(())
    }

    async fn word_collections(&self, word: &str) -> Result<Vec<Collection>, ApiError> {
        self.record(format!("word_collections:{word}"));

        let gate = self.word_collections_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            let _permit = gate.acquire().await.expect("gate closed");
        }

        self.check("word_collections", &format!("word_collections:{word}"))?;

        Ok(self.word_collections.lock().unwrap().clone())
    }
}
