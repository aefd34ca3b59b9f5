use std::collections::HashMap;

use lexi_types::{
    Collection, NewCollection, NewMeaning, NewWord, PendingDelete, Stats, Tab, Word, WordRef,
};

/// Edit-collection modal draft. `None` in the store means the modal is
/// closed and the draft is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCollection {
    pub id: i64,
    pub name: String,
    pub description: String,
}

/// Single source of truth for everything the page renders.
///
/// Every field is explicit and named; the per-id property bags of the
/// original UI (meaning-form visibility, per-meaning example drafts) are
/// maps where an absent key means false/empty.
#[derive(Default)]
pub struct ViewState {
    // Word list view. At most one of {full list, search results,
    // collection filter} is active; mode switches clear the other markers.
    pub words: Vec<Word>,
    pub search_term: String,
    pub searched: bool,
    pub stats: Option<Stats>,
    pub filtered_by_collection: Option<Collection>,

    pub active_tab: Tab,
    pub selected_word_id: Option<i64>,

    // Draft buffers and form visibility for the words tab
    pub show_add_word_form: bool,
    pub new_word: NewWord,
    pub show_add_meaning_form: HashMap<i64, bool>,
    pub new_meaning: NewMeaning,
    pub new_examples: HashMap<i64, String>,

    // Collections tab
    pub collections: Vec<Collection>,
    pub show_add_collection_form: bool,
    pub new_collection: NewCollection,
    pub active_collection: Option<Collection>,
    pub collection_words: Vec<WordRef>,
    pub word_to_add: String,
    pub edit_collection: Option<EditCollection>,

    // Word-collections modal
    pub show_word_collections_modal: bool,
    pub current_word: String,
    pub word_collections: Vec<Collection>,
    pub available_collections: Vec<Collection>,
    pub selected_collection: Option<i64>,

    // Destructive action awaiting confirmation
    pub pending_delete: Option<PendingDelete>,
}

impl ViewState {
    pub fn meaning_form_visible(&self, word_id: i64) -> bool {
        self.show_add_meaning_form.get(&word_id).copied().unwrap_or(false)
    }

    pub fn example_draft(&self, meaning_id: i64) -> &str {
        self.new_examples
            .get(&meaning_id)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Clear every word-collections modal field back to its closed state.
    pub fn clear_modal(&mut self) {
        self.show_word_collections_modal = false;
        self.current_word.clear();
        self.word_collections.clear();
        self.available_collections.clear();
        self.selected_collection = None;
    }
}
