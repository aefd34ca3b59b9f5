use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use lexi_api::DictionaryApi;
use lexi_types::{
    Collection, CollectionUpdate, NewCollection, NewExample, NewMeaning, NewWord, PendingDelete,
    Severity, Stats, Tab,
};
use tokio::sync::RwLock;

use crate::notify::Notifier;
use crate::state::{EditCollection, ViewState};

/// Monotonic token per flow family. A flow captures the value when it
/// starts; a completion whose token is no longer current is discarded, so
/// a late response can never overwrite a newer one.
#[derive(Default)]
pub(crate) struct Epoch(AtomicU64);

impl Epoch {
    pub(crate) fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

/// View state store: owns the snapshot, the refresh policy, and the
/// notification scheduler. Mutations never patch the snapshot in place;
/// every successful mutation is followed by a wholesale reload.
pub struct Store {
    pub api: Arc<dyn DictionaryApi>,
    pub notifier: Notifier,
    pub state: RwLock<ViewState>,
    pub(crate) words_epoch: Epoch,
    pub(crate) modal_epoch: Epoch,
}

impl Store {
    pub fn new(api: Arc<dyn DictionaryApi>, notification_timeout: Duration) -> Self {
        Self {
            api,
            notifier: Notifier::new(notification_timeout),
            state: RwLock::new(ViewState::default()),
            words_epoch: Epoch::default(),
            modal_epoch: Epoch::default(),
        }
    }

    /// Initial page load: words and collections.
    pub async fn init(&self) {
        self.load_all().await;
        self.load_collections().await;
    }

    /// Reload the full word list with aggregate stats, dropping any
    /// search or collection filter.
    pub async fn load_all(&self) {
        let token = self.words_epoch.begin();
        {
            let mut state = self.state.write().await;
            state.search_term.clear();
            state.searched = false;
            state.filtered_by_collection = None;
        }

        match self.api.list_words().await {
            Ok(page) => {
                if !self.words_epoch.is_current(token) {
                    tracing::debug!("discarding stale word list load");
                    return;
                }
                let mut state = self.state.write().await;
                state.words = page.words;
                state.stats = Some(Stats {
                    count: page.count,
                    total_meanings: Some(page.total_meanings),
                    total_examples: Some(page.total_examples),
                    filtered_by: None,
                });
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error loading words: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    /// A blank term means "show everything", not "show nothing".
    pub async fn search(&self, term: &str) {
        if term.trim().is_empty() {
            self.load_all().await;
            return;
        }

        let token = self.words_epoch.begin();
        {
            let mut state = self.state.write().await;
            state.search_term = term.to_string();
            state.searched = true;
            state.filtered_by_collection = None;
        }

        match self.api.search_words(term).await {
            Ok(page) => {
                if !self.words_epoch.is_current(token) {
                    tracing::debug!("discarding stale search result");
                    return;
                }
                let mut state = self.state.write().await;
                state.words = page.words;
                // Count only: search results carry no aggregate totals
                state.stats = Some(Stats {
                    count: page.count,
                    ..Stats::default()
                });
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Search error: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    pub async fn add_word(&self) {
        let draft = self.state.read().await.new_word.clone();
        if draft.word.is_empty() || draft.translation.is_empty() {
            self.notifier
                .notify("Word and translation are required", Severity::Warning)
                .await;
            return;
        }

        match self.api.create_word(&draft).await {
            Ok(_) => {
                self.notifier
                    .notify(
                        format!("Word \"{}\" added successfully", draft.word),
                        Severity::Success,
                    )
                    .await;
                {
                    let mut state = self.state.write().await;
                    state.new_word = NewWord::default();
                    state.show_add_word_form = false;
                }
                self.load_all().await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error adding word: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    pub async fn add_meaning(&self, word: &str) {
        let draft = self.state.read().await.new_meaning.clone();
        if draft.translation.is_empty() {
            self.notifier
                .notify("Translation is required", Severity::Warning)
                .await;
            return;
        }

        match self.api.add_meaning(word, &draft).await {
            Ok(updated) => {
                self.notifier
                    .notify(format!("New meaning added to \"{word}\""), Severity::Success)
                    .await;
                {
                    let mut state = self.state.write().await;
                    state.new_meaning = NewMeaning::default();
                    state.show_add_meaning_form.insert(updated.id, false);
                }
                self.load_all().await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error adding meaning: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    pub async fn add_example(&self, meaning_id: i64) {
        let text = self.state.read().await.example_draft(meaning_id).to_string();
        if text.trim().is_empty() {
            self.notifier
                .notify("Example text cannot be empty", Severity::Warning)
                .await;
            return;
        }

        match self.api.add_example(meaning_id, &NewExample { text }).await {
            Ok(()) => {
                self.notifier
                    .notify("Example added successfully", Severity::Success)
                    .await;
                self.state.write().await.new_examples.remove(&meaning_id);
                self.load_all().await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error adding example: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    // Destructive operations are a two-step state machine: request
    // records the pending action, then either confirm (issues the call)
    // or decline (silent no-op) resolves it.

    pub async fn request_delete(&self, target: PendingDelete) {
        self.state.write().await.pending_delete = Some(target);
    }

    pub async fn decline_pending(&self) {
        self.state.write().await.pending_delete = None;
    }

    pub async fn confirm_pending(&self) {
        let target = self.state.write().await.pending_delete.take();
        let Some(target) = target else {
            return;
        };

        match target {
            PendingDelete::Word(word) => self.delete_word(&word).await,
            PendingDelete::Meaning(id) => self.delete_meaning(id).await,
            PendingDelete::Example(id) => self.delete_example(id).await,
            PendingDelete::Collection(id) => self.delete_collection(id).await,
            PendingDelete::CollectionWord(word) => self.remove_collection_word(&word).await,
            PendingDelete::ModalMembership(id) => self.remove_from_collection(id).await,
        }
    }

    async fn delete_word(&self, word: &str) {
        match self.api.delete_word(word).await {
            Ok(()) => {
                self.notifier
                    .notify(
                        format!("Word \"{word}\" deleted successfully"),
                        Severity::Success,
                    )
                    .await;
                self.load_all().await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error deleting word: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    async fn delete_meaning(&self, id: i64) {
        match self.api.delete_meaning(id).await {
            Ok(()) => {
                self.notifier
                    .notify("Meaning deleted successfully", Severity::Success)
                    .await;
                self.load_all().await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error deleting meaning: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    async fn delete_example(&self, id: i64) {
        match self.api.delete_example(id).await {
            Ok(()) => {
                self.notifier
                    .notify("Example deleted successfully", Severity::Success)
                    .await;
                self.load_all().await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error deleting example: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    // Collections tab

    pub async fn load_collections(&self) {
        match self.api.list_collections().await {
            Ok(collections) => {
                self.state.write().await.collections = collections;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error loading collections: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    pub async fn add_collection(&self) {
        let draft = self.state.read().await.new_collection.clone();
        if draft.name.is_empty() {
            self.notifier
                .notify("Collection name is required", Severity::Warning)
                .await;
            return;
        }

        match self.api.create_collection(&draft).await {
            Ok(_) => {
                self.notifier
                    .notify(
                        format!("Collection \"{}\" created successfully", draft.name),
                        Severity::Success,
                    )
                    .await;
                {
                    let mut state = self.state.write().await;
                    state.new_collection = NewCollection::default();
                    state.show_add_collection_form = false;
                }
                self.load_collections().await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error creating collection: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    pub async fn show_collection_details(&self, id: i64) {
        match self.api.get_collection(id).await {
            Ok(detail) => {
                let mut state = self.state.write().await;
                state.active_collection = Some(detail.collection);
                state.collection_words = detail.words;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error loading collection: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    pub async fn close_collection_details(&self) {
        let mut state = self.state.write().await;
        state.active_collection = None;
        state.collection_words.clear();
        state.word_to_add.clear();
    }

    pub async fn add_word_to_collection(&self) {
        let (word, collection_id) = {
            let state = self.state.read().await;
            (
                state.word_to_add.clone(),
                state.active_collection.as_ref().map(|c| c.id),
            )
        };
        if word.trim().is_empty() {
            self.notifier
                .notify("Word to add is required", Severity::Warning)
                .await;
            return;
        }
        let Some(collection_id) = collection_id else {
            return;
        };

        match self.api.add_word_to_collection(collection_id, &word).await {
            Ok(()) => {
                self.notifier
                    .notify(
                        format!("Word \"{word}\" added to collection"),
                        Severity::Success,
                    )
                    .await;
                self.state.write().await.word_to_add.clear();
                self.show_collection_details(collection_id).await;
            }
            Err(e) => {
                self.notifier
                    .notify(
                        format!("Error adding word to collection: {e}"),
                        Severity::Error,
                    )
                    .await;
            }
        }
    }

    async fn remove_collection_word(&self, word: &str) {
        let collection_id = {
            let state = self.state.read().await;
            state.active_collection.as_ref().map(|c| c.id)
        };
        let Some(collection_id) = collection_id else {
            return;
        };

        match self
            .api
            .remove_word_from_collection(collection_id, word)
            .await
        {
            Ok(()) => {
                self.notifier
                    .notify(
                        format!("Word \"{word}\" removed from collection"),
                        Severity::Success,
                    )
                    .await;
                self.show_collection_details(collection_id).await;
            }
            Err(e) => {
                self.notifier
                    .notify(
                        format!("Error removing word from collection: {e}"),
                        Severity::Error,
                    )
                    .await;
            }
        }
    }

    pub async fn open_edit_collection(&self, collection: &Collection) {
        let mut state = self.state.write().await;
        state.edit_collection = Some(EditCollection {
            id: collection.id,
            name: collection.name.clone(),
            description: collection.description.clone().unwrap_or_default(),
        });
    }

    pub async fn close_edit_collection(&self) {
        self.state.write().await.edit_collection = None;
    }

    pub async fn update_collection(&self) {
        let draft = self.state.read().await.edit_collection.clone();
        let Some(draft) = draft else {
            return;
        };
        if draft.name.is_empty() {
            self.notifier
                .notify("Collection name is required", Severity::Warning)
                .await;
            return;
        }

        let update = CollectionUpdate {
            name: draft.name,
            description: draft.description,
        };
        match self.api.update_collection(draft.id, &update).await {
            Ok(()) => {
                self.notifier
                    .notify("Collection updated successfully", Severity::Success)
                    .await;
                self.close_edit_collection().await;
                self.load_collections().await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error updating collection: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    async fn delete_collection(&self, id: i64) {
        match self.api.delete_collection(id).await {
            Ok(()) => {
                self.notifier
                    .notify("Collection deleted successfully", Severity::Success)
                    .await;
                self.load_collections().await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error deleting collection: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    /// Remove the modal's current word from one of its collections, then
    /// refresh the modal.
    async fn remove_from_collection(&self, collection_id: i64) {
        let word = self.state.read().await.current_word.clone();
        if word.is_empty() {
            return;
        }

        match self
            .api
            .remove_word_from_collection(collection_id, &word)
            .await
        {
            Ok(()) => {
                self.notifier
                    .notify("Word removed from collection successfully", Severity::Success)
                    .await;
                self.open_word_collections(&word).await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error removing from collection: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    // Small view toggles

    pub async fn set_active_tab(&self, tab: Tab) {
        self.state.write().await.active_tab = tab;
        match tab {
            Tab::Words => self.load_all().await,
            Tab::Collections => self.load_collections().await,
        }
    }

    pub async fn toggle_word_details(&self, word_id: i64) {
        let mut state = self.state.write().await;
        state.selected_word_id = if state.selected_word_id == Some(word_id) {
            None
        } else {
            Some(word_id)
        };
    }

    pub async fn toggle_add_word_form(&self) {
        let mut state = self.state.write().await;
        state.show_add_word_form = !state.show_add_word_form;
    }

    pub async fn toggle_add_meaning_form(&self, word_id: i64) {
        let mut state = self.state.write().await;
        let visible = state.meaning_form_visible(word_id);
        state.show_add_meaning_form.insert(word_id, !visible);
    }

    pub async fn toggle_add_collection_form(&self) {
        let mut state = self.state.write().await;
        state.show_add_collection_form = !state.show_add_collection_form;
    }
}
