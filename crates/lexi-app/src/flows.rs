//! Multi-step flows with ordered dependent calls. Each flow captures its
//! epoch token at the start and discards its results if a newer
//! invocation has begun in the meantime.

use std::collections::HashSet;

use futures_util::future::try_join_all;
use lexi_types::{Collection, Severity, Stats, Tab};

use crate::store::Store;

impl Store {
    /// Word-collections modal: fetch the word's collections, then all
    /// collections, and derive the available set as the complement.
    ///
    /// Both lists come from a completed pair of fetches for the current
    /// word; a failure at either stage aborts the flow, leaving the
    /// modal lists cleared rather than stale from a previous word.
    pub async fn open_word_collections(&self, word: &str) {
        let token = self.modal_epoch.begin();
        {
            let mut state = self.state.write().await;
            state.current_word = word.to_string();
            state.show_word_collections_modal = true;
            state.word_collections.clear();
            state.available_collections.clear();
        }

        let mine = match self.api.word_collections(word).await {
            Ok(collections) => collections,
            Err(e) => {
                // A superseded invocation's late failure must not raise
                // an error over the current word's modal
                if self.modal_epoch.is_current(token) {
                    self.notifier
                        .notify(format!("Error loading collections: {e}"), Severity::Error)
                        .await;
                }
                return;
            }
        };
        let all = match self.api.list_collections().await {
            Ok(collections) => collections,
            Err(e) => {
                if self.modal_epoch.is_current(token) {
                    self.notifier
                        .notify(format!("Error loading collections: {e}"), Severity::Error)
                        .await;
                }
                return;
            }
        };

        if !self.modal_epoch.is_current(token) {
            tracing::debug!(word, "discarding stale word-collections fetch");
            return;
        }

        let mine_ids: HashSet<i64> = mine.iter().map(|c| c.id).collect();
        let mut state = self.state.write().await;
        state.available_collections = all
            .into_iter()
            .filter(|c| !mine_ids.contains(&c.id))
            .collect();
        state.word_collections = mine;
    }

    pub async fn close_word_collections(&self) {
        self.state.write().await.clear_modal();
    }

    /// Add the modal's current word to the selected collection, then
    /// re-run the modal flow to pick up the new membership.
    pub async fn add_to_selected_collection(&self) {
        let (word, selected) = {
            let state = self.state.read().await;
            (state.current_word.clone(), state.selected_collection)
        };
        let Some(collection_id) = selected else {
            self.notifier
                .notify("Please select a collection", Severity::Warning)
                .await;
            return;
        };
        if word.is_empty() {
            return;
        }

        match self.api.add_word_to_collection(collection_id, &word).await {
            Ok(()) => {
                self.notifier
                    .notify("Word added to collection successfully", Severity::Success)
                    .await;
                self.open_word_collections(&word).await;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error adding to collection: {e}"), Severity::Error)
                    .await;
            }
        }
    }

    /// Show a collection's words in the word list: fetch the membership
    /// references, then the full detail of every member in parallel.
    ///
    /// The join is all-or-nothing and order-preserving; one failed detail
    /// fetch fails the whole flow and leaves the snapshot untouched.
    pub async fn view_collection_words(&self, collection: &Collection) {
        let token = self.words_epoch.begin();

        let detail = match self.api.get_collection(collection.id).await {
            Ok(detail) => detail,
            Err(e) => {
                self.notifier
                    .notify(
                        format!("Error loading collection words: {e}"),
                        Severity::Error,
                    )
                    .await;
                return;
            }
        };

        if !self.words_epoch.is_current(token) {
            tracing::debug!(collection = %collection.name, "discarding stale collection view");
            return;
        }

        {
            let mut state = self.state.write().await;
            state.active_tab = Tab::Words;
            state.filtered_by_collection = Some(collection.clone());
        }

        if detail.words.is_empty() {
            let mut state = self.state.write().await;
            state.words = Vec::new();
            state.stats = Some(Stats {
                count: 0,
                filtered_by: Some(collection.name.clone()),
                ..Stats::default()
            });
            state.search_term.clear();
            // Flag as a search result so the view shows a "results for
            // collection X" banner instead of a plain list
            state.searched = true;
            return;
        }

        let fetches = detail.words.iter().map(|r| self.api.get_word(&r.word));
        match try_join_all(fetches).await {
            Ok(words) => {
                if !self.words_epoch.is_current(token) {
                    tracing::debug!(
                        collection = %collection.name,
                        "discarding stale collection view"
                    );
                    return;
                }
                let mut state = self.state.write().await;
                state.stats = Some(Stats {
                    count: words.len(),
                    filtered_by: Some(collection.name.clone()),
                    ..Stats::default()
                });
                state.words = words;
                state.search_term.clear();
                state.searched = true;
            }
            Err(e) => {
                self.notifier
                    .notify(format!("Error loading word details: {e}"), Severity::Error)
                    .await;
            }
        }
    }
}
