use std::sync::Arc;

use kanal::AsyncReceiver;
use lexi_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::store::Store;

/// App's main loop: one event at a time, each handler running to
/// completion before the next event is taken.
pub async fn event_loop(
    store: Arc<Store>,
    ui_rx: AsyncReceiver<AppEvent>,
    cancel_token: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("event loop started");
    loop {
        let event = tokio::select! {
            _ = cancel_token.cancelled() => {
                tracing::info!("event loop stopping");
                return Ok(());
            }
            event = ui_rx.recv() => event?,
        };

        tracing::debug!(?event, "handling event");
        handle_event(&store, event).await;
    }
}

async fn handle_event(store: &Store, event: AppEvent) {
    match event {
        AppEvent::LoadWords => store.load_all().await,
        AppEvent::SearchWords(term) => store.search(&term).await,
        AppEvent::AddWord => store.add_word().await,
        AppEvent::AddMeaning(word) => store.add_meaning(&word).await,
        AppEvent::AddExample(meaning_id) => store.add_example(meaning_id).await,
        AppEvent::RequestDelete(target) => store.request_delete(target).await,
        AppEvent::ConfirmDelete => store.confirm_pending().await,
        AppEvent::DeclineDelete => store.decline_pending().await,
        AppEvent::LoadCollections => store.load_collections().await,
        AppEvent::AddCollection => store.add_collection().await,
        AppEvent::ShowCollectionDetails(id) => store.show_collection_details(id).await,
        AppEvent::CloseCollectionDetails => store.close_collection_details().await,
        AppEvent::AddWordToCollection => store.add_word_to_collection().await,
        AppEvent::OpenEditCollection(collection) => {
            store.open_edit_collection(&collection).await;
        }
        AppEvent::CloseEditCollection => store.close_edit_collection().await,
        AppEvent::UpdateCollection => store.update_collection().await,
        AppEvent::OpenWordCollections(word) => store.open_word_collections(&word).await,
        AppEvent::CloseWordCollections => store.close_word_collections().await,
        AppEvent::AddToSelectedCollection => store.add_to_selected_collection().await,
        AppEvent::ViewCollectionWords(collection) => {
            store.view_collection_words(&collection).await;
        }
        AppEvent::SetActiveTab(tab) => store.set_active_tab(tab).await,
        AppEvent::ToggleWordDetails(word_id) => store.toggle_word_details(word_id).await,
        AppEvent::ToggleAddWordForm => store.toggle_add_word_form().await,
        AppEvent::ToggleAddMeaningForm(word_id) => store.toggle_add_meaning_form(word_id).await,
        AppEvent::ToggleAddCollectionForm => store.toggle_add_collection_form().await,
    }
}
