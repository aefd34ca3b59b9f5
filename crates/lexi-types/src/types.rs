use serde::{Deserialize, Serialize};

/// A dictionary entry. The headword string doubles as the client-facing
/// identifier for path-based operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub id: i64,
    pub word: String,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    pub id: i64,
    pub translation: String,
    #[serde(default)]
    pub transcription: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Membership reference inside a collection detail: enough to fetch the
/// full word, nothing more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRef {
    pub id: i64,
    pub word: String,
}

/// Aggregate header above the word list. The totals are only present for
/// the full unfiltered list; search and collection-filtered views carry a
/// count (and, for collections, the filter label) only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_meanings: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_examples: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filtered_by: Option<String>,
}

/// Draft buffer for the add-word form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewWord {
    pub word: String,
    pub transcription: String,
    pub description: String,
    pub translation: String,
    pub examples: String,
}

/// Draft buffer for the add-meaning form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewMeaning {
    pub transcription: String,
    pub description: String,
    pub translation: String,
    pub examples: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCollection {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionUpdate {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExample {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Warning,
}

/// Transient status message shown above the page.
#[derive(Debug, Clone)]
pub struct Notification {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
}

impl Default for Notification {
    fn default() -> Self {
        Self {
            visible: false,
            message: String::new(),
            severity: Severity::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Words,
    Collections,
}

/// A destructive operation waiting for the user's explicit confirmation.
/// The network call is only issued on the confirmed transition; declining
/// clears the pending action without any call.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingDelete {
    Word(String),
    Meaning(i64),
    Example(i64),
    Collection(i64),
    /// Remove a word from the currently open collection detail pane.
    CollectionWord(String),
    /// Remove the modal's current word from one of its collections.
    ModalMembership(i64),
}

/// User actions consumed by the app event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    LoadWords,
    SearchWords(String),
    AddWord,
    AddMeaning(String),
    AddExample(i64),
    RequestDelete(PendingDelete),
    ConfirmDelete,
    DeclineDelete,
    LoadCollections,
    AddCollection,
    ShowCollectionDetails(i64),
    CloseCollectionDetails,
    AddWordToCollection,
    OpenEditCollection(Collection),
    CloseEditCollection,
    UpdateCollection,
    OpenWordCollections(String),
    CloseWordCollections,
    AddToSelectedCollection,
    ViewCollectionWords(Collection),
    SetActiveTab(Tab),
    ToggleWordDetails(i64),
    ToggleAddWordForm,
    ToggleAddMeaningForm(i64),
    ToggleAddCollectionForm,
}
