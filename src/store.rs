//! The local store: sole owner of persisted users, decks and the session token.
//!
//! Every operation reads whole documents from the injected backend, changes
//! them in memory and writes them back in one call. Operations on one store
//! (and its clones) run one at a time, so a double-tap cannot interleave two
//! read-modify-write cycles. Separate processes sharing a backend still race,
//! and the later write wins.

use crate::domain::{
    Deck, DeckPatch, Flashcard, FlashcardPatch, MetricsPtr, NewDeck, NewFlashcard, StoragePtr,
    StoreError, StoreResult, User,
};
use crate::seed;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Key holding the active session token (a raw string).
pub const TOKEN_KEY: &str = "authToken";

/// Key holding the JSON array of decks.
pub const DECKS_KEY: &str = "decks";

/// Key holding the JSON array of users.
pub const USERS_KEY: &str = "app_users";

/// Flashcard deck store with local credential login.
///
/// Cheap to clone; clones share the backend and the operation gate.
#[derive(Clone)]
pub struct LocalStore {
    // ---
    storage: StoragePtr,
    metrics: MetricsPtr,
    gate: Arc<Mutex<()>>,
}

impl LocalStore {
    // ---
    pub fn new(storage: StoragePtr, metrics: MetricsPtr) -> Self {
        // ---
        Self {
            storage,
            metrics,
            gate: Arc::new(Mutex::new(())),
        }
    }

    /// Writes the demo user and the deck catalog if their documents are
    /// missing. Every other operation does this implicitly.
    pub async fn initialize(&self) -> StoreResult<()> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();
        let result = self.seed_if_missing().await;
        self.observe("initialize", start, result)
    }

    // ============================================================
    // Accounts and session
    // ============================================================

    /// Adds a user. Fails with [`StoreError::DuplicateUser`] if the username
    /// (case-sensitive) is already taken, leaving the user list unchanged.
    #[tracing::instrument(skip(self, password))]
    pub async fn register(&self, username: &str, password: &str) -> StoreResult<()> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result: StoreResult<()> = async {
            self.seed_if_missing().await?;
            let mut users: Vec<User> = self.read_doc(USERS_KEY).await?.unwrap_or_default();

            if users.iter().any(|u| u.username == username) {
                return Err(StoreError::DuplicateUser(username.to_string()));
            }

            users.push(User::new(username, password));
            self.write_doc(USERS_KEY, &users).await?;
            tracing::info!("Registered user {}", username);
            Ok(())
        }
        .await;

        self.observe("register", start, result)
    }

    /// Checks the credentials and, on a match, stores and returns a fresh
    /// session token, replacing any previous one.
    ///
    /// On a mismatch no token is written.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> StoreResult<String> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result: StoreResult<String> = async {
            self.seed_if_missing().await?;
            let users: Vec<User> = self.read_doc(USERS_KEY).await?.unwrap_or_default();

            if !users.iter().any(|u| u.matches(username, password)) {
                self.metrics.record_login(false);
                tracing::warn!("Rejected login for {}", username);
                return Err(StoreError::InvalidCredentials);
            }

            let token = Uuid::new_v4().to_string();
            self.storage
                .set_item(TOKEN_KEY, &token)
                .await
                .map_err(StoreError::storage)?;

            self.metrics.record_login(true);
            tracing::info!("Created session for user: {}", username);
            Ok(token)
        }
        .await;

        self.observe("login", start, result)
    }

    /// Removes the session token. Succeeds when no session exists.
    #[tracing::instrument(skip(self))]
    pub async fn logout(&self) -> StoreResult<()> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result = self
            .storage
            .remove_item(TOKEN_KEY)
            .await
            .map_err(StoreError::storage);

        self.observe("logout", start, result)
    }

    /// The active session token, if someone is logged in.
    pub async fn session_token(&self) -> StoreResult<Option<String>> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result = self
            .storage
            .get_item(TOKEN_KEY)
            .await
            .map_err(StoreError::storage);

        self.observe("session_token", start, result)
    }

    /// True while a session token is stored.
    pub async fn is_authenticated(&self) -> StoreResult<bool> {
        Ok(self.session_token().await?.is_some())
    }

    // ============================================================
    // Decks
    // ============================================================

    /// Every deck, seeding the catalog first if needed.
    pub async fn get_decks(&self) -> StoreResult<Vec<Deck>> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();
        let result = self.load_decks().await;
        self.observe("get_decks", start, result)
    }

    /// The deck with `id`, or `None` if there is none.
    pub async fn get_deck_by_id(&self, id: &str) -> StoreResult<Option<Deck>> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result = self
            .load_decks()
            .await
            .map(|decks| decks.into_iter().find(|d| d.id == id));

        self.observe("get_deck_by_id", start, result)
    }

    /// Appends a new deck with a fresh id. Missing flashcards default to
    /// an empty list.
    #[tracing::instrument(skip(self, new_deck), fields(title = %new_deck.title))]
    pub async fn create_deck(&self, new_deck: NewDeck) -> StoreResult<Deck> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result: StoreResult<Deck> = async {
            let mut decks = self.load_decks().await?;
            let id = unique_id(|id| decks.iter().any(|d| d.id == id), || {
                Uuid::new_v4().to_string()
            });

            let deck = new_deck.into_deck(id);
            decks.push(deck.clone());
            self.write_doc(DECKS_KEY, &decks).await?;

            self.metrics.record_deck_created();
            tracing::info!("Created deck {}", deck.id);
            Ok(deck)
        }
        .await;

        self.observe("create_deck", start, result)
    }

    /// Merges `patch` onto the deck's metadata. The deck keeps its id and its
    /// flashcards whatever the patch contains.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_deck(&self, id: &str, patch: DeckPatch) -> StoreResult<Deck> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result: StoreResult<Deck> = async {
            let mut decks = self.load_decks().await?;
            let deck = decks
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| StoreError::DeckNotFound(id.to_string()))?;

            deck.apply(patch);
            let updated = deck.clone();

            self.write_doc(DECKS_KEY, &decks).await?;
            tracing::info!("Updated deck {}", id);
            Ok(updated)
        }
        .await;

        self.observe("update_deck", start, result)
    }

    /// Removes the deck and its flashcards. Deleting a missing id succeeds.
    #[tracing::instrument(skip(self))]
    pub async fn delete_deck(&self, id: &str) -> StoreResult<()> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result: StoreResult<()> = async {
            let mut decks = self.load_decks().await?;
            let before = decks.len();
            decks.retain(|d| d.id != id);

            self.write_doc(DECKS_KEY, &decks).await?;
            if decks.len() < before {
                tracing::info!("Deleted deck {}", id);
            } else {
                tracing::debug!("Deck {} was already absent", id);
            }
            Ok(())
        }
        .await;

        self.observe("delete_deck", start, result)
    }

    // ============================================================
    // Flashcards
    // ============================================================

    /// Appends a card to the deck, assigning an id prefixed by the deck id.
    #[tracing::instrument(skip(self, card))]
    pub async fn add_flashcard(&self, deck_id: &str, card: NewFlashcard) -> StoreResult<Flashcard> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result: StoreResult<Flashcard> = async {
            let mut decks = self.load_decks().await?;
            let deck = find_deck(&mut decks, deck_id)?;

            let id = unique_id(|id| deck.flashcard(id).is_some(), || {
                format!("{deck_id}-{}", Uuid::new_v4().simple())
            });
            let flashcard = Flashcard {
                id,
                question: card.question,
                answer: card.answer,
            };
            deck.flashcards.push(flashcard.clone());

            self.write_doc(DECKS_KEY, &decks).await?;
            tracing::info!("Added flashcard {} to deck {}", flashcard.id, deck_id);
            Ok(flashcard)
        }
        .await;

        self.observe("add_flashcard", start, result)
    }

    /// Merges `patch` onto one card. Fails if the deck or the card is missing.
    #[tracing::instrument(skip(self, patch))]
    pub async fn update_flashcard(
        &self,
        deck_id: &str,
        flashcard_id: &str,
        patch: FlashcardPatch,
    ) -> StoreResult<Flashcard> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result: StoreResult<Flashcard> = async {
            let mut decks = self.load_decks().await?;
            let deck = find_deck(&mut decks, deck_id)?;

            let card = deck
                .flashcards
                .iter_mut()
                .find(|c| c.id == flashcard_id)
                .ok_or_else(|| StoreError::FlashcardNotFound {
                    deck_id: deck_id.to_string(),
                    id: flashcard_id.to_string(),
                })?;

            card.apply(patch);
            let updated = card.clone();

            self.write_doc(DECKS_KEY, &decks).await?;
            Ok(updated)
        }
        .await;

        self.observe("update_flashcard", start, result)
    }

    /// Removes one card from the deck. Fails only if the deck is missing; a
    /// missing card id is a no-op.
    #[tracing::instrument(skip(self))]
    pub async fn delete_flashcard(&self, deck_id: &str, flashcard_id: &str) -> StoreResult<()> {
        // ---
        let _guard = self.gate.lock().await;
        let start = Instant::now();

        let result: StoreResult<()> = async {
            let mut decks = self.load_decks().await?;
            let deck = find_deck(&mut decks, deck_id)?;
            deck.flashcards.retain(|c| c.id != flashcard_id);

            self.write_doc(DECKS_KEY, &decks).await
        }
        .await;

        self.observe("delete_flashcard", start, result)
    }

    /// Current metrics in Prometheus text format (empty for no-op metrics).
    pub fn metrics_snapshot(&self) -> String {
        self.metrics.render()
    }

    // ============================================================
    // Internals (callers hold the gate)
    // ============================================================

    async fn seed_if_missing(&self) -> StoreResult<()> {
        // ---
        if self.raw(DECKS_KEY).await?.is_none() {
            tracing::info!("Seeding deck catalog");
            self.write_doc(DECKS_KEY, &seed::seed_decks()).await?;
        }
        if self.raw(USERS_KEY).await?.is_none() {
            tracing::info!("Seeding demo user");
            self.write_doc(USERS_KEY, &seed::seed_users()).await?;
        }
        Ok(())
    }

    async fn load_decks(&self) -> StoreResult<Vec<Deck>> {
        // ---
        self.seed_if_missing().await?;
        Ok(self.read_doc(DECKS_KEY).await?.unwrap_or_default())
    }

    async fn raw(&self, key: &str) -> StoreResult<Option<String>> {
        // ---
        self.storage.get_item(key).await.map_err(StoreError::storage)
    }

    /// Parses the document under `key`. A JSON `null` yields `None`, the same
    /// as an absent key. Seeding only looks at key presence, so it stays put.
    async fn read_doc<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        // ---
        match self.raw(key).await? {
            None => Ok(None),
            Some(json) => serde_json::from_str::<Option<T>>(&json)
                .map_err(|e| StoreError::StorageFailure(format!("corrupt {key} document: {e}"))),
        }
    }

    async fn write_doc<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        // ---
        let json = serde_json::to_string(value).map_err(StoreError::storage)?;
        self.storage
            .set_item(key, &json)
            .await
            .map_err(StoreError::storage)
    }

    /// Records timing and storage failures for a finished operation.
    fn observe<T>(&self, operation: &str, start: Instant, result: StoreResult<T>) -> StoreResult<T> {
        // ---
        if let Err(StoreError::StorageFailure(message)) = &result {
            tracing::error!("{} failed: {}", operation, message);
            self.metrics.record_storage_failure();
        }
        self.metrics
            .record_operation(start, operation, result.is_ok());
        result
    }
}

fn find_deck<'a>(decks: &'a mut [Deck], id: &str) -> StoreResult<&'a mut Deck> {
    // ---
    decks
        .iter_mut()
        .find(|d| d.id == id)
        .ok_or_else(|| StoreError::DeckNotFound(id.to_string()))
}

/// Draws ids from `generate` until one is not `taken`.
fn unique_id(taken: impl Fn(&str) -> bool, generate: impl Fn() -> String) -> String {
    // ---
    loop {
        let id = generate();
        if !taken(&id) {
            return id;
        }
    }
}
