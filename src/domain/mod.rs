mod error;
mod metrics;
mod models;
mod outcome;
mod storage;

// Publicly expose the Metrics abstraction
pub use self::metrics::{Metrics, MetricsPtr};

// Publicly expose the storage abstraction and the documents kept in it
pub use error::{StoreError, StoreResult};
pub use models::{Deck, DeckPatch, Flashcard, FlashcardPatch, NewDeck, NewFlashcard, User};
pub use outcome::Outcome;
pub use storage::{KeyValueStorage, StoragePtr};
