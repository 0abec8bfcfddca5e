use thiserror::Error;

/// Errors returned by [`crate::LocalStore`] operations.
///
/// Backend failures never escape as panics or raw `anyhow` errors; the store
/// converts them into [`StoreError::StorageFailure`] at its boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    // ---
    #[error("username already taken: {0}")]
    DuplicateUser(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("deck not found: {0}")]
    DeckNotFound(String),

    #[error("flashcard not found: {id} (deck {deck_id})")]
    FlashcardNotFound { deck_id: String, id: String },

    #[error("storage failure: {0}")]
    StorageFailure(String),
}

impl StoreError {
    // ---
    /// True for both the deck and flashcard not-found variants.
    pub fn is_not_found(&self) -> bool {
        // ---
        matches!(
            self,
            StoreError::DeckNotFound(_) | StoreError::FlashcardNotFound { .. }
        )
    }

    pub(crate) fn storage(err: impl std::fmt::Display) -> Self {
        // ---
        StoreError::StorageFailure(err.to_string())
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn not_found_groups_deck_and_flashcard() {
        // ---
        assert!(StoreError::DeckNotFound("1".into()).is_not_found());
        assert!(StoreError::FlashcardNotFound {
            deck_id: "1".into(),
            id: "1-1".into()
        }
        .is_not_found());
        assert!(!StoreError::InvalidCredentials.is_not_found());
    }

    #[test]
    fn storage_failure_keeps_the_cause_message() {
        // ---
        let err = StoreError::storage(anyhow::anyhow!("disk full"));
        assert_eq!(err.to_string(), "storage failure: disk full");
    }
}
