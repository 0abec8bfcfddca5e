use serde::{Deserialize, Serialize};

/// A registered account, stored in the `app_users` document.
///
/// Passwords are stored and compared as given. This is a known limitation
/// of the local store, not a property callers should build on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    // ---
    pub username: String,
    pub password: String,
}

impl User {
    // ---
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        // ---
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Exact, case-sensitive match on both fields.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        // ---
        self.username == username && self.password == password
    }
}

/// A question/answer pair owned by exactly one [`Deck`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    // ---
    /// Prefixed by the owning deck id, unique within that deck.
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// A named collection of flashcards sharing a language, level and category.
///
/// Flashcards are embedded by value; deleting the deck deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    // ---
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
}

impl Deck {
    // ---
    /// Merge metadata from `patch` onto this deck.
    ///
    /// The deck id and its flashcards are never touched, whatever the patch
    /// carries.
    pub fn apply(&mut self, patch: DeckPatch) {
        // ---
        let DeckPatch {
            title,
            description,
            category,
            language,
            level,
            flashcards: _,
        } = patch;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(language) = language {
            self.language = language;
        }
        if let Some(level) = level {
            self.level = level;
        }
    }

    pub fn flashcard(&self, flashcard_id: &str) -> Option<&Flashcard> {
        // ---
        self.flashcards.iter().find(|c| c.id == flashcard_id)
    }
}

/// Input for creating a deck. The store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDeck {
    // ---
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flashcards: Option<Vec<Flashcard>>,
}

impl NewDeck {
    // ---
    pub fn new(title: impl Into<String>) -> Self {
        // ---
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn flashcards(mut self, flashcards: Vec<Flashcard>) -> Self {
        self.flashcards = Some(flashcards);
        self
    }

    pub(crate) fn into_deck(self, id: String) -> Deck {
        // ---
        Deck {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            language: self.language,
            level: self.level,
            flashcards: self.flashcards.unwrap_or_default(),
        }
    }
}

/// Partial update for deck metadata.
///
/// `flashcards` is accepted so that whole-deck payloads deserialize, but it is
/// ignored by [`Deck::apply`]. Cards change only through the flashcard
/// operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckPatch {
    // ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flashcards: Option<Vec<Flashcard>>,
}

/// Input for adding a card to a deck. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFlashcard {
    // ---
    pub question: String,
    pub answer: String,
}

impl NewFlashcard {
    // ---
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        // ---
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Partial update for a single flashcard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardPatch {
    // ---
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl Flashcard {
    // ---
    pub fn apply(&mut self, patch: FlashcardPatch) {
        // ---
        if let Some(question) = patch.question {
            self.question = question;
        }
        if let Some(answer) = patch.answer {
            self.answer = answer;
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    fn sample_deck() -> Deck {
        // ---
        Deck {
            id: "42".to_string(),
            title: "Old".to_string(),
            description: "desc".to_string(),
            category: "Langues".to_string(),
            language: "anglais".to_string(),
            level: "Débutant".to_string(),
            flashcards: vec![Flashcard {
                id: "42-1".to_string(),
                question: "Bonjour".to_string(),
                answer: "Hello".to_string(),
            }],
        }
    }

    #[test]
    fn deck_patch_merges_only_present_fields() {
        // ---
        let mut deck = sample_deck();
        deck.apply(DeckPatch {
            title: Some("New".to_string()),
            level: Some("Intermédiaire".to_string()),
            ..Default::default()
        });

        assert_eq!(deck.id, "42");
        assert_eq!(deck.title, "New");
        assert_eq!(deck.level, "Intermédiaire");
        assert_eq!(deck.description, "desc");
        assert_eq!(deck.language, "anglais");
    }

    #[test]
    fn deck_patch_never_replaces_flashcards() {
        // ---
        let mut deck = sample_deck();
        let before = deck.flashcards.clone();

        deck.apply(DeckPatch {
            flashcards: Some(Vec::new()),
            ..Default::default()
        });

        assert_eq!(deck.flashcards, before);
    }

    #[test]
    fn deck_document_tolerates_missing_fields() {
        // ---
        let deck: Deck = serde_json::from_str(r#"{"id":"7","title":"Only title"}"#).unwrap();

        assert_eq!(deck.id, "7");
        assert_eq!(deck.title, "Only title");
        assert!(deck.category.is_empty());
        assert!(deck.flashcards.is_empty());
    }

    #[test]
    fn flashcard_patch_keeps_unset_fields() {
        // ---
        let mut card = sample_deck().flashcards.remove(0);
        card.apply(FlashcardPatch {
            answer: Some("Hi".to_string()),
            ..Default::default()
        });

        assert_eq!(card.question, "Bonjour");
        assert_eq!(card.answer, "Hi");
    }

    #[test]
    fn user_match_is_case_sensitive() {
        // ---
        let user = User::new("mor_2314", "83r5^_");

        assert!(user.matches("mor_2314", "83r5^_"));
        assert!(!user.matches("MOR_2314", "83r5^_"));
        assert!(!user.matches("mor_2314", "83R5^_"));
    }
}
