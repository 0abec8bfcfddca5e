//! Seed data written the first time a store finds its documents missing.
//!
//! One demo account and a catalog of ten language decks, five cards each.
//! Seeded deck ids are `"1"` to `"10"`; card ids are `"<deck>-<n>"`.

use crate::domain::{Deck, Flashcard, User};
use once_cell::sync::Lazy;

pub const DEMO_USERNAME: &str = "mor_2314";
pub const DEMO_PASSWORD: &str = "83r5^_";

const SEED_CATEGORY: &str = "Langues";

static SEED_DECKS: Lazy<Vec<Deck>> = Lazy::new(|| {
    vec![
        deck(
            "1",
            "🇬🇧 Anglais - Vocabulaire de base",
            "Mots essentiels pour débuter en anglais",
            "anglais",
            "Débutant",
            &[
                ("Bonjour", "Hello"),
                ("Merci", "Thank you"),
                ("Au revoir", "Goodbye"),
                ("S'il vous plaît", "Please"),
                ("Excusez-moi", "Excuse me"),
            ],
        ),
        deck(
            "2",
            "🇪🇸 Espagnol - Phrases courantes",
            "Expressions utiles pour voyager",
            "espagnol",
            "Débutant",
            &[
                ("Bonjour", "Hola"),
                ("Merci", "Gracias"),
                ("Au revoir", "Adiós"),
                ("Comment allez-vous?", "¿Cómo está?"),
                ("Très bien", "Muy bien"),
            ],
        ),
        deck(
            "3",
            "🇩🇪 Allemand - Vie quotidienne",
            "Vocabulaire du quotidien en allemand",
            "allemand",
            "Intermédiaire",
            &[
                ("Bonjour", "Guten Tag"),
                ("Merci", "Danke"),
                ("Bonne nuit", "Gute Nacht"),
                ("École", "Schule"),
                ("Voiture", "Auto"),
            ],
        ),
        deck(
            "4",
            "🇮🇹 Italien - Restaurant & Cuisine",
            "Vocabulaire pour commander au restaurant",
            "italien",
            "Débutant",
            &[
                ("Pizza", "Pizza"),
                ("Pâtes", "Pasta"),
                ("Café", "Caffè"),
                ("L'addition", "Il conto"),
                ("Délicieux", "Delizioso"),
            ],
        ),
        deck(
            "5",
            "🇯🇵 Japonais - Hiragana",
            "Apprentissage des caractères hiragana",
            "japonais",
            "Débutant",
            &[
                ("Bonjour", "こんにちは (Konnichiwa)"),
                ("Merci", "ありがとう (Arigatou)"),
                ("Oui", "はい (Hai)"),
                ("Non", "いいえ (Iie)"),
                ("École", "がっこう (Gakkou)"),
            ],
        ),
        deck(
            "6",
            "🇨🇳 Chinois - HSK 1",
            "Vocabulaire de base HSK niveau 1",
            "chinois",
            "Débutant",
            &[
                ("Bonjour", "你好 (Nǐ hǎo)"),
                ("Merci", "谢谢 (Xièxiè)"),
                ("Je", "我 (Wǒ)"),
                ("Chine", "中国 (Zhōngguó)"),
                ("Étudier", "学习 (Xuéxí)"),
            ],
        ),
        deck(
            "7",
            "🇧🇷 Portugais - Voyages",
            "Phrases utiles pour voyager au Brésil",
            "portugais",
            "Débutant",
            &[
                ("Bonjour", "Olá"),
                ("Plage", "Praia"),
                ("Soleil", "Sol"),
                ("Football", "Futebol"),
                ("Merci", "Obrigado"),
            ],
        ),
        deck(
            "8",
            "🇷🇺 Russe - Alphabet cyrillique",
            "Apprendre à lire le cyrillique",
            "russe",
            "Débutant",
            &[
                ("Bonjour", "Привет (Privet)"),
                ("Merci", "Спасибо (Spasibo)"),
                ("Oui", "Да (Da)"),
                ("Non", "Нет (Net)"),
                ("Russie", "Россия (Rossiya)"),
            ],
        ),
        deck(
            "9",
            "🇸🇦 Arabe - Salutations",
            "Formules de politesse en arabe",
            "arabe",
            "Débutant",
            &[
                ("Paix sur vous", "السلام عليكم (As-salāmu ʿalaykum)"),
                ("Merci", "شكرا (Shukran)"),
                ("Oui", "نعم (Na'am)"),
                ("Maison", "بيت (Bayt)"),
                ("Livre", "كتاب (Kitab)"),
            ],
        ),
        deck(
            "10",
            "🇰🇷 Coréen - K-pop & Culture",
            "Vocabulaire de la culture coréenne",
            "coréen",
            "Intermédiaire",
            &[
                ("Bonjour", "안녕하세요 (Annyeonghaseyo)"),
                ("Merci", "감사합니다 (Gamsahamnida)"),
                ("K-pop", "케이팝 (K-pop)"),
                ("Chanson", "노래 (Norae)"),
                ("Corée", "한국 (Hanguk)"),
            ],
        ),
    ]
});

fn deck(
    id: &str,
    title: &str,
    description: &str,
    language: &str,
    level: &str,
    cards: &[(&str, &str)],
) -> Deck {
    // ---
    Deck {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: SEED_CATEGORY.to_string(),
        language: language.to_string(),
        level: level.to_string(),
        flashcards: cards
            .iter()
            .enumerate()
            .map(|(i, (question, answer))| Flashcard {
                id: format!("{id}-{}", i + 1),
                question: question.to_string(),
                answer: answer.to_string(),
            })
            .collect(),
    }
}

/// The user list written when no `app_users` document exists.
pub fn seed_users() -> Vec<User> {
    vec![User::new(DEMO_USERNAME, DEMO_PASSWORD)]
}

/// The deck catalog written when no `decks` document exists.
pub fn seed_decks() -> Vec<Deck> {
    SEED_DECKS.clone()
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_ten_decks_with_sequential_ids() {
        // ---
        let decks = seed_decks();
        let ids: Vec<&str> = decks.iter().map(|d| d.id.as_str()).collect();

        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        assert!(decks.iter().all(|d| d.flashcards.len() == 5));
        assert!(decks.iter().all(|d| d.category == SEED_CATEGORY));
    }

    #[test]
    fn card_ids_are_prefixed_and_unique() {
        // ---
        for deck in seed_decks() {
            let ids: HashSet<&str> = deck.flashcards.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids.len(), deck.flashcards.len());
            assert!(deck
                .flashcards
                .iter()
                .all(|c| c.id.starts_with(&format!("{}-", deck.id))));
        }
    }

    #[test]
    fn single_demo_user() {
        // ---
        let users = seed_users();
        assert_eq!(users.len(), 1);
        assert!(users[0].matches(DEMO_USERNAME, DEMO_PASSWORD));
    }
}
