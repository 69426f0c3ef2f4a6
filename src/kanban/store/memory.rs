use super::CardStore;
use crate::error::{KanbanError, Result};
use crate::model::{Card, CardStatus};
use log::info;
use uuid::Uuid;

/// In-memory card storage. Lives as long as the owning api.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    cards: Vec<Card>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store bootstrapped with one example card per representative column.
    pub fn with_examples() -> Self {
        let cards = vec![
            Card::new(
                "範例任務 1",
                "這是一個範例任務描述".to_string(),
                CardStatus::Todo,
            ),
            Card::new(
                "範例任務 2",
                "這是另一個範例任務".to_string(),
                CardStatus::InProgress,
            ),
            Card::new(
                "範例任務 3",
                "已完成的範例任務".to_string(),
                CardStatus::Done,
            ),
        ];
        info!("bootstrapping card store with {} example cards", cards.len());
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn position(&self, id: &Uuid) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == *id)
    }
}

impl CardStore for InMemoryStore {
    fn save_card(&mut self, card: &Card) -> Result<()> {
        match self.position(&card.id()) {
            Some(idx) => self.cards[idx] = card.clone(),
            None => self.cards.push(card.clone()),
        }
        Ok(())
    }

    fn get_card(&self, id: &Uuid) -> Result<Card> {
        self.cards
            .iter()
            .find(|card| card.id() == *id)
            .cloned()
            .ok_or_else(|| KanbanError::CardNotFound(id.to_string()))
    }

    fn list_cards(&self) -> Result<Vec<Card>> {
        Ok(self.cards.clone())
    }

    fn delete_card(&mut self, id: &Uuid) -> Result<Card> {
        let idx = self
            .position(id)
            .ok_or_else(|| KanbanError::CardNotFound(id.to_string()))?;
        Ok(self.cards.remove(idx))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_cards(mut self, count: usize, status: CardStatus) -> Self {
            for i in 0..count {
                let card = Card::new(
                    &format!("Test Card {}", i + 1),
                    format!("Description for card {}", i + 1),
                    status,
                );
                self.store.save_card(&card).unwrap();
            }
            self
        }

        pub fn with_card(mut self, title: &str, status: CardStatus) -> Self {
            let card = Card::new(title, "Some description".to_string(), status);
            self.store.save_card(&card).unwrap();
            self
        }

        /// Id of the first card whose title matches exactly.
        pub fn id_of(&self, title: &str) -> Uuid {
            self.store
                .list_cards()
                .unwrap()
                .into_iter()
                .find(|card| card.title() == title)
                .map(|card| card.id())
                .unwrap()
        }
    }
}
