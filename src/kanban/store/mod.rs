//! # Storage Layer
//!
//! This module defines the storage abstraction for kanban. The [`CardStore`] trait
//! lets the command layer work against any ordered card collection.
//!
//! ## Ownership
//!
//! The store owns every [`Card`] exclusively. Reads hand out clones, and commands
//! write a card back through [`CardStore::save_card`] only after it passed validation.
//! Nothing outside the store keeps a writable reference to a live card.
//!
//! ## Ordering
//!
//! Cards are kept in insertion order. Saving an existing card replaces it in place, so
//! updates never move a card within the collection. There is no position field; the
//! board only tracks which column a card belongs to.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: process-lifetime storage, optionally bootstrapped with
//!   example cards. There is no persistent backend.

use crate::error::Result;
use crate::model::Card;
use uuid::Uuid;

pub mod memory;

/// Abstract interface for card storage.
pub trait CardStore {
    /// Replace the card with the same id, or append it if it is new
    fn save_card(&mut self, card: &Card) -> Result<()>;

    /// Get a card by ID
    fn get_card(&self, id: &Uuid) -> Result<Card>;

    /// List all cards in insertion order
    fn list_cards(&self) -> Result<Vec<Card>>;

    /// Remove a card and return it
    fn delete_card(&mut self, id: &Uuid) -> Result<Card>;
}
