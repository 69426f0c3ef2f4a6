//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point a transport (HTTP server, test harness, anything else) talks to.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs**: raw id strings become UUIDs, raw status strings become
//!   [`CardStatus`](crate::model::CardStatus) values, query values become a [`CardFilter`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Transport concerns**: no status codes, envelopes or routes. A transport maps
//!   [`KanbanError::is_not_found`] to 404, [`KanbanError::is_validation`] to 400.
//!
//! ## Ownership
//!
//! `KanbanApi<S>` owns its store. Mutating methods take `&mut self`, so within one
//! thread operations can never interleave. For hosts that serve requests from many
//! threads, wrap the api in [`SharedKanban`](crate::shared::SharedKanban).
//!
//! ## Batch Input
//!
//! The drag-and-drop endpoint receives `{updates: [...]}`. [`parse_status_changes`]
//! turns the `updates` value into pairs: a non-array is a validation error, entries
//! that are not `{id, status}` string objects are dropped like any other invalid pair.

use crate::commands;
use crate::commands::helpers::{parse_card_id, parse_status_or_default};
use crate::config::KanbanConfig;
use crate::error::{KanbanError, Result};
use crate::store::memory::InMemoryStore;
use crate::store::CardStore;
use serde_json::Value;

/// The main API facade for board operations.
pub struct KanbanApi<S: CardStore> {
    store: S,
}

impl<S: CardStore> KanbanApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn list_cards(&self, filter: CardFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn get_card(&self, id: &str) -> Result<CmdResult> {
        let id = parse_card_id(id)?;
        commands::get::run(&self.store, &id)
    }

    pub fn create_card(&mut self, new_card: NewCard) -> Result<CmdResult> {
        let status = parse_status_or_default(new_card.status.as_deref())?;
        commands::create::run(
            &mut self.store,
            &new_card.title,
            new_card.description,
            status,
        )
    }

    pub fn update_card(&mut self, id: &str, patch: &CardPatch) -> Result<CmdResult> {
        let id = parse_card_id(id)?;
        commands::update::run(&mut self.store, &id, patch)
    }

    pub fn delete_card(&mut self, id: &str) -> Result<CmdResult> {
        let id = parse_card_id(id)?;
        commands::delete::run(&mut self.store, &id)
    }

    pub fn batch_update_status(&mut self, changes: &[StatusChange]) -> Result<CmdResult> {
        commands::batch::run(&mut self.store, changes)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl KanbanApi<InMemoryStore> {
    /// An in-memory board, seeded with example cards when the config asks for it.
    pub fn from_config(config: &KanbanConfig) -> Self {
        let store = if config.seed_examples {
            InMemoryStore::with_examples()
        } else {
            InMemoryStore::new()
        };
        Self::new(store)
    }
}

/// Decodes the `updates` value of a batch request.
pub fn parse_status_changes(updates: &Value) -> Result<Vec<StatusChange>> {
    let entries = updates
        .as_array()
        .ok_or_else(|| KanbanError::Validation("updates must be an array".to_string()))?;

    Ok(entries
        .iter()
        .filter_map(|entry| serde_json::from_value::<StatusChange>(entry.clone()).ok())
        .collect())
}

pub use crate::commands::list::CardFilter;
pub use crate::commands::{
    CardPatch, CmdMessage, CmdResult, GroupedCards, MessageLevel, NewCard, StatusChange,
};
