//! # Command Layer
//!
//! This module contains the **core business logic** of kanban. Each operation lives in
//! its own submodule and is a plain Rust function over a [`CardStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Enforce the card invariants before anything reaches the store
//! - Return structured [`CmdResult`] values carrying card snapshots and messages
//! - Never hand out live [`Card`](crate::model::Card) values
//!
//! ## What Commands Do NOT Do
//!
//! - **Transport**: no HTTP, status codes, or JSON envelopes
//! - **Retries**: a rejected mutation is reported, never retried
//! - **Partial commits**: a single-card mutation either fully applies or not at all
//!
//! ## Request Types
//!
//! [`NewCard`], [`CardPatch`] and [`StatusChange`] are the raw shapes a transport
//! decodes from request bodies. Status values arrive as strings and are parsed here,
//! and unknown keys in a body are dropped. Update bodies go through
//! [`CardPatch::from_value`]: a key that is present counts, even when its value is
//! `null`, so a present key with a non-string value is a validation error.
//!
//! ## Command Modules
//!
//! - [`list`]: All cards, optionally filtered, grouped by column
//! - [`get`]: One card by id
//! - [`create`]: Create a card at the end of the collection
//! - [`update`]: Partial update of one card
//! - [`delete`]: Remove a card
//! - [`batch`]: Best-effort status changes for drag-and-drop
//! - [`helpers`]: Shared utilities (id and status parsing)
//!
//! [`CardStore`]: crate::store::CardStore

use crate::error::{KanbanError, Result};
use crate::model::{CardSnapshot, CardStatus, CardUpdate};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod batch;
pub mod create;
pub mod delete;
pub mod get;
pub mod helpers;
pub mod list;
pub mod update;

pub use list::GroupedCards;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Cards created, changed or removed by the operation
    pub affected_cards: Vec<CardSnapshot>,
    /// Cards returned by a read
    pub listed_cards: Vec<CardSnapshot>,
    /// Per-column view of `listed_cards`, filled by `list`
    pub grouped: Option<GroupedCards>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cards(mut self, cards: Vec<CardSnapshot>) -> Self {
        self.affected_cards = cards;
        self
    }

    pub fn with_listed_cards(mut self, cards: Vec<CardSnapshot>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_grouped(mut self, grouped: GroupedCards) -> Self {
        self.grouped = Some(grouped);
        self
    }

    /// Number of cards a read returned.
    pub fn total(&self) -> usize {
        self.listed_cards.len()
    }
}

/// Body of a create request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCard {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl NewCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Body of an update request. Only `title`, `description` and `status` are read;
/// any other key is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl CardPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a raw update body. The body must be an object; each allowed key that is
    /// present must hold a string (`null` included in the rejection).
    pub fn from_value(body: &Value) -> Result<Self> {
        let fields = body
            .as_object()
            .ok_or_else(|| KanbanError::Validation("update body must be an object".to_string()))?;

        Ok(Self {
            title: string_field(fields, "title")?,
            description: string_field(fields, "description")?,
            status: string_field(fields, "status")?,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Parses the raw status into a typed update. Fails on an unknown status.
    pub fn to_update(&self) -> Result<CardUpdate> {
        let status = match &self.status {
            Some(raw) => Some(raw.parse::<CardStatus>()?),
            None => None,
        };
        Ok(CardUpdate {
            title: self.title.clone(),
            description: self.description.clone(),
            status,
        })
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match fields.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(KanbanError::Validation(format!(
            "Invalid {}: expected a string, got {}",
            key, other
        ))),
    }
}

/// One `{id, status}` pair of a batch status update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusChange {
    pub id: String,
    pub status: String,
}

impl StatusChange {
    pub fn new(id: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn patch_ignores_unknown_keys() {
        let patch = CardPatch::from_value(&json!({"id": "other", "foo": 1})).unwrap();
        assert_eq!(patch, CardPatch::default());
        assert!(patch.to_update().unwrap().is_empty());
    }

    #[test]
    fn patch_keeps_empty_strings_as_present() {
        let patch = CardPatch::from_value(&json!({"description": ""})).unwrap();
        let update = patch.to_update().unwrap();
        assert_eq!(update.description.as_deref(), Some(""));
        assert!(update.title.is_none());
    }

    #[test]
    fn patch_rejects_present_null() {
        for body in [
            json!({"status": null}),
            json!({"title": null}),
            json!({"description": null}),
        ] {
            assert!(CardPatch::from_value(&body).unwrap_err().is_validation());
        }
    }

    #[test]
    fn patch_rejects_non_string_fields() {
        for body in [
            json!({"status": 5}),
            json!({"title": ["a"]}),
            json!({"description": {"text": "x"}}),
        ] {
            assert!(matches!(
                CardPatch::from_value(&body),
                Err(KanbanError::Validation(_))
            ));
        }
    }

    #[test]
    fn patch_body_must_be_an_object() {
        for body in [json!(null), json!("title"), json!([{"title": "x"}])] {
            assert!(CardPatch::from_value(&body).unwrap_err().is_validation());
        }
    }

    #[test]
    fn patch_reads_allowed_fields() {
        let patch =
            CardPatch::from_value(&json!({"title": "T", "status": "done", "foo": null})).unwrap();
        assert_eq!(patch, CardPatch::new().with_title("T").with_status("done"));
    }

    #[test]
    fn patch_rejects_unknown_status() {
        let patch = CardPatch::new().with_status("bogus");
        assert!(matches!(
            patch.to_update(),
            Err(KanbanError::Validation(_))
        ));
    }

    #[test]
    fn new_card_defaults_missing_fields() {
        let new_card: NewCard = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(new_card.title, "");
        assert!(new_card.description.is_none());
        assert!(new_card.status.is_none());
    }

    #[test]
    fn cmd_result_total_counts_listed_cards() {
        let result = CmdResult::default();
        assert_eq!(result.total(), 0);
    }
}
