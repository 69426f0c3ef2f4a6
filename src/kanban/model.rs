//! # Domain Model: Cards and Status Columns
//!
//! This module defines the core data structures for kanban: [`Card`], [`CardStatus`],
//! [`CardUpdate`] and the external [`CardSnapshot`].
//!
//! ## Status Workflow
//!
//! A card always sits in exactly one of four columns:
//!
//! ```text
//! todo ── inProgress ── inReview ── done
//! ```
//!
//! The set is flat: any status may move to any other directly. There is no terminal
//! state and no transition graph. New cards start in `todo` unless told otherwise.
//!
//! ## Live Entity vs Snapshot
//!
//! [`Card`] is the live, mutable entity owned by the store. Its fields are private so
//! that the only way to change a card is [`Card::apply_update`], which validates the
//! proposed state before committing it.
//!
//! Callers never see a `Card`. Every operation hands back a [`CardSnapshot`], a detached
//! copy carrying the derived `statusLabel`. Mutating a snapshot cannot affect the store.
//!
//! ## Partial Updates
//!
//! [`CardUpdate`] has one `Option` per editable field:
//! - `None` leaves the field untouched.
//! - `Some(value)` overwrites it, including `Some(String::new())`.
//!
//! Only `title`, `description` and `status` are editable. `id` and `created_at` are
//! fixed for the lifetime of the card.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{KanbanError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CardStatus {
    Todo,
    InProgress,
    InReview,
    Done,
}

impl Default for CardStatus {
    fn default() -> Self {
        Self::Todo
    }
}

impl CardStatus {
    /// All statuses, in board column order.
    pub const ALL: [CardStatus; 4] = [
        CardStatus::Todo,
        CardStatus::InProgress,
        CardStatus::InReview,
        CardStatus::Done,
    ];

    /// Wire name, as used in requests and snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardStatus::Todo => "todo",
            CardStatus::InProgress => "inProgress",
            CardStatus::InReview => "inReview",
            CardStatus::Done => "done",
        }
    }

    /// Column heading shown by the board UI.
    pub fn label(&self) -> &'static str {
        match self {
            CardStatus::Todo => "待處理",
            CardStatus::InProgress => "進行中",
            CardStatus::InReview => "待驗收",
            CardStatus::Done => "已完成",
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardStatus {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self> {
        CardStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| KanbanError::Validation(format!("Invalid status: {}", s)))
    }
}

/// The live card entity. Only the store holds these.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    id: Uuid,
    title: String,
    description: String,
    status: CardStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Card {
    /// Builds a card with a fresh id. The title is trimmed but not validated;
    /// call [`Card::validate`] before handing the card to a store.
    pub fn new(title: &str, description: String, status: CardStatus) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            description,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> CardStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn status_label(&self) -> &'static str {
        self.status.label()
    }

    /// Checks the structural invariants of the card. Pure, no side effects.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(KanbanError::Validation(
                "Card title cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies the present fields of `update` all at once.
    ///
    /// The next state is validated before it replaces the current one, so a rejected
    /// update leaves the card exactly as it was.
    pub fn apply_update(&mut self, update: &CardUpdate) -> Result<&mut Self> {
        let mut next = self.clone();
        if let Some(title) = &update.title {
            next.title = title.clone();
        }
        if let Some(description) = &update.description {
            next.description = description.clone();
        }
        if let Some(status) = update.status {
            next.status = status;
        }
        next.validate()?;

        // Clamp so a clock step backwards never makes updated_at go down
        next.updated_at = Utc::now().max(self.updated_at);
        *self = next;
        Ok(self)
    }

    pub fn to_snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            status_label: self.status_label().to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Detached external view of a card, as returned by every operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSnapshot {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: CardStatus,
    pub status_label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Typed partial update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CardStatus>,
}

impl CardUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_status(mut self, status: CardStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_trims_title_and_defaults() {
        let card = Card::new("  Write docs  ", String::new(), CardStatus::default());
        assert_eq!(card.title(), "Write docs");
        assert_eq!(card.description(), "");
        assert_eq!(card.status(), CardStatus::Todo);
        assert_eq!(card.created_at(), card.updated_at());
    }

    #[test]
    fn new_cards_get_distinct_ids() {
        let a = Card::new("A", String::new(), CardStatus::Todo);
        let b = Card::new("A", String::new(), CardStatus::Todo);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn construct_does_not_validate() {
        let card = Card::new("   ", String::new(), CardStatus::Todo);
        assert_eq!(card.title(), "");
        assert!(matches!(card.validate(), Err(KanbanError::Validation(_))));
    }

    #[test]
    fn status_parses_wire_names_only() {
        assert_eq!("todo".parse::<CardStatus>().unwrap(), CardStatus::Todo);
        assert_eq!(
            "inProgress".parse::<CardStatus>().unwrap(),
            CardStatus::InProgress
        );
        assert_eq!(
            "inReview".parse::<CardStatus>().unwrap(),
            CardStatus::InReview
        );
        assert_eq!("done".parse::<CardStatus>().unwrap(), CardStatus::Done);

        for bad in ["bogus", "Done", "in_progress", ""] {
            assert!(matches!(
                bad.parse::<CardStatus>(),
                Err(KanbanError::Validation(_))
            ));
        }
    }

    #[test]
    fn every_status_has_a_label() {
        for status in CardStatus::ALL {
            assert!(!status.label().is_empty());
        }
        assert_eq!(CardStatus::InReview.label(), "待驗收");
    }

    #[test]
    fn status_serializes_as_camel_case() {
        let json = serde_json::to_string(&CardStatus::InProgress).unwrap();
        assert_eq!(json, "\"inProgress\"");
        let back: CardStatus = serde_json::from_str("\"inReview\"").unwrap();
        assert_eq!(back, CardStatus::InReview);
    }

    #[test]
    fn apply_update_overwrites_present_fields() {
        let mut card = Card::new("Old", "desc".into(), CardStatus::Todo);
        let created = card.created_at();
        let before = card.updated_at();

        card.apply_update(
            &CardUpdate::new()
                .with_title("New")
                .with_status(CardStatus::InReview),
        )
        .unwrap();

        assert_eq!(card.title(), "New");
        assert_eq!(card.description(), "desc");
        assert_eq!(card.status(), CardStatus::InReview);
        assert_eq!(card.created_at(), created);
        assert!(card.updated_at() >= before);
    }

    #[test]
    fn apply_update_empty_description_overwrites() {
        let mut card = Card::new("Title", "something".into(), CardStatus::Todo);
        card.apply_update(&CardUpdate::new().with_description(""))
            .unwrap();
        assert_eq!(card.description(), "");
    }

    #[test]
    fn rejected_update_commits_nothing() {
        let mut card = Card::new("Keep me", "desc".into(), CardStatus::Todo);
        let original = card.clone();

        let result = card.apply_update(
            &CardUpdate::new()
                .with_title("   ")
                .with_status(CardStatus::Done),
        );

        assert!(matches!(result, Err(KanbanError::Validation(_))));
        assert_eq!(card, original);
    }

    #[test]
    fn empty_update_only_touches_updated_at() {
        let mut card = Card::new("Title", "d".into(), CardStatus::InProgress);
        let before = card.clone();
        card.apply_update(&CardUpdate::new()).unwrap();

        assert_eq!(card.id(), before.id());
        assert_eq!(card.title(), before.title());
        assert_eq!(card.description(), before.description());
        assert_eq!(card.status(), before.status());
        assert_eq!(card.created_at(), before.created_at());
        assert!(card.updated_at() >= before.updated_at());
    }

    #[test]
    fn snapshot_carries_label_and_camel_case_keys() {
        let card = Card::new("Ship it", "now".into(), CardStatus::Done);
        let snapshot = card.to_snapshot();
        assert_eq!(snapshot.status_label, "已完成");

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["id"], card.id().to_string());
        assert_eq!(value["status"], "done");
        assert_eq!(value["statusLabel"], "已完成");
        assert!(value["createdAt"].is_string());
        assert!(value["updatedAt"].is_string());
    }

    #[test]
    fn snapshot_is_detached_from_card() {
        let card = Card::new("Original", String::new(), CardStatus::Todo);
        let mut snapshot = card.to_snapshot();
        snapshot.title = "Tampered".into();
        assert_eq!(card.title(), "Original");
    }
}
