use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Card, CardSnapshot, CardStatus};
use crate::store::CardStore;
use serde::{Deserialize, Serialize};

use super::helpers::parse_status_filter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardFilter {
    /// Only cards in this column. None means all columns.
    pub status: Option<CardStatus>,
}

impl CardFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn status(status: CardStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// Builds a filter from a raw `?status=` query value. Empty or unknown values
    /// disable filtering instead of failing.
    pub fn from_query(raw: Option<&str>) -> Self {
        Self {
            status: parse_status_filter(raw),
        }
    }

    fn matches(&self, card: &Card) -> bool {
        self.status.map_or(true, |status| card.status() == status)
    }
}

/// Cards split into one bucket per column, as the board renders them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedCards {
    pub todo: Vec<CardSnapshot>,
    pub in_progress: Vec<CardSnapshot>,
    pub in_review: Vec<CardSnapshot>,
    pub done: Vec<CardSnapshot>,
}

impl GroupedCards {
    pub fn from_snapshots(cards: &[CardSnapshot]) -> Self {
        let mut grouped = Self::default();
        for card in cards {
            grouped.bucket_mut(card.status).push(card.clone());
        }
        grouped
    }

    pub fn bucket(&self, status: CardStatus) -> &[CardSnapshot] {
        match status {
            CardStatus::Todo => &self.todo,
            CardStatus::InProgress => &self.in_progress,
            CardStatus::InReview => &self.in_review,
            CardStatus::Done => &self.done,
        }
    }

    fn bucket_mut(&mut self, status: CardStatus) -> &mut Vec<CardSnapshot> {
        match status {
            CardStatus::Todo => &mut self.todo,
            CardStatus::InProgress => &mut self.in_progress,
            CardStatus::InReview => &mut self.in_review,
            CardStatus::Done => &mut self.done,
        }
    }

    pub fn len(&self) -> usize {
        CardStatus::ALL.iter().map(|s| self.bucket(*s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn run<S: CardStore>(store: &S, filter: CardFilter) -> Result<CmdResult> {
    let listed: Vec<CardSnapshot> = store
        .list_cards()?
        .iter()
        .filter(|card| filter.matches(card))
        .map(Card::to_snapshot)
        .collect();
    let grouped = GroupedCards::from_snapshots(&listed);

    Ok(CmdResult::default()
        .with_listed_cards(listed)
        .with_grouped(grouped))
}
