//! # Batch Status Update
//!
//! Moves many cards between columns in one call. This backs the drag-and-drop gesture:
//! by the time the request arrives the UI has already moved the cards, so one stale id
//! must not fail the whole gesture.
//!
//! Each pair is handled on its own, in input order:
//! - unknown or malformed id: skipped
//! - status outside the four columns: skipped
//! - otherwise the card's status is set and its snapshot is returned
//!
//! Skips are not errors. The result reports how many cards moved, not which pairs
//! were dropped.

use crate::commands::{CmdMessage, CmdResult, StatusChange};
use crate::error::Result;
use crate::model::{CardStatus, CardUpdate};
use crate::store::CardStore;
use log::debug;

use super::helpers::parse_card_id;

pub fn run<S: CardStore>(store: &mut S, changes: &[StatusChange]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for change in changes {
        let Ok(id) = parse_card_id(&change.id) else {
            debug!("batch: skipping malformed id {:?}", change.id);
            continue;
        };
        let Ok(status) = change.status.parse::<CardStatus>() else {
            debug!("batch: skipping card {} with invalid status", id);
            continue;
        };
        let mut card = match store.get_card(&id) {
            Ok(card) => card,
            Err(e) if e.is_not_found() => {
                debug!("batch: skipping unknown card {}", id);
                continue;
            }
            Err(e) => return Err(e),
        };

        card.apply_update(&CardUpdate::new().with_status(status))?;
        store.save_card(&card)?;
        debug!("batch: moved card {} to {}", id, status);
        result.affected_cards.push(card.to_snapshot());
    }

    let moved = result.affected_cards.len();
    let skipped = changes.len() - moved;
    result.add_message(CmdMessage::success(format!(
        "Updated {} {}",
        moved,
        plural(moved, "card", "cards")
    )));
    if skipped > 0 {
        result.add_message(CmdMessage::info(format!(
            "Skipped {} {}",
            skipped,
            plural(skipped, "update", "updates")
        )));
    }
    Ok(result)
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
