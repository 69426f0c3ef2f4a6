use crate::commands::{CardPatch, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;
use log::debug;
use uuid::Uuid;

/// Applies `patch` to one card. The card is looked up first, so an unknown id is
/// reported as not found even when the patch itself is invalid.
pub fn run<S: CardStore>(store: &mut S, id: &Uuid, patch: &CardPatch) -> Result<CmdResult> {
    let mut card = store.get_card(id)?;
    let update = patch.to_update()?;
    card.apply_update(&update)?;
    store.save_card(&card)?;
    debug!("updated card {} (status {})", card.id(), card.status());

    let mut result = CmdResult::default();
    result.affected_cards.push(card.to_snapshot());
    result.add_message(CmdMessage::success("Card updated"));
    Ok(result)
}
