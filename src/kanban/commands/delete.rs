use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CardStore;
use log::debug;
use uuid::Uuid;

pub fn run<S: CardStore>(store: &mut S, id: &Uuid) -> Result<CmdResult> {
    let card = store.delete_card(id)?;
    debug!("deleted card {}", card.id());

    let mut result = CmdResult::default();
    result.affected_cards.push(card.to_snapshot());
    result.add_message(CmdMessage::success("Card deleted"));
    Ok(result)
}
