use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KanbanError, Result};
use crate::model::{Card, CardStatus};
use crate::store::CardStore;
use log::debug;

pub fn run<S: CardStore>(
    store: &mut S,
    title: &str,
    description: Option<String>,
    status: CardStatus,
) -> Result<CmdResult> {
    if title.trim().is_empty() {
        return Err(KanbanError::Validation(
            "Card title cannot be empty".to_string(),
        ));
    }

    let card = Card::new(title, description.unwrap_or_default(), status);
    card.validate()?;
    store.save_card(&card)?;
    debug!("created card {} in {}", card.id(), card.status());

    let mut result = CmdResult::default();
    result.affected_cards.push(card.to_snapshot());
    result.add_message(CmdMessage::success("Card created"));
    Ok(result)
}
