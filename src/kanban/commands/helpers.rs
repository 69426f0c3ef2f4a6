use crate::error::{KanbanError, Result};
use crate::model::CardStatus;
use uuid::Uuid;

/// Resolves a caller-supplied id. Ids match exactly, so only the lowercase hyphenated
/// form a card is created with can name it. Anything else is reported as not found
/// rather than as bad input.
pub fn parse_card_id(raw: &str) -> Result<Uuid> {
    match Uuid::parse_str(raw) {
        Ok(id) if id.hyphenated().to_string() == raw => Ok(id),
        _ => Err(KanbanError::CardNotFound(raw.to_string())),
    }
}

/// Status for a new card: missing or empty means the default column.
pub fn parse_status_or_default(raw: Option<&str>) -> Result<CardStatus> {
    match raw {
        None | Some("") => Ok(CardStatus::default()),
        Some(s) => s.parse(),
    }
}

/// Lenient status parsing for list filters: anything unrecognized means "no filter".
pub fn parse_status_filter(raw: Option<&str>) -> Option<CardStatus> {
    raw.and_then(|s| s.parse().ok())
}
