use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::CardStore;
use uuid::Uuid;

pub fn run<S: CardStore>(store: &S, id: &Uuid) -> Result<CmdResult> {
    let card = store.get_card(id)?;
    Ok(CmdResult::default().with_listed_cards(vec![card.to_snapshot()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KanbanError;
    use crate::model::CardStatus;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn returns_matching_card() {
        let fixture = StoreFixture::new()
            .with_card("One", CardStatus::Todo)
            .with_card("Two", CardStatus::InReview);
        let id = fixture.id_of("Two");

        let result = run(&fixture.store, &id).unwrap();
        assert_eq!(result.listed_cards.len(), 1);
        assert_eq!(result.listed_cards[0].id, id);
        assert_eq!(result.listed_cards[0].status, CardStatus::InReview);
        assert_eq!(result.listed_cards[0].status_label, "待驗收");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let fixture = StoreFixture::new().with_card("One", CardStatus::Todo);
        let id = Uuid::new_v4();
        assert_eq!(
            run(&fixture.store, &id).unwrap_err(),
            KanbanError::CardNotFound(id.to_string())
        );
    }
}
